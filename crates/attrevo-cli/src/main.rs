mod command;
mod report;
mod summary;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
