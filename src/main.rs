use clap::Parser;
use labelkit::cli::{run, Cli};
use labelkit::init_logging;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let cli = Cli::parse();
    tracing::debug!("labelkit {} (built {})", labelkit::VERSION, labelkit::BUILD_DATE);
    run(cli)
}
