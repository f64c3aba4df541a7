//! CLI entry point running one contribution graph cycle

use clap::Parser;
use graphart::io::cli::{Cli, Runner};
use graphart::io::logging::init_logging;

fn main() -> graphart::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let runner = Runner::new(cli);
    let response = runner.run()?;

    // The handler payload is the program's output
    #[allow(clippy::print_stdout)]
    {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }
    Ok(())
}
