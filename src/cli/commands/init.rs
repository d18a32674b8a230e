use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::resolve_path(cli.config.as_deref());

    println!("⚙️  Initializing aubconv…");

    if Config::init(&path, cli.test)? {
        success(format!("Config file created: {}", path.display()));
    } else if cli.test {
        info("Test mode: configuration file not written.");
    } else {
        info(format!("Config file already present: {}", path.display()));
    }

    Ok(())
}
