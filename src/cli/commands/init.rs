use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli.config.clone().unwrap_or_else(Config::config_file);

    if Config::init_file(&path)? {
        success(format!("Config file: {}", path.display()));
    } else {
        warning(format!(
            "Config file already exists, left untouched: {}",
            path.display()
        ));
    }

    Ok(())
}
