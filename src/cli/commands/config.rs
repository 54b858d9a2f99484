use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = cmd
    {
        let path = Config::config_file();

        // ---- INIT CONFIG ----
        if *init {
            if path.exists() && !*force {
                warning(format!(
                    "Configuration file already exists: {} (use --force to overwrite)",
                    path.display()
                ));
            } else {
                let written = Config::default().save()?;
                success(format!("Config file: {}", written.display()));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            print!("{}", cfg.to_yaml()?);
        }

        if !*init && !*print_config {
            info(format!("Configuration file: {}", path.display()));
        }
    }

    Ok(())
}
