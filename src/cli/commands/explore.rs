use crate::config::Config;
use crate::core::prompt::Prompter;
use crate::core::session::{SessionOptions, run_session};
use crate::errors::AppResult;
use std::io;

/// Handle the `explore` command (also the default without a subcommand)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let opts = SessionOptions {
        data_dir: cfg.data_path(),
        sample_size: cfg.sample_size,
        show_timing: cfg.show_timing,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    run_session(&mut prompter, &opts, &mut rand::rng())
}
