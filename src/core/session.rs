//! The interactive exploration loop:
//! filters → load → reports → sample rows → restart?

use super::prompt::Prompter;
use super::resolver::get_filters;
use super::sample::{render_sample, sample_rows};
use crate::data::load_data;
use crate::errors::{AppError, AppResult};
use crate::models::TripTable;
use crate::ui::banner;
use crate::ui::report::{NO_DATA, print_reports};
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

pub const SAMPLE_PROMPT: &str = "Would you like to see sample data?  Yes or No: ";
pub const INVALID_SAMPLE_ANSWER: &str = "Invalid Input, please enter Yes or No";
pub const RESTART_PROMPT: &str = "\nPlease enter yes to restart, otherwise program will end: ";

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub data_dir: PathBuf,
    pub sample_size: usize,
    pub show_timing: bool,
}

pub fn run_session<R, W, G>(
    p: &mut Prompter<R, W>,
    opts: &SessionOptions,
    rng: &mut G,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    banner::welcome(p.output())?;

    let mut round = 0usize;
    loop {
        round += 1;
        info!(round, "starting exploration round");

        match explore_once(p, opts, rng) {
            Ok(true) => continue,
            Ok(false) | Err(AppError::InputClosed) => break,
            Err(e) => return Err(e),
        }
    }

    banner::goodbye(p.output())?;
    Ok(())
}

/// One full pass. Returns whether the user asked to restart.
fn explore_once<R, W, G>(p: &mut Prompter<R, W>, opts: &SessionOptions, rng: &mut G) -> AppResult<bool>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let filter = get_filters(p)?;
    let table = load_data(&opts.data_dir, &filter)?;

    print_reports(p.output(), &table, opts.show_timing)?;
    offer_samples(p, &table, opts.sample_size, rng)?;

    Ok(p.ask(RESTART_PROMPT)? == "yes")
}

fn offer_samples<R, W, G>(
    p: &mut Prompter<R, W>,
    table: &TripTable,
    sample_size: usize,
    rng: &mut G,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    loop {
        match p.ask(SAMPLE_PROMPT)?.as_str() {
            "yes" => {
                if table.is_empty() {
                    p.say(NO_DATA)?;
                } else {
                    let rows = sample_rows(table, sample_size.max(1), rng);
                    write!(p.output(), "{}", render_sample(table, &rows))?;
                }
            }
            "no" => return Ok(()),
            _ => {
                p.say(INVALID_SAMPLE_ANSWER)?;
                p.say("")?;
            }
        }
    }
}
