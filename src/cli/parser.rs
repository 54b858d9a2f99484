use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rBikeshare
/// CLI application to explore US bikeshare trip data
#[derive(Parser)]
#[command(
    name = "rbikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: popular times, stations, trip durations and user stats",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding the city CSV files
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Do not print how long each report took
    #[arg(global = true, long = "no-timing")]
    pub no_timing: bool,

    /// Defaults to `explore` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive session: choose a city and filters, read the statistics
    Explore,

    /// Print the statistics for one city without prompting
    Stats {
        /// City: chicago, "new york city" or washington
        #[arg(long)]
        city: String,

        /// Month: january..june, or all
        #[arg(long, default_value = "all")]
        month: String,

        /// Day of week: monday..sunday, or all
        #[arg(long, default_value = "all")]
        day: String,

        /// Also print this many random sample rows
        #[arg(
            long,
            value_name = "N",
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        sample: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "init",
            help = "Write the default configuration file (keeps an existing one unless --force)"
        )]
        init: bool,

        #[arg(long, short = 'f', requires = "init")]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
