use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use finquest_core::model::{AssetCategory, Career, CategoryAmounts};
use jiff::civil::Date;

#[derive(Parser, Debug)]
#[command(name = "finquest")]
#[command(about = "Grow a simulated salary into five million, one month at a time")]
pub struct Args {
    /// Path to the data directory (default: ~/.finquest/)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error); overrides config.yaml
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Save slot to play (default: the active slot in config.yaml)
    #[arg(short, long, global = true)]
    pub slot: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Start a new game in the current slot
    New {
        #[arg(long)]
        name: String,

        #[arg(long, value_enum, default_value_t = CareerArg::Engineer)]
        career: CareerArg,

        /// Monthly salary (default: career preset)
        #[arg(long)]
        salary: Option<f64>,

        /// Monthly expenses (default: career preset)
        #[arg(long)]
        expenses: Option<f64>,

        /// Overwrite an existing game in this slot
        #[arg(long)]
        force: bool,
    },

    /// Show cash, portfolio, and progress
    Status,

    /// Invest this month's cash and close the month
    Invest(CategoryArgs),

    /// Close the month without investing
    Skip,

    /// Record today's login
    Login {
        /// Login date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<Date>,
    },

    /// List achievements
    Achievements,

    /// Show recent month-end results
    History {
        #[arg(long, default_value_t = 12)]
        last: usize,
    },

    /// Ask the financial mentor a question
    Ask { message: String },

    /// Throw away the current game and start again with the same profile
    Reset,

    /// List save slots
    Slots,

    /// Play many games with a fixed allocation and summarise the outcomes
    Batch {
        #[arg(long, default_value_t = 1000)]
        iterations: usize,

        /// Months per game before giving up
        #[arg(long, default_value_t = 240)]
        months: u32,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long, value_enum, default_value_t = CareerArg::Engineer)]
        career: CareerArg,

        // Fraction of available cash per category each month
        #[command(flatten)]
        fractions: CategoryArgs,
    },
}

/// One value per asset category
#[derive(ClapArgs, Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryArgs {
    #[arg(long, default_value_t = 0.0)]
    pub sip: f64,

    #[arg(long, default_value_t = 0.0)]
    pub stocks: f64,

    #[arg(long, default_value_t = 0.0)]
    pub gold: f64,

    #[arg(long, default_value_t = 0.0)]
    pub real_estate: f64,

    #[arg(long, default_value_t = 0.0)]
    pub savings: f64,
}

impl CategoryArgs {
    pub fn to_amounts(self) -> CategoryAmounts {
        CategoryAmounts::default()
            .with(AssetCategory::Sip, self.sip)
            .with(AssetCategory::Stocks, self.stocks)
            .with(AssetCategory::Gold, self.gold)
            .with(AssetCategory::RealEstate, self.real_estate)
            .with(AssetCategory::Savings, self.savings)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareerArg {
    Engineer,
    Doctor,
    Teacher,
    Designer,
    Entrepreneur,
}

impl From<CareerArg> for Career {
    fn from(arg: CareerArg) -> Self {
        match arg {
            CareerArg::Engineer => Career::Engineer,
            CareerArg::Doctor => Career::Doctor,
            CareerArg::Teacher => Career::Teacher,
            CareerArg::Designer => Career::Designer,
            CareerArg::Entrepreneur => Career::Entrepreneur,
        }
    }
}
