
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::models::WithdrawalLimits;
use crate::types::Monetary;

/// Command line of the front desk.
#[derive(Parser, Debug)]
#[command(name = "bank-front-desk", about = "Interactive retail bank front desk")]
pub struct Args {
    /// Replay a CSV script of desk operations instead of prompting on stdin.
    #[arg(long)]
    pub replay: Option<PathBuf>,

    /// One of: error, warn, info, debug, trace.
    #[arg(long, default_value = "error")]
    pub log_level: String,

    /// Name shown in the menu header.
    #[arg(long, default_value = "XYZ")]
    pub bank_name: String,

    /// Largest amount a single withdrawal may take on new accounts.
    #[arg(long, default_value = "500")]
    pub withdrawal_limit: String,

    /// Withdrawals allowed per account.
    #[arg(long, default_value_t = 3)]
    pub max_withdrawals: u32
}

/// Runtime settings derived from [`Args`].
#[derive(Debug, Clone)]
pub struct Settings {
    pub bank_name: String,
    pub limits: WithdrawalLimits,
    pub log_level: LevelFilter
}

impl Settings {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let per_withdrawal = Monetary::from_str(&args.withdrawal_limit)?;

        if !per_withdrawal.is_positive() {
            anyhow::bail!("Withdrawal limit must be greater than zero, got {per_withdrawal}");
        }

        Ok(Self {
            bank_name: args.bank_name.clone(),
            limits: WithdrawalLimits::new(per_withdrawal, args.max_withdrawals),
            log_level: parse_log_level(&args.log_level)
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bank_name: "XYZ".to_string(),
            limits: WithdrawalLimits::new(Monetary::from(500), 3),
            log_level: LevelFilter::ERROR
        }
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
