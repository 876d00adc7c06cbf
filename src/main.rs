mod config;
mod desk;
mod models;
mod registry;
mod types;

use std::io::{stderr, stdin, stdout, BufWriter};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::{Args, Settings};
use crate::desk::{replay_file, FrontDesk, Session};

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::from_args(&args)?;

    setup_logging(settings.log_level);

    let mut desk = FrontDesk::new(settings);

    match &args.replay {
        Some(path) => {
            info!("Replaying desk script {}", path.display());
            let mut output = BufWriter::new(stdout().lock());
            replay_file(&mut desk, path, &mut output)?;
        },
        None => {
            let mut session = Session::new(desk, stdin().lock(), stdout().lock());
            session.run()?;
            info!("Served {} customers", session.desk().registry().customers().count());
        }
    }

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the desk dialog, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
