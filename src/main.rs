#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod db;
mod prelude;
mod quantity;
mod record;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Mode},
    db::Db,
    prelude::*,
    record::{price, usage},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let mode = args.mode()?;
    let db = Db::new(&args.influx);

    match mode {
        Mode::Price => price::run(&args.flick, &db).await?,
        Mode::UsageSimple => usage::run_simple(&args, &db).await?,
        Mode::UsageDetailed => usage::run_detailed(&args, &db).await?,
    }

    info!("done!");
    Ok(())
}
