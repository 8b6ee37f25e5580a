mod args;

use crate::args::{Args, Command};
use blogdex::cmd;
use blogdex::config::Config;
use blogdex::Result;
use clap::Parser;
use std::io;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = Config::load(args.config.as_path())?;
    log::debug!("{:?}", args);
    log::debug!("{:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::List => cmd::list(&config, &mut out),
        Command::Show { slug, html } => cmd::show(&config, slug.as_str(), html, &mut out),
        Command::Build => cmd::build(&config),
        Command::Clean => cmd::clean(&config),
        Command::Watch => cmd::watch(&config),
    }
}
