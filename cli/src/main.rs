mod cli;
mod error;
mod logging;
mod session;

use crate::cli::Cli;
use crate::error::Result;
use crate::session::Session;
use clap::Parser;
use log::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet)?;

    info!("Image Pixel Sorter v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let mut session = Session::new();
    session.load(&cli.input)?;
    debug!("Loaded, sort enabled: {}.", session.can_sort());
    session.sort()?;
    debug!("Sorted, save enabled: {}.", session.can_save());
    let path = session.save(&cli.out_dir, &cli.name)?;

    println!("Image saved successfully! {}", path.display());
    Ok(())
}
