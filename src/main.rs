use std::env;

use libsite::{export::export, logging};
use tracing::debug;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init("info")?;

    let args: Vec<String> = env::args().skip(1).collect();
    debug!(?args, "parsed arguments");

    println!("{}", export(&args)?);
    Ok(())
}
