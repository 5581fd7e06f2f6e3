mod cli;
mod climate;
mod deserialise;
mod par;
mod reading;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Convert(args) => match command::convert(args).await {
            Ok(filename) => {
                println!("File saved to `{}`", filename);
                println!("Station name, id, coordinates and elevation may need editing by hand");
            }
            Err(e) => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
