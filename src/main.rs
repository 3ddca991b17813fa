mod catalog;
mod export;
mod fetcher;
mod models;
mod transform;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about = "CLI to get list of products from store in Shopee")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Retrieve list of products of a store in Shopee
    GetProduct {
        /// Shopee's shop id (numeric)
        shop_id: u64,
        /// Name of the output file, without the .csv extension
        file_name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::GetProduct { shop_id, file_name } => {
            let fetcher = fetcher::HttpPageFetcher::new()?;
            let out_dir = std::env::current_dir()?;
            let mut stdout = std::io::stdout();
            export::export_store_catalog(&fetcher, shop_id, &file_name, &out_dir, &mut stdout)?;
        }
    }
    Ok(())
}
