//! Lotweave server
//!
//! Serves the lot tracker API over a CSV backing file.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use lotweave_store::Store;

/// Lotweave — garment production lot tracker
#[derive(Parser, Debug)]
#[command(name = "lotweave")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the CSV backing file
    #[arg(short, long, env = "LOTWEAVE_DATA_FILE", default_value = "lots_db.csv")]
    data_file: PathBuf,

    /// Address to listen on
    #[arg(short, long, env = "LOTWEAVE_LISTEN", default_value = "127.0.0.1:8088")]
    listen: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let store = Store::new(&args.data_file);
    info!(data_file = %args.data_file.display(), "using backing file");

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    info!(listen = %args.listen, "lotweave listening");
    axum::serve(listener, lotweave_web::router(store)).await?;

    Ok(())
}
