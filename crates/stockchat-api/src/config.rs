//! Command-line arguments for the service

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "stockchat-api")]
#[command(about = "HTTP service for the stockchat pipeline", long_about = None)]
pub struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub listen: String,
}
