// CLI module for blazerize

use clap::Parser;

/// blazerize - photo uploads in, orange-blazer portraits out
#[derive(Parser, Debug)]
#[command(name = "blazerize", version, about, long_about = None)]
pub struct Args {
    /// Bind address (overrides configuration)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (overrides configuration)
    #[arg(long)]
    pub port: Option<u16>,

    /// Public base URL advertised in the miniapp manifest
    #[arg(long, env = "PUBLIC_URL")]
    pub public_url: Option<String>,
}
