use clap::Parser;
use dotenv::dotenv;
use parley::run_with_config_path;

/// parley - a terminal chat client for OpenAI-compatible completion APIs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from `.env` file into std::env (optional)
    dotenv().ok();

    let args = Args::parse();

    run_with_config_path(&args.config).await
}
