use clap::Parser;
use norfab_api::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Same env handling as the server so both pick up DATABASE_URL
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = norfab_api::cli::run(cli).await {
        match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => eprintln!("Error: {e:?}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }

    Ok(())
}
