use clap::Parser;
use dotenvy::dotenv;
use rollbook::cli::Cli;
use rollbook::logging::init_tracing;
use rollbook::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    let state = match init_app_state() {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("startup failed: {}", e);
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = rollbook::cli::run(cli, &state).await {
        tracing::error!("command failed: {}", e);
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
}
