mod dto;
mod error;
mod response;
mod router;
mod serve;
mod settings;

use clap::Parser;
use error::AppError;
use settings::{Cli, Settings};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let settings = Settings::try_from(&cli)?;
    init_tracing(&settings);

    match cli.command.into_request(std::io::stdin().lock())? {
        Some(request) => {
            let response = router::handle(&request);
            println!("{}", settings.output.render(&response)?);
            if !response.is_success() {
                return Err(AppError::Status(response.status_code()));
            }
        }
        None => {
            let answered =
                serve::serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;
            tracing::info!("Answered {} requests", answered);
        }
    }

    Ok(())
}

/// Log to stderr so stdout only carries responses.
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
