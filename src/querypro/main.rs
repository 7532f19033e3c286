use clap::Parser;
use querypro::config::QueryProConfig;
use querypro::error::Result;
use querypro::logging;

mod args;
mod cli;
use args::{Cli, Commands};

#[tokio::main]
async fn main() {
    match run().await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns whether the command succeeded. Failures that were already reported
/// as notifications come back as `Ok(false)`.
async fn run() -> Result<bool> {
    let cli = Cli::parse();

    let level = match cli.command {
        Commands::Serve { .. } => "info",
        _ => "warn",
    };
    logging::init(logging::json_requested(), level);

    let mut config = QueryProConfig::resolve()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }

    match cli.command {
        Commands::Serve { bind, data_dir } => cli::handle_serve(config, bind, data_dir).await,
        Commands::List { search } => cli::handle_list(&config, search).await,
        Commands::Submit {
            name,
            email,
            phone,
            message,
            id,
        } => {
            let form = cli::SubmitForm {
                name,
                email,
                phone,
                message,
            };
            cli::handle_submit(&config, form, id).await
        }
        Commands::Show { id } => cli::handle_show(&config, &id).await,
        Commands::Delete { id } => cli::handle_delete(&config, &id).await,
    }
}
