mod cli;
mod config;
mod error;
mod lims;
mod store;

use clap::Parser;
use cli::{CatalogCommand, CentersCommand, Cli, Command, ReportCommand};

use crate::lims::LimsClient;
use crate::store::ReportStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let store_path = config::store_path()?;
    let store = ReportStore::open(&store_path)?;
    let client = LimsClient::new(config::api_base_url())?;

    match cli.command {
        Command::Catalog { command } => match command {
            CatalogCommand::List { token } => {
                cli::catalog::list_catalog(&client, token.as_deref()).await?
            }
        },
        Command::Centers { command } => match command {
            CentersCommand::List => cli::centers::list_centers(&client).await?,
        },
        Command::Report { command } => match command {
            ReportCommand::Create {
                title,
                content,
                date,
                admin,
            } => cli::report::create_report(&store, &title, &content, date.as_deref(), admin)?,
            ReportCommand::Show { id } => cli::report::show_report(&store, &id)?,
            ReportCommand::Delete { id } => cli::report::delete_report(&store, &id)?,
        },
    }

    Ok(())
}
