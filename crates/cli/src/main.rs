//! PrimeCart storefront CLI

use std::{process, sync::Arc};

use tracing::error;
use tracing_subscriber::EnvFilter;

use primecart_app::{
    context::AppContext,
    domain::{catalog::service::CatalogConfig, query::CatalogQuery},
    notify::LogNotifier,
};

use crate::config::{Cli, Command};

mod commands;
mod config;

/// PrimeCart CLI entry point
#[tokio::main]
pub async fn main() {
    let cli = Cli::load().unwrap_or_else(|e| e.exit());

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let mut ctx = AppContext::new(
        &cli.data_dir,
        CatalogConfig {
            base_url: cli.api_url,
        },
        Arc::new(LogNotifier),
    );

    if let Err(err) = run(&mut ctx, cli.command).await {
        error!("{err}");
        process::exit(1);
    }
}

async fn run(ctx: &mut AppContext, command: Command) -> Result<(), commands::CommandError> {
    match command {
        Command::Browse {
            search,
            category,
            sort,
            page,
        } => {
            commands::browse::run(
                ctx,
                CatalogQuery {
                    search,
                    category,
                    sort,
                    page,
                },
            )
            .await
        }
        Command::Product { id } => commands::product::run(ctx, id).await,
        Command::Categories => commands::categories::run(ctx).await,
        Command::Cart { command } => commands::cart::run(ctx, command).await,
        Command::Wishlist { command } => commands::wishlist::run(ctx, command).await,
        Command::Checkout(args) => commands::checkout::run(ctx, args).await,
        Command::Theme { theme } => {
            commands::theme::run(ctx, theme);
            Ok(())
        }
    }
}
