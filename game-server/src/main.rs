use std::sync::Arc;

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::signal;
use tracing::info;

use game_persistence::connection::connect_and_migrate;
use game_server::{
    catalog::golfer_source_from_config, config::Config, create_routes, game_manager::GameManager,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting golf wordle server...");

    let config = Config::from_env().context("Failed to load configuration")?;
    info!("Golfer catalog source: {:?}", config.golfer_source);

    // Initialize database connection and run migrations
    let db = connect_and_migrate(&config.database_url)
        .await
        .context("Failed to connect to database and run migrations")?;

    let rng = match config.rng_seed {
        Some(seed) => {
            info!("Using fixed puzzle selection seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let golfers = golfer_source_from_config(&config.golfer_source);
    let game_manager = Arc::new(GameManager::new(db, golfers, rng));
    let routes = create_routes(game_manager);

    info!("Server starting on {}", config.socket_addr());

    #[cfg(unix)]
    let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt())
        .context("Failed to install SIGINT handler")?;
    #[cfg(unix)]
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
        .context("Failed to install SIGTERM handler")?;

    let (addr, server) = warp::serve(routes)
        .try_bind_with_graceful_shutdown(config.socket_addr(), async move {
            // Wait for SIGINT (Ctrl+C) or SIGTERM
            #[cfg(unix)]
            {
                tokio::select! {
                    _ = sigint.recv() => {
                        info!("Received SIGINT, shutting down gracefully...");
                    }
                    _ = sigterm.recv() => {
                        info!("Received SIGTERM, shutting down gracefully...");
                    }
                }
            }

            #[cfg(not(unix))]
            {
                if let Err(err) = signal::ctrl_c().await {
                    tracing::error!("Failed to listen for ctrl+c: {}", err);
                }
                info!("Received Ctrl+C, shutting down gracefully...");
            }
        })
        .context("Failed to bind server address")?;

    info!("Server started successfully on {}. Press Ctrl+C to stop.", addr);
    server.await;
    info!("Server shutdown complete.");
    Ok(())
}
