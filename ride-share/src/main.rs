use ride_share::config::ServerConfig;
use ride_share::repository::RideShare;
use ride_share::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    // Load once; the API is read-only
    let ride_share = match RideShare::load(&config.data_dir) {
        Ok(rs) => rs,
        Err(e) => {
            error!(error = %e, dir = %config.data_dir.display(), "failed to load data");
            std::process::exit(1);
        }
    };

    let app = create_router(AppState::new(ride_share));

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, addr = %config.addr, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.addr, "ride-share reporting API listening");
    println!("Endpoints:");
    println!("  GET  /health");
    println!("  GET  /drivers");
    println!("  GET  /drivers/:id");
    println!("  GET  /drivers/:id/trips");
    println!("  GET  /passengers");
    println!("  GET  /passengers/:id");
    println!("  GET  /passengers/:id/trips");
    println!("  GET  /trips/:id");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        std::process::exit(1);
    }
}
