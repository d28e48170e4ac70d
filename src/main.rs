use crate::config::Config;
use crate::router::{handle, Site};
use astra::Server;
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // Listings and their option lists are built once and shared read-only.
    let site = Site::default();
    tracing::info!(
        listings = site.filter().listings().len(),
        "Starting server at http://{}",
        config.addr
    );

    let server = Server::bind(config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &site) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(status = err.status(), "{err}");
            responses::html_error_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
        std::process::exit(1);
    }

    tracing::info!("Server shut down cleanly.");
}
