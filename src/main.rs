use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;

mod config;
mod db;
mod domain;
mod errors;
mod imports;
mod logging;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let cfg = AppConfig::from_env();
    logging::init_tracing(&cfg);

    // One handle, cloned into the server closure; each worker opens its own connection.
    let db = Database::new(cfg.db_path.clone());

    if let Err(e) = init_db(&db, &cfg.schema_path) {
        tracing::error!(error = %e, "Database initialization failed");
        std::process::exit(1);
    }

    tracing::info!(addr = %cfg.addr, workers = cfg.max_workers, "Starting server");

    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &db, &cfg) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "Server ended with error");
    }

    tracing::info!("Server shut down cleanly.");
}
