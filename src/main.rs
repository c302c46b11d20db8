//! # Mini HTTP Server - Entry Point
//! src/main.rs
//!
//! Parsea la configuración, inicializa el logging y arranca el servidor.

use mini_http_server::config::Config;
use mini_http_server::logging;
use mini_http_server::server::Server;
use tracing::{error, info};

fn main() {
    logging::init();

    let config = Config::new();
    if let Err(e) = config.validate() {
        error!("invalid configuration: {}", e);
        std::process::exit(2);
    }

    info!(
        address = %config.address(),
        directory = %config.directory,
        docroot = %config.docroot,
        buffer_size = config.buffer_size,
        sanitize_filenames = config.sanitize_filenames,
        "starting mini_http_server"
    );

    let mut server = Server::new(config);

    // Bloquea el thread principal
    if let Err(e) = server.run() {
        error!(error = %e, "fatal server error");
        std::process::exit(1);
    }
}
