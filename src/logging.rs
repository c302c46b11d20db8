//! # Logging
//! src/logging.rs
//!
//! Inicializa `tracing` con salida por consola. El filtro se toma de
//! `RUST_LOG` y, si no está definido, se usa [`DEFAULT_FILTER`].

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "mini_http_server=info";

/// Instala el subscriber global. Llamar una sola vez desde `main`.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
