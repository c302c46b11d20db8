//! # Comandos del Servidor
//! src/commands/mod.rs
//!
//! Convierte una [`RouteDecision`] en una [`Response`].
//!
//! ## Categorías de comandos
//!
//! - **basic**: echo, user-agent y el chequeo de existencia
//! - **files**: lectura y escritura en el directorio de archivos

pub mod basic;
pub mod files;

pub use basic::*;
pub use files::*;

use crate::http::{Request, Response, StatusCode};
use crate::router::RouteDecision;
use crate::storage::FileStore;

/// Ejecuta decisiones de routing contra el estado del servidor.
///
/// Es inmutable, así que se comparte entre threads con un `Arc`.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    store: FileStore,

    /// Raíz contra la que se resuelven los paths de [`RouteDecision::Exists`]
    docroot: String,
}

impl Dispatcher {
    pub fn new(store: FileStore, docroot: &str) -> Self {
        Self {
            store,
            docroot: docroot.to_string(),
        }
    }

    /// Produce la única respuesta del request
    pub fn dispatch(&self, decision: RouteDecision, req: &Request) -> Response {
        match decision {
            RouteDecision::Echo(payload) => echo_handler(req, &payload),
            RouteDecision::UserAgent => user_agent_handler(req),
            RouteDecision::FileGet(name) => file_get_handler(&self.store, &name),
            RouteDecision::FilePost(name, body) => file_post_handler(&self.store, &name, &body),
            RouteDecision::Exists(path) => exists_handler(&self.docroot, &path),
            RouteDecision::NotFound => Response::new(StatusCode::NotFound),
        }
    }
}
