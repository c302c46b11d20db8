//! # Comandos de Archivos
//! src/commands/files.rs
//!
//! - GET /files/<name>: contenido del archivo o 404
//! - POST /files/<name>: escribe el body y responde 201
//!
//! El POST responde `201 Created` aunque la escritura falle; el fallo solo
//! queda en el log. Un nombre rechazado por el saneamiento sí produce 400.

use crate::http::response::OCTET_STREAM;
use crate::http::{Response, StatusCode};
use crate::storage::{FileStore, StoreError};
use tracing::{debug, warn};

/// Handler para `GET /files/<name>`
pub fn file_get_handler(store: &FileStore, name: &str) -> Response {
    match store.read(name) {
        Ok(data) => Response::new(StatusCode::Ok)
            .with_content_type(OCTET_STREAM)
            .with_body(data),
        Err(StoreError::InvalidName(name)) => {
            warn!(name = %name, "rejected file name");
            Response::error(StatusCode::BadRequest)
        }
        Err(e) => {
            debug!(error = %e, "file read failed");
            Response::error(StatusCode::NotFound).with_content_type(OCTET_STREAM)
        }
    }
}

/// Handler para `POST /files/<name>`
pub fn file_post_handler(store: &FileStore, name: &str, body: &[u8]) -> Response {
    match store.write(name, body) {
        Ok(()) => {
            debug!(name = %name, bytes = body.len(), "file written");
        }
        Err(StoreError::InvalidName(name)) => {
            warn!(name = %name, "rejected file name");
            return Response::error(StatusCode::BadRequest);
        }
        Err(e) => {
            warn!(error = %e, "file write failed, still answering 201");
        }
    }

    Response::new(StatusCode::Created)
}
