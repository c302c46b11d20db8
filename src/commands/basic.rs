//! # Comandos Básicos
//! src/commands/basic.rs
//!
//! Rutas que no tocan el directorio de archivos:
//! - /echo/<text>: Devuelve el texto (gzip si se negocia)
//! - /user-agent: Devuelve el header `User-Agent`
//! - cualquier otro GET: 200 vacío si el path existe bajo el docroot

use crate::http::compression;
use crate::http::{Request, Response, StatusCode};
use crate::storage;
use tracing::error;

/// Handler para `GET /echo/<text>`
///
/// # Ejemplo de response
/// ```text
/// HTTP/1.1 200 OK
/// Content-Type: text/plain
/// Content-Encoding: gzip
/// Content-Length: 23
/// ```
pub fn echo_handler(req: &Request, payload: &str) -> Response {
    let encoded = match compression::negotiate(req.header("Accept-Encoding"), payload.as_bytes()) {
        Ok(encoded) => encoded,
        Err(e) => {
            error!(error = %e, "gzip compression failed");
            return Response::error(StatusCode::InternalServerError);
        }
    };

    let response = Response::new(StatusCode::Ok);
    let response = match encoded.encoding {
        Some(encoding) => response.with_content_encoding(encoding),
        None => response,
    };
    response.with_body(encoded.body)
}

/// Handler para `GET /user-agent`; sin header el body queda vacío
pub fn user_agent_handler(req: &Request) -> Response {
    let agent = req.header("User-Agent").unwrap_or_default();
    Response::new(StatusCode::Ok).with_body(agent.as_bytes().to_vec())
}

/// Handler de fallback para GET
pub fn exists_handler(docroot: &str, path: &str) -> Response {
    if storage::exists(docroot, path) {
        Response::new(StatusCode::Ok)
    } else {
        Response::new(StatusCode::NotFound)
    }
}
