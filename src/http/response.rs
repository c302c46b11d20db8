//! # Construcción de Respuestas HTTP
//! src/http/response.rs
//!
//! Arma la respuesta que se escribe de vuelta en el socket. El formato es
//! fijo y siempre en este orden:
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Encoding: gzip\r\n      (solo si hay codificación)
//! Content-Length: 5\r\n
//! \r\n
//! hello
//! ```
//!
//! `Content-Length` nunca se guarda en la estructura: se calcula a partir
//! del body final al serializar, así header y body no pueden divergir.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use mini_http_server::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok).with_body(b"hello".to_vec());
//! let bytes = response.to_bytes();
//! assert!(bytes.ends_with(b"Content-Length: 5\r\n\r\nhello"));
//! ```

use super::StatusCode;

/// Content-Type por defecto de las respuestas de texto
pub const TEXT_PLAIN: &str = "text/plain";

/// Content-Type de las respuestas de archivos
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Representa una respuesta HTTP/1.1 completa
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Código de estado HTTP (200, 404, etc.)
    status: StatusCode,

    content_type: String,

    /// `Content-Encoding` (ej: "gzip"), ausente si el body va tal cual
    content_encoding: Option<String>,

    /// Cuerpo de la respuesta; `None` equivale a `Content-Length: 0`
    body: Option<Vec<u8>>,
}

impl Response {
    /// Crea una respuesta `text/plain` sin body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: TEXT_PLAIN.to_string(),
            content_encoding: None,
            body: None,
        }
    }

    /// Cambia el `Content-Type`
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_string();
        self
    }

    /// Marca el body como codificado (ej: `gzip`)
    pub fn with_content_encoding(mut self, encoding: &str) -> Self {
        self.content_encoding = Some(encoding.to_string());
        self
    }

    /// Establece el cuerpo de la respuesta desde bytes
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Respuesta de error: solo status, `text/plain`, sin body
    pub fn error(status: StatusCode) -> Self {
        Self::new(status)
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    pub fn to_bytes(&self) -> Vec<u8> {
        let body = self.body();
        let mut result = Vec::with_capacity(128 + body.len());

        result.extend_from_slice(format!("HTTP/1.1 {}\r\n", self.status).as_bytes());
        result.extend_from_slice(format!("Content-Type: {}\r\n", self.content_type).as_bytes());
        if let Some(encoding) = &self.content_encoding {
            result.extend_from_slice(format!("Content-Encoding: {}\r\n", encoding).as_bytes());
        }
        result.extend_from_slice(format!("Content-Length: {}\r\n", body.len()).as_bytes());
        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(body);

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn content_encoding(&self) -> Option<&str> {
        self.content_encoding.as_deref()
    }

    /// Body efectivo (vacío si no hay body)
    pub fn body(&self) -> &[u8] {
        self.body.as_deref().unwrap_or(&[])
    }

    /// Valor que tendrá el header `Content-Length`
    pub fn content_length(&self) -> usize {
        self.body().len()
    }
}
