//! # Módulo HTTP
//! src/http/mod.rs
//!
//! Implementa a mano la parte de HTTP/1.1 que el servidor necesita:
//!
//! - Parsing de un request leído en una sola pasada
//! - Construcción de responses con `Content-Length` derivado del body
//! - Códigos de estado
//! - Negociación de gzip para el echo
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! Accept-Encoding: gzip\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```
//!
//! No hay keep-alive, chunked encoding ni pipelining: un request por
//! conexión.

pub mod compression; // gzip para /echo
pub mod request;     // Parsing de HTTP requests
pub mod response;    // Construcción de HTTP responses
pub mod status;      // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
