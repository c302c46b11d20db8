//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Parser de un único request leído del socket en una sola pasada.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /files/abc.txt HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/7.68.0\r\n
//! \r\n
//! hi
//! ```
//!
//! ## Componentes
//!
//! 1. **Header block**: todo lo anterior al primer `\r\n\r\n`
//! 2. **Request Line**: primera línea del bloque, `METHOD /path VERSION`
//! 3. **Headers**: pares `Name: Value`, separados por el primer `": "`
//! 4. **Body**: bytes posteriores al separador (pueden venir truncados si
//!    no cupieron en el buffer; no se hace una segunda lectura)

use std::collections::HashMap;
use thiserror::Error;

/// Separador entre el bloque de headers y el body
const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Métodos HTTP reconocidos por el parser.
///
/// Solo `GET` y `POST` se sirven; el resto se reconoce para que el router
/// pueda rechazarlos con `405`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
}

impl Method {
    fn from_token(s: &str) -> Result<Self, ParseError> {
        match s {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            "HEAD" => Ok(Method::HEAD),
            "OPTIONS" => Ok(Method::OPTIONS),
            "PATCH" => Ok(Method::PATCH),
            _ => Err(ParseError::UnsupportedMethod(s.to_string())),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errores que pueden ocurrir durante el parsing.
///
/// El parse es todo o nada: ante cualquiera de estos errores no se
/// devuelve ningún resultado parcial.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No se recibió ningún byte
    #[error("Empty request")]
    EmptyRequest,

    /// No aparece el separador `\r\n\r\n`
    #[error("Incomplete HTTP request: missing blank line after headers")]
    IncompleteRequest,

    /// El bloque de headers no es UTF-8
    #[error("Header block is not valid UTF-8")]
    InvalidEncoding,

    /// La request line no tiene exactamente 3 tokens
    #[error("Malformed request line: {0:?}")]
    MalformedRequestLine(String),

    /// Token de método desconocido
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// El path no empieza con `/`
    #[error("Invalid request path: {0:?}")]
    InvalidPath(String),

    /// Versión distinta de HTTP/1.0 o HTTP/1.1
    #[error("Invalid HTTP version: {0}")]
    InvalidHttpVersion(String),

    /// Línea de header sin el separador `": "`
    #[error("Malformed header: {0:?}")]
    MalformedHeader(String),
}

/// Representa un request parseado
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,

    /// Path literal, sin decodificar (ej: "/echo/abc")
    path: String,

    /// Versión HTTP ("HTTP/1.1" o "HTTP/1.0")
    version: String,

    /// Headers por nombre exacto (sensible a mayúsculas). Si un nombre se
    /// repite, gana el último valor.
    headers: HashMap<String, String>,

    body: Vec<u8>,
}

impl Request {
    /// Parsea un request desde los bytes leídos del socket
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use mini_http_server::http::Request;
    ///
    /// let raw = b"GET /echo/abc HTTP/1.1\r\nUser-Agent: curl\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/echo/abc");
    /// assert_eq!(request.header("User-Agent"), Some("curl"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        if buffer.is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        let split_at = buffer
            .windows(HEADER_TERMINATOR.len())
            .position(|window| window == HEADER_TERMINATOR)
            .ok_or(ParseError::IncompleteRequest)?;

        let header_block = std::str::from_utf8(&buffer[..split_at])
            .map_err(|_| ParseError::InvalidEncoding)?;
        let body = buffer[split_at + HEADER_TERMINATOR.len()..].to_vec();

        let mut lines = header_block.split("\r\n");
        // split() siempre produce al menos un elemento
        let request_line = lines.next().unwrap_or_default();

        let (method, path, version) = Self::parse_request_line(request_line)?;
        let headers = Self::parse_headers(lines)?;

        Ok(Request {
            method,
            path,
            version,
            headers,
            body,
        })
    }

    /// Formato: `GET /path HTTP/1.1`, separado por espacios simples
    fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
        let parts: Vec<&str> = line.split(' ').collect();

        if parts.len() != 3 {
            return Err(ParseError::MalformedRequestLine(line.to_string()));
        }

        let method = Method::from_token(parts[0])?;

        let path = parts[1];
        if !path.starts_with('/') {
            return Err(ParseError::InvalidPath(path.to_string()));
        }

        let version = parts[2];
        if version != "HTTP/1.0" && version != "HTTP/1.1" {
            return Err(ParseError::InvalidHttpVersion(version.to_string()));
        }

        Ok((method, path.to_string(), version.to_string()))
    }

    /// Cada línea se parte en el primer `": "`; el valor queda tal cual
    fn parse_headers<'a>(
        lines: impl Iterator<Item = &'a str>,
    ) -> Result<HashMap<String, String>, ParseError> {
        let mut headers = HashMap::new();

        for line in lines {
            match line.split_once(": ") {
                Some((name, value)) => {
                    headers.insert(name.to_string(), value.to_string());
                }
                None => return Err(ParseError::MalformedHeader(line.to_string())),
            }
        }

        Ok(headers)
    }

    // === Accesores ===

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header por su nombre exacto
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
