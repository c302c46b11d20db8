//! # Errores de Conexión
//! src/error.rs
//!
//! Todo lo que puede cortar el ciclo de un request. Los errores de parsing
//! y routing se responden con un 4xx en esa conexión; los de I/O cierran
//! el socket sin respuesta. Ninguno detiene el accept loop.

use crate::http::{ParseError, Response, StatusCode};
use crate::router::RouteError;
use std::io::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

impl ConnectionError {
    /// Status con el que se rechaza el request, o `None` si ya no se puede
    /// responder
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ConnectionError::Io(_) => None,
            ConnectionError::Parse(_) => Some(StatusCode::BadRequest),
            ConnectionError::Route(RouteError::UnsupportedMethod(_)) => {
                Some(StatusCode::MethodNotAllowed)
            }
            ConnectionError::Route(RouteError::MalformedRoutePath(_)) => {
                Some(StatusCode::BadRequest)
            }
        }
    }

    /// Respuesta de rechazo (sin body)
    pub fn to_response(&self) -> Option<Response> {
        self.status().map(Response::error)
    }

    /// `true` si el cliente se fue o dejo vencer el timeout. No es una falla
    /// del servidor.
    pub fn is_client_disconnect(&self) -> bool {
        match self {
            ConnectionError::Io(e) => matches!(
                e.kind(),
                ErrorKind::WouldBlock
                    | ErrorKind::TimedOut
                    | ErrorKind::ConnectionReset
                    | ErrorKind::ConnectionAborted
                    | ErrorKind::BrokenPipe
                    | ErrorKind::UnexpectedEof
            ),
            _ => false,
        }
    }
}
