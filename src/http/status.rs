//! # Códigos de Estado HTTP
//! src/http/status.rs
//!
//! Códigos de estado que el servidor puede emitir. Es un conjunto cerrado:
//! cada ruta y cada error conocido se traduce a uno de estos valores.
//!
//! - **2xx**: Éxito (200 OK, 201 Created)
//! - **4xx**: Error del cliente (400, 404, 405)
//! - **5xx**: Error del servidor (500)

/// Representa los códigos de estado HTTP que soporta nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 201 Created - Archivo escrito vía `POST /files/<name>`
    Created = 201,

    /// 400 Bad Request - Request o ruta malformados
    BadRequest = 400,

    /// 404 Not Found - Archivo o path inexistente
    NotFound = 404,

    /// 405 Method Not Allowed - Método reconocido pero no servido
    MethodNotAllowed = 405,

    /// 500 Internal Server Error - Error interno del servidor
    InternalServerError = 500,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http_server::http::StatusCode;
    /// assert_eq!(StatusCode::Created.as_u16(), 201);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
