//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes (un thread por conexión)
//! 3. Lee un único buffer y lo parsea como request
//! 4. Escribe una única response y cierra la conexión

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::{ConnectionLimits, Server};
