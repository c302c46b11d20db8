//! # Mini HTTP Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo sobre TCP crudo: lee un request por conexión,
//! decide la ruta y escribe una respuesta armada a mano.
//!
//! ## Arquitectura
//!
//! - `http`: Parsing de requests, construcción de responses y gzip
//! - `router`: Tabla de rutas que produce una `RouteDecision`
//! - `commands`: Handlers que convierten la decisión en `Response`
//! - `storage`: Lectura/escritura en el directorio de archivos
//! - `server`: Accept loop y manejo de cada conexión
//! - `config`: Argumentos CLI y variables de entorno
//! - `error`: Errores que cortan una conexión
//! - `logging`: Inicialización de `tracing`
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use mini_http_server::config::Config;
//! use mini_http_server::server::Server;
//!
//! let config = Config::default();
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;
pub mod storage;
