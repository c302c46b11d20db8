//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración del servidor con soporte para argumentos CLI y variables
//! de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./mini_http_server --directory /tmp/data/ \
//!   --port 4221 \
//!   --read-timeout-ms 5000
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=4221 FILES_DIR=/tmp/data/ ./mini_http_server
//! ```

use clap::Parser;
use std::time::Duration;

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "mini_http_server")]
#[command(about = "Servidor HTTP/1.1 mínimo: echo, user-agent y archivos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor (0 = efímero)
    #[arg(short, long, default_value = "4221", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio de /files/<name>. Se usa como prefijo literal, así que
    /// debería terminar en `/`
    #[arg(short, long, default_value = "./data/", env = "FILES_DIR")]
    pub directory: String,

    /// Raíz para el chequeo de existencia de los GET sin ruta propia
    #[arg(long, default_value = ".", env = "DOC_ROOT")]
    pub docroot: String,

    /// Tamaño del buffer de la única lectura por conexión
    #[arg(long = "buffer-size", default_value = "1024", env = "BUFFER_SIZE")]
    pub buffer_size: usize,

    // === Timeouts ===

    /// Timeout de lectura del socket en milisegundos (0 = sin límite)
    #[arg(long = "read-timeout-ms", default_value = "10000", env = "READ_TIMEOUT_MS")]
    pub read_timeout_ms: u64,

    /// Timeout de escritura del socket en milisegundos (0 = sin límite)
    #[arg(long = "write-timeout-ms", default_value = "10000", env = "WRITE_TIMEOUT_MS")]
    pub write_timeout_ms: u64,

    // === Hardening ===

    /// Rechazar nombres de archivo con `..`, `/` o `\`
    #[arg(long = "sanitize-filenames", env = "SANITIZE_FILENAMES")]
    pub sanitize_filenames: bool,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use mini_http_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        non_zero_millis(self.read_timeout_ms)
    }

    pub fn write_timeout(&self) -> Option<Duration> {
        non_zero_millis(self.write_timeout_ms)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Host must not be empty".to_string());
        }
        if self.directory.is_empty() {
            return Err("Files directory must not be empty".to_string());
        }
        if self.buffer_size == 0 {
            return Err("Buffer size must be >= 1".to_string());
        }

        Ok(())
    }
}

fn non_zero_millis(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 4221,
            host: "0.0.0.0".to_string(),
            directory: "./data/".to_string(),
            docroot: ".".to_string(),
            buffer_size: 1024,
            read_timeout_ms: 10_000,
            write_timeout_ms: 10_000,
            sanitize_filenames: false,
        }
    }
}
