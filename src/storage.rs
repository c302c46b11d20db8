//! # Almacén de Archivos
//! src/storage.rs
//!
//! Lee y escribe archivos dentro del directorio base configurado. El
//! directorio se usa como prefijo literal: el archivo de `/files/abc.txt`
//! es `format!("{base}abc.txt")`, por eso conviene configurarlo con la
//! barra final (`--directory /tmp/data/`).
//!
//! Ningún acceso está sincronizado entre conexiones: dos `POST` al mismo
//! nombre pueden intercalarse.

use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Cualquier fallo de lectura (inexistente, sin permisos, ...)
    #[error("File not readable: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Nombre rechazado por el saneamiento opcional
    #[error("Rejected file name: {0:?}")]
    InvalidName(String),

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Adaptador de archivos sobre el directorio base
#[derive(Debug, Clone)]
pub struct FileStore {
    base: String,

    /// Rechazar `..`, `/` y `\` en los nombres
    sanitize: bool,
}

impl FileStore {
    /// Crea el store sin saneamiento de nombres
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
            sanitize: false,
        }
    }

    /// Activa o desactiva el saneamiento de nombres
    pub fn with_sanitize(mut self, sanitize: bool) -> Self {
        self.sanitize = sanitize;
        self
    }

    /// Ruta final de un archivo: base + nombre, sin normalizar
    pub fn resolve(&self, name: &str) -> Result<PathBuf, StoreError> {
        if self.sanitize && !is_safe_name(name) {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        Ok(PathBuf::from(format!("{}{}", self.base, name)))
    }

    /// Lee el archivo completo
    pub fn read(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.resolve(name)?;
        fs::read(&path).map_err(|source| StoreError::NotFound { path, source })
    }

    /// Crea o trunca el archivo y escribe `body`
    pub fn write(&self, name: &str, body: &[u8]) -> Result<(), StoreError> {
        let path = self.resolve(name)?;
        fs::write(&path, body).map_err(|source| StoreError::Write { path, source })
    }
}

/// Mismo criterio que los comandos de archivos: sin `..` ni separadores
fn is_safe_name(name: &str) -> bool {
    !name.is_empty() && !name.contains("..") && !name.contains('/') && !name.contains('\\')
}

/// `true` si existe una entrada en `docroot + path`.
///
/// Un error distinto de "no existe" (ej: permisos) cuenta como existente.
pub fn exists(docroot: &str, path: &str) -> bool {
    match fs::metadata(format!("{}{}", docroot, path)) {
        Ok(_) => true,
        Err(e) => e.kind() != io::ErrorKind::NotFound,
    }
}
