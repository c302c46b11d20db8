//! # Negociación de Compresión
//! src/http/compression.rs
//!
//! Decide si el payload del echo viaja comprimido. La decisión es binaria:
//! si el valor crudo de `Accept-Encoding` contiene `gzip` en cualquier
//! posición, se comprime con gzip a nivel por defecto. No se interpretan
//! q-values ni se elige entre varias codificaciones.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Token buscado dentro de `Accept-Encoding`
pub const GZIP: &str = "gzip";

/// Payload listo para enviar, junto con su `Content-Encoding`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub body: Vec<u8>,
    pub encoding: Option<&'static str>,
}

/// `true` si el cliente acepta gzip
pub fn accepts_gzip(accept_encoding: Option<&str>) -> bool {
    accept_encoding.is_some_and(|value| value.contains(GZIP))
}

/// Comprime `payload` si el cliente lo acepta; si no, lo devuelve intacto
pub fn negotiate(accept_encoding: Option<&str>, payload: &[u8]) -> std::io::Result<Encoded> {
    if accepts_gzip(accept_encoding) {
        Ok(Encoded {
            body: gzip(payload)?,
            encoding: Some(GZIP),
        })
    } else {
        Ok(Encoded {
            body: payload.to_vec(),
            encoding: None,
        })
    }
}

/// Stream gzip completo (header, DEFLATE y trailer) en memoria
pub fn gzip(payload: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(payload)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn gunzip(bytes: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        GzDecoder::new(bytes).read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_no_header_passes_through() {
        let encoded = negotiate(None, b"hello").unwrap();
        assert_eq!(encoded.body, b"hello");
        assert_eq!(encoded.encoding, None);
    }

    #[test]
    fn test_gzip_alone() {
        let encoded = negotiate(Some("gzip"), b"hello").unwrap();
        assert_eq!(encoded.encoding, Some("gzip"));
        assert_eq!(gunzip(&encoded.body), b"hello");
    }

    #[test]
    fn test_gzip_among_other_encodings() {
        assert!(accepts_gzip(Some("encoding-1, gzip, encoding-2")));
    }

    #[test]
    fn test_substring_match_ignores_q_values() {
        // gzip;q=0 sigue contando como aceptado: no hay negociación por calidad
        assert!(accepts_gzip(Some("gzip;q=0")));
        assert!(accepts_gzip(Some("x-gzip")));
    }

    #[test]
    fn test_unsupported_encodings_only() {
        let encoded = negotiate(Some("invalid-encoding, br"), b"hello").unwrap();
        assert_eq!(encoded.body, b"hello");
        assert_eq!(encoded.encoding, None);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(!accepts_gzip(Some("GZIP")));
    }

    #[test]
    fn test_gzip_stream_has_magic_bytes() {
        let bytes = gzip(b"").unwrap();
        assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
        assert!(gunzip(&bytes).is_empty());
    }
}
