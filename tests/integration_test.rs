//! Tests de integración para el servidor HTTP
//! tests/integration_test.rs
//!
//! Cada test levanta su propio servidor en un puerto efímero con un
//! directorio temporal, así que no hace falta tener nada corriendo.

use flate2::read::GzDecoder;
use mini_http_server::config::Config;
use mini_http_server::server::Server;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

/// Servidor en background; el directorio vive lo mismo que el handle
struct TestServer {
    addr: SocketAddr,
    dir: TempDir,
}

impl TestServer {
    fn start() -> Self {
        Self::start_with(|_| {})
    }

    fn start_with(customize: impl FnOnce(&mut Config)) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            directory: format!("{}/", dir.path().display()),
            docroot: dir.path().display().to_string(),
            ..Config::default()
        };
        customize(&mut config);

        let mut server = Server::new(config);
        let addr = server.bind().expect("bind");
        thread::spawn(move || server.run());

        Self { addr, dir }
    }

    fn connect(&self) -> TcpStream {
        let stream = TcpStream::connect(self.addr).expect("connect");
        stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
        stream.set_write_timeout(Some(Duration::from_secs(5))).unwrap();
        stream
    }

    /// Envía un request crudo y retorna la response completa
    fn send(&self, raw: &[u8]) -> RawResponse {
        let mut stream = self.connect();
        stream.write_all(raw).unwrap();
        stream.flush().unwrap();
        read_response(&mut stream)
    }
}

/// Response separada en head (texto) y body (bytes)
struct RawResponse {
    head: String,
    body: Vec<u8>,
}

impl RawResponse {
    fn status_line(&self) -> &str {
        self.head.lines().next().unwrap_or_default()
    }

    fn header(&self, name: &str) -> Option<&str> {
        let prefix = format!("{}: ", name);
        self.head
            .split("\r\n")
            .skip(1)
            .find_map(|line| line.strip_prefix(prefix.as_str()))
    }

    fn content_length(&self) -> usize {
        self.header("Content-Length")
            .expect("Content-Length header")
            .parse()
            .expect("numeric Content-Length")
    }
}

fn read_response(stream: &mut TcpStream) -> RawResponse {
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).unwrap();

    let split = buf
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("blank line after headers");

    RawResponse {
        head: String::from_utf8(buf[..split].to_vec()).unwrap(),
        body: buf[split + 4..].to_vec(),
    }
}

#[test]
fn test_root_exists() {
    let server = TestServer::start();
    let response = server.send(b"GET / HTTP/1.1\r\nHost: localhost:4221\r\n\r\n");

    assert_eq!(response.status_line(), "HTTP/1.1 200 OK");
    assert_eq!(response.content_length(), 0);
    assert!(response.body.is_empty());
}

#[test]
fn test_unknown_path_not_found() {
    let server = TestServer::start();
    let response = server.send(b"GET /abcdefg HTTP/1.1\r\n\r\n");

    assert_eq!(response.status_line(), "HTTP/1.1 404 Not Found");
    assert_eq!(response.content_length(), 0);
}

#[test]
fn test_existing_path_in_docroot() {
    let server = TestServer::start();
    std::fs::write(server.dir.path().join("index.html"), b"<html>").unwrap();

    let response = server.send(b"GET /index.html HTTP/1.1\r\n\r\n");

    // El chequeo de existencia no devuelve contenido
    assert_eq!(response.status_line(), "HTTP/1.1 200 OK");
    assert!(response.body.is_empty());
}

#[test]
fn test_echo_plain() {
    let server = TestServer::start();
    let response = server.send(b"GET /echo/hello HTTP/1.1\r\n\r\n");

    assert_eq!(response.status_line(), "HTTP/1.1 200 OK");
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
    assert_eq!(response.header("Content-Encoding"), None);
    assert_eq!(response.content_length(), 5);
    assert_eq!(response.body, b"hello");
}

#[test]
fn test_echo_gzip() {
    let server = TestServer::start();
    let response = server.send(b"GET /echo/hello HTTP/1.1\r\nAccept-Encoding: gzip\r\n\r\n");

    assert_eq!(response.status_line(), "HTTP/1.1 200 OK");
    assert_eq!(response.header("Content-Encoding"), Some("gzip"));
    assert_eq!(response.content_length(), response.body.len());

    let mut decoded = String::new();
    GzDecoder::new(&response.body[..])
        .read_to_string(&mut decoded)
        .unwrap();
    assert_eq!(decoded, "hello");
}

#[test]
fn test_echo_gzip_in_list() {
    let server = TestServer::start();
    let response = server.send(
        b"GET /echo/abc HTTP/1.1\r\nAccept-Encoding: invalid-1, gzip, invalid-2\r\n\r\n",
    );

    assert_eq!(response.header("Content-Encoding"), Some("gzip"));
}

#[test]
fn test_echo_without_payload_is_bad_request() {
    let server = TestServer::start();
    let response = server.send(b"GET /echo HTTP/1.1\r\n\r\n");

    assert_eq!(response.status_line(), "HTTP/1.1 400 Bad Request");
}

#[test]
fn test_user_agent() {
    let server = TestServer::start();
    let response = server.send(b"GET /user-agent HTTP/1.1\r\nUser-Agent: test-client/1.0\r\n\r\n");

    assert_eq!(response.status_line(), "HTTP/1.1 200 OK");
    assert_eq!(response.body, b"test-client/1.0");
    assert_eq!(response.content_length(), 15);
}

#[test]
fn test_user_agent_duplicate_header_last_wins() {
    let server = TestServer::start();
    let response = server.send(
        b"GET /user-agent HTTP/1.1\r\nUser-Agent: first\r\nUser-Agent: second\r\n\r\n",
    );

    assert_eq!(response.body, b"second");
}

#[test]
fn test_file_post_then_get() {
    let server = TestServer::start();

    let created = server.send(b"POST /files/abc.txt HTTP/1.1\r\nContent-Length: 2\r\n\r\nhi");
    assert_eq!(created.status_line(), "HTTP/1.1 201 Created");
    assert_eq!(created.content_length(), 0);

    let fetched = server.send(b"GET /files/abc.txt HTTP/1.1\r\n\r\n");
    assert_eq!(fetched.status_line(), "HTTP/1.1 200 OK");
    assert_eq!(fetched.header("Content-Type"), Some("application/octet-stream"));
    assert_eq!(fetched.body, b"hi");
    assert_eq!(fetched.content_length(), 2);
}

#[test]
fn test_file_get_missing() {
    let server = TestServer::start();
    let response = server.send(b"GET /files/missing.txt HTTP/1.1\r\n\r\n");

    assert_eq!(response.status_line(), "HTTP/1.1 404 Not Found");
    assert!(response.body.is_empty());
    assert_eq!(response.content_length(), 0);
}

#[test]
fn test_file_post_write_failure_still_created() {
    // Un fallo de escritura se registra en el log pero no
    // cambia el 201 que recibe el cliente
    let server = TestServer::start_with(|config| {
        config.directory = "/nonexistent-dir-for-tests/".to_string();
    });

    let response = server.send(b"POST /files/abc.txt HTTP/1.1\r\n\r\nhi");
    assert_eq!(response.status_line(), "HTTP/1.1 201 Created");
}

#[test]
fn test_large_post_body_is_truncated_without_reset() {
    let server = TestServer::start();

    let head = b"POST /files/big.bin HTTP/1.1\r\nContent-Length: 5000\r\n\r\n";
    let mut raw = head.to_vec();
    raw.extend(std::iter::repeat(b'z').take(5000));

    // El body no entra en el buffer de 1024 bytes; la respuesta tiene que
    // llegar completa igual, sin que el cierre la corte con un reset
    let response = server.send(&raw);
    assert_eq!(response.status_line(), "HTTP/1.1 201 Created");

    let stored = std::fs::read(server.dir.path().join("big.bin")).unwrap();
    assert!(!stored.is_empty());
    assert!(stored.len() <= 1024 - head.len());
    assert!(stored.iter().all(|&b| b == b'z'));
}

#[test]
fn test_sanitized_traversal_is_rejected() {
    let server = TestServer::start_with(|config| config.sanitize_filenames = true);
    let response = server.send(b"GET /files/.. HTTP/1.1\r\n\r\n");

    assert_eq!(response.status_line(), "HTTP/1.1 400 Bad Request");
}

#[test]
fn test_unsupported_method() {
    let server = TestServer::start();
    let response = server.send(b"PUT /files/abc.txt HTTP/1.1\r\n\r\nhi");

    assert_eq!(response.status_line(), "HTTP/1.1 405 Method Not Allowed");
}

#[test]
fn test_malformed_header_only_affects_its_connection() {
    let server = TestServer::start();

    // Conexión A abierta, todavía sin enviar nada
    let mut bad = server.connect();
    // Conexión B completa su intercambio mientras A sigue abierta
    let mut good = server.connect();

    bad.write_all(b"GET /echo/abc HTTP/1.1\r\nBrokenHeader\r\n\r\n").unwrap();
    good.write_all(b"GET /echo/abc HTTP/1.1\r\n\r\n").unwrap();

    let bad_response = read_response(&mut bad);
    let good_response = read_response(&mut good);

    assert_eq!(bad_response.status_line(), "HTTP/1.1 400 Bad Request");
    assert_eq!(good_response.status_line(), "HTTP/1.1 200 OK");
    assert_eq!(good_response.body, b"abc");

    // El servidor sigue aceptando conexiones nuevas
    let after = server.send(b"GET /echo/still-up HTTP/1.1\r\n\r\n");
    assert_eq!(after.body, b"still-up");
}

#[test]
fn test_garbage_does_not_stop_server() {
    let server = TestServer::start();

    let response = server.send(b"\x00\x01\x02garbage");
    assert_eq!(response.status_line(), "HTTP/1.1 400 Bad Request");

    let response = server.send(b"GET / HTTP/1.1\r\n\r\n");
    assert_eq!(response.status_line(), "HTTP/1.1 200 OK");
}

#[test]
fn test_concurrent_connections() {
    let server = TestServer::start();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let mut stream = server.connect();
            thread::spawn(move || {
                let raw = format!("GET /echo/client-{} HTTP/1.1\r\n\r\n", i);
                stream.write_all(raw.as_bytes()).unwrap();
                let response = read_response(&mut stream);
                assert_eq!(response.content_length(), response.body.len());
                String::from_utf8(response.body).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("client-{}", i));
    }
}
