//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementacion del servidor TCP: un accept loop secuencial y un thread
//! por conexion. Cada conexion hace exactamente una lectura, una respuesta
//! y se cierra. Un request invalido solo afecta a su propia conexion.

use crate::commands::Dispatcher;
use crate::config::Config;
use crate::error::ConnectionError;
use crate::http::{Request, Response};
use crate::router::Router;
use crate::storage::FileStore;
use std::io::{self, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, info_span, warn};

/// Tiempo maximo para descartar el resto de un request que no entro en el
/// buffer
const DRAIN_TIMEOUT: Duration = Duration::from_secs(1);

/// Bytes maximos a descartar; pasado este limite el cierre puede terminar
/// en RST
const DRAIN_LIMIT: usize = 1024 * 1024;

/// Limites por conexion, copiados a cada thread
#[derive(Debug, Clone, Copy)]
pub struct ConnectionLimits {
    pub buffer_size: usize,
    pub read_timeout: Option<Duration>,
    pub write_timeout: Option<Duration>,
}

impl ConnectionLimits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            buffer_size: config.buffer_size,
            read_timeout: config.read_timeout(),
            write_timeout: config.write_timeout(),
        }
    }
}

/// Servidor HTTP/1.1, un thread por conexion
pub struct Server {
    config: Config,
    router: Arc<Router>,
    dispatcher: Arc<Dispatcher>,
    listener: Option<TcpListener>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let store = FileStore::new(&config.directory).with_sanitize(config.sanitize_filenames);
        let dispatcher = Dispatcher::new(store, &config.docroot);

        Self {
            router: Arc::new(Router::with_default_routes()),
            dispatcher: Arc::new(dispatcher),
            config,
            listener: None,
        }
    }

    /// Abre el socket de escucha y retorna la direccion real (util con
    /// puerto 0)
    pub fn bind(&mut self) -> io::Result<SocketAddr> {
        let listener = TcpListener::bind(self.config.address())?;
        let local_addr = listener.local_addr()?;
        self.listener = Some(listener);
        Ok(local_addr)
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().and_then(|l| l.local_addr().ok())
    }

    /// Acepta conexiones para siempre. Hace `bind` si todavia no se hizo.
    pub fn run(&mut self) -> io::Result<()> {
        if self.listener.is_none() {
            self.bind()?;
        }
        let listener = match self.listener.as_ref() {
            Some(listener) => listener,
            None => return Err(io::Error::new(io::ErrorKind::NotConnected, "listener not bound")),
        };

        info!(
            address = %listener.local_addr()?,
            directory = %self.config.directory,
            "server listening, one thread per connection"
        );

        let limits = ConnectionLimits::from_config(&self.config);
        let mut next_id: u64 = 0;

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    next_id += 1;
                    let id = next_id;
                    let router = Arc::clone(&self.router);
                    let dispatcher = Arc::clone(&self.dispatcher);

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    thread::spawn(move || {
                        let span = info_span!("conn", id, peer = %peer_addr);
                        let _enter = span.enter();

                        match Self::handle_connection(stream, &router, &dispatcher, limits) {
                            Ok(()) => {}
                            Err(e) if e.is_client_disconnect() => {
                                debug!(error = %e, "client went away");
                            }
                            Err(e) => error!(error = %e, "connection failed"),
                        }
                    });
                }
                Err(e) => {
                    // Un accept fallido no detiene el servidor
                    error!(error = %e, "failed to accept connection");
                }
            }
        }

        Ok(())
    }

    /// Ciclo completo de una conexion: leer, responder, cerrar
    pub fn handle_connection(
        mut stream: TcpStream,
        router: &Router,
        dispatcher: &Dispatcher,
        limits: ConnectionLimits,
    ) -> Result<(), ConnectionError> {
        let start = Instant::now();

        stream.set_read_timeout(limits.read_timeout)?;
        stream.set_write_timeout(limits.write_timeout)?;

        let mut buffer = vec![0u8; limits.buffer_size];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            debug!("peer closed without sending data");
            return Ok(());
        }

        debug!(bytes = bytes_read, "request read");

        let response = match Self::respond_to(&buffer[..bytes_read], router, dispatcher) {
            Ok(response) => response,
            Err(e) => match e.to_response() {
                Some(response) => {
                    warn!(error = %e, "rejecting request");
                    response
                }
                None => return Err(e),
            },
        };

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        // Buffer lleno: puede quedar body sin leer en el socket. Cerrar con
        // datos pendientes manda RST y el cliente pierde la respuesta.
        if bytes_read == buffer.len() {
            Self::drain(&mut stream, &mut buffer);
        }

        info!(
            status = %response.status(),
            length = response.content_length(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "response sent"
        );

        Ok(())
    }

    /// Cierra la escritura y descarta lo que quede del request, acotado por
    /// [`DRAIN_TIMEOUT`] y [`DRAIN_LIMIT`]
    fn drain(stream: &mut TcpStream, buffer: &mut [u8]) {
        if let Err(e) = stream.shutdown(Shutdown::Write) {
            debug!(error = %e, "shutdown after response failed");
            return;
        }
        if let Err(e) = stream.set_read_timeout(Some(DRAIN_TIMEOUT)) {
            debug!(error = %e, "could not set drain timeout");
            return;
        }

        let deadline = Instant::now() + DRAIN_TIMEOUT;
        let mut drained = 0;

        while drained < DRAIN_LIMIT && Instant::now() < deadline {
            match stream.read(buffer) {
                Ok(0) => break,
                Ok(n) => drained += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(_) => break,
            }
        }

        debug!(bytes = drained, "discarded request bytes past the buffer");
    }

    /// Parser → Router → Dispatcher sobre los bytes de una lectura
    pub fn respond_to(
        raw: &[u8],
        router: &Router,
        dispatcher: &Dispatcher,
    ) -> Result<Response, ConnectionError> {
        let request = Request::parse(raw)?;
        debug!(method = %request.method(), path = request.path(), "request parsed");

        let decision = router.resolve(&request)?;
        Ok(dispatcher.dispatch(decision, &request))
    }
}
