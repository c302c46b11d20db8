//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Traduce un request ya parseado a una [`RouteDecision`].
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → RouteDecision → Dispatcher → Response
//! ```
//!
//! El path se parte literalmente por `/` (sin decodificar `%xx`), de modo
//! que `/echo/abc` produce `["", "echo", "abc"]`. Cada ruta registrada se
//! identifica por método + primer segmento; el orden de registro es el
//! orden de prioridad. Si ninguna coincide:
//!
//! - `GET` cae en [`RouteDecision::Exists`] con el path completo
//! - `POST` cae en [`RouteDecision::NotFound`]
//! - cualquier otro método es [`RouteError::UnsupportedMethod`]

use crate::http::{Method, Request};
use thiserror::Error;

/// Decisión tomada para un request; se consume una sola vez
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Devolver el texto embebido en el path
    Echo(String),

    /// Devolver el header `User-Agent`
    UserAgent,

    /// Leer `<base><filename>`
    FileGet(String),

    /// Escribir el body en `<base><filename>`
    FilePost(String, Vec<u8>),

    /// 200 vacío si el path existe en disco, 404 si no
    Exists(String),

    NotFound,
}

/// Errores de routing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Method {0} is not served")]
    UnsupportedMethod(Method),

    #[error("Malformed route path: {0}")]
    MalformedRoutePath(String),
}

/// Resolver de una ruta: recibe el request y los segmentos del path
pub type Resolver = fn(&Request, &[&str]) -> Result<RouteDecision, RouteError>;

struct Route {
    method: Method,
    segment: &'static str,
    resolve: Resolver,
}

/// Tabla de rutas `(método, primer segmento) → resolver`
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Crea un router vacío (solo aplican los fallbacks)
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Router con las rutas del servidor, en orden de prioridad
    pub fn with_default_routes() -> Self {
        let mut router = Self::new();
        router.register(Method::POST, "files", resolve_file_post);
        router.register(Method::GET, "user-agent", resolve_user_agent);
        router.register(Method::GET, "echo", resolve_echo);
        router.register(Method::GET, "files", resolve_file_get);
        router
    }

    /// Registra una ruta. Las primeras registradas tienen prioridad.
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http_server::http::{Method, Request};
    /// use mini_http_server::router::{RouteDecision, RouteError, Router};
    ///
    /// fn health(_req: &Request, _segments: &[&str]) -> Result<RouteDecision, RouteError> {
    ///     Ok(RouteDecision::Echo("up".to_string()))
    /// }
    ///
    /// let mut router = Router::new();
    /// router.register(Method::GET, "health", health);
    ///
    /// let request = Request::parse(b"GET /health HTTP/1.1\r\n\r\n").unwrap();
    /// assert_eq!(router.resolve(&request), Ok(RouteDecision::Echo("up".to_string())));
    /// ```
    pub fn register(&mut self, method: Method, segment: &'static str, resolve: Resolver) {
        self.routes.push(Route {
            method,
            segment,
            resolve,
        });
    }

    /// Encuentra la decisión para un request
    pub fn resolve(&self, request: &Request) -> Result<RouteDecision, RouteError> {
        let method = request.method();
        if !matches!(method, Method::GET | Method::POST) {
            return Err(RouteError::UnsupportedMethod(method));
        }

        let segments: Vec<&str> = request.path().split('/').collect();
        let first = segments.get(1).copied().unwrap_or_default();

        for route in &self.routes {
            if route.method == method && route.segment == first {
                return (route.resolve)(request, &segments);
            }
        }

        match method {
            Method::GET => Ok(RouteDecision::Exists(request.path().to_string())),
            _ => Ok(RouteDecision::NotFound),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::with_default_routes()
    }
}

/// `GET /echo/<text>`: exactamente tres segmentos
fn resolve_echo(request: &Request, segments: &[&str]) -> Result<RouteDecision, RouteError> {
    match segments {
        [_, _, payload] => Ok(RouteDecision::Echo(payload.to_string())),
        _ => Err(RouteError::MalformedRoutePath(request.path().to_string())),
    }
}

fn resolve_user_agent(_request: &Request, _segments: &[&str]) -> Result<RouteDecision, RouteError> {
    Ok(RouteDecision::UserAgent)
}

fn resolve_file_get(request: &Request, segments: &[&str]) -> Result<RouteDecision, RouteError> {
    Ok(RouteDecision::FileGet(filename(request, segments)?))
}

fn resolve_file_post(request: &Request, segments: &[&str]) -> Result<RouteDecision, RouteError> {
    Ok(RouteDecision::FilePost(
        filename(request, segments)?,
        request.body().to_vec(),
    ))
}

/// Segundo segmento de `/files/<name>`; lo que venga después se ignora
fn filename(request: &Request, segments: &[&str]) -> Result<String, RouteError> {
    segments
        .get(2)
        .map(|name| name.to_string())
        .ok_or_else(|| RouteError::MalformedRoutePath(request.path().to_string()))
}
