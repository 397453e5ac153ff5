//! JSON API over HTTP
//!
//! The accept loop of `tiny_http` is blocking, so it runs on a blocking
//! thread and enters the tokio runtime only for package index lookups.

mod router;

pub use router::{ApiResponse, Router};

use crate::checker::ModuleResolver;
use crate::error::ServerError;
use crate::registry::PackageIndex;
use std::io::Read;
use std::net::SocketAddr;
use tiny_http::{Header, Request, Response, Server, StatusCode};
use tokio::runtime::Handle;

/// Port used when `serve` gets no `--port`
pub const DEFAULT_PORT: u16 = 5000;

/// Headers added to every response
const RESPONSE_HEADERS: &[(&str, &str)] = &[
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Server,
    addr: SocketAddr,
}

/// Bind the HTTP server on localhost without starting the request loop
pub fn bind(port: u16) -> Result<BoundServer, ServerError> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let server = Server::http(addr).map_err(|e| ServerError::Bind {
        addr: addr.to_string(),
        message: e.to_string(),
    })?;
    tracing::info!("listening on http://{}", addr);
    Ok(BoundServer { server, addr })
}

impl BoundServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve requests until the listener shuts down
    pub async fn run<R, I>(self, router: Router<R, I>) -> Result<(), ServerError>
    where
        R: ModuleResolver + Send + 'static,
        I: PackageIndex + ?Sized + 'static,
    {
        let runtime = Handle::current();
        let server = self.server;
        tokio::task::spawn_blocking(move || {
            for request in server.incoming_requests() {
                handle_request(request, &router, &runtime);
            }
        })
        .await
        .map_err(|e| ServerError::Stopped {
            message: e.to_string(),
        })
    }
}

fn handle_request<R, I>(mut request: Request, router: &Router<R, I>, runtime: &Handle)
where
    R: ModuleResolver,
    I: PackageIndex + ?Sized,
{
    let mut body = Vec::new();
    if let Err(e) = request.as_reader().read_to_end(&mut body) {
        tracing::warn!("failed to read request body: {}", e);
    }

    let method = request.method().clone();
    let target = request.url().to_string();
    let api = runtime.block_on(router.handle(&method, &target, &body));
    tracing::debug!("{} {} -> {}", method, target, api.status);

    if let Err(e) = request.respond(into_response(&api)) {
        tracing::warn!("failed to send response for {}: {}", target, e);
    }
}

fn into_response(api: &ApiResponse) -> Response<std::io::Cursor<Vec<u8>>> {
    let headers = RESPONSE_HEADERS
        .iter()
        .filter_map(|(field, value)| Header::from_bytes(*field, *value).ok());
    let mut response = Response::from_string(api.body.to_string())
        .with_status_code(StatusCode(api.status));
    for header in headers {
        response.add_header(header);
    }
    response
}
