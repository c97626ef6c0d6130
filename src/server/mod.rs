//! Preview server for the generated site

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::Folio;

/// Serve the public directory until interrupted
pub async fn start(folio: &Folio, ip: &str, port: u16) -> Result<()> {
    let app = router(&folio.public_dir);
    let addr = bind_addr(ip, port)?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Static file router; directories resolve to their `index.html`
pub fn router(public_dir: &Path) -> Router {
    let files = ServeDir::new(public_dir).append_index_html_on_directories(true);
    Router::new()
        .fallback_service(files)
        .layer(TraceLayer::new_for_http())
}

fn bind_addr(ip: &str, port: u16) -> Result<SocketAddr> {
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    Ok(format!("{}:{}", bind_ip, port).parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr_localhost() {
        let addr = bind_addr("localhost", 4000).unwrap();
        assert_eq!(addr, "127.0.0.1:4000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_bind_addr_explicit_ip() {
        let addr = bind_addr("0.0.0.0", 8080).unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(bind_addr("not an ip", 80).is_err());
    }
}
