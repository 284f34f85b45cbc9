//! Listening socket and shutdown trigger for the widget daemon.

use anyhow::{Context, Result};
use listenfd::ListenFd;
use tokio::net::TcpListener;
use tracing::info;

/// Take over a socket handed in by a supervisor, or bind `host:port` ourselves.
pub async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    if let Some(inherited) = ListenFd::from_env().take_tcp_listener(0)? {
        inherited.set_nonblocking(true)?;
        let listener = TcpListener::from_std(inherited)?;
        info!("🔌 Widget socket inherited from supervisor: {}", listener.local_addr()?);
        return Ok(listener);
    }

    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Cannot bind widget listener to {host}:{port}"))
}

/// Resolves on Ctrl+C or SIGTERM; in-flight widget requests finish first.
#[allow(
    clippy::expect_used,
    reason = "a daemon that cannot observe signals should not start serving"
)]
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => info!("🛑 Ctrl+C received, stopping widget server"),
            _ = sigterm.recv() => info!("🛑 SIGTERM received, stopping widget server"),
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        info!("🛑 Ctrl+C received, stopping widget server");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let listener = bind("127.0.0.1", 0).await.expect("bind succeeds");
        assert_ne!(listener.local_addr().expect("local addr").port(), 0);
    }

    #[tokio::test]
    async fn test_bind_rejects_unresolvable_host() {
        assert!(bind("not a host", 8787).await.is_err());
    }
}
