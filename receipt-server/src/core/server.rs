//! Server Implementation
//!
//! HTTP 服务器启动和管理

use crate::api::build_app;
use crate::core::{Config, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let state = ServerState::new(&config);
        Self { config, state }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        tracing::info!(
            device = %self.config.printer_device.display(),
            "Print server listening on {}",
            addr
        );

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, build_app(self.state.clone()))
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
