use axum::Json;
use axum::extract::State;
use receipt_printer::Printer;
use serde::{Deserialize, Serialize};

use crate::core::{Result, ServerState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Device path exists. Says nothing about power or paper.
    pub printer_available: bool,
}

/// GET /status
pub async fn status(State(state): State<ServerState>) -> Result<Json<StatusResponse>> {
    let printer_available = state.printer.is_online().await?;
    Ok(Json(StatusResponse { printer_available }))
}
