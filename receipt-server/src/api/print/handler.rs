//! Print API Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request, State};
use http::header::CONTENT_TYPE;
use receipt_printer::{Printer, encode_receipt};
use serde::{Deserialize, Serialize};

use crate::core::{ApiError, Result, ServerState};

/// Print request body
#[derive(Debug, Clone, Deserialize)]
pub struct PrintRequest {
    pub text: String,
}

/// Print response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintResponse {
    /// Always "printed"
    pub status: String,
    /// Length of the submitted text in characters
    pub length: usize,
}

/// Accepts `{"text": "..."}` or, with `Content-Type: text/plain`, the raw body as text.
impl<S: Send + Sync> FromRequest<S> for PrintRequest {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let is_plain = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|ct| ct.split(';').next())
            .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("text/plain"));

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidBody(e.body_text()))?;

        if is_plain {
            let text = String::from_utf8(body.to_vec())
                .map_err(|e| ApiError::InvalidBody(format!("Body is not valid UTF-8: {}", e)))?;
            return Ok(PrintRequest { text });
        }

        serde_json::from_slice(&body)
            .map_err(|e| ApiError::InvalidBody(format!("Invalid print request: {}", e)))
    }
}

/// POST /print
///
/// Encodes the text as an ESC/POS receipt and writes it to the printer device.
pub async fn print(
    State(state): State<ServerState>,
    req: PrintRequest,
) -> Result<Json<PrintResponse>> {
    let data = encode_receipt(&req.text);

    state.printer.print(&data).await?;

    let length = req.text.chars().count();
    tracing::info!(length, bytes = data.len(), "Receipt printed");

    Ok(Json(PrintResponse {
        status: "printed".to_string(),
        length,
    }))
}
