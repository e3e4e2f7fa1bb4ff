//! Print API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /print | POST | 打印文本 (JSON `{"text": ...}` 或 text/plain) |

mod handler;

pub use handler::{PrintRequest, PrintResponse};

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/print", post(handler::print))
}
