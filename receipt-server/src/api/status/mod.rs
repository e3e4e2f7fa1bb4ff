//! Printer status 路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /status | GET | 打印机设备是否存在 |

mod handler;

pub use handler::StatusResponse;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/status", get(handler::status))
}
