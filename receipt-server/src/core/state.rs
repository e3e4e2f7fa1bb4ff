//! Shared application state

use receipt_printer::DevicePrinter;

use crate::core::Config;

/// 服务器状态 - 每个请求共享
///
/// Cloning is cheap; all clones share the same device lock.
#[derive(Debug, Clone)]
pub struct ServerState {
    pub printer: DevicePrinter,
}

impl ServerState {
    pub fn new(config: &Config) -> Self {
        Self {
            printer: DevicePrinter::new(&config.printer_device),
        }
    }
}
