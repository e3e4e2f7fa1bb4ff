//! Receipt Print Server - 网络打印服务
//!
//! 通过 HTTP 接收文本，编码为 ESC/POS 后写入 USB 小票打印机设备。
//!
//! # 模块结构
//!
//! ```text
//! receipt-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器 (/print, /status)
//! ├── middleware/    # 请求日志
//! └── utils/         # 日志初始化
//! ```

pub mod api;
pub mod core;
pub mod middleware;
pub mod utils;

// Re-export 公共类型
pub use crate::api::build_app;
pub use crate::core::{ApiError, Config, Server, ServerState};
pub use crate::utils::logger::init_logger_with_file;

/// 设置运行环境: 加载 .env 并初始化日志
pub fn setup_environment() -> Config {
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
