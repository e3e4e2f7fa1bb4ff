use receipt_printer::DEFAULT_DEVICE_PATH;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// 服务器配置 - 打印服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PRINTER_DEVICE | /dev/usb/lp0 | 打印机设备路径 |
/// | HTTP_HOST | 0.0.0.0 | HTTP 监听地址 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，存在时按天滚动写入文件 |
///
/// # 示例
///
/// ```ignore
/// PRINTER_DEVICE=/dev/usb/lp1 HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 打印机设备文件路径
    pub printer_device: PathBuf,
    /// HTTP 监听地址
    pub http_host: IpAddr,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            printer_device: std::env::var("PRINTER_DEVICE")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_DEVICE_PATH.into())
                .into(),
            http_host: std::env::var("HTTP_HOST")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
        }
    }

    /// 使用指定设备路径覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_device(printer_device: impl Into<PathBuf>) -> Self {
        let mut config = Self::from_env();
        config.printer_device = printer_device.into();
        config
    }

    /// 监听地址
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http_host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
