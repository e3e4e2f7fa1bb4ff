//! Printer adapters for sending ESC/POS data
//!
//! Supports:
//! - Local device printers (USB line printer files such as `/dev/usb/lp0`)

use crate::error::{PrintError, PrintResult};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

/// Default USB line printer device on Linux
pub const DEFAULT_DEVICE_PATH: &str = "/dev/usb/lp0";

/// Trait for printer adapters
#[allow(async_fn_in_trait)]
pub trait Printer {
    /// Send raw ESC/POS data to the printer
    async fn print(&self, data: &[u8]) -> PrintResult<()>;

    /// Check if the printer is present
    async fn is_online(&self) -> PrintResult<bool>;
}

/// Device file printer
///
/// Each job opens the device, writes the whole payload and closes it again.
/// Jobs are serialized: clones share one lock, so concurrent jobs on the same
/// printer never interleave their bytes.
#[derive(Debug, Clone)]
pub struct DevicePrinter {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl DevicePrinter {
    /// Create a printer for the given device path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Get the device path
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_job(&self, data: &[u8]) -> std::io::Result<()> {
        // Never create: a missing device must not turn into a regular file.
        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)
            .await?;

        file.write_all(data).await?;
        file.flush().await?;
        Ok(())
    }
}

impl Default for DevicePrinter {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE_PATH)
    }
}

impl Printer for DevicePrinter {
    #[instrument(skip(self, data), fields(path = %self.path.display(), data_len = data.len()))]
    async fn print(&self, data: &[u8]) -> PrintResult<()> {
        let _guard = self.lock.lock().await;

        info!("Sending {} bytes", data.len());

        self.write_job(data).await.map_err(|e| {
            let err = PrintError::from_io(&self.path, e);
            warn!(error = %err, "Print job failed");
            err
        })?;

        info!("Print job sent successfully");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn is_online(&self) -> PrintResult<bool> {
        match tokio::fs::try_exists(&self.path).await {
            Ok(true) => {
                info!("Printer present");
                Ok(true)
            }
            Ok(false) => {
                warn!("Printer device missing");
                Ok(false)
            }
            // A path component is a regular file: the device cannot exist there.
            Err(e) if e.kind() == io::ErrorKind::NotADirectory => {
                warn!(error = %e, "Printer device missing");
                Ok(false)
            }
            Err(source) => Err(PrintError::StatusCheckFailed {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
