//! # receipt-printer
//!
//! ESC/POS receipt printing over a local device file (e.g. `/dev/usb/lp0`).
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ESC/POS command building
//! - Writing raw job bytes to a USB line-printer device
//! - Device presence checks
//!
//! The HTTP surface lives in `receipt-server`.
//!
//! ## Example
//!
//! ```ignore
//! use receipt_printer::{DevicePrinter, Printer, encode_receipt};
//!
//! let printer = DevicePrinter::new("/dev/usb/lp0");
//! printer.print(&encode_receipt("Hello")).await?;
//! ```

mod error;
mod escpos;
mod printer;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use escpos::{CUT_FULL, EscPosBuilder, FEED_LINES, INIT, encode_receipt};
pub use printer::{DEFAULT_DEVICE_PATH, DevicePrinter, Printer};
