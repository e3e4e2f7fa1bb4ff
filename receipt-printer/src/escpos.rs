//! ESC/POS command builder
//!
//! Provides a fluent API for building ESC/POS print data.

/// ESC @ - Initialize printer
pub const INIT: [u8; 2] = [0x1B, 0x40];

/// GS V 0 - Full cut
pub const CUT_FULL: [u8; 3] = [0x1D, 0x56, 0x00];

/// Blank lines fed before cutting so the text clears the cutter
pub const FEED_LINES: usize = 6;

/// ESC/POS command builder
///
/// Builds ESC/POS byte sequences for thermal printers.
/// Text is written as raw UTF-8.
pub struct EscPosBuilder {
    buf: Vec<u8>,
}

impl EscPosBuilder {
    /// Create a new builder; the buffer starts with the initialize command
    pub fn new() -> Self {
        let mut buf = Vec::with_capacity(256);
        buf.extend_from_slice(&INIT);
        Self { buf }
    }

    // === Text Output ===

    /// Write raw text
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.extend_from_slice(s.as_bytes());
        self
    }

    /// Write `n` line feeds
    pub fn newlines(&mut self, n: usize) -> &mut Self {
        self.buf.extend(std::iter::repeat_n(b'\n', n));
        self
    }

    // === Paper Control ===

    /// Cut paper (full cut)
    pub fn cut(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&CUT_FULL);
        self
    }

    // === Build ===

    /// Take the final byte buffer
    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for EscPosBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a plain-text receipt: initialize, text, paper feed, full cut.
///
/// Never fails; an empty string still yields a valid (blank) job.
pub fn encode_receipt(text: &str) -> Vec<u8> {
    let mut b = EscPosBuilder::new();
    b.text(text).newlines(FEED_LINES).cut();
    b.build()
}
