/// Capacity of the compiler log capture, in bytes.
pub const INFO_LOG_CAPACITY: usize = 1024;

/// Fixed-size capture buffer for a compiler info log.
///
/// Owned by a single compile call. Logs longer than the capacity are cut at
/// the last UTF-8 boundary that fits; the driver is not queried again.
pub struct InfoLog {
    buf: [u8; INFO_LOG_CAPACITY],
    len: usize,
    truncated: bool,
}

impl InfoLog {
    pub fn new() -> Self {
        Self {
            buf: [0; INFO_LOG_CAPACITY],
            len: 0,
            truncated: false,
        }
    }

    pub fn capture(&mut self, log: &str) {
        let mut end = log.len().min(INFO_LOG_CAPACITY);
        while !log.is_char_boundary(end) {
            end -= 1;
        }

        self.buf[..end].copy_from_slice(&log.as_bytes()[..end]);
        self.len = end;
        self.truncated = end < log.len();
    }

    pub fn as_str(&self) -> &str {
        // Only whole chars of a `&str` are ever copied in.
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for InfoLog {
    fn default() -> Self {
        Self::new()
    }
}
