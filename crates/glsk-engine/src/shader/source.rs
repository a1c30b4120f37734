/// One piece of shader source text with an explicit length.
///
/// `length < 0` means the fragment is NUL-terminated: it ends at the first
/// NUL byte (or the end of the slice). A non-negative length is the declared
/// byte count, clamped to the slice.
#[derive(Debug, Copy, Clone)]
pub struct SourceFragment<'a> {
    bytes: &'a [u8],
    length: isize,
}

impl<'a> SourceFragment<'a> {
    pub const fn new(bytes: &'a [u8], length: isize) -> Self {
        Self { bytes, length }
    }

    pub const fn nul_terminated(bytes: &'a [u8]) -> Self {
        Self::new(bytes, -1)
    }

    /// The bytes this fragment contributes.
    pub fn resolve(&self) -> &'a [u8] {
        let end = if self.length < 0 {
            self.bytes
                .iter()
                .position(|&b| b == 0)
                .unwrap_or(self.bytes.len())
        } else {
            (self.length as usize).min(self.bytes.len())
        };
        &self.bytes[..end]
    }
}

/// Concatenates fragments in order into one source string.
///
/// Invalid UTF-8 is replaced rather than rejected; the compiler reports
/// whatever it makes of the result.
pub fn assemble(fragments: &[SourceFragment<'_>]) -> String {
    let total: usize = fragments.iter().map(|f| f.resolve().len()).sum();
    let mut bytes = Vec::with_capacity(total);
    for fragment in fragments {
        bytes.extend_from_slice(fragment.resolve());
    }
    String::from_utf8_lossy(&bytes).into_owned()
}
