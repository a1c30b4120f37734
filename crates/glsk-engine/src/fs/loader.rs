use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Returns the size in bytes of the file at `path`.
///
/// `0` covers empty, nonexistent, non-regular and unreadable files alike;
/// callers must not attempt a load when this returns `0`.
pub fn size_of(path: impl AsRef<Path>) -> u64 {
    let path = path.as_ref();
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => meta.len(),
        Ok(_) => {
            log::warn!("{}: not a regular file", path.display());
            0
        }
        Err(e) => {
            log::warn!("{}: cannot stat: {e}", path.display());
            0
        }
    }
}

/// Reads up to `buffer.len()` bytes from the file at `path` into `buffer`.
///
/// Returns the number of bytes actually read, which may be less than the
/// capacity. A zero-capacity buffer returns `0` without opening the file,
/// and a failed open returns `0` with the buffer untouched.
pub fn load_into(path: impl AsRef<Path>, buffer: &mut [u8]) -> usize {
    let path = path.as_ref();
    if buffer.is_empty() {
        return 0;
    }

    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            log::warn!("{}: cannot open: {e}", path.display());
            return 0;
        }
    };

    let mut filled = 0;
    while filled < buffer.len() {
        match file.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                log::warn!("{}: read failed after {filled} bytes: {e}", path.display());
                break;
            }
        }
    }

    log::debug!("{}: read {filled}/{} bytes", path.display(), buffer.len());
    filled
}

/// Loads the whole file at `path`.
///
/// Returns `None` when the file is unusable or nothing could be read.
pub fn load(path: impl AsRef<Path>) -> Option<Vec<u8>> {
    let path = path.as_ref();
    let size = size_of(path);
    if size == 0 {
        return None;
    }

    let Ok(capacity) = usize::try_from(size) else {
        log::warn!("{}: {size} bytes does not fit in memory", path.display());
        return None;
    };

    let mut bytes = vec![0u8; capacity];
    let read = load_into(path, &mut bytes);
    if read == 0 {
        return None;
    }

    bytes.truncate(read);
    Some(bytes)
}
