use crate::sys::platform::sys_file_size;

use std::io;
use std::path::Path;

use tracing::trace;

/// Smallest size, in bytes, at which a file counts as ready.
const READY_THRESHOLD: u64 = 1;

/// A non-blocking readiness check for an external resource.
///
/// Implementations must be idempotent and side-effect free. A probe is
/// called at most once per task per scheduler pass, so it must return
/// quickly: any latency here stalls every other task for that tick.
pub trait Probe {
    /// Returns `true` once `resource` has reached its ready condition.
    ///
    /// A resource that does not exist yet and a resource that could not
    /// be inspected are both reported as `false`.
    fn is_ready(&self, resource: &Path) -> bool;
}

/// Probe backed by the filesystem.
///
/// A path is ready when it exists and its size is at least one byte.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsProbe;

impl FsProbe {
    /// Creates a new filesystem probe.
    pub fn new() -> Self {
        Self
    }

    /// Returns the size of the object at `path` without opening it.
    ///
    /// # Errors
    ///
    /// Returns the underlying OS error if the path cannot be inspected.
    pub fn file_size(&self, path: &Path) -> io::Result<u64> {
        sys_file_size(path)
    }
}

impl Probe for FsProbe {
    fn is_ready(&self, resource: &Path) -> bool {
        match self.file_size(resource) {
            Ok(size) => size >= READY_THRESHOLD,
            Err(err) => {
                trace!(path = %resource.display(), %err, "probe miss");
                false
            }
        }
    }
}
