use libc::stat;

use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::{io, mem};

/// Returns the size in bytes of the filesystem object at `path`.
///
/// Uses `stat(2)`, so symbolic links are followed. The call never
/// opens the file and never blocks on its contents.
pub(crate) fn sys_file_size(path: &Path) -> io::Result<u64> {
    let c_path = CString::new(path.as_os_str().as_bytes())?;
    let mut st: libc::stat = unsafe { mem::zeroed() };

    let rc = unsafe { stat(c_path.as_ptr(), &mut st) };
    if rc < 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(st.st_size.max(0) as u64)
}
