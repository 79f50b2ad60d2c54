//! Windows platform abstraction layer.
//!
//! Mirrors the Unix layer and exposes identical function names and
//! semantics where possible.

use std::ffi::c_void;
use std::io;
use std::iter;
use std::mem;
use std::os::windows::ffi::OsStrExt;
use std::path::Path;

use windows_sys::Win32::Storage::FileSystem::{
    GetFileAttributesExW, GetFileExInfoStandard, WIN32_FILE_ATTRIBUTE_DATA,
};

/// Returns the size in bytes of the filesystem object at `path`.
///
/// Queries the file attributes only; the file is never opened.
pub(crate) fn sys_file_size(path: &Path) -> io::Result<u64> {
    let wide: Vec<u16> = path
        .as_os_str()
        .encode_wide()
        .chain(iter::once(0))
        .collect();

    let mut data: WIN32_FILE_ATTRIBUTE_DATA = unsafe { mem::zeroed() };

    let ok = unsafe {
        GetFileAttributesExW(
            wide.as_ptr(),
            GetFileExInfoStandard,
            &mut data as *mut _ as *mut c_void,
        )
    };

    if ok == 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(((data.nFileSizeHigh as u64) << 32) | data.nFileSizeLow as u64)
}
