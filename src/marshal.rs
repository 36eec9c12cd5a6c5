//! C-string marshaling helpers shared by the wrapper modules.

use std::ffi::{CStr, CString};

use libc::c_char;

/// Copies a null-terminated C string into an owned `String`.
/// Returns `None` for null pointers and invalid UTF-8.
pub(crate) fn ptr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .ok()
        .map(|s| s.to_owned())
}

pub(crate) fn str_to_cstring<T>(string: T) -> Result<CString, &'static str>
where
    T: AsRef<str>,
{
    let string = string.as_ref();
    if string.is_empty() {
        return Err("Failed to convert empty string to C");
    }
    CString::new(string).map_err(|_| "Failed converting rust string to CString")
}
