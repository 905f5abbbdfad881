/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Dynamic linkage to an OpenAL implementation.
//!
//! Nothing here links OpenAL at build time: the library is opened at
//! runtime with [libloading] and the few core entry points the EFX loader
//! needs are resolved from it once. All the extension entry points go
//! through [crate::efx] instead.
//!
//! See `AL/al.h` and `AL/alc.h` for the types and declarations this
//! mirrors.

#[allow(dead_code)]
pub mod al_types {
    use std::ffi;

    pub type ALboolean = ffi::c_char;
    pub type ALchar = ffi::c_char;
    pub type ALbyte = ffi::c_schar;
    pub type ALubyte = ffi::c_uchar;
    pub type ALshort = ffi::c_short;
    pub type ALushort = ffi::c_ushort;
    pub type ALint = ffi::c_int;
    pub type ALuint = ffi::c_uint;
    pub type ALsizei = ffi::c_int;
    pub type ALenum = ffi::c_int;
    pub type ALfloat = ffi::c_float;
    pub type ALdouble = ffi::c_double;
    pub type ALvoid = ffi::c_void;
}

#[allow(dead_code)]
pub mod alc_types {
    use std::ffi;

    /// Opaque type.
    pub type ALCdevice = ffi::c_void;
    /// Opaque type.
    pub type ALCcontext = ffi::c_void;

    pub type ALCboolean = ffi::c_char;
    pub type ALCchar = ffi::c_char;
    pub type ALCint = ffi::c_int;
    pub type ALCuint = ffi::c_uint;
    pub type ALCsizei = ffi::c_int;
    pub type ALCenum = ffi::c_int;
}

use crate::Error;
use al_types::*;
use alc_types::*;
use libloading::Library;
use std::ffi::{c_void, CStr, CString};

pub const AL_NO_ERROR: ALenum = 0;
pub const AL_FALSE: ALboolean = 0;
pub const AL_TRUE: ALboolean = 1;

/// Name of the context extension that provides the EFX object families.
pub const ALC_EXT_EFX_NAME: &str = "ALC_EXT_EFX";

type PFNALGETPROCADDRESS = unsafe extern "C" fn(fname: *const ALchar) -> *mut c_void;
type PFNALISEXTENSIONPRESENT = unsafe extern "C" fn(extname: *const ALchar) -> ALboolean;
type PFNALCISEXTENSIONPRESENT =
    unsafe extern "C" fn(device: *mut ALCdevice, extname: *const ALCchar) -> ALCboolean;
type PFNALGETERROR = unsafe extern "C" fn() -> ALenum;

/// Handle to an OpenAL implementation opened at runtime, with the core
/// entry points the EFX loader needs already resolved.
///
/// The function pointers are only valid while the [Library] they came from
/// stays loaded, so the handle lives in this struct alongside them.
pub struct OpenAlLib {
    alGetProcAddress: PFNALGETPROCADDRESS,
    alIsExtensionPresent: PFNALISEXTENSIONPRESENT,
    alcIsExtensionPresent: PFNALCISEXTENSIONPRESENT,
    alGetError: PFNALGETERROR,
    _library: Library,
}

impl OpenAlLib {
    /// Opens the library at `name` (a file name searched in the usual
    /// dynamic-linker locations, or an explicit path).
    pub fn open(name: &str) -> Result<OpenAlLib, Error> {
        let library = unsafe { Library::new(name) }?;

        unsafe fn core_symbol<T: Copy>(library: &Library, name: &'static str) -> Result<T, Error> {
            library
                .get::<T>(name.as_bytes())
                .map(|symbol| *symbol)
                .map_err(|_| Error::MissingCoreSymbol(name))
        }

        Ok(unsafe {
            OpenAlLib {
                alGetProcAddress: core_symbol(&library, "alGetProcAddress")?,
                alIsExtensionPresent: core_symbol(&library, "alIsExtensionPresent")?,
                alcIsExtensionPresent: core_symbol(&library, "alcIsExtensionPresent")?,
                alGetError: core_symbol(&library, "alGetError")?,
                _library: library,
            }
        })
    }

    /// Opens the first OpenAL implementation that can be found.
    ///
    /// The `AL_EFX_LIBRARY` environment variable overrides the search:
    /// when set, only that name is tried. Otherwise a per-OS candidate
    /// list is walked, most specific name first.
    pub fn open_default() -> Result<OpenAlLib, Error> {
        let mut last_error = None;
        for name in library_candidates() {
            match OpenAlLib::open(&name) {
                Ok(lib) => return Ok(lib),
                Err(e) => {
                    log_dbg!("Could not open {:?}: {}", name, e);
                    last_error = Some(e);
                }
            }
        }
        log!("No OpenAL implementation could be opened");
        Err(last_error.unwrap())
    }

    /// Looks up an extension entry point by exact name. A null return
    /// means the implementation does not provide it.
    pub fn get_proc_address(&self, name: &CStr) -> *mut c_void {
        unsafe { (self.alGetProcAddress)(name.as_ptr()) }
    }

    /// Reports whether the AL extension `name` is present.
    pub fn is_extension_present(&self, name: &str) -> bool {
        match extension_name(name) {
            Some(name) => unsafe { (self.alIsExtensionPresent)(name.as_ptr()) != AL_FALSE },
            None => false,
        }
    }

    /// Reports whether the context extension `name` is present on
    /// `device`. OpenAL permits a null device here, in which case the
    /// implementation answers for its defaults.
    pub fn is_alc_extension_present(&self, device: *mut ALCdevice, name: &str) -> bool {
        match extension_name(name) {
            Some(name) => unsafe { (self.alcIsExtensionPresent)(device, name.as_ptr()) != 0 },
            None => false,
        }
    }

    /// Reports whether EFX is available at all. Callers that care about a
    /// specific device should use [OpenAlLib::is_alc_extension_present]
    /// with that device instead.
    pub fn has_efx(&self) -> bool {
        self.is_alc_extension_present(std::ptr::null_mut(), ALC_EXT_EFX_NAME)
    }

    /// Pops and returns the current AL error state ([AL_NO_ERROR] when
    /// nothing went wrong since the last call).
    pub fn last_error(&self) -> ALenum {
        unsafe { (self.alGetError)() }
    }
}

/// Prepares an extension name for the C API. A string with an interior
/// NUL cannot name a real extension, so it converts to `None` rather
/// than panicking.
fn extension_name(name: &str) -> Option<CString> {
    CString::new(name).ok()
}

/// Library names to try, most specific first. `AL_EFX_LIBRARY` overrides
/// the whole list.
fn library_candidates() -> Vec<String> {
    if let Ok(name) = std::env::var("AL_EFX_LIBRARY") {
        if !name.is_empty() {
            return vec![name];
        }
    }
    default_library_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

#[cfg(target_os = "linux")]
fn default_library_names() -> &'static [&'static str] {
    &["libopenal.so.1", "libopenal.so"]
}
#[cfg(target_os = "macos")]
fn default_library_names() -> &'static [&'static str] {
    &[
        "libopenal.1.dylib",
        "libopenal.dylib",
        "/System/Library/Frameworks/OpenAL.framework/OpenAL",
    ]
}
#[cfg(target_os = "windows")]
fn default_library_names() -> &'static [&'static str] {
    // soft_oal.dll is OpenAL Soft's preferred name for a DLL shipped
    // next to an application; OpenAL32.dll is the router/installed name.
    &["soft_oal.dll", "OpenAL32.dll"]
}
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn default_library_names() -> &'static [&'static str] {
    &["libopenal.so"]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn env_var_overrides_candidate_list() {
        std::env::set_var("AL_EFX_LIBRARY", "/tmp/libopenal_override.so");
        assert_eq!(
            library_candidates(),
            vec!["/tmp/libopenal_override.so".to_string()]
        );

        // An empty value means "unset".
        std::env::set_var("AL_EFX_LIBRARY", "");
        assert_eq!(
            library_candidates(),
            default_library_names()
                .iter()
                .map(|name| name.to_string())
                .collect::<Vec<_>>()
        );

        std::env::remove_var("AL_EFX_LIBRARY");
        assert!(!library_candidates().is_empty());
    }

    #[test]
    fn interior_nul_is_not_a_valid_extension_name() {
        assert!(extension_name(ALC_EXT_EFX_NAME).is_some());
        assert!(extension_name("ALC_EXT\0_EFX").is_none());
    }

    #[test]
    #[serial]
    fn opening_a_missing_library_is_a_reported_error() {
        std::env::set_var("AL_EFX_LIBRARY", "/nonexistent/libopenal.so");
        assert!(matches!(
            OpenAlLib::open_default(),
            Err(Error::LibraryOpen(_))
        ));
        std::env::remove_var("AL_EFX_LIBRARY");
    }
}
