// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Native engine library discovery, loading and invocation.
//!
//! The engine exports
//!
//! ```text
//! void FindNamesToJSON(char *text, char *options_json, void (*cb)(char *json));
//! char *GetVersion(void);   // optional
//! ```
//!
//! `FindNamesToJSON` reports its result by calling `cb` once, synchronously,
//! before it returns. The callback takes no user-data pointer, so the result
//! is parked in a thread-local slot that the calling thread drains right
//! after the call.

use std::cell::RefCell;
use std::ffi::{c_char, CStr, CString};
use std::path::{Path, PathBuf};

use libloading::Library;

use crate::config::consts::{FIND_NAMES_SYMBOL, LIBRARY_FILE_NAME, VERSION_SYMBOL};
use crate::errors::{FinderError, FinderResult};
use crate::observability::messages::gateway::{LibraryLoadFailed, LibraryLoaded, LibraryResolved};

/// Callback receiving the result JSON.
pub type ResultCallback = extern "C" fn(*const c_char);
/// Signature of the `FindNamesToJSON` export.
pub type FindNamesFn = unsafe extern "C" fn(*const c_char, *const c_char, ResultCallback);
/// Signature of the optional `GetVersion` export.
pub type VersionFn = unsafe extern "C" fn() -> *const c_char;

thread_local! {
    static CALLBACK_OUTPUT: RefCell<Option<Vec<u8>>> = const { RefCell::new(None) };
}

extern "C" fn receive_result(json: *const c_char) {
    if json.is_null() {
        return;
    }
    // SAFETY: the engine passes a NUL-terminated string that stays valid for
    // the duration of the callback. Decoding happens after the call so bad
    // bytes surface as an error instead of being replaced.
    let output = unsafe { CStr::from_ptr(json) }.to_bytes().to_vec();
    CALLBACK_OUTPUT.with(|slot| *slot.borrow_mut() = Some(output));
}

/// Maps `std::env::consts::OS` to the engine's platform directory name.
pub fn platform_dir(os: &str) -> FinderResult<&'static str> {
    match os {
        "linux" => Ok("linux"),
        "macos" => Ok("mac"),
        "windows" => Ok("win"),
        other => Err(FinderError::UnsupportedPlatform(other.to_string())),
    }
}

/// A loaded engine library with its exports resolved.
pub struct NativeLibrary {
    path: PathBuf,
    find_names: FindNamesFn,
    get_version: Option<VersionFn>,
    // Keeps the code behind the function pointers mapped.
    _library: Option<Library>,
}

impl NativeLibrary {
    /// Path of the engine library for the running platform under `root`.
    pub fn locate<P: AsRef<Path>>(root: P) -> FinderResult<PathBuf> {
        let platform = platform_dir(std::env::consts::OS)?;
        let path = root.as_ref().join(platform).join(LIBRARY_FILE_NAME);
        tracing::debug!(
            "{}",
            LibraryResolved {
                platform,
                library_path: &path.display().to_string(),
            }
        );
        Ok(path)
    }

    /// Locates and loads the library for the running platform.
    pub fn load_for_platform<P: AsRef<Path>>(root: P) -> FinderResult<Self> {
        let path = Self::locate(root)?;
        Self::load(path)
    }

    /// Opens the library at `path` and resolves its exports.
    ///
    /// A missing `FindNamesToJSON` export fails the load; a missing
    /// `GetVersion` export does not.
    pub fn load<P: AsRef<Path>>(path: P) -> FinderResult<Self> {
        let path = path.as_ref().to_path_buf();
        let path_str = path.display().to_string();
        let fail = |reason: String| {
            let error = FinderError::LibraryLoad {
                path: path_str.clone(),
                reason,
            };
            tracing::error!(
                "{}",
                LibraryLoadFailed {
                    library_path: &path_str,
                    error: &error,
                }
            );
            error
        };

        // SAFETY: loading runs the library's initializers; the engine library
        // is trusted code shipped alongside this crate.
        let library = unsafe { Library::new(&path) }.map_err(|e| fail(e.to_string()))?;

        // SAFETY: the symbol types match the engine's C declarations.
        let find_names = unsafe { library.get::<FindNamesFn>(FIND_NAMES_SYMBOL) }
            .map(|symbol| *symbol)
            .map_err(|e| fail(e.to_string()))?;
        let get_version = unsafe { library.get::<VersionFn>(VERSION_SYMBOL) }
            .map(|symbol| *symbol)
            .ok();

        tracing::info!(
            "{}",
            LibraryLoaded {
                library_path: &path_str,
                symbol: "FindNamesToJSON",
            }
        );

        Ok(Self {
            path,
            find_names,
            get_version,
            _library: Some(library),
        })
    }

    /// Wraps exports that are linked into the current process.
    ///
    /// # Safety
    /// `find_names` must follow the `FindNamesToJSON` contract and
    /// `get_version`, when given, must return a static NUL-terminated string.
    pub unsafe fn from_exports(
        label: impl Into<PathBuf>,
        find_names: FindNamesFn,
        get_version: Option<VersionFn>,
    ) -> Self {
        Self {
            path: label.into(),
            find_names,
            get_version,
            _library: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Calls the engine and returns whatever its callback delivered.
    ///
    /// Blocks until the native call returns. `Ok(None)` means the callback
    /// never fired. Output that is not UTF-8 is a schema error.
    pub fn find_names_json(&self, text: &str, options_json: &str) -> FinderResult<Option<String>> {
        let text = CString::new(text)
            .map_err(|_| FinderError::InvalidRequest("text contains a NUL byte".to_string()))?;
        let options = CString::new(options_json).map_err(|_| {
            FinderError::InvalidRequest("options contain a NUL byte".to_string())
        })?;

        CALLBACK_OUTPUT.with(|slot| slot.borrow_mut().take());
        // SAFETY: both strings outlive the call; the callback only runs
        // during the call, on this thread.
        unsafe { (self.find_names)(text.as_ptr(), options.as_ptr(), receive_result) };
        CALLBACK_OUTPUT
            .with(|slot| slot.borrow_mut().take())
            .map(|bytes| {
                String::from_utf8(bytes).map_err(|e| {
                    FinderError::Schema(format!("engine output is not valid UTF-8: {}", e))
                })
            })
            .transpose()
    }

    /// Engine version, if the library exports one.
    pub fn version(&self) -> Option<String> {
        let get_version = self.get_version?;
        // SAFETY: the export returns a static string or null.
        let raw = unsafe { get_version() };
        if raw.is_null() {
            return None;
        }
        Some(unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned())
    }
}
