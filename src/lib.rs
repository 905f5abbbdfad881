/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! al_efx resolves OpenAL's EFX (Environmental Audio Extensions) entry
//! points at runtime and forwards calls through them.
//!
//! EFX functions are not part of OpenAL's static export surface: an
//! implementation hands them out one by one through `alGetProcAddress`.
//! [EfxProcs] fetches all of them once and stores each as a strongly-typed
//! callable, so "resolved before use" holds by construction and a missing
//! extension surfaces as [Error::Unresolved] rather than as a call through
//! a null pointer.
//!
//! In various places, the terms "core" and "extension" are used to
//! distinguish functions the OpenAL library exports statically (the
//! "core", reachable with an ordinary symbol lookup) from functions that
//! exist only behind the extension-address resolver (the "extension").
//! [al::OpenAlLib] covers the former, [efx] the latter.
//!
//! Resources:
//! - [OpenAL 1.1 specification](https://www.openal.org/documentation/openal-1.1-specification.pdf)
//! - [Effects Extension Guide](https://openal-soft.org/misc-downloads/Effects%20Extension%20Guide.pdf)

// Most identifiers in this crate mirror OpenAL's C names exactly
// (alGenFilters, LPALGENFILTERS, ...), which are not snake case.
#![allow(non_snake_case)]

#[macro_use]
mod log;

pub mod al;
pub mod efx;

pub use al::OpenAlLib;
pub use efx::reverb::ReverbProperties;
pub use efx::EfxProcs;

use thiserror::Error;

/// Errors reported while opening an OpenAL library or calling through a
/// resolved EFX entry point.
#[derive(Debug, Error)]
pub enum Error {
    /// No OpenAL implementation could be opened.
    #[error("could not open an OpenAL library: {0}")]
    LibraryOpen(#[from] libloading::Error),
    /// The opened library lacks a core symbol the loader itself needs.
    #[error("OpenAL library does not export core symbol {0}")]
    MissingCoreSymbol(&'static str),
    /// The named EFX entry point did not resolve, either because the
    /// implementation does not support the extension or because the
    /// resolver returned null for it.
    #[error("EFX entry point {0} is not available")]
    Unresolved(&'static str),
    /// The implementation reported an error through `alGetError` while a
    /// call sequence was being applied.
    #[error("{context}: AL error {code:#06x}")]
    AlError {
        context: &'static str,
        code: al::al_types::ALenum,
    },
}
