/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Loading and forwarding of the EFX extension entry points.
//!
//! EFX defines three object families (filters, effects, auxiliary effect
//! slots), each with the same eleven-operation shape: Gen/Delete/Is,
//! integer/float setters in scalar and vector form, and the matching
//! getters. None of these are exported statically; each must be fetched
//! through the extension-address resolver by exact name.
//!
//! [EfxProcs] does that fetching once, up front, and keeps every resolved
//! entry point as a strongly-typed callable. Forwarding methods pass their
//! arguments through verbatim; an entry point the implementation did not
//! provide reports [Error::Unresolved] instead of faulting.
//!
//! See `AL/efx.h` for the declarations this mirrors.

pub mod constants;
pub mod reverb;

use crate::al::{OpenAlLib, AL_FALSE};
use crate::al::al_types::*;
use crate::Error;
use std::ffi::{c_void, CStr};
use std::mem;

// Function pointer types for the extension entry points, named as in
// `AL/efx.h`.

pub type LPALGENFILTERS = unsafe extern "C" fn(n: ALsizei, filters: *mut ALuint);
pub type LPALDELETEFILTERS = unsafe extern "C" fn(n: ALsizei, filters: *const ALuint);
pub type LPALISFILTER = unsafe extern "C" fn(filter: ALuint) -> ALboolean;
pub type LPALFILTERI = unsafe extern "C" fn(filter: ALuint, param: ALenum, iValue: ALint);
pub type LPALFILTERIV = unsafe extern "C" fn(filter: ALuint, param: ALenum, piValues: *const ALint);
pub type LPALFILTERF = unsafe extern "C" fn(filter: ALuint, param: ALenum, flValue: ALfloat);
pub type LPALFILTERFV =
    unsafe extern "C" fn(filter: ALuint, param: ALenum, pflValues: *const ALfloat);
pub type LPALGETFILTERI = unsafe extern "C" fn(filter: ALuint, param: ALenum, piValue: *mut ALint);
pub type LPALGETFILTERIV =
    unsafe extern "C" fn(filter: ALuint, param: ALenum, piValues: *mut ALint);
pub type LPALGETFILTERF =
    unsafe extern "C" fn(filter: ALuint, param: ALenum, pflValue: *mut ALfloat);
pub type LPALGETFILTERFV =
    unsafe extern "C" fn(filter: ALuint, param: ALenum, pflValues: *mut ALfloat);

pub type LPALGENEFFECTS = unsafe extern "C" fn(n: ALsizei, effects: *mut ALuint);
pub type LPALDELETEEFFECTS = unsafe extern "C" fn(n: ALsizei, effects: *const ALuint);
pub type LPALISEFFECT = unsafe extern "C" fn(effect: ALuint) -> ALboolean;
pub type LPALEFFECTI = unsafe extern "C" fn(effect: ALuint, param: ALenum, iValue: ALint);
pub type LPALEFFECTIV = unsafe extern "C" fn(effect: ALuint, param: ALenum, piValues: *const ALint);
pub type LPALEFFECTF = unsafe extern "C" fn(effect: ALuint, param: ALenum, flValue: ALfloat);
pub type LPALEFFECTFV =
    unsafe extern "C" fn(effect: ALuint, param: ALenum, pflValues: *const ALfloat);
pub type LPALGETEFFECTI = unsafe extern "C" fn(effect: ALuint, param: ALenum, piValue: *mut ALint);
pub type LPALGETEFFECTIV =
    unsafe extern "C" fn(effect: ALuint, param: ALenum, piValues: *mut ALint);
pub type LPALGETEFFECTF =
    unsafe extern "C" fn(effect: ALuint, param: ALenum, pflValue: *mut ALfloat);
pub type LPALGETEFFECTFV =
    unsafe extern "C" fn(effect: ALuint, param: ALenum, pflValues: *mut ALfloat);

pub type LPALGENAUXILIARYEFFECTSLOTS =
    unsafe extern "C" fn(n: ALsizei, effectslots: *mut ALuint);
pub type LPALDELETEAUXILIARYEFFECTSLOTS =
    unsafe extern "C" fn(n: ALsizei, effectslots: *const ALuint);
pub type LPALISAUXILIARYEFFECTSLOT = unsafe extern "C" fn(effectslot: ALuint) -> ALboolean;
pub type LPALAUXILIARYEFFECTSLOTI =
    unsafe extern "C" fn(effectslot: ALuint, param: ALenum, iValue: ALint);
pub type LPALAUXILIARYEFFECTSLOTIV =
    unsafe extern "C" fn(effectslot: ALuint, param: ALenum, piValues: *const ALint);
pub type LPALAUXILIARYEFFECTSLOTF =
    unsafe extern "C" fn(effectslot: ALuint, param: ALenum, flValue: ALfloat);
pub type LPALAUXILIARYEFFECTSLOTFV =
    unsafe extern "C" fn(effectslot: ALuint, param: ALenum, pflValues: *const ALfloat);
pub type LPALGETAUXILIARYEFFECTSLOTI =
    unsafe extern "C" fn(effectslot: ALuint, param: ALenum, piValue: *mut ALint);
pub type LPALGETAUXILIARYEFFECTSLOTIV =
    unsafe extern "C" fn(effectslot: ALuint, param: ALenum, piValues: *mut ALint);
pub type LPALGETAUXILIARYEFFECTSLOTF =
    unsafe extern "C" fn(effectslot: ALuint, param: ALenum, pflValue: *mut ALfloat);
pub type LPALGETAUXILIARYEFFECTSLOTFV =
    unsafe extern "C" fn(effectslot: ALuint, param: ALenum, pflValues: *mut ALfloat);

// Resolves one entry point: the symbol name is "al" plus the field name,
// and a null result leaves the slot unfilled.
//
// The resolver hands entry points back as data pointers. On every platform
// OpenAL supports, a data pointer round-trips losslessly to a function
// pointer of the declared signature, which is what the cast below relies
// on.
macro_rules! load_proc {
    ($get_proc:ident, $field:ident) => {{
        let sym = concat!("al", stringify!($field), "\0");
        let ptr = $get_proc(CStr::from_bytes_with_nul(sym.as_bytes()).unwrap());
        if ptr.is_null() {
            log_dbg!("{} did not resolve", &sym[..sym.len() - 1]);
            None
        } else {
            Some(unsafe { mem::transmute_copy(&ptr) })
        }
    }};
}

// One field list drives the struct, the loader and the missing-name
// report, so the three cannot drift apart.
macro_rules! efx_entry_points {
    ($($field:ident: $lpal:ty,)+) => {
        /// Capability object holding every EFX entry point that resolved.
        ///
        /// Constructed once by [EfxProcs::load] (or [EfxProcs::load_with], against
        /// another resolver) and read-only afterwards. The forwarding methods are
        /// named exactly after the C entry points and take identical parameter
        /// lists; a slot the implementation did not provide reports
        /// [Error::Unresolved] instead of calling through null.
        ///
        /// The forwarders are `unsafe` for the same reason the C functions are:
        /// identifier validity and out-pointer sizing are the caller's contract
        /// with the underlying implementation, passed through unchanged.
        pub struct EfxProcs {
            $($field: Option<$lpal>,)+
        }

        impl EfxProcs {
            /// Resolves all 33 EFX entry points through `lib`'s
            /// `alGetProcAddress`.
            ///
            /// An entry point the implementation does not provide is recorded as
            /// unresolved, not an error: query [EfxProcs::missing], or just call
            /// and handle [Error::Unresolved]. Resolution is deterministic, so
            /// loading twice against the same library yields identical slots.
            pub fn load(lib: &OpenAlLib) -> EfxProcs {
                EfxProcs::load_with(|name| lib.get_proc_address(name))
            }

            /// Like [EfxProcs::load], but against an arbitrary resolver. This is
            /// the seam tests use to substitute capture or storage stubs for a
            /// real implementation.
            pub fn load_with<F: FnMut(&CStr) -> *mut c_void>(mut get_proc: F) -> EfxProcs {
                EfxProcs {
                    $($field: load_proc!(get_proc, $field),)+
                }
            }

            /// Names of the entry points that did not resolve, in declaration
            /// order. Empty when the implementation exposes the whole extension.
            pub fn missing(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                $(if self.$field.is_none() {
                    missing.push(concat!("al", stringify!($field)));
                })+
                missing
            }

            /// True when every one of the 33 entry points resolved.
            pub fn is_complete(&self) -> bool {
                self.missing().is_empty()
            }
        }
    };
}

efx_entry_points! {
    GenFilters: LPALGENFILTERS,
    DeleteFilters: LPALDELETEFILTERS,
    IsFilter: LPALISFILTER,
    Filteri: LPALFILTERI,
    Filteriv: LPALFILTERIV,
    Filterf: LPALFILTERF,
    Filterfv: LPALFILTERFV,
    GetFilteri: LPALGETFILTERI,
    GetFilteriv: LPALGETFILTERIV,
    GetFilterf: LPALGETFILTERF,
    GetFilterfv: LPALGETFILTERFV,

    GenEffects: LPALGENEFFECTS,
    DeleteEffects: LPALDELETEEFFECTS,
    IsEffect: LPALISEFFECT,
    Effecti: LPALEFFECTI,
    Effectiv: LPALEFFECTIV,
    Effectf: LPALEFFECTF,
    Effectfv: LPALEFFECTFV,
    GetEffecti: LPALGETEFFECTI,
    GetEffectiv: LPALGETEFFECTIV,
    GetEffectf: LPALGETEFFECTF,
    GetEffectfv: LPALGETEFFECTFV,

    GenAuxiliaryEffectSlots: LPALGENAUXILIARYEFFECTSLOTS,
    DeleteAuxiliaryEffectSlots: LPALDELETEAUXILIARYEFFECTSLOTS,
    IsAuxiliaryEffectSlot: LPALISAUXILIARYEFFECTSLOT,
    AuxiliaryEffectSloti: LPALAUXILIARYEFFECTSLOTI,
    AuxiliaryEffectSlotiv: LPALAUXILIARYEFFECTSLOTIV,
    AuxiliaryEffectSlotf: LPALAUXILIARYEFFECTSLOTF,
    AuxiliaryEffectSlotfv: LPALAUXILIARYEFFECTSLOTFV,
    GetAuxiliaryEffectSloti: LPALGETAUXILIARYEFFECTSLOTI,
    GetAuxiliaryEffectSlotiv: LPALGETAUXILIARYEFFECTSLOTIV,
    GetAuxiliaryEffectSlotf: LPALGETAUXILIARYEFFECTSLOTF,
    GetAuxiliaryEffectSlotfv: LPALGETAUXILIARYEFFECTSLOTFV,
}

impl EfxProcs {
    // === Filter objects ===

    pub unsafe fn alGenFilters(&self, n: ALsizei, filters: *mut ALuint) -> Result<(), Error> {
        (self.GenFilters.ok_or(Error::Unresolved("alGenFilters"))?)(n, filters);
        Ok(())
    }
    pub unsafe fn alDeleteFilters(&self, n: ALsizei, filters: *const ALuint) -> Result<(), Error> {
        (self.DeleteFilters.ok_or(Error::Unresolved("alDeleteFilters"))?)(n, filters);
        Ok(())
    }
    pub unsafe fn alIsFilter(&self, filter: ALuint) -> Result<ALboolean, Error> {
        Ok((self.IsFilter.ok_or(Error::Unresolved("alIsFilter"))?)(
            filter,
        ))
    }
    pub unsafe fn alFilteri(
        &self,
        filter: ALuint,
        param: ALenum,
        iValue: ALint,
    ) -> Result<(), Error> {
        (self.Filteri.ok_or(Error::Unresolved("alFilteri"))?)(filter, param, iValue);
        Ok(())
    }
    pub unsafe fn alFilteriv(
        &self,
        filter: ALuint,
        param: ALenum,
        piValues: *const ALint,
    ) -> Result<(), Error> {
        (self.Filteriv.ok_or(Error::Unresolved("alFilteriv"))?)(filter, param, piValues);
        Ok(())
    }
    pub unsafe fn alFilterf(
        &self,
        filter: ALuint,
        param: ALenum,
        flValue: ALfloat,
    ) -> Result<(), Error> {
        (self.Filterf.ok_or(Error::Unresolved("alFilterf"))?)(filter, param, flValue);
        Ok(())
    }
    pub unsafe fn alFilterfv(
        &self,
        filter: ALuint,
        param: ALenum,
        pflValues: *const ALfloat,
    ) -> Result<(), Error> {
        (self.Filterfv.ok_or(Error::Unresolved("alFilterfv"))?)(filter, param, pflValues);
        Ok(())
    }
    pub unsafe fn alGetFilteri(
        &self,
        filter: ALuint,
        param: ALenum,
        piValue: *mut ALint,
    ) -> Result<(), Error> {
        (self.GetFilteri.ok_or(Error::Unresolved("alGetFilteri"))?)(filter, param, piValue);
        Ok(())
    }
    pub unsafe fn alGetFilteriv(
        &self,
        filter: ALuint,
        param: ALenum,
        piValues: *mut ALint,
    ) -> Result<(), Error> {
        (self.GetFilteriv.ok_or(Error::Unresolved("alGetFilteriv"))?)(filter, param, piValues);
        Ok(())
    }
    pub unsafe fn alGetFilterf(
        &self,
        filter: ALuint,
        param: ALenum,
        pflValue: *mut ALfloat,
    ) -> Result<(), Error> {
        (self.GetFilterf.ok_or(Error::Unresolved("alGetFilterf"))?)(filter, param, pflValue);
        Ok(())
    }
    pub unsafe fn alGetFilterfv(
        &self,
        filter: ALuint,
        param: ALenum,
        pflValues: *mut ALfloat,
    ) -> Result<(), Error> {
        (self.GetFilterfv.ok_or(Error::Unresolved("alGetFilterfv"))?)(filter, param, pflValues);
        Ok(())
    }

    // === Effect objects ===

    pub unsafe fn alGenEffects(&self, n: ALsizei, effects: *mut ALuint) -> Result<(), Error> {
        (self.GenEffects.ok_or(Error::Unresolved("alGenEffects"))?)(n, effects);
        Ok(())
    }
    pub unsafe fn alDeleteEffects(&self, n: ALsizei, effects: *const ALuint) -> Result<(), Error> {
        (self.DeleteEffects.ok_or(Error::Unresolved("alDeleteEffects"))?)(n, effects);
        Ok(())
    }
    pub unsafe fn alIsEffect(&self, effect: ALuint) -> Result<ALboolean, Error> {
        Ok((self.IsEffect.ok_or(Error::Unresolved("alIsEffect"))?)(
            effect,
        ))
    }
    pub unsafe fn alEffecti(
        &self,
        effect: ALuint,
        param: ALenum,
        iValue: ALint,
    ) -> Result<(), Error> {
        (self.Effecti.ok_or(Error::Unresolved("alEffecti"))?)(effect, param, iValue);
        Ok(())
    }
    pub unsafe fn alEffectiv(
        &self,
        effect: ALuint,
        param: ALenum,
        piValues: *const ALint,
    ) -> Result<(), Error> {
        (self.Effectiv.ok_or(Error::Unresolved("alEffectiv"))?)(effect, param, piValues);
        Ok(())
    }
    pub unsafe fn alEffectf(
        &self,
        effect: ALuint,
        param: ALenum,
        flValue: ALfloat,
    ) -> Result<(), Error> {
        (self.Effectf.ok_or(Error::Unresolved("alEffectf"))?)(effect, param, flValue);
        Ok(())
    }
    pub unsafe fn alEffectfv(
        &self,
        effect: ALuint,
        param: ALenum,
        pflValues: *const ALfloat,
    ) -> Result<(), Error> {
        (self.Effectfv.ok_or(Error::Unresolved("alEffectfv"))?)(effect, param, pflValues);
        Ok(())
    }
    pub unsafe fn alGetEffecti(
        &self,
        effect: ALuint,
        param: ALenum,
        piValue: *mut ALint,
    ) -> Result<(), Error> {
        (self.GetEffecti.ok_or(Error::Unresolved("alGetEffecti"))?)(effect, param, piValue);
        Ok(())
    }
    pub unsafe fn alGetEffectiv(
        &self,
        effect: ALuint,
        param: ALenum,
        piValues: *mut ALint,
    ) -> Result<(), Error> {
        (self.GetEffectiv.ok_or(Error::Unresolved("alGetEffectiv"))?)(effect, param, piValues);
        Ok(())
    }
    pub unsafe fn alGetEffectf(
        &self,
        effect: ALuint,
        param: ALenum,
        pflValue: *mut ALfloat,
    ) -> Result<(), Error> {
        (self.GetEffectf.ok_or(Error::Unresolved("alGetEffectf"))?)(effect, param, pflValue);
        Ok(())
    }
    pub unsafe fn alGetEffectfv(
        &self,
        effect: ALuint,
        param: ALenum,
        pflValues: *mut ALfloat,
    ) -> Result<(), Error> {
        (self.GetEffectfv.ok_or(Error::Unresolved("alGetEffectfv"))?)(effect, param, pflValues);
        Ok(())
    }

    // === Auxiliary effect slot objects ===

    pub unsafe fn alGenAuxiliaryEffectSlots(
        &self,
        n: ALsizei,
        effectslots: *mut ALuint,
    ) -> Result<(), Error> {
        (self
            .GenAuxiliaryEffectSlots
            .ok_or(Error::Unresolved("alGenAuxiliaryEffectSlots"))?)(n, effectslots);
        Ok(())
    }
    pub unsafe fn alDeleteAuxiliaryEffectSlots(
        &self,
        n: ALsizei,
        effectslots: *const ALuint,
    ) -> Result<(), Error> {
        (self
            .DeleteAuxiliaryEffectSlots
            .ok_or(Error::Unresolved("alDeleteAuxiliaryEffectSlots"))?)(n, effectslots);
        Ok(())
    }
    pub unsafe fn alIsAuxiliaryEffectSlot(&self, effectslot: ALuint) -> Result<ALboolean, Error> {
        Ok((self
            .IsAuxiliaryEffectSlot
            .ok_or(Error::Unresolved("alIsAuxiliaryEffectSlot"))?)(effectslot))
    }
    pub unsafe fn alAuxiliaryEffectSloti(
        &self,
        effectslot: ALuint,
        param: ALenum,
        iValue: ALint,
    ) -> Result<(), Error> {
        (self
            .AuxiliaryEffectSloti
            .ok_or(Error::Unresolved("alAuxiliaryEffectSloti"))?)(effectslot, param, iValue);
        Ok(())
    }
    pub unsafe fn alAuxiliaryEffectSlotiv(
        &self,
        effectslot: ALuint,
        param: ALenum,
        piValues: *const ALint,
    ) -> Result<(), Error> {
        (self
            .AuxiliaryEffectSlotiv
            .ok_or(Error::Unresolved("alAuxiliaryEffectSlotiv"))?)(effectslot, param, piValues);
        Ok(())
    }
    pub unsafe fn alAuxiliaryEffectSlotf(
        &self,
        effectslot: ALuint,
        param: ALenum,
        flValue: ALfloat,
    ) -> Result<(), Error> {
        (self
            .AuxiliaryEffectSlotf
            .ok_or(Error::Unresolved("alAuxiliaryEffectSlotf"))?)(effectslot, param, flValue);
        Ok(())
    }
    pub unsafe fn alAuxiliaryEffectSlotfv(
        &self,
        effectslot: ALuint,
        param: ALenum,
        pflValues: *const ALfloat,
    ) -> Result<(), Error> {
        (self
            .AuxiliaryEffectSlotfv
            .ok_or(Error::Unresolved("alAuxiliaryEffectSlotfv"))?)(effectslot, param, pflValues);
        Ok(())
    }
    pub unsafe fn alGetAuxiliaryEffectSloti(
        &self,
        effectslot: ALuint,
        param: ALenum,
        piValue: *mut ALint,
    ) -> Result<(), Error> {
        (self
            .GetAuxiliaryEffectSloti
            .ok_or(Error::Unresolved("alGetAuxiliaryEffectSloti"))?)(effectslot, param, piValue);
        Ok(())
    }
    pub unsafe fn alGetAuxiliaryEffectSlotiv(
        &self,
        effectslot: ALuint,
        param: ALenum,
        piValues: *mut ALint,
    ) -> Result<(), Error> {
        (self
            .GetAuxiliaryEffectSlotiv
            .ok_or(Error::Unresolved("alGetAuxiliaryEffectSlotiv"))?)(effectslot, param, piValues);
        Ok(())
    }
    pub unsafe fn alGetAuxiliaryEffectSlotf(
        &self,
        effectslot: ALuint,
        param: ALenum,
        pflValue: *mut ALfloat,
    ) -> Result<(), Error> {
        (self
            .GetAuxiliaryEffectSlotf
            .ok_or(Error::Unresolved("alGetAuxiliaryEffectSlotf"))?)(effectslot, param, pflValue);
        Ok(())
    }
    pub unsafe fn alGetAuxiliaryEffectSlotfv(
        &self,
        effectslot: ALuint,
        param: ALenum,
        pflValues: *mut ALfloat,
    ) -> Result<(), Error> {
        (self
            .GetAuxiliaryEffectSlotfv
            .ok_or(Error::Unresolved("alGetAuxiliaryEffectSlotfv"))?)(effectslot, param, pflValues);
        Ok(())
    }

    // Convenience in the shape of the original Go-style bindings: the
    // identifier arrays are allocated here and handed back owned. Still
    // unsafe; these call through the same resolved pointers.

    /// Generates `n` new filters. They should be deleted once no longer
    /// in use.
    pub unsafe fn gen_filters(&self, n: usize) -> Result<Vec<ALuint>, Error> {
        let mut ids = vec![0; n];
        if n > 0 {
            self.alGenFilters(n as ALsizei, ids.as_mut_ptr())?;
        }
        Ok(ids)
    }
    /// Deletes the filters.
    pub unsafe fn delete_filters(&self, ids: &[ALuint]) -> Result<(), Error> {
        if ids.is_empty() {
            return Ok(());
        }
        self.alDeleteFilters(ids.len() as ALsizei, ids.as_ptr())
    }
    /// Reports whether the filter exists and is valid.
    pub unsafe fn filter_exists(&self, filter: ALuint) -> Result<bool, Error> {
        Ok(self.alIsFilter(filter)? != AL_FALSE)
    }

    /// Generates `n` new effects. They should be deleted once no longer
    /// in use.
    pub unsafe fn gen_effects(&self, n: usize) -> Result<Vec<ALuint>, Error> {
        let mut ids = vec![0; n];
        if n > 0 {
            self.alGenEffects(n as ALsizei, ids.as_mut_ptr())?;
        }
        Ok(ids)
    }
    /// Deletes the effects.
    pub unsafe fn delete_effects(&self, ids: &[ALuint]) -> Result<(), Error> {
        if ids.is_empty() {
            return Ok(());
        }
        self.alDeleteEffects(ids.len() as ALsizei, ids.as_ptr())
    }
    /// Reports whether the effect exists and is valid.
    pub unsafe fn effect_exists(&self, effect: ALuint) -> Result<bool, Error> {
        Ok(self.alIsEffect(effect)? != AL_FALSE)
    }

    /// Generates `n` new auxiliary effect slots. They should be deleted
    /// once no longer in use.
    pub unsafe fn gen_auxiliary_effect_slots(&self, n: usize) -> Result<Vec<ALuint>, Error> {
        let mut ids = vec![0; n];
        if n > 0 {
            self.alGenAuxiliaryEffectSlots(n as ALsizei, ids.as_mut_ptr())?;
        }
        Ok(ids)
    }
    /// Deletes the auxiliary effect slots.
    pub unsafe fn delete_auxiliary_effect_slots(&self, ids: &[ALuint]) -> Result<(), Error> {
        if ids.is_empty() {
            return Ok(());
        }
        self.alDeleteAuxiliaryEffectSlots(ids.len() as ALsizei, ids.as_ptr())
    }
    /// Reports whether the auxiliary effect slot exists and is valid.
    pub unsafe fn auxiliary_effect_slot_exists(&self, effectslot: ALuint) -> Result<bool, Error> {
        Ok(self.alIsAuxiliaryEffectSlot(effectslot)? != AL_FALSE)
    }
}
