/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Scenario tests against an in-process stub implementation.
//!
//! The stub keeps real per-object parameter storage behind the same entry
//! point names an OpenAL implementation would hand out, so these tests
//! exercise complete sequences (generate, set, get back, delete) through
//! the resolved callables without any OpenAL library being present.

#![allow(non_snake_case)]

use al_efx::al::AL_NO_ERROR;
use al_efx::efx::constants::*;
use al_efx::{EfxProcs, Error, ReverbProperties};
use serial_test::serial;
use std::collections::HashMap;
use std::ffi::{c_void, CStr};
use std::sync::Mutex;

type ALboolean = std::ffi::c_char;
type ALenum = std::ffi::c_int;
type ALfloat = std::ffi::c_float;
type ALint = std::ffi::c_int;
type ALsizei = std::ffi::c_int;
type ALuint = std::ffi::c_uint;

const AL_INVALID_NAME: ALenum = 0xA001;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Param {
    I(ALint),
    F(ALfloat),
    Fv([ALfloat; 3]),
}

#[derive(Default)]
struct Family {
    next_id: ALuint,
    objects: HashMap<ALuint, HashMap<ALenum, Param>>,
}

impl Family {
    fn gen(&mut self, n: usize) -> Vec<ALuint> {
        (0..n)
            .map(|_| {
                self.next_id += 1;
                self.objects.insert(self.next_id, HashMap::new());
                self.next_id
            })
            .collect()
    }
}

#[derive(Default)]
struct StubAl {
    filters: Family,
    effects: Family,
    slots: Family,
    // Sticky error state with alGetError's pop-on-read semantics.
    error: ALenum,
}

static STUB: Mutex<Option<StubAl>> = Mutex::new(None);

fn with_stub<R>(f: impl FnOnce(&mut StubAl) -> R) -> R {
    let mut guard = STUB.lock().unwrap();
    f(guard.get_or_insert_with(StubAl::default))
}

fn reset_stub() {
    *STUB.lock().unwrap() = Some(StubAl::default());
}

fn stub_get_error() -> ALenum {
    with_stub(|stub| std::mem::replace(&mut stub.error, AL_NO_ERROR))
}

macro_rules! stub_family {
    ($gen:ident, $delete:ident, $is:ident, $seti:ident, $setiv:ident, $setf:ident,
     $setfv:ident, $geti:ident, $getiv:ident, $getf:ident, $getfv:ident, $field:ident) => {
        unsafe extern "C" fn $gen(n: ALsizei, ids: *mut ALuint) {
            let generated = with_stub(|stub| stub.$field.gen(n as usize));
            for (i, id) in generated.into_iter().enumerate() {
                *ids.add(i) = id;
            }
        }
        unsafe extern "C" fn $delete(n: ALsizei, ids: *const ALuint) {
            let ids: Vec<ALuint> = (0..n as usize).map(|i| *ids.add(i)).collect();
            with_stub(|stub| {
                for id in ids {
                    stub.$field.objects.remove(&id);
                }
            });
        }
        unsafe extern "C" fn $is(id: ALuint) -> ALboolean {
            with_stub(|stub| stub.$field.objects.contains_key(&id)) as ALboolean
        }
        unsafe extern "C" fn $seti(id: ALuint, param: ALenum, value: ALint) {
            with_stub(|stub| match stub.$field.objects.get_mut(&id) {
                Some(object) => {
                    object.insert(param, Param::I(value));
                }
                None => stub.error = AL_INVALID_NAME,
            });
        }
        unsafe extern "C" fn $setiv(id: ALuint, param: ALenum, values: *const ALint) {
            // Every iv parameter the tests touch is scalar-sized.
            let value = *values;
            with_stub(|stub| match stub.$field.objects.get_mut(&id) {
                Some(object) => {
                    object.insert(param, Param::I(value));
                }
                None => stub.error = AL_INVALID_NAME,
            });
        }
        unsafe extern "C" fn $setf(id: ALuint, param: ALenum, value: ALfloat) {
            with_stub(|stub| match stub.$field.objects.get_mut(&id) {
                Some(object) => {
                    object.insert(param, Param::F(value));
                }
                None => stub.error = AL_INVALID_NAME,
            });
        }
        unsafe extern "C" fn $setfv(id: ALuint, param: ALenum, values: *const ALfloat) {
            // fv parameters here are the three-component panning vectors.
            let value = [*values, *values.add(1), *values.add(2)];
            with_stub(|stub| match stub.$field.objects.get_mut(&id) {
                Some(object) => {
                    object.insert(param, Param::Fv(value));
                }
                None => stub.error = AL_INVALID_NAME,
            });
        }
        unsafe extern "C" fn $geti(id: ALuint, param: ALenum, out: *mut ALint) {
            let stored = with_stub(|stub| {
                stub.$field
                    .objects
                    .get(&id)
                    .and_then(|object| object.get(&param).copied())
            });
            if let Some(Param::I(value)) = stored {
                *out = value;
            }
        }
        unsafe extern "C" fn $getiv(id: ALuint, param: ALenum, out: *mut ALint) {
            $geti(id, param, out)
        }
        unsafe extern "C" fn $getf(id: ALuint, param: ALenum, out: *mut ALfloat) {
            let stored = with_stub(|stub| {
                stub.$field
                    .objects
                    .get(&id)
                    .and_then(|object| object.get(&param).copied())
            });
            if let Some(Param::F(value)) = stored {
                *out = value;
            }
        }
        unsafe extern "C" fn $getfv(id: ALuint, param: ALenum, out: *mut ALfloat) {
            let stored = with_stub(|stub| {
                stub.$field
                    .objects
                    .get(&id)
                    .and_then(|object| object.get(&param).copied())
            });
            match stored {
                Some(Param::Fv(values)) => {
                    for (i, value) in values.into_iter().enumerate() {
                        *out.add(i) = value;
                    }
                }
                Some(Param::F(value)) => *out = value,
                _ => {}
            }
        }
    };
}

stub_family!(
    alGenFilters,
    alDeleteFilters,
    alIsFilter,
    alFilteri,
    alFilteriv,
    alFilterf,
    alFilterfv,
    alGetFilteri,
    alGetFilteriv,
    alGetFilterf,
    alGetFilterfv,
    filters
);
stub_family!(
    alGenEffects,
    alDeleteEffects,
    alIsEffect,
    alEffecti,
    alEffectiv,
    alEffectf,
    alEffectfv,
    alGetEffecti,
    alGetEffectiv,
    alGetEffectf,
    alGetEffectfv,
    effects
);
stub_family!(
    alGenAuxiliaryEffectSlots,
    alDeleteAuxiliaryEffectSlots,
    alIsAuxiliaryEffectSlot,
    alAuxiliaryEffectSloti,
    alAuxiliaryEffectSlotiv,
    alAuxiliaryEffectSlotf,
    alAuxiliaryEffectSlotfv,
    alGetAuxiliaryEffectSloti,
    alGetAuxiliaryEffectSlotiv,
    alGetAuxiliaryEffectSlotf,
    alGetAuxiliaryEffectSlotfv,
    slots
);

fn stub_resolver(name: &CStr) -> *mut c_void {
    let addr = match name.to_str().unwrap() {
        "alGenFilters" => alGenFilters as usize,
        "alDeleteFilters" => alDeleteFilters as usize,
        "alIsFilter" => alIsFilter as usize,
        "alFilteri" => alFilteri as usize,
        "alFilteriv" => alFilteriv as usize,
        "alFilterf" => alFilterf as usize,
        "alFilterfv" => alFilterfv as usize,
        "alGetFilteri" => alGetFilteri as usize,
        "alGetFilteriv" => alGetFilteriv as usize,
        "alGetFilterf" => alGetFilterf as usize,
        "alGetFilterfv" => alGetFilterfv as usize,
        "alGenEffects" => alGenEffects as usize,
        "alDeleteEffects" => alDeleteEffects as usize,
        "alIsEffect" => alIsEffect as usize,
        "alEffecti" => alEffecti as usize,
        "alEffectiv" => alEffectiv as usize,
        "alEffectf" => alEffectf as usize,
        "alEffectfv" => alEffectfv as usize,
        "alGetEffecti" => alGetEffecti as usize,
        "alGetEffectiv" => alGetEffectiv as usize,
        "alGetEffectf" => alGetEffectf as usize,
        "alGetEffectfv" => alGetEffectfv as usize,
        "alGenAuxiliaryEffectSlots" => alGenAuxiliaryEffectSlots as usize,
        "alDeleteAuxiliaryEffectSlots" => alDeleteAuxiliaryEffectSlots as usize,
        "alIsAuxiliaryEffectSlot" => alIsAuxiliaryEffectSlot as usize,
        "alAuxiliaryEffectSloti" => alAuxiliaryEffectSloti as usize,
        "alAuxiliaryEffectSlotiv" => alAuxiliaryEffectSlotiv as usize,
        "alAuxiliaryEffectSlotf" => alAuxiliaryEffectSlotf as usize,
        "alAuxiliaryEffectSlotfv" => alAuxiliaryEffectSlotfv as usize,
        "alGetAuxiliaryEffectSloti" => alGetAuxiliaryEffectSloti as usize,
        "alGetAuxiliaryEffectSlotiv" => alGetAuxiliaryEffectSlotiv as usize,
        "alGetAuxiliaryEffectSlotf" => alGetAuxiliaryEffectSlotf as usize,
        "alGetAuxiliaryEffectSlotfv" => alGetAuxiliaryEffectSlotfv as usize,
        _ => 0,
    };
    addr as *mut c_void
}

fn load_stub_procs() -> EfxProcs {
    reset_stub();
    let procs = EfxProcs::load_with(stub_resolver);
    assert!(procs.is_complete());
    procs
}

#[test]
#[serial]
fn filter_lifecycle_round_trips_through_the_stub() {
    let procs = load_stub_procs();

    unsafe {
        let filters = procs.gen_filters(2).unwrap();
        assert_eq!(filters.len(), 2);
        assert!(procs.filter_exists(filters[0]).unwrap());
        assert!(procs.filter_exists(filters[1]).unwrap());

        procs
            .alFilteri(filters[0], AL_FILTER_TYPE, AL_FILTER_LOWPASS)
            .unwrap();
        procs.alFilterf(filters[0], AL_LOWPASS_GAIN, 0.25).unwrap();

        let mut filter_type: ALint = 0;
        procs
            .alGetFilteri(filters[0], AL_FILTER_TYPE, &mut filter_type)
            .unwrap();
        assert_eq!(filter_type, AL_FILTER_LOWPASS);

        let mut gain: ALfloat = 0.0;
        procs
            .alGetFilterf(filters[0], AL_LOWPASS_GAIN, &mut gain)
            .unwrap();
        assert_eq!(gain, 0.25);

        procs.delete_filters(&filters).unwrap();
        assert!(!procs.filter_exists(filters[0]).unwrap());
        assert!(!procs.filter_exists(filters[1]).unwrap());
    }
}

#[test]
#[serial]
fn reverb_preset_lands_in_effect_storage() {
    let procs = load_stub_procs();

    unsafe {
        let effects = procs.gen_effects(1).unwrap();
        let effect = effects[0];

        procs
            .load_reverb(
                effect,
                &al_efx::efx::reverb::presets::STONE_CORRIDOR,
                stub_get_error,
            )
            .unwrap();

        let mut effect_type: ALint = 0;
        procs
            .alGetEffecti(effect, AL_EFFECT_TYPE, &mut effect_type)
            .unwrap();
        assert_eq!(effect_type, AL_EFFECT_EAXREVERB);

        let mut decay_time: ALfloat = 0.0;
        procs
            .alGetEffectf(effect, AL_EAXREVERB_DECAY_TIME, &mut decay_time)
            .unwrap();
        assert_eq!(decay_time, 2.70);

        let mut gain_hf: ALfloat = 0.0;
        procs
            .alGetEffectf(effect, AL_EAXREVERB_GAINHF, &mut gain_hf)
            .unwrap();
        assert_eq!(gain_hf, 0.4467);

        let mut pan = [1.0f32; 3];
        procs
            .alGetEffectfv(effect, AL_EAXREVERB_REFLECTIONS_PAN, pan.as_mut_ptr())
            .unwrap();
        assert_eq!(pan, [0.0, 0.0, 0.0]);

        let mut limit: ALint = -1;
        procs
            .alGetEffecti(effect, AL_EAXREVERB_DECAY_HFLIMIT, &mut limit)
            .unwrap();
        assert_eq!(limit, 1);

        procs.delete_effects(&effects).unwrap();
    }
}

#[test]
#[serial]
fn custom_reverb_properties_are_honored() {
    let procs = load_stub_procs();

    unsafe {
        let effect = procs.gen_effects(1).unwrap()[0];

        let props = ReverbProperties {
            decay_time: 4.25,
            reflections_pan: [0.3, 0.0, -0.3],
            ..Default::default()
        };
        procs.load_reverb(effect, &props, stub_get_error).unwrap();

        let mut decay_time: ALfloat = 0.0;
        procs
            .alGetEffectf(effect, AL_EAXREVERB_DECAY_TIME, &mut decay_time)
            .unwrap();
        assert_eq!(decay_time, 4.25);

        let mut pan = [0.0f32; 3];
        procs
            .alGetEffectfv(effect, AL_EAXREVERB_REFLECTIONS_PAN, pan.as_mut_ptr())
            .unwrap();
        assert_eq!(pan, [0.3, 0.0, -0.3]);
    }
}

#[test]
#[serial]
fn effect_attaches_to_an_auxiliary_slot() {
    let procs = load_stub_procs();

    unsafe {
        let effect = procs.gen_effects(1).unwrap()[0];
        procs
            .load_reverb(effect, &Default::default(), stub_get_error)
            .unwrap();

        let slots = procs.gen_auxiliary_effect_slots(1).unwrap();
        let slot = slots[0];
        assert!(procs.auxiliary_effect_slot_exists(slot).unwrap());

        procs
            .alAuxiliaryEffectSloti(slot, AL_EFFECTSLOT_EFFECT, effect as ALint)
            .unwrap();
        procs
            .alAuxiliaryEffectSlotf(slot, AL_EFFECTSLOT_GAIN, 0.8)
            .unwrap();

        let mut attached: ALint = 0;
        procs
            .alGetAuxiliaryEffectSloti(slot, AL_EFFECTSLOT_EFFECT, &mut attached)
            .unwrap();
        assert_eq!(attached, effect as ALint);

        let mut gain: ALfloat = 0.0;
        procs
            .alGetAuxiliaryEffectSlotf(slot, AL_EFFECTSLOT_GAIN, &mut gain)
            .unwrap();
        assert_eq!(gain, 0.8);

        // Detach before tearing down, as AL_EFFECTSLOT_NULL would in a
        // real implementation.
        procs
            .alAuxiliaryEffectSloti(slot, AL_EFFECTSLOT_EFFECT, AL_EFFECTSLOT_NULL)
            .unwrap();
        procs.delete_auxiliary_effect_slots(&slots).unwrap();
        procs.delete_effects(&[effect]).unwrap();
    }
}

#[test]
#[serial]
fn partial_resolution_blocks_the_unresolved_family_only() {
    reset_stub();
    let procs = EfxProcs::load_with(|name| {
        if name.to_str().unwrap().contains("Effect") {
            std::ptr::null_mut()
        } else {
            stub_resolver(name)
        }
    });

    assert!(!procs.is_complete());
    // Effects and auxiliary effect slots both match, filters do not.
    assert_eq!(procs.missing().len(), 22);

    unsafe {
        assert!(procs.gen_filters(1).is_ok());
        assert!(procs.gen_effects(1).is_err());
        assert!(procs.gen_auxiliary_effect_slots(1).is_err());
        assert!(procs
            .load_reverb(1, &Default::default(), || AL_NO_ERROR)
            .is_err());
    }
}

#[test]
#[serial]
fn reverb_load_on_a_rejecting_backend_is_reported() {
    let procs = load_stub_procs();

    unsafe {
        // No effect with this id exists, so the backend rejects the very
        // first write and the error state must surface as a result, not
        // as a silent success.
        let result = procs.load_reverb(9999, &Default::default(), stub_get_error);
        assert!(matches!(
            result,
            Err(Error::AlError {
                code: AL_INVALID_NAME,
                ..
            })
        ));

        // The error state was consumed by the failed load.
        assert_eq!(stub_get_error(), AL_NO_ERROR);
    }
}
