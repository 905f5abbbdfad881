/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! EAX reverb parameter sets and loading them into an effect object.
//!
//! The EAX reverb effect is used rather than the standard reverb because
//! only the former carries the reflection and late-reverb panning vectors.
//! The presets in [presets] use the standard values from `efx-presets.h`.

use super::constants::*;
use super::EfxProcs;
use crate::al::al_types::{ALenum, ALfloat, ALint, ALuint};
use crate::al::AL_NO_ERROR;
use crate::Error;

/// A complete EAX reverb parameter set, one field per
/// `AL_EAXREVERB_*` property.
#[derive(Debug, Clone, PartialEq)]
pub struct ReverbProperties {
    pub density: ALfloat,
    pub diffusion: ALfloat,
    pub gain: ALfloat,
    pub gain_hf: ALfloat,
    pub gain_lf: ALfloat,
    pub decay_time: ALfloat,
    pub decay_hf_ratio: ALfloat,
    pub decay_lf_ratio: ALfloat,
    pub reflections_gain: ALfloat,
    pub reflections_delay: ALfloat,
    pub reflections_pan: [ALfloat; 3],
    pub late_reverb_gain: ALfloat,
    pub late_reverb_delay: ALfloat,
    pub late_reverb_pan: [ALfloat; 3],
    pub echo_time: ALfloat,
    pub echo_depth: ALfloat,
    pub modulation_time: ALfloat,
    pub modulation_depth: ALfloat,
    pub air_absorption_gain_hf: ALfloat,
    pub hf_reference: ALfloat,
    pub lf_reference: ALfloat,
    pub room_rolloff_factor: ALfloat,
    pub decay_hf_limit: ALint,
}

impl Default for ReverbProperties {
    fn default() -> ReverbProperties {
        presets::GENERIC
    }
}

impl EfxProcs {
    /// Loads a reverb parameter set into the effect object `effect`.
    ///
    /// The effect's type is switched to EAX reverb first, then each
    /// property is written in declaration order. `get_error` is consulted
    /// after the type switch and again after the property block, so an
    /// implementation that rejects either step reports [Error::AlError]
    /// with the AL error code. Pass `|| lib.last_error()` when working
    /// against a [crate::OpenAlLib].
    pub unsafe fn load_reverb(
        &self,
        effect: ALuint,
        props: &ReverbProperties,
        mut get_error: impl FnMut() -> ALenum,
    ) -> Result<(), Error> {
        // Standard reverb lacks the panning vectors, so EAX reverb it is.
        self.alEffecti(effect, AL_EFFECT_TYPE, AL_EFFECT_EAXREVERB)?;
        let code = get_error();
        if code != AL_NO_ERROR {
            return Err(Error::AlError {
                context: "switching the effect to EAX reverb",
                code,
            });
        }

        self.alEffectf(effect, AL_EAXREVERB_DENSITY, props.density)?;
        self.alEffectf(effect, AL_EAXREVERB_DIFFUSION, props.diffusion)?;
        self.alEffectf(effect, AL_EAXREVERB_GAIN, props.gain)?;
        self.alEffectf(effect, AL_EAXREVERB_GAINHF, props.gain_hf)?;
        self.alEffectf(effect, AL_EAXREVERB_GAINLF, props.gain_lf)?;
        self.alEffectf(effect, AL_EAXREVERB_DECAY_TIME, props.decay_time)?;
        self.alEffectf(effect, AL_EAXREVERB_DECAY_HFRATIO, props.decay_hf_ratio)?;
        self.alEffectf(effect, AL_EAXREVERB_DECAY_LFRATIO, props.decay_lf_ratio)?;
        self.alEffectf(effect, AL_EAXREVERB_REFLECTIONS_GAIN, props.reflections_gain)?;
        self.alEffectf(
            effect,
            AL_EAXREVERB_REFLECTIONS_DELAY,
            props.reflections_delay,
        )?;
        self.alEffectfv(
            effect,
            AL_EAXREVERB_REFLECTIONS_PAN,
            props.reflections_pan.as_ptr(),
        )?;
        self.alEffectf(effect, AL_EAXREVERB_LATE_REVERB_GAIN, props.late_reverb_gain)?;
        self.alEffectf(
            effect,
            AL_EAXREVERB_LATE_REVERB_DELAY,
            props.late_reverb_delay,
        )?;
        self.alEffectfv(
            effect,
            AL_EAXREVERB_LATE_REVERB_PAN,
            props.late_reverb_pan.as_ptr(),
        )?;
        self.alEffectf(effect, AL_EAXREVERB_ECHO_TIME, props.echo_time)?;
        self.alEffectf(effect, AL_EAXREVERB_ECHO_DEPTH, props.echo_depth)?;
        self.alEffectf(effect, AL_EAXREVERB_MODULATION_TIME, props.modulation_time)?;
        self.alEffectf(effect, AL_EAXREVERB_MODULATION_DEPTH, props.modulation_depth)?;
        self.alEffectf(
            effect,
            AL_EAXREVERB_AIR_ABSORPTION_GAINHF,
            props.air_absorption_gain_hf,
        )?;
        self.alEffectf(effect, AL_EAXREVERB_HFREFERENCE, props.hf_reference)?;
        self.alEffectf(effect, AL_EAXREVERB_LFREFERENCE, props.lf_reference)?;
        self.alEffectf(
            effect,
            AL_EAXREVERB_ROOM_ROLLOFF_FACTOR,
            props.room_rolloff_factor,
        )?;
        self.alEffecti(effect, AL_EAXREVERB_DECAY_HFLIMIT, props.decay_hf_limit)?;

        let code = get_error();
        if code != AL_NO_ERROR {
            return Err(Error::AlError {
                context: "loading the reverb properties",
                code,
            });
        }
        Ok(())
    }
}

/// A selection of environment presets, with the values from OpenAL Soft's
/// `efx-presets.h`.
pub mod presets {
    use super::ReverbProperties;

    pub const GENERIC: ReverbProperties = ReverbProperties {
        density: 1.0,
        diffusion: 1.0,
        gain: 0.3162,
        gain_hf: 0.8913,
        gain_lf: 1.0,
        decay_time: 1.49,
        decay_hf_ratio: 0.83,
        decay_lf_ratio: 1.0,
        reflections_gain: 0.0500,
        reflections_delay: 0.007,
        reflections_pan: [0.0, 0.0, 0.0],
        late_reverb_gain: 1.2589,
        late_reverb_delay: 0.011,
        late_reverb_pan: [0.0, 0.0, 0.0],
        echo_time: 0.250,
        echo_depth: 0.0,
        modulation_time: 0.250,
        modulation_depth: 0.0,
        air_absorption_gain_hf: 0.9943,
        hf_reference: 5000.0,
        lf_reference: 250.0,
        room_rolloff_factor: 0.0,
        decay_hf_limit: 1,
    };

    pub const STONE_CORRIDOR: ReverbProperties = ReverbProperties {
        density: 1.0,
        diffusion: 0.79,
        gain: 0.3162,
        gain_hf: 0.4467,
        gain_lf: 0.6310,
        decay_time: 2.70,
        decay_hf_ratio: 0.79,
        decay_lf_ratio: 1.0,
        reflections_gain: 0.2512,
        reflections_delay: 0.013,
        reflections_pan: [0.0, 0.0, 0.0],
        late_reverb_gain: 1.5849,
        late_reverb_delay: 0.020,
        late_reverb_pan: [0.0, 0.0, 0.0],
        echo_time: 0.250,
        echo_depth: 0.0,
        modulation_time: 0.250,
        modulation_depth: 0.0,
        air_absorption_gain_hf: 0.9943,
        hf_reference: 5000.0,
        lf_reference: 250.0,
        room_rolloff_factor: 0.0,
        decay_hf_limit: 1,
    };

    pub const HANGAR: ReverbProperties = ReverbProperties {
        density: 1.0,
        diffusion: 1.0,
        gain: 0.3162,
        gain_hf: 0.3162,
        gain_lf: 1.0,
        decay_time: 10.05,
        decay_hf_ratio: 0.23,
        decay_lf_ratio: 1.0,
        reflections_gain: 0.5000,
        reflections_delay: 0.020,
        reflections_pan: [0.0, 0.0, 0.0],
        late_reverb_gain: 1.2560,
        late_reverb_delay: 0.030,
        late_reverb_pan: [0.0, 0.0, 0.0],
        echo_time: 0.250,
        echo_depth: 0.0,
        modulation_time: 0.250,
        modulation_depth: 0.0,
        air_absorption_gain_hf: 0.9943,
        hf_reference: 5000.0,
        lf_reference: 250.0,
        room_rolloff_factor: 0.0,
        decay_hf_limit: 1,
    };

    pub const CAVE: ReverbProperties = ReverbProperties {
        density: 1.0,
        diffusion: 1.0,
        gain: 0.3162,
        gain_hf: 1.0,
        gain_lf: 1.0,
        decay_time: 2.91,
        decay_hf_ratio: 1.30,
        decay_lf_ratio: 1.0,
        reflections_gain: 0.5000,
        reflections_delay: 0.015,
        reflections_pan: [0.0, 0.0, 0.0],
        late_reverb_gain: 0.7063,
        late_reverb_delay: 0.022,
        late_reverb_pan: [0.0, 0.0, 0.0],
        echo_time: 0.250,
        echo_depth: 0.0,
        modulation_time: 0.250,
        modulation_depth: 0.0,
        air_absorption_gain_hf: 0.9943,
        hf_reference: 5000.0,
        lf_reference: 250.0,
        room_rolloff_factor: 0.0,
        decay_hf_limit: 0,
    };

    pub const UNDERWATER: ReverbProperties = ReverbProperties {
        density: 0.3645,
        diffusion: 1.0,
        gain: 0.3162,
        gain_hf: 0.0100,
        gain_lf: 1.0,
        decay_time: 1.49,
        decay_hf_ratio: 0.10,
        decay_lf_ratio: 1.0,
        reflections_gain: 0.5963,
        reflections_delay: 0.007,
        reflections_pan: [0.0, 0.0, 0.0],
        late_reverb_gain: 7.0795,
        late_reverb_delay: 0.011,
        late_reverb_pan: [0.0, 0.0, 0.0],
        echo_time: 0.250,
        echo_depth: 0.0,
        modulation_time: 1.18,
        modulation_depth: 0.348,
        air_absorption_gain_hf: 0.9943,
        hf_reference: 5000.0,
        lf_reference: 250.0,
        room_rolloff_factor: 0.0,
        decay_hf_limit: 1,
    };

    /// Looks up a preset by name, ignoring ASCII case.
    pub fn by_name(name: &str) -> Option<&'static ReverbProperties> {
        match name.to_ascii_lowercase().as_str() {
            "generic" => Some(&GENERIC),
            "stonecorridor" | "stone_corridor" => Some(&STONE_CORRIDOR),
            "hangar" => Some(&HANGAR),
            "cave" => Some(&CAVE),
            "underwater" => Some(&UNDERWATER),
            _ => None,
        }
    }
}
