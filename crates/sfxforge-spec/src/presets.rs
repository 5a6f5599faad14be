//! Named parameter sets for common instrument types.
//!
//! Each preset is an ordinary [`SynthesisParameters`] value; callers can
//! override any field after looking it up.

use crate::error::{ErrorCode, ValidationError};
use crate::params::{NoiseType, SynthesisParameters, SynthesisType, Waveform};

/// A named preset with a one-line description.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    /// Lookup name (kebab-case).
    pub name: &'static str,
    /// Short description for listings.
    pub description: &'static str,
    build: fn() -> SynthesisParameters,
}

impl Preset {
    /// Builds the preset's parameters.
    pub fn params(&self) -> SynthesisParameters {
        (self.build)()
    }
}

const PRESETS: &[Preset] = &[
    Preset {
        name: "kick",
        description: "Pitch-dropping FM kick drum",
        build: kick,
    },
    Preset {
        name: "tom",
        description: "Mid FM tom with a short tail",
        build: tom,
    },
    Preset {
        name: "pluck",
        description: "Karplus-Strong plucked string",
        build: pluck,
    },
    Preset {
        name: "pad",
        description: "Detuned triangle pad with slow vibrato and reverb",
        build: pad,
    },
    Preset {
        name: "bell",
        description: "Inharmonic FM bell",
        build: bell,
    },
    Preset {
        name: "laser",
        description: "Square wave with a falling slide",
        build: laser,
    },
    Preset {
        name: "noise-hit",
        description: "Short pink noise burst",
        build: noise_hit,
    },
    Preset {
        name: "organ-lead",
        description: "Additive drawbar-style lead",
        build: organ_lead,
    },
];

/// All presets in listing order.
pub fn all() -> &'static [Preset] {
    PRESETS
}

/// Looks up a preset by name.
pub fn by_name(name: &str) -> Result<SynthesisParameters, ValidationError> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .map(Preset::params)
        .ok_or_else(|| {
            let known: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
            ValidationError::new(
                ErrorCode::UnknownPreset,
                format!("unknown preset '{}', expected one of: {}", name, known.join(", ")),
            )
        })
}

fn kick() -> SynthesisParameters {
    SynthesisParameters {
        frequency: Some(150.0),
        fm_ratio: Some(1.0),
        fm_depth: Some(2.0),
        attack: Some(0.001),
        decay: Some(0.25),
        sustain: Some(0.0),
        sustain_level: Some(0.0),
        release: Some(0.05),
        punch: Some(40.0),
        gain: Some(-1.0),
        ..SynthesisParameters::new(SynthesisType::FmDrum)
    }
}

fn tom() -> SynthesisParameters {
    SynthesisParameters {
        frequency: Some(220.0),
        fm_ratio: Some(1.5),
        fm_depth: Some(1.2),
        attack: Some(0.002),
        decay: Some(0.3),
        sustain: Some(0.05),
        sustain_level: Some(0.2),
        release: Some(0.15),
        reverb_mix: Some(0.1),
        ..SynthesisParameters::new(SynthesisType::FmDrum)
    }
}

fn pluck() -> SynthesisParameters {
    SynthesisParameters {
        frequency: Some(330.0),
        attack: Some(0.001),
        decay: Some(0.05),
        sustain: Some(0.6),
        sustain_level: Some(1.0),
        release: Some(0.3),
        stereo_width: Some(0.3),
        ..SynthesisParameters::new(SynthesisType::Pluck)
    }
}

fn pad() -> SynthesisParameters {
    SynthesisParameters {
        frequency: Some(220.0),
        harmonics: Some(vec![1.0, 0.5, 0.33, 0.25]),
        vibrato_speed: Some(4.0),
        vibrato_depth: Some(0.006),
        detune: Some(0.006),
        attack: Some(0.4),
        decay: Some(0.3),
        sustain: Some(1.0),
        sustain_level: Some(0.8),
        release: Some(0.8),
        reverb_mix: Some(0.35),
        stereo_width: Some(0.6),
        ..SynthesisParameters::new(SynthesisType::Pad)
    }
}

fn bell() -> SynthesisParameters {
    SynthesisParameters {
        frequency: Some(660.0),
        fm_ratio: Some(3.5),
        fm_depth: Some(1.8),
        harmonics: Some(vec![1.0, 0.3]),
        attack: Some(0.002),
        decay: Some(0.8),
        sustain: Some(0.2),
        sustain_level: Some(0.15),
        release: Some(1.0),
        reverb_mix: Some(0.25),
        ..SynthesisParameters::new(SynthesisType::Fm)
    }
}

fn laser() -> SynthesisParameters {
    SynthesisParameters {
        waveform: Some(Waveform::Square),
        frequency: Some(1200.0),
        min_freq: Some(120.0),
        slide: Some(-3000.0),
        delta_slide: Some(1500.0),
        duty: Some(0.3),
        attack: Some(0.001),
        decay: Some(0.1),
        sustain: Some(0.1),
        sustain_level: Some(0.6),
        release: Some(0.1),
        gain: Some(-4.0),
        ..SynthesisParameters::new(SynthesisType::Waveform)
    }
}

fn noise_hit() -> SynthesisParameters {
    SynthesisParameters {
        noise_type: Some(NoiseType::Pink),
        attack: Some(0.001),
        decay: Some(0.12),
        sustain: Some(0.0),
        sustain_level: Some(0.0),
        release: Some(0.05),
        punch: Some(30.0),
        ..SynthesisParameters::new(SynthesisType::Noise)
    }
}

fn organ_lead() -> SynthesisParameters {
    SynthesisParameters {
        frequency: Some(440.0),
        harmonics: Some(vec![1.0, 0.8, 0.0, 0.6, 0.0, 0.4, 0.0, 0.2]),
        detune: Some(0.0),
        vibrato_speed: Some(6.0),
        vibrato_depth: Some(0.003),
        attack: Some(0.02),
        decay: Some(0.05),
        sustain: Some(0.5),
        sustain_level: Some(0.9),
        release: Some(0.2),
        ..SynthesisParameters::new(SynthesisType::Additive)
    }
}
