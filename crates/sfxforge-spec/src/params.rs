//! Synthesis parameter record and its string vocabularies.
//!
//! A [`SynthesisParameters`] value is what a layer hands to the engine: a flat
//! record where every field is optional. Defaults, floors and clamps are
//! applied once by [`SynthesisParameters::resolve`](crate::resolve).
//!
//! The enum vocabularies never fail to deserialize. An unrecognized string
//! falls back to the first variant (waveform, sine, white) so that parameter
//! files written by newer tools still render.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SpecError;

/// Declares a string enum with camelCase names, a fallback variant and
/// lenient deserialization.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
        #[serde(rename_all = "camelCase")]
        pub enum $name {
            #[default]
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the canonical string for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Parses a canonical name or alias, returning `None` if unknown.
            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $($text $(| $alias)* => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $name {
            /// Parses a name, falling back to the default variant when unknown.
            pub fn parse_lenient(s: &str) -> Self {
                Self::parse(s).unwrap_or_else(|| {
                    tracing::warn!(
                        "unknown {} {:?}, using {}",
                        stringify!($name),
                        s,
                        $name::default().as_str()
                    );
                    $name::default()
                })
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::parse_lenient(s))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(Self::parse_lenient(&raw))
            }
        }
    };
}

string_enum! {
    /// Which generator produces the raw signal.
    pub enum SynthesisType {
        /// Basic waveform oscillator with optional harmonics.
        Waveform => "waveform",
        /// Two-operator FM.
        Fm => "fm",
        /// Bank of independent sine partials.
        Additive => "additive",
        /// Detuned triangle partials with vibrato.
        Pad => "pad",
        /// Karplus-Strong plucked string.
        Pluck => "pluck",
        /// Pitch-swept FM for kicks and toms.
        FmDrum => "fmDrum" | "fm_drum",
        /// White or pink noise.
        Noise => "noise",
    }
}

string_enum! {
    /// Basic oscillator shape.
    pub enum Waveform {
        /// Sine wave.
        Sine => "sine",
        /// Triangle wave.
        Triangle => "triangle",
        /// Sawtooth ramp from -1 to 1.
        Sawtooth => "sawtooth" | "saw",
        /// Square wave with `duty` high fraction.
        Square => "square",
        /// Pulse wave with `pulseWidth` high fraction.
        Pulse => "pulse",
        /// Uniform random samples.
        Noise => "noise",
    }
}

string_enum! {
    /// Noise coloration.
    pub enum NoiseType {
        /// Flat spectrum.
        White => "white",
        /// -3 dB/octave spectrum.
        Pink => "pink",
    }
}

/// Parameters for a single generation call.
///
/// Field names serialize in camelCase. Unknown JSON fields are ignored since
/// layer settings carry UI state alongside the synthesis fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SynthesisParameters {
    /// Generator selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synthesis_type: Option<SynthesisType>,
    /// Shape used by the basic waveform generator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waveform: Option<Waveform>,

    /// Base frequency in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    /// Lower bound for the slid frequency in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_freq: Option<f64>,
    /// Pitch change in Hz per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide: Option<f64>,
    /// Change of `slide` per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_slide: Option<f64>,
    /// Modulator to carrier frequency ratio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fm_ratio: Option<f64>,
    /// Modulation index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fm_depth: Option<f64>,

    /// Per-harmonic gains, index 0 is the fundamental.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harmonics: Option<Vec<f64>>,
    /// High fraction of the square wave (0-1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duty: Option<f64>,
    /// High fraction of the pulse wave (0-1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pulse_width: Option<f64>,
    /// Coloration for the noise generator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_type: Option<NoiseType>,
    /// Vibrato LFO rate in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibrato_speed: Option<f64>,
    /// Vibrato depth as a fraction of frequency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibrato_depth: Option<f64>,
    /// Spread of the fixed per-harmonic detune as a fraction (0.004 = 0.4%).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detune: Option<f64>,

    /// Attack time in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack: Option<f64>,
    /// Hold time at full level in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold: Option<f64>,
    /// Decay time in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decay: Option<f64>,
    /// Sustain duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sustain: Option<f64>,
    /// Level reached by the decay and held during sustain (0-1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sustain_level: Option<f64>,
    /// Release time in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<f64>,
    /// Transient boost at the start of sustain (0-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punch: Option<f64>,

    /// Stereo position (-1 left, 1 right).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan: Option<f64>,
    /// Reverb wet fraction (0-1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverb_mix: Option<f64>,
    /// Side channel expansion (0-1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stereo_width: Option<f64>,
    /// Output gain in dB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain: Option<f64>,

    /// Seed for every random draw of the call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

impl SynthesisParameters {
    /// Creates an empty parameter set for the given generator.
    pub fn new(synthesis_type: SynthesisType) -> Self {
        Self {
            synthesis_type: Some(synthesis_type),
            ..Default::default()
        }
    }

    /// Parses parameters from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the parameters to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns a copy with the given seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_camel_case_fields() {
        let json = r#"{
            "synthesisType": "fmDrum",
            "frequency": 60,
            "fmRatio": 1.5,
            "reverbMix": 0.2,
            "noiseType": "pink",
            "sustainLevel": 0.4
        }"#;
        let params = SynthesisParameters::from_json(json).unwrap();
        assert_eq!(params.synthesis_type, Some(SynthesisType::FmDrum));
        assert_eq!(params.frequency, Some(60.0));
        assert_eq!(params.fm_ratio, Some(1.5));
        assert_eq!(params.reverb_mix, Some(0.2));
        assert_eq!(params.noise_type, Some(NoiseType::Pink));
        assert_eq!(params.sustain_level, Some(0.4));
        assert_eq!(params.attack, None);
    }

    #[test]
    fn test_unknown_variants_fall_back() {
        let json = r#"{"synthesisType": "granular", "waveform": "supersaw", "noiseType": "brown"}"#;
        let params = SynthesisParameters::from_json(json).unwrap();
        assert_eq!(params.synthesis_type, Some(SynthesisType::Waveform));
        assert_eq!(params.waveform, Some(Waveform::Sine));
        assert_eq!(params.noise_type, Some(NoiseType::White));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"frequency": 220, "layerName": "Kick 1", "muted": false}"#;
        let params = SynthesisParameters::from_json(json).unwrap();
        assert_eq!(params.frequency, Some(220.0));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Waveform::parse("saw"), Some(Waveform::Sawtooth));
        assert_eq!(SynthesisType::parse("fm_drum"), Some(SynthesisType::FmDrum));
        assert_eq!(SynthesisType::parse("FM"), None);
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let params = SynthesisParameters {
            frequency: Some(330.0),
            ..SynthesisParameters::new(SynthesisType::Pluck)
        };
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"synthesisType":"pluck","frequency":330.0}"#);
    }

    #[test]
    fn test_enum_names_round_trip_through_display() {
        for ty in SynthesisType::ALL {
            assert_eq!(SynthesisType::parse(&ty.to_string()), Some(*ty));
        }
        for wf in Waveform::ALL {
            assert_eq!(Waveform::parse(wf.as_str()), Some(*wf));
        }
    }

    #[test]
    fn test_non_string_variant_is_an_error() {
        let result = SynthesisParameters::from_json(r#"{"waveform": 3}"#);
        assert!(matches!(result, Err(SpecError::JsonParse(_))));
    }
}
