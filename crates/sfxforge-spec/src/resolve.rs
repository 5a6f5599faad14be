//! Default resolution.
//!
//! Every default, floor and clamp the engine relies on is applied here, once,
//! before any sample is computed. Generators only ever see
//! [`ResolvedParameters`], whose fields are finite and in range.

use crate::error::{ValidationWarning, WarningCode};
use crate::params::{NoiseType, SynthesisParameters, SynthesisType, Waveform};

/// Default values for absent fields.
pub mod defaults {
    /// Base frequency in Hz.
    pub const FREQUENCY: f64 = 440.0;
    /// Slide floor in Hz.
    pub const MIN_FREQ: f64 = 20.0;
    /// Modulator to carrier ratio.
    pub const FM_RATIO: f64 = 2.0;
    /// Modulation index.
    pub const FM_DEPTH: f64 = 0.5;
    /// Square wave duty cycle.
    pub const DUTY: f64 = 0.5;
    /// Pulse wave width.
    pub const PULSE_WIDTH: f64 = 0.25;
    /// Vibrato LFO rate in Hz.
    pub const VIBRATO_SPEED: f64 = 5.0;
    /// Vibrato depth for pads.
    pub const PAD_VIBRATO_DEPTH: f64 = 0.004;
    /// Per-harmonic detune spread.
    pub const DETUNE: f64 = 0.004;
    /// Attack in seconds.
    pub const ATTACK: f64 = 0.01;
    /// Decay in seconds.
    pub const DECAY: f64 = 0.1;
    /// Sustain duration in seconds.
    pub const SUSTAIN: f64 = 0.3;
    /// Sustain level.
    pub const SUSTAIN_LEVEL: f64 = 0.7;
    /// Release in seconds.
    pub const RELEASE: f64 = 0.3;
    /// Linear output gain when `gain` is unset.
    pub const GAIN_LINEAR: f64 = 0.8;
    /// Silence appended after the release for reverb and release tails.
    pub const TAIL_SECONDS: f64 = 0.3;
}

/// Shortest attack, decay or release time in seconds.
pub const MIN_ENVELOPE_TIME: f64 = 0.001;

/// Lowest frequency any generator will run at, in Hz.
pub const MIN_FREQUENCY: f64 = 1.0;

/// Accepted output gain range in dB.
pub const MIN_GAIN_DB: f64 = -96.0;
pub const MAX_GAIN_DB: f64 = 24.0;

/// Envelope timing and levels in resolved form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeParams {
    /// Attack time in seconds (>= 0.001).
    pub attack: f64,
    /// Hold time in seconds (>= 0).
    pub hold: f64,
    /// Decay time in seconds (>= 0.001).
    pub decay: f64,
    /// Sustain duration in seconds (>= 0).
    pub sustain: f64,
    /// Sustain level (0-1).
    pub sustain_level: f64,
    /// Release time in seconds (>= 0.001).
    pub release: f64,
    /// Transient boost at sustain start (0-100).
    pub punch: f64,
}

impl EnvelopeParams {
    /// Time at which the release phase starts.
    pub fn release_start(&self) -> f64 {
        self.attack + self.hold + self.decay + self.sustain
    }

    /// Length of all phases including release.
    pub fn duration(&self) -> f64 {
        self.release_start() + self.release
    }
}

impl Default for EnvelopeParams {
    fn default() -> Self {
        Self {
            attack: defaults::ATTACK,
            hold: 0.0,
            decay: defaults::DECAY,
            sustain: defaults::SUSTAIN,
            sustain_level: defaults::SUSTAIN_LEVEL,
            release: defaults::RELEASE,
            punch: 0.0,
        }
    }
}

/// Parameters with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParameters {
    pub synthesis_type: SynthesisType,
    pub waveform: Waveform,
    pub noise_type: NoiseType,
    pub frequency: f64,
    pub min_freq: f64,
    pub slide: f64,
    pub delta_slide: f64,
    pub fm_ratio: f64,
    pub fm_depth: f64,
    /// Harmonic gains. Empty only for the basic waveform generator.
    pub harmonics: Vec<f64>,
    pub duty: f64,
    pub pulse_width: f64,
    pub vibrato_speed: f64,
    pub vibrato_depth: f64,
    pub detune: f64,
    pub envelope: EnvelopeParams,
    pub pan: f64,
    pub reverb_mix: f64,
    pub stereo_width: f64,
    /// Linear gain applied before the limiter.
    pub gain: f64,
    pub seed: Option<u32>,
}

impl ResolvedParameters {
    /// Seconds of audio a call produces: the envelope plus the tail margin.
    pub fn total_duration(&self) -> f64 {
        self.envelope.duration() + defaults::TAIL_SECONDS
    }
}

/// Converts decibels to a linear factor.
pub fn db_to_linear(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

impl SynthesisParameters {
    /// Applies defaults, floors and clamps.
    ///
    /// Each sanitized field is logged at warn level.
    pub fn resolve(&self) -> ResolvedParameters {
        let (resolved, warnings) = self.resolve_with_warnings();
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        resolved
    }

    /// Applies defaults, floors and clamps, returning what was changed.
    pub fn resolve_with_warnings(&self) -> (ResolvedParameters, Vec<ValidationWarning>) {
        let mut r = Resolver::default();
        let synthesis_type = self.synthesis_type.unwrap_or_default();

        let min_freq = r.at_least("minFreq", self.min_freq, defaults::MIN_FREQ, MIN_FREQUENCY);
        let frequency = r.at_least("frequency", self.frequency, defaults::FREQUENCY, min_freq);

        let harmonics = r.harmonics(self.harmonics.as_deref(), synthesis_type);

        let vibrato_depth_default = if synthesis_type == SynthesisType::Pad {
            defaults::PAD_VIBRATO_DEPTH
        } else {
            0.0
        };

        let envelope = EnvelopeParams {
            attack: r.floored("attack", self.attack, defaults::ATTACK, MIN_ENVELOPE_TIME),
            hold: r.floored("hold", self.hold, 0.0, 0.0),
            decay: r.floored("decay", self.decay, defaults::DECAY, MIN_ENVELOPE_TIME),
            sustain: r.floored("sustain", self.sustain, defaults::SUSTAIN, 0.0),
            sustain_level: r.clamped(
                "sustainLevel",
                self.sustain_level,
                defaults::SUSTAIN_LEVEL,
                0.0,
                1.0,
            ),
            release: r.floored("release", self.release, defaults::RELEASE, MIN_ENVELOPE_TIME),
            punch: r.clamped("punch", self.punch, 0.0, 0.0, 100.0),
        };

        let gain = match r.finite("gain", self.gain) {
            Some(db) => db_to_linear(r.clamped("gain", Some(db), 0.0, MIN_GAIN_DB, MAX_GAIN_DB)),
            None => defaults::GAIN_LINEAR,
        };

        let resolved = ResolvedParameters {
            synthesis_type,
            waveform: self.waveform.unwrap_or_default(),
            noise_type: self.noise_type.unwrap_or_default(),
            frequency,
            min_freq,
            slide: r.value("slide", self.slide, 0.0),
            delta_slide: r.value("deltaSlide", self.delta_slide, 0.0),
            fm_ratio: r.value("fmRatio", self.fm_ratio, defaults::FM_RATIO),
            fm_depth: r.value("fmDepth", self.fm_depth, defaults::FM_DEPTH),
            harmonics,
            duty: r.clamped("duty", self.duty, defaults::DUTY, 0.01, 0.99),
            pulse_width: r.clamped(
                "pulseWidth",
                self.pulse_width,
                defaults::PULSE_WIDTH,
                0.01,
                0.99,
            ),
            vibrato_speed: r.floored(
                "vibratoSpeed",
                self.vibrato_speed,
                defaults::VIBRATO_SPEED,
                0.0,
            ),
            vibrato_depth: r.clamped(
                "vibratoDepth",
                self.vibrato_depth,
                vibrato_depth_default,
                0.0,
                1.0,
            ),
            detune: r.clamped("detune", self.detune, defaults::DETUNE, 0.0, 0.5),
            envelope,
            pan: r.clamped("pan", self.pan, 0.0, -1.0, 1.0),
            reverb_mix: r.clamped("reverbMix", self.reverb_mix, 0.0, 0.0, 1.0),
            stereo_width: r.clamped("stereoWidth", self.stereo_width, 0.0, 0.0, 1.0),
            gain,
            seed: self.seed,
        };

        (resolved, r.warnings)
    }
}

/// Collects warnings while sanitizing fields.
#[derive(Default)]
struct Resolver {
    warnings: Vec<ValidationWarning>,
}

impl Resolver {
    /// The value if present and finite. Non-finite values warn.
    fn finite(&mut self, field: &str, value: Option<f64>) -> Option<f64> {
        match value {
            Some(v) if !v.is_finite() => {
                self.warnings.push(ValidationWarning::with_path(
                    WarningCode::NonFiniteValue,
                    format!("{} is not finite, using default", v),
                    field,
                ));
                None
            }
            other => other,
        }
    }

    /// Finite value or default.
    fn value(&mut self, field: &str, value: Option<f64>, default: f64) -> f64 {
        self.finite(field, value).unwrap_or(default)
    }

    /// Clamped into `[min, max]`, warning when out of range.
    fn clamped(
        &mut self,
        field: &str,
        value: Option<f64>,
        default: f64,
        min: f64,
        max: f64,
    ) -> f64 {
        let v = self.value(field, value, default);
        if v < min || v > max {
            let clamped = v.clamp(min, max);
            self.warnings.push(ValidationWarning::with_path(
                WarningCode::ValueClamped,
                format!("{} is outside [{}, {}], clamped to {}", v, min, max, clamped),
                field,
            ));
            clamped
        } else {
            v
        }
    }

    /// Raised to `floor`. Only negative inputs warn; small positive times are
    /// expected to land on the floor.
    fn floored(&mut self, field: &str, value: Option<f64>, default: f64, floor: f64) -> f64 {
        let v = self.value(field, value, default);
        if v < 0.0 {
            self.warnings.push(ValidationWarning::with_path(
                WarningCode::ValueClamped,
                format!("{} is negative, raised to {}", v, floor),
                field,
            ));
        }
        v.max(floor)
    }

    /// Raised to `floor`, warning whenever the floor applies.
    fn at_least(&mut self, field: &str, value: Option<f64>, default: f64, floor: f64) -> f64 {
        let v = self.value(field, value, default);
        if v < floor {
            self.warnings.push(ValidationWarning::with_path(
                WarningCode::ValueClamped,
                format!("{} is below {}, raised", v, floor),
                field,
            ));
            floor
        } else {
            v
        }
    }

    fn harmonics(&mut self, harmonics: Option<&[f64]>, synthesis_type: SynthesisType) -> Vec<f64> {
        let mut gains: Vec<f64> = harmonics
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(i, &h)| self.value(&format!("harmonics[{}]", i), Some(h), 0.0))
            .collect();

        let needs_partials = matches!(
            synthesis_type,
            SynthesisType::Fm | SynthesisType::Additive | SynthesisType::Pad
        );
        if gains.is_empty() && needs_partials {
            gains.push(1.0);
        }
        gains
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_params_resolve_to_defaults() {
        let resolved = SynthesisParameters::default().resolve();
        assert_eq!(resolved.synthesis_type, SynthesisType::Waveform);
        assert_eq!(resolved.waveform, Waveform::Sine);
        assert_eq!(resolved.frequency, 440.0);
        assert_eq!(resolved.envelope, EnvelopeParams::default());
        assert_eq!(resolved.gain, 0.8);
        assert!(resolved.harmonics.is_empty());
        assert_eq!(resolved.vibrato_depth, 0.0);
    }

    #[test]
    fn test_total_duration_includes_tail() {
        let params = SynthesisParameters {
            attack: Some(0.01),
            sustain: Some(0.3),
            decay: Some(0.1),
            release: Some(0.5),
            ..Default::default()
        };
        let total = params.resolve().total_duration();
        assert!((total - 1.21).abs() < 1e-12);
    }

    #[test]
    fn test_envelope_floors() {
        let params = SynthesisParameters {
            attack: Some(0.0),
            decay: Some(0.0),
            release: Some(0.0),
            sustain: Some(0.0),
            hold: Some(0.0),
            ..Default::default()
        };
        let (resolved, warnings) = params.resolve_with_warnings();
        assert_eq!(resolved.envelope.attack, MIN_ENVELOPE_TIME);
        assert_eq!(resolved.envelope.decay, MIN_ENVELOPE_TIME);
        assert_eq!(resolved.envelope.release, MIN_ENVELOPE_TIME);
        assert_eq!(resolved.envelope.sustain, 0.0);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_non_finite_values_fall_back() {
        let params = SynthesisParameters {
            frequency: Some(f64::NAN),
            attack: Some(f64::INFINITY),
            gain: Some(f64::NEG_INFINITY),
            harmonics: Some(vec![1.0, f64::NAN]),
            ..Default::default()
        };
        let (resolved, warnings) = params.resolve_with_warnings();
        assert_eq!(resolved.frequency, 440.0);
        assert_eq!(resolved.envelope.attack, defaults::ATTACK);
        assert_eq!(resolved.gain, defaults::GAIN_LINEAR);
        assert_eq!(resolved.harmonics, vec![1.0, 0.0]);
        assert_eq!(warnings.len(), 4);
        assert!(warnings
            .iter()
            .all(|w| w.code == WarningCode::NonFiniteValue));
    }

    #[test]
    fn test_clamps() {
        let params = SynthesisParameters {
            pan: Some(-3.0),
            reverb_mix: Some(1.5),
            punch: Some(250.0),
            duty: Some(0.0),
            ..Default::default()
        };
        let (resolved, warnings) = params.resolve_with_warnings();
        assert_eq!(resolved.pan, -1.0);
        assert_eq!(resolved.reverb_mix, 1.0);
        assert_eq!(resolved.envelope.punch, 100.0);
        assert_eq!(resolved.duty, 0.01);
        assert_eq!(warnings.len(), 4);
    }

    #[test]
    fn test_gain_db_conversion() {
        let params = SynthesisParameters {
            gain: Some(-6.0),
            ..Default::default()
        };
        let gain = params.resolve().gain;
        assert!((gain - 0.501_187).abs() < 1e-5);
    }

    #[test]
    fn test_type_dependent_defaults() {
        let pad = SynthesisParameters::new(SynthesisType::Pad).resolve();
        assert_eq!(pad.vibrato_depth, defaults::PAD_VIBRATO_DEPTH);
        assert_eq!(pad.harmonics, vec![1.0]);

        let additive = SynthesisParameters::new(SynthesisType::Additive).resolve();
        assert_eq!(additive.vibrato_depth, 0.0);
        assert_eq!(additive.harmonics, vec![1.0]);
    }

    #[test]
    fn test_frequency_floored_at_min_freq() {
        let params = SynthesisParameters {
            frequency: Some(5.0),
            min_freq: Some(30.0),
            ..Default::default()
        };
        assert_eq!(params.resolve().frequency, 30.0);

        let params = SynthesisParameters {
            frequency: Some(0.0),
            min_freq: Some(0.0),
            ..Default::default()
        };
        assert_eq!(params.resolve().frequency, MIN_FREQUENCY);
    }
}
