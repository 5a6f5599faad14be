//! Amplitude envelope shared by every generator.
//!
//! Five phases: quadratic attack, hold at full level, exponential decay toward
//! the sustain level, sustain with an optional punch transient, and an
//! exponential release that approaches zero without a hard floor.

use sfxforge_spec::EnvelopeParams;

/// Decay and release curve steepness.
const DECAY_RATE: f64 = 4.0;
/// Punch transient steepness.
const PUNCH_RATE: f64 = 5.0;

/// Evaluates the envelope at `t` seconds. The result is always in `[0, 1]`.
///
/// `env` must come from parameter resolution so that attack, decay and
/// release are at least 0.001 s.
pub fn calculate_envelope(t: f64, env: &EnvelopeParams) -> f64 {
    let hold_start = env.attack;
    let decay_start = hold_start + env.hold;
    let sustain_start = decay_start + env.decay;
    let release_start = sustain_start + env.sustain;
    let level = env.sustain_level;

    let value = if t < hold_start {
        let p = t.max(0.0) / env.attack;
        p * p
    } else if t < decay_start {
        1.0
    } else if t < sustain_start {
        let p = (t - decay_start) / env.decay;
        level + (1.0 - level) * (-DECAY_RATE * p).exp()
    } else if t < release_start {
        let p = (t - sustain_start) / env.sustain;
        level + (env.punch / 100.0) * (-PUNCH_RATE * p).exp()
    } else {
        let p = (t - release_start) / env.release;
        level * (-DECAY_RATE * p).exp()
    };

    value.clamp(0.0, 1.0)
}
