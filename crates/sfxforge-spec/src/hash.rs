//! Canonical hashing and seed derivation.
//!
//! - Parameter canonicalization using RFC 8785 (JCS)
//! - BLAKE3 hashing for parameter hashes
//! - Seed derivation for mixdown layers

use crate::error::SpecError;
use crate::params::SynthesisParameters;

/// Computes the canonical BLAKE3 hash of a parameter set.
///
/// ```text
/// params_hash = hex(BLAKE3(JCS(params_json)))
/// ```
///
/// Unset fields are omitted from the JSON form, so `{}` and a record with
/// every field `None` hash identically. Integral floats canonicalize to
/// integers, so `440` and `440.0` hash identically too.
///
/// # Example
/// ```
/// use sfxforge_spec::{params_hash, SynthesisParameters, SynthesisType};
///
/// let params = SynthesisParameters::new(SynthesisType::Pluck);
/// let hash = params_hash(&params).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn params_hash(params: &SynthesisParameters) -> Result<String, SpecError> {
    let value = serde_json::to_value(params)?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    let canonical = canonicalize_json(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Canonicalizes a JSON value according to RFC 8785 (JCS).
///
/// Object keys are sorted, there is no whitespace, and numbers and strings
/// use their shortest form.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => format_jcs_number(n),
        serde_json::Value::String(s) => format_jcs_string(s),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_json).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            let pairs: Vec<String> = entries
                .into_iter()
                .map(|(k, v)| format!("{}:{}", format_jcs_string(k), canonicalize_json(v)))
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
    }
}

fn format_jcs_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    let Some(f) = n.as_f64() else {
        return "null".to_string();
    };
    if !f.is_finite() {
        return "null".to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }
    if f.fract() == 0.0 && f.abs() < 1e15 {
        return format!("{}", f as i64);
    }
    let s = format!("{}", f);
    if s.contains('.') && !s.contains('e') {
        return s.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    s
}

fn format_jcs_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c < '\x20' => result.push_str(&format!("\\u{:04x}", c as u32)),
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Derives the seed of a mixdown layer from the mixdown's base seed.
///
/// ```text
/// layer_seed = truncate_u32(BLAKE3(base_seed || layer_index))
/// ```
pub fn derive_layer_seed(base_seed: u32, layer_index: u32) -> u32 {
    let mut input = Vec::with_capacity(8);
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(&layer_index.to_le_bytes());

    let hash = blake3::hash(&input);
    let b = hash.as_bytes();
    u32::from_le_bytes([b[0], b[1], b[2], b[3]])
}
