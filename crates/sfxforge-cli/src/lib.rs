//! sfxforge CLI library.
//!
//! Input loading and the command implementations behind the `sfxforge`
//! binary. The commands are usable directly, which is how the integration
//! tests drive them.

pub mod commands;
pub mod input;
