//! Human-readable output shared by the commands.

use colored::Colorize;

use super::json_output::{AudioFileInfo, JsonError, JsonWarning};

pub(crate) fn print_errors(errors: &[JsonError]) {
    for error in errors {
        let path = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red().bold(),
            error.code,
            path.dimmed(),
            error.message
        );
    }
}

pub(crate) fn print_warnings(warnings: &[JsonWarning]) {
    for warning in warnings {
        let path = warning
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "!".yellow(),
            warning.code,
            path.dimmed(),
            warning.message
        );
    }
}

pub(crate) fn print_file_info(info: &AudioFileInfo) {
    println!("{} {}", "Wrote:".green().bold(), info.path);
    println!(
        "  {} {} Hz {} ({} samples, {:.3}s)",
        "Audio:".dimmed(),
        info.sample_rate,
        info.format,
        info.num_samples,
        info.duration_seconds
    );
    println!("  {} {:.4}", "Peak:".dimmed(), info.peak);
    println!("  {} {}", "PCM hash:".dimmed(), short_hash(&info.pcm_hash));
}

pub(crate) fn print_status(success: bool, what: &str) {
    if success {
        println!("{} {}", "OK".green().bold(), what);
    } else {
        println!("{} {}", "FAILED".red().bold(), what);
    }
}

pub(crate) fn short_hash(hash: &str) -> &str {
    hash.get(..16).unwrap_or(hash)
}
