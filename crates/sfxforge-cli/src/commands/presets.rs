//! Presets command implementation

use anyhow::Result;
use colored::Colorize;
use sfxforge_spec::presets;
use std::process::ExitCode;

use super::json_output::{print_json, PresetInfo};

/// Collects every built-in preset.
pub fn preset_infos() -> Result<Vec<PresetInfo>> {
    presets::all()
        .iter()
        .map(|preset| {
            let params = preset.params();
            Ok(PresetInfo {
                name: preset.name.to_string(),
                description: preset.description.to_string(),
                synthesis_type: params
                    .synthesis_type
                    .map(|t| t.to_string())
                    .unwrap_or_default(),
                params: serde_json::to_value(&params)?,
            })
        })
        .collect()
}

/// Run the presets command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let infos = preset_infos()?;

    if json_output {
        print_json(&infos)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Presets:".cyan().bold());
    let width = infos.iter().map(|p| p.name.len()).max().unwrap_or(0);
    for info in &infos {
        println!(
            "  {:width$}  {}  {}",
            info.name.bold(),
            format!("[{}]", info.synthesis_type).dimmed(),
            info.description,
            width = width
        );
    }
    Ok(ExitCode::SUCCESS)
}
