// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal summary and JSON persistence for attack reports.

use crate::error::{Result, SiegeError};
use crate::types::{AttackReport, MetricValue};
use colored::*;
use std::fs;
use std::path::Path;

/// Print a per-group summary table: baseline value, post-attack mean,
/// and relative change per metric.
pub fn print_summary(report: &AttackReport, quiet: bool) {
    if quiet {
        return;
    }

    println!("\n{}", "=== ATTACK SUMMARY ===".bold().cyan());
    println!(
        "How: {:?}  |  Random: {}  |  Trials/group: {}  |  Reverse: {}",
        report.how, report.random, report.trials_per_group, report.reverse
    );
    println!();

    if report.groups.is_empty() {
        println!("  No groups completed.");
        return;
    }

    println!(
        "  {:<16} {:<28} {:>12} {:>12} {:>9}",
        "Group", "Metric", "Baseline", "Attacked", "Change"
    );
    println!("  {}", "-".repeat(80));

    for group in &report.groups {
        let baseline = group.raw.first();
        for (i, name) in report.metrics.iter().enumerate() {
            let raw = baseline.and_then(|b| b.get(i));
            let squeezed = group.squeezed.get(i);
            let change = relative_change(raw, squeezed);
            let change_str = match change {
                Some(c) if c < 0.0 => format!("{:+.1}%", c * 100.0).red().to_string(),
                Some(c) => format!("{:+.1}%", c * 100.0).green().to_string(),
                None => "-".to_string(),
            };
            println!(
                "  {:<16} {:<28} {:>12} {:>12} {:>9}",
                group.group,
                name,
                raw.map_or_else(|| "-".to_string(), |v| v.to_string()),
                squeezed.map_or_else(|| "-".to_string(), |v| v.to_string()),
                change_str,
            );
        }
    }
    println!();
}

fn relative_change(raw: Option<&MetricValue>, squeezed: Option<&MetricValue>) -> Option<f64> {
    let before = raw?.as_scalar()?;
    let after = squeezed?.as_scalar()?;
    if before == 0.0 {
        return None;
    }
    Some((after - before) / before)
}

/// Write the report as pretty JSON, creating parent directories.
pub fn write_report(report: &AttackReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| SiegeError::Dataset(format!("creating {}: {}", parent.display(), e)))?;
    }
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| SiegeError::Dataset(format!("serializing report: {}", e)))?;
    fs::write(path, json)
        .map_err(|e| SiegeError::Dataset(format!("writing {}: {}", path.display(), e)))?;
    Ok(())
}
