//! Validate command - check a complete specification.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use millwright::{Millwright, Severity, TableSpec};

pub fn run(
    file: PathBuf,
    json: bool,
    verbose: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(&file)
        .map_err(|e| format!("cannot read {}: {}", file.display(), e))?;
    let spec: TableSpec = serde_json::from_str(&contents)?;

    let mill = Millwright::new();
    let result = mill.validate(&spec);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(if result.is_valid { 0 } else { 1 });
    }

    if result.is_valid {
        println!("{} {}", "Valid".green().bold(), file.display());
    } else {
        println!(
            "{} {} ({} violation(s))",
            "Invalid".red().bold(),
            file.display(),
            result.violations.len()
        );
    }

    for finding in result.violations.iter().chain(result.warnings.iter()) {
        let tag = match finding.severity() {
            Severity::Violation => finding.rule.id().red(),
            Severity::Warning => finding.rule.id().yellow(),
        };
        println!("  [{}] {}", tag, finding.message);
        if verbose {
            println!("        {}", finding.detail.dimmed());
        }
    }

    if let Some(ref suggested) = result.suggested {
        println!();
        println!("{}", "Suggested alternative:".cyan().bold());
        println!("{}", serde_json::to_string_pretty(suggested)?);
    }

    Ok(if result.is_valid { 0 } else { 1 })
}
