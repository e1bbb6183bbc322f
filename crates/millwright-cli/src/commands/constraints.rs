//! Constraints command - bound the fields of a partial specification.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use millwright::{FieldConstraint, Millwright, PartialTableSpec};

pub fn run(
    file: PathBuf,
    json: bool,
    verbose: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(&file)
        .map_err(|e| format!("cannot read {}: {}", file.display(), e))?;
    let partial: PartialTableSpec = serde_json::from_str(&contents)?;

    let mill = Millwright::new();
    let constraints = mill.field_constraints(&partial);

    if json {
        println!("{}", serde_json::to_string_pretty(&constraints)?);
        return Ok(0);
    }

    print_constraint("thickness_mm", &constraints.thickness_mm, verbose);
    if let Some(ref c) = constraints.face_thickness_mm {
        print_constraint("face_thickness_mm", c, verbose);
    }
    print_constraint("length_mm", &constraints.length_mm, verbose);
    print_constraint("width_mm", &constraints.width_mm, verbose);
    print_constraint("leg_profile_size_mm", &constraints.leg_profile_size_mm, verbose);
    print_constraint("leg_height_mm", &constraints.leg_height_mm, verbose);
    print_constraint("total_height_mm", &constraints.total_height_mm, verbose);
    if let Some(ref c) = constraints.spread_radius_mm {
        print_constraint("spread_radius_mm", c, verbose);
    }
    if let Some(ref c) = constraints.halfcylinder_count {
        print_constraint("halfcylinder_count", c, verbose);
    }

    Ok(0)
}

fn print_constraint(name: &str, c: &FieldConstraint, verbose: bool) {
    let range = if c.min > c.max {
        format!("{:.0}..{:.0}", c.min, c.max).red()
    } else {
        format!("{:.0}..{:.0}", c.min, c.max).white()
    };
    let recommended = c
        .recommended
        .map(|r| format!(" (recommended {:.0})", r))
        .unwrap_or_default();
    println!("  {:22} {}{}", name.cyan(), range, recommended.dimmed());
    if verbose {
        println!("        {}", c.reason.dimmed());
    }
}
