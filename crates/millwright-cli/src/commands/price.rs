//! Price command - look up a slab price from a CSV price list.

use std::path::PathBuf;

use colored::Colorize;
use millwright::{PriceList, TopMaterial};

pub fn run(
    file: PathBuf,
    material: String,
    thickness: f64,
) -> Result<i32, Box<dyn std::error::Error>> {
    let material = parse_material(&material)
        .ok_or_else(|| format!("unknown material '{}'", material))?;

    let prices = PriceList::from_csv(&file)?;

    match prices.price_for(material, thickness) {
        Some(price) => {
            println!(
                "{} {:.0} mm: {} per m²",
                material.label().white().bold(),
                thickness,
                format!("{:.2}", price).green()
            );
            Ok(0)
        }
        None => {
            let available = prices.thicknesses_for(material);
            eprintln!(
                "No price for {} at {:.0} mm (available: {:?})",
                material.label(),
                thickness,
                available
            );
            Ok(1)
        }
    }
}

fn parse_material(raw: &str) -> Option<TopMaterial> {
    match raw.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
        "sintered_stone" | "sintered" => Some(TopMaterial::SinteredStone),
        "quartz" => Some(TopMaterial::Quartz),
        "granite" => Some(TopMaterial::Granite),
        "marble" => Some(TopMaterial::Marble),
        _ => None,
    }
}
