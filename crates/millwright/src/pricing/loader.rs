//! CSV price-list loader.
//!
//! A plain data-access utility: the validation core never calls this. The
//! file format is `material,thickness_mm,price_per_sqm` with a header row;
//! comma and semicolon delimiters are both accepted.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use sha2::{Digest, Sha256};

use crate::error::{MillwrightError, Result};
use crate::spec::TopMaterial;

/// Thickness match tolerance for lookups.
const THICKNESS_EPSILON_MM: f64 = 0.01;

/// Provenance of a loaded price list.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PriceSourceMetadata {
    pub path: PathBuf,
    /// sha256 of the raw file contents.
    pub hash: String,
    pub size_bytes: u64,
    pub row_count: usize,
}

/// One price entry.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PriceRow {
    pub thickness_mm: f64,
    pub price_per_sqm: f64,
}

/// Prices per material and thickness, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceList {
    rows: IndexMap<TopMaterial, Vec<PriceRow>>,
    source: PriceSourceMetadata,
}

impl PriceList {
    /// Load a price list from a CSV file.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| MillwrightError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| MillwrightError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = detect_delimiter(&contents);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(contents.as_slice());

        let mut rows: IndexMap<TopMaterial, Vec<PriceRow>> = IndexMap::new();
        let mut row_count = 0usize;

        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            // 1-based, counting the header.
            let line = idx + 2;

            let material_field = record.get(0).unwrap_or("");
            let material = parse_material(material_field).ok_or_else(|| {
                MillwrightError::UnknownMaterial(material_field.to_string(), line)
            })?;

            let thickness_mm = parse_number(&record, 1, "thickness_mm", line)?;
            let price_per_sqm = parse_number(&record, 2, "price_per_sqm", line)?;

            rows.entry(material).or_default().push(PriceRow {
                thickness_mm,
                price_per_sqm,
            });
            row_count += 1;
        }

        if row_count == 0 {
            return Err(MillwrightError::EmptyData(format!(
                "no price rows in {}",
                path.display()
            )));
        }

        Ok(Self {
            rows,
            source: PriceSourceMetadata {
                path: path.to_path_buf(),
                hash,
                size_bytes: contents.len() as u64,
                row_count,
            },
        })
    }

    /// Price per square meter for a material at a given slab thickness.
    pub fn price_for(&self, material: TopMaterial, thickness_mm: f64) -> Option<f64> {
        self.rows.get(&material)?.iter().find_map(|row| {
            ((row.thickness_mm - thickness_mm).abs() < THICKNESS_EPSILON_MM)
                .then_some(row.price_per_sqm)
        })
    }

    /// All thicknesses with a price for a material, in file order.
    pub fn thicknesses_for(&self, material: TopMaterial) -> Vec<f64> {
        self.rows
            .get(&material)
            .map(|rows| rows.iter().map(|r| r.thickness_mm).collect())
            .unwrap_or_default()
    }

    pub fn source(&self) -> &PriceSourceMetadata {
        &self.source
    }
}

fn parse_number(
    record: &csv::StringRecord,
    index: usize,
    column: &str,
    line: usize,
) -> Result<f64> {
    let raw = record.get(index).unwrap_or("");
    raw.parse::<f64>().map_err(|_| MillwrightError::Parse {
        row: line,
        column: column.to_string(),
        message: format!("'{}' is not a number", raw),
    })
}

/// Accepts the serialized enum form and the display label.
fn parse_material(raw: &str) -> Option<TopMaterial> {
    match raw.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
        "sintered_stone" | "sintered" => Some(TopMaterial::SinteredStone),
        "quartz" => Some(TopMaterial::Quartz),
        "granite" => Some(TopMaterial::Granite),
        "marble" => Some(TopMaterial::Marble),
        _ => None,
    }
}

fn detect_delimiter(contents: &[u8]) -> u8 {
    let first_line: &[u8] = contents.split(|b| *b == b'\n').next().unwrap_or(contents);
    if first_line.contains(&b';') && !first_line.contains(&b',') {
        b';'
    } else {
        b','
    }
}
