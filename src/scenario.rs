//! Scenario files and command-line overrides
//!
//! A scenario is a JSON object with optional `coffee`, `consumables`,
//! `sales`, `capital` and `fixedCosts` sections. Missing sections and
//! fields fall back to the default operation, so every scenario resolves
//! to a complete input snapshot before it reaches the calculator.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::models::{Inputs, ProfitabilityResult};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed override '{0}', expected section.field=value")]
    MalformedOverride(String),

    #[error("unknown field '{section}.{field}'")]
    UnknownField { section: String, field: String },

    #[error("value for '{key}' is not a finite number: '{value}'")]
    InvalidNumber { key: String, value: String },

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, ScenarioError>;

/// Parse a scenario from JSON text
pub fn from_json(text: &str, origin: &Path) -> Result<Inputs> {
    serde_json::from_str(text).map_err(|source| ScenarioError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Load a scenario file
pub fn load(path: &Path) -> Result<Inputs> {
    let text = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let inputs = from_json(&text, path)?;
    debug!(path = %path.display(), "loaded scenario");
    Ok(inputs)
}

/// Apply one `section.field=value` override, e.g. `sales.pricePerCup=1000`
pub fn apply_override(inputs: &mut Inputs, spec: &str) -> Result<()> {
    let override_re = Regex::new(r"^\s*([A-Za-z]+)\.([A-Za-z]+)\s*=\s*(\S+)\s*$")?;
    let cap = override_re
        .captures(spec)
        .ok_or_else(|| ScenarioError::MalformedOverride(spec.to_string()))?;
    let (section, field, raw) = (&cap[1], &cap[2], &cap[3]);

    let slot = field_mut(inputs, section, field).ok_or_else(|| ScenarioError::UnknownField {
        section: section.to_string(),
        field: field.to_string(),
    })?;

    let value = raw
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ScenarioError::InvalidNumber {
            key: format!("{section}.{field}"),
            value: raw.to_string(),
        })?;

    debug!(section, field, value, "override applied");
    *slot = value;
    Ok(())
}

fn field_mut<'a>(inputs: &'a mut Inputs, section: &str, field: &str) -> Option<&'a mut f64> {
    let slot = match (section, field) {
        ("coffee", "gramsPerCup") => &mut inputs.coffee.grams_per_cup,
        ("coffee", "pricePerKg") => &mut inputs.coffee.price_per_kg,
        ("consumables", "cupCost") => &mut inputs.consumables.cup_cost,
        ("consumables", "stirrerCost") => &mut inputs.consumables.stirrer_cost,
        ("consumables", "sugarCost") => &mut inputs.consumables.sugar_cost,
        ("sales", "pricePerCup") => &mut inputs.sales.price_per_cup,
        ("sales", "cupsPerDay") => &mut inputs.sales.cups_per_day,
        ("sales", "daysPerMonth") => &mut inputs.sales.days_per_month,
        ("capital", "totalInvestment") => &mut inputs.capital.total_investment,
        ("fixedCosts", "totalMonthlyFixed") => &mut inputs.fixed_costs.total_monthly_fixed,
        _ => return None,
    };
    Some(slot)
}

fn fields(inputs: &Inputs) -> [(&'static str, f64); 10] {
    [
        ("coffee.gramsPerCup", inputs.coffee.grams_per_cup),
        ("coffee.pricePerKg", inputs.coffee.price_per_kg),
        ("consumables.cupCost", inputs.consumables.cup_cost),
        ("consumables.stirrerCost", inputs.consumables.stirrer_cost),
        ("consumables.sugarCost", inputs.consumables.sugar_cost),
        ("sales.pricePerCup", inputs.sales.price_per_cup),
        ("sales.cupsPerDay", inputs.sales.cups_per_day),
        ("sales.daysPerMonth", inputs.sales.days_per_month),
        ("capital.totalInvestment", inputs.capital.total_investment),
        ("fixedCosts.totalMonthlyFixed", inputs.fixed_costs.total_monthly_fixed),
    ]
}

/// Usual operating ranges offered by the input form
const FORM_RANGES: [(&str, f64, f64); 4] = [
    ("sales.pricePerCup", 1_000.0, 15_000.0),
    ("sales.cupsPerDay", 1.0, 500.0),
    ("sales.daysPerMonth", 1.0, 31.0),
    ("coffee.gramsPerCup", 7.0, 25.0),
];

/// An input outside its usual range. Advisory only: the calculator accepts it.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeAdvisory {
    Negative { field: &'static str, value: f64 },
    OutOfRange { field: &'static str, value: f64, min: f64, max: f64 },
}

impl std::fmt::Display for RangeAdvisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeAdvisory::Negative { field, value } => {
                write!(f, "{} is negative ({})", field, value)
            }
            RangeAdvisory::OutOfRange { field, value, min, max } => {
                write!(f, "{} = {} is outside the usual range {}..{}", field, value, min, max)
            }
        }
    }
}

/// List inputs that are negative or outside the form's slider ranges
pub fn range_advisories(inputs: &Inputs) -> Vec<RangeAdvisory> {
    let mut advisories = Vec::new();
    for (field, value) in fields(inputs) {
        if value < 0.0 {
            advisories.push(RangeAdvisory::Negative { field, value });
            continue;
        }
        if let Some((_, min, max)) = FORM_RANGES.iter().find(|(name, _, _)| *name == field) {
            if value < *min || value > *max {
                advisories.push(RangeAdvisory::OutOfRange {
                    field,
                    value,
                    min: *min,
                    max: *max,
                });
            }
        }
    }
    advisories
}

/// Find all scenario files (`*.json`) under a directory, sorted by path
pub fn find_scenario_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// One evaluated scenario of a batch
#[derive(Debug, Clone)]
pub struct BatchRow {
    pub path: PathBuf,
    pub result: ProfitabilityResult,
}

#[derive(Debug, Default)]
pub struct BatchStats {
    pub evaluated: usize,
    pub errors: usize,
}

impl std::fmt::Display for BatchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Evaluated {} scenarios. Errors: {}", self.evaluated, self.errors)
    }
}

/// Evaluate every scenario file under a directory
///
/// Files that fail to load are logged and counted, not fatal.
pub fn evaluate_dir(dir: &Path) -> (Vec<BatchRow>, BatchStats) {
    let mut rows = Vec::new();
    let mut stats = BatchStats::default();

    let files = find_scenario_files(dir);
    debug!(dir = %dir.display(), count = files.len(), "found scenario files");

    for path in files {
        match load(&path) {
            Ok(inputs) => {
                rows.push(BatchRow {
                    path,
                    result: inputs.compute(),
                });
                stats.evaluated += 1;
            }
            Err(e) => {
                warn!("skipping scenario: {}", e);
                stats.errors += 1;
            }
        }
    }

    (rows, stats)
}
