//! Coffee-cup profitability calculator
//!
//! Computes the unit economics of a coffee-cup operation and writes an
//! executive summary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use cup_economics::dashboard::{Dashboard, ProjectionSnapshot};
use cup_economics::format::{currency, fixed1};
use cup_economics::scenario;
use cup_economics::{Horizon, Inputs, MonthBasis, Narrator};

#[derive(Parser)]
#[command(name = "cup-economics")]
#[command(about = "Unit-economics calculator for a coffee-cup operation")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Month length the summary measures cup volume against
    #[arg(long, value_enum, default_value_t = MonthBasisArg::Fixed, global = true)]
    month_basis: MonthBasisArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum MonthBasisArg {
    /// Always 26 selling days
    Fixed,
    /// The scenario's days per month
    Sales,
}

impl From<MonthBasisArg> for MonthBasis {
    fn from(arg: MonthBasisArg) -> Self {
        match arg {
            MonthBasisArg::Fixed => MonthBasis::default(),
            MonthBasisArg::Sales => MonthBasis::SalesDays,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate profitability for one scenario
    Calc {
        /// Scenario JSON file (defaults apply to anything it omits)
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Override an input, e.g. --set sales.pricePerCup=6000
        #[arg(long = "set", value_name = "SECTION.FIELD=VALUE")]
        overrides: Vec<String>,

        /// Print the projection snapshot as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Show the full results panel
        #[arg(short, long)]
        dashboard: bool,
    },

    /// Evaluate every scenario file in a directory
    Batch {
        /// Directory to scan for *.json scenarios
        dir: PathBuf,
    },

    /// Print the default scenario as JSON
    Defaults,

    /// List inputs outside their usual ranges
    Check {
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        #[arg(long = "set", value_name = "SECTION.FIELD=VALUE")]
        overrides: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let narrator = Narrator::new(cli.month_basis.into());

    match cli.command {
        Commands::Calc {
            scenario: scenario_path,
            overrides,
            json,
            dashboard,
        } => {
            let inputs = resolve_inputs(scenario_path.as_deref(), &overrides)?;
            for advisory in scenario::range_advisories(&inputs) {
                warn!("{}", advisory);
            }

            let result = inputs.compute();

            if json {
                let snapshot = ProjectionSnapshot::new(&inputs, &result);
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
                return Ok(());
            }

            if dashboard {
                println!("{}", Dashboard::build(&inputs, &result));
            }

            println!("Resumen Ejecutivo:\n");
            println!("{}", narrator.narrate(&result, &inputs.sales, &inputs.capital));
        }

        Commands::Batch { dir } => {
            info!("Scanning {} for scenarios...", dir.display());
            let (rows, stats) = scenario::evaluate_dir(&dir);

            if rows.is_empty() {
                println!("No scenarios found in {}", dir.display());
            } else {
                println!(
                    "{:<30} {:>16} {:>8} {:>12} {:>14}",
                    "Scenario", "Net / month", "Margin", "ROI (months)", "Break-even"
                );
                println!("{}", "-".repeat(84));
                for row in &rows {
                    let name = row
                        .path
                        .strip_prefix(&dir)
                        .unwrap_or(row.path.as_path())
                        .display()
                        .to_string();
                    println!(
                        "{:<30} {:>16} {:>7}% {:>12} {:>14}",
                        name,
                        currency(row.result.net_monthly_profit),
                        fixed1(row.result.margin_percent),
                        horizon_cell(row.result.roi_horizon(), fixed1),
                        horizon_cell(row.result.break_even_horizon(), |c| format!("{:.0}", c.ceil())),
                    );
                }
            }
            println!("\n{}", stats);
        }

        Commands::Defaults => {
            println!("{}", serde_json::to_string_pretty(&Inputs::default())?);
        }

        Commands::Check {
            scenario: scenario_path,
            overrides,
        } => {
            let inputs = resolve_inputs(scenario_path.as_deref(), &overrides)?;
            let advisories = scenario::range_advisories(&inputs);
            if advisories.is_empty() {
                println!("All inputs within their usual ranges.");
            } else {
                for advisory in advisories {
                    println!("  {}", advisory);
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Start from a scenario file (or the defaults) and apply overrides in order
fn resolve_inputs(scenario_path: Option<&Path>, overrides: &[String]) -> Result<Inputs> {
    let mut inputs = match scenario_path {
        Some(path) => scenario::load(path)?,
        None => Inputs::default(),
    };
    for spec in overrides {
        scenario::apply_override(&mut inputs, spec)
            .with_context(|| format!("Failed to apply override {}", spec))?;
    }
    Ok(inputs)
}

fn horizon_cell(horizon: Horizon, render: impl Fn(f64) -> String) -> String {
    match horizon {
        Horizon::Finite(v) => render(v),
        Horizon::Unreachable => "∞".to_string(),
    }
}
