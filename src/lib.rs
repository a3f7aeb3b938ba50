//! Coffee-cup unit economics
//!
//! Per-cup cost and margin, monthly revenue and costs, net profit, ROI
//! horizon and break-even volume for a small coffee operation, plus a
//! plain-language summary of the figures.

pub mod calculator;
pub mod dashboard;
pub mod format;
pub mod models;
pub mod narrator;
pub mod scenario;

pub use calculator::compute;
pub use models::{
    CapitalInput, CoffeeInput, ConsumablesInput, FixedCostsInput, Horizon, Inputs,
    ProfitabilityResult, SalesInput,
};
pub use narrator::{MonthBasis, Narrator, narrate};
