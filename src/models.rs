//! Data models for cup-level inputs and profitability results

use serde::{Deserialize, Serialize};

/// Coffee grind consumption and wholesale cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CoffeeInput {
    pub grams_per_cup: f64,
    pub price_per_kg: f64,
}

impl Default for CoffeeInput {
    fn default() -> Self {
        Self {
            grams_per_cup: 18.0,
            price_per_kg: 60_000.0,
        }
    }
}

/// Per-unit disposable costs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ConsumablesInput {
    pub cup_cost: f64,     // averaged over cup sizes
    pub stirrer_cost: f64,
    pub sugar_cost: f64,   // one sachet
}

impl Default for ConsumablesInput {
    fn default() -> Self {
        Self {
            cup_cost: 350.0,
            stirrer_cost: 50.0,
            sugar_cost: 100.0,
        }
    }
}

/// Sale price and monthly volume drivers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SalesInput {
    pub price_per_cup: f64,
    pub cups_per_day: f64,
    pub days_per_month: f64,
}

impl Default for SalesInput {
    fn default() -> Self {
        Self {
            price_per_cup: 5_000.0,
            cups_per_day: 50.0,
            days_per_month: 26.0,
        }
    }
}

/// One-time upfront capital outlay (equipment plus fit-out)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CapitalInput {
    pub total_investment: f64,
}

impl Default for CapitalInput {
    fn default() -> Self {
        Self {
            total_investment: 20_000_000.0,
        }
    }
}

/// Recurring monthly overhead: rent, payroll, utilities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FixedCostsInput {
    pub total_monthly_fixed: f64,
}

impl Default for FixedCostsInput {
    fn default() -> Self {
        Self {
            total_monthly_fixed: 2_000_000.0,
        }
    }
}

/// A complete snapshot of the five input records
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Inputs {
    pub coffee: CoffeeInput,
    pub consumables: ConsumablesInput,
    pub sales: SalesInput,
    pub capital: CapitalInput,
    pub fixed_costs: FixedCostsInput,
}

impl Inputs {
    pub fn compute(&self) -> ProfitabilityResult {
        crate::calculator::compute(
            &self.coffee,
            &self.consumables,
            &self.sales,
            &self.capital,
            &self.fixed_costs,
        )
    }
}

/// Result of a profitability calculation
///
/// Recomputed from scratch on every call. `roi_months` and
/// `break_even_point` hold `f64::INFINITY` when the target is never reached;
/// see [`ProfitabilityResult::roi_horizon`] for a checked view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitabilityResult {
    pub coffee_cost_per_cup: f64,
    pub consumables_cost_per_cup: f64,
    pub cost_per_cup: f64,
    pub profit_per_cup: f64,
    pub margin_percent: f64,
    pub cups_per_month: f64,
    pub monthly_revenue: f64,
    pub monthly_coffee_cost: f64,
    pub monthly_consumables_cost: f64,
    /// Variable costs only (coffee + consumables)
    pub monthly_costs: f64,
    /// Gross profit, before fixed costs
    pub monthly_profit: f64,
    pub net_monthly_profit: f64,
    pub roi_months: f64,
    /// Cups per month needed to cover fixed costs
    pub break_even_point: f64,
}

impl ProfitabilityResult {
    pub fn is_profitable(&self) -> bool {
        self.net_monthly_profit > 0.0
    }

    pub fn roi_horizon(&self) -> Horizon {
        Horizon::from_sentinel(self.roi_months)
    }

    pub fn break_even_horizon(&self) -> Horizon {
        Horizon::from_sentinel(self.break_even_point)
    }
}

/// A ratio that is either a finite quantity or never reached
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    Finite(f64),
    Unreachable,
}

impl Horizon {
    pub fn from_sentinel(value: f64) -> Self {
        if value.is_finite() {
            Horizon::Finite(value)
        } else {
            Horizon::Unreachable
        }
    }

    pub fn finite(self) -> Option<f64> {
        match self {
            Horizon::Finite(v) => Some(v),
            Horizon::Unreachable => None,
        }
    }
}
