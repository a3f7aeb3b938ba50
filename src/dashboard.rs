//! Result panel figures: KPI labels, break-even progress, chart series and the
//! saved-projection payload

use serde::Serialize;

use crate::format::{currency, fixed1, number};
use crate::models::{
    CapitalInput, CoffeeInput, ConsumablesInput, FixedCostsInput, Horizon, Inputs,
    ProfitabilityResult, SalesInput,
};

/// Headroom shown past the break-even mark on the progress bar
const PROGRESS_HEADROOM: f64 = 1.5;

/// Progress of monthly cup volume toward the break-even point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenProgress {
    pub value: f64,
    pub max: f64,
    /// Bar fill, clamped to 0..=100
    pub fill_percent: f64,
    /// Rounded share of break-even volume covered; `None` when fixed costs
    /// are already covered at zero cups
    pub coverage_percent: Option<f64>,
    pub on_track: bool,
}

impl BreakEvenProgress {
    pub fn new(result: &ProfitabilityResult) -> Self {
        let value = result.cups_per_month;
        let max = (result.break_even_point * PROGRESS_HEADROOM).max(value);
        let fill_percent = if max > 0.0 && max.is_finite() {
            (value / max * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        let coverage_percent = if result.break_even_point > 0.0 {
            Some((value / result.break_even_point * 100.0).round())
        } else {
            None
        };

        Self {
            value,
            max,
            fill_percent,
            coverage_percent,
            on_track: result.net_monthly_profit >= 0.0,
        }
    }

    pub fn coverage_label(&self) -> String {
        match self.coverage_percent {
            Some(pct) => format!("{:.0}% Cubierto", pct),
            None => "∞% Cubierto".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSlice {
    pub name: &'static str,
    pub value: f64,
}

/// Monthly cost distribution; a loss contributes no profit slice
pub fn cost_breakdown(result: &ProfitabilityResult, fixed_costs: &FixedCostsInput) -> Vec<CostSlice> {
    [
        ("Café", result.monthly_coffee_cost),
        ("Insumos", result.monthly_consumables_cost),
        ("Fijos", fixed_costs.total_monthly_fixed),
        ("Ganancia", result.net_monthly_profit.max(0.0)),
    ]
    .into_iter()
    .filter(|(_, value)| *value > 0.0)
    .map(|(name, value)| CostSlice { name, value })
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueVsCosts {
    pub revenue: f64,
    /// Variable plus fixed
    pub total_costs: f64,
    pub revenue_covers_costs: bool,
}

impl RevenueVsCosts {
    pub fn new(result: &ProfitabilityResult, fixed_costs: &FixedCostsInput) -> Self {
        let total_costs = result.monthly_costs + fixed_costs.total_monthly_fixed;
        Self {
            revenue: result.monthly_revenue,
            total_costs,
            revenue_covers_costs: result.monthly_revenue > total_costs,
        }
    }
}

/// Everything the result panel shows for one input snapshot
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub net_monthly_profit: f64,
    pub roi_label: String,
    pub break_even_label: String,
    pub margin_label: String,
    pub progress: BreakEvenProgress,
    pub cost_breakdown: Vec<CostSlice>,
    pub revenue_vs_costs: RevenueVsCosts,
    pub monthly_revenue: f64,
    pub monthly_variable_costs: f64,
    pub monthly_fixed_costs: f64,
    pub gross_profit: f64,
}

impl Dashboard {
    pub fn build(inputs: &Inputs, result: &ProfitabilityResult) -> Self {
        let roi_label = match result.roi_horizon() {
            Horizon::Finite(months) => format!("{} meses", fixed1(months)),
            Horizon::Unreachable => "∞".to_string(),
        };
        let break_even_label = match result.break_even_horizon() {
            Horizon::Finite(cups) => format!("{:.0} tazas/mes", cups.ceil()),
            Horizon::Unreachable => "∞ tazas/mes".to_string(),
        };

        Self {
            net_monthly_profit: result.net_monthly_profit,
            roi_label,
            break_even_label,
            margin_label: format!("{}%", fixed1(result.margin_percent)),
            progress: BreakEvenProgress::new(result),
            cost_breakdown: cost_breakdown(result, &inputs.fixed_costs),
            revenue_vs_costs: RevenueVsCosts::new(result, &inputs.fixed_costs),
            monthly_revenue: result.monthly_revenue,
            monthly_variable_costs: result.monthly_costs,
            monthly_fixed_costs: inputs.fixed_costs.total_monthly_fixed,
            gross_profit: result.monthly_profit,
        }
    }
}

impl std::fmt::Display for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Ganancia Mensual Neta ===")?;
        writeln!(f, "$ {} / mes (Neta)", number(self.net_monthly_profit))?;
        writeln!(f)?;

        writeln!(
            f,
            "Progreso hacia Punto de Equilibrio: {} ({:.0}%)",
            self.progress.coverage_label(),
            self.progress.fill_percent
        )?;
        writeln!(f)?;

        writeln!(f, "  ROI (Retorno):       {}", self.roi_label)?;
        writeln!(f, "  Punto de Equilibrio: {}", self.break_even_label)?;
        writeln!(f, "  Margen Bruto:        {}", self.margin_label)?;
        writeln!(f)?;

        writeln!(f, "  Ingresos Totales:    {}", currency(self.monthly_revenue))?;
        writeln!(f, "  Costos Variables:   -{}", currency(self.monthly_variable_costs))?;
        writeln!(f, "  Gastos Fijos:       -{}", currency(self.monthly_fixed_costs))?;
        writeln!(f)?;

        writeln!(f, "Distribución de Costos:")?;
        for slice in &self.cost_breakdown {
            writeln!(f, "  {:<10} {}", slice.name, currency(slice.value))?;
        }
        writeln!(f)?;

        writeln!(f, "Ingresos vs. Costos:")?;
        writeln!(f, "  Ventas: {}", currency(self.revenue_vs_costs.revenue))?;
        writeln!(f, "  Costos: {}", currency(self.revenue_vs_costs.total_costs))?;
        writeln!(f)?;

        writeln!(
            f,
            "Ganancia Bruta (Antes de fijos): {}",
            currency(self.gross_profit)
        )?;

        Ok(())
    }
}

/// Headline results kept with a saved projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotResults {
    pub net_monthly_profit: f64,
    pub roi_months: Option<f64>,
    pub break_even_point: Option<f64>,
}

/// Inputs and headline results of one projection, in the shape the
/// surrounding application stores them
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSnapshot {
    pub coffee: CoffeeInput,
    pub consumables: ConsumablesInput,
    pub sales: SalesInput,
    pub capital: CapitalInput,
    pub fixed_costs: FixedCostsInput,
    pub results: SnapshotResults,
}

impl ProjectionSnapshot {
    pub fn new(inputs: &Inputs, result: &ProfitabilityResult) -> Self {
        Self {
            coffee: inputs.coffee,
            consumables: inputs.consumables,
            sales: inputs.sales,
            capital: inputs.capital,
            fixed_costs: inputs.fixed_costs,
            results: SnapshotResults {
                net_monthly_profit: result.net_monthly_profit,
                roi_months: result.roi_horizon().finite(),
                break_even_point: result.break_even_horizon().finite(),
            },
        }
    }
}
