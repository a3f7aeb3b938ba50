//! Executive summary text for a profitability result

use crate::format::{currency, fixed1};
use crate::models::{CapitalInput, ProfitabilityResult, SalesInput};

/// Working days assumed by the summary when no sales calendar is used
pub const REFERENCE_DAYS_PER_MONTH: f64 = 26.0;

/// Which month length the operational clause measures cup volume against
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MonthBasis {
    /// A fixed number of selling days, regardless of `SalesInput::days_per_month`
    FixedDays(f64),
    /// The caller-supplied `SalesInput::days_per_month`
    SalesDays,
}

impl Default for MonthBasis {
    fn default() -> Self {
        MonthBasis::FixedDays(REFERENCE_DAYS_PER_MONTH)
    }
}

impl MonthBasis {
    fn days(self, sales: &SalesInput) -> f64 {
        match self {
            MonthBasis::FixedDays(days) => days,
            MonthBasis::SalesDays => sales.days_per_month,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Narrator {
    pub month_basis: MonthBasis,
}

impl Narrator {
    pub fn new(month_basis: MonthBasis) -> Self {
        Self { month_basis }
    }

    /// Render the summary paragraph
    ///
    /// Always contains a profitability clause and an operational clause. The
    /// ROI clause appears only for a profitable operation with a finite
    /// payback; a loss gets a sentence saying ROI cannot be computed.
    pub fn narrate(
        &self,
        result: &ProfitabilityResult,
        sales: &SalesInput,
        capital: &CapitalInput,
    ) -> String {
        let is_profitable = result.net_monthly_profit > 0.0;
        let cups_gap = sales.cups_per_day * self.month_basis.days(sales) - result.break_even_point;

        let mut summary = String::new();

        if is_profitable {
            summary.push_str(&format!(
                "✅ **El negocio es rentable.** Estás generando una ganancia neta mensual de **{}** con un margen del **{}%**. ",
                currency(result.net_monthly_profit),
                fixed1(result.margin_percent)
            ));
        } else {
            summary.push_str(&format!(
                "⚠️ **Atención:** Actualmente la operación genera pérdidas mensuales de **{}**. ",
                currency(result.net_monthly_profit.abs())
            ));
        }

        if is_profitable && result.roi_months.is_finite() {
            summary.push_str(&format!(
                "Recuperarás tu inversión inicial de **{}** en aproximadamente **{} meses**. ",
                currency(capital.total_investment),
                fixed1(result.roi_months)
            ));
        } else if !is_profitable {
            summary.push_str(
                "No es posible calcular el retorno de inversión dado que no hay utilidades. ",
            );
        }

        if cups_gap > 0.0 {
            summary.push_str(&format!(
                "Estás vendiendo **{} tazas** por encima de tu punto de equilibrio, lo que te da un margen de seguridad operativo.",
                whole_cups(cups_gap.floor())
            ));
        } else {
            summary.push_str(&format!(
                "Necesitas vender **{} tazas adicionales al mes** solo para cubrir tus costos fijos y no perder dinero.",
                whole_cups(cups_gap.abs().ceil())
            ));
        }

        summary
    }
}

/// Render a summary with the default 26-day month basis
pub fn narrate(result: &ProfitabilityResult, sales: &SalesInput, capital: &CapitalInput) -> String {
    Narrator::default().narrate(result, sales, capital)
}

fn whole_cups(cups: f64) -> String {
    if cups.is_infinite() {
        "∞".to_string()
    } else {
        format!("{:.0}", cups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Inputs;

    fn summary_for(inputs: &Inputs) -> String {
        narrate(&inputs.compute(), &inputs.sales, &inputs.capital)
    }

    #[test]
    fn profitable_summary_has_all_three_clauses() {
        let text = summary_for(&Inputs::default());

        assert_eq!(
            text,
            "✅ **El negocio es rentable.** Estás generando una ganancia neta mensual de \
             **$\u{a0}2.446.000** con un margen del **68.4%**. \
             Recuperarás tu inversión inicial de **$\u{a0}20.000.000** en aproximadamente **8.2 meses**. \
             Estás vendiendo **715 tazas** por encima de tu punto de equilibrio, \
             lo que te da un margen de seguridad operativo."
        );
    }

    #[test]
    fn loss_summary_reports_absolute_loss_and_no_roi() {
        let mut inputs = Inputs::default();
        inputs.sales.price_per_cup = 1000.0;
        let text = summary_for(&inputs);

        assert!(text.starts_with(
            "⚠️ **Atención:** Actualmente la operación genera pérdidas mensuales de **$\u{a0}2.754.000**. "
        ));
        assert!(text.contains("No es posible calcular el retorno de inversión"));
        assert!(!text.contains("Recuperarás"));
        assert!(text.ends_with(
            "Necesitas vender **∞ tazas adicionales al mes** solo para cubrir tus costos fijos y no perder dinero."
        ));
    }

    #[test]
    fn tied_margin_rounds_up_in_the_summary() {
        // 20 of profit on a 1600 cup is exactly 1.25%
        let mut inputs = Inputs::default();
        inputs.sales.price_per_cup = 1600.0;
        inputs.fixed_costs.total_monthly_fixed = 0.0;
        let text = summary_for(&inputs);

        assert!(text.contains("con un margen del **1.3%**"), "{}", text);
    }

    #[test]
    fn shortfall_rounds_up() {
        let mut inputs = Inputs::default();
        inputs.sales.cups_per_day = 20.0;
        // break-even 584.795..., 20 * 26 = 520 cups, gap -64.795...
        let text = summary_for(&inputs);

        assert!(text.contains("Necesitas vender **65 tazas adicionales al mes**"));
    }

    #[test]
    fn zero_gap_counts_as_shortfall() {
        let mut inputs = Inputs::default();
        inputs.sales.cups_per_day = 10.0;
        inputs.fixed_costs.total_monthly_fixed = 10.0 * 26.0 * 3420.0;
        let text = summary_for(&inputs);

        assert!(text.contains("Necesitas vender **0 tazas adicionales al mes**"));
    }

    #[test]
    fn fixed_basis_ignores_sales_calendar() {
        // 30 selling days: 1500 cups, but the summary still measures 50 * 26.
        let mut inputs = Inputs::default();
        inputs.sales.days_per_month = 30.0;
        let result = inputs.compute();

        let fixed = Narrator::default().narrate(&result, &inputs.sales, &inputs.capital);
        let sales = Narrator::new(MonthBasis::SalesDays).narrate(&result, &inputs.sales, &inputs.capital);

        assert!(fixed.contains("Estás vendiendo **715 tazas**"));
        assert!(sales.contains("Estás vendiendo **915 tazas**"));
    }

    #[test]
    fn bases_agree_on_a_26_day_calendar() {
        let inputs = Inputs::default();
        let result = inputs.compute();

        assert_eq!(
            Narrator::default().narrate(&result, &inputs.sales, &inputs.capital),
            Narrator::new(MonthBasis::SalesDays).narrate(&result, &inputs.sales, &inputs.capital)
        );
    }
}
