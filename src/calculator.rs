//! Profitability calculator logic

use crate::models::{
    CapitalInput, CoffeeInput, ConsumablesInput, FixedCostsInput, ProfitabilityResult, SalesInput,
};

const GRAMS_PER_KG: f64 = 1000.0;

/// Calculate cup-level and monthly profitability for one input snapshot
///
/// Never fails. Ratios whose denominator is zero or negative saturate instead
/// of dividing: margin becomes 0% for an unpriced cup, and ROI / break-even
/// become `f64::INFINITY` when there is no profit to recover them with.
pub fn compute(
    coffee: &CoffeeInput,
    consumables: &ConsumablesInput,
    sales: &SalesInput,
    capital: &CapitalInput,
    fixed_costs: &FixedCostsInput,
) -> ProfitabilityResult {
    let coffee_cost_per_cup = coffee.price_per_kg / GRAMS_PER_KG * coffee.grams_per_cup;
    let consumables_cost_per_cup =
        consumables.cup_cost + consumables.stirrer_cost + consumables.sugar_cost;
    let cost_per_cup = coffee_cost_per_cup + consumables_cost_per_cup;

    let profit_per_cup = sales.price_per_cup - cost_per_cup;
    let margin_percent = if sales.price_per_cup > 0.0 {
        profit_per_cup / sales.price_per_cup * 100.0
    } else {
        0.0
    };

    let cups_per_month = sales.cups_per_day * sales.days_per_month;
    let monthly_revenue = cups_per_month * sales.price_per_cup;

    let monthly_coffee_cost = cups_per_month * coffee_cost_per_cup;
    let monthly_consumables_cost = cups_per_month * consumables_cost_per_cup;
    let variable_costs = monthly_coffee_cost + monthly_consumables_cost;

    let monthly_gross_profit = monthly_revenue - variable_costs;
    let net_monthly_profit = monthly_gross_profit - fixed_costs.total_monthly_fixed;

    let roi_months = if net_monthly_profit > 0.0 {
        capital.total_investment / net_monthly_profit
    } else {
        f64::INFINITY
    };

    // Each cup has to at least cover its own variable cost
    let break_even_point = if profit_per_cup > 0.0 {
        fixed_costs.total_monthly_fixed / profit_per_cup
    } else {
        f64::INFINITY
    };

    ProfitabilityResult {
        coffee_cost_per_cup,
        consumables_cost_per_cup,
        cost_per_cup,
        profit_per_cup,
        margin_percent,
        cups_per_month,
        monthly_revenue,
        monthly_coffee_cost,
        monthly_consumables_cost,
        monthly_costs: variable_costs,
        monthly_profit: monthly_gross_profit,
        net_monthly_profit,
        roi_months,
        break_even_point,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Horizon, Inputs};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn default_scenario_matches_reference_figures() {
        let r = Inputs::default().compute();

        assert_eq!(r.coffee_cost_per_cup, 1080.0);
        assert_eq!(r.consumables_cost_per_cup, 500.0);
        assert_eq!(r.cost_per_cup, 1580.0);
        assert_eq!(r.profit_per_cup, 3420.0);
        assert!(close(r.margin_percent, 68.4));
        assert_eq!(r.cups_per_month, 1300.0);
        assert_eq!(r.monthly_revenue, 6_500_000.0);
        assert_eq!(r.monthly_coffee_cost, 1_404_000.0);
        assert_eq!(r.monthly_consumables_cost, 650_000.0);
        assert_eq!(r.monthly_costs, 2_054_000.0);
        assert_eq!(r.monthly_profit, 4_446_000.0);
        assert_eq!(r.net_monthly_profit, 2_446_000.0);
        assert!((r.roi_months - 8.1766).abs() < 1e-3);
        assert!((r.break_even_point - 584.795).abs() < 1e-3);
    }

    #[test]
    fn underpriced_cup_never_breaks_even() {
        let mut inputs = Inputs::default();
        inputs.sales.price_per_cup = 1000.0;
        let r = inputs.compute();

        assert_eq!(r.profit_per_cup, -580.0);
        assert_eq!(r.break_even_point, f64::INFINITY);
        assert!(r.net_monthly_profit < 0.0);
        assert_eq!(r.roi_months, f64::INFINITY);
        assert_eq!(r.roi_horizon(), Horizon::Unreachable);
        assert_eq!(r.break_even_horizon(), Horizon::Unreachable);
    }

    #[test]
    fn zero_price_has_zero_margin_not_nan() {
        let mut inputs = Inputs::default();
        inputs.sales.price_per_cup = 0.0;
        let r = inputs.compute();

        assert_eq!(r.margin_percent, 0.0);
        assert_eq!(r.monthly_revenue, 0.0);
    }

    #[test]
    fn negative_price_is_computed_through() {
        let mut inputs = Inputs::default();
        inputs.sales.price_per_cup = -100.0;
        let r = inputs.compute();

        assert_eq!(r.margin_percent, 0.0);
        assert_eq!(r.profit_per_cup, -1680.0);
        assert!(r.monthly_revenue < 0.0);
        assert_eq!(r.roi_months, f64::INFINITY);
    }

    #[test]
    fn zero_fixed_costs_break_even_at_zero_cups() {
        let mut inputs = Inputs::default();
        inputs.fixed_costs.total_monthly_fixed = 0.0;
        let r = inputs.compute();

        assert_eq!(r.break_even_point, 0.0);
        assert_eq!(r.break_even_horizon(), Horizon::Finite(0.0));
        assert_eq!(r.net_monthly_profit, r.monthly_profit);
    }

    #[test]
    fn exactly_zero_net_profit_has_no_roi() {
        let mut inputs = Inputs::default();
        inputs.fixed_costs.total_monthly_fixed = 4_446_000.0;
        let r = inputs.compute();

        assert_eq!(r.net_monthly_profit, 0.0);
        assert!(!r.is_profitable());
        assert_eq!(r.roi_months, f64::INFINITY);
    }

    #[test]
    fn free_investment_recovers_immediately() {
        let mut inputs = Inputs::default();
        inputs.capital.total_investment = 0.0;
        let r = inputs.compute();

        assert_eq!(r.roi_months, 0.0);
        assert_eq!(r.roi_horizon().finite(), Some(0.0));
    }
}
