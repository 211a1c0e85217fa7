//! Recoupment financial model: constants, types, and pure projection logic.
//!
//! Turns a gross box-office potential, a set of scenario parameters, and a
//! production's total cost into a line-by-line profit/loss breakdown at an
//! arbitrary capacity fraction, plus a closed-form break-even solver.

// ---------------------------------------------------------------------------
// Scenario defaults
// ---------------------------------------------------------------------------

/// VAT rate applied when a scenario has none recorded (20%).
pub const DEFAULT_VAT_RATE: f64 = 0.20;
/// Agent commission rate applied when a scenario has none recorded (4%).
pub const DEFAULT_AGENT_COMMISSION_RATE: f64 = 0.04;
/// Royalty rate applied when a scenario has none recorded (4.2%).
pub const DEFAULT_ROYALTY_RATE: f64 = 0.042;

// ---------------------------------------------------------------------------
// Resolved scenario parameters
// ---------------------------------------------------------------------------

/// Scenario parameters with every field resolved to a concrete value.
///
/// Persisted scenarios store these fields as nullable columns. Resolution
/// happens exactly once, at the boundary via [`ScenarioParams::resolve`],
/// so the formulas below never deal with missing values.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ScenarioParams {
    pub vat_rate: f64,
    pub agent_commission_rate: f64,
    pub royalty_rate: f64,
    pub solt_levy_amount: f64,
    pub rest_levy_per_seat: f64,
    pub number_of_seats: i32,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            vat_rate: DEFAULT_VAT_RATE,
            agent_commission_rate: DEFAULT_AGENT_COMMISSION_RATE,
            royalty_rate: DEFAULT_ROYALTY_RATE,
            solt_levy_amount: 0.0,
            rest_levy_per_seat: 0.0,
            number_of_seats: 0,
        }
    }
}

impl ScenarioParams {
    /// Merge a persisted scenario's nullable fields with the documented
    /// defaults. Rate fields fall back to the `DEFAULT_*` constants;
    /// levies and seat counts fall back to zero.
    pub fn resolve(
        vat_rate: Option<f64>,
        agent_commission_rate: Option<f64>,
        royalty_rate: Option<f64>,
        solt_levy_amount: Option<f64>,
        rest_levy_per_seat: Option<f64>,
        number_of_seats: Option<i32>,
    ) -> Self {
        Self {
            vat_rate: vat_rate.unwrap_or(DEFAULT_VAT_RATE),
            agent_commission_rate: agent_commission_rate
                .unwrap_or(DEFAULT_AGENT_COMMISSION_RATE),
            royalty_rate: royalty_rate.unwrap_or(DEFAULT_ROYALTY_RATE),
            solt_levy_amount: solt_levy_amount.unwrap_or(0.0),
            rest_levy_per_seat: rest_levy_per_seat.unwrap_or(0.0),
            number_of_seats: number_of_seats.unwrap_or(0),
        }
    }

    /// Capacity-independent deductions: the flat SOLT levy plus the REST
    /// levy (per seat, across the house).
    pub fn fixed_deductions(&self) -> f64 {
        self.solt_levy_amount + self.rest_levy_per_seat * self.number_of_seats as f64
    }
}

// ---------------------------------------------------------------------------
// Projection breakdown
// ---------------------------------------------------------------------------

/// The full financial waterfall at one capacity level.
///
/// `producer_profit` is currently always equal to `operating_profit`; the
/// two are kept as separate fields because producer-specific deductions may
/// be introduced between them.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Breakdown {
    pub gross_receipts: f64,
    pub vat: f64,
    pub agent_commission: f64,
    pub solt_levy: f64,
    pub rest_levy: f64,
    pub net_box_office: f64,
    pub royalties: f64,
    pub show_operating_surplus: f64,
    pub operating_profit: f64,
    pub producer_profit: f64,
    pub total_recouped_percent: f64,
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Project the financial waterfall at `capacity` (a fraction of the gross
/// box-office potential; 1.0 = sold out).
///
/// Deterministic arithmetic with no rounding; rounding is a display
/// concern. `net_box_office` is not clamped and goes negative at low
/// capacity when the flat levies exceed receipts. The recouped percentage
/// guards division by zero: it is 0 whenever `total_cost` is 0.
pub fn project(
    capacity: f64,
    params: &ScenarioParams,
    gross_box_office_potential: f64,
    total_cost: f64,
) -> Breakdown {
    let gross_receipts = gross_box_office_potential * capacity;
    let vat = gross_receipts * params.vat_rate;
    let agent_commission = gross_receipts * params.agent_commission_rate;
    let solt_levy = params.solt_levy_amount;
    let rest_levy = params.rest_levy_per_seat * params.number_of_seats as f64;
    let net_box_office = gross_receipts - vat - agent_commission - solt_levy - rest_levy;
    let royalties = net_box_office * params.royalty_rate;
    let show_operating_surplus = net_box_office - royalties;
    let operating_profit = show_operating_surplus - total_cost;
    let producer_profit = operating_profit;
    let total_recouped_percent = if total_cost > 0.0 {
        (producer_profit / total_cost) * 100.0
    } else {
        0.0
    };

    Breakdown {
        gross_receipts,
        vat,
        agent_commission,
        solt_levy,
        rest_levy,
        net_box_office,
        royalties,
        show_operating_surplus,
        operating_profit,
        producer_profit,
        total_recouped_percent,
    }
}

// ---------------------------------------------------------------------------
// Break-even solver
// ---------------------------------------------------------------------------

/// Solve for the capacity fraction at which producer profit is exactly
/// zero.
///
/// Every term of the waterfall is linear in capacity except the flat
/// levies, so profit is affine in capacity and the solution is closed-form:
///
/// ```text
/// break_even_revenue  = (total_cost / (1 - royalty) + fixed_deductions)
///                       / (1 - vat - agent_commission)
/// break_even_capacity = break_even_revenue / gross_box_office_potential
/// ```
///
/// Degenerate inputs resolve without error:
/// - a zero potential returns 0 (no reference to break against);
/// - a royalty rate of 100% or more returns positive infinity;
/// - VAT plus commission of 100% or more returns positive infinity.
///
/// The finite result is not clamped: it exceeds 1.0 when break-even needs
/// more than a full house, and is negative when the flat levies alone
/// already cover costs. Callers filter to a display range.
pub fn break_even_capacity(
    params: &ScenarioParams,
    gross_box_office_potential: f64,
    total_cost: f64,
) -> f64 {
    if gross_box_office_potential == 0.0 {
        return 0.0;
    }

    let net_multiplier = 1.0 - params.royalty_rate;
    if net_multiplier <= 0.0 {
        return f64::INFINITY;
    }

    let gross_multiplier = 1.0 - params.vat_rate - params.agent_commission_rate;
    if gross_multiplier <= 0.0 {
        return f64::INFINITY;
    }

    let break_even_revenue =
        (total_cost / net_multiplier + params.fixed_deductions()) / gross_multiplier;

    break_even_revenue / gross_box_office_potential
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn default_scenario() -> ScenarioParams {
        ScenarioParams::default()
    }

    // -- ScenarioParams::resolve --

    #[test]
    fn resolve_all_absent_yields_defaults() {
        let params = ScenarioParams::resolve(None, None, None, None, None, None);
        assert_eq!(params, ScenarioParams::default());
    }

    #[test]
    fn resolve_keeps_recorded_values() {
        let params = ScenarioParams::resolve(
            Some(0.05),
            Some(0.10),
            Some(0.15),
            Some(250.0),
            Some(1.25),
            Some(800),
        );
        assert!((params.vat_rate - 0.05).abs() < TOL);
        assert!((params.agent_commission_rate - 0.10).abs() < TOL);
        assert!((params.royalty_rate - 0.15).abs() < TOL);
        assert!((params.solt_levy_amount - 250.0).abs() < TOL);
        assert!((params.rest_levy_per_seat - 1.25).abs() < TOL);
        assert_eq!(params.number_of_seats, 800);
    }

    #[test]
    fn resolve_mixes_recorded_and_defaults() {
        let params = ScenarioParams::resolve(Some(0.0), None, None, None, None, None);
        assert_eq!(params.vat_rate, 0.0);
        assert!((params.agent_commission_rate - DEFAULT_AGENT_COMMISSION_RATE).abs() < TOL);
        assert!((params.royalty_rate - DEFAULT_ROYALTY_RATE).abs() < TOL);
    }

    #[test]
    fn fixed_deductions_combines_both_levies() {
        let params = ScenarioParams {
            solt_levy_amount: 100.0,
            rest_levy_per_seat: 0.5,
            number_of_seats: 1000,
            ..ScenarioParams::default()
        };
        assert!((params.fixed_deductions() - 600.0).abs() < TOL);
    }

    // -- project: the concrete reference scenario --

    #[test]
    fn reference_scenario_at_full_capacity() {
        let b = project(1.0, &default_scenario(), 10_000.0, 100_000.0);
        assert!((b.gross_receipts - 10_000.0).abs() < TOL);
        assert!((b.vat - 2_000.0).abs() < TOL);
        assert!((b.agent_commission - 400.0).abs() < TOL);
        assert!((b.net_box_office - 7_600.0).abs() < TOL);
        assert!((b.royalties - 319.2).abs() < TOL);
        assert!((b.show_operating_surplus - 7_280.8).abs() < TOL);
        assert!((b.operating_profit - -92_719.2).abs() < TOL);
        assert!((b.total_recouped_percent - -92.7192).abs() < TOL);
    }

    #[test]
    fn reference_scenario_at_zero_capacity() {
        let b = project(0.0, &default_scenario(), 10_000.0, 100_000.0);
        assert_eq!(b.gross_receipts, 0.0);
        assert_eq!(b.net_box_office, 0.0);
        assert!((b.operating_profit - -100_000.0).abs() < TOL);
        assert!((b.total_recouped_percent - -100.0).abs() < TOL);
    }

    // -- project: structural properties --

    #[test]
    fn producer_profit_equals_operating_profit() {
        for capacity in [0.0, 0.3, 0.75, 1.0, 1.4] {
            let b = project(capacity, &default_scenario(), 50_000.0, 120_000.0);
            assert_eq!(b.operating_profit, b.producer_profit);
        }
    }

    #[test]
    fn zero_capacity_nets_out_to_negative_flat_levies() {
        let params = ScenarioParams {
            solt_levy_amount: 300.0,
            rest_levy_per_seat: 1.5,
            number_of_seats: 200,
            ..ScenarioParams::default()
        };
        let b = project(0.0, &params, 75_000.0, 10_000.0);
        assert_eq!(b.gross_receipts, 0.0);
        // net = 0 - 0 - 0 - 300 - 300
        assert!((b.net_box_office - -600.0).abs() < TOL);
    }

    #[test]
    fn flat_levies_are_capacity_independent() {
        let params = ScenarioParams {
            solt_levy_amount: 450.0,
            rest_levy_per_seat: 2.0,
            number_of_seats: 500,
            ..ScenarioParams::default()
        };
        let low = project(0.1, &params, 80_000.0, 0.0);
        let high = project(1.0, &params, 80_000.0, 0.0);
        assert_eq!(low.solt_levy, high.solt_levy);
        assert_eq!(low.rest_levy, high.rest_levy);
        assert!((low.rest_levy - 1_000.0).abs() < TOL);
    }

    #[test]
    fn gross_receipts_affine_in_capacity() {
        let params = default_scenario();
        let (c1, c2, t) = (0.4, 1.1, 0.35);
        let c = t * c1 + (1.0 - t) * c2;

        let b1 = project(c1, &params, 90_000.0, 40_000.0);
        let b2 = project(c2, &params, 90_000.0, 40_000.0);
        let b = project(c, &params, 90_000.0, 40_000.0);

        let blend = |a: f64, b: f64| t * a + (1.0 - t) * b;
        assert!((b.gross_receipts - blend(b1.gross_receipts, b2.gross_receipts)).abs() < 1e-6);
        assert!((b.vat - blend(b1.vat, b2.vat)).abs() < 1e-6);
        assert!((b.net_box_office - blend(b1.net_box_office, b2.net_box_office)).abs() < 1e-6);
        assert!((b.royalties - blend(b1.royalties, b2.royalties)).abs() < 1e-6);
        assert!(
            (b.show_operating_surplus
                - blend(b1.show_operating_surplus, b2.show_operating_surplus))
            .abs()
                < 1e-6
        );
    }

    #[test]
    fn recouped_percent_is_zero_when_total_cost_is_zero() {
        let b = project(1.0, &default_scenario(), 10_000.0, 0.0);
        assert_eq!(b.total_recouped_percent, 0.0);
        // Profit itself is still reported.
        assert!(b.producer_profit > 0.0);
    }

    // -- break_even_capacity --

    #[test]
    fn break_even_profit_is_zero_at_solution() {
        let params = ScenarioParams {
            solt_levy_amount: 500.0,
            rest_levy_per_seat: 1.0,
            number_of_seats: 900,
            ..ScenarioParams::default()
        };
        let gbop = 250_000.0;
        let total_cost = 120_000.0;

        let c = break_even_capacity(&params, gbop, total_cost);
        assert!(c.is_finite());

        let b = project(c, &params, gbop, total_cost);
        assert!(b.producer_profit.abs() < 1e-6, "profit = {}", b.producer_profit);
    }

    #[test]
    fn break_even_zero_when_potential_is_zero() {
        assert_eq!(
            break_even_capacity(&default_scenario(), 0.0, 100_000.0),
            0.0
        );
    }

    #[test]
    fn break_even_infinite_when_royalty_consumes_everything() {
        let params = ScenarioParams {
            royalty_rate: 1.0,
            ..ScenarioParams::default()
        };
        assert_eq!(
            break_even_capacity(&params, 10_000.0, 1_000.0),
            f64::INFINITY
        );
    }

    #[test]
    fn break_even_infinite_when_deduction_rates_consume_everything() {
        let params = ScenarioParams {
            vat_rate: 0.60,
            agent_commission_rate: 0.40,
            ..ScenarioParams::default()
        };
        assert_eq!(
            break_even_capacity(&params, 10_000.0, 1_000.0),
            f64::INFINITY
        );
    }

    #[test]
    fn break_even_can_exceed_full_capacity() {
        // Reference scenario: costs dwarf the potential, so break-even
        // sits far beyond a sold-out house.
        let c = break_even_capacity(&default_scenario(), 10_000.0, 100_000.0);
        assert!(c > 1.0);
    }

    #[test]
    fn break_even_zero_when_nothing_to_recoup() {
        // Zero cost, zero levies: break-even at exactly zero capacity.
        let c = break_even_capacity(&default_scenario(), 10_000.0, 0.0);
        assert!(c.abs() < TOL);
    }
}
