//! Budget line-item arithmetic: per-line totals, group subtotals, and the
//! production-wide total cost fed into the recoupment model.

use serde::Serialize;

use crate::error::CoreError;

/// The `details` qualifier a budget line may carry.
pub const DETAILS_OPTIONS: [&str; 6] = ["NULL", "DAYS", "WEEKS", "ALLOWANCE", "BUYOUT", "FEE"];

/// Validate a `details` qualifier against the known set.
pub fn validate_details(details: &str) -> Result<(), CoreError> {
    if !DETAILS_OPTIONS.contains(&details) {
        return Err(CoreError::Validation(format!(
            "Invalid details '{}'. Valid values: {}",
            details,
            DETAILS_OPTIONS.join(", ")
        )));
    }
    Ok(())
}

/// A budget line reduced to what the arithmetic needs.
#[derive(Debug, Clone)]
pub struct BudgetLine {
    pub summary_group: String,
    pub number: f64,
    pub rate: f64,
}

/// Subtotal for one summary group, in first-seen order.
#[derive(Debug, Clone, Serialize)]
pub struct GroupTotal {
    pub summary_group: String,
    pub subtotal: f64,
}

/// Group subtotals plus the grand total across all lines.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetTotals {
    pub groups: Vec<GroupTotal>,
    pub grand_total: f64,
}

/// Cost contributed by a single line.
pub fn line_total(number: f64, rate: f64) -> f64 {
    number * rate
}

/// Total cost across every line of every show of a production:
/// `Σ number × rate`. Recomputed from current rows on each request.
pub fn total_cost<I>(lines: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    lines
        .into_iter()
        .map(|(number, rate)| line_total(number, rate))
        .sum()
}

/// Fold lines into per-group subtotals (groups ordered by first
/// appearance) and a grand total.
pub fn summarize(lines: &[BudgetLine]) -> BudgetTotals {
    let mut groups: Vec<GroupTotal> = Vec::new();
    let mut grand_total = 0.0;

    for line in lines {
        let total = line_total(line.number, line.rate);
        grand_total += total;

        match groups
            .iter_mut()
            .find(|g| g.summary_group == line.summary_group)
        {
            Some(group) => group.subtotal += total,
            None => groups.push(GroupTotal {
                summary_group: line.summary_group.clone(),
                subtotal: total,
            }),
        }
    }

    BudgetTotals {
        groups,
        grand_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(group: &str, number: f64, rate: f64) -> BudgetLine {
        BudgetLine {
            summary_group: group.to_string(),
            number,
            rate,
        }
    }

    #[test]
    fn line_total_multiplies() {
        assert_eq!(line_total(4.0, 250.0), 1_000.0);
        assert_eq!(line_total(0.0, 250.0), 0.0);
    }

    #[test]
    fn total_cost_sums_across_lines() {
        let cost = total_cost(vec![(2.0, 100.0), (3.0, 50.0), (1.0, 0.0)]);
        assert_eq!(cost, 350.0);
    }

    #[test]
    fn total_cost_of_nothing_is_zero() {
        assert_eq!(total_cost(Vec::new()), 0.0);
    }

    #[test]
    fn summarize_groups_in_first_seen_order() {
        let totals = summarize(&[
            line("Creative", 1.0, 500.0),
            line("Technical", 2.0, 100.0),
            line("Creative", 1.0, 300.0),
        ]);

        assert_eq!(totals.groups.len(), 2);
        assert_eq!(totals.groups[0].summary_group, "Creative");
        assert_eq!(totals.groups[0].subtotal, 800.0);
        assert_eq!(totals.groups[1].summary_group, "Technical");
        assert_eq!(totals.groups[1].subtotal, 200.0);
        assert_eq!(totals.grand_total, 1_000.0);
    }

    #[test]
    fn summarize_empty_budget() {
        let totals = summarize(&[]);
        assert!(totals.groups.is_empty());
        assert_eq!(totals.grand_total, 0.0);
    }

    #[test]
    fn details_validation_accepts_known_values_only() {
        for details in DETAILS_OPTIONS {
            assert!(validate_details(details).is_ok());
        }
        assert!(validate_details("HOURS").is_err());
        assert!(validate_details("").is_err());
    }
}
