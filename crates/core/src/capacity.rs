//! Capacity levels displayed in the recoupment projection table.

/// Capacity fractions every projection table shows, before the break-even
/// column is merged in.
pub const DEFAULT_CAPACITY_LEVELS: [f64; 5] = [1.00, 0.90, 0.80, 0.75, 0.70];

/// Upper bound of the displayed capacity range (5.0 = 500% of potential).
pub const MAX_DISPLAY_CAPACITY: f64 = 5.0;

/// Two capacities within this distance collapse into one column.
const CAPACITY_EPSILON: f64 = 1e-9;

/// Build the list of capacity fractions to project, merging the computed
/// break-even capacity into the default levels.
///
/// Non-finite and out-of-range values (outside `0.0..=MAX_DISPLAY_CAPACITY`)
/// are dropped, so an unreachable break-even simply does not get a column.
/// The result is sorted descending and de-duplicated.
pub fn display_capacities(break_even: f64) -> Vec<f64> {
    let mut capacities: Vec<f64> = DEFAULT_CAPACITY_LEVELS
        .iter()
        .copied()
        .chain(std::iter::once(break_even))
        .filter(|c| c.is_finite() && (0.0..=MAX_DISPLAY_CAPACITY).contains(c))
        .collect();

    capacities.sort_by(|a, b| b.total_cmp(a));
    capacities.dedup_by(|a, b| (*a - *b).abs() < CAPACITY_EPSILON);
    capacities
}

/// Whether a displayed capacity is the break-even column.
pub fn is_break_even(capacity: f64, break_even: f64) -> bool {
    break_even.is_finite() && (capacity - break_even).abs() < CAPACITY_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_break_even_in_descending_order() {
        let capacities = display_capacities(0.85);
        assert_eq!(capacities, vec![1.00, 0.90, 0.85, 0.80, 0.75, 0.70]);
    }

    #[test]
    fn drops_infinite_break_even() {
        let capacities = display_capacities(f64::INFINITY);
        assert_eq!(capacities, vec![1.00, 0.90, 0.80, 0.75, 0.70]);
    }

    #[test]
    fn drops_negative_break_even() {
        let capacities = display_capacities(-0.2);
        assert_eq!(capacities.len(), 5);
    }

    #[test]
    fn keeps_break_even_beyond_full_house() {
        let capacities = display_capacities(3.2);
        assert_eq!(capacities[0], 3.2);
        assert_eq!(capacities.len(), 6);
    }

    #[test]
    fn drops_break_even_beyond_display_bound() {
        let capacities = display_capacities(5.1);
        assert_eq!(capacities.len(), 5);
    }

    #[test]
    fn zero_break_even_gets_a_column() {
        let capacities = display_capacities(0.0);
        assert_eq!(*capacities.last().unwrap(), 0.0);
    }

    #[test]
    fn dedupes_break_even_coinciding_with_a_default_level() {
        let capacities = display_capacities(0.90);
        assert_eq!(capacities, vec![1.00, 0.90, 0.80, 0.75, 0.70]);
    }

    #[test]
    fn break_even_column_is_flagged() {
        assert!(is_break_even(0.85, 0.85));
        assert!(!is_break_even(0.90, 0.85));
        assert!(!is_break_even(0.90, f64::INFINITY));
    }
}
