//! Venue field validation rules.

use crate::error::CoreError;
use crate::validate::{validate_non_negative, validate_required_text};

/// Validate the full venue rule set: name and city must be present, the
/// house must hold at least one seat, and every count or amount must be
/// non-negative.
#[allow(clippy::too_many_arguments)]
pub fn validate_venue(
    venue_name: &str,
    city: &str,
    total_capacity: i32,
    seat_kills: i32,
    comps: i32,
    producer_holds: i32,
    venue_rental: f64,
    extra_show_fee: f64,
    hourly_extra_rate: f64,
) -> Result<(), CoreError> {
    validate_required_text(venue_name, "venue name")?;
    validate_required_text(city, "city")?;

    if total_capacity <= 0 {
        return Err(CoreError::Validation(
            "total capacity must be a positive number".into(),
        ));
    }

    validate_non_negative(seat_kills as f64, "seat kills")?;
    validate_non_negative(comps as f64, "comps")?;
    validate_non_negative(producer_holds as f64, "producer holds")?;
    validate_non_negative(venue_rental, "venue rental")?;
    validate_non_negative(extra_show_fee, "extra show fee")?;
    validate_non_negative(hourly_extra_rate, "hourly extra rate")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Result<(), CoreError> {
        validate_venue("Apollo", "London", 775, 4, 10, 6, 25_000.0, 1_200.0, 85.0)
    }

    #[test]
    fn accepts_a_complete_venue() {
        assert!(valid().is_ok());
    }

    #[test]
    fn rejects_blank_name_or_city() {
        assert!(validate_venue("", "London", 775, 0, 0, 0, 0.0, 0.0, 0.0).is_err());
        assert!(validate_venue("Apollo", " ", 775, 0, 0, 0, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn rejects_non_positive_capacity() {
        assert!(validate_venue("Apollo", "London", 0, 0, 0, 0, 0.0, 0.0, 0.0).is_err());
        assert!(validate_venue("Apollo", "London", -10, 0, 0, 0, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn rejects_negative_amounts() {
        assert!(validate_venue("Apollo", "London", 775, 0, 0, 0, -1.0, 0.0, 0.0).is_err());
        assert!(validate_venue("Apollo", "London", 775, -1, 0, 0, 0.0, 0.0, 0.0).is_err());
    }
}
