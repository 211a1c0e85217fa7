//! Recoupment scenario model and DTOs.

use limelight_core::recoupment::ScenarioParams;
use limelight_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `recoupment_scenarios` table.
///
/// Rate and levy columns are nullable; the documented defaults are applied
/// once at the boundary via [`RecoupmentScenario::resolved_params`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecoupmentScenario {
    pub id: DbId,
    pub production_id: DbId,
    pub name: String,
    pub vat_rate: Option<f64>,
    pub agent_commission_rate: Option<f64>,
    pub royalty_rate: Option<f64>,
    pub solt_levy_amount: Option<f64>,
    pub rest_levy_per_seat: Option<f64>,
    pub number_of_seats: Option<i32>,
    pub gross_box_office_potential: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl RecoupmentScenario {
    /// Merge this scenario's nullable fields with the documented defaults.
    pub fn resolved_params(&self) -> ScenarioParams {
        ScenarioParams::resolve(
            self.vat_rate,
            self.agent_commission_rate,
            self.royalty_rate,
            self.solt_levy_amount,
            self.rest_levy_per_seat,
            self.number_of_seats,
        )
    }

    /// The stored potential, zero when unset.
    pub fn potential(&self) -> f64 {
        self.gross_box_office_potential.unwrap_or(0.0)
    }
}

/// DTO for creating a new recoupment scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScenario {
    pub name: String,
    pub vat_rate: Option<f64>,
    pub agent_commission_rate: Option<f64>,
    pub royalty_rate: Option<f64>,
    pub solt_levy_amount: Option<f64>,
    pub rest_levy_per_seat: Option<f64>,
    pub number_of_seats: Option<i32>,
    pub gross_box_office_potential: Option<f64>,
}

/// DTO for updating an existing recoupment scenario. All fields are
/// optional; absent fields keep their stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateScenario {
    pub name: Option<String>,
    pub vat_rate: Option<f64>,
    pub agent_commission_rate: Option<f64>,
    pub royalty_rate: Option<f64>,
    pub solt_levy_amount: Option<f64>,
    pub rest_levy_per_seat: Option<f64>,
    pub number_of_seats: Option<i32>,
    pub gross_box_office_potential: Option<f64>,
}
