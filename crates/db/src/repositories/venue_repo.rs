//! Repository for the `venues` table.

use limelight_core::types::DbId;
use sqlx::PgPool;

use crate::models::venue::{CreateVenue, UpdateVenue, Venue};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, venue_name, city, total_capacity, seat_kills, comps, \
    producer_holds, venue_rental, extra_show_fee, hourly_extra_rate, created_at, updated_at";

/// Provides CRUD operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues
                (venue_name, city, total_capacity, seat_kills, comps,
                 producer_holds, venue_rental, extra_show_fee, hourly_extra_rate)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.venue_name)
            .bind(&input.city)
            .bind(input.total_capacity)
            .bind(input.seat_kills)
            .bind(input.comps)
            .bind(input.producer_holds)
            .bind(input.venue_rental)
            .bind(input.extra_show_fee)
            .bind(input.hourly_extra_rate)
            .fetch_one(pool)
            .await
    }

    /// Find a venue by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all venues, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues ORDER BY created_at DESC");
        sqlx::query_as::<_, Venue>(&query).fetch_all(pool).await
    }

    /// Update a venue. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVenue,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET
                venue_name = COALESCE($2, venue_name),
                city = COALESCE($3, city),
                total_capacity = COALESCE($4, total_capacity),
                seat_kills = COALESCE($5, seat_kills),
                comps = COALESCE($6, comps),
                producer_holds = COALESCE($7, producer_holds),
                venue_rental = COALESCE($8, venue_rental),
                extra_show_fee = COALESCE($9, extra_show_fee),
                hourly_extra_rate = COALESCE($10, hourly_extra_rate),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.venue_name)
            .bind(&input.city)
            .bind(input.total_capacity)
            .bind(input.seat_kills)
            .bind(input.comps)
            .bind(input.producer_holds)
            .bind(input.venue_rental)
            .bind(input.extra_show_fee)
            .bind(input.hourly_extra_rate)
            .fetch_optional(pool)
            .await
    }

    /// Delete a venue by ID. Shows keep their rows with the link severed.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
