//! # Credit Plan Repository
//!
//! Database operations for credit plan reference data.
//!
//! ## Raw Frequency Rows
//! The `frequency` column is read back as raw text and validated through
//! [`TryFrom<CreditPlanRow>`] before any financing math runs. A row holding
//! an unknown cadence (hand-edited data, a half-applied migration) surfaces
//! as `CoreError::UnsupportedFrequency` instead of crashing the decoder —
//! and it surfaces *before* anything is written for the credit.

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use boutique_core::{CoreError, CreditPlan};

/// A credit plan row as stored, with the frequency still in text form.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CreditPlanRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub term_periods: i64,
    pub frequency: String,
    pub annual_rate_bps: u32,
    pub active: bool,
}

impl TryFrom<CreditPlanRow> for CreditPlan {
    type Error = CoreError;

    fn try_from(row: CreditPlanRow) -> Result<Self, Self::Error> {
        let frequency = row.frequency.parse()?;
        Ok(CreditPlan {
            id: row.id,
            name: row.name,
            description: row.description,
            term_periods: row.term_periods,
            frequency,
            annual_rate_bps: row.annual_rate_bps,
            active: row.active,
        })
    }
}

/// Repository for credit plan database operations.
#[derive(Debug, Clone)]
pub struct CreditPlanRepository {
    pool: SqlitePool,
}

impl CreditPlanRepository {
    /// Creates a new CreditPlanRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CreditPlanRepository { pool }
    }

    /// Gets a plan row by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<CreditPlanRow>> {
        let row = sqlx::query_as::<_, CreditPlanRow>(
            r#"
            SELECT id, name, description, term_periods, frequency, annual_rate_bps, active
            FROM credit_plans
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Lists active plans ordered by name.
    pub async fn list_active(&self) -> DbResult<Vec<CreditPlanRow>> {
        let rows = sqlx::query_as::<_, CreditPlanRow>(
            r#"
            SELECT id, name, description, term_periods, frequency, annual_rate_bps, active
            FROM credit_plans
            WHERE active = 1
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Inserts a new credit plan.
    pub async fn insert(&self, plan: &CreditPlan) -> DbResult<()> {
        debug!(id = %plan.id, name = %plan.name, "Inserting credit plan");

        sqlx::query(
            r#"
            INSERT INTO credit_plans (
                id, name, description, term_periods, frequency, annual_rate_bps, active
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&plan.id)
        .bind(&plan.name)
        .bind(&plan.description)
        .bind(plan.term_periods)
        .bind(plan.frequency.as_str())
        .bind(plan.annual_rate_bps)
        .bind(plan.active)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deactivates a plan so new credits stop offering it.
    pub async fn deactivate(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deactivating credit plan");

        let result = sqlx::query("UPDATE credit_plans SET active = 0 WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("CreditPlan", id));
        }

        Ok(())
    }
}

/// Helper to generate a new plan ID.
pub fn generate_plan_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use boutique_core::Frequency;

    fn sample_plan() -> CreditPlan {
        CreditPlan {
            id: generate_plan_id(),
            name: "6 meses".to_string(),
            description: "Seis cuotas mensuales".to_string(),
            term_periods: 6,
            frequency: Frequency::Monthly,
            annual_rate_bps: 1200,
            active: true,
        }
    }

    #[tokio::test]
    async fn test_insert_and_convert_roundtrip() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let plan = sample_plan();
        db.plans().insert(&plan).await.unwrap();

        let row = db.plans().get_by_id(&plan.id).await.unwrap().unwrap();
        let loaded = CreditPlan::try_from(row).unwrap();
        assert_eq!(loaded.frequency, Frequency::Monthly);
        assert_eq!(loaded.term_periods, 6);
        assert_eq!(loaded.annual_rate_bps, 1200);
    }

    #[tokio::test]
    async fn test_unknown_frequency_surfaces_as_error() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        // Bad data written outside the repository API
        sqlx::query(
            r#"
            INSERT INTO credit_plans (id, name, description, term_periods, frequency, annual_rate_bps, active)
            VALUES ('plan-bad', 'Diario', 'Cadencia desconocida', 30, 'daily', 1000, 1)
            "#,
        )
        .execute(db.pool())
        .await
        .unwrap();

        let row = db.plans().get_by_id("plan-bad").await.unwrap().unwrap();
        let err = CreditPlan::try_from(row).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedFrequency { .. }));
    }

    #[tokio::test]
    async fn test_deactivate_hides_from_active_listing() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let plan = sample_plan();
        db.plans().insert(&plan).await.unwrap();
        assert_eq!(db.plans().list_active().await.unwrap().len(), 1);

        db.plans().deactivate(&plan.id).await.unwrap();
        assert!(db.plans().list_active().await.unwrap().is_empty());
    }
}
