//! # Branch Repository
//!
//! Database operations for branches.
//!
//! Branches are soft-deleted: historical sales keep referencing them, they
//! just disappear from listings.

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use boutique_core::Branch;

/// Repository for branch database operations.
#[derive(Debug, Clone)]
pub struct BranchRepository {
    pool: SqlitePool,
}

impl BranchRepository {
    /// Creates a new BranchRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BranchRepository { pool }
    }

    /// Gets a branch by its ID (including soft-deleted ones).
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Branch>> {
        let branch = sqlx::query_as::<_, Branch>(
            "SELECT id, name, address, phone, deleted FROM branches WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(branch)
    }

    /// Lists active (not soft-deleted) branches ordered by name.
    pub async fn list_active(&self) -> DbResult<Vec<Branch>> {
        let branches = sqlx::query_as::<_, Branch>(
            "SELECT id, name, address, phone, deleted FROM branches WHERE deleted = 0 ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(branches)
    }

    /// Inserts a new branch.
    pub async fn insert(&self, branch: &Branch) -> DbResult<()> {
        debug!(id = %branch.id, name = %branch.name, "Inserting branch");

        sqlx::query(
            r#"
            INSERT INTO branches (id, name, address, phone, deleted)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&branch.id)
        .bind(&branch.name)
        .bind(&branch.address)
        .bind(&branch.phone)
        .bind(branch.deleted)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Updates a branch's contact data.
    pub async fn update(&self, branch: &Branch) -> DbResult<()> {
        debug!(id = %branch.id, "Updating branch");

        let result = sqlx::query(
            r#"
            UPDATE branches SET
                name = ?2,
                address = ?3,
                phone = ?4
            WHERE id = ?1
            "#,
        )
        .bind(&branch.id)
        .bind(&branch.name)
        .bind(&branch.address)
        .bind(&branch.phone)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Branch", &branch.id));
        }

        Ok(())
    }

    /// Soft-deletes a branch.
    ///
    /// ## Why Soft Delete?
    /// - Historical sales still reference this branch
    /// - Can be restored if deleted by mistake
    pub async fn soft_delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Soft-deleting branch");

        let result = sqlx::query("UPDATE branches SET deleted = 1 WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Branch", id));
        }

        Ok(())
    }
}

/// Helper to generate a new branch ID.
pub fn generate_branch_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn sample_branch(name: &str) -> Branch {
        Branch {
            id: generate_branch_id(),
            name: name.to_string(),
            address: "Av. Principal 100".to_string(),
            phone: "555-0100".to_string(),
            deleted: false,
        }
    }

    #[tokio::test]
    async fn test_soft_delete_hides_from_listing() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let branch = sample_branch("Centro");
        db.branches().insert(&branch).await.unwrap();
        assert_eq!(db.branches().list_active().await.unwrap().len(), 1);

        db.branches().soft_delete(&branch.id).await.unwrap();

        // Gone from the listing, still fetchable by id
        assert!(db.branches().list_active().await.unwrap().is_empty());
        let loaded = db.branches().get_by_id(&branch.id).await.unwrap().unwrap();
        assert!(loaded.deleted);
    }

    #[tokio::test]
    async fn test_soft_delete_missing_is_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let err = db.branches().soft_delete("missing").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
