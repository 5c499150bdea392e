//! SQLite-backed implementation of the ApplicationDirectory port.

use async_trait::async_trait;
use chrono::Utc;
use hireflow_core::interviews::ports::ApplicationDirectory;
use hireflow_domain::{HireflowError, JobApplication, Result};
use rusqlite::params;
use tracing::instrument;
use uuid::Uuid;

use super::manager::DbPool;
use crate::errors::InfraError;

/// SQLite implementation of [`ApplicationDirectory`].
pub struct SqliteApplicationDirectory {
    pool: DbPool,
}

impl SqliteApplicationDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert an application record. Application rows are owned by the
    /// wider tracker; this is the seeding path used by tests and tooling.
    pub fn add(&self, application: &JobApplication) -> Result<()> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        conn.execute(
            "INSERT INTO job_applications (id, company_name, role_title, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                application.id.to_string(),
                application.company_name,
                application.role_title,
                Utc::now().timestamp(),
            ],
        )
        .map_err(InfraError::from)?;
        Ok(())
    }
}

#[async_trait]
impl ApplicationDirectory for SqliteApplicationDirectory {
    #[instrument(skip(self))]
    async fn list_applications(&self) -> Result<Vec<JobApplication>> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let mut stmt = conn
            .prepare(
                "SELECT id, company_name, role_title FROM job_applications ORDER BY company_name",
            )
            .map_err(InfraError::from)?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(InfraError::from)?;

        let mut applications = Vec::new();
        for row in rows {
            let (id, company_name, role_title) = row.map_err(InfraError::from)?;
            applications.push(JobApplication {
                id: Uuid::parse_str(&id).map_err(|e| {
                    HireflowError::Database(format!("invalid uuid in database: {e}"))
                })?,
                company_name,
                role_title,
            });
        }
        Ok(applications)
    }
}
