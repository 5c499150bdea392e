//! Job application projection used for confirmation-time matching

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimal view of a tracked job application.
///
/// The full application entity (resume, pipeline stage, etc.) belongs to
/// the surrounding product; the scheduling engine only needs enough to
/// resolve which application a confirmed slot belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: Uuid,
    pub company_name: String,
    pub role_title: String,
}
