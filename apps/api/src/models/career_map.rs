use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A generated career map as stored in the `results` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerMapRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub map_data: Value,
    pub created_at: DateTime<Utc>,
}
