use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Portfolio record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Portfolio {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub img: Option<String>,
    pub codelink: Option<String>,
    pub livelink: Option<String>,
    pub user_id: Uuid,
    pub created_at: OffsetDateTime,
}
