use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::portfolios::repo_types::Portfolio;

#[derive(Debug, Deserialize)]
pub struct CreatePortfolioRequest {
    pub title: String,
    pub description: Option<String>,
    pub img: Option<String>,
    pub codelink: Option<String>,
    pub livelink: Option<String>,
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdatePortfolioRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub img: Option<String>,
    pub codelink: Option<String>,
    pub livelink: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub img: Option<String>,
    pub codelink: Option<String>,
    pub livelink: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub created_at: OffsetDateTime,
}

impl From<Portfolio> for PortfolioResponse {
    fn from(p: Portfolio) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            img: p.img,
            codelink: p.codelink,
            livelink: p.livelink,
            user_id: p.user_id,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
