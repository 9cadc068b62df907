use sqlx::PgPool;
use uuid::Uuid;

use crate::portfolios::dto::{CreatePortfolioRequest, UpdatePortfolioRequest};
use crate::portfolios::repo_types::Portfolio;

impl Portfolio {
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        new: &CreatePortfolioRequest,
    ) -> anyhow::Result<Portfolio> {
        let portfolio = sqlx::query_as::<_, Portfolio>(
            r#"
            INSERT INTO portfolios (title, description, img, codelink, livelink, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, img, codelink, livelink, user_id, created_at
            "#,
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.img)
        .bind(&new.codelink)
        .bind(&new.livelink)
        .bind(user_id)
        .fetch_one(db)
        .await?;
        Ok(portfolio)
    }

    /// Every portfolio of every user. The listing is deliberately public.
    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Portfolio>> {
        let rows = sqlx::query_as::<_, Portfolio>(
            r#"
            SELECT id, title, description, img, codelink, livelink, user_id, created_at
            FROM portfolios
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Single-statement ownership-scoped update. Fields absent from the
    /// request keep their stored value. `None` means no row matched both
    /// the id and the owner.
    pub async fn update_owned(
        db: &PgPool,
        id: Uuid,
        user_id: Uuid,
        changes: &UpdatePortfolioRequest,
    ) -> anyhow::Result<Option<Portfolio>> {
        let portfolio = sqlx::query_as::<_, Portfolio>(
            r#"
            UPDATE portfolios
            SET title       = COALESCE($3, title),
                description = COALESCE($4, description),
                img         = COALESCE($5, img),
                codelink    = COALESCE($6, codelink),
                livelink    = COALESCE($7, livelink)
            WHERE id = $1 AND user_id = $2
            RETURNING id, title, description, img, codelink, livelink, user_id, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.img)
        .bind(&changes.codelink)
        .bind(&changes.livelink)
        .fetch_optional(db)
        .await?;
        Ok(portfolio)
    }

    /// Ownership-scoped delete; `false` means no row matched.
    pub async fn delete_owned(db: &PgPool, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        let deleted = sqlx::query_as::<_, (Uuid,)>(
            r#"
            DELETE FROM portfolios
            WHERE id = $1 AND user_id = $2
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(deleted.is_some())
    }
}
