use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    portfolios::{
        dto::{CreatePortfolioRequest, MessageResponse, PortfolioResponse, UpdatePortfolioRequest},
        repo_types::Portfolio,
    },
    state::AppState,
};

pub fn portfolio_routes() -> Router<AppState> {
    Router::new()
        .route("/portfolio", get(list_portfolios).post(create_portfolio))
        .route(
            "/portfolio/:id",
            put(update_portfolio).delete(delete_portfolio),
        )
}

#[instrument(skip(state, payload))]
pub async fn create_portfolio(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreatePortfolioRequest>,
) -> Result<(StatusCode, HeaderMap, Json<PortfolioResponse>), ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::BadRequest("Title is required".into()));
    }

    let portfolio = Portfolio::create(&state.db, user_id, &payload).await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::LOCATION,
        format!("/portfolio/{}", portfolio.id)
            .parse()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("location header: {e}")))?,
    );

    info!(portfolio_id = %portfolio.id, %user_id, "portfolio created");
    Ok((
        StatusCode::CREATED,
        headers,
        Json(PortfolioResponse::from(portfolio)),
    ))
}

/// Public listing: every portfolio of every user, no auth.
#[instrument(skip(state))]
pub async fn list_portfolios(
    State(state): State<AppState>,
) -> Result<Json<Vec<PortfolioResponse>>, ApiError> {
    let portfolios = Portfolio::list_all(&state.db).await?;
    let items = portfolios.into_iter().map(PortfolioResponse::from).collect();
    Ok(Json(items))
}

#[instrument(skip(state, payload))]
pub async fn update_portfolio(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePortfolioRequest>,
) -> Result<Json<PortfolioResponse>, ApiError> {
    if let Some(title) = &payload.title {
        if title.trim().is_empty() {
            return Err(ApiError::BadRequest("Title is required".into()));
        }
    }

    match Portfolio::update_owned(&state.db, id, user_id, &payload).await? {
        Some(portfolio) => {
            info!(portfolio_id = %id, %user_id, "portfolio updated");
            Ok(Json(PortfolioResponse::from(portfolio)))
        }
        None => {
            // Either the record does not exist or it belongs to someone
            // else; the response does not distinguish the two.
            warn!(portfolio_id = %id, %user_id, "update matched no owned portfolio");
            Err(ApiError::NotFound("Portfolio not found".into()))
        }
    }
}

#[instrument(skip(state))]
pub async fn delete_portfolio(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    if Portfolio::delete_owned(&state.db, id, user_id).await? {
        info!(portfolio_id = %id, %user_id, "portfolio deleted");
        Ok(Json(MessageResponse {
            message: "Portfolio deleted successfully!".into(),
        }))
    } else {
        warn!(portfolio_id = %id, %user_id, "delete matched no owned portfolio");
        Err(ApiError::NotFound("Portfolio not found".into()))
    }
}
