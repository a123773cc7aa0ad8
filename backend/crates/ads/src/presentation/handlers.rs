//! HTTP Handlers

use auth::middleware::{CurrentUser, MaybeUser};
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::AdsConfig;
use crate::application::{
    CreateAdvertisementInput, CreateAdvertisementUseCase, ListAdvertisementsInput,
    ListAdvertisementsUseCase,
};
use crate::domain::repository::AdsRepository;
use crate::error::{AdsError, AdsResult};
use crate::presentation::dto::{AdvertisementResponse, CreateAdvertisementRequest, ListingQuery};

/// Shared state for advertisement handlers
#[derive(Clone)]
pub struct AdsAppState<R>
where
    R: AdsRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AdsConfig>,
}

// ============================================================================
// Create
// ============================================================================

/// POST /advertisements
pub async fn create_advertisement<R>(
    State(state): State<AdsAppState<R>>,
    CurrentUser(identity): CurrentUser,
    payload: Result<Json<CreateAdvertisementRequest>, JsonRejection>,
) -> AdsResult<(StatusCode, Json<AdvertisementResponse>)>
where
    R: AdsRepository + Clone + Send + Sync + 'static,
{
    let Json(req) =
        payload.map_err(|rejection| AdsError::InvalidPayload(rejection.body_text()))?;

    let use_case = CreateAdvertisementUseCase::new(state.repo.clone());
    let output = use_case
        .execute(CreateAdvertisementInput {
            title: req.title,
            description: req.description,
            price: req.price,
            image_url: req.image_url,
            owner_login: identity.login,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AdvertisementResponse::from(output.advertisement)),
    ))
}

// ============================================================================
// List
// ============================================================================

/// GET /advertisements
pub async fn list_advertisements<R>(
    State(state): State<AdsAppState<R>>,
    requester: MaybeUser,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> AdsResult<Json<Vec<AdvertisementResponse>>>
where
    R: AdsRepository + Clone + Send + Sync + 'static,
{
    let Query(query) =
        query.map_err(|rejection| AdsError::InvalidFilter(rejection.body_text()))?;

    let use_case = ListAdvertisementsUseCase::new(state.repo.clone(), state.config.clone());
    let listed = use_case
        .execute(ListAdvertisementsInput {
            params: query.into(),
            requester: requester.0.map(|identity| identity.login),
        })
        .await?;

    Ok(Json(listed.into_iter().map(AdvertisementResponse::from).collect()))
}
