//! HTTP Handlers
//!
//! Every handler runs behind the auth middleware and acts on behalf of
//! the `CurrentUser` it inserted.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use kernel::current_user::CurrentUser;
use kernel::error::app_error::AppError;
use std::sync::Arc;

use crate::application::config::WorkoutConfig;
use crate::application::{
    CreateSetUseCase, DeleteSetUseCase, GetSetUseCase, ListSetsInput, ListSetsUseCase,
    UpdateSetUseCase,
};
use crate::domain::repository::SetRepository;
use crate::domain::value_objects::{SetDraft, SetId};
use crate::error::{SetError, SetResult};
use crate::presentation::dto::{
    DeleteResponse, ListQuery, SetListResponse, SetRequest, SetResponse,
};

/// Shared state for workout handlers
#[derive(Clone)]
pub struct WorkoutAppState<R>
where
    R: SetRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<WorkoutConfig>,
}

/// GET /api/v1/sets
pub async fn list_sets<R>(
    State(state): State<WorkoutAppState<R>>,
    current_user: CurrentUser,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> SetResult<Json<SetListResponse>>
where
    R: SetRepository + Clone + Send + Sync + 'static,
{
    // Lenient: a query string that does not even deserialize is treated as empty
    let query = query
        .map(|Query(q)| q)
        .unwrap_or_else(|rejection| {
            tracing::debug!(error = %rejection, "Ignoring unparsable list query");
            ListQuery::default()
        });

    let use_case = ListSetsUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case
        .execute(
            current_user.user_id,
            ListSetsInput {
                skip: query.skip,
                limit: query.limit,
            },
        )
        .await?;

    let sets: Vec<SetResponse> = output.sets.into_iter().map(SetResponse::from).collect();
    Ok(Json(SetListResponse {
        results: sets.len(),
        skip: output.page.skip,
        limit: output.page.limit,
        sets,
    }))
}

/// POST /api/v1/sets
pub async fn create_set<R>(
    State(state): State<WorkoutAppState<R>>,
    current_user: CurrentUser,
    payload: Result<Json<SetRequest>, JsonRejection>,
) -> SetResult<(StatusCode, Json<SetResponse>)>
where
    R: SetRepository + Clone + Send + Sync + 'static,
{
    let draft = parse_draft(payload)?;

    let set = CreateSetUseCase::new(state.repo.clone())
        .execute(current_user.user_id, draft)
        .await?;

    Ok((StatusCode::CREATED, Json(set.into())))
}

/// GET /api/v1/sets/{id}
pub async fn get_set<R>(
    State(state): State<WorkoutAppState<R>>,
    current_user: CurrentUser,
    Path(id): Path<String>,
) -> SetResult<Json<SetResponse>>
where
    R: SetRepository + Clone + Send + Sync + 'static,
{
    let id = parse_id(&id)?;

    let set = GetSetUseCase::new(state.repo.clone())
        .execute(id, current_user.user_id)
        .await?;

    Ok(Json(set.into()))
}

/// PUT /api/v1/sets/{id}
pub async fn update_set<R>(
    State(state): State<WorkoutAppState<R>>,
    current_user: CurrentUser,
    Path(id): Path<String>,
    payload: Result<Json<SetRequest>, JsonRejection>,
) -> SetResult<Json<SetResponse>>
where
    R: SetRepository + Clone + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let draft = parse_draft(payload)?;

    let set = UpdateSetUseCase::new(state.repo.clone())
        .execute(id, current_user.user_id, draft)
        .await?;

    Ok(Json(set.into()))
}

/// DELETE /api/v1/sets/{id}
pub async fn delete_set<R>(
    State(state): State<WorkoutAppState<R>>,
    current_user: CurrentUser,
    Path(id): Path<String>,
) -> SetResult<Json<DeleteResponse>>
where
    R: SetRepository + Clone + Send + Sync + 'static,
{
    let id = parse_id(&id)?;

    DeleteSetUseCase::new(state.repo.clone())
        .execute(id, current_user.user_id)
        .await?;

    Ok(Json(DeleteResponse::success()))
}

// ============================================================================
// Helpers
// ============================================================================

fn parse_id(raw: &str) -> SetResult<SetId> {
    SetId::parse(raw).ok_or(SetError::InvalidId)
}

fn parse_draft(payload: Result<Json<SetRequest>, JsonRejection>) -> SetResult<SetDraft> {
    let Json(req) = payload.map_err(AppError::from)?;
    Ok(SetDraft::parse(
        req.weight,
        req.exercise.as_deref(),
        req.repetitions,
    )?)
}
