use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

use rollcall::data::{Activities, EmailQuery, Message};
use rollcall::log;

use super::error::ApiError;
use crate::services::ActivityService;

/// Handler to list every activity
pub async fn list(State(state): State<Arc<crate::AppState>>) -> Result<Json<Activities>, ApiError> {
    let activities = state.activities.list().await?;
    Ok(Json(activities))
}

/// Handler to sign an email up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<Message>, ApiError> {
    let Query(EmailQuery { email }) = query?;

    match state.activities.signup(&name, &email).await {
        Ok(message) => {
            log::info!("{}", message.message);
            Ok(Json(message))
        }
        Err(err) => {
            log::warn!("Signup of {} for {} rejected: {}", email, name, err);
            Err(err.into())
        }
    }
}

/// Handler to remove an email from an activity
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<Message>, ApiError> {
    let Query(EmailQuery { email }) = query?;

    match state.activities.unregister(&name, &email).await {
        Ok(message) => {
            log::info!("{}", message.message);
            Ok(Json(message))
        }
        Err(err) => {
            log::warn!("Unregister of {} from {} rejected: {}", email, name, err);
            Err(err.into())
        }
    }
}
