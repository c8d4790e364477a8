use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::error::ApiError;
use crate::models::Activity;
use crate::registry::ActivityRegistry;
use crate::services::roster_service::{self, MessageResponse};

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub email: String,
}

pub async fn list_activities_handler(
    State(registry): State<Arc<ActivityRegistry>>,
) -> Json<HashMap<String, Activity>> {
    Json(roster_service::list_activities(&registry))
}

pub async fn signup_handler(
    Path(name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(registry): State<Arc<ActivityRegistry>>,
) -> Result<Json<MessageResponse>, ApiError> {
    match roster_service::sign_up(&registry, &name, &query.email) {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            warn!("Signup failed for {}: {}", name, e);
            Err(e)
        }
    }
}

pub async fn unregister_handler(
    Path(name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(registry): State<Arc<ActivityRegistry>>,
) -> Result<Json<MessageResponse>, ApiError> {
    match roster_service::unregister(&registry, &name, &query.email) {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            warn!("Unregister failed for {}: {}", name, e);
            Err(e)
        }
    }
}
