use std::collections::HashMap;

use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::models::Activity;
use crate::registry::ActivityRegistry;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn list_activities(registry: &ActivityRegistry) -> HashMap<String, Activity> {
    registry.all()
}

pub fn sign_up(
    registry: &ActivityRegistry,
    activity: &str,
    email: &str,
) -> Result<MessageResponse, ApiError> {
    registry.add_participant(activity, email)?;
    info!("Signed up {} for {}", email, activity);

    Ok(MessageResponse {
        message: format!("Signed up {} for {}", email, activity),
    })
}

pub fn unregister(
    registry: &ActivityRegistry,
    activity: &str,
    email: &str,
) -> Result<MessageResponse, ApiError> {
    registry.remove_participant(activity, email)?;
    info!("Unregistered {} from {}", email, activity);

    Ok(MessageResponse {
        message: format!("Unregistered {} from {}", email, activity),
    })
}
