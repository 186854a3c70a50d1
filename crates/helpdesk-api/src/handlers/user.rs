//! User self-service handlers.

use axum::Json;
use axum::extract::State;

use helpdesk_entity::user::{ContactInfo, User};
use helpdesk_service::UserInventory;

use crate::dto::request::UpdateContactRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::CallerIdentity;
use crate::state::AppState;

/// GET /api/users/me
pub async fn get_profile(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.user_service.profile(&caller).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/users/me/contact
pub async fn update_contact(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Json(body): Json<UpdateContactRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state
        .user_service
        .update_contact(
            &caller,
            ContactInfo {
                room_number: body.room_number,
                phone_number: body.phone_number,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// GET /api/users/me/inventory
pub async fn get_inventory(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<ApiResponse<UserInventory>>, ApiError> {
    let inventory = state.user_service.inventory(&caller).await?;
    Ok(Json(ApiResponse::ok(inventory)))
}
