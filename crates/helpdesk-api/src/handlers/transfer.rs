//! File handoff handlers: multipart upload, destructive download.

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use bytes::Bytes;
use uuid::Uuid;

use helpdesk_core::error::AppError;
use helpdesk_entity::transfer::FileTransfer;

use crate::dto::response::{ApiResponse, PendingTransferResponse};
use crate::error::ApiError;
use crate::extractors::CallerIdentity;
use crate::state::AppState;

/// POST /api/files/send — multipart with a `receiver_id` field and a
/// `file` part.
pub async fn send_file(
    State(state): State<AppState>,
    caller: CallerIdentity,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<FileTransfer>>, ApiError> {
    let mut receiver_id: Option<Uuid> = None;
    let mut file_name: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("receiver_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Invalid receiver_id field: {e}")))?;
                receiver_id = Some(
                    text.parse::<Uuid>()
                        .map_err(|_| AppError::validation("Invalid receiver_id"))?,
                );
            }
            Some("file") => {
                file_name = field.file_name().map(String::from);
                data = Some(field.bytes().await.map_err(|e| {
                    AppError::validation(format!("Failed to read uploaded file: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let receiver_id =
        receiver_id.ok_or_else(|| AppError::validation("receiver_id field is required"))?;
    let file_name = file_name.ok_or_else(|| AppError::validation("file field is required"))?;
    let data = data.ok_or_else(|| AppError::validation("file field is required"))?;

    let transfer = state
        .transfer_service
        .send(&caller, receiver_id, &file_name, data)
        .await?;
    Ok(Json(ApiResponse::ok(transfer)))
}

/// GET /api/files/receive — downloads and consumes the caller's oldest
/// pending transfer.
pub async fn receive_file(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Response, ApiError> {
    let received = state.transfer_service.receive(&caller).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", received.file_name),
        )
        .header(header::CONTENT_LENGTH, received.data.len())
        .body(Body::from(received.data))
        .map_err(|e| ApiError::from(AppError::internal(format!("Response build failed: {e}"))))
}

/// GET /api/files/pending — dashboard indicator.
pub async fn pending(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<ApiResponse<PendingTransferResponse>>, ApiError> {
    let has_incoming = state.transfer_service.has_incoming(&caller).await?;
    Ok(Json(ApiResponse::ok(PendingTransferResponse {
        has_incoming,
    })))
}
