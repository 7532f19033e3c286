use super::{ApiError, AppState};
use crate::api::CmdResult;
use crate::error::QueryError;
use crate::model::{Enquiry, EnquiryFields};
use crate::store::DataStore;
use crate::wire::{
    DeleteResponse, DeleteResult, HealthResponse, ListResponse, SingleResponse, UpdateResponse,
    UpdateResult, DELETED_MESSAGE, STATUS_OK, UPDATED_MESSAGE,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

type HandlerResult<T> = Result<Json<T>, ApiError>;

fn first_affected(result: CmdResult) -> Result<Enquiry, ApiError> {
    result
        .affected_enquiries
        .into_iter()
        .next()
        .ok_or_else(|| QueryError::Store("command reported no affected enquiry".into()).into())
}

pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// `POST /enquiryinsert` echoes the stored fields back.
pub async fn insert_enquiry<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
    payload: Result<Json<EnquiryFields>, JsonRejection>,
) -> HandlerResult<EnquiryFields> {
    let Json(fields) = payload?;
    let result = state
        .with_api(move |api| api.create_enquiry(&fields))
        .await?;
    let created = first_affected(result)?;
    info!(id = %created.id, email = %created.email, "enquiry created");
    Ok(Json(EnquiryFields::from(&created)))
}

pub async fn list_enquiries<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
) -> HandlerResult<ListResponse> {
    let result = state.with_api(|api| api.list_enquiries()).await?;
    Ok(Json(ListResponse {
        status: STATUS_OK,
        enquiry: result.listed_enquiries,
    }))
}

pub async fn get_enquiry<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> HandlerResult<SingleResponse> {
    let result = state.with_api(move |api| api.get_enquiry(&id)).await?;
    let enquiry = result
        .listed_enquiries
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::from(QueryError::Store("lookup returned nothing".into())))?;
    Ok(Json(SingleResponse {
        status: STATUS_OK,
        enquiry,
    }))
}

pub async fn update_enquiry<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    payload: Result<Json<EnquiryFields>, JsonRejection>,
) -> HandlerResult<UpdateResponse> {
    let Json(fields) = payload?;
    let result = state
        .with_api(move |api| api.update_enquiry(&id, &fields))
        .await?;
    let modified_count = result.modified_count;
    let updated = first_affected(result)?;
    info!(id = %updated.id, modified = modified_count, "enquiry updated");
    Ok(Json(UpdateResponse {
        status: STATUS_OK,
        message: UPDATED_MESSAGE.to_string(),
        update_response: UpdateResult {
            acknowledged: true,
            matched_count: 1,
            modified_count,
        },
    }))
}

pub async fn remove_enquiry<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> HandlerResult<DeleteResponse> {
    let result = state
        .with_api(move |api| api.delete_enquiry(&id))
        .await?;
    let removed = first_affected(result)?;
    info!(id = %removed.id, "enquiry deleted");
    Ok(Json(DeleteResponse {
        status: STATUS_OK,
        message: DELETED_MESSAGE.to_string(),
        enquiry: DeleteResult {
            acknowledged: true,
            deleted_count: 1,
        },
    }))
}
