//! JSON bodies exchanged over `/api/enquiry`.
//!
//! Field names follow what existing dashboards already parse, including the
//! `updateResponce` spelling on the update endpoint.

use crate::model::Enquiry;
use serde::{Deserialize, Serialize};

pub const BASE_PATH: &str = "/api/enquiry";
pub const INSERT_PATH: &str = "/enquiryinsert";
pub const LIST_PATH: &str = "/enquirylist";
pub const REMOVE_PATH: &str = "/enquiryremove";
pub const EDIT_PATH: &str = "/enquiryedit";
pub const UPDATE_PATH: &str = "/enquiryupdate";

pub const STATUS_OK: u8 = 1;
pub const STATUS_FAILED: u8 = 0;

pub const DELETED_MESSAGE: &str = "Enquiry Delete Successfully";
pub const UPDATED_MESSAGE: &str = "Enquiry Updated";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    pub status: u8,
    pub enquiry: Vec<Enquiry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleResponse {
    pub status: u8,
    pub enquiry: Enquiry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub status: u8,
    pub message: String,
    pub enquiry: DeleteResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub status: u8,
    pub message: String,
    #[serde(rename = "updateResponce")]
    pub update_response: UpdateResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u8,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_response_keeps_legacy_key() {
        let body = UpdateResponse {
            status: STATUS_OK,
            message: UPDATED_MESSAGE.to_string(),
            update_response: UpdateResult {
                acknowledged: true,
                matched_count: 1,
                modified_count: 1,
            },
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "status": 1,
                "message": "Enquiry Updated",
                "updateResponce": {"acknowledged": true, "matchedCount": 1, "modifiedCount": 1}
            })
        );
    }

    #[test]
    fn delete_result_uses_camel_case() {
        let body = DeleteResult {
            acknowledged: true,
            deleted_count: 1,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"acknowledged": true, "deletedCount": 1})
        );
    }
}
