use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EnquiryFields;
use crate::store::DataStore;
use crate::validation::validate_fields;
use uuid::Uuid;

pub fn run<S: DataStore>(store: &mut S, id: &Uuid, fields: &EnquiryFields) -> Result<CmdResult> {
    let new = validate_fields(fields)?;
    let (enquiry, modified) = store.update_enquiry(id, new)?;

    let mut result = CmdResult::default();
    if modified {
        result.modified_count = 1;
        result.add_message(CmdMessage::success(format!(
            "Enquiry updated: {}",
            enquiry.name
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Enquiry unchanged: {}",
            enquiry.name
        )));
    }
    result.affected_enquiries.push(enquiry);
    Ok(result)
}
