use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EnquiryFields;
use crate::store::DataStore;
use crate::validation::validate_fields;

pub fn run<S: DataStore>(store: &mut S, fields: &EnquiryFields) -> Result<CmdResult> {
    let new = validate_fields(fields)?;
    let enquiry = store.create_enquiry(new)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Enquiry received from {} <{}>",
        enquiry.name, enquiry.email
    )));
    result.affected_enquiries.push(enquiry);
    Ok(result)
}
