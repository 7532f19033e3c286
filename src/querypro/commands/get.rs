use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;
use uuid::Uuid;

pub fn run<S: DataStore>(store: &S, id: &Uuid) -> Result<CmdResult> {
    let enquiry = store.get_enquiry(id)?;
    Ok(CmdResult::default().with_listed_enquiries(vec![enquiry]))
}
