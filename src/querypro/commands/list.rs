use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let enquiries = store.list_enquiries()?;
    Ok(CmdResult::default().with_listed_enquiries(enquiries))
}
