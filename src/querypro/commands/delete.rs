use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use uuid::Uuid;

pub fn run<S: DataStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let removed = store.delete_enquiry(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Enquiry deleted: {}",
        removed.name
    )));
    result.affected_enquiries.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{get, list};
    use crate::error::QueryError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_the_enquiry() {
        let mut store = StoreFixture::new().with_enquiries(2).store;
        let first = store.list_enquiries().unwrap()[0].id;

        let result = run(&mut store, &first).unwrap();
        assert_eq!(result.affected_enquiries[0].id, first);

        assert_eq!(list::run(&store).unwrap().listed_enquiries.len(), 1);
        assert!(matches!(
            get::run(&store, &first),
            Err(QueryError::NotFound(_))
        ));
    }

    #[test]
    fn deleting_twice_is_not_found() {
        let mut store = StoreFixture::new().with_enquiries(1).store;
        let id = store.list_enquiries().unwrap()[0].id;

        run(&mut store, &id).unwrap();
        assert!(matches!(run(&mut store, &id), Err(QueryError::NotFound(_))));
    }
}
