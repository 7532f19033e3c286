//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every enquiry operation, whichever front end is calling.
//!
//! It:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs**: ids arrive as path strings and leave as UUIDs
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not validate fields, touch files or know about HTTP. The HTTP service in
//! [`crate::server`] holds one `EnquiryApi` behind a mutex and maps its results to
//! response bodies.
//!
//! `EnquiryApi<S: DataStore>` is generic over the storage backend:
//! - Production: `EnquiryApi<FileStore>`
//! - Testing: `EnquiryApi<InMemoryStore>`

use crate::commands::{self, parse_id};
use crate::error::Result;
use crate::model::EnquiryFields;
use crate::store::DataStore;

pub struct EnquiryApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> EnquiryApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_enquiry(&mut self, fields: &EnquiryFields) -> Result<CmdResult> {
        commands::create::run(&mut self.store, fields)
    }

    pub fn list_enquiries(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn get_enquiry(&self, id: &str) -> Result<CmdResult> {
        let id = parse_id(id)?;
        commands::get::run(&self.store, &id)
    }

    pub fn update_enquiry(&mut self, id: &str, fields: &EnquiryFields) -> Result<CmdResult> {
        let id = parse_id(id)?;
        commands::update::run(&mut self.store, &id, fields)
    }

    pub fn delete_enquiry(&mut self, id: &str) -> Result<CmdResult> {
        let id = parse_id(id)?;
        commands::delete::run(&mut self.store, &id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;
    use crate::store::memory::InMemoryStore;

    fn api() -> EnquiryApi<InMemoryStore> {
        EnquiryApi::new(InMemoryStore::new())
    }

    fn fields(message: &str) -> EnquiryFields {
        EnquiryFields::new("Ada Lovelace", "ada@example.com", "0123456789", message)
    }

    #[test]
    fn malformed_ids_are_rejected_before_dispatch() {
        let mut api = api();
        assert!(matches!(
            api.get_enquiry("not-a-uuid"),
            Err(QueryError::InvalidId(_))
        ));
        assert!(matches!(
            api.update_enquiry("42", &fields("Any message at all")),
            Err(QueryError::InvalidId(_))
        ));
        assert!(matches!(
            api.delete_enquiry(""),
            Err(QueryError::InvalidId(_))
        ));
    }

    #[test]
    fn full_lifecycle() {
        let mut api = api();
        api.create_enquiry(&fields("First version of it")).unwrap();

        let listed = api.list_enquiries().unwrap().listed_enquiries;
        assert_eq!(listed.len(), 1);
        let id = listed[0].id.to_string();

        api.update_enquiry(&id, &fields("Second version of it")).unwrap();
        let fetched = api.get_enquiry(&id).unwrap().listed_enquiries;
        assert_eq!(fetched[0].message, "Second version of it");

        api.delete_enquiry(&id).unwrap();
        assert!(matches!(api.get_enquiry(&id), Err(QueryError::NotFound(_))));
        assert!(api.store().list_enquiries().unwrap().is_empty());
    }
}
