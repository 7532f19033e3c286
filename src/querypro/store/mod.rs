//! # Storage Layer
//!
//! This module defines the storage abstraction for enquiries. The [`DataStore`] trait
//! lets the service run against a file on disk in production and a plain vector in tests.
//!
//! ## Invariants Owned Here
//!
//! The store, not the caller, is responsible for:
//! - **Unique ids**: every created enquiry gets a fresh v4 UUID
//! - **Unique emails**: create and update fail with `DuplicateKey` rather than overwrite
//! - **Required fields**: a record with an empty name, email, phone or message is refused
//!
//! Both implementations run their writes through [`check_writable`], so the rules cannot
//! drift between backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One JSON array in `enquiries.json`
//!   - Atomic writes (temp file, then rename)
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Preserves insertion order
//!
//! ## Storage Format
//!
//! ```text
//! <data_dir>/
//! └── enquiries.json      # All enquiries (JSON array, insertion order)
//! ```

use crate::error::{QueryError, Result};
use crate::model::{Enquiry, NewEnquiry};
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for enquiry storage.
pub trait DataStore {
    /// Insert a new enquiry with a fresh id.
    fn create_enquiry(&mut self, fields: NewEnquiry) -> Result<Enquiry>;

    /// All enquiries, oldest first.
    fn list_enquiries(&self) -> Result<Vec<Enquiry>>;

    /// Get an enquiry by id
    fn get_enquiry(&self, id: &Uuid) -> Result<Enquiry>;

    /// Replace every mutable field of an existing enquiry.
    /// Returns the stored record and whether anything changed.
    fn update_enquiry(&mut self, id: &Uuid, fields: NewEnquiry) -> Result<(Enquiry, bool)>;

    /// Remove an enquiry permanently, returning what was removed.
    fn delete_enquiry(&mut self, id: &Uuid) -> Result<Enquiry>;
}

/// Refuse a write that would leave a required field empty or reuse another
/// record's email. `own_id` is the record being updated, if any.
pub(crate) fn check_writable(
    existing: &[Enquiry],
    fields: &NewEnquiry,
    own_id: Option<&Uuid>,
) -> Result<()> {
    if let Some(field) = fields.first_missing() {
        return Err(QueryError::validation(field, format!("{field} is required")));
    }

    let email = fields.email.trim();
    let taken = existing
        .iter()
        .filter(|e| Some(&e.id) != own_id)
        .any(|e| e.email.trim() == email);
    if taken {
        return Err(QueryError::DuplicateKey(email.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(email: &str) -> NewEnquiry {
        NewEnquiry::new("Ada", email, "0123456789", "Hello there, store!")
    }

    #[test]
    fn rejects_email_owned_by_another_record() {
        let existing = vec![Enquiry::new(fields("a@b.co"))];
        let err = check_writable(&existing, &fields("a@b.co"), None).unwrap_err();
        assert!(matches!(err, QueryError::DuplicateKey(email) if email == "a@b.co"));
    }

    #[test]
    fn allows_a_record_to_keep_its_own_email() {
        let existing = vec![Enquiry::new(fields("a@b.co"))];
        let own = existing[0].id;
        assert!(check_writable(&existing, &fields("a@b.co"), Some(&own)).is_ok());
    }

    #[test]
    fn rejects_blank_required_fields() {
        let mut blank = fields("a@b.co");
        blank.name = " ".into();
        let err = check_writable(&[], &blank, None).unwrap_err();
        assert!(matches!(err, QueryError::Validation { field: "name", .. }));
    }
}
