use super::{check_writable, DataStore};
use crate::error::{QueryError, Result};
use crate::model::{Enquiry, NewEnquiry};
use uuid::Uuid;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    enquiries: Vec<Enquiry>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &Uuid) -> Result<usize> {
        self.enquiries
            .iter()
            .position(|e| &e.id == id)
            .ok_or(QueryError::NotFound(*id))
    }
}

impl DataStore for InMemoryStore {
    fn create_enquiry(&mut self, fields: NewEnquiry) -> Result<Enquiry> {
        check_writable(&self.enquiries, &fields, None)?;
        let enquiry = Enquiry::new(fields);
        self.enquiries.push(enquiry.clone());
        Ok(enquiry)
    }

    fn list_enquiries(&self) -> Result<Vec<Enquiry>> {
        Ok(self.enquiries.clone())
    }

    fn get_enquiry(&self, id: &Uuid) -> Result<Enquiry> {
        let pos = self.position(id)?;
        Ok(self.enquiries[pos].clone())
    }

    fn update_enquiry(&mut self, id: &Uuid, fields: NewEnquiry) -> Result<(Enquiry, bool)> {
        let pos = self.position(id)?;
        check_writable(&self.enquiries, &fields, Some(id))?;
        let modified = self.enquiries[pos].apply(fields);
        Ok((self.enquiries[pos].clone(), modified))
    }

    fn delete_enquiry(&mut self, id: &Uuid) -> Result<Enquiry> {
        let pos = self.position(id)?;
        Ok(self.enquiries.remove(pos))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_enquiries(mut self, count: usize) -> Self {
            for i in 0..count {
                let fields = NewEnquiry::new(
                    format!("Customer {}", i + 1),
                    format!("customer{}@example.com", i + 1),
                    format!("+1 555 000 {:04}", i + 1),
                    format!("Enquiry number {} about our services", i + 1),
                );
                self.store.create_enquiry(fields).unwrap();
            }
            self
        }

        pub fn with_enquiry(mut self, name: &str, email: &str, message: &str) -> Self {
            let fields = NewEnquiry::new(name, email, "0123456789", message);
            self.store.create_enquiry(fields).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn lists_in_insertion_order() {
        let store = StoreFixture::new().with_enquiries(3).store;
        let names: Vec<_> = store
            .list_enquiries()
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["Customer 1", "Customer 2", "Customer 3"]);
    }

    #[test]
    fn duplicate_email_does_not_overwrite() {
        let mut store = StoreFixture::new()
            .with_enquiry("First", "dup@example.com", "The original message")
            .store;

        let second = NewEnquiry::new("Second", "dup@example.com", "0123456789", "Overwrite?");
        let err = store.create_enquiry(second).unwrap_err();
        assert!(matches!(err, QueryError::DuplicateKey(_)));

        let all = store.list_enquiries().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "First");
    }

    #[test]
    fn update_cannot_steal_another_records_email() {
        let mut store = StoreFixture::new().with_enquiries(2).store;
        let all = store.list_enquiries().unwrap();
        let mut fields = all[1].fields();
        fields.email = all[0].email.clone();

        let err = store.update_enquiry(&all[1].id, fields).unwrap_err();
        assert!(matches!(err, QueryError::DuplicateKey(_)));
        assert_eq!(store.get_enquiry(&all[1].id).unwrap().email, all[1].email);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let mut store = StoreFixture::new().with_enquiries(1).store;
        let missing = Uuid::new_v4();
        let fields = NewEnquiry::new("Nobody", "no@body.com", "0123456789", "Nothing here");

        assert!(matches!(
            store.get_enquiry(&missing),
            Err(QueryError::NotFound(id)) if id == missing
        ));
        assert!(matches!(
            store.update_enquiry(&missing, fields),
            Err(QueryError::NotFound(_))
        ));
        assert!(matches!(
            store.delete_enquiry(&missing),
            Err(QueryError::NotFound(_))
        ));
    }

    #[test]
    fn delete_twice_reports_not_found() {
        let mut store = StoreFixture::new().with_enquiries(1).store;
        let id = store.list_enquiries().unwrap()[0].id;

        store.delete_enquiry(&id).unwrap();
        assert!(matches!(
            store.delete_enquiry(&id),
            Err(QueryError::NotFound(_))
        ));
    }
}
