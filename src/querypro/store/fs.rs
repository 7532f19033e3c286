use super::{check_writable, DataStore};
use crate::error::{QueryError, Result};
use crate::model::{Enquiry, NewEnquiry};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

const DATA_FILENAME: &str = "enquiries.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(QueryError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<Vec<Enquiry>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(data_file).map_err(QueryError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let enquiries: Vec<Enquiry> =
            serde_json::from_str(&content).map_err(QueryError::Serialization)?;
        Ok(enquiries)
    }

    fn save(&self, enquiries: &[Enquiry]) -> Result<()> {
        self.ensure_dir()?;
        let content =
            serde_json::to_string_pretty(enquiries).map_err(QueryError::Serialization)?;

        // Write to a sibling temp file, then rename over the real one
        let tmp_file = self.root.join(format!(".enquiries-{}.tmp", Uuid::new_v4()));
        let written =
            fs::write(&tmp_file, content).and_then(|()| fs::rename(&tmp_file, self.data_file()));
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp_file);
            return Err(QueryError::Io(err));
        }
        Ok(())
    }

    fn position(enquiries: &[Enquiry], id: &Uuid) -> Result<usize> {
        enquiries
            .iter()
            .position(|e| &e.id == id)
            .ok_or(QueryError::NotFound(*id))
    }
}

impl DataStore for FileStore {
    fn create_enquiry(&mut self, fields: NewEnquiry) -> Result<Enquiry> {
        let mut enquiries = self.load()?;
        check_writable(&enquiries, &fields, None)?;

        let enquiry = Enquiry::new(fields);
        enquiries.push(enquiry.clone());
        self.save(&enquiries)?;
        Ok(enquiry)
    }

    fn list_enquiries(&self) -> Result<Vec<Enquiry>> {
        self.load()
    }

    fn get_enquiry(&self, id: &Uuid) -> Result<Enquiry> {
        let mut enquiries = self.load()?;
        let pos = Self::position(&enquiries, id)?;
        Ok(enquiries.swap_remove(pos))
    }

    fn update_enquiry(&mut self, id: &Uuid, fields: NewEnquiry) -> Result<(Enquiry, bool)> {
        let mut enquiries = self.load()?;
        let pos = Self::position(&enquiries, id)?;
        check_writable(&enquiries, &fields, Some(id))?;

        let modified = enquiries[pos].apply(fields);
        if modified {
            self.save(&enquiries)?;
        }
        Ok((enquiries.swap_remove(pos), modified))
    }

    fn delete_enquiry(&mut self, id: &Uuid) -> Result<Enquiry> {
        let mut enquiries = self.load()?;
        let pos = Self::position(&enquiries, id)?;

        let removed = enquiries.remove(pos);
        self.save(&enquiries)?;
        Ok(removed)
    }
}
