//! # Dashboard
//!
//! The administrative screen as a UI-agnostic state machine: a form, the fetched
//! table, a search box and a queue of notifications for whatever front end renders it.
//!
//! ```text
//!            load()                   list arrives / fails
//!   Idle ──────────────▶ Loading ──────────────────────────▶ Idle
//!     ▲                                                        │
//!     └──── submit() ok / delete() ok trigger load() again ────┘
//! ```
//!
//! The table is a cache of server state. After every successful mutation it is
//! refetched, never patched locally.
//!
//! Methods take `&self` so a front end may share one dashboard between tasks.
//! Only one submit runs at a time; a second one is refused until the first resolves.

use crate::commands::CmdMessage;
use crate::error::{QueryError, Result};
use crate::model::{Enquiry, EnquiryFields};
use crate::search::filter_enquiries;
use crate::validation::{self, validate_fields};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};
use uuid::Uuid;

pub const SUBMITTED: &str = "Enquiry submitted successfully!";
pub const UPDATED: &str = "Enquiry updated successfully!";
pub const SAVE_FAILED: &str = "Failed to save enquiry!";
pub const UPDATE_FAILED: &str = "Failed to update enquiry!";
pub const DELETED: &str = "Enquiry deleted successfully!";
pub const DELETE_FAILED: &str = "Failed to delete enquiry!";
pub const LOAD_FAILED: &str = "Failed to load enquiry data!";
pub const FORM_CLEARED: &str = "Form cleared!";
pub const SUBMIT_BUSY: &str = "Please wait for the current submission to finish";

/// Where the dashboard sends its requests.
#[async_trait]
pub trait EnquiryBackend: Send + Sync {
    async fn list(&self) -> Result<Vec<Enquiry>>;
    async fn get(&self, id: Uuid) -> Result<Enquiry>;
    async fn create(&self, fields: &EnquiryFields) -> Result<()>;
    async fn update(&self, id: Uuid, fields: &EnquiryFields) -> Result<()>;
    async fn remove(&self, id: Uuid) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Uuid),
}

#[derive(Debug, Default)]
struct DashboardState {
    enquiries: Vec<Enquiry>,
    loads_in_flight: usize,
    form: EnquiryFields,
    editing: Option<Uuid>,
    search: String,
    notifications: Vec<CmdMessage>,
}

impl DashboardState {
    fn clear_form(&mut self) {
        self.form = EnquiryFields::default();
        self.editing = None;
    }
}

pub struct Dashboard<B: EnquiryBackend> {
    backend: B,
    state: Mutex<DashboardState>,
    submitting: AtomicBool,
}

/// Releases the submit slot when the submit finishes or is dropped.
struct SubmitSlot<'a>(&'a AtomicBool);

impl Drop for SubmitSlot<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Counts one load as in flight until it finishes or is dropped.
struct LoadTicket<'a>(&'a Mutex<DashboardState>);

impl<'a> LoadTicket<'a> {
    fn take(state: &'a Mutex<DashboardState>) -> Self {
        lock(state).loads_in_flight += 1;
        Self(state)
    }
}

impl Drop for LoadTicket<'_> {
    fn drop(&mut self) {
        lock(self.0).loads_in_flight -= 1;
    }
}

// Poisoning is ignored.
fn lock(state: &Mutex<DashboardState>) -> MutexGuard<'_, DashboardState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<B: EnquiryBackend> Dashboard<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: Mutex::new(DashboardState::default()),
            submitting: AtomicBool::new(false),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn state(&self) -> MutexGuard<'_, DashboardState> {
        lock(&self.state)
    }

    fn notify(&self, message: CmdMessage) {
        self.state().notifications.push(message);
    }

    /// Fetch the list. On failure the previous table is kept.
    pub async fn load(&self) -> Result<()> {
        let ticket = LoadTicket::take(&self.state);
        let result = self.backend.list().await;
        drop(ticket);

        let mut state = self.state();
        match result {
            Ok(enquiries) => {
                debug!(count = enquiries.len(), "enquiries loaded");
                state.enquiries = enquiries;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "cannot fetch enquiries");
                Err(err)
            }
        }
    }

    /// Validate the form, then create or update depending on the mode.
    pub async fn submit(&self) -> bool {
        if self.submitting.swap(true, Ordering::AcqRel) {
            self.notify(CmdMessage::warning(SUBMIT_BUSY));
            return false;
        }
        let _slot = SubmitSlot(&self.submitting);

        let (form, editing) = {
            let state = self.state();
            (state.form.clone(), state.editing)
        };
        let fields = match validate_fields(&form) {
            Ok(valid) => EnquiryFields::from(valid),
            Err(err) => {
                self.notify(validation_notice(&err));
                return false;
            }
        };

        let outcome = match editing {
            Some(id) => self.backend.update(id, &fields).await,
            None => self.backend.create(&fields).await,
        };
        match outcome {
            Ok(()) => {
                {
                    let mut state = self.state();
                    state.clear_form();
                    state
                        .notifications
                        .push(CmdMessage::success(if editing.is_some() {
                            UPDATED
                        } else {
                            SUBMITTED
                        }));
                }
                self.load().await.ok();
                true
            }
            Err(err) => {
                warn!(error = %err, ?editing, "submit failed");
                self.notify(CmdMessage::error(if editing.is_some() {
                    UPDATE_FAILED
                } else {
                    SAVE_FAILED
                }));
                false
            }
        }
    }

    /// Load a record into the form for editing.
    pub async fn edit(&self, id: Uuid) -> bool {
        match self.backend.get(id).await {
            Ok(enquiry) => {
                let mut state = self.state();
                state.form = EnquiryFields::from(&enquiry);
                state.editing = Some(enquiry.id);
                true
            }
            Err(err) => {
                warn!(error = %err, %id, "cannot load enquiry");
                self.notify(CmdMessage::error(LOAD_FAILED));
                false
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> bool {
        match self.backend.remove(id).await {
            Ok(()) => {
                self.notify(CmdMessage::success(DELETED));
                self.load().await.ok();
                true
            }
            Err(err) => {
                warn!(error = %err, %id, "cannot delete enquiry");
                self.notify(CmdMessage::error(DELETE_FAILED));
                false
            }
        }
    }

    pub fn reset_form(&self) {
        let mut state = self.state();
        state.clear_form();
        state.notifications.push(CmdMessage::info(FORM_CLEARED));
    }

    /// Replace the form contents without changing the mode.
    pub fn set_form(&self, form: EnquiryFields) {
        self.state().form = form;
    }

    pub fn form(&self) -> EnquiryFields {
        self.state().form.clone()
    }

    pub fn mode(&self) -> FormMode {
        match self.state().editing {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    pub fn load_state(&self) -> LoadState {
        if self.state().loads_in_flight > 0 {
            LoadState::Loading
        } else {
            LoadState::Idle
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    pub fn set_search(&self, term: impl Into<String>) {
        self.state().search = term.into();
    }

    /// The fetched list as returned by the last successful load.
    pub fn enquiries(&self) -> Vec<Enquiry> {
        self.state().enquiries.clone()
    }

    /// Rows matching the current search term.
    pub fn visible(&self) -> Vec<Enquiry> {
        let state = self.state();
        filter_enquiries(&state.enquiries, &state.search)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn take_notifications(&self) -> Vec<CmdMessage> {
        std::mem::take(&mut self.state().notifications)
    }
}

fn validation_notice(err: &QueryError) -> CmdMessage {
    let text = err.to_string();
    match err {
        QueryError::Validation { message, .. } if message == validation::PHONE_MISSING => {
            CmdMessage::warning(text)
        }
        _ => CmdMessage::error(text),
    }
}
