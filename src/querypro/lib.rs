//! # QueryPro Architecture
//!
//! QueryPro is a small customer-enquiry desk. Visitors submit a name, email, phone
//! number and message; an administrator lists, searches, edits and deletes what came in.
//!
//! The crate is a **library first**. The HTTP service, the HTTP client and the terminal
//! dashboard are all thin clients of the same core.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front ends                                                 │
//! │  - server/: axum routes under /api/enquiry                  │
//! │  - dashboard.rs + client.rs: UI state machine over HTTP     │
//! │  - main.rs + cli/: the `querypro` binary                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (path ids → UUIDs)                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, then one store operation                     │
//! │  - Returns `CmdResult`, never writes to a terminal          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, email uniqueness lives here             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Keeping the dashboard honest
//!
//! The dashboard holds a copy of the enquiry list. After every create, update or delete
//! it refetches the list from the service instead of patching its copy, so what the
//! administrator sees is always what the store holds.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Enquiry`, `EnquiryFields`, `NewEnquiry`
//! - [`validation`]: Field rules shared by the service and the dashboard
//! - [`search`]: Free-text filtering over a fetched list
//! - [`wire`]: JSON bodies of the `/api/enquiry` endpoints
//! - [`server`]: HTTP routes, CORS and request logging
//! - [`client`]: HTTP client for the five endpoints
//! - [`dashboard`]: Form, table and notification state
//! - [`config`]: Configuration file and environment overrides
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod model;
pub mod search;
pub mod server;
pub mod store;
pub mod validation;
pub mod wire;
