//! # HTTP Service
//!
//! Five routes under `/api/enquiry`, one per API operation, plus `/healthz`.
//!
//! | Method | Path                      | Handler                      |
//! |--------|---------------------------|------------------------------|
//! | POST   | `/enquiryinsert`          | [`handlers::insert_enquiry`] |
//! | GET    | `/enquirylist`            | [`handlers::list_enquiries`] |
//! | DELETE | `/enquiryremove/:id`      | [`handlers::remove_enquiry`] |
//! | GET    | `/enquiryedit/:id`        | [`handlers::get_enquiry`]    |
//! | PUT    | `/enquiryupdate/:id`      | [`handlers::update_enquiry`] |
//!
//! The store sits behind one mutex. A handler runs one API call under the lock on
//! the blocking pool and releases it before the response is built, so every write
//! is on disk before the client hears about it and file I/O never stalls the
//! async workers.

use crate::api::EnquiryApi;
use crate::config::QueryProConfig;
use crate::error::{QueryError, Result};
use crate::store::fs::FileStore;
use crate::store::DataStore;
use crate::wire::{BASE_PATH, EDIT_PATH, INSERT_PATH, LIST_PATH, REMOVE_PATH, UPDATE_PATH};
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::{delete, get, post, put};
use axum::Router;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tracing::{info, warn};

pub mod error;
pub mod handlers;
pub mod middleware;

pub use error::ApiError;

/// Shared handler state: the API facade behind a mutex.
pub struct AppState<S: DataStore> {
    api: Arc<Mutex<EnquiryApi<S>>>,
}

impl<S: DataStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<S: DataStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            api: Arc::new(Mutex::new(EnquiryApi::new(store))),
        }
    }
}

impl<S: DataStore + Send + 'static> AppState<S> {
    /// Run one API call under the lock, on a blocking thread.
    pub async fn with_api<T, F>(&self, f: F) -> std::result::Result<T, ApiError>
    where
        F: FnOnce(&mut EnquiryApi<S>) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let api = Arc::clone(&self.api);
        tokio::task::spawn_blocking(move || {
            let mut api = api.lock().map_err(|_| ApiError::LockPoisoned)?;
            f(&mut api).map_err(ApiError::from)
        })
        .await
        .map_err(|err| ApiError::from(QueryError::Store(format!("store task failed: {err}"))))?
    }
}

fn enquiry_routes<S: DataStore + Send + 'static>() -> Router<AppState<S>> {
    Router::new()
        .route(INSERT_PATH, post(handlers::insert_enquiry::<S>))
        .route(LIST_PATH, get(handlers::list_enquiries::<S>))
        .route(
            &format!("{REMOVE_PATH}/:id"),
            delete(handlers::remove_enquiry::<S>),
        )
        .route(
            &format!("{EDIT_PATH}/:id"),
            get(handlers::get_enquiry::<S>),
        )
        .route(
            &format!("{UPDATE_PATH}/:id"),
            put(handlers::update_enquiry::<S>),
        )
}

pub fn build_router<S: DataStore + Send + 'static>(
    state: AppState<S>,
    config: &QueryProConfig,
) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .nest(BASE_PATH, enquiry_routes::<S>())
        .layer(from_fn(middleware::cors))
        .layer(from_fn(middleware::log_requests))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .with_state(state)
}

/// Run the service with a file-backed store until SIGINT/SIGTERM.
pub async fn serve(config: &QueryProConfig) -> Result<()> {
    let state = AppState::new(FileStore::new(&config.data_dir));
    let app = build_router(state, config);

    let listener = TcpListener::bind(config.bind.as_str()).await?;
    info!(
        bind = %config.bind,
        data_dir = %config.data_dir.display(),
        "querypro listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;
    info!("querypro stopped");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
                return;
            }
            Err(err) => warn!(error = %err, "cannot listen for SIGTERM"),
        }
    }
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "cannot listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::wire::ListResponse;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    #[tokio::test]
    async fn waiting_on_the_store_lock_does_not_block_other_requests() {
        let state = AppState::new(InMemoryStore::new());
        let app = build_router(state.clone(), &QueryProConfig::default());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Hold the store lock from a plain thread until told to let go.
        let (locked_tx, locked_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let api = Arc::clone(&state.api);
        let holder = thread::spawn(move || {
            let _guard = api.lock().unwrap();
            locked_tx.send(()).unwrap();
            release_rx.recv().ok();
        });
        locked_rx.recv().unwrap();

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        let list_url = format!("{base}{BASE_PATH}{LIST_PATH}");
        let pending_list = tokio::spawn({
            let http = http.clone();
            async move { http.get(list_url).send().await }
        });
        tokio::time::sleep(Duration::from_millis(50)).await;

        let health = http.get(format!("{base}/healthz")).send().await.unwrap();
        assert_eq!(health.status(), 200);
        assert!(!pending_list.is_finished());

        release_tx.send(()).unwrap();
        holder.join().unwrap();
        let list = pending_list.await.unwrap().unwrap();
        assert_eq!(list.status(), 200);
        let body: ListResponse = list.json().await.unwrap();
        assert!(body.enquiry.is_empty());
    }
}
