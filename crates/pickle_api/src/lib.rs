//! # pickle_api - REST client for the pickleball partner finder
//!
//! [`ApiClient`] talks to the external API over HTTP/JSON. [`SessionController`]
//! wraps any [`PickleApi`] and records each call's lifecycle in a
//! [`pickle_core::SessionStore`].
//!
//! ```no_run
//! use pickle_api::{ApiClient, SessionController};
//! use pickle_core::{LoginRequest, SessionStore};
//!
//! # async fn sign_in() -> Result<(), pickle_api::ApiError> {
//! let store = SessionStore::new();
//! let controller = SessionController::new(ApiClient::from_env()?, store.clone());
//!
//! let phase = controller.login(&LoginRequest::new("kevin@example.com", "secret")).await;
//! if let Some(reason) = phase.error() {
//!     eprintln!("login failed: {}", reason);
//! }
//! assert_eq!(store.snapshot().status, controller.state().status);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod controller;
pub mod error;
pub mod service;

pub use client::ApiClient;
pub use controller::SessionController;
pub use error::ApiError;
pub use service::PickleApi;
