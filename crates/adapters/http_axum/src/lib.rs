//! # devicedesk-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** under `/api/v1` (health, user devices, device
//!   status, software requests)
//! - Serve a landing page at `/`, as plain text or as a small HTML page
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `devicedesk-app` (for port traits and services) and
//! `devicedesk-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod landing;
pub mod router;
pub mod state;
