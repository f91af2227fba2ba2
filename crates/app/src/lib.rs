//! # devicedesk-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceRepository` — read-only lookups of user devices and statuses
//!   - `SoftwareRequestRepository` — append & query software requests
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DeviceService` — list a user's devices, report a device's status
//!   - `SoftwareRequestService` — submit and look up software requests
//! - Orchestrate domain objects without knowing *how* storage works
//!
//! ## Dependency rule
//! Depends on `devicedesk-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
