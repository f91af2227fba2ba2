//! # devicedesk-domain
//!
//! Pure domain model for the devicedesk device-management API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (endpoints such as laptops and phones owned by a user)
//! - Define **Device statuses** (compliance snapshot for a device)
//! - Define **Software requests** (user-initiated installs awaiting approval)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod device_status;
pub mod software_request;
