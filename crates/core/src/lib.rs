//! Hostel domain logic with zero internal dependencies.
//!
//! Everything here is pure: no database, no HTTP. The `db` and `api` crates
//! build on these types and helpers.

pub mod attendance;
pub mod calendar;
pub mod error;
pub mod naming;
pub mod pagination;
pub mod types;
