//! Wire types and pure business rules shared by the showroom front end.
//!
//! Nothing in this crate touches the browser: DTOs, the role policy
//! descriptor, date windows and form validation all live here so they can be
//! unit-tested natively.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
