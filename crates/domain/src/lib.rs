//! Hospital Query Domain Types
//!
//! Row shapes and value objects shared by every layer of the hospital query
//! API. The database owns the lifecycle of every record here; this crate only
//! describes what a row looks like once it has been read.
//!
//! ## Modules
//!
//! - **user**: active-user rows and the allow-list of projectable user fields
//! - **patient**: interned-patient rows
//! - **bed**: validated bed codes used to narrow the patient query
//! - **errors**: client input errors with their response messages
//!
//! ## Usage
//!
//! ```rust
//! use hospital_query_domain::{BedNumber, UserField};
//!
//! let bed = BedNumber::parse(Some("12")).unwrap();
//! assert_eq!(bed.get(), 12);
//!
//! let field: UserField = "nm_usuario".parse().unwrap();
//! assert_eq!(field.column(), "nm_usuario");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bed;
pub mod errors;
pub mod patient;
pub mod user;

pub use bed::BedNumber;
pub use errors::{DomainError, DomainResult};
pub use patient::PatientRecord;
pub use user::{UserField, UserRecord};
