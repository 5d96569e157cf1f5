//! Testing utilities for the hospital query API
//!
//! - Fixtures producing realistic user and patient rows
//! - Builders for rows with specific field values
//! - In-memory repositories that record calls and can be told to fail
//!
//! # Examples
//!
//! ```
//! use hospital_query_testing::{builders::*, mocks::MockUserRepository};
//!
//! let user = UserRecordBuilder::new().with_cpf("12345678900").build();
//! let repo = MockUserRepository::with_users(vec![user]);
//! assert_eq!(repo.call_count(), 0);
//! ```

pub mod builders;
pub mod fixtures;
pub mod mocks;

pub use builders::*;
pub use fixtures::*;
pub use mocks::*;
