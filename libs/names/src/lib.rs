//! # bunny-names
//!
//! Validated index and alias names for search cluster resources.
//!
//! ## Design Principles
//!
//! - Names are checked client-side, before any request reaches the cluster
//! - A name value can only be obtained through validation; there is no
//!   unchecked constructor
//! - Names are typed to prevent mixing index names with alias names
//! - Names support roundtrip serialization (parse → format → parse)
//!
//! ## Naming Rules
//!
//! Rules run in a fixed order and the first violated rule is reported:
//!
//! 1. not empty or whitespace only
//! 2. no uppercase letters
//! 3. none of `\ / * ? " < > | , # :`
//! 4. does not start with `-`, `_` or `+`
//! 5. is not exactly `.` or `..`
//! 6. at most 255 bytes of UTF-8
//!
//! ```
//! use bunny_names::{IndexName, NameError};
//!
//! let name = IndexName::parse("logs-2024.01")?;
//! assert_eq!(name.as_str(), "logs-2024.01");
//!
//! assert!(matches!(
//!     IndexName::parse("Logs"),
//!     Err(NameError::ContainsUppercase { .. })
//! ));
//! # Ok::<(), NameError>(())
//! ```

mod aliases;
mod error;
pub mod field_names;
mod macros;
pub mod rules;
mod types;

pub use aliases::{IndexAlias, IndexAliases};
pub use error::NameError;
pub use rules::{validate, Rule};
pub use types::*;
