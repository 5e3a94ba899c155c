//! LL1 - single-character lookahead scanning
//!
//! Facade over [`ll1_core`]. A scanner holds an [`InputSource`] and a
//! [`Position`], asks non-consuming questions (`is`, `is_one_of`, ...) and
//! advances with consuming ones (`read`, `expect`, `ignore_if`,
//! `ignore_while`).
//!
//! # Architecture
//!
//! ```text
//! ll1-core/    - adapters, predicates, combinators
//! ll1-config/  - configuration data for the example client
//! ll1-cli/     - `sequential`, reads integers from a file
//! ```

pub use ll1_core::*;
