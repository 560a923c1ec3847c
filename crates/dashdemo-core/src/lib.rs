//! # dashdemo-core - Core Domain Types
//!
//! Foundation crate for dashdemo. Provides the dashboard data model, the
//! infrastructure error type and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`DashboardData`] - Aggregate root delivered by one successful fetch
//! - [`User`], [`Stats`], [`Activity`], [`Analytics`], [`Metric`], [`Report`], [`Task`]
//! - [`ActivityKind`], [`ReportStatus`], [`Priority`] - Enum-keyed categories
//! - [`SessionState`] - Logged in / logged out
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Infrastructure error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use dashdemo_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all dashdemo crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{
    Activity, ActivityKind, Analytics, DashboardData, InvariantViolation, Metric, Priority,
    Report, ReportStatus, SessionState, Stats, Task, User,
};
