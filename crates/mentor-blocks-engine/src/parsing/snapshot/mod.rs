//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: Renders blocks to a stable text form for `insta` snapshots
//! - **`invariants`**: Runtime checks for parser correctness (spans in bounds,
//!   ordered, lossless with respect to the input)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
