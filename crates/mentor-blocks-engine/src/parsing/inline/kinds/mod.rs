//! # Inline Kinds
//!
//! Inline forms own their delimiters. The tokenizer walks
//! [`Emphasis::PRECEDENCE`]; it never hardcodes `*` or `_`.
//!
//! | Form      | Kind          |
//! |-----------|---------------|
//! | `*_x_*`   | bold-italic   |
//! | `*x*`     | bold          |
//! | `_x_`     | italic        |

pub mod emphasis;

pub use emphasis::Emphasis;
