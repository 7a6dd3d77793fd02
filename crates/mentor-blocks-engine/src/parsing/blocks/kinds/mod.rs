pub mod control_tag;

pub use control_tag::{ControlTag, TagMatch};
