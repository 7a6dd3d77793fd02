//! # Block Segmenter
//!
//! Splits a mentor turn into typed blocks in two passes.
//!
//! ## Passes
//!
//! 1. **Tag pass** (`classify` + `builder`): each line is classified on its
//!    own (is it a recognized control tag?) and a `SegmentBuilder` walks the
//!    line stream with two states, `ScanningText` before the first tag and
//!    `InBlock` after one, emitting a `RawBlock` per region.
//!
//! 2. **Resolve pass** (`resolve`): each region's content goes through the
//!    table detector, whose `InTableCandidate` state is the third scanner
//!    state, or through the concept-table parser for `CONCEPT_TABLE`.
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `BlockType`, `Payload`, `RawBlock`, `ParseOptions`
//! - **`kinds`**: `ControlTag`, the owner of tag syntax
//! - **`classify`**: `TagLineClassifier` produces a `LineClass` per line
//! - **`builder`**: `SegmentBuilder` state machine for the tag pass
//! - **`resolve`**: region expansion into `Block`s
//!
//! ## Key Invariants
//!
//! - Tags are line-anchored and drawn from a closed vocabulary; anything else
//!   in brackets is text
//! - Blocks come out in source order and never overlap
//! - Empty regions produce no block

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod resolve;
pub mod types;

pub use builder::SegmentBuilder;
pub use classify::{LineClass, TagLineClassifier};
pub use kinds::{ControlTag, TagMatch};
pub use resolve::resolve;
pub use types::{
    Block, BlockType, ConceptTableMode, ParseOptions, Payload, RawBlock, TextPayload,
    UnknownBlockType,
};
