//! Utility functions for rule implementations.

pub mod blocks;
pub mod case;
pub mod text;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use blocks::{role_of, walk, BlockIssue, BlockKind, BlockRole, BlockWalk};
#[doc(inline)]
pub use case::{dominant_style, CaseStyle};
#[doc(inline)]
pub use text::{display_width, has_trailing_whitespace, leading_whitespace};
