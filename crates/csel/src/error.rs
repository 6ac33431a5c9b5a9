//! Error types for selector construction.

use thiserror::Error;

use crate::part::PartKind;

/// Errors that can occur while adding parts to a [`Selector`](crate::Selector).
///
/// Both variants are raised before the selector is touched, so a rejected
/// call never leaves a partially applied part behind.
///
/// # Examples
///
/// ```rust
/// use csel::{PartKind, SelectorError, class};
///
/// let err = class("container").element("div").unwrap_err();
/// assert_eq!(
///     err,
///     SelectorError::Order { part: PartKind::Element, after: PartKind::Class }
/// );
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// A part was added after a part that must come later in a compound selector.
    #[error("cannot add {part} after {after}")]
    Order {
        /// The part that was rejected.
        part: PartKind,
        /// The most recently added part.
        after: PartKind,
    },

    /// A single-occurrence part (element, id, pseudo-element) was given twice.
    #[error("{0} may only be specified once")]
    Duplicate(PartKind),
}

pub type Result<T> = std::result::Result<T, SelectorError>;
