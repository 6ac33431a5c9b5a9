//! # csel - CSS selector builder
//!
//! Builds compound CSS selectors from chained calls and rejects chains that
//! break the compound selector grammar.
//!
//! ## Quick Start
//!
//! ```rust
//! use csel::{combine, element, id, Combinator};
//!
//! let link = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.to_string(), r#"a[href$=".png"]:focus"#);
//!
//! let main = id("main").class("container")?.class("editable")?;
//! assert_eq!(main.to_string(), "#main.container.editable");
//!
//! let pair = combine(&element("div").id("main")?, Combinator::NextSibling, &element("table").id("data")?);
//! assert_eq!(pair.to_string(), "div#main + table#data");
//! # Ok::<(), csel::SelectorError>(())
//! ```
//!
//! ## Grammar Order
//!
//! Parts must be added in this order, and render in this order:
//!
//! 1. Element: `div` (once)
//! 2. ID: `#main` (once)
//! 3. Classes: `.primary` (any number)
//! 4. Attributes: `[type=text]` (any number)
//! 5. Pseudo-classes: `:hover` (any number)
//! 6. Pseudo-element: `::before` (once)
//!
//! Going backwards yields [`SelectorError::Order`]; repeating a once-only
//! part yields [`SelectorError::Duplicate`].
//!
//! ## Not Implemented
//!
//! - Parsing selector text
//! - Matching selectors against a document
//! - Specificity
//!
//! ## Modules
//!
//! - [`builder`]: Entry points that start a fresh selector
//! - [`selector`]: The [`Selector`] accumulator and [`CombinedSelector`]
//! - [`part`]: Part categories and their ordering rules
//! - [`error`]: Error types for rejected parts

pub mod builder;
pub mod error;
pub mod part;
pub mod selector;

pub use builder::{
    SelectorBuilder, attr, class, combine, element, id, pseudo_class, pseudo_element, stringify,
};
pub use error::{Result, SelectorError};
pub use part::PartKind;
pub use selector::{Combinator, CombinedSelector, Selector, Stringify};
