//! Chainable CSS selector builder.
//!
//! Re-exports the [`csel`] API and adds a file logger for tracing rejected
//! parts while debugging.
//!
//! ```rust
//! use selector_builder::{combine, element};
//!
//! let row = combine(&element("tr").class("odd")?, ">", &element("td"));
//! assert_eq!(row.to_string(), "tr.odd > td");
//! # Ok::<(), selector_builder::SelectorError>(())
//! ```

mod log_init;

pub use csel::{
    Combinator, CombinedSelector, PartKind, Result, Selector, SelectorBuilder, SelectorError,
    Stringify, attr, class, combine, element, id, pseudo_class, pseudo_element, stringify,
};
pub use log_init::init_logger;

// Re-export the log crate so users can use selector_builder::log::info!, etc.
pub use log;
