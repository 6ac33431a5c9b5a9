//! Entry points that start a new selector chain.
//!
//! Each function here builds a brand-new [`Selector`], so two chains never
//! share state:
//!
//! ```rust
//! use csel::element;
//!
//! let link = element("a");
//! let focused = link.clone().pseudo_class("focus")?;
//! assert_eq!(link.to_string(), "a");
//! assert_eq!(focused.to_string(), "a:focus");
//! # Ok::<(), csel::SelectorError>(())
//! ```

use std::fmt;

use crate::part::PartKind;
use crate::selector::{CombinedSelector, Selector, Stringify};

pub fn element(value: impl Into<String>) -> Selector {
    Selector::starting_with(PartKind::Element, value.into())
}

pub fn id(value: impl Into<String>) -> Selector {
    Selector::starting_with(PartKind::Id, value.into())
}

pub fn class(value: impl Into<String>) -> Selector {
    Selector::starting_with(PartKind::Class, value.into())
}

pub fn attr(value: impl Into<String>) -> Selector {
    Selector::starting_with(PartKind::Attribute, value.into())
}

pub fn pseudo_class(value: impl Into<String>) -> Selector {
    Selector::starting_with(PartKind::PseudoClass, value.into())
}

pub fn pseudo_element(value: impl Into<String>) -> Selector {
    Selector::starting_with(PartKind::PseudoElement, value.into())
}

/// Joins two selectors as `left combinator right`. The combinator is used
/// verbatim; pass a [`Combinator`](crate::Combinator) or any string.
pub fn combine(
    left: &impl Stringify,
    combinator: impl fmt::Display,
    right: &impl Stringify,
) -> CombinedSelector {
    CombinedSelector::new(left, combinator, right)
}

pub fn stringify(value: &impl Stringify) -> String {
    value.stringify()
}

/// Stateless dispatcher over the entry points above, for callers that want
/// to pass the builder around as a value.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectorBuilder;

impl SelectorBuilder {
    pub fn element(&self, value: impl Into<String>) -> Selector {
        element(value)
    }

    pub fn id(&self, value: impl Into<String>) -> Selector {
        id(value)
    }

    pub fn class(&self, value: impl Into<String>) -> Selector {
        class(value)
    }

    pub fn attr(&self, value: impl Into<String>) -> Selector {
        attr(value)
    }

    pub fn pseudo_class(&self, value: impl Into<String>) -> Selector {
        pseudo_class(value)
    }

    pub fn pseudo_element(&self, value: impl Into<String>) -> Selector {
        pseudo_element(value)
    }

    pub fn combine(
        &self,
        left: &impl Stringify,
        combinator: impl fmt::Display,
        right: &impl Stringify,
    ) -> CombinedSelector {
        combine(left, combinator, right)
    }

    pub fn stringify(&self, value: &impl Stringify) -> String {
        stringify(value)
    }
}
