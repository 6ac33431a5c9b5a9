use std::fmt;

use crate::error::Result;
use crate::part::PartKind;

/// Anything that can be rendered to selector text.
pub trait Stringify {
    fn stringify(&self) -> String;
}

impl<T: Stringify + ?Sized> Stringify for &T {
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

/// A compound selector under construction (e.g. `a#main.big[href]:hover::after`).
///
/// Parts must be added in grammar order: element, id, classes, attributes,
/// pseudo-classes, pseudo-element. Element, id and pseudo-element may each
/// appear once; the other categories may repeat and keep insertion order.
///
/// Every adder consumes the selector and hands it back on success, so chains
/// read left to right and propagate errors with `?`:
///
/// ```rust
/// use csel::element;
///
/// let sel = element("a").id("main")?.class("big")?;
/// assert_eq!(sel.to_string(), "a#main.big");
/// # Ok::<(), csel::SelectorError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    last: Option<PartKind>,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a selector whose first part is `kind`. A fresh selector accepts
    /// any part, so this cannot fail.
    pub(crate) fn starting_with(kind: PartKind, value: String) -> Self {
        let mut selector = Self::new();
        selector.store(kind, value);
        selector
    }

    pub fn element(self, value: impl Into<String>) -> Result<Self> {
        self.with(PartKind::Element, value.into())
    }

    pub fn id(self, value: impl Into<String>) -> Result<Self> {
        self.with(PartKind::Id, value.into())
    }

    pub fn class(self, value: impl Into<String>) -> Result<Self> {
        self.with(PartKind::Class, value.into())
    }

    /// Adds an attribute selector. `value` is the full expression between the
    /// brackets (`href$=".png"`) and is not validated.
    pub fn attr(self, value: impl Into<String>) -> Result<Self> {
        self.with(PartKind::Attribute, value.into())
    }

    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self> {
        self.with(PartKind::PseudoClass, value.into())
    }

    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self> {
        self.with(PartKind::PseudoElement, value.into())
    }

    /// Adds a part in place. On error the selector is left unchanged.
    pub fn push(&mut self, kind: PartKind, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        if let Err(err) = kind.check_after(self.last) {
            log::debug!("rejected {kind} {value:?} for selector {:?}: {err}", self.stringify());
            return Err(err);
        }
        self.store(kind, value);
        Ok(())
    }

    fn with(mut self, kind: PartKind, value: String) -> Result<Self> {
        self.push(kind, value)?;
        Ok(self)
    }

    fn store(&mut self, kind: PartKind, value: String) {
        log::trace!("adding {kind} {value:?}");
        match kind {
            PartKind::Element => self.element = Some(value),
            PartKind::Id => self.id = Some(value),
            PartKind::Class => self.classes.push(value),
            PartKind::Attribute => self.attributes.push(value),
            PartKind::PseudoClass => self.pseudo_classes.push(value),
            PartKind::PseudoElement => self.pseudo_element = Some(value),
        }
        self.last = Some(kind);
    }

    pub fn element_name(&self) -> Option<&str> {
        self.element.as_deref()
    }

    pub fn id_name(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn pseudo_classes(&self) -> &[String] {
        &self.pseudo_classes
    }

    pub fn pseudo_element_name(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// Rank of the most recently added part, or 0 for an empty selector.
    pub fn last_rank(&self) -> u8 {
        self.last.map_or(0, PartKind::rank)
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }
}

impl Stringify for Selector {
    fn stringify(&self) -> String {
        let mut out = String::new();
        render_into(&mut out, PartKind::Element, self.element.as_slice());
        render_into(&mut out, PartKind::Id, self.id.as_slice());
        render_into(&mut out, PartKind::Class, &self.classes);
        render_into(&mut out, PartKind::Attribute, &self.attributes);
        render_into(&mut out, PartKind::PseudoClass, &self.pseudo_classes);
        render_into(&mut out, PartKind::PseudoElement, self.pseudo_element.as_slice());
        out
    }
}

fn render_into(out: &mut String, kind: PartKind, values: &[String]) {
    for value in values {
        out.push_str(&kind.render(value));
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}

/// CSS combinators, for callers who prefer a typed token over a raw string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    /// Whitespace. Rendered verbatim between the surrounding spaces, so
    /// `div` and `p` combine to `div   p`.
    Descendant,
    Child,             // >
    NextSibling,       // +
    SubsequentSibling, // ~
}

impl Combinator {
    pub fn token(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::NextSibling => "+",
            Combinator::SubsequentSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Two selectors joined by a combinator (e.g. `div#main + table#data`).
///
/// The text is fixed at construction; no further parts can be added.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CombinedSelector {
    text: String,
}

impl CombinedSelector {
    pub fn new(left: &impl Stringify, combinator: impl fmt::Display, right: &impl Stringify) -> Self {
        let text = format!("{} {} {}", left.stringify(), combinator, right.stringify());
        log::trace!("combined selector {text:?}");
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Stringify for CombinedSelector {
    fn stringify(&self) -> String {
        self.text.clone()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
