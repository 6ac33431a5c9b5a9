use std::fmt;

use crate::error::{Result, SelectorError};

/// The categories of simple selector that make up a compound selector,
/// in the order they must appear.
///
/// Variants are declared in grammar order, so the derived `Ord` matches
/// [`rank`](Self::rank).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartKind {
    /// Type selector: `div`
    Element,
    /// `#main`
    Id,
    /// `.active`
    Class,
    /// `[href$=".png"]`
    Attribute,
    /// `:focus`
    PseudoClass,
    /// `::before`
    PseudoElement,
}

impl PartKind {
    pub const ALL: [PartKind; 6] = [
        PartKind::Element,
        PartKind::Id,
        PartKind::Class,
        PartKind::Attribute,
        PartKind::PseudoClass,
        PartKind::PseudoElement,
    ];

    /// Grammar position, starting at 1. Rank 0 is reserved for "nothing added yet".
    pub fn rank(self) -> u8 {
        match self {
            PartKind::Element => 1,
            PartKind::Id => 2,
            PartKind::Class => 3,
            PartKind::Attribute => 4,
            PartKind::PseudoClass => 5,
            PartKind::PseudoElement => 6,
        }
    }

    /// Whether a compound selector may contain this part more than once.
    pub fn is_repeatable(self) -> bool {
        matches!(
            self,
            PartKind::Class | PartKind::Attribute | PartKind::PseudoClass
        )
    }

    /// Checks that `self` may follow `last`, the most recently added part.
    pub(crate) fn check_after(self, last: Option<PartKind>) -> Result<()> {
        let Some(last) = last else {
            return Ok(());
        };

        if self < last {
            return Err(SelectorError::Order {
                part: self,
                after: last,
            });
        }
        if self == last && !self.is_repeatable() {
            return Err(SelectorError::Duplicate(self));
        }
        Ok(())
    }

    /// Wraps a raw token with this part's delimiters.
    pub(crate) fn render(self, value: &str) -> String {
        match self {
            PartKind::Element => value.to_string(),
            PartKind::Id => format!("#{value}"),
            PartKind::Class => format!(".{value}"),
            PartKind::Attribute => format!("[{value}]"),
            PartKind::PseudoClass => format!(":{value}"),
            PartKind::PseudoElement => format!("::{value}"),
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartKind::Element => "element",
            PartKind::Id => "id",
            PartKind::Class => "class",
            PartKind::Attribute => "attribute",
            PartKind::PseudoClass => "pseudo-class",
            PartKind::PseudoElement => "pseudo-element",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_follows_declaration_order() {
        let ranks: Vec<u8> = PartKind::ALL.iter().map(|k| k.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);

        for pair in PartKind::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_anything_may_come_first() {
        for kind in PartKind::ALL {
            assert_eq!(kind.check_after(None), Ok(()));
        }
    }

    #[test]
    fn test_lower_rank_is_order_error() {
        assert_eq!(
            PartKind::Id.check_after(Some(PartKind::PseudoClass)),
            Err(SelectorError::Order {
                part: PartKind::Id,
                after: PartKind::PseudoClass,
            })
        );
    }

    #[test]
    fn test_same_rank_depends_on_repeatability() {
        for kind in PartKind::ALL {
            let result = kind.check_after(Some(kind));
            if kind.is_repeatable() {
                assert_eq!(result, Ok(()), "{kind} should repeat");
            } else {
                assert_eq!(result, Err(SelectorError::Duplicate(kind)));
            }
        }
    }

    #[test]
    fn test_render_delimiters() {
        assert_eq!(PartKind::Element.render("a"), "a");
        assert_eq!(PartKind::Id.render("main"), "#main");
        assert_eq!(PartKind::Class.render("big"), ".big");
        assert_eq!(PartKind::Attribute.render("href"), "[href]");
        assert_eq!(PartKind::PseudoClass.render("hover"), ":hover");
        assert_eq!(PartKind::PseudoElement.render("after"), "::after");
    }
}
