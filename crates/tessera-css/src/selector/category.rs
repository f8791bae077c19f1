//! The six kinds of selector part and their required order.

use strum_macros::{Display, EnumString, IntoStaticStr};

/// [§ 3.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#structure)
///
/// The kind of a single selector fragment. Variants are declared in the
/// order a compound selector must list them, so the derived `Ord` is the
/// required order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, IntoStaticStr,
)]
#[repr(u8)]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Written verbatim: `div`. At most once per selector.
    #[strum(to_string = "element")]
    Element = 1,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Written as `#value`. At most once per selector.
    #[strum(to_string = "id")]
    Id = 2,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Written as `.value`.
    #[strum(to_string = "class")]
    Class = 3,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Written as `[value]`; the value is not inspected.
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute = 4,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Written as `:value`.
    #[strum(to_string = "pseudo-class", serialize = "pseudoClass")]
    PseudoClass = 5,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Written as `::value`. At most once per selector.
    #[strum(to_string = "pseudo-element", serialize = "pseudoElement")]
    PseudoElement = 6,
}

impl Category {
    /// Every category, in required order.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Position in the required order, starting at 1 for `Element`.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether this category may appear at most once in a selector.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Name used in diagnostics (`"pseudo-class"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Format `value` as a fragment of this category (`.foo`, `[href]`, `::before`).
    #[must_use]
    pub fn format(self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        self.write_fragment(&mut out, value);
        out
    }

    pub(crate) fn write_fragment(self, out: &mut String, value: &str) {
        match self {
            Self::Element => out.push_str(value),
            Self::Id => {
                out.push('#');
                out.push_str(value);
            }
            Self::Class => {
                out.push('.');
                out.push_str(value);
            }
            Self::Attribute => {
                out.push('[');
                out.push_str(value);
                out.push(']');
            }
            Self::PseudoClass => {
                out.push(':');
                out.push_str(value);
            }
            Self::PseudoElement => {
                out.push_str("::");
                out.push_str(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_declaration_order() {
        let codes: Vec<u8> = Category::ALL.into_iter().map(Category::code).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6]);
        assert!(Category::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_singletons() {
        let singletons: Vec<Category> = Category::ALL
            .into_iter()
            .filter(|c| c.is_singleton())
            .collect();
        assert_eq!(
            singletons,
            vec![Category::Element, Category::Id, Category::PseudoElement]
        );
    }

    #[test]
    fn test_parse_accepts_aliases() {
        assert_eq!("attr".parse::<Category>(), Ok(Category::Attribute));
        assert_eq!("attribute".parse::<Category>(), Ok(Category::Attribute));
        assert_eq!("pseudoClass".parse::<Category>(), Ok(Category::PseudoClass));
        assert_eq!(
            "pseudo-element".parse::<Category>(),
            Ok(Category::PseudoElement)
        );
        assert!("universal".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_uses_kebab_names() {
        assert_eq!(Category::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(Category::Attribute.as_str(), "attribute");
    }
}
