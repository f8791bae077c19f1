//! Standard combinator tokens.
//!
//! [`SelectorBuilder::combine`](crate::SelectorBuilder::combine) accepts any
//! token; these name the ones CSS defines.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// `Display` gives the token; `FromStr` also accepts the lowercase name
/// (`"child"`, `"next-sibling"`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    #[strum(to_string = " ", serialize = "descendant")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    #[strum(to_string = ">", serialize = "child")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    #[strum(to_string = "+", serialize = "next-sibling")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    #[strum(to_string = "~", serialize = "subsequent-sibling")]
    SubsequentSibling,

    /// [§ 16.5 Column combinator](https://www.w3.org/TR/selectors-4/#the-column-combinator)
    /// "The column combinator, which consists of two pipes (||) represents the
    /// relationship of a column element to a cell element belonging to the column."
    #[strum(to_string = "||", serialize = "column")]
    Column,
}

impl Combinator {
    /// The token written between two selectors.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Look up a combinator by its exact token. Names like `"child"` are
    /// not tokens and return `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::iter().find(|combinator| combinator.as_str() == token)
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
