//! Abstract Syntax Tree for the Regimen DSL.
//!
//! A [`Plan`] is an ordered list of named [`Definition`]s. Each definition
//! holds one [`Item`]: a weighted choice, a sequence, or an alias.
//!
//! Names are stored verbatim as lexed, which means they may carry trailing
//! spaces. Accessors such as [`Definition::name`] return the trimmed form
//! that resolution and printing use.

use std::fmt;

use crate::span::Span;

/// A parsed plan: every definition in declaration order.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Plan {
    /// Definitions in declaration order. The first is the default root.
    pub definitions: Vec<Definition>,
}

impl Plan {
    /// Creates a plan from definitions.
    #[must_use]
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }

    /// Returns the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if the plan has no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Returns the default root (the first definition).
    #[must_use]
    pub fn root(&self) -> Option<&Definition> {
        self.definitions.first()
    }

    /// Returns the definition at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Definition> {
        self.definitions.get(index)
    }

    /// Looks up a definition by name.
    ///
    /// Both sides are trimmed before comparison. When names repeat, the
    /// first declaration wins.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Definition> {
        let name = name.trim();
        self.definitions.iter().find(|d| d.name() == name)
    }

    /// Returns the trimmed names of all definitions, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(Definition::name)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for definition in &self.definitions {
            writeln!(f, "{definition}")?;
        }
        Ok(())
    }
}

/// A named, reusable item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Definition {
    /// Name as written in the source.
    pub name: String,
    /// The item this name stands for.
    pub item: Item,
    /// Source span from the name to the end of the item.
    pub span: Span,
}

impl Definition {
    /// Creates a definition.
    #[must_use]
    pub fn new(name: impl Into<String>, item: Item, span: Span) -> Self {
        Self {
            name: name.into(),
            item,
            span,
        }
    }

    /// Returns the trimmed name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.trim()
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.item)
    }
}

/// The unit of resolution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Item {
    /// Weighted choice like `{ run : 2 | swim : 1 }`
    Choice(Vec<Weight>, Span),
    /// Ordered group like `[ (lap), (rest) ]`
    Sequence(Vec<Item>, Span),
    /// Reference or literal leaf like `(warmup)`
    Alias(String, Span),
}

impl Item {
    /// Returns the source span of this item.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Choice(_, s) | Self::Sequence(_, s) | Self::Alias(_, s) => *s,
        }
    }

    /// Returns true if this is a choice.
    #[must_use]
    pub const fn is_choice(&self) -> bool {
        matches!(self, Self::Choice(_, _))
    }

    /// Returns true if this is a sequence.
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_, _))
    }

    /// Returns true if this is an alias.
    #[must_use]
    pub const fn is_alias(&self) -> bool {
        matches!(self, Self::Alias(_, _))
    }

    /// Returns the weights of a choice, or None if not a choice.
    #[must_use]
    pub fn as_choice(&self) -> Option<&[Weight]> {
        match self {
            Self::Choice(weights, _) => Some(weights),
            _ => None,
        }
    }

    /// Returns the items of a sequence, or None if not a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Item]> {
        match self {
            Self::Sequence(items, _) => Some(items),
            _ => None,
        }
    }

    /// Returns the trimmed alias name, or None if not an alias.
    #[must_use]
    pub fn as_alias(&self) -> Option<&str> {
        match self {
            Self::Alias(name, _) => Some(name.trim()),
            _ => None,
        }
    }

    /// A human-readable name for this item kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Choice(_, _) => "choice",
            Self::Sequence(_, _) => "sequence",
            Self::Alias(_, _) => "alias",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Choice(weights, _) => {
                f.write_str("{ ")?;
                for (i, weight) in weights.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{weight}")?;
                }
                f.write_str(" }")
            }
            Self::Sequence(items, _) => {
                f.write_str("[ ")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(" ]")
            }
            Self::Alias(name, _) => write!(f, "({})", name.trim()),
        }
    }
}

/// A `name : value` option inside a choice.
///
/// The value stays raw text; it is only read as a number when the choice
/// is sampled.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Weight {
    /// Option name as written.
    pub name: String,
    /// Weight literal as written.
    pub value: String,
    /// Source span of the whole option.
    pub span: Span,
}

impl Weight {
    /// Creates a weight.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            span,
        }
    }

    /// Returns the trimmed option name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.trim()
    }

    /// Returns the trimmed weight literal.
    #[must_use]
    pub fn value(&self) -> &str {
        self.value.trim()
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.name(), self.value())
    }
}

/// Helper constructors for plan nodes with default spans (for testing).
impl Item {
    /// Creates a choice with default span.
    #[cfg(test)]
    pub fn choice(weights: &[(&str, &str)]) -> Self {
        Self::Choice(
            weights
                .iter()
                .map(|(name, value)| Weight::new(*name, *value, Span::default()))
                .collect(),
            Span::default(),
        )
    }

    /// Creates a sequence with default span.
    #[cfg(test)]
    pub fn sequence(items: Vec<Item>) -> Self {
        Self::Sequence(items, Span::default())
    }

    /// Creates an alias with default span.
    #[cfg(test)]
    pub fn alias(name: &str) -> Self {
        Self::Alias(name.to_string(), Span::default())
    }
}
