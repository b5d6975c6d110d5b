//! Forms read from vocabulary source.

use crate::span::Span;

/// A form read from vocabulary source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Form {
    /// `nil`
    Nil(Span),
    /// `true` or `false`
    Bool(bool, Span),
    /// Integer literal like `3`
    Int(i64, Span),
    /// Symbol like `buy` or `table:`
    Symbol(String, Span),
    /// Keyword like `:pos` (stored without the colon)
    Keyword(String, Span),
    /// List form like `(the :pos DT)`
    List(Vec<Form>, Span),
    /// Vector form like `[NP NP_PP]`
    Vector(Vec<Form>, Span),
    /// Set form like `#{1 2}`
    Set(Vec<Form>, Span),
}

impl Form {
    /// Returns the source span of this form.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Nil(s)
            | Self::Bool(_, s)
            | Self::Int(_, s)
            | Self::Symbol(_, s)
            | Self::Keyword(_, s)
            | Self::List(_, s)
            | Self::Vector(_, s)
            | Self::Set(_, s) => *s,
        }
    }

    /// Returns the symbol name if this is a symbol.
    #[must_use]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name, _) => Some(name),
            _ => None,
        }
    }

    /// Returns the keyword name if this is a keyword.
    #[must_use]
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Self::Keyword(name, _) => Some(name),
            _ => None,
        }
    }

    /// Returns the elements if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Form]> {
        match self {
            Self::List(elements, _) => Some(elements),
            _ => None,
        }
    }

    /// Returns a human-readable name for this form's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil(_) => "nil",
            Self::Bool(_, _) => "bool",
            Self::Int(_, _) => "int",
            Self::Symbol(_, _) => "symbol",
            Self::Keyword(_, _) => "keyword",
            Self::List(_, _) => "list",
            Self::Vector(_, _) => "vector",
            Self::Set(_, _) => "set",
        }
    }
}
