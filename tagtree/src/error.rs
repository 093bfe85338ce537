//! Structural errors reported while building a document.

use facet::Facet;

use crate::schema::ElementKind;

/// Errors that can occur while building nodes and documents.
///
/// Every variant is detected at construction time; serialization never fails.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum BuildError {
    /// <{parent}> cannot contain <{child}> (child {index})
    InvalidChildCategory {
        parent: ElementKind,
        index: usize,
        child: ElementKind,
    },

    /// <{kind}> cannot carry text content
    UnsupportedTextContent { kind: ElementKind },

    /// <{kind}> cannot carry attributes
    UnsupportedAttributes { kind: ElementKind },

    /// <{kind}> is self-closing and cannot have children or text content
    SelfClosingWithContent { kind: ElementKind },

    /// <html> is the document root and cannot be built as a node
    DocumentRoot,

    /// the <{slot}> slot of a document cannot hold <{found}>
    MisplacedSlot {
        slot: ElementKind,
        found: ElementKind,
    },

    /// unknown element <{name}>
    UnknownElement { name: String },

    /// heading level {level} is outside 1..=6
    InvalidHeadingLevel { level: u8 },
}

impl BuildError {
    /// The element kind the error is about, when there is one.
    pub fn kind(&self) -> Option<ElementKind> {
        match self {
            BuildError::InvalidChildCategory { parent, .. } => Some(*parent),
            BuildError::UnsupportedTextContent { kind }
            | BuildError::UnsupportedAttributes { kind }
            | BuildError::SelfClosingWithContent { kind } => Some(*kind),
            BuildError::DocumentRoot => Some(ElementKind::Html),
            BuildError::MisplacedSlot { found, .. } => Some(*found),
            BuildError::UnknownElement { .. } | BuildError::InvalidHeadingLevel { .. } => None,
        }
    }
}
