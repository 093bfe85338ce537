//! Content categories and the static element table.
//!
//! Every element kind in the vocabulary has one [`ElementSpec`] describing
//! which category it satisfies when used as a child, which category its own
//! children must satisfy, and what kind of content it may carry. The table is
//! fixed at compile time and never mutated.

use facet::Facet;
use std::fmt;
use std::str::FromStr;

use crate::error::BuildError;

/// Role an element kind plays when it appears as someone's child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
#[repr(u8)]
pub enum Category {
    /// May appear inside `<head>`.
    HeadMember,
    /// May appear inside `<body>` and body containers.
    BodyMember,
    /// Accepts anything; only used for the document root's slots.
    Unconstrained,
}

impl Category {
    /// Whether a child advertising `child` may be placed under a parent
    /// requiring `self`.
    pub fn admits(self, child: Option<Category>) -> bool {
        match self {
            Category::Unconstrained => true,
            required => child == Some(required),
        }
    }
}

/// The closed element vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
#[repr(u8)]
pub enum ElementKind {
    Html,
    Head,
    Body,
    Title,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Div,
    A,
    Img,
    Br,
}

/// Static description of one element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSpec {
    /// Tag name emitted in markup.
    pub name: &'static str,
    /// Category satisfied when used as a child, if any.
    pub own_category: Option<Category>,
    /// Category every child must satisfy; `None` means no element children.
    pub required_child_category: Option<Category>,
    pub is_self_closing: bool,
    pub supports_text_content: bool,
    pub supports_attributes: bool,
}

const fn root_slot(name: &'static str, children: Category) -> ElementSpec {
    ElementSpec {
        name,
        own_category: None,
        required_child_category: Some(children),
        is_self_closing: false,
        supports_text_content: false,
        supports_attributes: false,
    }
}

const fn text_container(name: &'static str, supports_attributes: bool) -> ElementSpec {
    ElementSpec {
        name,
        own_category: Some(Category::BodyMember),
        required_child_category: Some(Category::BodyMember),
        is_self_closing: false,
        supports_text_content: true,
        supports_attributes,
    }
}

const fn void(name: &'static str, supports_attributes: bool) -> ElementSpec {
    ElementSpec {
        name,
        own_category: Some(Category::BodyMember),
        required_child_category: None,
        is_self_closing: true,
        supports_text_content: false,
        supports_attributes,
    }
}

static HTML: ElementSpec = root_slot("html", Category::Unconstrained);
static HEAD: ElementSpec = root_slot("head", Category::HeadMember);
static BODY: ElementSpec = root_slot("body", Category::BodyMember);
static TITLE: ElementSpec = ElementSpec {
    name: "title",
    own_category: Some(Category::HeadMember),
    required_child_category: None,
    is_self_closing: false,
    supports_text_content: true,
    supports_attributes: false,
};
static H1: ElementSpec = text_container("h1", false);
static H2: ElementSpec = text_container("h2", false);
static H3: ElementSpec = text_container("h3", false);
static H4: ElementSpec = text_container("h4", false);
static H5: ElementSpec = text_container("h5", false);
static H6: ElementSpec = text_container("h6", false);
static P: ElementSpec = text_container("p", false);
static DIV: ElementSpec = ElementSpec {
    name: "div",
    own_category: Some(Category::BodyMember),
    required_child_category: Some(Category::BodyMember),
    is_self_closing: false,
    supports_text_content: false,
    supports_attributes: false,
};
static A: ElementSpec = text_container("a", true);
static IMG: ElementSpec = void("img", true);
static BR: ElementSpec = void("br", false);

impl ElementKind {
    /// Every kind in the vocabulary, in declaration order.
    pub const ALL: [ElementKind; 15] = [
        ElementKind::Html,
        ElementKind::Head,
        ElementKind::Body,
        ElementKind::Title,
        ElementKind::H1,
        ElementKind::H2,
        ElementKind::H3,
        ElementKind::H4,
        ElementKind::H5,
        ElementKind::H6,
        ElementKind::P,
        ElementKind::Div,
        ElementKind::A,
        ElementKind::Img,
        ElementKind::Br,
    ];

    /// Look up the static spec for this kind.
    pub fn spec(self) -> &'static ElementSpec {
        match self {
            ElementKind::Html => &HTML,
            ElementKind::Head => &HEAD,
            ElementKind::Body => &BODY,
            ElementKind::Title => &TITLE,
            ElementKind::H1 => &H1,
            ElementKind::H2 => &H2,
            ElementKind::H3 => &H3,
            ElementKind::H4 => &H4,
            ElementKind::H5 => &H5,
            ElementKind::H6 => &H6,
            ElementKind::P => &P,
            ElementKind::Div => &DIV,
            ElementKind::A => &A,
            ElementKind::Img => &IMG,
            ElementKind::Br => &BR,
        }
    }

    /// Heading kind for a level in `1..=6`.
    pub fn heading(level: u8) -> Result<Self, BuildError> {
        match level {
            1 => Ok(ElementKind::H1),
            2 => Ok(ElementKind::H2),
            3 => Ok(ElementKind::H3),
            4 => Ok(ElementKind::H4),
            5 => Ok(ElementKind::H5),
            6 => Ok(ElementKind::H6),
            _ => Err(BuildError::InvalidHeadingLevel { level }),
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn category(self) -> Option<Category> {
        self.spec().own_category
    }

    pub fn required_child_category(self) -> Option<Category> {
        self.spec().required_child_category
    }

    pub fn is_self_closing(self) -> bool {
        self.spec().is_self_closing
    }

    pub fn supports_text_content(self) -> bool {
        self.spec().supports_text_content
    }

    pub fn supports_attributes(self) -> bool {
        self.spec().supports_attributes
    }

    /// Whether `child` may appear directly under this kind.
    pub fn admits(self, child: ElementKind) -> bool {
        self.required_child_category()
            .is_some_and(|required| required.admits(child.category()))
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BuildError::UnknownElement { name: s.to_string() })
    }
}
