//! Typed element definitions.
//!
//! Each element kind has its own struct, and child lists are content-model
//! enums: [`HeadContent`] for what may appear in `<head>`, [`BodyContent`]
//! for what may appear in `<body>` and the body containers. A `<title>`
//! inside a `<p>`, or a `<p>` inside `<head>`, has no representation, so such
//! documents are rejected by the compiler instead of at run time.
//!
//! ```rust
//! use tagtree::dom::{A, Body, H1, Head, Html, P, Title};
//!
//! let page = Html::new()
//!     .head(Head::new().child(Title::new("Help Me.")))
//!     .body(
//!         Body::new()
//!             .child(H1::with_text("The horror!"))
//!             .child(P::with_text("Someone has probably done this before..."))
//!             .child(A::new("href='https://example.com'").text("For science")),
//!     );
//!
//! let markup = page.to_markup();
//! assert!(markup.starts_with("<html>\n    <head>\n"));
//! ```
//!
//! Composing the wrong content does not type-check:
//!
//! ```compile_fail
//! use tagtree::dom::{P, Title};
//!
//! let p = P::new().child(Title::new("not allowed here"));
//! ```
//!
//! Body content cannot go into `<head>`:
//!
//! ```compile_fail
//! use tagtree::dom::{Head, P};
//!
//! let head = Head::new().child(P::new());
//! ```
//!
//! The document slots are not body content:
//!
//! ```compile_fail
//! use tagtree::dom::{Div, Head};
//!
//! let div = Div::new().child(Head::new());
//! ```
//!
//! Metadata cannot go into `<body>`:
//!
//! ```compile_fail
//! use tagtree::dom::{Body, Title};
//!
//! let body = Body::new().child(Title::new("x"));
//! ```
//!
//! The same parts in the right places compile:
//!
//! ```rust
//! use tagtree::dom::{Body, Div, Head, P, Title};
//!
//! let head = Head::new().child(Title::new("x"));
//! let body = Body::new().child(Div::new().child(P::new()));
//! # let _ = (head, body);
//! ```
//!
//! Typed documents lower into validated [`Document`]s without any runtime
//! failure path.

use crate::Stem;
use crate::node::{Document, Node};
use crate::schema::ElementKind;
use crate::serialize::{SerializeOptions, serialize_document};

// =============================================================================
// Content models
// =============================================================================

/// Elements that may appear inside `<head>`.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadContent {
    Title(Title),
}

/// Elements that may appear inside `<body>`, `<div>`, `<p>`, `<a>` and the
/// headings.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyContent {
    H1(H1),
    H2(H2),
    H3(H3),
    H4(H4),
    H5(H5),
    H6(H6),
    P(P),
    Div(Div),
    A(A),
    Img(Img),
    Br(Br),
}

impl HeadContent {
    fn to_node(&self) -> Node {
        match self {
            HeadContent::Title(title) => title.to_node(),
        }
    }
}

impl BodyContent {
    fn to_node(&self) -> Node {
        match self {
            BodyContent::H1(e) => e.to_node(),
            BodyContent::H2(e) => e.to_node(),
            BodyContent::H3(e) => e.to_node(),
            BodyContent::H4(e) => e.to_node(),
            BodyContent::H5(e) => e.to_node(),
            BodyContent::H6(e) => e.to_node(),
            BodyContent::P(e) => e.to_node(),
            BodyContent::Div(e) => e.to_node(),
            BodyContent::A(e) => e.to_node(),
            BodyContent::Img(e) => e.to_node(),
            BodyContent::Br(e) => e.to_node(),
        }
    }
}

fn lower_body(children: &[BodyContent]) -> Vec<Node> {
    children.iter().map(BodyContent::to_node).collect()
}

// =============================================================================
// Document
// =============================================================================

/// The document root. Both slots are optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Html {
    pub head: Option<Head>,
    pub body: Option<Body>,
}

impl Html {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn head(mut self, head: Head) -> Self {
        self.head = Some(head);
        self
    }

    pub fn body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Lower into a validated [`Document`].
    pub fn into_document(self) -> Document {
        self.to_document()
    }

    /// Lower into a validated [`Document`], leaving the typed tree in place.
    pub fn to_document(&self) -> Document {
        Document::from_parts(
            self.head.as_ref().map(Head::to_node),
            self.body.as_ref().map(Body::to_node),
        )
    }

    /// Serialize with default options.
    pub fn to_markup(&self) -> String {
        self.to_markup_with_options(&SerializeOptions::default())
    }

    /// Serialize with custom options.
    pub fn to_markup_with_options(&self, opts: &SerializeOptions) -> String {
        serialize_document(&self.to_document(), opts)
    }
}

impl From<Html> for Document {
    fn from(html: Html) -> Self {
        html.into_document()
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Head {
    pub children: Vec<HeadContent>,
}

impl Head {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: impl Into<HeadContent>) -> Self {
        self.children.push(child.into());
        self
    }

    fn to_node(&self) -> Node {
        let children = self.children.iter().map(HeadContent::to_node).collect();
        Node::from_parts(ElementKind::Head, Vec::new(), None, children)
    }
}

/// Document body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Body {
    pub children: Vec<BodyContent>,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: impl Into<BodyContent>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<BodyContent>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    fn to_node(&self) -> Node {
        Node::from_parts(ElementKind::Body, Vec::new(), None, lower_body(&self.children))
    }
}

// =============================================================================
// Metadata
// =============================================================================

/// Document title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Title {
    pub text: Stem,
}

impl Title {
    pub fn new(text: impl Into<Stem>) -> Self {
        Self { text: text.into() }
    }

    fn to_node(&self) -> Node {
        Node::from_parts(ElementKind::Title, Vec::new(), Some(self.text.clone()), Vec::new())
    }
}

impl From<Title> for HeadContent {
    fn from(title: Title) -> Self {
        HeadContent::Title(title)
    }
}

// =============================================================================
// Text containers: headings and paragraphs
// =============================================================================

macro_rules! text_container {
    ($(#[$doc:meta] $name:ident => $kind:ident),* $(,)?) => {
        $(
            #[$doc]
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct $name {
                /// Text written before the children.
                pub text: Option<Stem>,
                pub children: Vec<BodyContent>,
            }

            impl $name {
                pub fn new() -> Self {
                    Self::default()
                }

                pub fn with_text(text: impl Into<Stem>) -> Self {
                    Self::new().text(text)
                }

                pub fn text(mut self, text: impl Into<Stem>) -> Self {
                    self.text = Some(text.into());
                    self
                }

                pub fn child(mut self, child: impl Into<BodyContent>) -> Self {
                    self.children.push(child.into());
                    self
                }

                fn to_node(&self) -> Node {
                    Node::from_parts(
                        ElementKind::$kind,
                        Vec::new(),
                        self.text.clone(),
                        lower_body(&self.children),
                    )
                }
            }

            impl From<$name> for BodyContent {
                fn from(element: $name) -> Self {
                    BodyContent::$name(element)
                }
            }
        )*
    };
}

text_container! {
    /// Level 1 heading.
    H1 => H1,
    /// Level 2 heading.
    H2 => H2,
    /// Level 3 heading.
    H3 => H3,
    /// Level 4 heading.
    H4 => H4,
    /// Level 5 heading.
    H5 => H5,
    /// Level 6 heading.
    H6 => H6,
    /// Paragraph.
    P => P,
}

// =============================================================================
// Grouping and links
// =============================================================================

/// Generic container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Div {
    pub children: Vec<BodyContent>,
}

impl Div {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: impl Into<BodyContent>) -> Self {
        self.children.push(child.into());
        self
    }

    fn to_node(&self) -> Node {
        Node::from_parts(ElementKind::Div, Vec::new(), None, lower_body(&self.children))
    }
}

impl From<Div> for BodyContent {
    fn from(div: Div) -> Self {
        BodyContent::Div(div)
    }
}

/// Hyperlink.
///
/// `href` is a raw attribute token, written verbatim (e.g. `href='/about'`).
/// An empty token is left out of the output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct A {
    pub href: Stem,
    pub text: Option<Stem>,
    pub children: Vec<BodyContent>,
}

impl A {
    pub fn new(href: impl Into<Stem>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }

    pub fn text(mut self, text: impl Into<Stem>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: impl Into<BodyContent>) -> Self {
        self.children.push(child.into());
        self
    }

    fn to_node(&self) -> Node {
        Node::from_parts(
            ElementKind::A,
            vec![self.href.clone()],
            self.text.clone(),
            lower_body(&self.children),
        )
    }
}

impl From<A> for BodyContent {
    fn from(a: A) -> Self {
        BodyContent::A(a)
    }
}

// =============================================================================
// Void elements
// =============================================================================

/// Image. Each slot is a raw attribute token; empty slots are skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Img {
    pub src: Stem,
    pub alt: Stem,
    pub width: Stem,
}

impl Img {
    pub fn new(src: impl Into<Stem>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }

    pub fn alt(mut self, alt: impl Into<Stem>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn width(mut self, width: impl Into<Stem>) -> Self {
        self.width = width.into();
        self
    }

    fn to_node(&self) -> Node {
        Node::from_parts(
            ElementKind::Img,
            vec![self.src.clone(), self.alt.clone(), self.width.clone()],
            None,
            Vec::new(),
        )
    }
}

impl From<Img> for BodyContent {
    fn from(img: Img) -> Self {
        BodyContent::Img(img)
    }
}

/// Line break.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Br;

impl Br {
    fn to_node(&self) -> Node {
        Node::from_parts(ElementKind::Br, Vec::new(), None, Vec::new())
    }
}

impl From<Br> for BodyContent {
    fn from(br: Br) -> Self {
        BodyContent::Br(br)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_lowering_preserves_order() {
        let doc = Html::new()
            .body(
                Body::new()
                    .child(H2::with_text("first"))
                    .child(Br)
                    .child(P::with_text("last")),
            )
            .into_document();

        let body = doc.body().unwrap();
        let kinds: Vec<_> = body.children().iter().map(Node::kind).collect();
        assert_eq!(kinds, [ElementKind::H2, ElementKind::Br, ElementKind::P]);
        assert!(doc.head().is_none());
    }

    #[test]
    fn test_img_slots_lower_in_order() {
        let doc = Html::new()
            .body(Body::new().child(Img::new("src=a.png").width("width=10")))
            .into_document();
        let img = &doc.body().unwrap().children()[0];
        assert_eq!(img.attributes(), ["src=a.png", "", "width=10"]);
        assert_eq!(img.to_markup(), "<img src=a.png width=10>\n");
    }

    #[test]
    fn test_nested_containers() {
        let html = Html::new().body(
            Body::new().child(
                Div::new().child(
                    P::new()
                        .child(A::new("href=/x").text("x"))
                        .child(Br),
                ),
            ),
        );
        let doc = Document::from(html);
        assert_eq!(doc.body().unwrap().depth(), 4);
    }

    #[test]
    fn test_anchor_without_href() {
        let html = Html::new().body(Body::new().child(A::default().text("plain")));
        assert_eq!(
            html.to_markup(),
            "<html>\n    <body>\n        <a>\n            plain\n        </a>\n    </body>\n</html>\n"
        );
    }

    #[test]
    fn test_lowering_by_reference_keeps_typed_tree() {
        let html = Html::new()
            .head(Head::new().child(Title::new("t")))
            .body(Body::new().child(Div::new().child(Br)));

        let borrowed = html.to_document();
        let first = html.to_markup();
        assert_eq!(first, html.to_markup());
        assert_eq!(borrowed.to_markup(), first);
        assert_eq!(html.into_document(), borrowed);
    }

    #[test]
    fn test_body_children_extend() {
        let body = Body::new().children([P::with_text("a"), P::with_text("b")]);
        assert_eq!(body.children.len(), 2);
    }
}
