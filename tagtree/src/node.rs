//! Validated document nodes.
//!
//! A [`Node`] can only be obtained through [`Node::build`] (or one of the
//! per-kind constructors that forward to it), so every node that exists
//! satisfies the containment and content rules from [`crate::schema`].
//! Nodes are immutable once built.
//!
//! # Example
//!
//! ```rust
//! use tagtree::{BuildError, Document, ElementKind, Node};
//!
//! let body = Node::body([Node::p(Some("Hello!"), [])?])?;
//! let doc = Document::empty().with_body(body)?;
//! assert!(doc.to_markup().contains("Hello!"));
//!
//! let err = Node::head([Node::br()?]).unwrap_err();
//! assert!(matches!(err, BuildError::InvalidChildCategory { index: 0, child: ElementKind::Br, .. }));
//! # Ok::<(), BuildError>(())
//! ```

use facet::Facet;

use crate::Stem;
use crate::error::BuildError;
use crate::schema::ElementKind;
use crate::tracing_macros::{debug, trace};

/// An element instance whose structure has been validated.
///
/// Values produced through reflection (e.g. a facet deserializer) are checked
/// against the same rules as [`Node::build`].
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
#[facet(invariants = Node::is_well_formed)]
pub struct Node {
    kind: ElementKind,
    /// Raw attribute tokens in insertion order. Empty tokens are kept here and
    /// skipped when serializing.
    attributes: Vec<Stem>,
    text: Option<Stem>,
    #[facet(recursive_type)]
    children: Vec<Node>,
}

impl Node {
    /// Build a node of `kind`, checking it against the element table.
    ///
    /// Children are checked first, in order, and the earliest offending child
    /// is reported. Then text content, then attributes.
    pub fn build<A, C>(
        kind: ElementKind,
        attributes: A,
        text: Option<Stem>,
        children: C,
    ) -> Result<Self, BuildError>
    where
        A: IntoIterator,
        A::Item: Into<Stem>,
        C: IntoIterator<Item = Node>,
    {
        let attributes: Vec<Stem> = attributes.into_iter().map(Into::into).collect();
        let children: Vec<Node> = children.into_iter().collect();

        if let Err(err) = validate(kind, &attributes, text.as_ref(), &children) {
            debug!(%kind, %err, "rejected node");
            return Err(err);
        }

        trace!(
            %kind,
            attributes = attributes.len(),
            children = children.len(),
            "built node"
        );
        Ok(Self {
            kind,
            attributes,
            text,
            children,
        })
    }

    /// Assemble a node whose validity is guaranteed by the caller's types.
    pub(crate) fn from_parts(
        kind: ElementKind,
        attributes: Vec<Stem>,
        text: Option<Stem>,
        children: Vec<Node>,
    ) -> Self {
        debug_assert!(validate(kind, &attributes, text.as_ref(), &children).is_ok());
        Self {
            kind,
            attributes,
            text,
            children,
        }
    }

    pub fn head(children: impl IntoIterator<Item = Node>) -> Result<Self, BuildError> {
        Self::build(ElementKind::Head, no_attributes(), None, children)
    }

    pub fn body(children: impl IntoIterator<Item = Node>) -> Result<Self, BuildError> {
        Self::build(ElementKind::Body, no_attributes(), None, children)
    }

    pub fn title(text: impl Into<Stem>) -> Result<Self, BuildError> {
        Self::build(ElementKind::Title, no_attributes(), Some(text.into()), [])
    }

    /// Heading of the given level (`1..=6`).
    pub fn heading(
        level: u8,
        text: Option<&str>,
        children: impl IntoIterator<Item = Node>,
    ) -> Result<Self, BuildError> {
        let kind = ElementKind::heading(level)?;
        Self::build(kind, no_attributes(), text.map(Stem::from), children)
    }

    pub fn h1(
        text: Option<&str>,
        children: impl IntoIterator<Item = Node>,
    ) -> Result<Self, BuildError> {
        Self::heading(1, text, children)
    }

    pub fn h2(
        text: Option<&str>,
        children: impl IntoIterator<Item = Node>,
    ) -> Result<Self, BuildError> {
        Self::heading(2, text, children)
    }

    pub fn h3(
        text: Option<&str>,
        children: impl IntoIterator<Item = Node>,
    ) -> Result<Self, BuildError> {
        Self::heading(3, text, children)
    }

    pub fn h4(
        text: Option<&str>,
        children: impl IntoIterator<Item = Node>,
    ) -> Result<Self, BuildError> {
        Self::heading(4, text, children)
    }

    pub fn h5(
        text: Option<&str>,
        children: impl IntoIterator<Item = Node>,
    ) -> Result<Self, BuildError> {
        Self::heading(5, text, children)
    }

    pub fn h6(
        text: Option<&str>,
        children: impl IntoIterator<Item = Node>,
    ) -> Result<Self, BuildError> {
        Self::heading(6, text, children)
    }

    pub fn p(
        text: Option<&str>,
        children: impl IntoIterator<Item = Node>,
    ) -> Result<Self, BuildError> {
        Self::build(ElementKind::P, no_attributes(), text.map(Stem::from), children)
    }

    pub fn div(children: impl IntoIterator<Item = Node>) -> Result<Self, BuildError> {
        Self::build(ElementKind::Div, no_attributes(), None, children)
    }

    /// Anchor. Attributes are raw tokens such as `"href='https://example.com'"`.
    pub fn a<A>(
        attributes: A,
        text: Option<&str>,
        children: impl IntoIterator<Item = Node>,
    ) -> Result<Self, BuildError>
    where
        A: IntoIterator,
        A::Item: Into<Stem>,
    {
        Self::build(ElementKind::A, attributes, text.map(Stem::from), children)
    }

    pub fn img<A>(attributes: A) -> Result<Self, BuildError>
    where
        A: IntoIterator,
        A::Item: Into<Stem>,
    {
        Self::build(ElementKind::Img, attributes, None, [])
    }

    pub fn br() -> Result<Self, BuildError> {
        Self::build(ElementKind::Br, no_attributes(), None, [])
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn attributes(&self) -> &[Stem] {
        &self.attributes
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    fn is_well_formed(&self) -> bool {
        validate(self.kind, &self.attributes, self.text.as_ref(), &self.children).is_ok()
    }

    /// Number of levels below this node, counting the node itself.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Node::depth).max().unwrap_or(0)
    }
}

fn no_attributes() -> [Stem; 0] {
    []
}

fn validate(
    kind: ElementKind,
    attributes: &[Stem],
    text: Option<&Stem>,
    children: &[Node],
) -> Result<(), BuildError> {
    if kind == ElementKind::Html {
        return Err(BuildError::DocumentRoot);
    }

    if let Some(first) = children.first() {
        match kind.required_child_category() {
            None if kind.is_self_closing() => {
                return Err(BuildError::SelfClosingWithContent { kind });
            }
            None => {
                return Err(BuildError::InvalidChildCategory {
                    parent: kind,
                    index: 0,
                    child: first.kind,
                });
            }
            Some(required) => {
                if let Some((index, child)) = children
                    .iter()
                    .enumerate()
                    .find(|(_, child)| !required.admits(child.kind.category()))
                {
                    return Err(BuildError::InvalidChildCategory {
                        parent: kind,
                        index,
                        child: child.kind,
                    });
                }
            }
        }
    }

    if text.is_some() {
        if kind.is_self_closing() {
            return Err(BuildError::SelfClosingWithContent { kind });
        }
        if !kind.supports_text_content() {
            return Err(BuildError::UnsupportedTextContent { kind });
        }
    }

    if !attributes.is_empty() && !kind.supports_attributes() {
        return Err(BuildError::UnsupportedAttributes { kind });
    }

    Ok(())
}

/// A complete document: an implicit `<html>` root with optional `<head>` and
/// `<body>` slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Facet)]
#[facet(invariants = Document::slots_hold_their_kind)]
pub struct Document {
    head: Option<Node>,
    body: Option<Node>,
}

impl Document {
    /// Compose a document from already-built nodes.
    ///
    /// Fails if a slot holds a node of the wrong kind.
    pub fn new(head: Option<Node>, body: Option<Node>) -> Result<Self, BuildError> {
        check_slot(ElementKind::Head, head.as_ref())?;
        check_slot(ElementKind::Body, body.as_ref())?;
        Ok(Self { head, body })
    }

    /// A document with neither head nor body.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_head(mut self, head: Node) -> Result<Self, BuildError> {
        check_slot(ElementKind::Head, Some(&head))?;
        self.head = Some(head);
        Ok(self)
    }

    pub fn with_body(mut self, body: Node) -> Result<Self, BuildError> {
        check_slot(ElementKind::Body, Some(&body))?;
        self.body = Some(body);
        Ok(self)
    }

    pub(crate) fn from_parts(head: Option<Node>, body: Option<Node>) -> Self {
        Self { head, body }
    }

    fn slots_hold_their_kind(&self) -> bool {
        check_slot(ElementKind::Head, self.head.as_ref()).is_ok()
            && check_slot(ElementKind::Body, self.body.as_ref()).is_ok()
    }

    pub fn head(&self) -> Option<&Node> {
        self.head.as_ref()
    }

    pub fn body(&self) -> Option<&Node> {
        self.body.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none() && self.body.is_none()
    }
}

fn check_slot(slot: ElementKind, node: Option<&Node>) -> Result<(), BuildError> {
    match node {
        Some(node) if node.kind != slot => Err(BuildError::MisplacedSlot {
            slot,
            found: node.kind,
        }),
        _ => Ok(()),
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Document>();
    assert_sync::<Document>();
};

// =============================================================================
// Tests
// =============================================================================
