//! Indented serializer for validated documents.
//!
//! Output is line-oriented:
//!
//! - Every opening tag gets its own line, indented one unit per level
//! - Attributes are raw tokens separated by single spaces; empty tokens are skipped
//! - Text content sits on its own line, one level deeper than its element
//! - Self-closing elements (`img`, `br`) never get a closing tag
//! - The `<html>` wrapper is always written, even for an empty document
//!
//! Nothing is escaped or quoted. Any `Document` is valid by construction, so
//! serialization cannot fail.

use std::fmt::Write;

use crate::node::{Document, Node};
use crate::schema::ElementKind;
use crate::tracing_macros::trace;

/// Options for serialization.
#[derive(Clone, Debug)]
pub struct SerializeOptions {
    /// Indentation unit written once per nesting level (default: four spaces)
    pub indent: String,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
        }
    }
}

impl SerializeOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom indentation unit.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}

/// Serialize a document with default options.
pub fn serialize(doc: &Document) -> String {
    serialize_document(doc, &SerializeOptions::default())
}

/// Serialize a document to a string.
pub fn serialize_document(doc: &Document, opts: &SerializeOptions) -> String {
    let mut out = String::new();
    let mut ser = Serializer::new(&mut out, opts);
    ser.write_document(doc);
    trace!(bytes = out.len(), "serialized document");
    out
}

/// Serialize a single node and its subtree, starting at indent level 0.
pub fn serialize_node(node: &Node, opts: &SerializeOptions) -> String {
    let mut out = String::new();
    let mut ser = Serializer::new(&mut out, opts);
    ser.write_node(node);
    out
}

struct Serializer<'a, W: Write> {
    out: &'a mut W,
    options: &'a SerializeOptions,
    depth: usize,
}

impl<'a, W: Write> Serializer<'a, W> {
    fn new(out: &'a mut W, options: &'a SerializeOptions) -> Self {
        Self {
            out,
            options,
            depth: 0,
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            let _ = self.out.write_str(&self.options.indent);
        }
    }

    fn write_open_tag<'s>(&mut self, kind: ElementKind, attributes: impl Iterator<Item = &'s str>) {
        self.write_indent();
        let _ = write!(self.out, "<{}", kind.name());
        for attr in attributes.filter(|attr| !attr.is_empty()) {
            let _ = write!(self.out, " {}", attr);
        }
        let _ = writeln!(self.out, ">");
    }

    fn write_close_tag(&mut self, kind: ElementKind) {
        self.write_indent();
        let _ = writeln!(self.out, "</{}>", kind.name());
    }

    fn write_document(&mut self, doc: &Document) {
        self.write_open_tag(ElementKind::Html, std::iter::empty());
        self.depth += 1;
        if let Some(head) = doc.head() {
            self.write_node(head);
        }
        if let Some(body) = doc.body() {
            self.write_node(body);
        }
        self.depth -= 1;
        self.write_close_tag(ElementKind::Html);
    }

    fn write_node(&mut self, node: &Node) {
        let kind = node.kind();
        self.write_open_tag(kind, node.attributes().iter().map(|attr| attr.as_str()));

        if kind.is_self_closing() {
            return;
        }

        self.depth += 1;
        if let Some(text) = node.text() {
            self.write_indent();
            let _ = writeln!(self.out, "{}", text);
        }
        for child in node.children() {
            self.write_node(child);
        }
        self.depth -= 1;
        self.write_close_tag(kind);
    }
}

// =============================================================================
// Convenience methods
// =============================================================================

impl Node {
    /// Serialize this node with default options.
    pub fn to_markup(&self) -> String {
        serialize_node(self, &SerializeOptions::default())
    }

    /// Serialize this node with custom options.
    pub fn to_markup_with_options(&self, opts: &SerializeOptions) -> String {
        serialize_node(self, opts)
    }
}

impl Document {
    /// Serialize this document with default options.
    pub fn to_markup(&self) -> String {
        serialize(self)
    }

    /// Serialize this document with custom options.
    pub fn to_markup_with_options(&self, opts: &SerializeOptions) -> String {
        serialize_document(self, opts)
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
    fn test_empty_document() {
        assert_eq!(Document::empty().to_markup(), "<html>\n</html>\n");
    }

    #[test]
    fn test_void_elements() {
        let div = Node::div([Node::br().unwrap(), Node::img(["src=x.png"]).unwrap()]).unwrap();

        let markup = div.to_markup();
        assert_eq!(markup, "<div>\n    <br>\n    <img src=x.png>\n</div>\n");
        assert!(!markup.contains("</br>"));
        assert!(!markup.contains("</img>"));
    }

    #[test]
    fn test_empty_attributes_are_skipped() {
        let img = Node::img(["", "alt='a cat'", ""]).unwrap();
        assert_eq!(img.to_markup(), "<img alt='a cat'>\n");

        let img = Node::img(["", ""]).unwrap();
        assert_eq!(img.to_markup(), "<img>\n");
    }

    #[test]
    fn test_attributes_are_not_escaped() {
        let a = Node::a(["href=\"a?b=1&c=2\""], Some("<raw>"), []).unwrap();
        assert_eq!(a.to_markup(), "<a href=\"a?b=1&c=2\">\n    <raw>\n</a>\n");
    }

    #[test]
    fn test_text_before_children() {
        let p = Node::p(Some("intro"), [Node::br().unwrap()]).unwrap();
        assert_eq!(p.to_markup(), "<p>\n    intro\n    <br>\n</p>\n");
    }

    #[test]
    fn test_custom_indent() {
        let body = Node::body([Node::p(Some("hi"), []).unwrap()]).unwrap();
        let doc = Document::empty().with_body(body).unwrap();

        let opts = SerializeOptions::new().with_indent("\t");
        assert_eq!(
            doc.to_markup_with_options(&opts),
            "<html>\n\t<body>\n\t\t<p>\n\t\t\thi\n\t\t</p>\n\t</body>\n</html>\n"
        );
    }

    #[test]
    fn test_head_written_before_body() {
        let head = Node::head([]).unwrap();
        let body = Node::body([]).unwrap();
        let doc = Document::new(Some(head), Some(body)).unwrap();
        assert_eq!(
            doc.to_markup(),
            "<html>\n    <head>\n    </head>\n    <body>\n    </body>\n</html>\n"
        );
    }
}
