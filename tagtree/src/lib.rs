//! Closed-vocabulary HTML documents with structural validation.
//!
//! tagtree provides:
//! - **Schema**: a static table of element kinds and the content categories
//!   that decide what may nest inside what
//! - **Typed DOM**: element structs and content-model enums that make invalid
//!   nesting a compile error
//! - **Validated nodes**: runtime construction that rejects invalid nesting
//!   with a precise [`BuildError`]
//! - **Serialization**: deterministic, indented markup output
//!
//! # Example
//!
//! ```rust
//! use tagtree::{Document, Node};
//!
//! let head = Node::head([Node::title("Help Me.")?])?;
//! let body = Node::body([
//!     Node::h1(Some("The horror!"), [])?,
//!     Node::a(["href='https://example.com'"], Some("For science"), [])?,
//! ])?;
//! let doc = Document::new(Some(head), Some(body))?;
//!
//! let markup = doc.to_markup();
//! assert!(markup.starts_with("<html>\n    <head>\n        <title>\n"));
//! assert!(markup.ends_with("    </body>\n</html>\n"));
//! # Ok::<(), tagtree::BuildError>(())
//! ```

mod tracing_macros;

pub mod dom;
mod error;
mod node;
pub mod schema;
pub mod serialize;
mod stem;

pub use error::BuildError;
pub use node::{Document, Node};
pub use schema::{Category, ElementKind, ElementSpec};
pub use serialize::{SerializeOptions, serialize, serialize_document, serialize_node};
pub use stem::Stem;
