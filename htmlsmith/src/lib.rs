//! Build HTML documents as a tree of nodes instead of by string concatenation.
//!
//! htmlsmith provides:
//! - **Nodes**: a single-owner tree of [`Node`]s with ordered [`Attribute`]s and children
//! - **Layouts**: block, line, inline, void and text rendering rules ([`Layout`])
//! - **Elements**: ready-made headings, paragraphs, links, images, lists and tables ([`elements`])
//! - **Rendering**: tab-indented output with a `<!DOCTYPE html>` preamble ([`Document`])
//!
//! Text and attribute values are written exactly as given. Nothing is
//! escaped, so escape `<`, `&` and `"` yourself before inserting untrusted
//! content.
//!
//! # Example
//!
//! ```rust
//! use htmlsmith::{Document, elements};
//!
//! let mut doc = Document::new();
//! let head = doc.append_child(elements::head());
//! head.append_child(elements::title("Notes"));
//! head.append_child(elements::stylesheet_link("stylesheet", "style.css"));
//!
//! let body = doc.append_child(elements::body());
//! body.append_child(elements::heading("Notes", 1)).append_id("top");
//!
//! let p = body.append_child(elements::paragraph_with_text("See "));
//! p.append_child(elements::link("https://example.com", "example"));
//! p.append_text(".");
//!
//! let list = body.append_child(elements::unordered_list());
//! list.append_child(elements::list_item_with_text("one"));
//! list.append_child(elements::list_item_with_text("two"));
//!
//! let html = doc.render();
//! assert!(html.starts_with("<!DOCTYPE html>\n<html>\n\t<head>"));
//! assert!(html.contains("\t\t<h1 id=\"top\">Notes</h1>"));
//! assert!(html.contains("See <a href=\"https://example.com\">example</a>."));
//! ```

mod tracing_macros;

mod attribute;
mod document;
pub mod elements;
mod node;
mod render;

pub use attribute::Attribute;
pub use document::Document;
pub use node::{Layout, Node};
pub use render::{DOCTYPE, RenderError, RenderOptions};
