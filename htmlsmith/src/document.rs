//! The document root.

use compact_str::CompactString;
use std::fmt;
use std::io;

use crate::Attribute;
use crate::node::{Layout, Node};
use crate::render::{RenderError, RenderOptions, Renderer, check_depth};
use crate::tracing_macros::debug;

/// A complete HTML document: an `<html>` root that renders with a
/// `<!DOCTYPE html>` preamble.
///
/// ```
/// use htmlsmith::{Document, elements};
///
/// let mut doc = Document::new();
/// doc.append_child(elements::head())
///     .append_child(elements::title("Hello"));
/// let body = doc.append_child(elements::body());
/// body.append_child(elements::heading("Hello", 1));
///
/// assert_eq!(
///     doc.render(),
///     "<!DOCTYPE html>\n<html>\n\t<head>\n\t\t<title>Hello</title>\n\t</head>\n\t<body>\n\t\t<h1>Hello</h1>\n\t</body>\n</html>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Node,
    options: RenderOptions,
}

impl Document {
    /// Tag name of the root element.
    pub const ROOT_TAG: &'static str = "html";

    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            root: Node::new(Self::ROOT_TAG, Layout::Document),
            options,
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Append a child to `<html>` and return it.
    pub fn append_child(&mut self, child: Node) -> &mut Node {
        self.root.append_child(child)
    }

    /// Append an attribute to `<html>` (e.g. `lang`) and return it.
    pub fn append_attribute(&mut self, attr: Attribute) -> &Attribute {
        self.root.append_attribute(attr)
    }

    pub fn append_id(&mut self, id: impl fmt::Display) -> &Attribute {
        self.root.append_id(id)
    }

    pub fn append_class(&mut self, class: impl fmt::Display) -> &Attribute {
        self.root.append_class(class)
    }

    /// Append a tagless text child to `<html>`.
    pub fn append_text(&mut self, text: impl Into<CompactString>) -> &mut Node {
        self.root.append_text(text)
    }

    /// Render the whole document.
    ///
    /// Ignores [`RenderOptions::max_depth`]; use [`Document::try_render`] to
    /// enforce it.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = Renderer::new(&mut out, &self.options).write_node(&self.root, 0);
        debug!(bytes = out.len(), "rendered document");
        out
    }

    /// Render the whole document, refusing trees deeper than
    /// [`RenderOptions::max_depth`].
    pub fn try_render(&self) -> Result<String, RenderError> {
        check_depth(&self.root, &self.options)?;
        Ok(self.render())
    }

    /// Render the document and write it to `sink`.
    ///
    /// The output is written exactly as rendered, without a trailing newline.
    pub fn write_to<W: io::Write>(&self, mut sink: W) -> io::Result<()> {
        let html = self.try_render().map_err(io::Error::other)?;
        sink.write_all(html.as_bytes())?;
        sink.flush()?;
        debug!(bytes = html.len(), "wrote document");
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Renderer::new(f, &self.options).write_node(&self.root, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert_eq!(doc.root().tag(), "html");
        assert_eq!(doc.root().layout(), Layout::Document);
        assert_eq!(doc.render(), "<!DOCTYPE html>\n<html>\n</html>");
    }

    #[test]
    fn test_body_with_line_paragraph() {
        let mut doc = Document::new();
        doc.append_child(Node::block("body"))
            .append_child(Node::line("p").with_text("hi"));

        let html = doc.render();
        assert_eq!(
            html,
            "<!DOCTYPE html>\n<html>\n\t<body>\n\t\t<p>hi</p>\n\t</body>\n</html>"
        );
        assert_eq!(html.lines().next(), Some("<!DOCTYPE html>"));
    }

    #[test]
    fn test_root_attributes() {
        let mut doc = Document::new();
        doc.append_attribute(Attribute::new("lang", "en"));
        assert!(doc.render().contains("<html lang=\"en\">"));
    }

    #[test]
    fn test_display_and_write_to_agree() {
        let mut doc = Document::new();
        doc.append_child(Node::block("body")).append_text("x");

        let mut buf = Vec::new();
        doc.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), doc.to_string());
        assert_eq!(doc.to_string(), doc.render());
    }

    #[test]
    fn test_options_are_used() {
        let mut doc = Document::with_options(RenderOptions::new().with_indent("  "));
        doc.append_child(Node::block("body"));
        assert_eq!(
            doc.render(),
            "<!DOCTYPE html>\n<html>\n  <body>\n  </body>\n</html>"
        );
    }

    #[test]
    fn test_write_to_respects_depth_limit() {
        let mut doc = Document::with_options(RenderOptions::new().with_max_depth(2));
        doc.append_child(Node::block("body"))
            .append_child(Node::block("div"));

        assert!(doc.try_render().is_err());
        let mut buf = Vec::new();
        let err = doc.write_to(&mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(buf.is_empty());
    }

    /// Accepts up to `cap` bytes, then fails every write.
    struct Limited {
        buf: String,
        cap: usize,
    }

    impl fmt::Write for Limited {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if self.buf.len() + s.len() > self.cap {
                return Err(fmt::Error);
            }
            self.buf.push_str(s);
            Ok(())
        }
    }

    /// Accepts up to `cap` bytes, then reports a full disk.
    struct FullDisk {
        written: Vec<u8>,
        cap: usize,
    }

    impl io::Write for FullDisk {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            let room = self.cap - self.written.len();
            if room == 0 {
                return Err(io::Error::new(io::ErrorKind::StorageFull, "disk full"));
            }
            let n = room.min(data.len());
            self.written.extend_from_slice(&data[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sample_document() -> Document {
        let mut doc = Document::new();
        let body = doc.append_child(Node::block("body"));
        body.append_child(Node::line("p").with_text("hello"));
        body.append_child(Node::void("br"));
        doc
    }

    #[test]
    fn test_display_reports_failing_sink() {
        use std::fmt::Write as _;

        let doc = sample_document();
        let mut sink = Limited {
            buf: String::new(),
            cap: 20,
        };
        assert!(write!(sink, "{doc}").is_err());
        assert!(sink.buf.starts_with(DOCTYPE_LINE));
        assert!(sink.buf.len() <= 20);

        let mut roomy = Limited {
            buf: String::new(),
            cap: usize::MAX,
        };
        write!(roomy, "{doc}").unwrap();
        assert_eq!(roomy.buf, doc.render());
    }

    #[test]
    fn test_node_display_reports_failing_sink() {
        use std::fmt::Write as _;

        let body = sample_document().root().children()[0].clone();
        let mut sink = Limited {
            buf: String::new(),
            cap: 10,
        };
        assert!(write!(sink, "{body}").is_err());
    }

    #[test]
    fn test_formatting_into_full_io_sink_fails() {
        use std::io::Write as _;

        let doc = sample_document();
        let mut disk = FullDisk {
            written: Vec::new(),
            cap: 24,
        };
        let err = write!(disk, "{doc}").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::StorageFull);
        assert_eq!(disk.written.len(), 24);

        let mut disk = FullDisk {
            written: Vec::new(),
            cap: 24,
        };
        assert!(doc.write_to(&mut disk).is_err());
    }

    const DOCTYPE_LINE: &str = "<!DOCTYPE html>\n";
}
