//! Tree-to-text rendering.
//!
//! Every node renders itself at an indentation level; children are rendered
//! one level deeper and are responsible for their own indentation. The exact
//! shape per layout:
//!
//! - **Block**: indent, start tag, then (if there is text) newline + indent+1 +
//!   text, then for each child a newline unless the child is inline followed by
//!   the child itself, then newline + indent + end tag.
//! - **Line**: indent, start tag, text, children (newline before non-inline
//!   ones), end tag.
//! - **Inline**: like Line, but no indentation and no newlines at all.
//! - **Void**: indent, start tag.
//! - **Text**: indent, raw text.
//! - **Document**: the `<!DOCTYPE html>` line, then Block.
//!
//! Indentation is skipped entirely for inline nodes. No trailing newline is
//! ever written, and neither text nor attribute values are escaped.

use facet::Facet;
use std::fmt::{self, Write};

use crate::node::{Layout, Node};
use crate::tracing_macros::{debug, trace};

/// First line of every rendered document.
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// Options for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Facet)]
pub struct RenderOptions {
    /// Written once per nesting level (default: a single tab)
    pub indent: String,
    /// Line separator (default: `"\n"`)
    pub newline: String,
    /// Refuse to render trees deeper than this many levels (default: no limit).
    ///
    /// Rendering recurses once per level, so a pathologically deep tree can
    /// exhaust the stack. With a limit set, [`Node::render_with`] reports
    /// [`RenderError::TooDeep`] instead.
    pub max_depth: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            newline: "\n".to_string(),
            max_depth: None,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom indentation unit, e.g. two spaces.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Use a custom line separator, e.g. `"\r\n"`.
    pub fn with_newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Errors that can occur while rendering.
#[derive(Facet, Debug)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum RenderError {
    /// tree is {depth} levels deep, more than the limit of {limit}
    TooDeep { depth: usize, limit: usize },
}

impl Node {
    /// Render this node and its subtree with tab indentation, starting at
    /// `indent` levels.
    ///
    /// ```
    /// use htmlsmith::elements;
    ///
    /// let h1 = elements::heading("Hi", 1);
    /// assert_eq!(h1.render(0), "<h1>Hi</h1>");
    /// assert_eq!(h1.render(2), "\t\t<h1>Hi</h1>");
    /// ```
    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        let opts = RenderOptions::default();
        // Writing into a String cannot fail.
        let _ = Renderer::new(&mut out, &opts).write_node(self, indent);
        out
    }

    /// Render with custom options, enforcing [`RenderOptions::max_depth`].
    pub fn render_with(&self, indent: usize, opts: &RenderOptions) -> Result<String, RenderError> {
        check_depth(self, opts)?;
        let mut out = String::new();
        let _ = Renderer::new(&mut out, opts).write_node(self, indent);
        Ok(out)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opts = RenderOptions::default();
        Renderer::new(f, &opts).write_node(self, 0)
    }
}

pub(crate) fn check_depth(node: &Node, opts: &RenderOptions) -> Result<(), RenderError> {
    if let Some(limit) = opts.max_depth {
        let depth = node.depth();
        if depth > limit {
            debug!(depth, limit, "refusing to render tree deeper than limit");
            return Err(RenderError::TooDeep { depth, limit });
        }
    }
    Ok(())
}

pub(crate) struct Renderer<'a, W: Write> {
    out: &'a mut W,
    options: &'a RenderOptions,
}

impl<'a, W: Write> Renderer<'a, W> {
    pub(crate) fn new(out: &'a mut W, options: &'a RenderOptions) -> Self {
        Self { out, options }
    }

    fn write_indent(&mut self, node: &Node, level: usize) -> fmt::Result {
        if node.is_inline() {
            return Ok(());
        }
        for _ in 0..level {
            self.out.write_str(&self.options.indent)?;
        }
        Ok(())
    }

    /// Newline followed by `level` indentation units, regardless of layout.
    fn write_line_break(&mut self, level: usize) -> fmt::Result {
        self.out.write_str(&self.options.newline)?;
        for _ in 0..level {
            self.out.write_str(&self.options.indent)?;
        }
        Ok(())
    }

    fn write_start_tag(&mut self, node: &Node) -> fmt::Result {
        write!(self.out, "<{}", node.tag())?;
        for attr in node.attributes() {
            write!(self.out, " {attr}")?;
        }
        self.out.write_char('>')
    }

    fn write_end_tag(&mut self, node: &Node) -> fmt::Result {
        write!(self.out, "</{}>", node.tag())
    }

    /// Children one level deeper; a newline precedes each non-inline child.
    fn write_children(&mut self, node: &Node, level: usize, break_lines: bool) -> fmt::Result {
        for child in node.children() {
            if break_lines && !child.is_inline() {
                self.out.write_str(&self.options.newline)?;
            }
            self.write_node(child, level + 1)?;
        }
        Ok(())
    }

    pub(crate) fn write_node(&mut self, node: &Node, level: usize) -> fmt::Result {
        trace!(tag = node.tag(), level, layout = ?node.layout(), "rendering node");
        match node.layout() {
            Layout::Block => self.write_block(node, level),
            Layout::Line => {
                self.write_indent(node, level)?;
                self.write_start_tag(node)?;
                self.out.write_str(node.text_value())?;
                self.write_children(node, level, true)?;
                self.write_end_tag(node)
            }
            Layout::Inline => {
                self.write_indent(node, level)?;
                self.write_start_tag(node)?;
                self.out.write_str(node.text_value())?;
                self.write_children(node, level, false)?;
                self.write_end_tag(node)
            }
            Layout::Void => {
                self.write_indent(node, level)?;
                self.write_start_tag(node)
            }
            Layout::Text => {
                self.write_indent(node, level)?;
                self.out.write_str(node.text_value())
            }
            Layout::Document => {
                self.out.write_str(DOCTYPE)?;
                self.out.write_str(&self.options.newline)?;
                self.write_block(node, level)
            }
        }
    }

    fn write_block(&mut self, node: &Node, level: usize) -> fmt::Result {
        self.write_indent(node, level)?;
        self.write_start_tag(node)?;

        if !node.text_value().is_empty() {
            self.write_line_break(level + 1)?;
            self.out.write_str(node.text_value())?;
        }

        self.write_children(node, level, true)?;

        self.write_line_break(level)?;
        self.write_end_tag(node)
    }
}
