//! The node tree.
//!
//! A [`Node`] owns its attributes and its children outright. Appending a child
//! moves it into the parent, so a node can never sit under two parents and the
//! tree can never contain a cycle. To put "the same" node in several places
//! (a line break, say), clone it.

use compact_str::CompactString;
use facet::Facet;
use smallvec::SmallVec;

use crate::Attribute;

/// How a node lays itself out when rendered.
///
/// The layout is chosen at construction and cannot be changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
#[repr(u8)]
pub enum Layout {
    /// Start tag, text and each non-inline child on their own indented line,
    /// end tag on a line of its own (`div`, `ul`, `table`, `body`, ...).
    Block,
    /// Text directly after the start tag and the end tag directly after the
    /// last child (`title`, `h1`, `td`). Non-inline children still break lines.
    Line,
    /// Like `Line`, but never indented and never preceded by a newline
    /// (`a`, `span`, `sub`).
    Inline,
    /// Start tag only. Text and children are ignored when rendering
    /// (`br`, `img`, `link`).
    Void,
    /// No tag at all: just the raw text value. Children are ignored.
    Text,
    /// `<!DOCTYPE html>` followed by `Block` rendering of the node itself.
    Document,
}

impl Layout {
    /// Whether nodes of this layout sit mid-line unless told otherwise.
    pub fn is_inline_by_default(self) -> bool {
        matches!(self, Layout::Inline | Layout::Text)
    }
}

/// A single node in the document tree.
///
/// An empty tag name is allowed. On a `Text` node it means "no wrapper"; on
/// any other layout it renders as the degenerate `<>` / `</>` pair, which is
/// left to the caller to avoid.
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
pub struct Node {
    tag: CompactString,
    text: CompactString,
    layout: Layout,
    inline: bool,
    attrs: SmallVec<[Attribute; 4]>,
    children: Vec<Node>,
}

impl Node {
    /// Create a node with the given tag and layout.
    pub fn new(tag: impl Into<CompactString>, layout: Layout) -> Self {
        Self {
            tag: tag.into(),
            text: CompactString::default(),
            layout,
            inline: layout.is_inline_by_default(),
            attrs: SmallVec::new(),
            children: Vec::new(),
        }
    }

    pub fn block(tag: impl Into<CompactString>) -> Self {
        Self::new(tag, Layout::Block)
    }

    pub fn line(tag: impl Into<CompactString>) -> Self {
        Self::new(tag, Layout::Line)
    }

    pub fn inline(tag: impl Into<CompactString>) -> Self {
        Self::new(tag, Layout::Inline)
    }

    pub fn void(tag: impl Into<CompactString>) -> Self {
        Self::new(tag, Layout::Void)
    }

    /// A void element that sits mid-line, without indentation or a leading
    /// newline (images).
    pub fn inline_void(tag: impl Into<CompactString>) -> Self {
        Self {
            inline: true,
            ..Self::new(tag, Layout::Void)
        }
    }

    /// A tagless node that renders only `value`.
    pub fn text(value: impl Into<CompactString>) -> Self {
        Self::new(CompactString::default(), Layout::Text).with_text(value)
    }

    /// Set the text rendered right after the start tag.
    pub fn with_text(mut self, text: impl Into<CompactString>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_attribute(mut self, attr: Attribute) -> Self {
        self.attrs.push(attr);
        self
    }

    pub fn with_id(self, id: impl std::fmt::Display) -> Self {
        self.with_attribute(Attribute::id(id))
    }

    pub fn with_class(self, class: impl std::fmt::Display) -> Self {
        self.with_attribute(Attribute::class(class))
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append an attribute and return it.
    ///
    /// Names are not deduplicated: appending `class` twice renders it twice.
    pub fn append_attribute(&mut self, attr: Attribute) -> &Attribute {
        self.attrs.push(attr);
        &self.attrs[self.attrs.len() - 1]
    }

    pub fn append_id(&mut self, id: impl std::fmt::Display) -> &Attribute {
        self.append_attribute(Attribute::id(id))
    }

    pub fn append_class(&mut self, class: impl std::fmt::Display) -> &Attribute {
        self.append_attribute(Attribute::class(class))
    }

    /// Append a child and return it, so it can be configured in place:
    ///
    /// ```
    /// use htmlsmith::elements;
    ///
    /// let mut body = elements::body();
    /// body.append_child(elements::heading("Intro", 1)).append_id("intro");
    /// assert_eq!(body.children()[0].attributes()[0].value(), "intro");
    /// ```
    pub fn append_child(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Append a tagless text child.
    pub fn append_text(&mut self, text: impl Into<CompactString>) -> &mut Node {
        self.append_child(Node::text(text))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn text_value(&self) -> &str {
        &self.text
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Whether this node is rendered mid-line: no indentation of its own and
    /// no newline inserted before it by its parent.
    pub fn is_inline(&self) -> bool {
        self.inline
    }

    /// Attributes in the order they were appended.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attrs
    }

    /// Children in the order they were appended.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Mutable access to the children, for configuring nodes after the fact.
    ///
    /// Only existing children can be reached this way; the slice cannot grow
    /// or shrink.
    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// Number of node levels in this subtree (a leaf has depth 1).
    ///
    /// Computed without recursion, so it is safe to call on trees too deep to
    /// render.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }
}
