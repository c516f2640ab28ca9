//! Ready-made elements.
//!
//! Simple elements are described by an [`ElementSpec`] in [`CATALOG`], which
//! fixes their tag name and layout. The table only holds elements that can be
//! built without arguments. Elements whose tag or default attributes depend on
//! arguments ([`heading`], [`link`], [`image`], [`resource_link`],
//! [`stylesheet_link`], [`table_with_caption`], [`text`]) are reachable only
//! through their constructors, so [`element`] returns `None` for them.
//!
//! # Element Categories
//!
//! - **Document**: [`head`], [`body`], [`title`], [`resource_link`], [`stylesheet_link`]
//! - **Text**: [`heading`], [`paragraph`], [`text`], [`span`], [`subscript`], [`superscript`], [`line_break`]
//! - **Links and media**: [`link`], [`image`]
//! - **Lists**: [`unordered_list`], [`ordered_list`], [`list_item`]
//! - **Tables**: [`table`], [`table_with_caption`], [`table_row`], [`table_cell`], [`table_header_cell`]
//! - **Grouping**: [`div`]

use compact_str::{CompactString, format_compact};
use facet::Facet;
use std::fmt;

use crate::Attribute;
use crate::node::{Layout, Node};

/// Tag name and layout of a simple catalog element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSpec {
    /// Catalog name, e.g. `"paragraph"`
    pub name: &'static str,
    /// Tag name, e.g. `"p"`
    pub tag: &'static str,
    pub layout: Layout,
}

impl ElementSpec {
    pub const fn new(name: &'static str, tag: &'static str, layout: Layout) -> Self {
        Self { name, tag, layout }
    }

    /// Create an empty node for this element.
    pub fn build(&self) -> Node {
        Node::new(self.tag, self.layout)
    }

    /// Find a catalog entry by catalog name.
    pub fn lookup(name: &str) -> Option<&'static ElementSpec> {
        CATALOG.iter().find(|spec| spec.name == name)
    }
}

pub const HEAD: ElementSpec = ElementSpec::new("head", "head", Layout::Block);
pub const BODY: ElementSpec = ElementSpec::new("body", "body", Layout::Block);
pub const TITLE: ElementSpec = ElementSpec::new("title", "title", Layout::Line);
pub const DIV: ElementSpec = ElementSpec::new("div", "div", Layout::Block);
pub const PARAGRAPH: ElementSpec = ElementSpec::new("paragraph", "p", Layout::Block);
pub const SPAN: ElementSpec = ElementSpec::new("span", "span", Layout::Inline);
pub const SUBSCRIPT: ElementSpec = ElementSpec::new("subscript", "sub", Layout::Inline);
pub const SUPERSCRIPT: ElementSpec = ElementSpec::new("superscript", "sup", Layout::Inline);
pub const LINE_BREAK: ElementSpec = ElementSpec::new("line_break", "br", Layout::Void);
pub const LIST_ITEM: ElementSpec = ElementSpec::new("list_item", "li", Layout::Block);
pub const UNORDERED_LIST: ElementSpec = ElementSpec::new("unordered_list", "ul", Layout::Block);
pub const ORDERED_LIST: ElementSpec = ElementSpec::new("ordered_list", "ol", Layout::Block);
pub const TABLE: ElementSpec = ElementSpec::new("table", "table", Layout::Block);
pub const CAPTION: ElementSpec = ElementSpec::new("caption", "caption", Layout::Block);
pub const TABLE_ROW: ElementSpec = ElementSpec::new("table_row", "tr", Layout::Block);
pub const TABLE_CELL: ElementSpec = ElementSpec::new("table_cell", "td", Layout::Line);
pub const TABLE_HEADER_CELL: ElementSpec =
    ElementSpec::new("table_header_cell", "th", Layout::Line);

/// Every simple element, in no particular order.
pub const CATALOG: &[ElementSpec] = &[
    HEAD,
    BODY,
    TITLE,
    DIV,
    PARAGRAPH,
    SPAN,
    SUBSCRIPT,
    SUPERSCRIPT,
    LINE_BREAK,
    LIST_ITEM,
    UNORDERED_LIST,
    ORDERED_LIST,
    TABLE,
    CAPTION,
    TABLE_ROW,
    TABLE_CELL,
    TABLE_HEADER_CELL,
];

/// Build a simple element by catalog name (`"paragraph"`, `"table_row"`, ...).
///
/// Returns `None` for unknown names and for elements that need arguments.
pub fn element(name: &str) -> Option<Node> {
    ElementSpec::lookup(name).map(ElementSpec::build)
}

// =============================================================================
// Document structure
// =============================================================================

pub fn head() -> Node {
    HEAD.build()
}

pub fn body() -> Node {
    BODY.build()
}

pub fn title(text: impl Into<CompactString>) -> Node {
    TITLE.build().with_text(text)
}

/// `<link rel="...">`
pub fn resource_link(relation: impl fmt::Display) -> Node {
    Node::void("link").with_attribute(Attribute::new("rel", relation))
}

/// `<link rel="..." href="..." type="text/css">`
pub fn stylesheet_link(relation: impl fmt::Display, url: impl fmt::Display) -> Node {
    resource_link(relation)
        .with_attribute(Attribute::new("href", url))
        .with_attribute(Attribute::new("type", "text/css"))
}

// =============================================================================
// Text
// =============================================================================

/// `<h{level}>text</h{level}>`.
///
/// The level is not checked: `heading("x", 0)` produces an `<h0>` element.
pub fn heading(text: impl Into<CompactString>, level: i32) -> Node {
    Node::line(format_compact!("h{level}")).with_text(text)
}

pub fn paragraph() -> Node {
    PARAGRAPH.build()
}

pub fn paragraph_with_text(text: impl Into<CompactString>) -> Node {
    PARAGRAPH.build().with_text(text)
}

/// Free-standing text, typically placed between inline elements.
pub fn text(value: impl Into<CompactString>) -> Node {
    Node::text(value)
}

pub fn span() -> Node {
    SPAN.build()
}

pub fn span_with_text(text: impl Into<CompactString>) -> Node {
    SPAN.build().with_text(text)
}

pub fn subscript() -> Node {
    SUBSCRIPT.build()
}

pub fn subscript_with_text(text: impl Into<CompactString>) -> Node {
    SUBSCRIPT.build().with_text(text)
}

pub fn superscript() -> Node {
    SUPERSCRIPT.build()
}

pub fn superscript_with_text(text: impl Into<CompactString>) -> Node {
    SUPERSCRIPT.build().with_text(text)
}

pub fn line_break() -> Node {
    LINE_BREAK.build()
}

// =============================================================================
// Links and media
// =============================================================================

/// `<a href="url">text</a>`, rendered inline. Append children (an image, say)
/// to wrap more than text.
pub fn link(url: impl fmt::Display, text: impl Into<CompactString>) -> Node {
    Node::inline("a")
        .with_text(text)
        .with_attribute(Attribute::new("href", url))
}

/// How an [`image`] carries its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Facet)]
#[repr(u8)]
pub enum ImageSizing {
    /// `style="width:{w}px;height:{h}px"`
    #[default]
    Style,
    /// Separate `width` and `height` attributes
    Attributes,
}

/// `<img src alt style>`, sized with an inline style.
pub fn image(url: impl fmt::Display, alt: impl fmt::Display, width: i32, height: i32) -> Node {
    image_with_sizing(url, alt, width, height, ImageSizing::Style)
}

/// `<img>` with the dimensions carried as chosen by `sizing`.
///
/// Images sit mid-line: no indentation, no newline before them. Dimensions
/// are not checked.
pub fn image_with_sizing(
    url: impl fmt::Display,
    alt: impl fmt::Display,
    width: i32,
    height: i32,
    sizing: ImageSizing,
) -> Node {
    let img = Node::inline_void("img")
        .with_attribute(Attribute::new("src", url))
        .with_attribute(Attribute::new("alt", alt));
    match sizing {
        ImageSizing::Style => img.with_attribute(Attribute::new(
            "style",
            format_args!("width:{width}px;height:{height}px"),
        )),
        ImageSizing::Attributes => img
            .with_attribute(Attribute::new("width", width))
            .with_attribute(Attribute::new("height", height)),
    }
}

// =============================================================================
// Lists
// =============================================================================

pub fn unordered_list() -> Node {
    UNORDERED_LIST.build()
}

pub fn ordered_list() -> Node {
    ORDERED_LIST.build()
}

pub fn list_item() -> Node {
    LIST_ITEM.build()
}

pub fn list_item_with_text(text: impl Into<CompactString>) -> Node {
    LIST_ITEM.build().with_text(text)
}

// =============================================================================
// Tables
// =============================================================================

pub fn table() -> Node {
    TABLE.build()
}

/// A table whose first child is `<caption>caption</caption>`.
pub fn table_with_caption(caption: impl Into<CompactString>) -> Node {
    TABLE.build().with_child(CAPTION.build().with_text(caption))
}

pub fn table_row() -> Node {
    TABLE_ROW.build()
}

pub fn table_cell() -> Node {
    TABLE_CELL.build()
}

pub fn table_cell_with_text(text: impl Into<CompactString>) -> Node {
    TABLE_CELL.build().with_text(text)
}

pub fn table_header_cell() -> Node {
    TABLE_HEADER_CELL.build()
}

pub fn table_header_cell_with_text(text: impl Into<CompactString>) -> Node {
    TABLE_HEADER_CELL.build().with_text(text)
}
