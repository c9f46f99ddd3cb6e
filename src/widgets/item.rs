//! Item component: one cell of a grid.
//!
//! Item renders one container element whose class list encodes its size,
//! wrapping arbitrary child content ([`crate::html::Node`]). An item
//! without its own size uses the size inherited from the surrounding grid,
//! falling back to `even`.

use crate::class_list::ClassList;
use crate::component::{Component, RenderContext};
use crate::html::{write_container_close, write_container_open, Node};
use crate::props::{Size, SizeProp};
use crate::responsive::Responsive;
use crate::widgets::grid::Grid;

const SIZE: &str = "size";

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// A grid cell holding text, raw markup, or nested grids.
///
/// Defaults: no id, no extra class, no declared size (renders as `even`
/// unless the surrounding grid provides one).
///
/// # Examples
///
/// ```
/// use gridweave::component::Component;
/// use gridweave::props::Size;
/// use gridweave::widgets::Item;
///
/// let item = Item::new().size(Size::Shrink).with_text("hello");
/// assert_eq!(item.to_html(), "<div class=\"item size_shrink\">hello</div>");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: String,
    class_name: String,
    size: Option<SizeProp>,
    children: Vec<Node>,
}

impl Item {
    /// Create an item with default props and no content.
    pub fn new() -> Self {
        Self {
            id: String::new(),
            class_name: String::new(),
            size: None,
            children: Vec::new(),
        }
    }

    /// Set the element id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set an extra class appended after the base class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class_name = class.into();
        self
    }

    /// Declare this item's size (builder).
    pub fn size(mut self, size: impl Into<SizeProp>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Append a child node (builder).
    pub fn with_child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append escaped text content (builder).
    pub fn with_text(self, content: impl Into<String>) -> Self {
        self.with_child(Node::text(content))
    }

    /// Append raw markup content (builder).
    pub fn with_raw(self, markup: impl Into<String>) -> Self {
        self.with_child(Node::raw(markup))
    }

    /// Append a nested grid (builder).
    pub fn with_grid(self, grid: Grid) -> Self {
        self.with_child(Node::Grid(grid))
    }

    /// The element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The declared size, if any.
    pub fn declared_size(&self) -> Option<&SizeProp> {
        self.size.as_ref()
    }

    /// The child nodes.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The size this item renders with: its own declaration, else the
    /// context default, else `even`.
    pub fn effective_size(&self, ctx: &RenderContext) -> SizeProp {
        self.size
            .clone()
            .or_else(|| ctx.default_size().cloned())
            .unwrap_or(Responsive::Value(Size::Even))
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Item {
    fn component_type(&self) -> &str {
        "Item"
    }

    fn class_list(&self, ctx: &RenderContext) -> ClassList {
        let mut classes = ClassList::new();
        classes.push("item");
        classes.push(self.class_name.clone());
        classes.push_responsive(SIZE, &self.effective_size(ctx));
        classes
    }

    fn render_html(&self, ctx: &RenderContext, out: &mut String) {
        write_container_open(out, &self.class_list(ctx), &self.id);
        for child in &self.children {
            child.render_html(out);
        }
        write_container_close(out);
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::Breakpoint;
    use crate::responsive::ResponsiveMap;

    fn classes(item: &Item) -> String {
        item.class_list(&RenderContext::new()).join()
    }

    #[test]
    fn component_type_is_item() {
        assert_eq!(Item::new().component_type(), "Item");
    }

    #[test]
    fn default_size_is_even() {
        assert_eq!(classes(&Item::new()), "item size_even");
    }

    #[test]
    fn default_equals_new() {
        assert_eq!(Item::default(), Item::new());
    }

    #[test]
    fn keyword_size_token() {
        assert_eq!(classes(&Item::new().size(Size::Grow)), "item size_grow");
        assert_eq!(classes(&Item::new().size(Size::Shrink)), "item size_shrink");
    }

    #[test]
    fn column_size_token() {
        let item = Item::new().size(Size::columns(4).unwrap());
        assert_eq!(classes(&item), "item size_4");
    }

    #[test]
    fn responsive_size_tokens() {
        let map = ResponsiveMap::new()
            .with(Breakpoint::M, Size::Columns(6))
            .with(Breakpoint::Xs, Size::Columns(12));
        let joined = classes(&Item::new().size(Responsive::Map(map)));
        assert_eq!(
            joined,
            "item size_xxxl_6 size_xxl_6 size_xl_6 size_l_6 size_m_6 \
             size_s_12 size_xs_12 size_xxs_12 size_xxxs_12"
        );
    }

    #[test]
    fn empty_responsive_size_emits_no_tokens() {
        let item = Item::new().size(Responsive::Map(ResponsiveMap::new()));
        assert_eq!(classes(&item), "item");
    }

    #[test]
    fn with_class_appends_after_base() {
        let item = Item::new().with_class("hero");
        assert_eq!(classes(&item), "item hero size_even");
    }

    #[test]
    fn effective_size_prefers_own_declaration() {
        let ctx = RenderContext::with_default_size(Responsive::Value(Size::Columns(6)));
        let item = Item::new().size(Size::Columns(3));
        assert_eq!(item.effective_size(&ctx), Responsive::Value(Size::Columns(3)));
    }

    #[test]
    fn effective_size_inherits_from_context() {
        let ctx = RenderContext::with_default_size(Responsive::Value(Size::Columns(6)));
        assert_eq!(
            Item::new().effective_size(&ctx),
            Responsive::Value(Size::Columns(6))
        );
    }

    #[test]
    fn effective_size_falls_back_to_even() {
        assert_eq!(
            Item::new().effective_size(&RenderContext::new()),
            Responsive::Value(Size::Even)
        );
    }

    #[test]
    fn render_text_is_escaped() {
        let html = Item::new().with_text("1 < 2").to_html();
        assert_eq!(html, "<div class=\"item size_even\">1 &lt; 2</div>");
    }

    #[test]
    fn render_raw_passes_through() {
        let html = Item::new().with_raw("<p>hi</p>").to_html();
        assert_eq!(html, "<div class=\"item size_even\"><p>hi</p></div>");
    }

    #[test]
    fn render_with_id() {
        let html = Item::new().with_id("cell-1").to_html();
        assert!(html.contains(" id=\"cell-1\""));
    }

    #[test]
    fn render_multiple_children_in_order() {
        let html = Item::new()
            .with_raw("<p>first</p>")
            .with_text("second")
            .to_html();
        assert!(html.contains("<p>first</p>second"));
    }

    #[test]
    fn nested_grid_does_not_inherit_outer_size() {
        // The outer grid's size applies to its immediate items only.
        let nested = Grid::new().with_item(Item::new());
        let outer = Grid::new()
            .size(Size::Columns(4))
            .with_item(Item::new().with_grid(nested));
        let html = outer.to_html();
        assert!(html.contains("size_4"));
        // The inner item falls back to the default, not the outer size.
        assert!(html.contains("size_even"));
    }

    #[test]
    fn accessors() {
        let item = Item::new().with_id("x").size(Size::Even).with_text("t");
        assert_eq!(item.id(), "x");
        assert_eq!(item.declared_size(), Some(&Responsive::Value(Size::Even)));
        assert_eq!(item.children().len(), 1);
    }
}
