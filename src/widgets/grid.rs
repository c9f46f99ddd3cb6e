//! Grid component: a row of items with alignment, gaps, and default sizing.
//!
//! Grid renders one container element whose class list encodes its
//! alignment and gap props, then renders its items inside it. A grid-level
//! `size` prop becomes the default size for items that do not declare their
//! own.

use crate::class_list::ClassList;
use crate::component::{Component, RenderContext};
use crate::html::{write_container_close, write_container_open};
use crate::props::{AlignProp, Gap, GapProp, SizeProp};
use crate::responsive::Responsive;
use crate::widgets::item::Item;

/// Token prefixes bound to the external stylesheet.
const ALIGN: &str = "align";
const ROW_GAP: &str = "rowGap";
const COL_GAP: &str = "colGap";

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A grid of [`Item`]s.
///
/// Defaults: no id, no extra class, alignment `left`, both gaps `m`, no
/// grid-level size.
///
/// # Examples
///
/// ```
/// use gridweave::component::Component;
/// use gridweave::props::Size;
/// use gridweave::widgets::{Grid, Item};
///
/// let grid = Grid::new()
///     .size(Size::Even)
///     .with_item(Item::new().with_text("a"))
///     .with_item(Item::new().with_text("b"));
/// let html = grid.to_html();
/// assert!(html.contains("size_even"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    id: String,
    class_name: String,
    align: AlignProp,
    row_gap: GapProp,
    col_gap: GapProp,
    size: Option<SizeProp>,
    children: Vec<Item>,
}

impl Grid {
    /// Create a grid with default props and no items.
    pub fn new() -> Self {
        Self {
            id: String::new(),
            class_name: String::new(),
            align: AlignProp::default(),
            row_gap: Responsive::Value(Gap::default()),
            col_gap: Responsive::Value(Gap::default()),
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

    /// Set the column alignment (builder).
    pub fn align(mut self, align: impl Into<AlignProp>) -> Self {
        self.align = align.into();
        self
    }

    /// Set the row gap (builder).
    pub fn row_gap(mut self, gap: impl Into<GapProp>) -> Self {
        self.row_gap = gap.into();
        self
    }

    /// Set the column gap (builder).
    pub fn col_gap(mut self, gap: impl Into<GapProp>) -> Self {
        self.col_gap = gap.into();
        self
    }

    /// Set the default size for items in this grid (builder).
    pub fn size(mut self, size: impl Into<SizeProp>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Append an item (builder).
    pub fn with_item(mut self, item: Item) -> Self {
        self.children.push(item);
        self
    }

    /// Append several items (builder).
    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.children.extend(items);
        self
    }

    /// The element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The items in this grid.
    pub fn items(&self) -> &[Item] {
        &self.children
    }

    /// The number of items.
    pub fn item_count(&self) -> usize {
        self.children.len()
    }

    /// The grid-level default size, if set.
    pub fn default_size(&self) -> Option<&SizeProp> {
        self.size.as_ref()
    }

    /// The context this grid's children render in.
    fn child_context(&self) -> RenderContext {
        match &self.size {
            Some(size) => RenderContext::with_default_size(size.clone()),
            None => RenderContext::new(),
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Grid {
    fn component_type(&self) -> &str {
        "Grid"
    }

    fn class_list(&self, _ctx: &RenderContext) -> ClassList {
        let mut classes = ClassList::new();
        classes.push("grid");
        classes.push(self.class_name.clone());

        match &self.align {
            AlignProp::Value(align) => classes.push_token(ALIGN, align),
            AlignProp::Responsive(map) => {
                let resolved = map.resolve();
                for (breakpoint, flag) in resolved.iter() {
                    classes.push_breakpoint_token(ALIGN, breakpoint, flag);
                }
            }
        }

        classes.push_responsive(ROW_GAP, &self.row_gap);
        classes.push_responsive(COL_GAP, &self.col_gap);
        classes
    }

    fn render_html(&self, ctx: &RenderContext, out: &mut String) {
        write_container_open(out, &self.class_list(ctx), &self.id);
        let child_ctx = self.child_context();
        for item in &self.children {
            item.render_html(&child_ctx, out);
        }
        write_container_close(out);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
