//! Component trait: class-list derivation and HTML rendering.
//!
//! The `Component` trait is the rendering seam shared by [`crate::widgets`].
//! Every component knows its type name, derives its class list from its
//! props, and writes exactly one container element. The [`RenderContext`]
//! carries the one piece of inherited state — a parent grid's default size —
//! as an explicit parameter instead of mutating child props.

use crate::class_list::ClassList;
use crate::props::SizeProp;

// ---------------------------------------------------------------------------
// RenderContext
// ---------------------------------------------------------------------------

/// Per-render state passed from a parent component to its children.
///
/// A fresh context is created for each render call; nothing outlives the
/// call. A grid with a `size` prop renders its children with that size as
/// the context default, and items without their own size pick it up.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    default_size: Option<SizeProp>,
}

impl RenderContext {
    /// A context with no inherited state.
    pub fn new() -> Self {
        Self { default_size: None }
    }

    /// A context carrying a default size for children.
    pub fn with_default_size(size: SizeProp) -> Self {
        Self {
            default_size: Some(size),
        }
    }

    /// The inherited default size, if any.
    pub fn default_size(&self) -> Option<&SizeProp> {
        self.default_size.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Component trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all renderable components.
///
/// Object-safe: methods take `&self` and write into caller-owned buffers.
pub trait Component {
    /// The component type name (e.g. "Grid", "Item").
    fn component_type(&self) -> &str;

    /// Derive the class list from this component's props.
    fn class_list(&self, ctx: &RenderContext) -> ClassList;

    /// Write this component's HTML into `out`.
    fn render_html(&self, ctx: &RenderContext, out: &mut String);

    /// Render to a string with a fresh, empty context.
    fn to_html(&self) -> String {
        let mut out = String::new();
        self.render_html(&RenderContext::new(), &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::Size;
    use crate::responsive::Responsive;

    #[test]
    fn context_default_is_empty() {
        let ctx = RenderContext::new();
        assert!(ctx.default_size().is_none());
        assert!(RenderContext::default().default_size().is_none());
    }

    #[test]
    fn context_carries_default_size() {
        let ctx = RenderContext::with_default_size(Responsive::Value(Size::Even));
        assert_eq!(ctx.default_size(), Some(&Responsive::Value(Size::Even)));
    }

    #[test]
    fn component_is_object_safe() {
        struct Fixed;

        impl Component for Fixed {
            fn component_type(&self) -> &str {
                "Fixed"
            }

            fn class_list(&self, _ctx: &RenderContext) -> ClassList {
                let mut classes = ClassList::new();
                classes.push("fixed");
                classes
            }

            fn render_html(&self, _ctx: &RenderContext, out: &mut String) {
                out.push_str("<div class=\"fixed\"></div>");
            }
        }

        let component: Box<dyn Component> = Box::new(Fixed);
        assert_eq!(component.component_type(), "Fixed");
        assert_eq!(component.to_html(), "<div class=\"fixed\"></div>");
    }
}
