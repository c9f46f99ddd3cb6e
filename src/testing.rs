//! Test helpers: render components to strings for assertions.

use crate::component::{Component, RenderContext};

/// Render a component to its HTML string with a fresh, empty context.
///
/// # Examples
///
/// ```
/// use gridweave::testing::render_to_string;
/// use gridweave::widgets::Item;
///
/// let html = render_to_string(&Item::new().with_text("Hello"));
/// assert!(html.contains("Hello"));
/// ```
pub fn render_to_string(component: &dyn Component) -> String {
    component.to_html()
}

/// The whitespace-joined class attribute a component renders with, using a
/// fresh, empty context.
pub fn class_string(component: &dyn Component) -> String {
    component.class_list(&RenderContext::new()).join()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Grid, Item};

    #[test]
    fn render_to_string_matches_to_html() {
        let grid = Grid::new().with_item(Item::new().with_text("x"));
        assert_eq!(render_to_string(&grid), grid.to_html());
    }

    #[test]
    fn class_string_for_item() {
        assert_eq!(class_string(&Item::new()), "item size_even");
    }

    #[test]
    fn class_string_for_grid() {
        assert_eq!(class_string(&Grid::new()), "grid align_left rowGap_m colGap_m");
    }
}
