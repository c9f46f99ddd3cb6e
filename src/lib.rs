//! # gridweave
//!
//! Responsive grid components that turn typed layout props into
//! deterministic CSS class lists.
//!
//! gridweave models a presentational grid as plain data: a [`widgets::Grid`]
//! holds alignment, gap, and sizing props, a [`widgets::Item`] holds a size
//! and its content, and rendering derives a class-name string for each and
//! emits one container element per component. Props are either a single
//! value or a per-breakpoint [`responsive::ResponsiveMap`], resolved with a
//! cascade that fills smaller breakpoints from larger ones. The CSS rules
//! bound to the emitted class tokens live in the consuming stylesheet.
//!
//! ## Core Systems
//!
//! - **[`breakpoint`]** — The nine ordered viewport size classes
//! - **[`responsive`]** — Per-breakpoint value maps and the cascade resolver
//! - **[`props`]** — Typed prop values: alignment, gaps, sizing
//! - **[`class_list`]** — Class token assembly and joining
//! - **[`component`]** — The `Component` trait and render context
//! - **[`html`]** — Child content nodes and HTML escaping
//! - **[`widgets`]** — The built-in components: `Grid`, `Item`
//! - **[`testing`]** — Render-to-string helpers for assertions

// Foundation
pub mod breakpoint;
pub mod responsive;

// Props and class names
pub mod class_list;
pub mod props;

// Components
pub mod component;
pub mod html;
pub mod widgets;

// Test helpers
pub mod testing;
