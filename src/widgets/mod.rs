//! Built-in components: Grid and Item.

pub mod grid;
pub mod item;

pub use grid::Grid;
pub use item::Item;
