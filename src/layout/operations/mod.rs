//! Editing operations on a [`Layout`](super::Layout).
//!
//! ```text
//! operations/
//! ├── mod.rs       - This file
//! ├── add.rs       - Insert a new item
//! ├── remove.rs    - Delete an item or the top shelf
//! ├── move_item.rs - Move an item within or across columns
//! ├── resize.rs    - Adjacent pair resizing and column equalizing
//! └── update.rs    - Numeric edits of an item, a column or the top shelf
//! ```
//!
//! Every method returns whether the layout changed.

mod add;
mod move_item;
mod remove;
mod resize;
mod update;
