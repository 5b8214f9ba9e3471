//! Item height operations within a column.
//!
//! ```text
//! sizing/
//! ├── mod.rs    - This file (submodule declarations)
//! └── height.rs - Pairwise and numeric item height changes
//! ```

mod height;
