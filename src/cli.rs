use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::layout::{SectionType, Unit};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(subcommand_value_name = "SUBCOMMAND")]
#[command(subcommand_help_heading = "Subcommands")]
pub struct Cli {
    /// Path to config file (default: `$XDG_CONFIG_HOME/wardrobe/config.kdl`).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Sub,
}

#[derive(Subcommand)]
pub enum Sub {
    /// Generate designs for a wardrobe and save them as a session file.
    Generate {
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
        #[arg(long)]
        depth: f64,
        /// Unit of the dimensions: mm or ft.
        #[arg(long, default_value = "mm")]
        unit: Unit,
        /// Where to write the session (default: stdout).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the designs of a session with their real-unit sizes.
    Show {
        file: PathBuf,
        /// Only show this design.
        #[arg(short, long)]
        design: Option<String>,
    },
    /// Apply one edit to a design and save the session.
    Edit {
        file: PathBuf,
        #[arg(short, long)]
        design: String,
        /// Where to write the result (default: overwrite FILE).
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(subcommand)]
        op: EditOp,
    },
    /// Validate the layouts of a session.
    Check { file: PathBuf },
    /// Render a photorealistic image of a design.
    Render {
        file: PathBuf,
        #[arg(short, long)]
        design: String,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum EditOp {
    /// Add an item of the given type to a column.
    InsertItem {
        #[arg(long)]
        column: usize,
        /// Shelf, drawer, hanging-rod, long-shelf, shoe-rack or empty.
        #[arg(long)]
        kind: SectionType,
        /// Position in the column (default: bottom).
        #[arg(long)]
        index: Option<usize>,
    },
    /// Remove an item; column -1 removes the top shelf.
    DeleteItem {
        #[arg(long, allow_negative_numbers = true)]
        column: isize,
        #[arg(long, default_value_t = 0)]
        item: usize,
    },
    /// Move an item to another position.
    MoveItem {
        #[arg(long)]
        from_column: usize,
        #[arg(long)]
        from_item: usize,
        #[arg(long)]
        to_column: usize,
        #[arg(long)]
        to_item: usize,
    },
    /// Move width from the column's right neighbour into it.
    ResizeColumns {
        #[arg(long)]
        column: usize,
        /// Percent of width; negative values shrink the column.
        #[arg(long, allow_negative_numbers = true)]
        delta: f64,
    },
    /// Move height from the item below into the item.
    ResizeItems {
        #[arg(long)]
        column: usize,
        #[arg(long)]
        item: usize,
        /// Percent of height; negative values shrink the item.
        #[arg(long, allow_negative_numbers = true)]
        delta: f64,
    },
    /// Give all columns the same width.
    Equalize,
    /// Change an item's type or real-unit size; column -1 is the top shelf.
    UpdateItem {
        #[arg(long, allow_negative_numbers = true)]
        column: isize,
        #[arg(long, default_value_t = 0)]
        item: usize,
        #[arg(long)]
        kind: Option<SectionType>,
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
    },
    /// Replace the feature list.
    SetFeatures { features: Vec<String> },
    AddFeature { text: String },
    RemoveFeature { index: usize },
}
