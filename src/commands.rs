//! Handlers for the command line subcommands.

use std::fmt::Write as _;
use std::io::{self, Write as _};
use std::path::Path;

use anyhow::{bail, Context};
use tracing::{info, warn};
use wardrobe_config::Config;

use crate::cli::{EditOp, Sub};
use crate::generator::CommandGenerator;
use crate::interaction::Schematic;
use crate::layout::{Design, Dimensions, Edit, ItemUpdate, Options, Target};
use crate::studio::{SessionFile, Studio};

pub fn run(sub: Sub, config: &Config) -> anyhow::Result<()> {
    let options = Options::from_config(config);

    match sub {
        Sub::Generate {
            width,
            height,
            depth,
            unit,
            output,
        } => {
            let mut generator = CommandGenerator::from_config(&config.generator);
            let mut studio = Studio::new(options);
            let dims = Dimensions::new(width, height, depth, unit);
            studio.generate_layouts(&mut generator, dims)?;

            let session = studio
                .to_session()
                .context("generator returned no dimensions")?;
            match output {
                Some(path) => {
                    session.save(&path)?;
                    info!("saved {} designs to {}", session.designs.len(), path.display());
                }
                None => {
                    let json = serde_json::to_string_pretty(&session)?;
                    writeln!(io::stdout(), "{json}")?;
                }
            }
        }
        Sub::Show { file, design } => {
            let session = SessionFile::load(&file)?;
            let mut out = String::new();
            for d in &session.designs {
                if design.as_ref().is_some_and(|id| *id != d.id) {
                    continue;
                }
                out.push_str(&describe(d, &session.dimensions));
                out.push('\n');
            }
            if out.is_empty() {
                bail!("no matching designs in {}", file.display());
            }
            io::stdout().write_all(out.as_bytes())?;
        }
        Sub::Edit {
            file,
            design,
            output,
            op,
        } => {
            let session = SessionFile::load(&file)?;
            let mut studio = Studio::from_session(session, options);
            if studio.design(&design).is_none() {
                bail!("no design with id {design:?} in {}", file.display());
            }

            if edit(&mut studio, &design, op)? {
                info!("updated design {design}");
            } else {
                info!("design {design} unchanged");
            }

            let path = output.as_deref().unwrap_or(&file);
            save(&studio, path)?;
        }
        Sub::Check { file } => {
            let session = SessionFile::load(&file)?;
            if !session.dimensions.is_valid() {
                bail!("invalid dimensions: {:?}", session.dimensions);
            }

            let mut errors = 0;
            for d in &session.designs {
                for violation in d.layout.check_invariants(&options) {
                    if violation.is_error() {
                        errors += 1;
                        println!("{}: error: {violation}", d.id);
                    } else {
                        println!("{}: warning: {violation}", d.id);
                    }
                }
            }

            if errors > 0 {
                bail!("found {errors} errors in {}", file.display());
            }
            info!("{} designs are valid", session.designs.len());
        }
        Sub::Render { file, design } => {
            let session = SessionFile::load(&file)?;
            let mut studio = Studio::from_session(session, options);
            let mut generator = CommandGenerator::from_config(&config.generator);
            let image = studio.request_render(&mut generator, &design)?;
            println!("{image}");
        }
    }

    Ok(())
}

fn save(studio: &Studio, path: &Path) -> anyhow::Result<()> {
    let session = studio.to_session().context("session has no dimensions")?;
    session.save(path)
}

/// Applies `op` to the design with `id`, returning whether it changed.
pub fn edit(studio: &mut Studio, id: &str, op: EditOp) -> anyhow::Result<bool> {
    let edit = match op {
        EditOp::InsertItem {
            column,
            kind,
            index,
        } => Edit::InsertItem {
            column,
            kind,
            index,
        },
        EditOp::DeleteItem { column, item } => Edit::DeleteItem {
            target: target(column)?,
            item,
        },
        EditOp::MoveItem {
            from_column,
            from_item,
            to_column,
            to_item,
        } => Edit::MoveItem {
            from_column,
            from_item,
            to_column,
            to_item,
        },
        EditOp::ResizeColumns { column, delta } => Edit::ResizeColumnPair { column, delta },
        EditOp::ResizeItems {
            column,
            item,
            delta,
        } => Edit::ResizeItemPair {
            column,
            item,
            delta,
        },
        EditOp::Equalize => Edit::EqualizeColumns,
        EditOp::UpdateItem {
            column,
            item,
            kind,
            width,
            height,
        } => {
            let update = ItemUpdate {
                kind,
                width,
                height,
            };
            if update.is_empty() {
                warn!("update-item without --kind, --width or --height does nothing");
            }
            Edit::UpdateItem {
                target: target(column)?,
                item,
                update,
            }
        }
        EditOp::SetFeatures { features } => Edit::UpdateFeatures(features),
        EditOp::AddFeature { text } => return Ok(studio.add_feature(id, &text)),
        EditOp::RemoveFeature { index } => return Ok(studio.remove_feature(id, index)),
    };

    Ok(studio.apply(id, &edit))
}

fn target(column: isize) -> anyhow::Result<Target> {
    Target::from_index(column).with_context(|| {
        format!("invalid column index {column}, use -1 for the top shelf")
    })
}

/// Summary of a design followed by the real-unit sizes of its parts.
pub fn describe(design: &Design, dims: &Dimensions) -> String {
    let schematic = Schematic::new(dims, &design.layout);
    let unit = dims.unit;

    let mut out = design.summary();
    let _ = writeln!(
        out,
        "  size: {} x {} x {} {unit}",
        dims.round(dims.width),
        dims.round(dims.height),
        dims.round(dims.depth),
    );

    if design.layout.has_top_shelf() {
        let height = schematic.top_shelf_real_height();
        let _ = writeln!(out, "  top shelf: {} {unit} high", dims.round(height));
    }

    for (col_idx, column) in design.layout.columns.iter().enumerate() {
        if let Some(rect) = schematic.column_rect(col_idx) {
            let width = schematic.real_width(rect.w);
            let _ = writeln!(out, "  column {col_idx}: {} {unit} wide", dims.round(width));
        }

        for (item_idx, item) in column.items.iter().enumerate() {
            let Some((width, height)) = schematic.item_real_size(col_idx, item_idx) else {
                continue;
            };
            let _ = writeln!(
                out,
                "    {}: {} x {} {unit}",
                item.label,
                dims.round(width),
                dims.round(height),
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Column, Item, Layout, SectionType, Unit};

    fn studio() -> Studio {
        let layout = Layout::new(vec![
            Column::with_items(
                50.,
                vec![
                    Item::new(SectionType::Shelf, 40.),
                    Item::new(SectionType::Drawer, 60.),
                ],
            ),
            Column::with_items(50., vec![Item::new(SectionType::HangingRod, 100.)]),
        ])
        .with_top_shelf(10.);
        let session = SessionFile {
            dimensions: Dimensions::new(2030., 1000., 600., Unit::Mm),
            designs: vec![Design::new("d1", "Classic", layout)],
        };
        Studio::from_session(session, Options::default())
    }

    #[test]
    fn edit_ops_reach_the_design() {
        let mut studio = studio();
        assert!(edit(&mut studio, "d1", EditOp::DeleteItem { column: -1, item: 0 }).unwrap());
        assert!(!studio.design("d1").unwrap().layout.has_top_shelf());

        assert!(edit(
            &mut studio,
            "d1",
            EditOp::ResizeColumns {
                column: 0,
                delta: -20.
            }
        )
        .unwrap());
        assert!(edit(&mut studio, "d1", EditOp::Equalize).unwrap());
        assert!(!edit(&mut studio, "d1", EditOp::Equalize).unwrap());

        assert!(edit(&mut studio, "d1", EditOp::AddFeature { text: "Mirror".into() }).unwrap());
        assert_eq!(studio.design("d1").unwrap().features, ["Mirror"]);
    }

    #[test]
    fn bad_column_index_is_an_error() {
        let mut studio = studio();
        assert!(edit(&mut studio, "d1", EditOp::DeleteItem { column: -2, item: 0 }).is_err());
    }

    #[test]
    fn describe_lists_real_sizes() {
        let studio = studio();
        let design = studio.design("d1").unwrap();
        let text = describe(design, studio.dimensions().unwrap());
        assert!(text.contains("  size: 2030 x 1000 x 600 mm\n"), "{text}");
        assert!(text.contains("  top shelf: 100 mm high\n"), "{text}");
        assert!(text.contains("  column 0: 1000 mm wide\n"), "{text}");
        assert!(text.contains("    Added Drawer: 1000 x 534 mm\n"), "{text}");
        assert!(design
            .layout
            .check_invariants(studio.options())
            .is_empty());
    }
}
