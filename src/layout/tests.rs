use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use proptest_derive::Arbitrary;

use super::normalize::{self, FULL};
use super::*;


impl Layout {
    pub fn verify_invariants(&self, options: &Options) {
        if !self.columns.is_empty() {
            assert_abs_diff_eq!(self.width_total(), FULL, epsilon = 0.01);
        }

        for column in &self.columns {
            column.verify_invariants();
        }

        if let Some(top) = self.top_shelf_height_percentage {
            assert!(
                (0. ..=options.top_shelf_max).contains(&top),
                "top shelf must stay within [0, {}]: {top}",
                options.top_shelf_max
            );
        }

        let errors: Vec<_> = self
            .check_invariants(options)
            .into_iter()
            .filter(Violation::is_error)
            .collect();
        assert!(errors.is_empty(), "{errors:?}");
    }
}

fn dims() -> Dimensions {
    Dimensions::new(2000., 2400., 600., Unit::Mm)
}

fn arbitrary_kind() -> impl Strategy<Value = SectionType> {
    prop::sample::select(&SectionType::ALL[..])
}

fn arbitrary_column() -> impl Strategy<Value = Column> {
    prop::collection::vec((arbitrary_kind(), 1f64..100.), 0..5).prop_map(|items| {
        let items = items
            .into_iter()
            .map(|(kind, height)| Item::new(kind, height))
            .collect();
        let mut column = Column::with_items(0., items);
        normalize::renormalize(&mut column.items, 0.01, normalize::Degenerate::EvenSplit);
        column
    })
}

fn arbitrary_layout() -> impl Strategy<Value = Layout> {
    (
        prop::collection::vec(arbitrary_column(), 1..5),
        prop::option::of(0f64..=60.),
    )
        .prop_map(|(mut columns, top_shelf)| {
            normalize::even_split(&mut columns);
            Layout {
                columns,
                top_shelf_height_percentage: top_shelf,
            }
        })
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Op {
    InsertItem {
        #[proptest(strategy = "0..5usize")]
        column: usize,
        #[proptest(strategy = "arbitrary_kind()")]
        kind: SectionType,
        #[proptest(strategy = "prop::option::of(0..7usize)")]
        index: Option<usize>,
    },
    DeleteItem {
        #[proptest(strategy = "-1..5isize")]
        column: isize,
        #[proptest(strategy = "0..6usize")]
        item: usize,
    },
    MoveItem {
        #[proptest(strategy = "0..5usize")]
        from_column: usize,
        #[proptest(strategy = "0..6usize")]
        from_item: usize,
        #[proptest(strategy = "0..5usize")]
        to_column: usize,
        #[proptest(strategy = "0..7usize")]
        to_item: usize,
    },
    ResizeColumnPair {
        #[proptest(strategy = "0..4usize")]
        column: usize,
        #[proptest(strategy = "-120f64..120.")]
        delta: f64,
    },
    ResizeItemPair {
        #[proptest(strategy = "0..5usize")]
        column: usize,
        #[proptest(strategy = "0..5usize")]
        item: usize,
        #[proptest(strategy = "-120f64..120.")]
        delta: f64,
    },
    EqualizeColumns,
    UpdateItem {
        #[proptest(strategy = "-1..5isize")]
        column: isize,
        #[proptest(strategy = "0..6usize")]
        item: usize,
        #[proptest(strategy = "prop::option::of(arbitrary_kind())")]
        kind: Option<SectionType>,
        #[proptest(strategy = "prop::option::of(-500f64..3000.)")]
        width: Option<f64>,
        #[proptest(strategy = "prop::option::of(-500f64..3000.)")]
        height: Option<f64>,
    },
}

impl Op {
    fn apply(self, layout: &mut Layout, options: &Options) -> bool {
        match self {
            Op::InsertItem {
                column,
                kind,
                index,
            } => layout.insert_item(column, kind, index, options),
            Op::DeleteItem { column, item } => match Target::from_index(column) {
                Some(target) => layout.delete_item(target, item, options),
                None => false,
            },
            Op::MoveItem {
                from_column,
                from_item,
                to_column,
                to_item,
            } => layout.move_item(from_column, from_item, to_column, to_item, options),
            Op::ResizeColumnPair { column, delta } => {
                layout.resize_column_pair(column, delta, options)
            }
            Op::ResizeItemPair {
                column,
                item,
                delta,
            } => layout.resize_item_pair(column, item, delta, options),
            Op::EqualizeColumns => layout.equalize_columns(),
            Op::UpdateItem {
                column,
                item,
                kind,
                width,
                height,
            } => match Target::from_index(column) {
                Some(target) => {
                    let update = ItemUpdate {
                        kind,
                        width,
                        height,
                    };
                    layout.update_item(target, item, &update, &dims(), options)
                }
                None => false,
            },
        }
    }
}

/// Checks the properties specific to one operation by comparing the layout before and after.
fn verify_op(op: Op, before: &Layout, after: &Layout, changed: bool, options: &Options) {
    if !changed {
        assert_eq!(before, after, "{op:?} reported no change");
    }

    match op {
        Op::ResizeColumnPair { column, .. } if changed => {
            let floor = options.column_width_floor;
            for col in &after.columns[column..=column + 1] {
                assert!(col.width_percentage >= floor - 1e-9);
            }
        }
        Op::ResizeItemPair { column, item, .. } if changed => {
            let floor = options.item_height_floor;
            for it in &after.columns[column].items[item..=item + 1] {
                assert!(it.height_percentage >= floor - 1e-9);
            }
        }
        Op::MoveItem {
            from_column,
            from_item,
            to_column,
            ..
        } => {
            let source_existed = before.item(from_column, from_item).is_some();
            let discarded = source_existed && to_column >= before.columns.len();
            assert_eq!(
                after.item_count(),
                before.item_count() - usize::from(discarded)
            );
        }
        Op::EqualizeColumns => {
            let mut again = after.clone();
            again.equalize_columns();
            assert_eq!(&again, after);
        }
        _ => (),
    }
}

#[track_caller]
fn check_ops(layout: Layout, ops: impl IntoIterator<Item = Op>) -> Layout {
    let options = Options::default();
    let mut layout = layout;
    layout.verify_invariants(&options);

    for op in ops {
        let before = layout.clone();
        let changed = op.apply(&mut layout, &options);
        layout.verify_invariants(&options);
        verify_op(op, &before, &layout, changed, &options);
    }

    layout
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: if std::env::var_os("RUN_SLOW_TESTS").is_none() {
            eprintln!("ignoring slow test");
            0
        } else {
            ProptestConfig::default().cases
        },
        ..ProptestConfig::default()
    })]

    #[test]
    fn random_operations_dont_break_layout(
        layout in arbitrary_layout(),
        ops: Vec<Op>,
    ) {
        check_ops(layout, ops);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_operations_quick(
        layout in arbitrary_layout(),
        ops in prop::collection::vec(any::<Op>(), 0..20),
    ) {
        check_ops(layout, ops);
    }

    #[test]
    fn tiny_resizes_are_noops(
        layout in arbitrary_layout(),
        column in 0..4usize,
        delta in -0.0099f64..0.0099,
    ) {
        let options = Options::default();
        let mut resized = layout.clone();
        prop_assert!(!resized.resize_column_pair(column, delta, &options));
        prop_assert_eq!(&resized, &layout);

        // A pair member below the floor gets lifted to it regardless of the delta.
        let above_floor = layout.column(column).map_or(true, |col| {
            col.items
                .iter()
                .take(2)
                .all(|item| item.height_percentage >= options.item_height_floor)
        });
        if above_floor {
            prop_assert!(!resized.resize_item_pair(column, 0, delta, &options));
            prop_assert_eq!(&resized, &layout);
        }
    }
}

#[test]
fn operations_on_empty_layout() {
    let layout = Layout::default();
    let layout = check_ops(
        layout,
        [
            Op::InsertItem {
                column: 0,
                kind: SectionType::Shelf,
                index: None,
            },
            Op::DeleteItem { column: 0, item: 0 },
            Op::DeleteItem { column: -1, item: 0 },
            Op::ResizeColumnPair {
                column: 0,
                delta: 5.,
            },
            Op::EqualizeColumns,
        ],
    );
    assert_eq!(layout, Layout::default());
}

#[test]
fn long_sequence_keeps_sums() {
    let layout = Layout::new(vec![
        Column::with_items(50., vec![Item::new(SectionType::HangingRod, 100.)]),
        Column::with_items(
            50.,
            vec![
                Item::new(SectionType::Shelf, 50.),
                Item::new(SectionType::Drawer, 50.),
            ],
        ),
    ]);

    let mut ops = vec![];
    for i in 0..30 {
        ops.push(Op::InsertItem {
            column: i % 2,
            kind: SectionType::ALL[i % SectionType::ALL.len()],
            index: Some(i % 3),
        });
        ops.push(Op::ResizeItemPair {
            column: i % 2,
            item: 0,
            delta: if i % 2 == 0 { 7.5 } else { -3. },
        });
        ops.push(Op::MoveItem {
            from_column: 0,
            from_item: 0,
            to_column: 1,
            to_item: i % 4,
        });
        ops.push(Op::ResizeColumnPair {
            column: 0,
            delta: if i % 3 == 0 { 20. } else { -11. },
        });
    }

    let layout = check_ops(layout, ops);
    assert_eq!(layout.item_count(), 33);
}
