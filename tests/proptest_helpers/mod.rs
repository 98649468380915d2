#![allow(dead_code)]

use std::collections::BTreeMap;

use gostyle::model::{AnnotationRecord, AnnotationSet, GoId, HexColor, Opacity};
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// `(color, opacity)` keyed by GO ID, ignoring order.
pub fn content(set: &AnnotationSet) -> BTreeMap<u64, (String, f64)> {
    set.iter()
        .map(|r| {
            (
                r.id.as_u64(),
                (r.color.as_str().to_string(), r.opacity.value()),
            )
        })
        .collect()
}

pub fn arb_go_id() -> BoxedStrategy<GoId> {
    (1u64..=20_000)
        .prop_map(|id| GoId::new(id).expect("positive id"))
        .boxed()
}

pub fn arb_color() -> BoxedStrategy<HexColor> {
    ("#?", "[0-9a-fA-F]{6}")
        .prop_map(|(hash, digits)| {
            HexColor::parse(&format!("{}{}", hash, digits)).expect("valid hex color")
        })
        .boxed()
}

pub fn arb_opacity() -> BoxedStrategy<Opacity> {
    prop_oneof![
        Just(0.0),
        Just(1.0),
        (0u32..=10).prop_map(|tenths| tenths as f64 / 10.0),
        0.0f64..=1.0,
    ]
    .prop_map(|v| Opacity::new(v).expect("opacity in range"))
    .boxed()
}

pub fn arb_record() -> BoxedStrategy<AnnotationRecord> {
    (arb_go_id(), arb_color(), arb_opacity())
        .prop_map(|(id, color, opacity)| AnnotationRecord::new(id, color, opacity))
        .boxed()
}

/// A set of up to `max_records` records; duplicate IDs from the generator are dropped.
pub fn arb_set(max_records: usize) -> BoxedStrategy<AnnotationSet> {
    proptest::collection::vec(arb_record(), 0..=max_records)
        .prop_map(|records| {
            let mut set = AnnotationSet::new();
            for record in records {
                let _ = set.add(record);
            }
            set
        })
        .boxed()
}

/// A non-empty set whose IDs are drawn from a small range, so two sets overlap often.
pub fn arb_overlapping_set(max_records: usize) -> BoxedStrategy<AnnotationSet> {
    proptest::collection::vec(
        ((1u64..=12), arb_color(), arb_opacity()),
        1..=max_records,
    )
    .prop_map(|records| {
        let mut set = AnnotationSet::new();
        for (id, color, opacity) in records {
            let id = GoId::new(id).expect("positive id");
            let _ = set.add(AnnotationRecord::new(id, color, opacity));
        }
        set
    })
    .boxed()
}
