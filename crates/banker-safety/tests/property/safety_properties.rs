//! Property tests for the safety checker: outcome shape, determinism,
//! tie-breaking, and need round-trip.

use proptest::prelude::*;

use banker_core::config::CheckerConfig;
use banker_core::models::SystemSnapshot;
use banker_safety::{is_safe_sequence, SafetyChecker, TraceStep};

/// Random valid snapshot: allocation ≤ max_need cell-wise.
fn snapshot_strategy() -> impl Strategy<Value = SystemSnapshot> {
    (1_usize..8, 1_usize..5).prop_flat_map(|(p, r)| {
        (
            prop::collection::vec(prop::collection::vec((0_i64..6, 0_i64..6), r), p),
            prop::collection::vec(0_i64..8, r),
        )
            .prop_map(|(cells, available)| {
                let allocation: Vec<Vec<i64>> = cells
                    .iter()
                    .map(|row| row.iter().map(|&(a, _)| a).collect())
                    .collect();
                let max_need: Vec<Vec<i64>> = cells
                    .iter()
                    .map(|row| row.iter().map(|&(a, extra)| a + extra).collect())
                    .collect();
                SystemSnapshot::indexed(&allocation, &max_need, &available).unwrap()
            })
    })
}

proptest! {
    #[test]
    fn outcome_is_full_permutation_or_empty(snapshot in snapshot_strategy()) {
        let result = SafetyChecker::default().check(&snapshot).unwrap();
        let p = snapshot.process_count();
        if result.safe {
            let mut sorted = result.order.clone();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..p).collect::<Vec<_>>());
            prop_assert!(result.blocked.is_empty());
            prop_assert!(is_safe_sequence(&snapshot, &result.order));
        } else {
            prop_assert!(result.order.is_empty());
            prop_assert!(!result.blocked.is_empty());
        }
    }

    #[test]
    fn repeated_checks_are_identical(snapshot in snapshot_strategy()) {
        let checker = SafetyChecker::default();
        let first = checker.check(&snapshot).unwrap();
        let second = checker.check(&snapshot).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn each_step_picks_the_lowest_eligible_index(snapshot in snapshot_strategy()) {
        let result = SafetyChecker::default().check(&snapshot).unwrap();
        let need = snapshot.need();
        let mut finished = vec![false; snapshot.process_count()];
        for step in &result.trace {
            if let TraceStep::Completed { process, work_before, .. } = step {
                for i in 0..*process {
                    let eligible = !finished[i]
                        && need.row(i).iter().zip(work_before).all(|(n, w)| n <= w);
                    prop_assert!(!eligible, "P{} was eligible before P{}", i, process);
                }
                finished[*process] = true;
            }
        }
    }

    #[test]
    fn trace_setting_never_changes_the_verdict(snapshot in snapshot_strategy()) {
        let traced = SafetyChecker::default().check(&snapshot).unwrap();
        let quiet = SafetyChecker::new(CheckerConfig {
            record_trace: Some(false),
            ..Default::default()
        })
        .check(&snapshot)
        .unwrap();
        let verbose = SafetyChecker::new(CheckerConfig {
            verbose_trace: Some(true),
            ..Default::default()
        })
        .check(&snapshot)
        .unwrap();
        prop_assert_eq!(&traced.order, &quiet.order);
        prop_assert_eq!(&traced.order, &verbose.order);
        prop_assert_eq!(traced.safe, verbose.safe);
    }

    #[test]
    fn need_round_trips_against_raw_difference(snapshot in snapshot_strategy()) {
        let need = snapshot.need();
        for i in 0..snapshot.process_count() {
            for j in 0..snapshot.resource_count() {
                let expected = snapshot.max_need().get(i, j).unwrap()
                    - snapshot.allocation().get(i, j).unwrap();
                prop_assert_eq!(need.get(i, j), Some(expected));
            }
        }
    }
}
