//! Golden scenario tests: every file under `test-fixtures/golden/safety/`.

use banker_core::models::SystemSnapshot;
use banker_safety::{evaluate, is_safe_sequence};
use test_fixtures::{load_fixture, load_safety_scenarios, SafetyScenario};

#[test]
fn golden_scenarios_match_expected_verdicts() {
    let scenarios = load_safety_scenarios();
    assert!(scenarios.len() >= 5, "expected at least 5 golden scenarios");

    for scenario in scenarios {
        let result = evaluate(
            &scenario.processes,
            &scenario.resources,
            &scenario.allocation,
            &scenario.max_need,
            &scenario.available,
        )
        .unwrap_or_else(|e| panic!("{}: unexpected input error {e}", scenario.name));

        assert_eq!(result.safe, scenario.expected.safe, "{}: verdict", scenario.name);
        assert_eq!(result.order, scenario.expected.order, "{}: order", scenario.name);
        assert_eq!(result.blocked, scenario.expected.blocked, "{}: blocked", scenario.name);

        if result.safe {
            let snapshot = SystemSnapshot::new(
                scenario.processes.clone(),
                scenario.resources.clone(),
                &scenario.allocation,
                &scenario.max_need,
                &scenario.available,
            )
            .unwrap();
            assert!(
                is_safe_sequence(&snapshot, &result.order),
                "{}: returned order does not replay",
                scenario.name
            );
        }
    }
}

#[test]
fn scenarios_load_in_file_name_order() {
    let names: Vec<String> = load_safety_scenarios().into_iter().map(|s| s.name).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    let classic: SafetyScenario = load_fixture("golden/safety/classic_safe.json");
    assert_eq!(classic.name, "classic_safe");
    assert_eq!(classic.expected.order, vec![1, 3, 0, 2, 4]);
}
