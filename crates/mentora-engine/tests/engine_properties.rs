//! End-to-end engine behavior over the in-memory roster.

use std::collections::HashMap;

use chrono::Utc;
use mentora_config::AssignmentConfig;
use mentora_core::Semester;
use mentora_core::entities::{Mentee, Mentor};
use mentora_core::enums::{AssignmentStrategy, TargetRole};
use mentora_engine::memory::InMemoryRoster;
use mentora_engine::{AssignmentEngine, EngineError};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn mentor(id: &str) -> Mentor {
    Mentor {
        id: id.to_string(),
        name: format!("Mentor {id}"),
        email: None,
        active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn mentee(id: &str, semester: u8, mentor_id: Option<&str>) -> Mentee {
    Mentee {
        id: id.to_string(),
        name: format!("Mentee {id}"),
        enrollment_no: id.to_uppercase(),
        semester: Semester::new(semester).unwrap(),
        mentor_id: mentor_id.map(String::from),
        active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn engine(mentors: Vec<Mentor>, mentees: Vec<Mentee>) -> AssignmentEngine<InMemoryRoster> {
    AssignmentEngine::new(
        InMemoryRoster::new(mentors, mentees),
        AssignmentConfig::default(),
    )
}

fn mentor_of(engine: &AssignmentEngine<InMemoryRoster>, mentee_id: &str) -> Option<String> {
    engine.store().mentee(mentee_id).and_then(|m| m.mentor_id)
}

fn totals(engine: &AssignmentEngine<InMemoryRoster>) -> HashMap<String, u32> {
    let mut totals = HashMap::new();
    for m in engine.store().mentees() {
        if let Some(id) = m.mentor_id {
            *totals.entry(id).or_insert(0) += 1;
        }
    }
    totals
}

/// Insert `batch` into the store as unassigned mentees and return it.
fn stage(engine: &AssignmentEngine<InMemoryRoster>, semesters: &[u8]) -> Vec<Mentee> {
    let batch: Vec<Mentee> = semesters
        .iter()
        .enumerate()
        .map(|(i, s)| mentee(&format!("new{i:02}"), *s, None))
        .collect();
    for m in &batch {
        engine.store().add_mentee(m.clone());
    }
    batch
}

#[tokio::test]
async fn worked_example_two_semester_five_mentees() {
    let engine = engine(vec![mentor("A"), mentor("B"), mentor("C")], vec![]);
    engine.store().add_mentee(mentee("first", 5, None));
    engine.store().add_mentee(mentee("second", 5, None));
    let batch = engine.store().mentees();

    let outcome = engine
        .assign_batch(&batch, AssignmentStrategy::Balanced)
        .await
        .unwrap();

    assert_eq!(outcome.assigned_count, 2);
    assert_eq!(outcome.mentor_count, 3);
    assert_eq!(mentor_of(&engine, "first").as_deref(), Some("A"));
    assert_eq!(mentor_of(&engine, "second").as_deref(), Some("B"));
    assert!(!totals(&engine).contains_key("C"));
}

#[rstest]
#[case(AssignmentStrategy::Balanced)]
#[case(AssignmentStrategy::Equal)]
#[case(AssignmentStrategy::Semester)]
#[tokio::test]
async fn every_mentee_gets_a_candidate(#[case] strategy: AssignmentStrategy) {
    let engine = engine(vec![mentor("A"), mentor("B"), mentor("C"), mentor("D")], vec![]);
    let batch = stage(&engine, &[1, 2, 3, 4, 5, 6, 7, 8, 3, 3, 1]);

    let outcome = engine.assign_batch(&batch, strategy).await.unwrap();

    assert_eq!(outcome.assigned_count, 11);
    for m in engine.store().mentees() {
        let assigned = m.mentor_id.expect("every mentee assigned");
        assert!(["A", "B", "C", "D"].contains(&assigned.as_str()));
    }
}

#[tokio::test]
async fn load_only_grows_and_deltas_sum_to_batch_size() {
    let engine = engine(
        vec![mentor("A"), mentor("B"), mentor("C")],
        vec![
            mentee("a1", 2, Some("A")),
            mentee("a2", 3, Some("A")),
            mentee("b1", 2, Some("B")),
        ],
    );
    let before = totals(&engine);
    let batch = stage(&engine, &[2, 2, 3, 4, 4, 4, 7]);

    engine
        .assign_batch(&batch, AssignmentStrategy::Balanced)
        .await
        .unwrap();

    let after = totals(&engine);
    let mut delta_sum = 0;
    for id in ["A", "B", "C"] {
        let pre = before.get(id).copied().unwrap_or(0);
        let post = after.get(id).copied().unwrap_or(0);
        assert!(post >= pre, "load of {id} shrank");
        delta_sum += post - pre;
    }
    assert_eq!(delta_sum, 7);
}

#[tokio::test]
async fn semester_coverage_beats_lower_total() {
    let mut existing: Vec<Mentee> = (0..5)
        .map(|i| mentee(&format!("a{i}"), 1, Some("A")))
        .collect();
    existing.push(mentee("b0", 3, Some("B")));
    let engine = engine(vec![mentor("A"), mentor("B")], existing);
    let batch = stage(&engine, &[3]);

    engine
        .assign_batch(&batch, AssignmentStrategy::Balanced)
        .await
        .unwrap();

    assert_eq!(mentor_of(&engine, "new00").as_deref(), Some("A"));
}

async fn placements_after(strategy: AssignmentStrategy) -> Vec<(String, Option<String>)> {
    let engine = engine(
        vec![mentor("C"), mentor("A"), mentor("B")],
        vec![mentee("old", 4, Some("B"))],
    );
    let batch = stage(&engine, &[4, 1, 4, 2, 8, 8, 1]);
    engine.assign_batch(&batch, strategy).await.unwrap();
    engine
        .store()
        .mentees()
        .into_iter()
        .map(|m| (m.id, m.mentor_id))
        .collect()
}

#[rstest]
#[case(AssignmentStrategy::Balanced)]
#[case(AssignmentStrategy::Equal)]
#[tokio::test]
async fn deterministic_strategies_repeat_exactly(#[case] strategy: AssignmentStrategy) {
    assert_eq!(placements_after(strategy).await, placements_after(strategy).await);
}

#[tokio::test]
async fn zero_mentors_leaves_batch_unassigned() {
    let engine = engine(vec![], vec![]);
    let batch = stage(&engine, &[1, 2, 3]);

    let outcome = engine
        .assign_batch(&batch, AssignmentStrategy::Balanced)
        .await
        .unwrap();

    assert_eq!(outcome.assigned_count, 0);
    assert_eq!(outcome.mentor_count, 0);
    assert!(engine.store().mentees().iter().all(Mentee::is_unassigned));
    assert!(engine.store().notices().is_empty());
}

#[tokio::test]
async fn manual_strategy_assigns_nobody() {
    let engine = engine(vec![mentor("A")], vec![]);
    let batch = stage(&engine, &[1, 2]);

    let outcome = engine
        .assign_batch(&batch, AssignmentStrategy::Manual)
        .await
        .unwrap();

    assert_eq!(outcome.assigned_count, 0);
    assert_eq!(outcome.mentor_count, 1);
    assert!(engine.store().mentees().iter().all(Mentee::is_unassigned));
}

#[tokio::test]
async fn removal_moves_only_departing_mentees() {
    let engine = engine(
        vec![mentor("A"), mentor("B"), mentor("C")],
        vec![
            mentee("a1", 1, Some("A")),
            mentee("a2", 1, Some("A")),
            mentee("a3", 6, Some("A")),
            mentee("b1", 1, Some("B")),
            mentee("c1", 6, Some("C")),
        ],
    );
    engine.store().set_mentor_active("A", false);

    let outcome = engine.rebalance_after_mentor_removal("A").await.unwrap();

    assert_eq!(outcome.moved_count, 3);
    assert_eq!(outcome.unassigned_count, 0);
    assert!(outcome.ok);
    // a1 (sem 1): only C lacks semester 1 -> C. a2 (sem 1): both cover it,
    // B has the lower load -> B. a3 (sem 6): only B lacks semester 6 -> B.
    assert_eq!(mentor_of(&engine, "a1").as_deref(), Some("C"));
    assert_eq!(mentor_of(&engine, "a2").as_deref(), Some("B"));
    assert_eq!(mentor_of(&engine, "a3").as_deref(), Some("B"));
    assert_eq!(mentor_of(&engine, "b1").as_deref(), Some("B"));
    assert_eq!(mentor_of(&engine, "c1").as_deref(), Some("C"));

    let notices = engine.store().notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].count, 3);
    assert_eq!(notices[0].target_roles, vec![TargetRole::Admin]);
    assert!(notices[0].message.contains("mentor A"));
}

#[tokio::test]
async fn removal_rerun_is_noop() {
    let engine = engine(
        vec![mentor("A"), mentor("B")],
        vec![mentee("a1", 2, Some("A"))],
    );
    engine.store().set_mentor_active("A", false);

    let first = engine.rebalance_after_mentor_removal("A").await.unwrap();
    let second = engine.rebalance_after_mentor_removal("A").await.unwrap();

    assert_eq!(first.moved_count, 1);
    assert_eq!(second.moved_count, 0);
    assert!(second.ok);
    assert_eq!(engine.store().notices().len(), 1);
}

#[tokio::test]
async fn removal_of_last_mentor_nulls_mentees() {
    let engine = engine(
        vec![mentor("A")],
        vec![mentee("a1", 2, Some("A")), mentee("a2", 5, Some("A"))],
    );
    engine.store().set_mentor_active("A", false);

    let outcome = engine.rebalance_after_mentor_removal("A").await.unwrap();

    assert_eq!(outcome.moved_count, 0);
    assert_eq!(outcome.unassigned_count, 2);
    assert!(engine.store().mentees().iter().all(Mentee::is_unassigned));
    assert!(engine.store().notices().is_empty());
}

#[tokio::test]
async fn removal_excludes_mentor_still_marked_active() {
    let engine = engine(
        vec![mentor("A"), mentor("B")],
        vec![mentee("a1", 2, Some("A"))],
    );

    let outcome = engine.rebalance_after_mentor_removal("A").await.unwrap();

    assert_eq!(outcome.moved_count, 1);
    assert_eq!(mentor_of(&engine, "a1").as_deref(), Some("B"));
}

#[tokio::test]
async fn failed_write_reports_partial_application() {
    let engine = engine(
        vec![mentor("A"), mentor("B")],
        vec![
            mentee("a1", 1, Some("A")),
            mentee("a2", 2, Some("A")),
            mentee("a3", 3, Some("A")),
        ],
    );
    engine.store().set_mentor_active("A", false);
    engine.store().fail_writes_after(1);

    let err = engine.rebalance_after_mentor_removal("A").await.unwrap_err();

    match err {
        EngineError::PersistenceWriteFailed {
            mentee_id, applied, ..
        } => {
            assert_eq!(mentee_id, "a2");
            assert_eq!(applied, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(mentor_of(&engine, "a1").as_deref(), Some("B"));
    assert_eq!(mentor_of(&engine, "a3").as_deref(), Some("A"));

    let notices = engine.store().notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].count, 1);
    assert!(notices[0].message.starts_with("1 mentee(s) reassigned"));
}

#[tokio::test]
async fn failed_notice_keeps_applied_count() {
    let engine = engine(
        vec![mentor("A"), mentor("B")],
        vec![mentee("a1", 1, Some("A")), mentee("a2", 2, Some("A"))],
    );
    engine.store().set_mentor_active("A", false);
    engine.store().reject_notices();

    let err = engine.rebalance_after_mentor_removal("A").await.unwrap_err();

    assert!(matches!(err, EngineError::Notify { applied: 2, .. }));
    assert_eq!(mentor_of(&engine, "a1").as_deref(), Some("B"));
    assert_eq!(mentor_of(&engine, "a2").as_deref(), Some("B"));
}

#[tokio::test]
async fn failed_first_write_sends_no_notice() {
    let engine = engine(
        vec![mentor("A"), mentor("B")],
        vec![mentee("a1", 1, Some("A"))],
    );
    engine.store().set_mentor_active("A", false);
    engine.store().fail_writes_after(0);

    let err = engine.rebalance_after_mentor_removal("A").await.unwrap_err();

    assert!(matches!(
        err,
        EngineError::PersistenceWriteFailed { applied: 0, .. }
    ));
    assert!(engine.store().notices().is_empty());
}

#[tokio::test]
async fn assign_unassigned_recovers_orphans() {
    let engine = engine(
        vec![mentor("A"), mentor("B"), mentor("Z")],
        vec![
            mentee("loose", 3, None),
            mentee("stranded", 4, Some("Z")),
            mentee("settled", 3, Some("A")),
        ],
    );
    engine.store().set_mentor_active("Z", false);

    let outcome = engine
        .assign_unassigned(AssignmentStrategy::Balanced)
        .await
        .unwrap();

    assert_eq!(outcome.assigned_count, 2);
    assert_eq!(outcome.mentor_count, 2);
    assert_eq!(mentor_of(&engine, "loose").as_deref(), Some("B"));
    assert_eq!(mentor_of(&engine, "stranded").as_deref(), Some("A"));
    assert_eq!(mentor_of(&engine, "settled").as_deref(), Some("A"));

    let again = engine
        .assign_unassigned(AssignmentStrategy::Balanced)
        .await
        .unwrap();
    assert_eq!(again.assigned_count, 0);
}

#[tokio::test]
async fn unknown_mentor_reference_is_rejected() {
    let engine = engine(
        vec![mentor("A")],
        vec![mentee("ghosted", 1, Some("nobody"))],
    );
    let batch = stage(&engine, &[1]);

    let err = engine
        .assign_batch(&batch, AssignmentStrategy::Balanced)
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::InconsistentSnapshot { .. }));
    assert_eq!(engine.store().write_count(), 0);
}

async fn semester_run(config: AssignmentConfig) -> (Option<u64>, Vec<(String, Option<String>)>) {
    let mentors: Vec<Mentor> = (0..9).map(|i| mentor(&format!("M{i}"))).collect();
    let engine = AssignmentEngine::new(InMemoryRoster::new(mentors, vec![]), config);
    let batch = stage(&engine, &[1, 2, 1, 2, 1, 2]);
    let outcome = engine
        .assign_batch(&batch, AssignmentStrategy::Semester)
        .await
        .unwrap();
    let placements = engine
        .store()
        .mentees()
        .into_iter()
        .map(|m| (m.id, m.mentor_id))
        .collect();
    (outcome.seed, placements)
}

#[tokio::test]
async fn semester_seed_is_reported_and_replayable() {
    let config = AssignmentConfig {
        semester_seed: Some(2024),
        ..AssignmentConfig::default()
    };

    let (seed, first) = semester_run(config.clone()).await;
    let (_, second) = semester_run(config).await;
    assert_eq!(seed, Some(2024));
    assert_eq!(first.len(), 6);
    assert!(first.iter().all(|(_, mentor_id)| mentor_id.is_some()));
    assert_eq!(first, second);
}

#[tokio::test]
async fn load_report_reflects_roster() {
    let engine = engine(
        vec![mentor("A"), mentor("B")],
        vec![mentee("a1", 2, Some("A")), mentee("a2", 2, Some("A"))],
    );

    let report = engine.load_report().await.unwrap();

    assert_eq!(report.len(), 2);
    assert_eq!(report[0].mentor_id, "A");
    assert_eq!(report[0].total, 2);
    assert_eq!(report[1].total, 0);
}

#[tokio::test]
async fn concurrent_removals_stay_consistent() {
    let engine = std::sync::Arc::new(engine(
        vec![mentor("A"), mentor("B"), mentor("C"), mentor("D")],
        vec![
            mentee("a1", 1, Some("A")),
            mentee("a2", 2, Some("A")),
            mentee("b1", 1, Some("B")),
            mentee("b2", 2, Some("B")),
        ],
    ));
    engine.store().set_mentor_active("A", false);
    engine.store().set_mentor_active("B", false);

    let (left, right) = tokio::join!(
        engine.rebalance_after_mentor_removal("A"),
        engine.rebalance_after_mentor_removal("B"),
    );
    assert_eq!(left.unwrap().moved_count + right.unwrap().moved_count, 4);

    let after = totals(&engine);
    assert_eq!(after.get("C"), Some(&2));
    assert_eq!(after.get("D"), Some(&2));
}
