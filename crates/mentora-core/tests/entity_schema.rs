//! JsonSchema validation tests for entity and outcome types.

use chrono::Utc;
use mentora_core::Semester;
use mentora_core::entities::{Mentee, Mentor, Notification};
use mentora_core::enums::{AssignmentStrategy, TargetRole};
use mentora_core::responses::{BatchOutcome, MentorLoad, RebalanceOutcome, SemesterCount};
use pretty_assertions::assert_eq;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! conforms_to_schema {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

conforms_to_schema!(
    mentor_conforms,
    Mentor,
    Mentor {
        id: "mtr-a3f8b2c1".into(),
        name: "Dr. Rao".into(),
        email: Some("rao@example.edu".into()),
        active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

conforms_to_schema!(
    unassigned_mentee_conforms,
    Mentee,
    Mentee {
        id: "mte-0b1c2d3e".into(),
        name: "Asha".into(),
        enrollment_no: "21CS042".into(),
        semester: Semester::new(5).unwrap(),
        mentor_id: None,
        active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

conforms_to_schema!(
    notification_conforms,
    Notification,
    Notification {
        id: "ntf-11223344".into(),
        message: "3 mentees reassigned".into(),
        target_roles: vec![TargetRole::Admin, TargetRole::Mentor],
        read: false,
        created_at: Utc::now(),
    }
);

conforms_to_schema!(
    batch_outcome_conforms,
    BatchOutcome,
    BatchOutcome {
        strategy: AssignmentStrategy::Semester,
        assigned_count: 12,
        mentor_count: 4,
        seed: Some(42),
    }
);

conforms_to_schema!(
    mentor_load_conforms,
    MentorLoad,
    MentorLoad {
        mentor_id: "mtr-a3f8b2c1".into(),
        total: 3,
        semesters: vec![SemesterCount {
            semester: Semester::new(2).unwrap(),
            count: 3,
        }],
    }
);

#[test]
fn mentee_json_rejects_invalid_semester() {
    let json = serde_json::json!({
        "id": "mte-0b1c2d3e",
        "name": "Asha",
        "enrollment_no": "21CS042",
        "semester": 9,
        "mentor_id": null,
        "active": true,
        "created_at": "2026-02-09T14:30:00Z",
        "updated_at": "2026-02-09T14:30:00Z"
    });
    assert!(serde_json::from_value::<Mentee>(json).is_err());
}

#[test]
fn batch_outcome_omits_absent_seed() {
    let outcome = BatchOutcome {
        strategy: AssignmentStrategy::Balanced,
        assigned_count: 2,
        mentor_count: 3,
        seed: None,
    };
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "strategy": "balanced",
            "assigned_count": 2,
            "mentor_count": 3
        })
    );
}

#[test]
fn noop_rebalance_reports_zero_moves() {
    let outcome = RebalanceOutcome::noop("mtr-00000001");
    assert_eq!(outcome.moved_count, 0);
    assert_eq!(outcome.unassigned_count, 0);
    assert!(outcome.ok);
}
