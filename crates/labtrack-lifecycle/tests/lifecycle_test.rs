use std::sync::Arc;

use chrono::{TimeZone, Utc};

use labtrack_core::context::LifecycleContext;
use labtrack_core::errors::{LabError, TransitionError};
use labtrack_core::models::{Equipment, EquipmentStatus, InspectionFinding, TechSpec};
use labtrack_core::traits::DecayStrategy;
use labtrack_lifecycle::LifecycleEngine;

struct FlatDecay;

impl DecayStrategy for FlatDecay {
    fn name(&self) -> &'static str {
        "Flat"
    }
    fn calculate(
        &self,
        _purchase_date: &str,
        _today: chrono::NaiveDate,
    ) -> labtrack_core::LabResult<f64> {
        Ok(0.1)
    }
}

fn ctx() -> LifecycleContext {
    LifecycleContext::fixed(Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap())
}

fn make_motor() -> Equipment {
    Equipment::new(
        "MOT-014",
        "WEG W22",
        "2019-11-02",
        TechSpec::InductionMotor {
            horsepower: 10.0,
            voltage: 440.0,
            rpm: 1750,
        },
        Arc::new(FlatDecay),
    )
    .with_location("Machines Lab B")
}

// ── Report / triage / repair cycle ───────────────────────────────────────

#[test]
fn full_maintenance_cycle_round_trips_to_operational() {
    let engine = LifecycleEngine::default();
    let mut eq = make_motor();

    engine.report_issue(&mut eq, "vibrates at startup", &ctx()).unwrap();
    assert_eq!(eq.status, EquipmentStatus::Reported);

    engine.confirm_triage(&mut eq, &ctx()).unwrap();
    assert_eq!(eq.status, EquipmentStatus::UnderMaintenance);

    engine.complete_repair(&mut eq, "bearings replaced", &ctx()).unwrap();
    assert_eq!(eq.status, EquipmentStatus::Operational);

    // Report, triage note, and the ALTA closing note — in insertion order.
    assert_eq!(eq.incidents.len(), 3);
    assert_eq!(eq.incidents[0].detail, "vibrates at startup");
    assert!(eq.incidents[2].detail.starts_with("ALTA:"));
}

#[test]
fn reporting_twice_is_an_invalid_transition() {
    let engine = LifecycleEngine::default();
    let mut eq = make_motor();
    engine.report_issue(&mut eq, "vibrates", &ctx()).unwrap();

    let err = engine.report_issue(&mut eq, "still vibrates", &ctx()).unwrap_err();
    assert!(matches!(
        err,
        LabError::Transition(TransitionError::Invalid {
            from: EquipmentStatus::Reported,
            to: EquipmentStatus::Reported,
        })
    ));
    // Failed operation appended nothing.
    assert_eq!(eq.incidents.len(), 1);
}

// ── Decommission ─────────────────────────────────────────────────────────

#[test]
fn decommission_is_terminal() {
    let engine = LifecycleEngine::default();
    let mut eq = make_motor();
    engine.report_issue(&mut eq, "smoke smell", &ctx()).unwrap();
    engine.decommission(&mut eq, &ctx()).unwrap();
    assert_eq!(eq.status, EquipmentStatus::Decommissioned);

    let err = engine.report_issue(&mut eq, "someone plugged it in", &ctx()).unwrap_err();
    assert!(matches!(
        err,
        LabError::Transition(TransitionError::Terminal { .. })
    ));
}

#[test]
fn operational_equipment_cannot_be_discarded_directly() {
    let engine = LifecycleEngine::default();
    let mut eq = make_motor();
    assert!(engine.decommission(&mut eq, &ctx()).is_err());
    assert_eq!(eq.status, EquipmentStatus::Operational);
}

// ── Inspection signal ────────────────────────────────────────────────────

#[test]
fn critical_inspection_fails_operational_equipment() {
    let engine = LifecycleEngine::default();
    let mut eq = make_motor();
    let finding = InspectionFinding {
        diagnosis: "Charred winding section detected (31.2%)".into(),
        is_critical: true,
    };

    let transitioned = engine.apply_inspection(&mut eq, &finding, &ctx()).unwrap();
    assert!(transitioned);
    assert_eq!(eq.status, EquipmentStatus::Failed);
    assert_eq!(
        eq.incidents.last().unwrap().ai_verdict.as_deref(),
        Some("Charred winding section detected (31.2%)")
    );
}

#[test]
fn non_critical_inspection_only_annotates() {
    let engine = LifecycleEngine::default();
    let mut eq = make_motor();
    let finding = InspectionFinding {
        diagnosis: "Surface clean (2.1% darkness)".into(),
        is_critical: false,
    };

    let transitioned = engine.apply_inspection(&mut eq, &finding, &ctx()).unwrap();
    assert!(!transitioned);
    assert_eq!(eq.status, EquipmentStatus::Operational);
    assert_eq!(eq.incidents.len(), 1);
    assert!(eq.incidents[0].ai_verdict.is_some());
}

#[test]
fn critical_inspection_on_reported_unit_records_but_does_not_transition() {
    let engine = LifecycleEngine::default();
    let mut eq = make_motor();
    engine.report_issue(&mut eq, "hot housing", &ctx()).unwrap();

    let finding = InspectionFinding {
        diagnosis: "Carbonized area".into(),
        is_critical: true,
    };
    let transitioned = engine.apply_inspection(&mut eq, &finding, &ctx()).unwrap();
    assert!(!transitioned);
    assert_eq!(eq.status, EquipmentStatus::Reported);
    assert_eq!(eq.incidents.len(), 2);
}

// ── Incident plumbing ────────────────────────────────────────────────────

#[test]
fn register_incident_never_touches_status() {
    let mut eq = make_motor();
    eq.register_incident("routine calibration note", &ctx());
    assert_eq!(eq.status, EquipmentStatus::Operational);
    assert_eq!(eq.incidents.len(), 1);
}

#[test]
fn annotate_last_incident_backfills_only_the_newest() {
    let mut eq = make_motor();
    eq.register_incident("first", &ctx());
    eq.register_incident("second", &ctx());
    eq.annotate_last_incident("verdict for second");

    assert_eq!(eq.incidents[0].ai_verdict, None);
    assert_eq!(eq.incidents[1].ai_verdict.as_deref(), Some("verdict for second"));
}

#[test]
fn annotate_on_empty_history_is_a_noop() {
    let mut eq = make_motor();
    eq.annotate_last_incident("nothing to attach to");
    assert!(eq.incidents.is_empty());
}
