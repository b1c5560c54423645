use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use labtrack_core::config::LifecycleConfig;
use labtrack_core::context::LifecycleContext;
use labtrack_core::models::{Equipment, EquipmentStatus, Incident, TechSpec};
use labtrack_core::traits::DecayStrategy;
use labtrack_lifecycle::check_complaint_threshold;

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

fn make_equipment() -> Equipment {
    Equipment::new(
        "MUL-007",
        "Fluke 87V",
        "2022-02-14",
        TechSpec::Multimeter {
            precision: 0.05,
            digital: true,
        },
        Arc::new(FlatDecay),
    )
}

fn complaint(days_ago: i64, detail: &str) -> Incident {
    let stamp = ctx().now - Duration::days(days_ago);
    Incident {
        timestamp: stamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        detail: detail.to_string(),
        ai_verdict: None,
        photo_url: None,
    }
}

// ── Trigger and no-trigger ───────────────────────────────────────────────

#[test]
fn three_recent_complaints_force_maintenance() {
    let mut eq = make_equipment();
    eq.push_incident(complaint(1, "display dead"));
    eq.push_incident(complaint(3, "probes read garbage"));
    eq.push_incident(complaint(6, "won't power on"));

    assert!(check_complaint_threshold(&mut eq, &ctx(), &LifecycleConfig::default()));
    assert_eq!(eq.status, EquipmentStatus::UnderMaintenance);
    // Synthetic system incident appended after the three complaints.
    assert_eq!(eq.incidents.len(), 4);
    assert!(eq.incidents[3].detail.contains("SYSTEM ESCALATION"));
    assert!(eq.incidents[3].detail.contains('3'));
}

#[test]
fn two_recent_complaints_do_nothing() {
    let mut eq = make_equipment();
    eq.push_incident(complaint(1, "display dead"));
    eq.push_incident(complaint(2, "probes read garbage"));

    assert!(!check_complaint_threshold(&mut eq, &ctx(), &LifecycleConfig::default()));
    assert_eq!(eq.status, EquipmentStatus::Operational);
    assert_eq!(eq.incidents.len(), 2);
}

#[test]
fn old_complaints_fall_outside_the_window() {
    let mut eq = make_equipment();
    eq.push_incident(complaint(10, "old gripe"));
    eq.push_incident(complaint(9, "another old gripe"));
    eq.push_incident(complaint(1, "fresh gripe"));

    assert!(!check_complaint_threshold(&mut eq, &ctx(), &LifecycleConfig::default()));
}

#[test]
fn window_boundary_day_is_inclusive() {
    let mut eq = make_equipment();
    eq.push_incident(complaint(7, "boundary gripe one"));
    eq.push_incident(complaint(7, "boundary gripe two"));
    eq.push_incident(complaint(7, "boundary gripe three"));

    assert!(check_complaint_threshold(&mut eq, &ctx(), &LifecycleConfig::default()));
}

// ── Reset tokens ─────────────────────────────────────────────────────────

#[test]
fn reset_token_before_third_complaint_cancels_escalation() {
    let mut eq = make_equipment();
    eq.push_incident(complaint(6, "gripe one"));
    eq.push_incident(complaint(5, "gripe two"));
    eq.push_incident(complaint(4, "REINGRESO after bench check"));
    eq.push_incident(complaint(2, "gripe three"));
    eq.push_incident(complaint(1, "gripe four"));

    assert!(!check_complaint_threshold(&mut eq, &ctx(), &LifecycleConfig::default()));
    assert_eq!(eq.status, EquipmentStatus::Operational);
}

#[test]
fn reset_tokens_match_case_insensitively_and_are_not_counted() {
    let mut eq = make_equipment();
    eq.push_incident(complaint(3, "Alta: repaired power stage"));
    eq.push_incident(complaint(2, "gripe one"));
    eq.push_incident(complaint(1, "gripe two"));

    assert!(!check_complaint_threshold(&mut eq, &ctx(), &LifecycleConfig::default()));
}

#[test]
fn complaints_after_a_reset_still_accumulate() {
    let mut eq = make_equipment();
    eq.push_incident(complaint(6, "REINGRESO from maintenance"));
    eq.push_incident(complaint(3, "gripe one"));
    eq.push_incident(complaint(2, "gripe two"));
    eq.push_incident(complaint(1, "gripe three"));

    assert!(check_complaint_threshold(&mut eq, &ctx(), &LifecycleConfig::default()));
}

// ── Guard and robustness ─────────────────────────────────────────────────

#[test]
fn guard_skips_maintenance_failed_and_decommissioned() {
    for status in [
        EquipmentStatus::UnderMaintenance,
        EquipmentStatus::Failed,
        EquipmentStatus::Decommissioned,
    ] {
        let mut eq = make_equipment();
        eq.status = status;
        eq.push_incident(complaint(1, "gripe one"));
        eq.push_incident(complaint(1, "gripe two"));
        eq.push_incident(complaint(1, "gripe three"));

        assert!(
            !check_complaint_threshold(&mut eq, &ctx(), &LifecycleConfig::default()),
            "guard fired from {status}"
        );
        assert_eq!(eq.status, status);
        assert_eq!(eq.incidents.len(), 3);
    }
}

#[test]
fn unparsable_timestamps_are_skipped_silently() {
    let mut eq = make_equipment();
    eq.push_incident(Incident {
        timestamp: "sometime last week".into(),
        detail: "gripe one".into(),
        ai_verdict: None,
        photo_url: None,
    });
    eq.push_incident(complaint(1, "gripe two"));
    eq.push_incident(complaint(2, "gripe three"));

    assert!(!check_complaint_threshold(&mut eq, &ctx(), &LifecycleConfig::default()));
}

#[test]
fn legacy_reported_with_failure_is_still_escalatable() {
    let mut eq = make_equipment();
    eq.status = EquipmentStatus::ReportedWithFailure;
    eq.push_incident(complaint(1, "gripe one"));
    eq.push_incident(complaint(2, "gripe two"));
    eq.push_incident(complaint(3, "gripe three"));

    assert!(check_complaint_threshold(&mut eq, &ctx(), &LifecycleConfig::default()));
    assert_eq!(eq.status, EquipmentStatus::UnderMaintenance);
}
