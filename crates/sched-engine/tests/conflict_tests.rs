//! Tests for ordered conflict detection.
//!
//! All intervals are built on Saturday 2026-10-24 in Tehran local time
//! (weekday index 0, default shift 10:00–20:00 unless a test stores one).

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use sched_engine::{
    check_interval, Booking, BookingId, BookingStatus, ConflictError, Interval, ShiftRegistry,
    StaffId, TenantId,
};

const TZ: Tz = chrono_tz::Asia::Tehran;

fn staff() -> StaffId {
    StaffId("st-1".to_string())
}

/// Tehran local time on the test Saturday, as a UTC instant.
fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    TZ.with_ymd_and_hms(2026, 10, day, hour, minute, 0)
        .unwrap()
        .with_timezone(&Utc)
}

fn interval(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> Interval {
    Interval {
        start: at(24, start_h, start_m),
        end: at(24, end_h, end_m),
    }
}

fn booking(id: &str, start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> Booking {
    Booking {
        id: BookingId(id.to_string()),
        tenant_id: TenantId("salon-aria".to_string()),
        customer_name: "مینا".to_string(),
        service: "هیرکات".to_string(),
        staff_id: staff(),
        status: BookingStatus::Confirmed,
        start: at(24, start_h, start_m),
        end: at(24, end_h, end_m),
    }
}

// ── Rule 1: degenerate intervals ────────────────────────────────────────────

#[test]
fn empty_interval_is_degenerate() {
    let candidate = interval(10, 0, 10, 0);
    let verdict = check_interval(&staff(), candidate, &[], &ShiftRegistry::new(), TZ, None);
    assert_eq!(verdict, Err(ConflictError::DegenerateInterval));
}

#[test]
fn inverted_interval_is_degenerate_before_any_other_rule() {
    // Inverted AND outside the shift — the degenerate rule fires first.
    let candidate = interval(9, 30, 9, 0);
    let verdict = check_interval(&staff(), candidate, &[], &ShiftRegistry::new(), TZ, None);
    assert_eq!(verdict, Err(ConflictError::DegenerateInterval));
}

// ── Rule 2: day boundaries ──────────────────────────────────────────────────

#[test]
fn cross_midnight_interval_is_rejected() {
    let candidate = Interval {
        start: at(24, 23, 30),
        end: at(25, 0, 15),
    };
    let verdict = check_interval(&staff(), candidate, &[], &ShiftRegistry::new(), TZ, None);
    assert_eq!(verdict, Err(ConflictError::CrossesDayBoundary));
}

#[test]
fn cross_midnight_rejection_ignores_shift_configuration() {
    // Even a round-the-clock pair of shifts cannot make the interval legal.
    let mut registry = ShiftRegistry::new();
    registry.set_shift(&staff(), 0, "00:00", "23:59", true).unwrap();
    registry.set_shift(&staff(), 1, "00:00", "23:59", true).unwrap();

    let candidate = Interval {
        start: at(24, 23, 30),
        end: at(25, 0, 15),
    };
    let verdict = check_interval(&staff(), candidate, &[], &registry, TZ, None);
    assert_eq!(verdict, Err(ConflictError::CrossesDayBoundary));
}

#[test]
fn end_at_exact_midnight_is_same_day_not_a_crossing() {
    // The half-open limit of the day is minute 1440. No parseable shift
    // reaches it, so the verdict is OutsideShift — the actionable reason —
    // rather than CrossesDayBoundary.
    let candidate = Interval {
        start: at(24, 22, 0),
        end: at(25, 0, 0),
    };
    let verdict = check_interval(&staff(), candidate, &[], &ShiftRegistry::new(), TZ, None);
    assert_eq!(verdict, Err(ConflictError::OutsideShift));
}

#[test]
fn multi_day_interval_is_rejected() {
    let candidate = Interval {
        start: at(24, 10, 0),
        end: at(26, 10, 0),
    };
    let verdict = check_interval(&staff(), candidate, &[], &ShiftRegistry::new(), TZ, None);
    assert_eq!(verdict, Err(ConflictError::CrossesDayBoundary));
}

// ── Rule 3: shift containment ───────────────────────────────────────────────

#[test]
fn one_minute_before_the_shift_is_outside() {
    let candidate = interval(9, 59, 10, 29);
    let verdict = check_interval(&staff(), candidate, &[], &ShiftRegistry::new(), TZ, None);
    assert_eq!(verdict, Err(ConflictError::OutsideShift));
}

#[test]
fn interval_flush_with_the_shift_start_is_accepted() {
    let candidate = interval(10, 0, 10, 30);
    let verdict = check_interval(&staff(), candidate, &[], &ShiftRegistry::new(), TZ, None);
    assert_eq!(verdict, Ok(()));
}

#[test]
fn interval_flush_with_the_shift_end_is_accepted() {
    let candidate = interval(19, 30, 20, 0);
    assert_eq!(
        check_interval(&staff(), candidate, &[], &ShiftRegistry::new(), TZ, None),
        Ok(())
    );
}

#[test]
fn shift_containment_is_checked_before_overlap() {
    // The candidate also overlaps an existing booking; OutsideShift is the
    // rule that fires because the rules run in order.
    let existing = vec![booking("bk-1", 10, 0, 10, 30)];
    let candidate = interval(9, 30, 10, 15);
    let verdict = check_interval(
        &staff(),
        candidate,
        &existing,
        &ShiftRegistry::new(),
        TZ,
        None,
    );
    assert_eq!(verdict, Err(ConflictError::OutsideShift));
}

// ── Rule 4: overlap ─────────────────────────────────────────────────────────

#[test]
fn overlapping_booking_is_reported_with_its_id() {
    let existing = vec![booking("bk-1", 10, 0, 10, 30)];
    let candidate = interval(10, 15, 10, 45);
    let verdict = check_interval(
        &staff(),
        candidate,
        &existing,
        &ShiftRegistry::new(),
        TZ,
        None,
    );
    assert_eq!(
        verdict,
        Err(ConflictError::Overlap(BookingId("bk-1".to_string())))
    );
}

#[test]
fn back_to_back_bookings_do_not_conflict() {
    let existing = vec![booking("bk-1", 10, 0, 10, 30)];
    let candidate = interval(10, 30, 11, 0);
    assert_eq!(
        check_interval(
            &staff(),
            candidate,
            &existing,
            &ShiftRegistry::new(),
            TZ,
            None
        ),
        Ok(())
    );
}

#[test]
fn cancelled_bookings_never_conflict() {
    let mut cancelled = booking("bk-1", 10, 0, 10, 30);
    cancelled.status = BookingStatus::Cancelled;
    let candidate = interval(10, 15, 10, 45);
    assert_eq!(
        check_interval(
            &staff(),
            candidate,
            &[cancelled],
            &ShiftRegistry::new(),
            TZ,
            None
        ),
        Ok(())
    );
}

#[test]
fn excluded_booking_is_skipped() {
    let existing = vec![booking("bk-1", 10, 0, 10, 30)];
    let candidate = interval(10, 15, 10, 45);
    let exclude = BookingId("bk-1".to_string());
    assert_eq!(
        check_interval(
            &staff(),
            candidate,
            &existing,
            &ShiftRegistry::new(),
            TZ,
            Some(&exclude)
        ),
        Ok(())
    );
}

#[test]
fn other_staff_bookings_are_ignored() {
    let mut other = booking("bk-1", 10, 0, 10, 30);
    other.staff_id = StaffId("st-2".to_string());
    let candidate = interval(10, 15, 10, 45);
    assert_eq!(
        check_interval(
            &staff(),
            candidate,
            &[other],
            &ShiftRegistry::new(),
            TZ,
            None
        ),
        Ok(())
    );
}

#[test]
fn first_overlap_in_snapshot_order_wins() {
    let existing = vec![
        booking("bk-2", 11, 0, 12, 0),
        booking("bk-1", 10, 0, 11, 0),
    ];
    // Overlaps both; the report names the first in snapshot order.
    let candidate = interval(10, 30, 11, 30);
    assert_eq!(
        check_interval(
            &staff(),
            candidate,
            &existing,
            &ShiftRegistry::new(),
            TZ,
            None
        ),
        Err(ConflictError::Overlap(BookingId("bk-2".to_string())))
    );
}

#[test]
fn fully_contained_candidate_conflicts() {
    let existing = vec![booking("bk-1", 10, 0, 12, 0)];
    let candidate = interval(10, 30, 11, 0);
    assert!(check_interval(
        &staff(),
        candidate,
        &existing,
        &ShiftRegistry::new(),
        TZ,
        None
    )
    .is_err());
}
