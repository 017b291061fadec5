//! End-to-end intake tests: raw record → normalized interval → conflict
//! check → canonical booking.

use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use sched_engine::{
    admit_booking, Booking, BookingRecord, BookingStatus, ConflictError, ResolutionError,
    ScheduleError, ServiceCatalog, ShiftRegistry, TenantId,
};

const TZ: Tz = chrono_tz::Asia::Tehran;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
}

fn tenant() -> TenantId {
    TenantId("salon-aria".to_string())
}

fn legacy_record(date: &str, time: &str, service: &str) -> BookingRecord {
    serde_json::from_value(serde_json::json!({
        "id": "bk-new",
        "customer_name": "نرگس",
        "service": service,
        "staff_id": "st-1",
        "date": date,
        "time": time,
    }))
    .unwrap()
}

#[test]
fn legacy_record_becomes_a_pending_canonical_booking() {
    let record = legacy_record("شنبه 24", "10:00", "هیرکات");
    let booking = admit_booking(
        &tenant(),
        &record,
        &ServiceCatalog::new(Vec::new()),
        &ShiftRegistry::new(),
        &[],
        today(),
        TZ,
    )
    .unwrap();

    assert_eq!(booking.tenant_id, tenant());
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(
        booking.start,
        TZ.with_ymd_and_hms(2026, 10, 24, 10, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    );
    assert_eq!((booking.end - booking.start).num_minutes(), 30);
}

#[test]
fn conflicting_record_is_rejected_with_the_overlap() {
    let record = legacy_record("شنبه 24", "10:00", "هیرکات");
    let catalog = ServiceCatalog::new(Vec::new());
    let shifts = ShiftRegistry::new();

    let existing: Booking = admit_booking(
        &tenant(),
        &legacy_record("شنبه 24", "10:15", "هیرکات"),
        &catalog,
        &shifts,
        &[],
        today(),
        TZ,
    )
    .map(|mut b| {
        b.id = sched_engine::BookingId("bk-existing".to_string());
        b
    })
    .unwrap();

    let err = admit_booking(
        &tenant(),
        &record,
        &catalog,
        &shifts,
        &[existing],
        today(),
        TZ,
    )
    .unwrap_err();
    assert_eq!(
        err,
        ScheduleError::Conflict(ConflictError::Overlap(sched_engine::BookingId(
            "bk-existing".to_string()
        )))
    );
}

#[test]
fn malformed_legacy_label_surfaces_the_resolution_error() {
    let record = legacy_record("روز نامعلوم 99", "10:00", "هیرکات");
    let err = admit_booking(
        &tenant(),
        &record,
        &ServiceCatalog::new(Vec::new()),
        &ShiftRegistry::new(),
        &[],
        today(),
        TZ,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ScheduleError::Resolution(ResolutionError::UnknownDate(_))
    ));
}

#[test]
fn canonical_record_with_manual_interval_is_admitted_verbatim() {
    // 06:30Z–07:15Z is 10:00–10:45 Tehran: a stretched 45-minute haircut.
    let record: BookingRecord = serde_json::from_value(serde_json::json!({
        "id": "bk-manual",
        "customer_name": "Sara",
        "service": "هیرکات",
        "staff_id": "st-1",
        "status": "confirmed",
        "start": "2026-10-24T06:30:00Z",
        "end": "2026-10-24T07:15:00Z",
    }))
    .unwrap();

    let booking = admit_booking(
        &tenant(),
        &record,
        &ServiceCatalog::new(Vec::new()),
        &ShiftRegistry::new(),
        &[],
        today(),
        TZ,
    )
    .unwrap();
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!((booking.end - booking.start).num_minutes(), 45);
}

#[test]
fn readmitting_a_record_already_in_the_snapshot_is_legal() {
    // Re-normalization: the stale copy of the same id does not conflict
    // with itself.
    let catalog = ServiceCatalog::new(Vec::new());
    let shifts = ShiftRegistry::new();
    let record = legacy_record("شنبه 24", "10:00", "هیرکات");

    let first = admit_booking(&tenant(), &record, &catalog, &shifts, &[], today(), TZ).unwrap();
    let second =
        admit_booking(&tenant(), &record, &catalog, &shifts, &[first], today(), TZ).unwrap();
    assert_eq!(second.id, sched_engine::BookingId("bk-new".to_string()));
}
