//! Benchmarks conflict checking over one staff member's daily booking load.

use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use criterion::{criterion_group, criterion_main, Criterion};
use sched_engine::{
    check_interval, Booking, BookingId, BookingStatus, Interval, ShiftRegistry, StaffId, TenantId,
};
use std::hint::black_box;

const TZ: Tz = chrono_tz::Asia::Tehran;

fn at_minute(minute: i64) -> DateTime<Utc> {
    TZ.with_ymd_and_hms(2026, 10, 24, 0, 0, 0)
        .unwrap()
        .with_timezone(&Utc)
        + Duration::minutes(minute)
}

/// A fully booked day: back-to-back half-hour appointments, 10:00–20:00.
fn full_day(staff: &StaffId) -> Vec<Booking> {
    (0i64..20)
        .map(|slot| Booking {
            id: BookingId(format!("bk-{slot}")),
            tenant_id: TenantId("salon-aria".to_string()),
            customer_name: "مینا".to_string(),
            service: "هیرکات".to_string(),
            staff_id: staff.clone(),
            status: BookingStatus::Confirmed,
            start: at_minute(600 + slot * 30),
            end: at_minute(630 + slot * 30),
        })
        .collect()
}

fn bench_check_interval(c: &mut Criterion) {
    let staff = StaffId("st-1".to_string());
    let bookings = full_day(&staff);
    let shifts = ShiftRegistry::new();
    // Overlaps the last slot of the day — the worst case for the scan.
    let candidate = Interval {
        start: at_minute(1185),
        end: at_minute(1195),
    };

    c.bench_function("check_interval_full_day", |b| {
        b.iter(|| {
            let _ = check_interval(
                black_box(&staff),
                black_box(candidate),
                black_box(&bookings),
                black_box(&shifts),
                TZ,
                None,
            );
        })
    });
}

criterion_group!(benches, bench_check_interval);
criterion_main!(benches);
