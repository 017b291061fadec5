//! Booking intake — the lifecycle entry point for records arriving from
//! manual entry or the public booking flow: normalize the raw record,
//! validate the interval, construct the canonical booking.
//!
//! Persisting the returned booking is the caller's job.

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::booking::{Booking, BookingRecord, TenantId};
use crate::catalog::ServiceCatalog;
use crate::conflict::check_interval;
use crate::error::ScheduleError;
use crate::resolve::resolve_interval;
use crate::shifts::ShiftRegistry;

/// Normalize and validate one intake record, producing a booking ready to
/// persist.
///
/// The record's own id is excluded from the overlap set, so re-admitting a
/// record that already exists in the snapshot (re-normalization of legacy
/// data) validates against its neighbours, not against its stale self.
///
/// # Errors
///
/// [`ScheduleError::Resolution`] for malformed legacy labels,
/// [`ScheduleError::Conflict`] for business-rule rejections.
pub fn admit_booking(
    tenant_id: &TenantId,
    record: &BookingRecord,
    catalog: &ServiceCatalog,
    shifts: &ShiftRegistry,
    bookings: &[Booking],
    today: NaiveDate,
    tz: Tz,
) -> Result<Booking, ScheduleError> {
    let interval = resolve_interval(record, catalog, today, tz)?;
    check_interval(
        record.staff_id(),
        interval,
        bookings,
        shifts,
        tz,
        Some(record.id()),
    )?;

    Ok(Booking {
        id: record.id().clone(),
        tenant_id: tenant_id.clone(),
        customer_name: record.customer_name().to_string(),
        service: record.service().to_string(),
        staff_id: record.staff_id().clone(),
        status: record.status(),
        start: interval.start,
        end: interval.end,
    })
}
