//! Ordered validation of a candidate interval against shifts and existing
//! bookings.
//!
//! Rules run in a fixed order and the first failure wins: degenerate
//! interval, day-boundary crossing, shift containment, then overlap against
//! each non-cancelled booking for the same staff member. Pure validation
//! over the supplied snapshot — no side effects, no I/O.

use chrono::{Datelike, Timelike};
use chrono_tz::Tz;

use crate::booking::{Booking, BookingId, BookingStatus, Interval, StaffId};
use crate::error::ConflictError;
use crate::shifts::{weekday_index, ShiftRegistry};

/// Minute-of-day decomposition of a candidate in the tenant's zone.
struct LocalSpan {
    weekday: u8,
    start_minute: u16,
    end_minute: u16,
}

/// Validate `candidate` for `staff_id` against the snapshot.
///
/// `bookings` is an already-tenant-scoped snapshot; entries for other staff
/// members are ignored, cancelled bookings never conflict, and `exclude`
/// removes one booking (the one being rescheduled) from its own overlap set.
///
/// # Errors
///
/// The first violated rule, per the module-level ordering. `Overlap` carries
/// the id of the first conflicting booking in snapshot order.
pub fn check_interval(
    staff_id: &StaffId,
    candidate: Interval,
    bookings: &[Booking],
    shifts: &ShiftRegistry,
    tz: Tz,
    exclude: Option<&BookingId>,
) -> Result<(), ConflictError> {
    if candidate.start >= candidate.end {
        return Err(ConflictError::DegenerateInterval);
    }

    let span = local_span(candidate, tz)?;
    if !shifts.is_within_shift(staff_id, span.weekday, span.start_minute, span.end_minute) {
        return Err(ConflictError::OutsideShift);
    }

    for booking in bookings {
        if booking.staff_id != *staff_id || booking.status == BookingStatus::Cancelled {
            continue;
        }
        if exclude.is_some_and(|id| *id == booking.id) {
            continue;
        }
        if candidate.overlaps(&booking.interval()) {
            return Err(ConflictError::Overlap(booking.id.clone()));
        }
    }

    Ok(())
}

/// Decompose the candidate into weekday + minute-of-day in the tenant's
/// zone, rejecting intervals that span more than one local day.
///
/// An end at exactly local midnight of the following day is the half-open
/// limit of the start day (minute 1440), not a crossing — though no
/// parseable shift extends that far, so such candidates fail containment
/// with the actionable `OutsideShift` instead.
fn local_span(candidate: Interval, tz: Tz) -> Result<LocalSpan, ConflictError> {
    let start = candidate.start.with_timezone(&tz);
    let end = candidate.end.with_timezone(&tz);

    let start_date = start.date_naive();
    let end_date = end.date_naive();
    let start_minute = (start.hour() * 60 + start.minute()) as u16;

    let end_minute = if end_date == start_date {
        (end.hour() * 60 + end.minute()) as u16
    } else if Some(end_date) == start_date.succ_opt() && end.num_seconds_from_midnight() == 0 {
        24 * 60
    } else {
        return Err(ConflictError::CrossesDayBoundary);
    };

    Ok(LocalSpan {
        weekday: weekday_index(start.weekday()),
        start_minute,
        end_minute,
    })
}
