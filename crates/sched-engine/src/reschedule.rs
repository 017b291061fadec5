//! Reschedule orchestration — revalidate a dragged interval, then apply or
//! reject the move.
//!
//! The coordinator is a pure function of its inputs and therefore
//! idempotent over an unchanged snapshot. It never persists, never
//! notifies, and never retries: committing an `Applied` outcome (under the
//! persistence layer's optimistic-concurrency check) and resubmitting after
//! a rejection are both caller concerns.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::booking::{Booking, BookingId, Interval};
use crate::conflict::check_interval;
use crate::error::{ConflictError, RescheduleError};
use crate::shifts::ShiftRegistry;

/// Terminal state of one reschedule attempt
/// (`Proposed → Validated → Applied` or `Proposed → Rejected`).
#[derive(Debug, Clone, PartialEq)]
pub enum RescheduleOutcome {
    /// Validation passed; the returned booking carries the new interval and
    /// is otherwise identical to the original.
    Applied(Booking),
    /// Validation failed; the original booking is returned unchanged — no
    /// partial mutation.
    Rejected {
        booking: Booking,
        reason: ConflictError,
    },
}

/// Revalidate `[new_start, new_end)` for the given booking against an
/// already-tenant-scoped snapshot and produce the outcome.
///
/// The target booking is excluded from its own overlap set, so dragging a
/// booking within (or around) its current slot is legal. A `Rejected`
/// outcome is terminal for the attempt; the caller may resubmit a different
/// interval as a new attempt.
///
/// # Errors
///
/// [`RescheduleError::UnknownBooking`] when the id is absent from the
/// snapshot. Business rejections are not errors at this level — they come
/// back as [`RescheduleOutcome::Rejected`].
pub fn reschedule(
    booking_id: &BookingId,
    new_start: DateTime<Utc>,
    new_end: DateTime<Utc>,
    bookings: &[Booking],
    shifts: &ShiftRegistry,
    tz: Tz,
) -> Result<RescheduleOutcome, RescheduleError> {
    let original = bookings
        .iter()
        .find(|b| b.id == *booking_id)
        .ok_or_else(|| RescheduleError::UnknownBooking(booking_id.clone()))?;

    let candidate = Interval {
        start: new_start,
        end: new_end,
    };

    match check_interval(
        &original.staff_id,
        candidate,
        bookings,
        shifts,
        tz,
        Some(booking_id),
    ) {
        Ok(()) => {
            tracing::debug!(booking = %booking_id, %new_start, %new_end, "reschedule applied");
            let mut updated = original.clone();
            updated.start = new_start;
            updated.end = new_end;
            Ok(RescheduleOutcome::Applied(updated))
        }
        Err(reason) => {
            tracing::debug!(booking = %booking_id, %reason, "reschedule rejected");
            Ok(RescheduleOutcome::Rejected {
                booking: original.clone(),
                reason,
            })
        }
    }
}
