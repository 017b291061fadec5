//! Error taxonomy for the scheduling core.
//!
//! All errors are values: every public operation returns a success value or
//! one specific error kind, and none of these conditions panic. Messages are
//! operator-facing and surfaced verbatim by callers.

use crate::booking::BookingId;
use thiserror::Error;

/// Failure to normalize a raw intake record into a canonical interval.
/// Not retryable without corrected input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// The legacy date label matched none of the upcoming calendar dates.
    #[error("unrecognized date label: {0:?}")]
    UnknownDate(String),

    /// The legacy time label did not parse as an in-range HH:MM pair.
    #[error("invalid time label: {0:?}")]
    InvalidTime(String),
}

/// Business-rule rejection of a candidate interval. Always recoverable by
/// choosing a different interval; never fatal to the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConflictError {
    /// The candidate's start is not strictly before its end.
    #[error("interval is empty or inverted")]
    DegenerateInterval,

    /// The candidate spans more than one local day; shifts are single-day.
    #[error("interval crosses a day boundary")]
    CrossesDayBoundary,

    /// The candidate falls outside the staff member's active shift window.
    #[error("interval falls outside the staff member's shift")]
    OutsideShift,

    /// The candidate overlaps a non-cancelled booking for the same staff.
    #[error("interval overlaps booking {0}")]
    Overlap(BookingId),
}

/// Malformed shift definition, rejected at write time — never silently
/// stored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An active shift must start strictly before it ends (compared as
    /// minutes since midnight, not lexically).
    #[error("shift start {start:?} is not before end {end:?}")]
    EmptyShiftWindow { start: String, end: String },

    /// A shift time failed to parse as HH:MM with both fields in range.
    #[error("not a valid HH:MM time of day: {0:?}")]
    InvalidTimeOfDay(String),

    /// Weekday indices are 0 (Saturday) through 6 (Friday).
    #[error("weekday index {0} out of range 0..=6")]
    InvalidWeekday(u8),
}

/// A reschedule request that could not even be attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RescheduleError {
    /// The id is absent from the supplied snapshot — a malformed request,
    /// distinct from a business rejection.
    #[error("no booking with id {0} in the supplied snapshot")]
    UnknownBooking(BookingId),
}

/// Failure in a [`crate::store::BookingStore`] implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage failure: {0}")]
    Io(String),

    /// A commit-time optimistic-concurrency check failed; the caller must
    /// re-fetch the snapshot and re-run the operation.
    #[error("concurrent modification detected")]
    Conflict,
}

/// Umbrella error for surfaces that funnel several kinds (intake, the CLI).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error(transparent)]
    Conflict(#[from] ConflictError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Reschedule(#[from] RescheduleError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
