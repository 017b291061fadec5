//! # sched-engine
//!
//! Deterministic booking and shift scheduling core for a multi-tenant salon
//! platform.
//!
//! The engine is pure and synchronous: every operation is a function of a
//! caller-supplied, already-tenant-scoped snapshot, completes without
//! blocking or I/O, and returns either a value or one specific error kind.
//! Persistence, notification delivery, and concurrency control (optimistic
//! retry on commit) live with the callers.
//!
//! Canonical intervals are half-open `[start, end)` UTC instants; the
//! tenant's fixed IANA zone governs legacy-label resolution and
//! weekday/minute decomposition, never the zone of the machine running the
//! engine.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use sched_engine::{check_interval, Interval, ShiftRegistry, StaffId};
//!
//! let staff = StaffId("stylist-1".into());
//! let shifts = ShiftRegistry::new(); // every weekday defaults to 10:00–20:00
//!
//! // 11:30–12:00 Tehran local time, no existing bookings: bookable.
//! let candidate = Interval {
//!     start: Utc.with_ymd_and_hms(2026, 10, 20, 8, 0, 0).unwrap(),
//!     end: Utc.with_ymd_and_hms(2026, 10, 20, 8, 30, 0).unwrap(),
//! };
//! let verdict = check_interval(&staff, candidate, &[], &shifts, chrono_tz::Asia::Tehran, None);
//! assert!(verdict.is_ok());
//! ```
//!
//! ## Modules
//!
//! - [`booking`] — data model: ids, staff, bookings, dual-shape intake records
//! - [`catalog`] — service name/id → canonical duration in minutes
//! - [`shifts`] — weekly shift templates and availability checks
//! - [`resolve`] — raw records → canonical `[start, end)` intervals
//! - [`conflict`] — ordered validation of candidate intervals
//! - [`reschedule`] — drag-and-drop reschedule orchestration
//! - [`intake`] — normalize + validate + construct new bookings
//! - [`store`] — repository seam with an in-memory reference implementation
//! - [`error`] — error taxonomy

pub mod booking;
pub mod catalog;
pub mod conflict;
pub mod error;
pub mod intake;
pub mod reschedule;
pub mod resolve;
pub mod shifts;
pub mod store;

pub use booking::{
    Booking, BookingId, BookingRecord, BookingStatus, CanonicalRecord, Interval, LegacyRecord,
    StaffId, StaffMember, TenantId,
};
pub use catalog::{Service, ServiceCatalog};
pub use conflict::check_interval;
pub use error::{
    ConflictError, ResolutionError, RescheduleError, ScheduleError, StoreError, ValidationError,
};
pub use intake::admit_booking;
pub use reschedule::{reschedule, RescheduleOutcome};
pub use resolve::resolve_interval;
pub use shifts::{weekday_index, Shift, ShiftRegistry};
pub use store::{BookingStore, MemoryStore};
