//! Core data model: tenants, staff, bookings, and the dual-shape intake record.
//!
//! Canonical timestamps are UTC instants (`DateTime<Utc>`), so interval
//! comparisons are total and machine-independent. The tenant's fixed IANA
//! zone is only consulted where wall-clock semantics matter: legacy label
//! resolution and weekday/minute-of-day decomposition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque tenant identifier. Every entity in the core belongs to exactly one
/// tenant; the core never compares entities across tenants — callers supply
/// already-tenant-scoped snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(pub String);

/// Opaque staff-member identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId(pub String);

/// Opaque booking identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub String);

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Booking lifecycle status. `Cancelled` bookings are retained for history
/// but never participate in conflict checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// A staff member as configured by the tenant. `role` is free-form tenant
/// vocabulary (stylist, colorist, …). Inactive staff keep their history but
/// should not receive new bookings; enforcing that is the intake surface's
/// job, not this type's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    pub role: String,
    pub active: bool,
}

/// A half-open `[start, end)` time interval. `end` is excluded, so adjacent
/// bookings can legally touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Half-open overlap test: `a.start < b.end && b.start < a.end`.
    /// Touching intervals (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A persisted booking in canonical form. `end = start + service duration`
/// unless an operator manually adjusted the interval; the stored interval is
/// authoritative either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub tenant_id: TenantId,
    pub customer_name: String,
    /// Service name or id as entered; resolved to a duration by the catalog.
    pub service: String,
    pub staff_id: StaffId,
    pub status: BookingStatus,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Booking {
    pub fn interval(&self) -> Interval {
        Interval {
            start: self.start,
            end: self.end,
        }
    }
}

/// Raw intake record, before normalization. Persisted bookings from older
/// deployments carry display labels instead of timestamps; both shapes
/// deserialize directly from intake JSON and are resolved exactly once at
/// the boundary (see [`crate::resolve`]), after which only the canonical
/// shape circulates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookingRecord {
    Canonical(CanonicalRecord),
    Legacy(LegacyRecord),
}

impl BookingRecord {
    pub fn id(&self) -> &BookingId {
        match self {
            BookingRecord::Canonical(r) => &r.id,
            BookingRecord::Legacy(r) => &r.id,
        }
    }

    pub fn staff_id(&self) -> &StaffId {
        match self {
            BookingRecord::Canonical(r) => &r.staff_id,
            BookingRecord::Legacy(r) => &r.staff_id,
        }
    }

    pub fn customer_name(&self) -> &str {
        match self {
            BookingRecord::Canonical(r) => &r.customer_name,
            BookingRecord::Legacy(r) => &r.customer_name,
        }
    }

    pub fn service(&self) -> &str {
        match self {
            BookingRecord::Canonical(r) => &r.service,
            BookingRecord::Legacy(r) => &r.service,
        }
    }

    pub fn status(&self) -> BookingStatus {
        match self {
            BookingRecord::Canonical(r) => r.status,
            BookingRecord::Legacy(r) => r.status,
        }
    }
}

/// Modern record shape: the interval is already explicit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub id: BookingId,
    pub customer_name: String,
    pub service: String,
    pub staff_id: StaffId,
    #[serde(default)]
    pub status: BookingStatus,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Legacy record shape: a weekday-name + day-of-month date label and an
/// HH:MM time label. After normalization the labels remain display-only
/// provenance; the resolved interval is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyRecord {
    pub id: BookingId,
    pub customer_name: String,
    pub service: String,
    pub staff_id: StaffId,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(alias = "date")]
    pub date_label: String,
    #[serde(alias = "time")]
    pub time_label: String,
}
