//! Repository seam for booking snapshots.
//!
//! The core never touches storage: callers load a tenant's bookings, run the
//! pure operations, and save the result back. Optimistic-concurrency
//! enforcement on commit belongs to the implementation — a failed
//! compare-and-swap surfaces as [`StoreError::Conflict`], and the caller
//! re-fetches the snapshot and re-runs the operation.

use std::collections::HashMap;

use crate::booking::{Booking, TenantId};
use crate::error::StoreError;

/// Tenant-scoped booking persistence.
pub trait BookingStore {
    /// Load the tenant's bookings. A tenant with no saved snapshot has no
    /// bookings yet.
    fn load(&self, tenant: &TenantId) -> Result<Vec<Booking>, StoreError>;

    /// Replace the tenant's bookings with the supplied snapshot.
    fn save(&mut self, tenant: &TenantId, bookings: Vec<Booking>) -> Result<(), StoreError>;
}

/// In-memory store backing tests and the CLI harness.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: HashMap<TenantId, Vec<Booking>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingStore for MemoryStore {
    fn load(&self, tenant: &TenantId) -> Result<Vec<Booking>, StoreError> {
        Ok(self.data.get(tenant).cloned().unwrap_or_default())
    }

    fn save(&mut self, tenant: &TenantId, bookings: Vec<Booking>) -> Result<(), StoreError> {
        self.data.insert(tenant.clone(), bookings);
        Ok(())
    }
}
