//! Per-staff weekly shift templates and availability checks.
//!
//! Weekday indexing is Saturday-first: 0 = Saturday … 6 = Friday, matching
//! the regional work week. The index is a storage/logic convention only and
//! is independent of any display locale.
//!
//! Staff created before shift data existed have no stored rows; lookups
//! synthesize a default 10:00–20:00 active shift for missing weekdays.

use std::collections::HashMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::booking::StaffId;
use crate::error::ValidationError;

/// Start of the synthesized default shift, minutes since midnight (10:00).
pub const DEFAULT_SHIFT_START: u16 = 10 * 60;
/// End of the synthesized default shift, minutes since midnight (20:00).
pub const DEFAULT_SHIFT_END: u16 = 20 * 60;

/// Map a calendar weekday to the Saturday-first index used across the core.
pub fn weekday_index(weekday: Weekday) -> u8 {
    match weekday {
        Weekday::Sat => 0,
        Weekday::Sun => 1,
        Weekday::Mon => 2,
        Weekday::Tue => 3,
        Weekday::Wed => 4,
        Weekday::Thu => 5,
        Weekday::Fri => 6,
    }
}

/// One staff member's recurring availability window for a single weekday.
/// Times are minutes since local midnight. Invariant: `start_minute <
/// end_minute` whenever `active` — enforced at write time by
/// [`ShiftRegistry::set_shift`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub staff_id: StaffId,
    /// Saturday-first weekday index, 0..=6.
    pub weekday: u8,
    pub start_minute: u16,
    pub end_minute: u16,
    pub active: bool,
}

/// Owns the canonical shift per (staff, weekday). Upserts are
/// last-write-wins; at most one stored shift exists per slot.
#[derive(Debug, Clone, Default)]
pub struct ShiftRegistry {
    shifts: HashMap<StaffId, [Option<Shift>; 7]>,
}

impl ShiftRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert the shift for one (staff, weekday) slot.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidWeekday` for an index outside 0..=6.
    /// - `ValidationError::InvalidTimeOfDay` if either time is not HH:MM.
    /// - `ValidationError::EmptyShiftWindow` if an active shift would start
    ///   at or after its end (compared numerically, not lexically).
    pub fn set_shift(
        &mut self,
        staff_id: &StaffId,
        weekday: u8,
        start: &str,
        end: &str,
        active: bool,
    ) -> Result<(), ValidationError> {
        if weekday > 6 {
            return Err(ValidationError::InvalidWeekday(weekday));
        }
        let start_minute = parse_hhmm(start)
            .ok_or_else(|| ValidationError::InvalidTimeOfDay(start.to_string()))?;
        let end_minute =
            parse_hhmm(end).ok_or_else(|| ValidationError::InvalidTimeOfDay(end.to_string()))?;
        if active && start_minute >= end_minute {
            return Err(ValidationError::EmptyShiftWindow {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let week = self.shifts.entry(staff_id.clone()).or_default();
        week[weekday as usize] = Some(Shift {
            staff_id: staff_id.clone(),
            weekday,
            start_minute,
            end_minute,
            active,
        });
        Ok(())
    }

    /// Mark a weekday off. The stored inactive shift shadows the synthesized
    /// default, making the whole day unavailable.
    pub fn deactivate(&mut self, staff_id: &StaffId, weekday: u8) -> Result<(), ValidationError> {
        if weekday > 6 {
            return Err(ValidationError::InvalidWeekday(weekday));
        }
        let week = self.shifts.entry(staff_id.clone()).or_default();
        week[weekday as usize] = Some(Shift {
            staff_id: staff_id.clone(),
            weekday,
            start_minute: DEFAULT_SHIFT_START,
            end_minute: DEFAULT_SHIFT_END,
            active: false,
        });
        Ok(())
    }

    /// The full week for one staff member, Saturday-first, with the default
    /// shift synthesized for any weekday missing a stored record.
    pub fn shifts_for(&self, staff_id: &StaffId) -> [Shift; 7] {
        std::array::from_fn(|i| {
            self.stored(staff_id, i as u8)
                .cloned()
                .unwrap_or_else(|| default_shift(staff_id, i as u8))
        })
    }

    /// True iff the weekday's shift (stored or synthesized) is active and
    /// `shift.start ≤ start && end ≤ shift.end`. An inactive shift makes the
    /// whole day unavailable. Out-of-range weekdays are simply unavailable.
    pub fn is_within_shift(
        &self,
        staff_id: &StaffId,
        weekday: u8,
        start_minute: u16,
        end_minute: u16,
    ) -> bool {
        if weekday > 6 {
            return false;
        }
        let synthesized;
        let shift = match self.stored(staff_id, weekday) {
            Some(stored) => stored,
            None => {
                synthesized = default_shift(staff_id, weekday);
                &synthesized
            }
        };
        shift.active && shift.start_minute <= start_minute && end_minute <= shift.end_minute
    }

    fn stored(&self, staff_id: &StaffId, weekday: u8) -> Option<&Shift> {
        self.shifts
            .get(staff_id)
            .and_then(|week| week[weekday as usize].as_ref())
    }
}

fn default_shift(staff_id: &StaffId, weekday: u8) -> Shift {
    Shift {
        staff_id: staff_id.clone(),
        weekday,
        start_minute: DEFAULT_SHIFT_START,
        end_minute: DEFAULT_SHIFT_END,
        active: true,
    }
}

/// Parse "HH:MM" into minutes since midnight. `None` unless both fields are
/// integers with hour < 24 and minute < 60.
pub(crate) fn parse_hhmm(text: &str) -> Option<u16> {
    let (hour, minute) = text.trim().split_once(':')?;
    let hour: u16 = hour.parse().ok()?;
    let minute: u16 = minute.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(hour * 60 + minute)
}
