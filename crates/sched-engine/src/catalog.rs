//! Service catalog — maps a service name or id to a canonical duration.
//!
//! Lookup is pure and total: configured services match first (by id, then by
//! case-insensitive name), unknown names fall through an ordered keyword rule
//! table, and anything still unmatched gets the tenant default. Free-text
//! service names are common in migrated data, so the keyword rules carry both
//! Persian and English vocabulary.

use serde::{Deserialize, Serialize};

/// A bookable service as configured by the tenant. Immutable per-tenant
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub duration_minutes: u32,
}

/// One keyword → duration fallback rule.
struct DurationRule {
    keywords: &'static [&'static str],
    minutes: u32,
}

/// Ordered fallback rules for free-text service names. The first rule with a
/// matching keyword wins; declaration order is the tie-break, so keep new
/// rules at the end unless they must shadow an existing one.
const DURATION_RULES: &[DurationRule] = &[
    DurationRule {
        keywords: &["haircut", "cut", "هیرکات", "کوتاهی"],
        minutes: 30,
    },
    DurationRule {
        keywords: &["color", "رنگ"],
        minutes: 120,
    },
    DurationRule {
        keywords: &["pedicure", "پدیکور"],
        minutes: 60,
    },
    DurationRule {
        keywords: &["vip", "bridal", "عروس"],
        minutes: 120,
    },
];

/// Duration assigned when no service or rule matches, in minutes.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Per-tenant duration lookup over configured services plus the keyword
/// fallback rules.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    services: Vec<Service>,
    default_minutes: u32,
}

impl ServiceCatalog {
    /// Catalog with the standard 60-minute default.
    pub fn new(services: Vec<Service>) -> Self {
        Self::with_default(services, DEFAULT_DURATION_MINUTES)
    }

    /// Catalog with a tenant-specific fallback duration.
    pub fn with_default(services: Vec<Service>, default_minutes: u32) -> Self {
        Self {
            services,
            default_minutes,
        }
    }

    /// Resolve a service name or id to a duration in minutes.
    ///
    /// Deterministic and never fails: an exact id match wins, then an exact
    /// case-insensitive name match, then the first keyword rule whose
    /// keyword occurs in the (lowercased) input, then the default.
    pub fn duration_for(&self, name_or_id: &str) -> u32 {
        if let Some(service) = self.services.iter().find(|s| s.id == name_or_id) {
            return service.duration_minutes;
        }

        let needle = name_or_id.to_lowercase();
        if let Some(service) = self
            .services
            .iter()
            .find(|s| s.name.to_lowercase() == needle)
        {
            return service.duration_minutes;
        }

        for rule in DURATION_RULES {
            if rule.keywords.iter().any(|k| needle.contains(k)) {
                return rule.minutes;
            }
        }

        self.default_minutes
    }
}
