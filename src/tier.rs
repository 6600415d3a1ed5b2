//! Price tiers for legend coloring.

#[cfg(test)]
#[path = "tier_test.rs"]
mod tier_test;

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// Normalized price at or above which a section is premium.
pub const PREMIUM_FLOOR: f64 = 2.0 / 3.0;
/// Normalized price at or above which a section is standard.
pub const STANDARD_FLOOR: f64 = 1.0 / 3.0;

/// Qualitative price bucket.
///
/// Variants are declared cheapest first so `Ord` follows price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Value,
    Standard,
    Premium,
}

impl Tier {
    /// Legend text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Value => "Value",
            Self::Standard => "Standard",
            Self::Premium => "Premium",
        }
    }

    /// Class applied to section groups and legend swatches.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Value => "tier-value",
            Self::Standard => "tier-standard",
            Self::Premium => "tier-premium",
        }
    }
}

/// Venue-wide price bounds used to normalize individual prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Classify `price` against `[min_price, max_price]`.
///
/// The price is normalized to `[0, 1]` and clamped. A degenerate range
/// (`max_price <= min_price`) or any non-finite input resolves to
/// [`Tier::Standard`] instead of dividing by zero.
#[must_use]
pub fn classify_price_tier(price: f64, min_price: f64, max_price: f64) -> Tier {
    if !(price.is_finite() && min_price.is_finite() && max_price.is_finite()) || max_price <= min_price {
        return Tier::Standard;
    }

    let normalized = ((price - min_price) / (max_price - min_price)).clamp(0.0, 1.0);
    if normalized >= PREMIUM_FLOOR {
        Tier::Premium
    } else if normalized >= STANDARD_FLOOR {
        Tier::Standard
    } else {
        Tier::Value
    }
}

/// Min/max `current_price` over available sections, `None` when none are available.
#[must_use]
pub fn price_range(sections: &[Section]) -> Option<PriceRange> {
    sections
        .iter()
        .filter(|s| s.available)
        .map(|s| s.current_price)
        .fold(None, |range: Option<PriceRange>, price| {
            Some(match range {
                None => PriceRange { min: price, max: price },
                Some(r) => PriceRange { min: r.min.min(price), max: r.max.max(price) },
            })
        })
}

/// Tier of one section within the venue-wide `range`.
#[must_use]
pub fn tier_for_section(section: &Section, range: PriceRange) -> Tier {
    classify_price_tier(section.current_price, range.min, range.max)
}

/// Tier for every section, in input order. Unavailable sections are still
/// classified (they stay visible on the map), but do not widen the range.
#[must_use]
pub fn classify_sections(sections: &[Section]) -> Vec<(String, Tier)> {
    let range = price_range(sections).unwrap_or(PriceRange { min: 0.0, max: 0.0 });
    sections
        .iter()
        .map(|s| (s.id.clone(), tier_for_section(s, range)))
        .collect()
}
