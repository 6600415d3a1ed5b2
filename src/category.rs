//! Three-bucket ticket categories for grouped sales.
//!
//! Available sections are ranked by price and split **by count**: the top
//! quarter (rounded up, at least one) is `cat1`, the next 35% (rounded up,
//! at least one) is `cat2`, the rest is `cat3`. Buckets left empty are not
//! returned. Categories are recomputed from the section list on every call.

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

use serde::{Deserialize, Serialize};

use crate::config::CategoryConfig;
use crate::section::Section;

/// Which of the three price-ranked buckets a category is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Cat1,
    Cat2,
    Cat3,
}

impl CategoryId {
    /// Buyer-facing name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cat1 => "Category 1",
            Self::Cat2 => "Category 2",
            Self::Cat3 => "Category 3",
        }
    }
}

/// A non-empty group of available sections sharing a price band.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    /// Members, most expensive first.
    pub sections: Vec<Section>,
    /// Lowest `current_price` among the members.
    pub min_price: f64,
    /// Highest `current_price` among the members.
    pub max_price: f64,
    /// Approximate seats still on sale. A fixed share of each member's
    /// `rows * seats_per_row`; there is no seat-level tracking behind it.
    pub estimated_available_seats: u64,
}

/// Bucket available sections with the default split.
#[must_use]
pub fn classify_into_categories(sections: &[Section]) -> Vec<Category> {
    classify_into_categories_with(sections, &CategoryConfig::default())
}

/// Bucket available sections with an explicit split.
///
/// Returns an empty list when no section is available; the caller shows a
/// "no inventory" state. Equal prices keep document order, so membership is
/// stable across calls with the same input.
#[must_use]
pub fn classify_into_categories_with(sections: &[Section], config: &CategoryConfig) -> Vec<Category> {
    let mut ranked: Vec<&Section> = sections.iter().filter(|s| s.available).collect();
    if ranked.is_empty() {
        return Vec::new();
    }
    // Stable: ties keep input order.
    ranked.sort_by(|a, b| b.current_price.total_cmp(&a.current_price));

    let total = ranked.len();
    let top = share(total, config.top_percent).min(total);
    let middle = share(total, config.middle_percent).min(total - top);

    let (top_slice, rest) = ranked.split_at(top);
    let (middle_slice, bottom_slice) = rest.split_at(middle);

    [(CategoryId::Cat1, top_slice), (CategoryId::Cat2, middle_slice), (CategoryId::Cat3, bottom_slice)]
        .into_iter()
        .filter(|(_, members)| !members.is_empty())
        .map(|(id, members)| build_category(id, members, config.seat_estimate_percent))
        .collect()
}

/// `ceil(total * percent / 100)`, never less than one.
fn share(total: usize, percent: u32) -> usize {
    let percent = usize::try_from(percent).unwrap_or(usize::MAX);
    total.saturating_mul(percent).div_ceil(100).max(1)
}

fn build_category(id: CategoryId, members: &[&Section], seat_estimate_percent: u32) -> Category {
    let min_price = members
        .iter()
        .map(|s| s.current_price)
        .fold(f64::INFINITY, f64::min);
    let max_price = members
        .iter()
        .map(|s| s.current_price)
        .fold(f64::NEG_INFINITY, f64::max);
    let estimated_available_seats = members
        .iter()
        .map(|s| s.grid_seats().saturating_mul(u64::from(seat_estimate_percent)) / 100)
        .sum();

    Category {
        id,
        sections: members.iter().map(|s| (*s).clone()).collect(),
        min_price,
        max_price,
        estimated_available_seats,
    }
}
