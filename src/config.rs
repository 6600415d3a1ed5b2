//! Map tuning parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{
    DEGENERATE_EXTENT_PX, LABEL_LENGTH_SHRINK, LABEL_MAX_FONT_PX, LABEL_MIN_FONT_PX, LABEL_SIZE_RATIO,
    MIDDLE_CATEGORY_PERCENT, SEAT_ESTIMATE_PERCENT, TOP_CATEGORY_PERCENT,
};

/// Errors produced while loading configuration.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    /// An environment variable is set but its value cannot be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Parse { var: String, value: String },

    /// Values parse individually but are inconsistent.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Label placement tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelConfig {
    /// Font size floor in CSS pixels.
    pub min_font_px: f64,
    /// Font size ceiling in CSS pixels.
    pub max_font_px: f64,
    /// Font size as a fraction of the shorter side of the section box.
    pub size_ratio: f64,
    /// Relative shrink per character beyond the free length.
    pub length_shrink: f64,
    /// Boxes narrower or shorter than this get no label.
    pub degenerate_extent_px: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            min_font_px: LABEL_MIN_FONT_PX,
            max_font_px: LABEL_MAX_FONT_PX,
            size_ratio: LABEL_SIZE_RATIO,
            length_shrink: LABEL_LENGTH_SHRINK,
            degenerate_extent_px: DEGENERATE_EXTENT_PX,
        }
    }
}

/// Category split, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryConfig {
    pub top_percent: u32,
    pub middle_percent: u32,
    /// Share of each section's seat grid counted as still available.
    pub seat_estimate_percent: u32,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            top_percent: TOP_CATEGORY_PERCENT,
            middle_percent: MIDDLE_CATEGORY_PERCENT,
            seat_estimate_percent: SEAT_ESTIMATE_PERCENT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapConfig {
    pub labels: LabelConfig,
    pub categories: CategoryConfig,
}

impl MapConfig {
    /// Build config from environment variables, defaulting anything unset.
    ///
    /// Optional:
    /// - `SEATMAP_LABEL_MIN_FONT_PX`: default 8
    /// - `SEATMAP_LABEL_MAX_FONT_PX`: default 22
    /// - `SEATMAP_LABEL_SIZE_RATIO`: default 0.35
    /// - `SEATMAP_LABEL_LENGTH_SHRINK`: default 0.12
    /// - `SEATMAP_DEGENERATE_EXTENT_PX`: default 0.5
    /// - `SEATMAP_TOP_CATEGORY_PERCENT`: default 25
    /// - `SEATMAP_MIDDLE_CATEGORY_PERCENT`: default 35
    /// - `SEATMAP_SEAT_ESTIMATE_PERCENT`: default 70
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for a set but unparseable variable and
    /// [`ConfigError::Invalid`] when the values are inconsistent.
    pub fn from_env() -> Result<Self, ConfigError> {
        let labels = LabelConfig {
            min_font_px: env_f64("SEATMAP_LABEL_MIN_FONT_PX", LABEL_MIN_FONT_PX)?,
            max_font_px: env_f64("SEATMAP_LABEL_MAX_FONT_PX", LABEL_MAX_FONT_PX)?,
            size_ratio: env_f64("SEATMAP_LABEL_SIZE_RATIO", LABEL_SIZE_RATIO)?,
            length_shrink: env_f64("SEATMAP_LABEL_LENGTH_SHRINK", LABEL_LENGTH_SHRINK)?,
            degenerate_extent_px: env_f64("SEATMAP_DEGENERATE_EXTENT_PX", DEGENERATE_EXTENT_PX)?,
        };
        let categories = CategoryConfig {
            top_percent: env_u32("SEATMAP_TOP_CATEGORY_PERCENT", TOP_CATEGORY_PERCENT)?,
            middle_percent: env_u32("SEATMAP_MIDDLE_CATEGORY_PERCENT", MIDDLE_CATEGORY_PERCENT)?,
            seat_estimate_percent: env_u32("SEATMAP_SEAT_ESTIMATE_PERCENT", SEAT_ESTIMATE_PERCENT)?,
        };

        let config = Self { labels, categories };
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let l = &self.labels;
        if !(l.min_font_px > 0.0 && l.min_font_px <= l.max_font_px) {
            return Err(ConfigError::Invalid(format!(
                "label font range {}..{} must be positive and ordered",
                l.min_font_px, l.max_font_px
            )));
        }
        if !(l.size_ratio > 0.0 && l.length_shrink >= 0.0 && l.degenerate_extent_px >= 0.0) {
            return Err(ConfigError::Invalid("label ratios must be non-negative (size ratio positive)".into()));
        }

        let c = &self.categories;
        if c.top_percent == 0 || c.middle_percent == 0 || c.top_percent.saturating_add(c.middle_percent) >= 100 {
            return Err(ConfigError::Invalid(format!(
                "category split {}% / {}% must leave room for a third category",
                c.top_percent, c.middle_percent
            )));
        }
        if c.seat_estimate_percent > 100 {
            return Err(ConfigError::Invalid(format!(
                "seat estimate {}% exceeds 100%",
                c.seat_estimate_percent
            )));
        }
        Ok(())
    }
}

fn env_f64(key: &str, default: f64) -> Result<f64, ConfigError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConfigError::Parse { var: key.to_owned(), value: raw }),
    }
}

fn env_u32(key: &str, default: u32) -> Result<u32, ConfigError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(default);
    };
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::Parse { var: key.to_owned(), value: raw.clone() })
}
