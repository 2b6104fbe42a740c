//! Cover art configuration
//!
//! Every literal the generator depends on lives here as a named constant,
//! gathered into [`CoverArtConfig`] so callers can override them from JSON.

use crate::random::{KeyScheme, RandomSource};
use crate::svg::LineCap;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canvas width in user units
pub const CANVAS_WIDTH: f64 = 500.0;

/// Canvas height in user units
pub const CANVAS_HEIGHT: f64 = 500.0;

/// Margin on each side as a fraction of the canvas dimension
pub const MARGIN_FRACTION: f64 = 0.1;

/// Candidate grids, picked with one draw per scene
pub const GRID_LAYOUTS: [GridLayout; 6] = [
    GridLayout::new(2, 2, 10.0),
    GridLayout::new(3, 2, 10.0),
    GridLayout::new(3, 3, 5.0),
    GridLayout::new(4, 3, 5.0),
    GridLayout::new(4, 4, 5.0),
    GridLayout::new(5, 5, 5.0),
];

/// Vertical branch levels per tree
pub const BRANCH_LEVELS: DrawRange = DrawRange::new(30.0, 40.0);

/// Sub-branch segments per branch cluster
pub const SUB_BRANCHES: DrawRange = DrawRange::new(5.0, 10.0);

/// Trunk segments per tree
pub const TRUNKS: DrawRange = DrawRange::new(2.0, 5.0);

/// Upper bound accepted for any draw range in a loaded config
pub const MAX_DRAW: f64 = 1000.0;

/// Paper colour
pub const BACKGROUND: &str = "#F6E6D5";

/// Ink colour
pub const FOREGROUND: &str = "#1A1F1A";

/// A grid of trees: `columns` × `rows` cells with a spacing term `gap`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    pub gap: f64,
}

impl GridLayout {
    pub const fn new(columns: u32, rows: u32, gap: f64) -> Self {
        Self { columns, rows, gap }
    }

    /// Number of trees in the grid
    pub fn cells(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        GRID_LAYOUTS[0]
    }
}

/// Bounds for an integer draw, truncated toward zero.
///
/// `max` is effectively exclusive: `DrawRange::new(2.0, 5.0)` yields 2, 3 or 4.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawRange {
    pub min: f64,
    pub max: f64,
}

impl DrawRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn draw(&self, rng: &mut RandomSource) -> i64 {
        rng.value_int_range(self.min, self.max)
    }
}

/// Tunables for [`make_cover_art_with`](super::make_cover_art_with)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverArtConfig {
    pub width: f64,
    pub height: f64,
    pub margin_fraction: f64,
    pub layouts: Vec<GridLayout>,
    pub branch_levels: DrawRange,
    pub sub_branches: DrawRange,
    pub trunks: DrawRange,
    pub background: String,
    pub foreground: String,
    pub line_cap: Option<LineCap>,
    /// `compatible` reproduces artwork published before seeds were terminated
    pub key_scheme: KeyScheme,
}

impl Default for CoverArtConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            margin_fraction: MARGIN_FRACTION,
            layouts: GRID_LAYOUTS.to_vec(),
            branch_levels: BRANCH_LEVELS,
            sub_branches: SUB_BRANCHES,
            trunks: TRUNKS,
            background: BACKGROUND.to_owned(),
            foreground: FOREGROUND.to_owned(),
            line_cap: Some(LineCap::Round),
            key_scheme: KeyScheme::Terminated,
        }
    }
}

impl CoverArtConfig {
    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::debug!("Loaded cover art config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn margin_x(&self) -> f64 {
        self.width * self.margin_fraction
    }

    pub fn margin_y(&self) -> f64 {
        self.height * self.margin_fraction
    }

    /// Check the values the generator divides or iterates by
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Canvas must have positive size, got {}x{}",
                self.width, self.height
            )));
        }
        if !(0.0..0.5).contains(&self.margin_fraction) {
            return Err(Error::InvalidParameter(format!(
                "Margin fraction must be in [0, 0.5), got {}",
                self.margin_fraction
            )));
        }
        if self.layouts.is_empty() {
            return Err(Error::InvalidParameter(
                "At least one grid layout is required".to_owned(),
            ));
        }
        if let Some(layout) = self.layouts.iter().find(|l| l.columns == 0 || l.rows == 0) {
            return Err(Error::InvalidParameter(format!(
                "Grid layout needs at least one row and column, got {}x{}",
                layout.columns, layout.rows
            )));
        }
        // Tapering branch widths need at least two levels
        for (name, range, least) in [
            ("branch_levels", self.branch_levels, 2.0),
            ("sub_branches", self.sub_branches, 1.0),
            ("trunks", self.trunks, 1.0),
        ] {
            let (lo, hi) = (range.min.min(range.max), range.min.max(range.max));
            if !(lo >= least && hi <= MAX_DRAW) {
                return Err(Error::InvalidParameter(format!(
                    "{} must lie within {}..{}, got {}..{}",
                    name, least, MAX_DRAW, range.min, range.max
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = CoverArtConfig::default();
        assert_eq!(config.width, 500.0);
        assert_eq!(config.height, 500.0);
        assert_eq!(config.margin_x(), 50.0);
        assert_eq!(config.margin_y(), 50.0);
        assert_eq!(config.layouts.len(), 6);
        assert_eq!(config.layouts[5], GridLayout::new(5, 5, 5.0));
        assert_eq!(config.branch_levels, DrawRange::new(30.0, 40.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = CoverArtConfig::from_json(r##"{"background": "#FFFFFF"}"##).unwrap();
        assert_eq!(config.background, "#FFFFFF");
        assert_eq!(config.foreground, FOREGROUND);
        assert_eq!(config.layouts, GRID_LAYOUTS.to_vec());
    }

    #[test]
    fn json_round_trip_preserves_config() {
        let config = CoverArtConfig::default();
        let json = config.to_json_pretty().unwrap();
        assert!(json.contains("\"line_cap\": \"round\""));
        assert!(json.contains("\"key_scheme\": \"terminated\""));
        assert_eq!(CoverArtConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn rejects_empty_layouts() {
        let err = CoverArtConfig::from_json(r#"{"layouts": []}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn rejects_degenerate_grid() {
        let config = CoverArtConfig {
            layouts: vec![GridLayout::new(0, 2, 5.0)],
            ..CoverArtConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_ranges_that_draw_too_few_or_too_many() {
        let err = CoverArtConfig::from_json(r#"{"branch_levels": {"min": 1.0, "max": 1.5}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));

        for json in [
            r#"{"trunks": {"min": 0.0, "max": 3.0}}"#,
            r#"{"sub_branches": {"min": 0.5, "max": 0.9}}"#,
            r#"{"trunks": {"min": 2.0, "max": 1e12}}"#,
            r#"{"branch_levels": {"min": 40.0, "max": 1.0}}"#,
        ] {
            assert!(CoverArtConfig::from_json(json).is_err(), "accepted {}", json);
        }

        let config =
            CoverArtConfig::from_json(r#"{"branch_levels": {"min": 2.0, "max": 3.0}}"#).unwrap();
        assert_eq!(config.branch_levels, DrawRange::new(2.0, 3.0));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = CoverArtConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn draw_range_truncates_upper_bound() {
        let mut rng = RandomSource::new(Some("trunks"));
        for _ in 0..1000 {
            let n = TRUNKS.draw(&mut rng);
            assert!((2..5).contains(&n));
        }
    }
}
