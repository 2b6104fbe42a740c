//! Seeded cover art: a grid of line-drawn trees
//!
//! ## Example
//!
//! ```rust
//! use cozyco_core::art::{CoverArtConfig, generate_scene};
//! use cozyco_core::random::RandomSource;
//!
//! let mut rng = RandomSource::new(Some("1234567890"));
//! let scene = generate_scene(&mut rng, &CoverArtConfig::default());
//! assert_eq!((scene.layout.columns, scene.layout.rows), (4, 3));
//! assert_eq!(scene.path_count(), 5949);
//! ```

pub mod config;
mod tree;

use crate::geometry::{Path, translate_paths, vector};
use crate::math::lerp;
use crate::random::RandomSource;
use crate::svg::{StyleOptions, document, polylines_to_svg};

pub use config::{
    BACKGROUND, BRANCH_LEVELS, CANVAS_HEIGHT, CANVAS_WIDTH, CoverArtConfig, DrawRange,
    FOREGROUND, GRID_LAYOUTS, GridLayout, MARGIN_FRACTION, MAX_DRAW, SUB_BRANCHES, TRUNKS,
};

/// All strokes of one generation run, in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// The grid the trees were laid out on
    pub layout: GridLayout,
    /// Trunk and branch strokes, tree by tree, row-major
    pub paths: Vec<Path>,
}

impl Scene {
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }
}

/// Size of one tree's cell.
///
/// The gap term is multiplied by the grid dimension rather than subtracted
/// once per cell; existing artwork depends on this exact formula.
fn cell_size(config: &CoverArtConfig, layout: GridLayout) -> (f64, f64) {
    let columns = f64::from(layout.columns);
    let rows = f64::from(layout.rows);
    let w = (config.width - config.margin_x() * 2.0) / columns - layout.gap * columns - 1.0;
    let h = (config.height - config.margin_y() * 2.0) / rows - layout.gap * rows - 1.0;
    (w, h)
}

/// Position of index `i` of `n` along a row or column, in [0, 1]
fn grid_progress(i: u32, n: u32) -> f64 {
    if n <= 1 {
        0.5
    } else {
        f64::from(i) / f64::from(n - 1)
    }
}

/// Lay out a grid of trees from the random stream
pub fn generate_scene(rng: &mut RandomSource, config: &CoverArtConfig) -> Scene {
    let layout = rng.pick(&config.layouts).copied().unwrap_or_default();
    let (tree_w, tree_h) = cell_size(config, layout);
    let (margin_x, margin_y) = (config.margin_x(), config.margin_y());

    tracing::debug!(
        "Seed {} selected {}x{} grid (gap {}, {} trees)",
        rng.seed(),
        layout.columns,
        layout.rows,
        layout.gap,
        layout.cells()
    );

    let mut paths = Vec::new();
    for row in 0..layout.rows {
        let r_index = grid_progress(row, layout.rows);
        for column in 0..layout.columns {
            let c_index = grid_progress(column, layout.columns);
            let tree = tree::make_tree(rng, tree_w, tree_h, 1.0, config);

            let tree_cx = tree_w / 2.0;
            let tree_cy = tree_h / 2.0;
            let translate_x = lerp(
                tree_cx + margin_x,
                config.width - tree_cx - margin_x,
                c_index,
            ) - tree_cx;
            let translate_y = lerp(
                tree_cy + margin_y,
                config.height - tree_cy - margin_y,
                r_index,
            ) - tree_cy;

            paths.extend(translate_paths(
                &tree,
                vector(translate_x, translate_y, 0.0),
            ));
        }
    }

    tracing::debug!("Generated {} paths", paths.len());
    Scene { layout, paths }
}

/// Stroke style for a scene: ink colour, configured cap, width `2 / rows`
pub fn scene_style(scene: &Scene, config: &CoverArtConfig) -> StyleOptions {
    let mut style = StyleOptions::new()
        .with_stroke(config.foreground.clone())
        .with_line_width(2.0 / f64::from(scene.layout.rows.max(1)));
    style.line_cap = config.line_cap;
    style
}

/// Serialize a scene to a complete SVG document
pub fn render_scene(scene: &Scene, config: &CoverArtConfig) -> String {
    let group = polylines_to_svg(&scene.paths, &scene_style(scene, config));
    document(config.width, config.height, &config.background, &group)
}

/// Generate cover art with the default configuration.
///
/// A missing or empty seed is replaced with a random one, so the result is
/// always a valid image.
pub fn make_cover_art(seed: Option<&str>) -> String {
    make_cover_art_with(seed, &CoverArtConfig::default())
}

/// Generate cover art with a custom configuration
pub fn make_cover_art_with(seed: Option<&str>, config: &CoverArtConfig) -> String {
    let mut rng = RandomSource::with_scheme(seed, config.key_scheme);
    let scene = generate_scene(&mut rng, config);
    render_scene(&scene, config)
}
