//! Line-drawn tree synthesis
//!
//! A tree is a bundle of near-vertical trunk strokes with short branch
//! strokes hanging off both sides at evenly spaced heights. Branches are
//! widest at the bottom and taper toward the top.

use super::config::CoverArtConfig;
use crate::geometry::{Path, Vector, lerp_vector, translate_paths, vector};
use crate::math::{hypot, map_range};
use crate::random::RandomSource;

/// Width envelope and tilt shared by every branch of one tree
struct BranchStyle {
    upward_rotation: f64,
    min_width: f64,
    max_width: f64,
}

/// Build one tree inside a `w` × `h` cell, vertically centred in the cell.
///
/// The order of random draws is part of the output contract: changing it
/// changes every tree that follows.
pub(crate) fn make_tree(
    rng: &mut RandomSource,
    w: f64,
    h: f64,
    line_width: f64,
    config: &CoverArtConfig,
) -> Vec<Path> {
    let mut trunks: Vec<Path> = Vec::new();
    let mut branches: Vec<Path> = Vec::new();

    let tree_width = rng.value_range(w * 0.5, w);
    let tree_height = rng.value_range(h * 0.5, h);
    let cx = w / 2.0;
    let rotation = rng.value_range(2.0, 20.0);
    let levels = config.branch_levels.draw(rng);
    let upward_rotation = if rng.boolean() {
        120.0 - rotation
    } else {
        100.0 + rotation
    };
    let style = BranchStyle {
        upward_rotation,
        max_width: tree_width * rng.value_range(0.2, 0.5),
        min_width: tree_width / rng.value_range(20.0, 100.0),
    };

    // Trunks
    let trunk_count = config.trunks.draw(rng);
    let trunk_start_y = rng.value_range(0.0, tree_height * 0.02);
    for i in 0..trunk_count {
        let offset = i as f64 * line_width;
        let lean = rng.value_range(-(line_width * 3.0), line_width * 3.0);
        let start = vector(cx + offset / 3.0, trunk_start_y, 0.0);
        let end_x = cx + offset + lean;
        let end_y = rng.value_range(tree_height * 0.98, tree_height);
        trunks.push(vec![start, vector(end_x, end_y, 0.0)]);
    }

    // Branches, bottom level first
    let bottom_padding = rng.value_range(tree_height * 0.05, tree_height * 0.3);
    let level_step = (tree_height - bottom_padding) / levels as f64;

    for i in 0..levels {
        // A single level keeps the widest branch
        let branch_width = if levels > 1 {
            map_range(
                i as f64,
                0.0,
                (levels - 1) as f64,
                style.max_width,
                style.min_width,
            )
        } else {
            style.max_width
        };
        let y = tree_height - bottom_padding - level_step * i as f64;
        let root = vector(cx, y, 0.0);

        make_branch_cluster(
            rng,
            root,
            vector(cx - branch_width, y, 0.0),
            &style,
            config,
            &mut branches,
        );
        make_branch_cluster(
            rng,
            root,
            vector(cx + branch_width, y, 0.0),
            &style,
            config,
            &mut branches,
        );
    }

    trunks.append(&mut branches);
    translate_paths(&trunks, vector(0.0, (h - tree_height) / 2.0, 0.0))
}

/// Scatter short strokes along the limb from `root` toward `tip`
fn make_branch_cluster(
    rng: &mut RandomSource,
    root: Vector,
    tip: Vector,
    style: &BranchStyle,
    config: &CoverArtConfig,
    out: &mut Vec<Path>,
) {
    let (x1, y1) = (root.x, root.y);
    let x2 = tip.x;
    let y2 = (rng.value_range(100.0, 110.0) * root.y) / style.upward_rotation;
    let count = config.sub_branches.draw(rng);

    let limb_start = vector(x1, y1, 0.0);
    let limb_end = vector(x2, y2, 0.0);
    let size = hypot(x2 - x1, y2 - y1);
    let jitter = map_range(size, style.min_width, style.max_width, 1.0, 2.0);

    for _ in 0..count {
        let start_pos = rng.value_range(0.0, 0.5);
        let len = rng.value_range(0.1, 0.3);
        let start = lerp_vector(limb_start, limb_end, start_pos);
        let end = lerp_vector(limb_start, limb_end, start_pos + len);
        let end_y = end.y + rng.value_range(jitter * -0.5, jitter);

        out.push(vec![
            vector(start.x, start.y, 0.0),
            vector(end.x, end_y, 0.0),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::art::config::DrawRange;

    fn tree(seed: &str) -> Vec<Path> {
        let mut rng = RandomSource::new(Some(seed));
        make_tree(&mut rng, 179.0, 179.0, 1.0, &CoverArtConfig::default())
    }

    #[test]
    fn every_stroke_is_a_segment() {
        let paths = tree("segments");
        assert!(paths.iter().all(|p| p.len() == 2));
    }

    #[test]
    fn stroke_count_follows_draw_ranges() {
        // 2..=4 trunks, 30..=39 levels, two clusters of 5..=9 strokes each
        let n = tree("counts").len();
        assert!(n >= 2 + 30 * 2 * 5, "too few strokes: {}", n);
        assert!(n <= 4 + 39 * 2 * 9, "too many strokes: {}", n);
    }

    #[test]
    fn trunks_start_near_top_and_end_near_bottom() {
        let paths = tree("trunks");
        let first = &paths[0];
        assert!(first[0].y < first[1].y);
        // Trunk starts at the horizontal centre of the cell
        assert_eq!(first[0].x, 89.5);
    }

    #[test]
    fn tree_stays_inside_cell_height() {
        let paths = tree("bounds");
        for p in &paths {
            for v in p {
                assert!(v.y > -10.0 && v.y < 189.0, "y out of cell: {}", v.y);
            }
        }
    }

    #[test]
    fn single_level_tree_has_finite_coordinates() {
        let config = CoverArtConfig {
            branch_levels: DrawRange::new(1.0, 1.5),
            ..CoverArtConfig::default()
        };
        let mut rng = RandomSource::new(Some("x"));
        let paths = make_tree(&mut rng, 179.0, 179.0, 1.0, &config);
        assert!(paths.len() > 2);
        assert!(paths.iter().flatten().all(|v| v.is_finite()));
    }

    #[test]
    fn same_seed_same_tree() {
        assert_eq!(tree("repeat"), tree("repeat"));
    }
}
