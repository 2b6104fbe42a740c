//! # Cozy Co Core
//!
//! Seeded procedural line art for Cozy Co collectibles.
//!
//! A seed string drives a deterministic random stream; the stream lays out
//! a grid of line-drawn trees, and the resulting polylines are serialized
//! to a self-contained SVG document. The same seed always produces the
//! same bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use cozyco_core::prelude::*;
//!
//! let svg = make_cover_art(Some("1234567890"));
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(svg, make_cover_art(Some("1234567890")));
//! ```
//!
//! ## Units and Conventions
//!
//! - **Canvas**: 500×500 user units, origin top-left, Y down
//! - **Angles**: rotation helpers take **degrees**
//! - **Precision**: all geometry uses `f64`

pub mod art;
pub mod card;
pub mod geometry;
pub mod math;
pub mod random;
pub mod svg;

mod error;

pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    // Random source
    pub use crate::random::{KeyScheme, RandomSource, Weighted};

    // Geometry
    pub use crate::geometry::{BoundingBox, Path, Vector, vector};

    // Rendering
    pub use crate::svg::{LineCap, LineJoin, StyleOptions, polylines_to_svg};

    // Generators
    pub use crate::art::{CoverArtConfig, GridLayout, Scene, make_cover_art, make_cover_art_with};
    pub use crate::card::make_greetings_card;

    // Error handling
    pub use crate::{Error, Result};
}
