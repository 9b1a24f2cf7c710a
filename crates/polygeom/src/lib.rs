//! Polygon geometry helpers for annotation regions.
//!
//! Conventions
//! - Coordinates are image/screen coordinates: `y` grows downward, so a
//!   positive signed area means clockwise winding on screen.
//! - Every routine treats the point sequence as a closed loop (last → first
//!   edge included).
//! - Degenerate inputs never panic. They flow through the arithmetic into a
//!   zero or non-finite result; callers check `is_finite` where it matters.
//!
//! Layout
//! - `point`: `Point` value type and conversions.
//! - `polygon`: `Polygon` container, signed area, winding, centroid.
//! - `expand`: per-vertex radial expansion along the centroid→vertex axis.
//! - `sample`: seeded random annotation regions (star-shaped, possibly concave).

pub mod expand;
pub mod point;
pub mod polygon;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use expand::expand_polygon;
pub use point::Point;
pub use polygon::{
    compute_area, compute_centroid, is_clockwise, signed_centroid, winding, Polygon, Winding,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::expand::expand_polygon;
    pub use crate::point::Point;
    pub use crate::polygon::{
        compute_area, compute_centroid, is_clockwise, signed_centroid, winding, Polygon, Winding,
    };
    pub use crate::sample::{sample_region, sample_regions, SampleCfg};
    pub use nalgebra::Vector2 as Vec2;
}
