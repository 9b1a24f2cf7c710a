//! Random annotation regions on an image canvas.
//!
//! A region is drawn as a star around a random anchor: `n` angular slots of
//! width `2π/n`, one vertex per slot at a jittered angle and a jittered radius.
//! Slots keep the angles strictly increasing and every angular gap below π,
//! so the outline is simple and star-shaped around the anchor, but it is
//! convex only when `roughness == 0`. Increasing angle with `y` pointing down
//! walks clockwise on screen, so every region has positive `compute_area`.
//!
//! The anchor and radius are chosen so the whole region stays on the canvas.

use crate::point::Point;
use crate::polygon::Polygon;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fraction of a slot the vertex angle may wander into. Below 0.5 keeps
/// every gap between neighbours under π even for triangles.
const SLOT_JITTER: f64 = 0.4;

#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Canvas size in pixels.
    pub width: f64,
    pub height: f64,
    pub min_vertices: usize,
    pub max_vertices: usize,
    /// Mean distance from anchor to vertices, before fitting to the canvas.
    pub min_radius: f64,
    pub max_radius: f64,
    /// Relative radial jitter per vertex, clamped to [0, 0.9].
    pub roughness: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            min_vertices: 3,
            max_vertices: 10,
            min_radius: 20.0,
            max_radius: 120.0,
            roughness: 0.35,
        }
    }
}

/// Uniform draw in `[lo, hi)`, or `lo` when the interval is empty.
fn between<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if lo < hi {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Draw one region from `rng`.
pub fn sample_region<R: Rng + ?Sized>(cfg: &SampleCfg, rng: &mut R) -> Polygon {
    let lo = cfg.min_vertices.max(3);
    let hi = cfg.max_vertices.max(lo);
    let n = rng.gen_range(lo..=hi);
    let rough = cfg.roughness.clamp(0.0, 0.9);

    // Largest mean radius whose outline still fits the canvas.
    let fit = 0.5 * cfg.width.min(cfg.height) / (1.0 + rough);
    let r_hi = cfg.max_radius.min(fit).max(1e-6);
    let r_lo = cfg.min_radius.max(1e-6).min(r_hi);
    let radius = between(rng, r_lo, r_hi);
    let reach = radius * (1.0 + rough);
    let anchor = Point::new(
        between(rng, reach, cfg.width - reach),
        between(rng, reach, cfg.height - reach),
    );

    let slot = std::f64::consts::TAU / n as f64;
    let phase = rng.gen::<f64>() * slot;
    (0..n)
        .map(|k| {
            let theta = phase + (k as f64 + SLOT_JITTER * rng.gen::<f64>()) * slot;
            let rho = radius * (1.0 + rough * (2.0 * rng.gen::<f64>() - 1.0));
            Point::new(anchor.x + rho * theta.cos(), anchor.y + rho * theta.sin())
        })
        .collect()
}

/// `count` regions from a single seeded stream; same `(cfg, seed, count)`
/// gives the same regions.
pub fn sample_regions(cfg: &SampleCfg, seed: u64, count: usize) -> Vec<Polygon> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| sample_region(cfg, &mut rng)).collect()
}
