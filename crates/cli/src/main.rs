use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use polygeom::sample::{sample_regions, SampleCfg};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;

#[derive(Parser)]
#[command(name = "polygeom")]
#[command(version = polygeom::VERSION)]
#[command(about = "Polygon geometry for annotation shapes (JSON in, JSON out)")]
struct Cmd {
    /// Polygon JSON file; reads stdin when omitted
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Log at DEBUG instead of INFO
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Signed area and winding
    Area,
    /// Area-weighted centroid
    Centroid,
    /// Shift every vertex along its centroid axis (negative delta shrinks)
    Expand {
        #[arg(long, allow_hyphen_values = true)]
        delta: f64,
    },
    /// Emit reproducible random annotation regions on a canvas
    Sample {
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 640.0)]
        width: f64,
        #[arg(long, default_value_t = 480.0)]
        height: f64,
        /// Relative radial jitter; 0 gives convex regions
        #[arg(long, default_value_t = 0.35)]
        roughness: f64,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let value = match cmd.action {
        Action::Area => area(cmd.input.as_deref())?,
        Action::Centroid => centroid(cmd.input.as_deref())?,
        Action::Expand { delta } => expand(cmd.input.as_deref(), delta)?,
        Action::Sample {
            count,
            seed,
            width,
            height,
            roughness,
        } => {
            let cfg = SampleCfg {
                width,
                height,
                roughness,
                ..SampleCfg::default()
            };
            sample(&cfg, seed, count)?
        }
    };
    input::write_json(cmd.out.as_deref(), &value)
}

fn area(path: Option<&Path>) -> Result<serde_json::Value> {
    let poly = input::load_polygon(path)?;
    let area = poly.area();
    let clockwise = poly.is_clockwise();
    tracing::info!(vertices = poly.len(), area, clockwise, "area");
    Ok(serde_json::json!({ "area": area, "clockwise": clockwise }))
}

fn centroid(path: Option<&Path>) -> Result<serde_json::Value> {
    let poly = input::load_polygon(path)?;
    let c = poly.centroid();
    tracing::info!(vertices = poly.len(), x = c.x, y = c.y, "centroid");
    Ok(serde_json::json!({ "x": c.x, "y": c.y, "finite": c.is_finite() }))
}

fn expand(path: Option<&Path>, delta: f64) -> Result<serde_json::Value> {
    if !delta.is_finite() {
        bail!("delta must be finite, got {delta}");
    }
    let poly = input::load_polygon(path)?;
    let out = poly.expand(delta);
    let degenerate = out.iter().filter(|p| !p.is_finite()).count();
    tracing::info!(vertices = poly.len(), delta, degenerate, "expand");
    Ok(serde_json::to_value(out.points())?)
}

fn sample(cfg: &SampleCfg, seed: u64, count: usize) -> Result<serde_json::Value> {
    if !(cfg.width > 0.0 && cfg.height > 0.0) {
        bail!("canvas must be positive, got {}x{}", cfg.width, cfg.height);
    }
    let regions = sample_regions(cfg, seed, count);
    tracing::info!(count, seed, width = cfg.width, height = cfg.height, "sample");
    Ok(serde_json::to_value(regions)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn polygon_file(text: &str) -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poly.json");
        fs::write(&path, text).unwrap();
        (dir, path)
    }

    #[test]
    fn area_reports_sign_and_winding() {
        let (_dir, path) = polygon_file("[0, 0, 10, 0, 10, 10, 0, 10]");
        let v = area(Some(&path)).unwrap();
        assert_eq!(v, json!({ "area": 100.0, "clockwise": true }));
        let (_dir, path) = polygon_file("[0, 10, 10, 10, 10, 0, 0, 0]");
        let v = area(Some(&path)).unwrap();
        assert_eq!(v, json!({ "area": -100.0, "clockwise": false }));
    }

    #[test]
    fn centroid_of_square() {
        let (_dir, path) =
            polygon_file(r#"[{"x":0,"y":0},{"x":10,"y":0},{"x":10,"y":10},{"x":0,"y":10}]"#);
        let v = centroid(Some(&path)).unwrap();
        assert_eq!(v, json!({ "x": 5.0, "y": 5.0, "finite": true }));
    }

    #[test]
    fn collinear_centroid_serialises_as_null() {
        let (_dir, path) = polygon_file("[0, 0, 1, 1, 2, 2]");
        let v = centroid(Some(&path)).unwrap();
        assert_eq!(v["finite"], json!(false));
        assert!(v["x"].is_null());
        assert!(v["y"].is_null());
    }

    #[test]
    fn expand_returns_point_array() {
        let (_dir, path) = polygon_file("[0, 0, 10, 0, 10, 10, 0, 10]");
        let v = expand(Some(&path), 2.0).unwrap();
        let points = v.as_array().unwrap();
        assert_eq!(points.len(), 4);
        let h = 2.0 / 2f64.sqrt();
        let x0 = points[0]["x"].as_f64().unwrap();
        let y0 = points[0]["y"].as_f64().unwrap();
        assert!((x0 + h).abs() < 1e-12 && (y0 + h).abs() < 1e-12);
    }

    #[test]
    fn expand_rejects_non_finite_delta() {
        let (_dir, path) = polygon_file("[0, 0, 10, 0, 10, 10]");
        assert!(expand(Some(&path), f64::NAN).is_err());
        assert!(expand(Some(&path), f64::INFINITY).is_err());
    }

    #[test]
    fn sample_repeats_for_same_seed() {
        let cfg = SampleCfg::default();
        let a = sample(&cfg, 7, 3).unwrap();
        assert_eq!(a, sample(&cfg, 7, 3).unwrap());
        assert_ne!(a, sample(&cfg, 8, 3).unwrap());
        assert_eq!(a.as_array().unwrap().len(), 3);
        // Output feeds straight back into the other subcommands.
        let first = serde_json::to_string(&a[0]).unwrap();
        let (_dir, path) = polygon_file(&first);
        assert_eq!(area(Some(&path)).unwrap()["clockwise"], json!(true));
    }

    #[test]
    fn command_reports_library_version() {
        use clap::CommandFactory;
        let cmd = Cmd::command();
        cmd.clone().debug_assert();
        assert_eq!(cmd.get_version(), Some(polygeom::VERSION));
    }

    #[test]
    fn sample_rejects_empty_canvas() {
        let cfg = SampleCfg {
            width: 0.0,
            ..SampleCfg::default()
        };
        assert!(sample(&cfg, 1, 1).is_err());
    }
}
