use anyhow::{bail, Context, Result};
use polygeom::{Point, Polygon};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Accepted input shapes: `[{"x":..,"y":..}, ..]` or flat `[x0, y0, x1, y1, ..]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPolygon {
    Points(Vec<Point>),
    Flat(Vec<f64>),
}

/// Parse a polygon from JSON text.
pub fn parse_polygon(text: &str) -> Result<Polygon> {
    let value: Value = serde_json::from_str(text).context("parsing polygon JSON")?;
    match serde_json::from_value::<RawPolygon>(value)
        .context("expected an array of {x, y} objects or a flat number array")?
    {
        RawPolygon::Points(points) => Ok(Polygon::new(points)),
        RawPolygon::Flat(coords) => match Polygon::from_flat(&coords) {
            Some(p) => Ok(p),
            None => bail!("flat coordinate list has odd length {}", coords.len()),
        },
    }
}

/// Read a polygon from `path`, or from stdin when `path` is `None`.
pub fn load_polygon(path: Option<&Path>) -> Result<Polygon> {
    let text = match path {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading polygon from stdin")?;
            buf
        }
    };
    let poly = parse_polygon(&text)?;
    tracing::debug!(vertices = poly.len(), "loaded polygon");
    Ok(poly)
}

/// Write pretty JSON to `out`, creating parent dirs, or to stdout when `None`.
pub fn write_json(out: Option<&Path>, value: &Value) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
