//! Grow and shrink a polygon annotation and print the effect on area.
//!
//! Usage:
//!   cargo run -p polygeom --example expand_annotation -- 4.0

use polygeom::{Point, Polygon, Winding};

fn main() {
    let delta: f64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(4.0);
    // A pentagon drawn clockwise on an image canvas.
    let region: Polygon = [
        (120.0, 80.0),
        (200.0, 110.0),
        (190.0, 200.0),
        (110.0, 210.0),
        (80.0, 140.0),
    ]
    .into_iter()
    .map(Point::from)
    .collect();

    let winding = match region.winding() {
        Winding::Clockwise => "clockwise",
        Winding::CounterClockwise => "counterclockwise",
        Winding::Degenerate => "degenerate",
    };
    let c = region.centroid();
    println!("area={:.2} ({winding}) centroid=({:.2}, {:.2})", region.area(), c.x, c.y);
    for d in [delta, -delta] {
        let out = region.expand(d);
        println!("delta={d:+}: area={:.2}", out.area());
        for (a, b) in region.iter().zip(&out) {
            println!("  ({:.1}, {:.1}) -> ({:.2}, {:.2})", a.x, a.y, b.x, b.y);
        }
    }
}
