extern crate knot_spline;

use knot_spline::{interpolate, BoundaryMode, Knot};

fn main() {
    // knot layout of the interactive editor, canvas coordinates
    let knots = vec![
        Knot::new(50.0, 150.0),
        Knot::new(100.0, 170.0),
        Knot::new(150.0, 250.0),
        Knot::new(200.0, 400.0),
        Knot::new(300.0, 350.0),
        Knot::new(400.0, 250.0),
        Knot::new(500.0, 50.0),
        Knot::new(600.0, 250.0),
        Knot::new(650.0, 200.0),
        Knot::new(700.0, 180.0),
        Knot::new(725.0, 120.0),
        Knot::new(750.0, 90.0),
    ];

    let curve = interpolate(&knots, BoundaryMode::Quadratic).unwrap();

    println!("x;y");
    for segment in &curve {
        let (xmin, xmax) = segment.range();
        let mut x = xmin;
        while x < xmax {
            println!("{:.2};{:.2}", x, segment.evaluate(x));
            x += 1.0;
        }
    }
    let last = curve.max_x();
    println!("{:.2};{:.2}", last, curve.evaluate(last).unwrap());
}
