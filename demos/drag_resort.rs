extern crate knot_spline;

use knot_spline::{interpolate, restore_order_after_move, BoundaryMode, Knot};

fn sample(knots: &[Knot], label: &str) {
    let curve = interpolate(knots, BoundaryMode::Quadratic).unwrap();

    println!("{}", label);
    let number_of_steps = 20;
    let step = (curve.max_x() - curve.min_x()) / number_of_steps as f64;
    for i in 0..=number_of_steps {
        let x = curve.min_x() + step * i as f64;
        println!("{:.2};{:.2}", x, curve.evaluate(x).unwrap());
    }
}

fn main() {
    let mut knots = vec![
        Knot::new(0.0, 1.0),
        Knot::new(1.0, -1.0),
        Knot::new(2.0, 0.0),
        Knot::new(3.0, -1.0),
        Knot::new(4.0, 3.0),
        Knot::new(5.0, 0.5),
    ];

    sample(&knots, "before drag");

    // drag the second knot past two of its right neighbours
    knots[1].set_position(3.5, -1.0);
    let new_index = restore_order_after_move(&mut knots, 1);
    println!("knot moved to index {}", new_index);

    sample(&knots, "after drag");
}
