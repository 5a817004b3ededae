/// Knot represents a point through which the interpolated curve must pass.
/// - `x` - coordinate,
/// - `y` - coordinate.
///
/// Knots are ordered by `x` so that caller owned sequences can be sorted
/// with standard facilities before interpolation.
#[derive(Debug, Clone, Copy)]
pub struct Knot {
    x: f64,
    y: f64,
}

impl Knot {
    pub fn new(x: f64, y: f64) -> Self {
        Knot { x, y }
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.y
    }

    /// Moves knot to a new position. Sorted order of the owning sequence may
    /// be broken afterwards, see [restore_order_after_move].
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

impl Ord for Knot {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x.total_cmp(&other.x)
    }
}

impl PartialOrd for Knot {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Knot {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
    }
}

impl Eq for Knot {}

/// Restores sorted-by-x order of `knots` after the knot at index `moved`
/// changed position, by bubbling it towards its final place. All other
/// elements keep their relative order. Returns the new index of the moved
/// knot.
///
/// This is the "single element perturbation" case of sorting: after a drag
/// only one knot can be out of place, so a linear bubble is enough and no
/// full sort is required. Equal x values are left as-is; deduplication stays
/// a caller responsibility.
///
/// # Example
/// ```
/// use knot_spline::{Knot, restore_order_after_move};
///
/// let mut knots = vec![
///     Knot::new(0.0, 1.0),
///     Knot::new(5.0, 2.0),
///     Knot::new(2.0, 3.0),
/// ];
/// let new_index = restore_order_after_move(&mut knots, 1);
///
/// assert_eq!(2, new_index);
/// assert_eq!(2.0, knots[1].get_x());
/// assert_eq!(5.0, knots[2].get_x());
/// ```
///
/// # Panics
/// Panics when `moved` is out of bounds.
pub fn restore_order_after_move(knots: &mut [Knot], moved: usize) -> usize {
    let mut index = moved;

    while index + 1 < knots.len() && knots[index].x > knots[index + 1].x {
        knots.swap(index, index + 1);
        index += 1;
    }
    while index > 0 && knots[index].x < knots[index - 1].x {
        knots.swap(index, index - 1);
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let x = 1.0;
        let y = 2.5;
        let knot = Knot::new(x, y);

        assert_eq!(x, knot.get_x());
        assert_eq!(y, knot.get_y());
    }

    #[test]
    fn test_set_position() {
        let mut knot = Knot::new(1.0, 2.5);
        knot.set_position(-3.0, 0.5);

        assert_eq!(-3.0, knot.get_x());
        assert_eq!(0.5, knot.get_y());
    }

    #[test]
    fn test_ordering_by_x() {
        let mut knots = vec![
            Knot::new(2.0, 0.0),
            Knot::new(-1.0, 5.0),
            Knot::new(0.5, 1.0),
        ];
        knots.sort();

        assert_eq!(-1.0, knots[0].get_x());
        assert_eq!(0.5, knots[1].get_x());
        assert_eq!(2.0, knots[2].get_x());
    }

    #[test]
    fn test_restore_order_move_right() {
        let mut knots = vec![
            Knot::new(0.0, 0.0),
            Knot::new(7.0, 1.0),
            Knot::new(2.0, 2.0),
            Knot::new(3.0, 3.0),
        ];

        let index = restore_order_after_move(&mut knots, 1);

        assert_eq!(3, index);
        let xs: Vec<f64> = knots.iter().map(|k| k.get_x()).collect();
        assert_eq!(vec![0.0, 2.0, 3.0, 7.0], xs);
        assert_eq!(1.0, knots[index].get_y());
    }

    #[test]
    fn test_restore_order_move_left() {
        let mut knots = vec![
            Knot::new(0.0, 0.0),
            Knot::new(2.0, 1.0),
            Knot::new(1.0, 2.0),
            Knot::new(3.0, 3.0),
        ];

        let index = restore_order_after_move(&mut knots, 2);

        assert_eq!(1, index);
        let xs: Vec<f64> = knots.iter().map(|k| k.get_x()).collect();
        assert_eq!(vec![0.0, 1.0, 2.0, 3.0], xs);
        assert_eq!(2.0, knots[index].get_y());
    }

    #[test]
    fn test_restore_order_already_sorted() {
        let mut knots = vec![
            Knot::new(0.0, 0.0),
            Knot::new(1.0, 1.0),
            Knot::new(2.0, 2.0),
        ];

        let index = restore_order_after_move(&mut knots, 1);

        assert_eq!(1, index);
        let xs: Vec<f64> = knots.iter().map(|k| k.get_x()).collect();
        assert_eq!(vec![0.0, 1.0, 2.0], xs);
    }

    #[test]
    fn test_restore_order_first_to_last() {
        let mut knots = vec![
            Knot::new(10.0, 0.0),
            Knot::new(1.0, 1.0),
            Knot::new(2.0, 2.0),
        ];

        let index = restore_order_after_move(&mut knots, 0);

        assert_eq!(2, index);
        let xs: Vec<f64> = knots.iter().map(|k| k.get_x()).collect();
        assert_eq!(vec![1.0, 2.0, 10.0], xs);
    }

    #[test]
    fn test_restore_order_single_knot() {
        let mut knots = vec![Knot::new(1.0, 1.0)];

        let index = restore_order_after_move(&mut knots, 0);

        assert_eq!(0, index);
    }
}
