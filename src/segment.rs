/// One cubic piece of the interpolated curve:
/// `f(t) = a*t^3 + b*t^2 + c*t + d` valid over `[xmin, xmax)`.
///
/// The polynomial is parametrized by the local offset `t = x - xmin`, not by
/// the raw x coordinate. Consumers evaluating coefficients directly must
/// apply the same shift; [Segment::evaluate] does it internally. The local
/// parametrization keeps evaluation well conditioned for knots far from the
/// coordinate origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    xmin: f64,
    xmax: f64,
}

impl Segment {
    pub(crate) fn new(a: f64, b: f64, c: f64, d: f64, xmin: f64, xmax: f64) -> Self {
        Segment { a, b, c, d, xmin, xmax }
    }

    /// Coefficients `(a, b, c, d)` of the local-parameter cubic.
    pub fn coefficients(&self) -> (f64, f64, f64, f64) {
        (self.a, self.b, self.c, self.d)
    }

    /// Range `(xmin, xmax)` over which this piece is valid, half-open at `xmax`.
    pub fn range(&self) -> (f64, f64) {
        (self.xmin, self.xmax)
    }

    pub fn contains(&self, x: f64) -> bool {
        self.xmin <= x && x < self.xmax
    }

    /// Evaluates the cubic at absolute coordinate `x` using `t = x - xmin`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let t = x - self.xmin;
        ((self.a * t + self.b) * t + self.c) * t + self.d
    }

    /// First derivative `f'(x) = 3*a*t^2 + 2*b*t + c` with `t = x - xmin`.
    pub fn derivative(&self, x: f64) -> f64 {
        let t = x - self.xmin;
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }

    /// Second derivative `f''(x) = 6*a*t + 2*b` with `t = x - xmin`.
    pub fn second_derivative(&self, x: f64) -> f64 {
        let t = x - self.xmin;
        6.0 * self.a * t + 2.0 * self.b
    }
}

/// Ordered sequence of [Segment]s produced by one interpolation call. There
/// is one segment per consecutive knot pair and together they cover
/// `[min_x, max_x)` with no gaps or overlaps.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSet {
    segments: Vec<Segment>,
}

impl SegmentSet {
    pub(crate) fn new(segments: Vec<Segment>) -> Self {
        SegmentSet { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn min_x(&self) -> f64 {
        self.segments[0].xmin
    }

    pub fn max_x(&self) -> f64 {
        self.segments[self.segments.len() - 1].xmax
    }

    /// Evaluates the curve at `x`, or `None` when `x` lies outside
    /// `[min_x, max_x]`. The upper endpoint is served by the last segment so
    /// the final knot stays reachable despite half-open segment ranges.
    pub fn evaluate(&self, x: f64) -> Option<f64> {
        if x < self.min_x() || x > self.max_x() {
            return None;
        }
        Some(self.segments[self.find_segment_index(x)].evaluate(x))
    }

    fn find_segment_index(&self, x: f64) -> usize {
        let mut min = 0;
        let mut max = self.segments.len() - 1;

        while max > min {
            let mid = (min + max) / 2;
            if x < self.segments[mid].xmin {
                max = mid - 1;
            } else if x >= self.segments[mid].xmax {
                min = mid + 1;
            } else {
                return mid;
            }
        }
        min
    }
}

impl<'a> IntoIterator for &'a SegmentSet {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn evaluate_uses_local_parameter() {
        let eps = 1e-9;
        // f(t) = t^3 - 2t^2 + 3t + 1 over [5, 7)
        let segment = Segment::new(1.0, -2.0, 3.0, 1.0, 5.0, 7.0);

        assert_approx_eq!(1.0, segment.evaluate(5.0), eps);
        assert_approx_eq!(3.0, segment.evaluate(6.0), eps);
        assert_approx_eq!(2.125, segment.evaluate(5.5), eps);
    }

    #[test]
    fn evaluate_far_from_origin() {
        let eps = 1e-6;
        // Same local cubic placed 1e9 to the right; the local shift keeps
        // evaluation exact where a raw-x parametrization would lose all
        // precision.
        let segment = Segment::new(1.0, -2.0, 3.0, 1.0, 1.0e9, 1.0e9 + 2.0);

        assert_approx_eq!(1.0, segment.evaluate(1.0e9), eps);
        assert_approx_eq!(3.0, segment.evaluate(1.0e9 + 1.0), eps);
    }

    #[test]
    fn derivatives() {
        let eps = 1e-9;
        let segment = Segment::new(1.0, -2.0, 3.0, 1.0, 0.0, 2.0);

        // f'(t) = 3t^2 - 4t + 3, f''(t) = 6t - 4
        assert_approx_eq!(3.0, segment.derivative(0.0), eps);
        assert_approx_eq!(2.0, segment.derivative(1.0), eps);
        assert_approx_eq!(-4.0, segment.second_derivative(0.0), eps);
        assert_approx_eq!(2.0, segment.second_derivative(1.0), eps);
    }

    #[test]
    fn contains_is_half_open() {
        let segment = Segment::new(0.0, 0.0, 1.0, 0.0, 1.0, 2.0);

        assert!(segment.contains(1.0));
        assert!(segment.contains(1.999));
        assert!(!segment.contains(2.0));
        assert!(!segment.contains(0.999));
    }

    #[test]
    fn segment_set_lookup() {
        let eps = 1e-9;
        let set = SegmentSet::new(vec![
            Segment::new(0.0, 0.0, 1.0, 0.0, 0.0, 1.0),
            Segment::new(0.0, 0.0, 2.0, 1.0, 1.0, 3.0),
            Segment::new(0.0, 0.0, -1.0, 5.0, 3.0, 4.0),
        ]);

        assert_eq!(3, set.len());
        assert_eq!(0.0, set.min_x());
        assert_eq!(4.0, set.max_x());

        assert_approx_eq!(0.5, set.evaluate(0.5).unwrap(), eps);
        assert_approx_eq!(1.0, set.evaluate(1.0).unwrap(), eps);
        assert_approx_eq!(4.0, set.evaluate(2.5).unwrap(), eps);
        assert_approx_eq!(4.5, set.evaluate(3.5).unwrap(), eps);
        // upper endpoint handled by the last segment
        assert_approx_eq!(4.0, set.evaluate(4.0).unwrap(), eps);

        assert!(set.evaluate(-0.1).is_none());
        assert!(set.evaluate(4.1).is_none());
    }
}
