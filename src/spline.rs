use std::{error::Error, fmt::Display};

use nalgebra::DVector;

use crate::{
    knot::Knot,
    segment::{Segment, SegmentSet},
};

/// Pivot magnitude below which the tridiagonal solve is rejected as
/// near-singular. Does not trigger for valid strictly-increasing-x input.
const PIVOT_TOLERANCE: f64 = 1e-12;

/// Boundary condition applied at the two endpoints of the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryMode {
    /// Second derivative is zero at both endpoints.
    Natural,
    /// First and last segments are constrained to quadratics, i.e. the
    /// second derivative at each endpoint equals the one at its neighbour
    /// knot. Default mode of the interactive curve editor.
    #[default]
    Quadratic,
}

/// Error reported by [interpolate].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    /// Fewer than 2 knots, or x coordinates not strictly increasing. The
    /// caller must sort and deduplicate knots before interpolating.
    InvalidInput(String),
    /// Tridiagonal solve hit a near-zero pivot. Deterministic for given
    /// input; retrying without changing the knots cannot succeed.
    NumericalInstability(String),
}

impl Display for InterpolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterpolationError::InvalidInput(message) => {
                write!(f, "Invalid interpolation input: {}", message)
            }
            InterpolationError::NumericalInstability(message) => {
                write!(f, "Numerical instability: {}", message)
            }
        }
    }
}

impl Error for InterpolationError {}

/// Computes a cubic spline through `knots` and returns one cubic [Segment]
/// per consecutive knot pair, covering the full x-range of the input.
///
/// The function is pure: it never retains or mutates caller data, and
/// repeated calls with identical input produce identical results. Knots must
/// be sorted by strictly increasing x; after a drag the caller re-sorts with
/// [crate::restore_order_after_move] and simply calls again.
///
/// Internally the standard second-derivative formulation is used: a
/// tridiagonal system over the curvature values at each knot is solved with
/// the Thomas algorithm in O(n), then per-interval coefficients follow in
/// closed form. Segments are parametrized by the local offset `t = x - xmin`
/// of their interval, see [Segment].
///
/// # Example
/// ```
/// use knot_spline::{interpolate, BoundaryMode, Knot};
/// use assert_approx_eq::assert_approx_eq;
///
/// let knots = vec![
///     Knot::new(0.0, 1.0),
///     Knot::new(1.0, -1.0),
///     Knot::new(2.5, 0.5),
///     Knot::new(4.0, 3.0),
/// ];
/// let curve = interpolate(&knots, BoundaryMode::Natural).unwrap();
///
/// assert_eq!(3, curve.len());
/// assert_approx_eq!(-1.0, curve.evaluate(1.0).unwrap(), 1e-9);
/// assert_approx_eq!(3.0, curve.evaluate(4.0).unwrap(), 1e-9);
/// ```
///
/// # Errors
/// [InterpolationError::InvalidInput] for fewer than 2 knots or x not
/// strictly increasing; [InterpolationError::NumericalInstability] when the
/// tridiagonal solve encounters a near-zero pivot.
pub fn interpolate(
    knots: &[Knot],
    mode: BoundaryMode,
) -> Result<SegmentSet, InterpolationError> {
    check_knots(knots)?;

    let n = knots.len();
    let h: Vec<f64> = knots
        .windows(2)
        .map(|pair| pair[1].get_x() - pair[0].get_x())
        .collect();

    let m = solve_second_derivatives(knots, &h, mode)?;

    let mut segments = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let y0 = knots[i].get_y();
        let y1 = knots[i + 1].get_y();

        let a = (m[i + 1] - m[i]) / (6.0 * h[i]);
        let b = m[i] / 2.0;
        let c = (y1 - y0) / h[i] - h[i] * (2.0 * m[i] + m[i + 1]) / 6.0;
        let d = y0;

        segments.push(Segment::new(
            a,
            b,
            c,
            d,
            knots[i].get_x(),
            knots[i + 1].get_x(),
        ));
    }
    Ok(SegmentSet::new(segments))
}

fn check_knots(knots: &[Knot]) -> Result<(), InterpolationError> {
    if knots.len() < 2 {
        return Err(InterpolationError::InvalidInput(
            "at least 2 knots are required".to_string(),
        ));
    }
    // negated comparison so NaN x values are rejected as well
    for pair in knots.windows(2) {
        if !(pair[1].get_x() > pair[0].get_x()) {
            return Err(InterpolationError::InvalidInput(format!(
                "knot x values must be strictly increasing, found {} after {}",
                pair[1].get_x(),
                pair[0].get_x()
            )));
        }
    }
    Ok(())
}

/// Solves the tridiagonal continuity system for the second derivative `m_i`
/// at each knot. Row 0 and row n-1 carry the boundary condition, interior
/// rows the standard spline continuity equations.
fn solve_second_derivatives(
    knots: &[Knot],
    h: &[f64],
    mode: BoundaryMode,
) -> Result<DVector<f64>, InterpolationError> {
    let n = knots.len();

    // Two knots leave no curvature information; for Quadratic the two
    // boundary rows coincide and the system is singular. Both modes reduce
    // to the straight line.
    if n == 2 {
        return Ok(DVector::zeros(2));
    }

    let mut lower = DVector::<f64>::zeros(n);
    let mut diagonal = DVector::<f64>::zeros(n);
    let mut upper = DVector::<f64>::zeros(n);
    let mut rhs = DVector::<f64>::zeros(n);

    match mode {
        BoundaryMode::Natural => {
            // m_0 = 0 and m_{n-1} = 0
            diagonal[0] = 1.0;
            diagonal[n - 1] = 1.0;
        }
        BoundaryMode::Quadratic => {
            // m_0 = m_1 and m_{n-1} = m_{n-2}
            diagonal[0] = 1.0;
            upper[0] = -1.0;
            diagonal[n - 1] = 1.0;
            lower[n - 1] = -1.0;
        }
    }

    for i in 1..n - 1 {
        let slope_left = (knots[i].get_y() - knots[i - 1].get_y()) / h[i - 1];
        let slope_right = (knots[i + 1].get_y() - knots[i].get_y()) / h[i];

        lower[i] = h[i - 1];
        diagonal[i] = 2.0 * (h[i - 1] + h[i]);
        upper[i] = h[i];
        rhs[i] = 6.0 * (slope_right - slope_left);
    }

    solve_tridiagonal(&lower, &mut diagonal, &upper, &mut rhs)?;
    Ok(rhs)
}

/// Thomas algorithm: forward elimination followed by back substitution.
/// `diagonal` and `rhs` are consumed as working storage; the solution lands
/// in `rhs`.
fn solve_tridiagonal(
    lower: &DVector<f64>,
    diagonal: &mut DVector<f64>,
    upper: &DVector<f64>,
    rhs: &mut DVector<f64>,
) -> Result<(), InterpolationError> {
    let n = diagonal.len();

    for i in 1..n {
        if diagonal[i - 1].abs() < PIVOT_TOLERANCE {
            return Err(InterpolationError::NumericalInstability(format!(
                "pivot {} in row {} is too close to zero",
                diagonal[i - 1],
                i - 1
            )));
        }
        let factor = lower[i] / diagonal[i - 1];
        diagonal[i] -= factor * upper[i - 1];
        rhs[i] -= factor * rhs[i - 1];
    }

    if diagonal[n - 1].abs() < PIVOT_TOLERANCE {
        return Err(InterpolationError::NumericalInstability(format!(
            "pivot {} in row {} is too close to zero",
            diagonal[n - 1],
            n - 1
        )));
    }

    rhs[n - 1] /= diagonal[n - 1];
    for i in (0..n - 1).rev() {
        rhs[i] = (rhs[i] - upper[i] * rhs[i + 1]) / diagonal[i];
    }
    Ok(())
}
