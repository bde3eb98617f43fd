/// Arithmetic mean of `values`, or `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Result of an ordinary least-squares line fit `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

/// Fits a line to paired samples by ordinary least squares.
///
/// Returns `None` when fewer than two points are given, the slices differ in
/// length, or every `x` is identical (vertical line).
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let x_mean = mean(xs);
    let y_mean = mean(ys);

    let mut covariance = 0.0;
    let mut x_spread = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - x_mean;
        covariance += dx * (y - y_mean);
        x_spread += dx * dx;
    }

    if x_spread == 0.0 {
        return None;
    }

    let slope = covariance / x_spread;
    Some(LinearFit {
        slope,
        intercept: y_mean - slope * x_mean,
    })
}
