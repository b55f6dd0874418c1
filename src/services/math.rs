use crate::cli::Method;

/// Dispatch to the strategy selected on the command line.
pub fn sqrt_with(method: Method, x: f64) -> f64 {
    match method {
        Method::Std => x.sqrt(),
        Method::Newton => newton_sqrt(x),
    }
}

/// Newton's method square root.
///
/// Follows the `f64::sqrt` conventions: NaN for negative or NaN input,
/// the input itself for zero and positive infinity.
pub fn newton_sqrt(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 || x.is_infinite() {
        return x;
    }

    let mut guess = if x >= 1.0 { x } else { 1.0 };
    for _ in 0..64 {
        let next = 0.5 * (guess + x / guess);
        if (next - guess).abs() <= f64::EPSILON * next {
            return next;
        }
        guess = next;
    }
    guess
}
