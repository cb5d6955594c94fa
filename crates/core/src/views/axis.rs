const MIN_MAJOR_SPACING_PX: f64 = 80.0;
const MAX_TICKS: usize = 1_000;

/// Choose a 1-2-5 tick interval for `span` data units drawn over
/// `length_px` pixels, aiming for roughly one tick per
/// `MIN_MAJOR_SPACING_PX`.
pub fn nice_step(span: f64, length_px: f64) -> f64 {
    let target_count = (length_px / MIN_MAJOR_SPACING_PX).max(2.0);
    let raw = span / target_count;
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }

    let magnitude = 10.0_f64.powf(raw.log10().floor());
    for factor in [1.0, 2.0, 5.0] {
        let step = factor * magnitude;
        if step >= raw {
            return step;
        }
    }
    10.0 * magnitude
}

/// Tick positions inside `[min, max]`, multiples of `nice_step`.
pub fn ticks(min: f64, max: f64, length_px: f64) -> (Vec<f64>, f64) {
    let step = nice_step(max - min, length_px);
    let first = (min / step).ceil();
    let mut out = Vec::new();
    for i in 0..MAX_TICKS {
        let t = (first + i as f64) * step;
        // Tolerate rounding at the upper edge.
        if t > max + step * 1e-9 {
            break;
        }
        out.push(t);
    }
    (out, step)
}

/// Label for tick `value` with just enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    let label = format!("{value:.decimals$}");
    // "-0", "-0.0", ...
    match label.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => label,
    }
}
