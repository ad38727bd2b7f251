//! Gaussian kernel density estimation for the violin panels.

use crate::stats;

/// Bandwidth scaling factor applied to the sample standard deviation,
/// matching the fixed smoothing the figure has always used.
pub const BANDWIDTH_FACTOR: f64 = 0.2;

/// How many bandwidths the density support extends past the data extremes.
const CUT: f64 = 2.0;

const GRID_POINTS: usize = 128;

/// Density curve evaluated on an even grid over the sample support.
#[derive(Debug, Clone)]
pub struct DensityCurve {
    pub ys: Vec<f64>,
    pub densities: Vec<f64>,
    pub max_density: f64,
}

/// Estimates the density of `values` with a Gaussian kernel at
/// `BANDWIDTH_FACTOR * std_dev`. Degenerate samples (single point or zero
/// spread) collapse to a narrow spike so the violin still renders.
pub fn density(values: &[f64]) -> Option<DensityCurve> {
    if values.is_empty() {
        return None;
    }

    let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let mut bandwidth = BANDWIDTH_FACTOR * stats::std_dev(values);
    if bandwidth <= 0.0 || !bandwidth.is_finite() {
        let scale = hi.abs().max(lo.abs()).max(1.0);
        bandwidth = scale * 1e-2;
    }

    let start = lo - CUT * bandwidth;
    let end = hi + CUT * bandwidth;
    let step = (end - start) / (GRID_POINTS - 1) as f64;

    let norm = 1.0 / (values.len() as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let mut ys = Vec::with_capacity(GRID_POINTS);
    let mut densities = Vec::with_capacity(GRID_POINTS);
    let mut max_density = 0.0f64;

    for i in 0..GRID_POINTS {
        let y = start + step * i as f64;
        let mut d = 0.0;
        for v in values {
            let z = (y - v) / bandwidth;
            d += (-0.5 * z * z).exp();
        }
        d *= norm;
        if d > max_density {
            max_density = d;
        }
        ys.push(y);
        densities.push(d);
    }

    Some(DensityCurve {
        ys,
        densities,
        max_density,
    })
}
