use statrs::distribution::{ContinuousCDF, Normal};
use tracing::warn;

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|&v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}

pub fn percent_increase(baseline_mean: f64, treatment_mean: f64) -> i64 {
    (100.0 * (treatment_mean / baseline_mean - 1.0)).round() as i64
}

pub fn mean_ci95(values: &[f64]) -> (f64, f64, f64) {
    let m = mean(values);
    let n = values.len();
    if n < 2 {
        return (m, m, m);
    }
    let var = values.iter().map(|&v| (v - m) * (v - m)).sum::<f64>() / (n - 1) as f64;
    let margin = 1.96 * (var.sqrt() / (n as f64).sqrt());
    (m, m - margin, m + margin)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PairedComparison {
    pub baseline_mean: f64,
    pub treatment_mean: f64,
    pub baseline_std: f64,
    pub treatment_std: f64,
    pub p_value: f64,
    pub n_pairs: usize,
    pub approximate: bool,
}

pub fn compare_groups(baseline: &[f64], treatment: &[f64]) -> PairedComparison {
    let n = baseline.len().min(treatment.len());
    let approximate = baseline.len() != treatment.len();
    if approximate {
        warn!(
            "paired sample lengths differ ({} vs {}); truncating both to {} and flagging the statistic approximate",
            baseline.len(),
            treatment.len(),
            n
        );
    }
    let baseline = &baseline[..n];
    let treatment = &treatment[..n];

    PairedComparison {
        baseline_mean: mean(baseline),
        treatment_mean: mean(treatment),
        baseline_std: std_dev(baseline),
        treatment_std: std_dev(treatment),
        p_value: wilcoxon_signed_rank(baseline, treatment),
        n_pairs: n,
        approximate,
    }
}

// Two-sided Wilcoxon signed-rank test over equal-length paired samples.
// Zero differences are dropped, tied magnitudes are midranked, and the
// p-value uses the tie-corrected normal approximation.
pub fn wilcoxon_signed_rank(xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let diffs: Vec<f64> = xs
        .iter()
        .zip(ys.iter())
        .map(|(&x, &y)| x - y)
        .filter(|d| *d != 0.0)
        .collect();
    let n = diffs.len();
    if n == 0 {
        return 1.0;
    }

    let magnitudes: Vec<f64> = diffs.iter().map(|d| d.abs()).collect();
    let ranks = midranks(&magnitudes);

    let mut w_plus = 0.0;
    for (d, r) in diffs.iter().zip(ranks.iter()) {
        if *d > 0.0 {
            w_plus += r;
        }
    }

    let nf = n as f64;
    let mn = nf * (nf + 1.0) / 4.0;
    let tie_term = tie_correction(&ranks);
    let var = nf * (nf + 1.0) * (2.0 * nf + 1.0) / 24.0 - tie_term / 48.0;
    if var <= 0.0 {
        return 1.0;
    }

    let z = (w_plus - mn) / var.sqrt();
    let normal = Normal::new(0.0, 1.0).expect("unit normal");
    let p = 2.0 * (1.0 - normal.cdf(z.abs()));
    p.clamp(0.0, 1.0)
}

pub fn midranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0.0; values.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        let rank = (i + 1 + j + 1) as f64 / 2.0;
        for &idx in &order[i..=j] {
            ranks[idx] = rank;
        }
        i = j + 1;
    }
    ranks
}

fn tie_correction(ranks: &[f64]) -> f64 {
    let mut sorted = ranks.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut term = 0.0;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i;
        while j + 1 < sorted.len() && sorted[j + 1] == sorted[i] {
            j += 1;
        }
        let t = (j - i + 1) as f64;
        term += t * t * t - t;
        i = j + 1;
    }
    term
}

#[cfg(test)]
#[path = "../tests/src_inline/stats.rs"]
mod tests;
