use super::*;

#[test]
fn test_mean_and_std() {
    let v = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(mean(&v), 2.5);
    assert!((std_dev(&v) - 1.118033988749895).abs() < 1e-12);
    assert_eq!(mean(&[]), 0.0);
}

#[test]
fn test_quantile_interpolates() {
    let v = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(quantile(&v, 0.0), 1.0);
    assert_eq!(quantile(&v, 1.0), 4.0);
    assert_eq!(quantile(&v, 0.5), 2.5);
    assert_eq!(quantile(&v, 0.25), 1.75);
}

#[test]
fn test_percent_increase_pinned() {
    assert_eq!(percent_increase(0.70, 0.84), 20);
    assert_eq!(percent_increase(0.5, 0.5), 0);
    assert_eq!(percent_increase(0.8, 0.6), -25);
}

#[test]
fn test_percent_increase_is_deterministic() {
    for _ in 0..3 {
        assert_eq!(percent_increase(0.615, 0.713), 16);
    }
}

#[test]
fn test_midranks_with_ties() {
    let ranks = midranks(&[3.0, 1.0, 2.0, 2.0]);
    assert_eq!(ranks, vec![4.0, 1.0, 2.5, 2.5]);
}

#[test]
fn test_wilcoxon_all_positive_no_ties() {
    // diffs 1..5: W+ = 15, mean 7.5, sd sqrt(13.75), z = 2.0226, p = 0.0431.
    let xs = [2.0, 4.0, 6.0, 8.0, 10.0];
    let ys = [1.0, 2.0, 3.0, 4.0, 5.0];
    let p = wilcoxon_signed_rank(&xs, &ys);
    assert!((p - 0.0431).abs() < 5e-4, "p was {p}");
}

#[test]
fn test_wilcoxon_symmetry() {
    let xs = [2.0, 4.0, 6.0, 8.0, 10.0];
    let ys = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(
        wilcoxon_signed_rank(&xs, &ys),
        wilcoxon_signed_rank(&ys, &xs)
    );
}

#[test]
fn test_wilcoxon_identical_samples() {
    let xs = [0.5, 0.6, 0.7];
    assert_eq!(wilcoxon_signed_rank(&xs, &xs), 1.0);
}

#[test]
fn test_wilcoxon_balanced_signs_near_one() {
    let xs = [1.0, 2.0, 3.0, 4.0];
    let ys = [2.0, 1.0, 4.0, 3.0];
    let p = wilcoxon_signed_rank(&xs, &ys);
    assert!(p > 0.9, "p was {p}");
}

#[test]
fn test_compare_groups_truncates_to_shorter() {
    let a = [0.1, 0.2, 0.3, 0.4, 0.5];
    let b = [0.2, 0.3, 0.4, 0.5, 0.6, 0.9, 0.9, 0.9];
    let cmp = compare_groups(&a, &b);
    assert_eq!(cmp.n_pairs, 5);
    assert!(cmp.approximate);
    // means over the first five of each side only
    assert!((cmp.baseline_mean - 0.3).abs() < 1e-12);
    assert!((cmp.treatment_mean - 0.4).abs() < 1e-12);
}

#[test]
fn test_compare_groups_equal_lengths_exact() {
    let a = [0.1, 0.2];
    let b = [0.3, 0.4];
    let cmp = compare_groups(&a, &b);
    assert_eq!(cmp.n_pairs, 2);
    assert!(!cmp.approximate);
}

#[test]
fn test_mean_ci95_margin() {
    let v = [1.0, 2.0, 3.0];
    let (m, lo, hi) = mean_ci95(&v);
    assert_eq!(m, 2.0);
    let margin = 1.96 * (1.0 / 3.0f64.sqrt());
    assert!((hi - m - margin).abs() < 1e-12);
    assert!((m - lo - margin).abs() < 1e-12);
}

#[test]
fn test_mean_ci95_single_sample() {
    assert_eq!(mean_ci95(&[0.7]), (0.7, 0.7, 0.7));
}
