use super::*;

fn paired_layout() -> BoxLayout {
    BoxLayout {
        group_size: 2,
        shrink_factor: 0.3,
        box_width: 0.3,
        shifts: vec![0.1273, -0.1273],
    }
}

#[test]
fn test_box_extent_pinned_two_groups() {
    let layout = paired_layout();
    // slot 0.15, half 0.075, shrunk half 0.0225; first drawn box takes the
    // shift keyed by residual 1.
    let (x0, x1) = layout.box_extent(0.0, 0);
    assert!((x0 - (-0.075 - 0.0225 - 0.1273)).abs() < 1e-9);
    assert!((x1 - (-0.075 + 0.0225 - 0.1273)).abs() < 1e-9);

    let (x0, x1) = layout.box_extent(0.0, 1);
    assert!((x0 - (0.075 - 0.0225 + 0.1273)).abs() < 1e-9);
    assert!((x1 - (0.075 + 0.0225 + 0.1273)).abs() < 1e-9);
}

#[test]
fn test_box_extent_lands_under_violin_centers() {
    let layout = paired_layout();
    // violins for two groups sit at center +/- 0.2 inside a 0.8-wide cluster
    for (ordinal, violin_center) in [(0usize, -0.2f64), (1, 0.2)] {
        let (x0, x1) = layout.box_extent(0.0, ordinal);
        let box_mid = (x0 + x1) / 2.0;
        assert!(
            (box_mid - violin_center).abs() < 0.01,
            "ordinal {ordinal}: box mid {box_mid} vs violin {violin_center}"
        );
    }
}

#[test]
fn test_box_extent_six_groups_under_violins() {
    let base = 0.062;
    let layout = BoxLayout {
        group_size: 6,
        shrink_factor: 0.7,
        box_width: 0.3,
        shifts: vec![
            3.32 * base,
            -3.35 * base,
            -2.02 * base,
            -0.72 * base,
            0.665 * base,
            1.95 * base,
        ],
    };
    let cluster = 0.8;
    let slot = cluster / 6.0;
    for ordinal in 0..6 {
        let violin_center = -cluster / 2.0 + (ordinal as f64 + 0.5) * slot;
        let (x0, x1) = layout.box_extent(0.0, ordinal);
        let box_mid = (x0 + x1) / 2.0;
        assert!(
            (box_mid - violin_center).abs() < 0.01,
            "ordinal {ordinal}: box mid {box_mid} vs violin {violin_center}"
        );
    }
}

#[test]
fn test_box_extent_translates_with_category_center() {
    let layout = paired_layout();
    let (a0, a1) = layout.box_extent(0.0, 0);
    let (b0, b1) = layout.box_extent(2.0, 0);
    assert!((b0 - a0 - 2.0).abs() < 1e-9);
    assert!((b1 - a1 - 2.0).abs() < 1e-9);
}

#[test]
fn test_kde_profile_peaks_near_mass() {
    let values = vec![0.1, 0.12, 0.11, 0.9];
    let mut sorted = values.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let densities = kde_profile(&sorted, 0.1, 0.9);
    assert_eq!(densities.len(), KDE_GRID);
    let peak = densities
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
        .map(|(i, _)| i)
        .unwrap();
    // three of the four samples sit at the low end of the range
    assert!(peak < KDE_GRID / 4, "peak index was {peak}");
    assert!(densities.iter().all(|d| *d >= 0.0));
}
