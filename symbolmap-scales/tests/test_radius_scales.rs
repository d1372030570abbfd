use rstest::rstest;
use symbolmap_scales::array::extent;
use symbolmap_scales::{ContinuousNumericScale, PowNumericScale};

#[rstest]
#[case(vec![1.0, 5.0])]
#[case(vec![0.0, 0.5, 2.0, 10.0])]
#[case(vec![12.5, 13.0, 40.0, 41.0, 80.25])]
fn test_sqrt_radius_is_monotonic(#[case] values: Vec<f64>) {
    let domain = extent(values.iter().copied()).unwrap();
    let scale = PowNumericScale::sqrt()
        .with_range((5.0, 15.0))
        .with_domain(domain);

    let radii = scale.scale_all(&values);
    for pair in radii.windows(2) {
        assert!(pair[0] <= pair[1], "radii not monotonic: {:?}", radii);
    }
    assert!(radii.iter().all(|r| *r >= 5.0 && *r <= 15.0));
}

#[test]
fn test_recalibrated_domain_spans_range() {
    let values = [3.0, 27.0, 12.0];
    let mut scale = PowNumericScale::sqrt().with_range((5.0, 15.0));
    scale.set_domain(extent(values).unwrap());

    assert_eq!(scale.domain(), (3.0, 27.0));
    assert_eq!(scale.scale(3.0), 5.0);
    assert_eq!(scale.scale(27.0), 15.0);
}
