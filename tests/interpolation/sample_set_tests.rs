//! tests for sample pairing, sorting and bracketing
use rill::elementwise::arange;
use rill::interpolation::errors::InterpolationError;
use rill::interpolation::samples::{SampleSet, SortState};

type TestResult = Result<(), InterpolationError>;

#[test]
fn brackets_outside_range_use_end_segments() -> TestResult {
    let xs = arange(0.0, 20.0, 500);
    let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
    let mut samples = SampleSet::new(xs, ys)?;

    assert_eq!(samples.bracket(-1.0)?, (0, 1));
    assert_eq!(samples.bracket(21.0)?, (498, 499));
    Ok(())
}

#[test]
fn brackets_at_endpoints() -> TestResult {
    let mut samples = SampleSet::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0; 4])?;

    assert_eq!(samples.bracket(0.0)?, (0, 1));
    assert_eq!(samples.bracket(3.0)?, (2, 3));
    Ok(())
}

#[test]
fn brackets_interior_points() -> TestResult {
    let mut samples = SampleSet::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0; 4])?;

    assert_eq!(samples.bracket(0.5)?, (0, 1));
    assert_eq!(samples.bracket(1.0)?, (1, 2));
    assert_eq!(samples.bracket(1.999)?, (1, 2));
    assert_eq!(samples.bracket(2.5)?, (2, 3));
    Ok(())
}

#[test]
fn interior_point_lies_inside_its_bracket() -> TestResult {
    let xs = arange(0.0, 20.0, 500);
    let mut samples = SampleSet::new(xs.clone(), vec![0.0; 500])?;

    for j in [0, 1, 137, 250, 497, 498] {
        let x = 0.5 * (xs[j] + xs[j + 1]);
        let (lo, hi) = samples.bracket(x)?;
        assert_eq!((lo, hi), (j, j + 1), "x = {x}");
        assert!(xs[lo] < x && x < xs[hi]);
    }
    Ok(())
}

#[test]
fn bracket_forces_sort() -> TestResult {
    let mut samples = SampleSet::new(vec![3.0, 1.0, 2.0, 0.0], vec![30.0, 10.0, 20.0, 0.0])?;
    assert_eq!(samples.state(), SortState::Unsorted);

    assert_eq!(samples.bracket(2.5)?, (2, 3));
    assert!(samples.is_sorted());
    assert_eq!(samples.xs(), &[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(samples.ys(), &[0.0, 10.0, 20.0, 30.0]);
    Ok(())
}

#[test]
fn sort_is_idempotent() -> TestResult {
    let xs = vec![0.7, -1.2, 3.3, 0.0, 2.2, -5.0];
    let ys = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

    let mut once = SampleSet::new(xs.clone(), ys.clone())?;
    once.sort();

    let mut twice = SampleSet::new(xs, ys)?;
    twice.sort();
    twice.sort();

    let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(once.xs()), bits(twice.xs()));
    assert_eq!(bits(once.ys()), bits(twice.ys()));
    Ok(())
}

#[test]
fn already_ascending_keeps_order() -> TestResult {
    let samples = SampleSet::sorted(vec![0.0, 1.0, 1.0, 2.0], vec![4.0, 3.0, 2.0, 1.0])?;

    assert!(samples.is_sorted());
    assert_eq!(samples.ys(), &[4.0, 3.0, 2.0, 1.0]);
    Ok(())
}

#[test]
fn equal_keys_keep_input_order() -> TestResult {
    let samples = SampleSet::sorted(vec![2.0, 1.0, 2.0, 0.0], vec![1.0, 2.0, 3.0, 4.0])?;

    assert_eq!(samples.xs(), &[0.0, 1.0, 2.0, 2.0]);
    assert_eq!(samples.ys(), &[4.0, 2.0, 1.0, 3.0]);
    Ok(())
}

#[test]
fn min_max_before_and_after_sort() -> TestResult {
    let mut samples = SampleSet::new(vec![2.0, -1.0, 5.0], vec![0.0; 3])?;
    assert_eq!((samples.x_min(), samples.x_max()), (-1.0, 5.0));
    samples.sort();
    assert_eq!((samples.x_min(), samples.x_max()), (-1.0, 5.0));
    Ok(())
}

#[test]
fn unequal_lengths() {
    let err = SampleSet::new(vec![0.0, 1.0], vec![0.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 2, y_len: 1 }));
}

#[test]
fn empty_input() {
    let err = SampleSet::new(vec![], vec![]).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
}

#[test]
fn non_finite_input() {
    let err = SampleSet::new(vec![0.0, f64::NAN], vec![0.0, 1.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));

    let err = SampleSet::new(vec![0.0, 1.0], vec![f64::INFINITY, 1.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 0 }));
}

#[test]
fn single_sample_cannot_bracket() -> TestResult {
    let mut samples = SampleSet::new(vec![1.0], vec![2.0])?;
    let err = samples.bracket(1.0).unwrap_err();
    assert!(matches!(err, InterpolationError::InsufficientPoints { got: 1 }));
    Ok(())
}
