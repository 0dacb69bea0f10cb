use knn_rs::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// `n_benign` rows labeled "Benign" followed by `n_malignant` labeled "Malignant".
///
/// Every row is distinct: its first feature is its position.
fn imbalanced(n_benign: usize, n_malignant: usize) -> TrainingSet<f64, &'static str> {
    let n = n_benign + n_malignant;
    let rows = (0..n).map(|i| vec![i as f64, (i % 7) as f64]).collect();
    let labels = (0..n)
        .map(|i| if i < n_benign { "Benign" } else { "Malignant" })
        .collect();
    TrainingSet::from_rows(rows, labels).unwrap()
}

#[test]
fn test_balance_to_majority_count() {
    let set = imbalanced(357, 3);
    let balanced = Resampler::balance(&set, Some(42)).unwrap();

    assert_eq!(balanced.len(), 714);
    assert_eq!(balanced.dimensions(), 2);
    assert_eq!(
        balanced.class_counts(),
        vec![("Benign", 357), ("Malignant", 357)]
    );
}

#[test]
fn test_original_rows_are_kept() {
    let set = imbalanced(357, 3);
    let balanced = Resampler::balance(&set, Some(7)).unwrap();

    for original in set.samples() {
        assert!(balanced.samples().iter().any(|s| s == original));
    }

    // Drawn rows are copies of minority members, never new values
    for sample in balanced.samples().iter().filter(|s| *s.label() == "Malignant") {
        assert!(set.samples()[357..].contains(sample));
    }
}

#[test]
fn test_output_order() {
    let set = imbalanced(5, 2);
    let balanced = Resampler::balance(&set, Some(1)).unwrap();

    // Majority class unchanged, then minority originals, then drawn rows
    assert_eq!(&balanced.samples()[..7], set.samples());
    assert_eq!(balanced.samples().len(), 10);
}

#[test]
fn test_seeded_balance_is_reproducible() {
    let set = imbalanced(50, 4);
    let a = Resampler::balance(&set, Some(123)).unwrap();
    let b = Resampler::balance(&set, Some(123)).unwrap();
    assert_eq!(a, b);

    let mut rng = StdRng::seed_from_u64(123);
    let c = Resampler::balance_with_rng(&set, &mut rng).unwrap();
    assert_eq!(a, c);
}

#[test]
fn test_unseeded_balance_counts() {
    let set = imbalanced(20, 5);
    let balanced = Resampler::balance(&set, None).unwrap();
    assert_eq!(balanced.class_counts(), vec![("Benign", 20), ("Malignant", 20)]);
}

#[test]
fn test_single_member_minority() {
    let set = imbalanced(9, 1);
    let balanced = Resampler::balance(&set, Some(0)).unwrap();

    let minority: Vec<_> = balanced
        .samples()
        .iter()
        .filter(|s| *s.label() == "Malignant")
        .collect();
    assert_eq!(minority.len(), 9);
    assert!(minority.iter().all(|s| s.features() == &[9.0, 2.0]));
}

#[test]
fn test_three_classes() {
    let set = TrainingSet::from_rows(
        vec![vec![0.0]; 7],
        vec!['a', 'b', 'a', 'c', 'a', 'b', 'a'],
    )
    .unwrap();
    let balanced = Resampler::balance(&set, Some(3)).unwrap();
    assert_eq!(
        balanced.class_counts(),
        vec![('a', 4), ('b', 4), ('c', 4)]
    );
}

#[test]
fn test_already_balanced_is_unchanged() {
    let set = TrainingSet::from_rows(vec![vec![1.0], vec![2.0]], vec!["x", "y"]).unwrap();
    let balanced = Resampler::balance(&set, Some(5)).unwrap();
    assert_eq!(balanced, set);
}

#[test]
fn test_single_class_rejected() {
    let set = TrainingSet::from_rows(vec![vec![1.0], vec![2.0]], vec!["x", "x"]).unwrap();
    assert_eq!(
        Resampler::balance(&set, Some(5)).unwrap_err(),
        KnnError::TooFewClasses { got: 1 }
    );
}
