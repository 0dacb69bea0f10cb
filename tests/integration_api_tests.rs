use approx::assert_abs_diff_eq;
use knn_rs::prelude::*;

/// Standardized (Perimeter, Concavity) rows from the breast cancer data.
fn cancer_table() -> Table<f64> {
    Table::new(vec![
        Column::numeric("Perimeter", vec![0.24, 0.75, 0.62, 0.42, -1.16]),
        Column::numeric("Concavity", vec![2.65, 2.87, 2.54, 2.31, 4.04]),
        Column::categorical(
            "Class",
            vec!["Benign", "Malignant", "Malignant", "Malignant", "Benign"],
        ),
    ])
    .unwrap()
}

/// Unscaled (Area, Smoothness) rows; Area dwarfs Smoothness.
fn unscaled_table() -> Table<f64> {
    Table::new(vec![
        Column::categorical("ID", vec!["a", "b", "c", "d", "e", "f", "g", "h"]),
        Column::numeric(
            "Area",
            vec![500.0, 520.0, 480.0, 510.0, 1500.0, 1450.0, 1600.0, 530.0],
        ),
        Column::numeric(
            "Smoothness",
            vec![0.07, 0.08, 0.075, 0.072, 0.10, 0.11, 0.105, 0.115],
        ),
        Column::categorical("Class", vec!["B", "B", "B", "B", "M", "M", "M", "M"]),
    ])
    .unwrap()
}

// ============================================================================
// End-to-End Tests
// ============================================================================

#[test]
fn test_end_to_end_worked_example() {
    let table = cancer_table();
    let training_set = table
        .training_set("Class", &["Perimeter", "Concavity"])
        .unwrap();

    let model = Knn::new().k(5).build(training_set).unwrap();
    assert_eq!(model.predict_one(&[0.0, 3.5]).unwrap(), "Malignant");
    assert!(model.scaling_parameters().is_none());
    assert_eq!(model.k(), 5);
}

#[test]
fn test_build_from_table_and_predict_table() {
    let model = Knn::new()
        .k(5)
        .build_from_table(&cancer_table(), "Class", &["Perimeter", "Concavity"])
        .unwrap();

    assert_eq!(
        model.predictors(),
        Some(&["Perimeter".to_string(), "Concavity".to_string()][..])
    );

    // Column order in the query table does not matter
    let queries = Table::new(vec![
        Column::numeric("Concavity", vec![3.5]),
        Column::numeric("Perimeter", vec![0.0]),
    ])
    .unwrap();
    assert_eq!(model.predict_table(&queries).unwrap(), vec!["Malignant"]);

    let missing = Table::new(vec![Column::numeric("Perimeter", vec![0.0])]).unwrap();
    assert_eq!(
        model.predict_table(&missing).unwrap_err(),
        KnnError::MissingColumn("Concavity".to_string())
    );
}

#[test]
fn test_predict_table_requires_table_model() {
    let set = cancer_table()
        .training_set("Class", &["Perimeter", "Concavity"])
        .unwrap();
    let model = Knn::new().k(1).build(set).unwrap();

    assert!(matches!(
        model.predict_table(&cancer_table()),
        Err(KnnError::InvalidInput(_))
    ));
}

// ============================================================================
// Standardization Tests
// ============================================================================

#[test]
fn test_standardization_changes_prediction() {
    let table = unscaled_table();
    // Area near the benign rows, smoothness near the malignant rows
    let query = [540.0, 0.113];

    let raw = Knn::new()
        .k(3)
        .build_from_table(&table, "Class", &["Area", "Smoothness"])
        .unwrap();
    let scaled = Knn::new()
        .k(3)
        .standardize()
        .build_from_table(&table, "Class", &["Area", "Smoothness"])
        .unwrap();

    // Unscaled, Area decides everything
    assert_eq!(raw.predict_one(&query).unwrap(), "B");
    assert_eq!(
        raw.neighbors(&query).unwrap().indices().collect::<Vec<_>>(),
        vec![7, 1, 3]
    );

    // Scaled, both predictors count
    let params = scaled.scaling_parameters().unwrap();
    assert_eq!(params.dimensions(), 2);
    assert_eq!(scaled.neighbors(&query).unwrap().as_slice()[0].index, 7);
    assert_eq!(scaled.vote(&query).unwrap().total(), 3);
}

#[test]
fn test_model_scales_queries_with_training_parameters() {
    let table = unscaled_table();
    let model = Knn::new()
        .k(3)
        .standardize()
        .build_from_table(&table, "Class", &["Area", "Smoothness"])
        .unwrap();

    let params = model.scaling_parameters().unwrap();
    let query = [1000.0, 0.09];
    let transformed = model.transform_query(&query).unwrap();

    for j in 0..2 {
        assert_eq!(
            transformed[j],
            (query[j] - params.means()[j]) / params.std_devs()[j]
        );
    }

    // Training set is stored in scaled units with mean 0
    let set = model.classifier().training_set();
    let mean_area: f64 =
        set.samples().iter().map(|s| s.features()[0]).sum::<f64>() / set.len() as f64;
    assert_abs_diff_eq!(mean_area, 0.0, epsilon = 1e-9);
}

#[test]
fn test_predict_many_matches_predict_one() {
    let table = unscaled_table();
    let model = Knn::new()
        .k(3)
        .standardize()
        .build_from_table(&table, "Class", &["Area", "Smoothness"])
        .unwrap();

    let queries = vec![vec![500.0, 0.075], vec![1500.0, 0.1], vec![540.0, 0.113]];
    let batch = model.predict_many(&queries).unwrap();
    let single: Vec<String> = queries
        .iter()
        .map(|q| model.predict_one(q).unwrap())
        .collect();

    assert_eq!(batch, single);
    assert_eq!(batch[0], "B");
    assert_eq!(batch[1], "M");
}

#[test]
fn test_zero_variance_through_builder() {
    let set = TrainingSet::from_rows(
        vec![vec![1.0, 3.0], vec![2.0, 3.0], vec![8.0, 3.0], vec![9.0, 3.0]],
        vec!["lo", "lo", "hi", "hi"],
    )
    .unwrap();

    let result = Knn::new().k(1).standardize().build(set.clone());
    assert_eq!(
        result.unwrap_err(),
        KnnError::DegenerateColumn { column: 1 }
    );

    let model = Knn::new()
        .k(1)
        .zero_variance_policy(ZeroVariancePolicy::Zero)
        .build(set)
        .unwrap();
    assert_eq!(model.predict_one(&[8.5, -100.0]).unwrap(), "hi");
}

#[test]
fn test_standardize_values_near_float_max() {
    let set = TrainingSet::from_rows(
        vec![vec![1.5e308], vec![1.6e308], vec![1.7e308]],
        vec!["lo", "mid", "hi"],
    )
    .unwrap();

    let model = Knn::new().k(1).standardize().build(set).unwrap();
    assert!(!model.scaling_parameters().unwrap().is_degenerate(0));
    assert_eq!(model.predict_one(&[1.69e308]).unwrap(), "hi");
}

// ============================================================================
// Balancing Tests
// ============================================================================

#[test]
fn test_balance_classes_through_builder() {
    let mut rows: Vec<Vec<f64>> = (0..20).map(|i| vec![i as f64 * 0.1]).collect();
    let mut labels = vec!["common"; 20];
    rows.push(vec![3.0]);
    labels.push("rare");

    let set = TrainingSet::from_rows(rows, labels).unwrap();
    let query = [2.9];

    // Rare class is outvoted without balancing
    let plain = Knn::new().k(5).build(set.clone()).unwrap();
    assert_eq!(plain.predict_one(&query).unwrap(), "common");

    let balanced = Knn::new()
        .k(5)
        .balance_classes()
        .seed(42)
        .build(set)
        .unwrap();
    assert_eq!(balanced.classifier().training_set().len(), 40);
    assert_eq!(balanced.predict_one(&query).unwrap(), "rare");
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

#[test]
fn test_duplicate_parameter_detection() {
    let set = cancer_table()
        .training_set("Class", &["Perimeter", "Concavity"])
        .unwrap();

    let result = Knn::new().k(3).k(5).build(set.clone());
    assert_eq!(
        result.unwrap_err(),
        KnnError::DuplicateParameter { parameter: "k" }
    );

    let result = Knn::new()
        .distance_metric(Euclidean)
        .distance_metric(Manhattan)
        .build(set.clone());
    assert_eq!(
        result.unwrap_err(),
        KnnError::DuplicateParameter {
            parameter: "distance_metric"
        }
    );

    let result = Knn::new().k(1).standardize().standardize().build(set);
    assert!(matches!(
        result,
        Err(KnnError::DuplicateParameter { .. })
    ));
}

#[test]
fn test_builder_validation() {
    let set = cancer_table()
        .training_set("Class", &["Perimeter", "Concavity"])
        .unwrap();

    // Default k = 5 needs five samples
    assert!(Knn::new().build(set.clone()).is_ok());
    assert_eq!(
        Knn::new().k(6).build(set.clone()).unwrap_err(),
        KnnError::InvalidK { k: 6, n_samples: 5 }
    );
    assert!(matches!(
        Knn::new().k(1).distance_metric(Minkowski(0.0)).build(set.clone()),
        Err(KnnError::InvalidInput(_))
    ));
    assert!(matches!(
        Knn::new().k(1).seed(3).build(set),
        Err(KnnError::InvalidInput(_))
    ));
}

#[test]
fn test_parallel_hint_matches_sequential() {
    let rows: Vec<Vec<f64>> = (0..100)
        .map(|i| vec![(i % 10) as f64, (i / 10) as f64])
        .collect();
    let labels: Vec<u32> = (0..100).map(|i| ((i % 10) / 4) as u32).collect();
    let set = TrainingSet::from_rows(rows, labels).unwrap();
    let queries: Vec<Vec<f64>> = (0..30)
        .map(|i| vec![i as f64 * 0.31, 9.0 - i as f64 * 0.27])
        .collect();

    let sequential = Knn::new().k(5).standardize().build(set.clone()).unwrap();
    let parallel = Knn::new()
        .k(5)
        .standardize()
        .parallel(true)
        .build(set)
        .unwrap();

    assert_eq!(
        sequential.predict_many(&queries).unwrap(),
        parallel.predict_many(&queries).unwrap()
    );
}

// ============================================================================
// Column Scaler Tests
// ============================================================================

#[test]
fn test_column_scaler_passes_other_columns_through() {
    let table = unscaled_table();
    let scaler = StandardScaler::new();
    let (fitted, scaled) =
        ColumnScaler::fit_transform(&scaler, table.clone(), &["Area", "Smoothness"]).unwrap();

    assert_eq!(fitted.columns(), &["Area".to_string(), "Smoothness".to_string()]);
    assert_eq!(scaled.n_rows(), 8);
    assert_eq!(scaled.column("ID"), table.column("ID"));
    assert_eq!(scaled.column("Class"), table.column("Class"));

    let area = scaled.numeric_column("Area").unwrap();
    let mean: f64 = area.iter().sum::<f64>() / area.len() as f64;
    assert_abs_diff_eq!(mean, 0.0, epsilon = 1e-9);
    assert_ne!(area, table.numeric_column("Area").unwrap());
}

#[test]
fn test_column_scaler_reuses_fit_parameters() {
    let scaler = StandardScaler::new();
    let fitted = ColumnScaler::fit(&scaler, &unscaled_table(), &["Area"]).unwrap();
    let params = fitted.parameters();

    let new_rows = Table::new(vec![
        Column::numeric("Area", vec![500.0, 1500.0]),
        Column::numeric("Smoothness", vec![0.075, 0.1]),
    ])
    .unwrap();
    let scaled = fitted.transform(new_rows).unwrap();

    let area = scaled.numeric_column("Area").unwrap();
    assert_eq!(area[1], (1500.0 - params.means()[0]) / params.std_devs()[0]);
    // Smoothness was not fitted and is untouched
    assert_eq!(scaled.numeric_column("Smoothness").unwrap(), &[0.075, 0.1]);
}

#[test]
fn test_column_scaler_errors() {
    let scaler = StandardScaler::new();
    let table = unscaled_table();

    assert!(matches!(
        ColumnScaler::fit(&scaler, &table, &["Area", "Area"]),
        Err(KnnError::InvalidInput(_))
    ));
    assert!(matches!(
        ColumnScaler::fit(&scaler, &table, &["Class"]),
        Err(KnnError::InvalidInput(_))
    ));

    let fitted = ColumnScaler::fit(&scaler, &table, &["Area", "Smoothness"]).unwrap();
    let missing = Table::new(vec![Column::numeric("Area", vec![1.0])]).unwrap();
    assert_eq!(
        fitted.transform(missing).unwrap_err(),
        KnnError::MissingColumn("Smoothness".to_string())
    );
}
