//! Named-column tables at the boundary with data loaders.
//!
//! ## Purpose
//!
//! Callers usually hold a rectangular table (one row per observation) with a
//! categorical class column and several numeric measurement columns. This
//! module provides that shape and the selection step that turns it into a
//! `TrainingSet` or into query feature rows.
//!
//! ## Design notes
//!
//! * **Column-major**: Columns are stored whole, matching how loaders and
//!   per-column statistics consume them.
//! * **Typed columns**: A column is either numeric or categorical; selecting
//!   a categorical column as a predictor is an error, not a parse attempt.
//!
//! ## Invariants
//!
//! * All columns have the same length.
//! * Column names are unique.
//!
//! ## Non-goals
//!
//! * This module does not parse delimited text or any file format.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::dataset::{LabeledSample, TrainingSet};
use crate::primitives::errors::KnnError;

// ============================================================================
// Columns
// ============================================================================

/// Values of one table column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData<T> {
    /// Real-valued measurements.
    Numeric(Vec<T>),

    /// Category names (class labels, identifiers).
    Categorical(Vec<String>),
}

impl<T> ColumnData<T> {
    /// Number of values in the column.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Categorical(v) => v.len(),
        }
    }

    /// Returns true if the column holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named table column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column<T> {
    /// Column name.
    pub name: String,
    /// Column values.
    pub data: ColumnData<T>,
}

impl<T> Column<T> {
    /// Create a numeric column.
    pub fn numeric(name: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Numeric(values),
        }
    }

    /// Create a categorical column.
    pub fn categorical<S: Into<String>>(name: impl Into<String>, values: Vec<S>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Categorical(values.into_iter().map(Into::into).collect()),
        }
    }
}

// ============================================================================
// Table
// ============================================================================

/// A rectangular table of named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    columns: Vec<Column<T>>,
    n_rows: usize,
}

impl<T: Float> Table<T> {
    /// Build a table, checking column lengths and name uniqueness.
    pub fn new(columns: Vec<Column<T>>) -> Result<Self, KnnError> {
        let n_rows = columns.first().map(|c| c.data.len()).unwrap_or(0);

        for (i, col) in columns.iter().enumerate() {
            if col.data.len() != n_rows {
                return Err(KnnError::InvalidInput(format!(
                    "column '{}' has {} rows, expected {}",
                    col.name,
                    col.data.len(),
                    n_rows
                )));
            }
            if columns[..i].iter().any(|c| c.name == col.name) {
                return Err(KnnError::InvalidInput(format!(
                    "duplicate column name '{}'",
                    col.name
                )));
            }
        }

        Ok(Self { columns, n_rows })
    }

    /// Number of rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// The columns in declaration order.
    #[inline]
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Borrow a numeric column, failing if it is absent or categorical.
    pub fn numeric_column(&self, name: &str) -> Result<&[T], KnnError> {
        match self.column(name).map(|c| &c.data) {
            Some(ColumnData::Numeric(values)) => Ok(values),
            Some(ColumnData::Categorical(_)) => Err(KnnError::InvalidInput(format!(
                "column '{}' is not numeric",
                name
            ))),
            None => Err(KnnError::MissingColumn(name.into())),
        }
    }

    /// Borrow a categorical column, failing if it is absent or numeric.
    pub fn categorical_column(&self, name: &str) -> Result<&[String], KnnError> {
        match self.column(name).map(|c| &c.data) {
            Some(ColumnData::Categorical(values)) => Ok(values),
            Some(ColumnData::Numeric(_)) => Err(KnnError::InvalidInput(format!(
                "column '{}' is not categorical",
                name
            ))),
            None => Err(KnnError::MissingColumn(name.into())),
        }
    }

    /// Extract row-major feature vectors for the given predictor columns.
    pub fn feature_rows(&self, predictors: &[&str]) -> Result<Vec<Vec<T>>, KnnError> {
        if predictors.is_empty() {
            return Err(KnnError::InvalidInput(
                "at least one predictor column is required".into(),
            ));
        }

        let columns = predictors
            .iter()
            .map(|name| {
                let values = self.numeric_column(name)?;
                Validator::validate_finite(values, |row| format!("{}[{}]", name, row))?;
                Ok(values)
            })
            .collect::<Result<Vec<_>, KnnError>>()?;

        Ok((0..self.n_rows)
            .map(|row| columns.iter().map(|col| col[row]).collect())
            .collect())
    }

    /// Select a label column and predictor columns as a training set.
    pub fn training_set(
        &self,
        label: &str,
        predictors: &[&str],
    ) -> Result<TrainingSet<T, String>, KnnError> {
        if predictors.contains(&label) {
            return Err(KnnError::InvalidInput(format!(
                "label column '{}' cannot also be a predictor",
                label
            )));
        }
        let labels = self.categorical_column(label)?;
        let rows = self.feature_rows(predictors)?;

        let samples = rows
            .into_iter()
            .zip(labels.iter())
            .map(|(features, l)| LabeledSample::new(features, l.clone()))
            .collect();
        TrainingSet::new(samples)
    }

    /// Count rows per category of a categorical column, in first-seen order.
    pub fn label_counts(&self, label: &str) -> Result<Vec<(String, usize)>, KnnError> {
        let labels = self.categorical_column(label)?;
        let mut counts: Vec<(String, usize)> = Vec::new();
        for l in labels {
            match counts.iter_mut().find(|(name, _)| name == l) {
                Some((_, count)) => *count += 1,
                None => counts.push((l.clone(), 1)),
            }
        }
        Ok(counts)
    }

    /// Replace the values of an existing numeric column.
    pub(crate) fn with_numeric_column(mut self, name: &str, values: Vec<T>) -> Self {
        if let Some(col) = self.columns.iter_mut().find(|c| c.name == name) {
            debug_assert_eq!(values.len(), self.n_rows);
            col.data = ColumnData::Numeric(values);
        }
        self
    }
}
