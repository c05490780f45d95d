//! Reference in-memory tabular backend.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::capability::{CapabilityRegistry, TableCapability};
use crate::error::{TableError, TableResult};
use crate::types::SemanticType;
use crate::value::Value;

/// Semantic type of [`Frame`].
pub const FRAME_TYPE: SemanticType = SemanticType::new("tabwise.Frame");

/// Semantic type of [`Series`].
pub const SERIES_TYPE: SemanticType = SemanticType::new("tabwise.Series");

/// An owned numeric column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series(Vec<f64>);

impl Series {
    /// Creates a series from owned values.
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the series has no rows.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the underlying values.
    pub fn values(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// An in-memory table of uniformly sized named columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    columns: BTreeMap<String, Series>,
}

impl Frame {
    /// Creates an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a column, checking the row count against existing
    /// columns.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        series: impl Into<Series>,
    ) -> TableResult<Self> {
        let name = name.into();
        let series = series.into();
        if !self.columns.is_empty() && series.len() != self.rows() {
            return Err(TableError::LengthMismatch {
                column: name,
                expected: self.rows(),
                actual: series.len(),
            });
        }
        self.columns.insert(name, series);
        Ok(self)
    }

    /// Returns the row count (0 for a frame with no columns).
    pub fn rows(&self) -> usize {
        self.columns.values().next().map_or(0, Series::len)
    }

    /// Returns the named column, if present.
    pub fn column(&self, name: &str) -> Option<&Series> {
        self.columns.get(name)
    }

    /// Returns the column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns a new frame with `columns` assigned by name.
    ///
    /// Columns are added if absent and overwritten if already present; all
    /// other columns are untouched.
    pub fn assign(&self, columns: BTreeMap<String, Series>) -> TableResult<Self> {
        let mut out = self.clone();
        for (name, series) in columns {
            if !out.columns.is_empty() && series.len() != out.rows() {
                return Err(TableError::LengthMismatch {
                    column: name,
                    expected: out.rows(),
                    actual: series.len(),
                });
            }
            out.columns.insert(name, series);
        }
        Ok(out)
    }
}

/// [`TableCapability`] implementation for [`Frame`] and [`Series`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameCapability;

impl FrameCapability {
    /// Registers the frame capability in `registry`.
    pub fn register(registry: &mut CapabilityRegistry) {
        registry.register(Arc::new(Self));
    }
}

impl TableCapability for FrameCapability {
    fn table_type(&self) -> SemanticType {
        FRAME_TYPE
    }

    fn column_type(&self) -> SemanticType {
        SERIES_TYPE
    }

    fn extract_column(&self, table: &Value, column: &str) -> TableResult<Value> {
        let frame = table.expect_ref::<Frame>()?;
        let series = frame
            .column(column)
            .ok_or_else(|| TableError::MissingColumn(column.to_string()))?;
        Ok(Value::new(series.clone()))
    }

    fn assign(&self, table: &Value, columns: &BTreeMap<String, Value>) -> TableResult<Value> {
        let frame = table.expect_ref::<Frame>()?;
        let mut resolved = BTreeMap::new();
        for (name, value) in columns {
            resolved.insert(name.clone(), value.expect_ref::<Series>()?.clone());
        }
        Ok(Value::new(frame.assign(resolved)?))
    }
}
