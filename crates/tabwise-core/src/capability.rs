//! Table capability contract and registry.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::error::{TableError, TableResult};
use crate::types::SemanticType;
use crate::value::Value;

/// Capability contract for a tabular value type.
///
/// A capability binds a table semantic type to its column semantic type and
/// provides the two operations graph construction needs: extracting one
/// named column and assigning a set of named columns back onto the table.
pub trait TableCapability: std::fmt::Debug + Send + Sync {
    /// Semantic type of the whole table.
    fn table_type(&self) -> SemanticType;

    /// Semantic type of a single column.
    fn column_type(&self) -> SemanticType;

    /// Returns the named column of `table` as a standalone value.
    fn extract_column(&self, table: &Value, column: &str) -> TableResult<Value>;

    /// Returns `table` with `columns` assigned by name.
    ///
    /// Columns are added if absent and overwritten if already present; all
    /// other columns are left untouched.
    fn assign(&self, table: &Value, columns: &BTreeMap<String, Value>) -> TableResult<Value>;
}

/// In-memory registry of table capabilities, keyed by table type.
#[derive(Clone, Default)]
pub struct CapabilityRegistry {
    tables: HashMap<SemanticType, Arc<dyn TableCapability>>,
}

impl CapabilityRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a capability under its table type.
    ///
    /// Re-registering the same table type replaces the previous capability.
    pub fn register(&mut self, capability: Arc<dyn TableCapability>) {
        self.tables.insert(capability.table_type(), capability);
    }

    /// Retrieves the capability for a table type.
    pub fn get(&self, table_type: SemanticType) -> TableResult<Arc<dyn TableCapability>> {
        self.tables
            .get(&table_type)
            .cloned()
            .ok_or(TableError::UnknownTableType(table_type))
    }

    /// Returns the column type associated with a table type.
    pub fn column_type_for(&self, table_type: SemanticType) -> TableResult<SemanticType> {
        Ok(self.get(table_type)?.column_type())
    }

    /// Returns whether a capability is registered for a table type.
    pub fn contains(&self, table_type: SemanticType) -> bool {
        self.tables.contains_key(&table_type)
    }
}

impl fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("tables", &self.tables.keys().collect::<Vec<_>>())
            .finish()
    }
}
