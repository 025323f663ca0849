//! Partial update and insert fragments
//!
//! Both builders take a sparse [`FieldMap`] keyed by logical field names and a
//! static [`ColumnMap`] that renames the fields whose storage column differs.

use crate::errors::StoreError;
use crate::query_builder::sql_generation::Placeholders;
use type_mapping::PostgresValue;

/// Static logical-name to physical-column table for one entity
pub type ColumnMap = [(&'static str, &'static str)];

/// Resolve the storage column for a logical field, falling back to the name itself
pub fn physical_name<'a>(name_map: &'a ColumnMap, field: &'a str) -> &'a str {
    name_map
        .iter()
        .find(|(logical, _)| *logical == field)
        .map(|(_, physical)| *physical)
        .unwrap_or(field)
}

/// Ordered map of logical field name to new value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    entries: Vec<(String, PostgresValue)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set a field. An existing key keeps its position and takes the new value.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<PostgresValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// In-place variant of [`FieldMap::set`]
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<PostgresValue>) {
        let field = field.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
    }

    /// Set a field only when a value is present
    pub fn set_opt<V>(self, field: impl Into<String>, value: Option<V>) -> Self
    where
        V: Into<PostgresValue>,
    {
        match value {
            Some(v) => self.set(field, v),
            None => self,
        }
    }

    pub fn get(&self, field: &str) -> Option<&PostgresValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PostgresValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<PostgresValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (field, value) in iter {
            map.insert(field, value);
        }
        map
    }
}

/// `SET` fragment and its positional values
#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate {
    /// `"col1"=$1, "col2"=$2, ...`
    pub set_cols: String,
    pub values: Vec<PostgresValue>,
}

/// Column list, placeholder list and positional values for an INSERT
#[derive(Debug, Clone, PartialEq)]
pub struct InsertFragment {
    /// `"col1", "col2", ...`
    pub columns: String,
    /// `$1, $2, ...`
    pub placeholders: String,
    pub values: Vec<PostgresValue>,
}

/// Build the assignment list for an UPDATE from a sparse field map.
///
/// Columns appear in the field map's insertion order and are numbered
/// `$1..$n` in that order. Fails when `fields` is empty; field names are
/// not checked against the table.
pub fn sql_for_partial_update(
    fields: &FieldMap,
    name_map: &ColumnMap,
) -> Result<PartialUpdate, StoreError> {
    if fields.is_empty() {
        return Err(StoreError::validation("No data supplied"));
    }

    let mut placeholders = Placeholders::new();
    let mut cols = Vec::with_capacity(fields.len());
    let mut values = Vec::with_capacity(fields.len());

    for (field, value) in fields.iter() {
        cols.push(format!(
            "\"{}\"={}",
            physical_name(name_map, field),
            placeholders.next_placeholder()
        ));
        values.push(value.clone());
    }

    Ok(PartialUpdate {
        set_cols: cols.join(", "),
        values,
    })
}

/// Build the column and placeholder lists for an INSERT, with the same
/// naming and ordering rules as [`sql_for_partial_update`].
pub fn sql_for_insert(fields: &FieldMap, name_map: &ColumnMap) -> Result<InsertFragment, StoreError> {
    if fields.is_empty() {
        return Err(StoreError::validation("No data supplied"));
    }

    let mut placeholders = Placeholders::new();
    let mut columns = Vec::with_capacity(fields.len());
    let mut marks = Vec::with_capacity(fields.len());
    let mut values = Vec::with_capacity(fields.len());

    for (field, value) in fields.iter() {
        columns.push(format!("\"{}\"", physical_name(name_map, field)));
        marks.push(placeholders.next_placeholder());
        values.push(value.clone());
    }

    Ok(InsertFragment {
        columns: columns.join(", "),
        placeholders: marks.join(", "),
        values,
    })
}
