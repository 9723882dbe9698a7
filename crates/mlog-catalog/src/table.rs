//! Attribute tables backing every resource type.
//!
//! A [`ResourceTable`] holds the candidate units of one vessel or equipment
//! type. Rows carry a [`RowId`] assigned at construction time; selection and
//! resolution always address rows through that identifier, never through
//! their position.

use std::collections::{BTreeMap, BTreeSet};

use mlog_core::errors::{ErrorInfo, MlogError};
use mlog_core::{ResourceTypeId, RowId};
use serde::{Deserialize, Serialize};

/// Kind of values stored in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    /// Numeric measurement (capacities, dimensions, day rates).
    #[default]
    Number,
    /// Categorical label.
    Text,
}

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Numeric value.
    Number(f64),
    /// Categorical value.
    Text(String),
}

impl AttributeValue {
    /// Returns the numeric payload, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(value) => Some(*value),
            AttributeValue::Text(_) => None,
        }
    }

    /// Returns the text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Number(_) => None,
            AttributeValue::Text(value) => Some(value),
        }
    }

    /// Returns the kind of the value.
    pub fn kind(&self) -> AttributeKind {
        match self {
            AttributeValue::Number(_) => AttributeKind::Number,
            AttributeValue::Text(_) => AttributeKind::Text,
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

/// Named, typed column of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Attribute name, e.g. `DeckLoading_ton_per_m2`.
    pub name: String,
    /// Kind of values stored in the column.
    #[serde(default)]
    pub kind: AttributeKind,
}

impl Column {
    /// Creates a numeric column.
    pub fn number(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Number,
        }
    }

    /// Creates a categorical column.
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Text,
        }
    }
}

/// Ordered set of uniquely named columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Creates a schema, rejecting duplicate column names.
    pub fn new(columns: Vec<Column>) -> Result<Self, MlogError> {
        let mut seen = BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(MlogError::Config(
                    ErrorInfo::new("duplicate-column", "column names must be unique")
                        .with_context("column", column.name.clone()),
                ));
            }
        }
        Ok(Self { columns })
    }

    /// Creates a schema made only of numeric columns.
    pub fn numeric<S: AsRef<str>>(names: &[S]) -> Result<Self, MlogError> {
        Self::new(
            names
                .iter()
                .map(|name| {
                    let name: &str = name.as_ref();
                    Column::number(name)
                })
                .collect(),
        )
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Returns the columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true when the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Ensures `attribute` exists and is numeric, naming `owner` in the error.
    pub fn require_numeric(&self, owner: &str, attribute: &str) -> Result<(), MlogError> {
        match self.column(attribute) {
            None => Err(MlogError::SchemaMismatch(
                ErrorInfo::new("unknown-attribute", "attribute is not part of the schema")
                    .with_context("owner", owner)
                    .with_context("attribute", attribute)
                    .with_hint(format!(
                        "known attributes: {}",
                        self.columns
                            .iter()
                            .map(|column| column.name.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    )),
            )),
            Some(column) if column.kind != AttributeKind::Number => Err(MlogError::SchemaMismatch(
                ErrorInfo::new(
                    "non-numeric-attribute",
                    "attribute cannot be compared to a threshold",
                )
                .with_context("owner", owner)
                .with_context("attribute", attribute),
            )),
            Some(_) => Ok(()),
        }
    }

    /// Checks that `values` holds exactly the schema's columns with matching kinds.
    pub fn validate_values(
        &self,
        owner: &str,
        values: &BTreeMap<String, AttributeValue>,
    ) -> Result<(), MlogError> {
        for column in &self.columns {
            let value = values.get(&column.name).ok_or_else(|| {
                MlogError::SchemaMismatch(
                    ErrorInfo::new("missing-value", "row lacks a value for a schema column")
                        .with_context("owner", owner)
                        .with_context("attribute", column.name.clone()),
                )
            })?;
            if value.kind() != column.kind {
                return Err(MlogError::SchemaMismatch(
                    ErrorInfo::new("value-kind", "row value kind does not match the column")
                        .with_context("owner", owner)
                        .with_context("attribute", column.name.clone()),
                ));
            }
        }
        if let Some(extra) = values.keys().find(|key| self.column(key).is_none()) {
            return Err(MlogError::SchemaMismatch(
                ErrorInfo::new("unknown-attribute", "row carries a value outside the schema")
                    .with_context("owner", owner)
                    .with_context("attribute", extra.clone()),
            ));
        }
        Ok(())
    }
}

/// Anything exposing named attribute values to the threshold filter.
pub trait Attributed {
    /// Returns the value of `name`, if present.
    fn attribute(&self, name: &str) -> Option<&AttributeValue>;

    /// Returns the numeric value of `name`, if present and numeric.
    fn numeric(&self, name: &str) -> Option<f64> {
        self.attribute(name).and_then(AttributeValue::as_number)
    }
}

/// One candidate unit of a resource type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRow {
    id: RowId,
    values: BTreeMap<String, AttributeValue>,
}

impl ResourceRow {
    /// Returns the stable identifier of the row.
    pub fn id(&self) -> RowId {
        self.id
    }

    /// Returns all attribute values of the row.
    pub fn values(&self) -> &BTreeMap<String, AttributeValue> {
        &self.values
    }
}

impl Attributed for ResourceRow {
    fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }
}

/// Immutable table of candidate units for one resource type.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceTable {
    type_id: ResourceTypeId,
    schema: Schema,
    rows: Vec<ResourceRow>,
    positions: BTreeMap<RowId, usize>,
}

impl ResourceTable {
    /// Starts building a table for `type_id` with the given schema.
    pub fn builder(type_id: ResourceTypeId, schema: Schema) -> TableBuilder {
        TableBuilder {
            type_id,
            schema,
            rows: Vec::new(),
            next_id: 0,
        }
    }

    /// Builds an all-numeric table from a column list and row-major values.
    pub fn numeric<S: AsRef<str>>(
        type_id: ResourceTypeId,
        columns: &[S],
        rows: &[Vec<f64>],
    ) -> Result<Self, MlogError> {
        let mut builder = Self::builder(type_id, Schema::numeric(columns)?);
        for row in rows {
            if row.len() != columns.len() {
                return Err(MlogError::Config(
                    ErrorInfo::new("row-width", "row width does not match the column count")
                        .with_context("expected", columns.len().to_string())
                        .with_context("actual", row.len().to_string()),
                ));
            }
            builder.push_row(columns.iter().zip(row.iter()).map(|(name, value)| {
                let name: &str = name.as_ref();
                (name.to_string(), AttributeValue::Number(*value))
            }))?;
        }
        Ok(builder.build())
    }

    /// Returns the type this table describes.
    pub fn type_id(&self) -> &ResourceTypeId {
        &self.type_id
    }

    /// Returns the column schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the rows in catalog order.
    pub fn rows(&self) -> &[ResourceRow] {
        &self.rows
    }

    /// Looks up a row by identifier.
    pub fn row(&self, id: RowId) -> Option<&ResourceRow> {
        self.positions.get(&id).map(|&position| &self.rows[position])
    }

    /// Returns true when the table holds a row with `id`.
    pub fn contains(&self, id: RowId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Incremental, validating constructor for [`ResourceTable`].
#[derive(Debug)]
pub struct TableBuilder {
    type_id: ResourceTypeId,
    schema: Schema,
    rows: Vec<ResourceRow>,
    next_id: u64,
}

impl TableBuilder {
    /// Appends a row, assigning the next sequential identifier.
    pub fn push_row<K, I>(&mut self, values: I) -> Result<RowId, MlogError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, AttributeValue)>,
    {
        let values: BTreeMap<String, AttributeValue> =
            values.into_iter().map(|(key, value)| (key.into(), value)).collect();
        self.schema.validate_values(self.type_id.as_str(), &values)?;
        let id = RowId::from_raw(self.next_id);
        self.next_id += 1;
        self.rows.push(ResourceRow { id, values });
        Ok(id)
    }

    /// Finalises the table.
    pub fn build(self) -> ResourceTable {
        let positions = self
            .rows
            .iter()
            .enumerate()
            .map(|(position, row)| (row.id, position))
            .collect();
        ResourceTable {
            type_id: self.type_id,
            schema: self.schema,
            rows: self.rows,
            positions,
        }
    }
}
