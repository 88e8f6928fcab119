//! Result records.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use sqlx::sqlite::{Sqlite, SqliteRow, SqliteValueRef};
use sqlx::{Column, Decode, Row, TypeInfo, ValueRef};

/// A column value, typed by the SQLite storage class it was read with.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view of the value. Integers widen; text is never parsed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Real(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    fn decode(raw: SqliteValueRef<'_>) -> Result<Self, sqlx::Error> {
        if raw.is_null() {
            return Ok(Self::Null);
        }
        let class = StorageClass::of(raw.type_info().name());
        let value = match class {
            StorageClass::Integer => Self::Integer(decode_as::<i64>(raw)?),
            StorageClass::Real => Self::Real(decode_as::<f64>(raw)?),
            StorageClass::Blob => Self::Blob(decode_as::<Vec<u8>>(raw)?),
            StorageClass::Text => Self::Text(decode_as::<String>(raw)?),
        };
        Ok(value)
    }
}

fn decode_as<'r, T: Decode<'r, Sqlite>>(raw: SqliteValueRef<'r>) -> Result<T, sqlx::Error> {
    T::decode(raw).map_err(sqlx::Error::Decode)
}

// sqlx reports "NUMERIC", "BOOLEAN" and date names only for declared column
// types; values read back carry one of the four storage classes.
#[derive(Debug, Clone, Copy)]
enum StorageClass {
    Integer,
    Real,
    Text,
    Blob,
}

impl StorageClass {
    fn of(type_name: &str) -> Self {
        match type_name {
            "INTEGER" | "BOOLEAN" => Self::Integer,
            "REAL" | "NUMERIC" => Self::Real,
            "BLOB" => Self::Blob,
            _ => Self::Text,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Blob(v) => write!(f, "<{} bytes>", v.len()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Integer(v) => serializer.serialize_i64(*v),
            Self::Real(v) => serializer.serialize_f64(*v),
            Self::Text(v) => serializer.serialize_str(v),
            Self::Blob(v) => serializer.collect_seq(v),
        }
    }
}

/// One result row: column names mapped to values, in column order.
///
/// Column names are case-sensitive. When a row carries the same name twice
/// the record keeps the first position and the last value; the flight
/// templates rely on this so `airline` resolves to the airline's display
/// name rather than the flight's foreign key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    columns: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a driver row using its column metadata.
    pub fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let mut record = Self {
            columns: Vec::with_capacity(row.len()),
        };
        for column in row.columns() {
            let value = Value::decode(row.try_get_raw(column.ordinal())?)?;
            record.insert(column.name(), value);
        }
        Ok(record)
    }

    /// Set a column, replacing the value in place if the name exists.
    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        let column = column.into();
        match self.columns.iter_mut().find(|(name, _)| *name == column) {
            Some(entry) => entry.1 = value,
            None => self.columns.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The `FLIGHT_ID` alias.
    pub fn flight_id(&self) -> Option<i64> {
        self.get("FLIGHT_ID").and_then(Value::as_i64)
    }

    /// The `DELAY` alias as minutes. `None` for NULL or empty-string delays.
    pub fn delay(&self) -> Option<f64> {
        self.get("DELAY").and_then(Value::as_f64)
    }

    /// The airline display name.
    pub fn airline(&self) -> Option<&str> {
        self.get("airline").and_then(Value::as_str)
    }

    pub fn is_delayed(&self) -> bool {
        self.delay().is_some_and(|delay| delay > 0.0)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
