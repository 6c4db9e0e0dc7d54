//! JSON to record binder.
//!
//! [`bind`] maps a JSON object onto a record [`Schema`], coercing scalars,
//! recursing into nested records and lists, and reporting missing required
//! fields. Typed records then pull their values out of the resulting
//! [`Fields`] in `Record::from_fields`.
//!
//! Last.fm returns a bare object instead of a one-element array when a list
//! holds exactly one item. Every list-typed field accepts both forms.

use serde_json::{Map, Number, Value};

use crate::error::{LastfmError, Result};
use crate::models::schema::{Field, FieldType, Record, ScalarKind, Schema};

/// Bound value of one field.
#[derive(Debug, Clone)]
pub enum Slot {
    Absent,
    Scalar(Value),
    Record(Fields),
    List(Vec<Fields>),
}

/// Bound fields of one record, in schema order.
#[derive(Debug, Clone)]
pub struct Fields {
    schema: &'static Schema,
    slots: Vec<(&'static Field, Slot)>,
}

/// Bind a JSON object onto a schema.
pub fn bind(value: &Value, schema: &'static Schema) -> Result<Fields> {
    let map = value.as_object().ok_or_else(|| LastfmError::SchemaMismatch {
        record: schema.name,
        field: "(root)".to_string(),
        expected: "object",
    })?;
    bind_object(map, schema)
}

fn bind_object(map: &Map<String, Value>, schema: &'static Schema) -> Result<Fields> {
    let mut slots = Vec::with_capacity(schema.fields.len());

    for field in schema.fields {
        let slot = match map.get(field.key) {
            Some(value) if !is_absent(value, field) => bind_field(value, field, schema)?,
            _ if field.required => {
                return Err(LastfmError::MissingField {
                    record: schema.name,
                    field: field.name,
                })
            }
            _ => Slot::Absent,
        };
        slots.push((field, slot));
    }

    Ok(Fields { schema, slots })
}

/// `null` is always absent; Last.fm also sends `""` for unknown numbers.
fn is_absent(value: &Value, field: &Field) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) if s.is_empty() => matches!(
            field.ty,
            FieldType::Scalar(ScalarKind::Integer | ScalarKind::Float | ScalarKind::Flag)
        ),
        _ => false,
    }
}

fn bind_field(value: &Value, field: &Field, schema: &'static Schema) -> Result<Slot> {
    match field.ty {
        FieldType::Scalar(kind) => coerce_scalar(value, kind)
            .map(Slot::Scalar)
            .ok_or_else(|| mismatch(schema, field.name, kind.describe())),
        FieldType::Record(nested) => match value {
            Value::Object(map) => Ok(Slot::Record(bind_object(map, nested)?)),
            _ => Err(mismatch(schema, field.name, "object")),
        },
        FieldType::ListOf(nested) => bind_list(value, nested)
            .ok_or_else(|| mismatch(schema, field.name, "list of objects"))?
            .map(Slot::List),
    }
}

/// Bind a list of records, accepting a bare object as a one-element list.
///
/// Returns `None` when the shape itself is wrong (scalar, or an array holding
/// non-objects); binding errors inside the elements are propagated.
fn bind_list(value: &Value, schema: &'static Schema) -> Option<Result<Vec<Fields>>> {
    match value {
        Value::Array(items) => {
            if !items.iter().all(Value::is_object) {
                return None;
            }
            Some(items.iter().map(|item| bind(item, schema)).collect())
        }
        Value::Object(map) => Some(bind_object(map, schema).map(|f| vec![f])),
        _ => None,
    }
}

/// Bind the list at `value` into typed records.
///
/// Used by collections, whose item list sits outside any record schema.
pub fn bind_many<R: Record>(value: &Value, item_key: &str) -> Result<Vec<R>> {
    let schema = R::schema();
    let fields = bind_list(value, schema).ok_or_else(|| LastfmError::SchemaMismatch {
        record: schema.name,
        field: item_key.to_string(),
        expected: "list of objects",
    })??;
    fields.into_iter().map(R::from_fields).collect()
}

fn mismatch(schema: &Schema, field: &str, expected: &'static str) -> LastfmError {
    LastfmError::SchemaMismatch {
        record: schema.name,
        field: field.to_string(),
        expected,
    }
}

/// Coerce a scalar to its normalized JSON form.
fn coerce_scalar(value: &Value, kind: ScalarKind) -> Option<Value> {
    match kind {
        ScalarKind::Raw => Some(value.clone()),
        ScalarKind::Text => match value {
            Value::String(s) => Some(Value::String(s.clone())),
            Value::Number(n) => Some(Value::String(n.to_string())),
            _ => None,
        },
        ScalarKind::Integer => match value {
            Value::Number(n) => n.as_u64().map(Value::from),
            Value::String(s) => s.trim().parse::<u64>().ok().map(Value::from),
            _ => None,
        },
        ScalarKind::Float => {
            let f = match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            }?;
            Number::from_f64(f).map(Value::Number)
        }
        ScalarKind::Flag => match value {
            Value::Bool(b) => Some(Value::Bool(*b)),
            Value::Number(n) => match n.as_u64() {
                Some(0) => Some(Value::Bool(false)),
                Some(1) => Some(Value::Bool(true)),
                _ => None,
            },
            Value::String(s) => match s.trim() {
                "0" | "false" => Some(Value::Bool(false)),
                "1" | "true" => Some(Value::Bool(true)),
                _ => None,
            },
            _ => None,
        },
    }
}

impl Fields {
    /// Name of the record these fields were bound for.
    pub fn record_name(&self) -> &'static str {
        self.schema.name
    }

    fn take(&mut self, name: &str) -> Slot {
        self.slots
            .iter_mut()
            .find(|(field, _)| field.name == name)
            .map(|(_, slot)| std::mem::replace(slot, Slot::Absent))
            .unwrap_or(Slot::Absent)
    }

    fn take_scalar(&mut self, name: &str) -> Option<Value> {
        match self.take(name) {
            Slot::Scalar(v) => Some(v),
            _ => None,
        }
    }

    pub fn text(&mut self, name: &str) -> Option<String> {
        match self.take_scalar(name)? {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn integer(&mut self, name: &str) -> Option<u64> {
        self.take_scalar(name)?.as_u64()
    }

    pub fn float(&mut self, name: &str) -> Option<f64> {
        self.take_scalar(name)?.as_f64()
    }

    pub fn flag(&mut self, name: &str) -> Option<bool> {
        self.take_scalar(name)?.as_bool()
    }

    pub fn raw(&mut self, name: &str) -> Option<Value> {
        self.take_scalar(name)
    }

    pub fn record<R: Record>(&mut self, name: &str) -> Result<Option<R>> {
        match self.take(name) {
            Slot::Record(fields) => R::from_fields(fields).map(Some),
            _ => Ok(None),
        }
    }

    pub fn list<R: Record>(&mut self, name: &str) -> Result<Option<Vec<R>>> {
        match self.take(name) {
            Slot::List(items) => items
                .into_iter()
                .map(R::from_fields)
                .collect::<Result<Vec<_>>>()
                .map(Some),
            _ => Ok(None),
        }
    }

    pub fn required_text(&mut self, name: &'static str) -> Result<String> {
        let value = self.text(name);
        self.require(name, value)
    }

    pub fn required_integer(&mut self, name: &'static str) -> Result<u64> {
        let value = self.integer(name);
        self.require(name, value)
    }

    pub fn required_record<R: Record>(&mut self, name: &'static str) -> Result<R> {
        let value = self.record(name)?;
        self.require(name, value)
    }

    fn require<T>(&self, name: &'static str, value: Option<T>) -> Result<T> {
        value.ok_or(LastfmError::MissingField {
            record: self.schema.name,
            field: name,
        })
    }
}
