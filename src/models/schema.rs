//! Static schema descriptors for Last.fm records.
//!
//! Every record type owns one [`Schema`]: an ordered table of fields, each
//! with the JSON key it is read from, its declared type and whether it is
//! required. The generic binder in [`crate::converters`] walks these tables;
//! no record needs custom parsing code for shape handling.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::converters::{self, Fields};
use crate::error::Result;

/// Kind of a scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Free text. Numbers are accepted and rendered to text.
    Text,
    /// Unsigned integer, accepted as a JSON number or a decimal string.
    Integer,
    /// Floating point number, accepted as a JSON number or a numeric string.
    Float,
    /// Boolean, accepted as `true`/`false`, `0`/`1` or their string forms.
    Flag,
    /// Any JSON value, kept untouched.
    Raw,
}

impl ScalarKind {
    /// Human-readable name used in schema mismatch errors.
    pub fn describe(&self) -> &'static str {
        match self {
            ScalarKind::Text => "text",
            ScalarKind::Integer => "integer",
            ScalarKind::Float => "number",
            ScalarKind::Flag => "flag",
            ScalarKind::Raw => "any value",
        }
    }
}

/// Declared type of a record field.
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    Scalar(ScalarKind),
    Record(&'static Schema),
    ListOf(&'static Schema),
}

/// One entry of a record schema.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Field name on the Rust side.
    pub name: &'static str,
    /// Key in the API payload (`#text`, `@attr`, ...).
    pub key: &'static str,
    pub ty: FieldType,
    pub required: bool,
}

impl Field {
    /// A required field read from the key of the same name.
    pub const fn required(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            key: name,
            ty,
            required: true,
        }
    }

    /// An optional field read from the key of the same name.
    pub const fn optional(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            key: name,
            ty,
            required: false,
        }
    }

    /// Read this field from a differently named payload key.
    pub const fn from_key(self, key: &'static str) -> Self {
        Self { key, ..self }
    }
}

/// Ordered field table of a record type.
#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Schema {
    /// Look up a field by its Rust-side name.
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

pub const TEXT: FieldType = FieldType::Scalar(ScalarKind::Text);
pub const INTEGER: FieldType = FieldType::Scalar(ScalarKind::Integer);
pub const FLOAT: FieldType = FieldType::Scalar(ScalarKind::Float);
pub const FLAG: FieldType = FieldType::Scalar(ScalarKind::Flag);
pub const RAW: FieldType = FieldType::Scalar(ScalarKind::Raw);

/// A record that can be bound from, and written back to, an API payload.
///
/// Binding is driven by [`Record::schema`]; writing back uses the record's
/// `Serialize` impl, whose renames mirror the schema keys.
pub trait Record: Serialize + Sized {
    /// Static schema of this record type.
    fn schema() -> &'static Schema;

    /// Build the record from fields already checked against [`Record::schema`].
    fn from_fields(fields: Fields) -> Result<Self>;

    /// Bind a JSON object into this record.
    fn bind(value: &Value) -> Result<Self> {
        let fields = converters::bind(value, Self::schema())?;
        Self::from_fields(fields)
    }

    /// Serialize back to a payload mapping, omitting absent fields.
    fn to_dict(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Album, Artist, Attributes, AuthSession, Chart, Image, Tag, Track, Wiki};
    use serde_json::json;

    static SAMPLE: Schema = Schema {
        name: "Sample",
        fields: &[
            Field::required("name", TEXT),
            Field::optional("text", TEXT).from_key("#text"),
        ],
    };

    #[test]
    fn test_field_constructors() {
        let field = Field::optional("attr", RAW).from_key("@attr");
        assert_eq!(field.name, "attr");
        assert_eq!(field.key, "@attr");
        assert!(!field.required);
        assert!(Field::required("name", TEXT).required);
    }

    #[test]
    fn test_schema_lookup() {
        assert_eq!(SAMPLE.field("text").map(|f| f.key), Some("#text"));
        assert!(SAMPLE.field("missing").is_none());
    }

    /// A payload filling every field of `schema` with a value of its type.
    fn full_payload(schema: &Schema) -> Value {
        let map = schema
            .fields
            .iter()
            .map(|field| {
                let value = match field.ty {
                    FieldType::Scalar(ScalarKind::Text) => json!("x"),
                    FieldType::Scalar(ScalarKind::Integer) => json!(7),
                    FieldType::Scalar(ScalarKind::Float) => json!(0.5),
                    FieldType::Scalar(ScalarKind::Flag) => json!(true),
                    FieldType::Scalar(ScalarKind::Raw) => json!({"fulltrack": "0"}),
                    FieldType::Record(nested) => full_payload(nested),
                    FieldType::ListOf(nested) => json!([full_payload(nested)]),
                };
                (field.key.to_string(), value)
            })
            .collect();
        Value::Object(map)
    }

    fn assert_keys_match_schema<R: Record>() {
        let payload = full_payload(R::schema());
        let record = R::bind(&payload).unwrap();
        assert_eq!(
            Value::Object(record.to_dict()),
            payload,
            "{} serializes with keys other than its schema's",
            R::schema().name
        );
    }

    #[test]
    fn test_serialized_keys_follow_schema() {
        assert_keys_match_schema::<Image>();
        assert_keys_match_schema::<Wiki>();
        assert_keys_match_schema::<Chart>();
        assert_keys_match_schema::<Attributes>();
        assert_keys_match_schema::<Tag>();
        assert_keys_match_schema::<Artist>();
        assert_keys_match_schema::<Track>();
        assert_keys_match_schema::<Album>();
        assert_keys_match_schema::<AuthSession>();
    }
}
