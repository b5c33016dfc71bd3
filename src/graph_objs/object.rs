//! Graph object instances
//!
//! A graph object is either dict-like ([`PlotlyDict`]) or list-like
//! ([`PlotlyList`]). Both implement [`GraphObjTrait`], the capability interface
//! used by the figure builders and the coercer: field assignment, extension of
//! list-like objects, force-cleaning and validation.
//!
//! Nested children are stored as plain JSON and interpreted through the parent
//! variant's field table, so a `Layout` holding `{"xaxis1": {...}}` validates
//! and cleans its axis as an `XAxis`.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::types::{FieldKind, ItemKind, ObjShape, ObjType};
use crate::{PlotkitError, Result};

/// Slack allowed on domain bounds for accumulated float error
const DOMAIN_TOLERANCE: f64 = 1e-9;

/// Capabilities shared by every graph object variant
pub trait GraphObjTrait {
    /// Which variant this instance is
    fn obj_type(&self) -> ObjType;

    /// Set `key` to `value`
    ///
    /// Keys are not checked here; unknown keys are rejected by
    /// [`validate`](GraphObjTrait::validate) and removed by
    /// [`clean`](GraphObjTrait::clean).
    fn assign(&mut self, key: &str, value: Value) -> Result<()> {
        let _ = value;
        Err(PlotkitError::SchemaValidation(format!(
            "{} is list-like, cannot assign key '{}'",
            self.obj_type(),
            key
        )))
    }

    /// Append `items` in order
    fn extend(&mut self, items: Vec<Value>) -> Result<()> {
        let _ = items;
        Err(PlotkitError::SchemaValidation(format!(
            "{} is not list-like, cannot extend it with items",
            self.obj_type()
        )))
    }

    /// Force-clean: drop unknown keys, nulls, invalid domains and empty
    /// containers, recursively. Cleaning twice changes nothing.
    fn clean(&mut self);

    /// Check every key and nested object against the schema
    fn validate(&self) -> Result<()>;

    /// JSON form of this object
    fn to_value(&self) -> Value;
}

/// Dict-like graph object
#[derive(Debug, Clone, PartialEq)]
pub struct PlotlyDict {
    obj_type: ObjType,
    fields: Map<String, Value>,
}

impl PlotlyDict {
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl GraphObjTrait for PlotlyDict {
    fn obj_type(&self) -> ObjType {
        self.obj_type
    }

    fn assign(&mut self, key: &str, value: Value) -> Result<()> {
        self.fields.insert(key.to_string(), value);
        Ok(())
    }

    fn clean(&mut self) {
        let fields = std::mem::take(&mut self.fields);
        self.fields = clean_map(self.obj_type, fields);
    }

    fn validate(&self) -> Result<()> {
        validate_map(self.obj_type, &self.fields, self.obj_type.name())
    }

    fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// List-like graph object
#[derive(Debug, Clone, PartialEq)]
pub struct PlotlyList {
    obj_type: ObjType,
    item_kind: ItemKind,
    items: Vec<Value>,
}

impl PlotlyList {
    pub fn items(&self) -> &[Value] {
        &self.items
    }
}

impl GraphObjTrait for PlotlyList {
    fn obj_type(&self) -> ObjType {
        self.obj_type
    }

    fn extend(&mut self, items: Vec<Value>) -> Result<()> {
        self.items.extend(items);
        Ok(())
    }

    fn clean(&mut self) {
        let items = std::mem::take(&mut self.items);
        self.items = clean_items(self.item_kind, items);
    }

    fn validate(&self) -> Result<()> {
        validate_items(self.item_kind, &self.items, self.obj_type.name())
    }

    fn to_value(&self) -> Value {
        Value::Array(self.items.clone())
    }
}

/// A graph object of any variant
#[derive(Debug, Clone, PartialEq)]
pub enum GraphObject {
    Dict(PlotlyDict),
    List(PlotlyList),
}

impl ObjType {
    /// A new, empty instance of this variant
    pub fn empty(self) -> GraphObject {
        match self.shape() {
            ObjShape::Dict(_) => GraphObject::Dict(PlotlyDict {
                obj_type: self,
                fields: Map::new(),
            }),
            ObjShape::List(item_kind) => GraphObject::List(PlotlyList {
                obj_type: self,
                item_kind,
                items: Vec::new(),
            }),
        }
    }
}

impl GraphObject {
    /// Construct a graph object of `obj_type` from `value` and validate it
    ///
    /// This is how figures are built: the whole structure is checked once,
    /// and any unrecognized field or out-of-range domain fails construction.
    pub fn new(obj_type: ObjType, value: Value) -> Result<Self> {
        let mut obj = obj_type.empty();
        match (&mut obj, value) {
            (GraphObject::Dict(dict), Value::Object(map)) => dict.fields = map,
            (GraphObject::List(list), Value::Array(items)) => list.items = items,
            (_, other) => return Err(shape_mismatch(obj_type, &other, obj_type.name())),
        }
        obj.validate()?;
        Ok(obj)
    }

    /// Value of a field on a dict-like object
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            GraphObject::Dict(dict) => dict.fields.get(key),
            GraphObject::List(_) => None,
        }
    }

    /// Fields of a dict-like object
    pub fn fields(&self) -> Option<&Map<String, Value>> {
        match self {
            GraphObject::Dict(dict) => Some(dict.fields()),
            GraphObject::List(_) => None,
        }
    }

    /// Items of a list-like object
    pub fn items(&self) -> Option<&[Value]> {
        match self {
            GraphObject::Dict(_) => None,
            GraphObject::List(list) => Some(list.items()),
        }
    }

    /// Number of fields or items
    pub fn len(&self) -> usize {
        match self {
            GraphObject::Dict(dict) => dict.fields.len(),
            GraphObject::List(list) => list.items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_value(self) -> Value {
        match self {
            GraphObject::Dict(dict) => Value::Object(dict.fields),
            GraphObject::List(list) => Value::Array(list.items),
        }
    }
}

impl GraphObjTrait for GraphObject {
    fn obj_type(&self) -> ObjType {
        match self {
            GraphObject::Dict(dict) => dict.obj_type(),
            GraphObject::List(list) => list.obj_type(),
        }
    }

    fn assign(&mut self, key: &str, value: Value) -> Result<()> {
        match self {
            GraphObject::Dict(dict) => dict.assign(key, value),
            GraphObject::List(list) => list.assign(key, value),
        }
    }

    fn extend(&mut self, items: Vec<Value>) -> Result<()> {
        match self {
            GraphObject::Dict(dict) => dict.extend(items),
            GraphObject::List(list) => list.extend(items),
        }
    }

    fn clean(&mut self) {
        match self {
            GraphObject::Dict(dict) => dict.clean(),
            GraphObject::List(list) => list.clean(),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            GraphObject::Dict(dict) => dict.validate(),
            GraphObject::List(list) => list.validate(),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            GraphObject::Dict(dict) => dict.to_value(),
            GraphObject::List(list) => list.to_value(),
        }
    }
}

impl Serialize for GraphObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            GraphObject::Dict(dict) => dict.fields.serialize(serializer),
            GraphObject::List(list) => list.items.serialize(serializer),
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Name of a JSON value's kind (`"object"`, `"array"`, ...)
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn shape_mismatch(obj_type: ObjType, value: &Value, path: &str) -> PlotkitError {
    let expected = if obj_type.is_list_like() {
        "an array"
    } else {
        "an object"
    };
    PlotkitError::SchemaValidation(format!(
        "{} must be {} for {}, found {}",
        path,
        expected,
        obj_type,
        json_kind(value)
    ))
}

/// Check an axis domain: two numbers with `0 <= start < end <= 1`
pub(crate) fn check_domain(value: &Value) -> std::result::Result<(f64, f64), String> {
    let bounds = value
        .as_array()
        .filter(|arr| arr.len() == 2)
        .and_then(|arr| Some((arr[0].as_f64()?, arr[1].as_f64()?)))
        .ok_or_else(|| format!("domain must be a pair of numbers, found {}", value))?;

    let (start, end) = bounds;
    if start < -DOMAIN_TOLERANCE || end > 1.0 + DOMAIN_TOLERANCE {
        return Err(format!("domain [{}, {}] lies outside [0, 1]", start, end));
    }
    if start >= end {
        return Err(format!("domain [{}, {}] is empty or reversed", start, end));
    }
    Ok(bounds)
}

/// Resolve the variant of a trace from its `type` field (scatter when absent)
fn trace_type(map: &Map<String, Value>) -> std::result::Result<ObjType, String> {
    match map.get("type") {
        None | Some(Value::Null) => Ok(ObjType::Scatter),
        Some(Value::String(name)) => ObjType::from_name(name)
            .filter(|t| t.is_trace())
            .ok_or_else(|| format!("'{}' is not a trace type", name)),
        Some(other) => Err(format!("trace type must be a string, found {}", other)),
    }
}

fn validate_json(obj_type: ObjType, value: &Value, path: &str) -> Result<()> {
    match (obj_type.shape(), value) {
        (ObjShape::Dict(_), Value::Object(map)) => validate_map(obj_type, map, path),
        (ObjShape::List(item_kind), Value::Array(items)) => validate_items(item_kind, items, path),
        _ => Err(shape_mismatch(obj_type, value, path)),
    }
}

fn validate_map(obj_type: ObjType, map: &Map<String, Value>, path: &str) -> Result<()> {
    for (key, value) in map {
        let kind = obj_type.field_kind(key).ok_or_else(|| {
            PlotkitError::SchemaValidation(format!(
                "'{}' is not a valid key for {} (at {})",
                key, obj_type, path
            ))
        })?;
        if value.is_null() {
            continue;
        }
        let child = format!("{}.{}", path, key);
        match kind {
            FieldKind::Value => {}
            FieldKind::Domain => {
                check_domain(value).map_err(|msg| {
                    PlotkitError::SchemaValidation(format!("{}: {}", child, msg))
                })?;
            }
            FieldKind::Object(nested) => validate_json(nested, value, &child)?,
        }
    }
    Ok(())
}

fn validate_items(item_kind: ItemKind, items: &[Value], path: &str) -> Result<()> {
    for (idx, item) in items.iter().enumerate() {
        let child = format!("{}[{}]", path, idx);
        match item_kind {
            ItemKind::Trace => {
                let map = item.as_object().ok_or_else(|| {
                    PlotkitError::SchemaValidation(format!(
                        "{} must be a trace object, found {}",
                        child,
                        json_kind(item)
                    ))
                })?;
                let trace = trace_type(map).map_err(|msg| {
                    PlotkitError::SchemaValidation(format!("{}: {}", child, msg))
                })?;
                validate_map(trace, map, &child)?;
            }
            ItemKind::Object(obj_type) => validate_json(obj_type, item, &child)?,
        }
    }
    Ok(())
}

// ============================================================================
// Force-cleaning
// ============================================================================

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(arr) => arr.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn clean_field(kind: FieldKind, value: Value) -> Option<Value> {
    match kind {
        FieldKind::Value => (!is_empty_value(&value)).then_some(value),
        FieldKind::Domain => check_domain(&value).ok().map(|_| value),
        FieldKind::Object(obj_type) => clean_json(obj_type, value),
    }
}

fn clean_json(obj_type: ObjType, value: Value) -> Option<Value> {
    let cleaned = match (obj_type.shape(), value) {
        (ObjShape::Dict(_), Value::Object(map)) => Value::Object(clean_map(obj_type, map)),
        (ObjShape::List(item_kind), Value::Array(items)) => {
            Value::Array(clean_items(item_kind, items))
        }
        _ => return None,
    };
    (!is_empty_value(&cleaned)).then_some(cleaned)
}

fn clean_map(obj_type: ObjType, map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .filter_map(|(key, value)| {
            let kind = obj_type.field_kind(&key)?;
            clean_field(kind, value).map(|value| (key, value))
        })
        .collect()
}

fn clean_items(item_kind: ItemKind, items: Vec<Value>) -> Vec<Value> {
    items
        .into_iter()
        .filter_map(|item| match item_kind {
            ItemKind::Trace => {
                let Value::Object(map) = item else {
                    return None;
                };
                let trace = trace_type(&map).ok()?;
                let cleaned = clean_map(trace, map);
                (!cleaned.is_empty()).then_some(Value::Object(cleaned))
            }
            ItemKind::Object(obj_type) => clean_json(obj_type, item),
        })
        .collect()
}
