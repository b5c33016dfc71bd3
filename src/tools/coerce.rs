//! Coercion of arbitrary values into graph objects
//!
//! The target variant is resolved from the value's own type name first and the
//! caller's hint second. The new instance is filled from the value (extended
//! for list-like variants, assigned key by key otherwise) and then
//! force-cleaned, so the result always validates.

use serde_json::Value;
use tracing::debug;

use crate::graph_objs::{json_kind, GraphObjTrait, GraphObject, Registry};
use crate::{PlotkitError, Result};

/// Values that can be coerced into a graph object
pub trait Coercible {
    /// The value's own type name, used as the first resolution key
    fn type_name(&self) -> String;

    /// JSON content to copy into the resolved instance
    fn to_json(&self) -> Value;
}

impl Coercible for GraphObject {
    fn type_name(&self) -> String {
        self.obj_type().name().to_string()
    }

    fn to_json(&self) -> Value {
        self.to_value()
    }
}

impl Coercible for Value {
    /// Plain JSON is typed by its kind (`object`, `array`, ...), which never
    /// names a variant, so raw values always resolve through the hint.
    fn type_name(&self) -> String {
        json_kind(self).to_string()
    }

    fn to_json(&self) -> Value {
        self.clone()
    }
}

/// Resolves and populates graph objects against a fixed registry
#[derive(Debug, Clone, Copy)]
pub struct Coercer<'r> {
    registry: &'r Registry,
}

impl<'r> Coercer<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Coerce `obj` into a cleaned graph object
    ///
    /// # Errors
    ///
    /// - [`PlotkitError::TypeResolution`] if neither the object's type name
    ///   nor `obj_type` names a registered variant
    /// - [`PlotkitError::SchemaValidation`] if the content's shape does not fit
    ///   the resolved variant (a mapping for a list-like variant, a scalar, ...)
    pub fn coerce<C: Coercible + ?Sized>(
        &self,
        obj: &C,
        obj_type: Option<&str>,
    ) -> Result<GraphObject> {
        let own_type = obj.type_name().to_lowercase();
        let hint = obj_type.map(str::to_lowercase);

        let resolved = self
            .registry
            .resolve(&own_type)
            .or_else(|| hint.as_deref().and_then(|h| self.registry.resolve(h)))
            .ok_or_else(|| PlotkitError::TypeResolution {
                object_type: own_type.clone(),
                hint: hint.clone(),
            })?;

        debug!(
            own_type = %own_type,
            hint = ?hint,
            resolved = %resolved,
            "Resolved graph object variant"
        );

        let mut new_obj = resolved.empty();
        match obj.to_json() {
            Value::Array(items) => new_obj.extend(items)?,
            Value::Object(map) => {
                for (key, value) in map {
                    new_obj.assign(&key, value)?;
                }
            }
            other => {
                return Err(PlotkitError::SchemaValidation(format!(
                    "cannot coerce {} value into {}",
                    json_kind(&other),
                    resolved
                )))
            }
        }

        new_obj.clean();
        Ok(new_obj)
    }
}

/// Coerce `obj` into a cleaned graph object using the shared registry
///
/// See [`Coercer::coerce`].
pub fn get_valid_graph_obj<C: Coercible + ?Sized>(
    obj: &C,
    obj_type: Option<&str>,
) -> Result<GraphObject> {
    Coercer::new(Registry::global()).coerce(obj, obj_type)
}
