//! Serializer field introspection

use crate::types::FieldSpec;
use serde::{Deserialize, Serialize};

/// Conventional suffix stripped when deriving a message name
const SERIALIZER_SUFFIX: &str = "Serializer";

/// Introspected schema of one serializer
///
/// Field order is exactly the order the serializer exposes; the registry
/// must never sort or deduplicate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializerSchema {
    name: String,
    fields: Vec<FieldSpec>,
}

impl SerializerSchema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Serializer class name as declared (e.g. `WidgetSerializer`)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Message name derived from the serializer name, suffix stripped
    pub fn message_name(&self) -> &str {
        self.name
            .strip_suffix(SERIALIZER_SUFFIX)
            .unwrap_or(&self.name)
    }

    /// Ordered field list, verbatim
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Name-keyed field lookup
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
