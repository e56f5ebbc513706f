//! Schema registry and message derivation for model-backed RPC services
//!
//! This crate holds the introspection core: services describe themselves
//! through the `ServiceDescriptor` trait, and the `SchemaRegistry` derives
//! the request/response message schemas that a protocol-definition
//! generator later turns into protocol text. No transport or dispatch
//! logic lives here; serving is composed separately via the same
//! descriptors.

pub mod methods;
pub mod registry;
pub mod serializer;
pub mod service;
pub mod settings;
pub mod types;

pub use methods::default_methods;
pub use registry::{AppSchemas, SchemaRegistry};
pub use serializer::SerializerSchema;
pub use service::ServiceDescriptor;
pub use settings::RegistrySettings;
pub use types::{Action, FieldKind, FieldSpec, MethodDescriptor, MethodIo};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("unsupported action '{action}', supported actions are: {supported}")]
    UnsupportedAction { action: String, supported: String },

    #[error("lookup field '{field}' does not exist in serializer '{serializer}'")]
    MissingLookupField { field: String, serializer: String },

    #[error("invalid registry settings: {0}")]
    InvalidSettings(String),
}

impl From<toml::de::Error> for RegistryError {
    fn from(err: toml::de::Error) -> Self {
        RegistryError::InvalidSettings(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
