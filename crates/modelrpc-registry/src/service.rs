//! Service descriptor abstraction

use crate::serializer::SerializerSchema;
use crate::types::Action;

/// Introspection interface a service exposes to the registry
///
/// Implementations wrap a concrete service and its bound model. The
/// registry only reads through this trait; it never mutates the service.
pub trait ServiceDescriptor {
    /// Name of the bound model (e.g. `Widget`)
    fn model_name(&self) -> &str;

    /// Owning application namespace of the bound model
    fn app_label(&self) -> &str;

    /// Whether the service exposes a capability for this action
    fn supports(&self, action: Action) -> bool;

    /// Resolve the serializer schema for this action
    ///
    /// Called fresh for every action during registration; a service may
    /// vary its serializer by action.
    fn serializer_for(&self, action: Action) -> SerializerSchema;

    /// Explicit pagination class, if the service configures one
    fn pagination_class(&self) -> Option<&str> {
        None
    }

    /// Field identifying a single resource instance for Retrieve/Destroy
    fn lookup_field(&self) -> &str {
        "id"
    }
}
