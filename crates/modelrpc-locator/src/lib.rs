//! Service catalog and registration driver
//!
//! Resolves model names to concrete service implementations through an
//! explicit catalog built at start-up, then either feeds them into the
//! schema registry (introspection-only mode) or binds them to a live
//! transport server (serving mode). The two modes are independent; they
//! compose only through the same service factories.

pub mod catalog;
pub mod registrar;

pub use catalog::{
    binding_function_name, binding_module_path, service_class_name, service_module_path,
    BindingFn, ServiceCatalog, ServiceFactory,
};
pub use registrar::{AppServiceRegistrar, TransportServer};

#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    #[error("no service module registered for path '{path}'")]
    UnresolvedServiceModule { path: String },

    #[error("no service class '{class}' registered in module '{path}'")]
    UnresolvedServiceClass { path: String, class: String },

    #[error("no binding function '{function}' registered in module '{path}'")]
    UnresolvedBindingFunction { path: String, function: String },

    #[error("transport binding failed: {0}")]
    Binding(String),

    #[error(transparent)]
    Registry(#[from] modelrpc_registry::RegistryError),
}

pub type Result<T> = std::result::Result<T, LocatorError>;
