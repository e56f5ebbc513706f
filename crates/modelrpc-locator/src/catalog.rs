//! Explicit service catalog
//!
//! Replaces convention-driven dynamic loading with a registration table
//! built at start-up by a discovery step outside this crate. The
//! conventional path and attribute names survive as pure key-building
//! functions, so catalog keys stay deterministic and readable.

use crate::registrar::TransportServer;
use crate::{LocatorError, Result};
use modelrpc_registry::ServiceDescriptor;
use std::collections::HashMap;

/// Factory producing a fresh service descriptor per registration
pub type ServiceFactory = Box<dyn Fn() -> Box<dyn ServiceDescriptor> + Send + Sync>;

/// Generated "add servicer to server" binding
pub type BindingFn =
    Box<dyn Fn(Box<dyn ServiceDescriptor>, &dyn TransportServer) -> Result<()> + Send + Sync>;

/// Build the conventional module path for a model's service
///
/// With a service folder: `{app}.{folder}.{model_lowercase}_service`;
/// without one, all services share `{app}.services`.
pub fn service_module_path(
    app_name: &str,
    service_folder: Option<&str>,
    model_name: &str,
) -> String {
    match service_folder {
        Some(folder) => format!("{}.{}.{}_service", app_name, folder, model_name.to_lowercase()),
        None => format!("{app_name}.services"),
    }
}

/// Conventional service class name for a model
pub fn service_class_name(model_name: &str) -> String {
    format!("{model_name}Service")
}

/// Conventional module path of an app's generated transport bindings
pub fn binding_module_path(app_name: &str, grpc_folder: &str) -> String {
    format!("{app_name}.{grpc_folder}.{app_name}_grpc")
}

/// Conventional name of the generated "add servicer to server" function
pub fn binding_function_name(model_name: &str) -> String {
    format!("add_{model_name}ControllerServicer_to_server")
}

/// Registration table of service factories and transport bindings
///
/// Keyed by the same module-path/attribute convention the key-building
/// functions produce. A miss at the module level and a miss at the
/// attribute level are distinct, fatal lookup errors.
#[derive(Default)]
pub struct ServiceCatalog {
    modules: HashMap<String, CatalogModule>,
}

#[derive(Default)]
struct CatalogModule {
    services: HashMap<String, ServiceFactory>,
    bindings: HashMap<String, BindingFn>,
}

impl ServiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service factory under a module path and class name
    pub fn add_service(
        &mut self,
        module_path: impl Into<String>,
        class_name: impl Into<String>,
        factory: ServiceFactory,
    ) -> &mut Self {
        self.modules
            .entry(module_path.into())
            .or_default()
            .services
            .insert(class_name.into(), factory);
        self
    }

    /// Register a transport binding under a module path and function name
    pub fn add_binding(
        &mut self,
        module_path: impl Into<String>,
        function_name: impl Into<String>,
        binding: BindingFn,
    ) -> &mut Self {
        self.modules
            .entry(module_path.into())
            .or_default()
            .bindings
            .insert(function_name.into(), binding);
        self
    }

    /// Resolve a service factory by module path and class name
    pub fn service(&self, module_path: &str, class_name: &str) -> Result<&ServiceFactory> {
        let module = self
            .modules
            .get(module_path)
            .ok_or_else(|| LocatorError::UnresolvedServiceModule {
                path: module_path.to_string(),
            })?;
        module
            .services
            .get(class_name)
            .ok_or_else(|| LocatorError::UnresolvedServiceClass {
                path: module_path.to_string(),
                class: class_name.to_string(),
            })
    }

    /// Resolve a transport binding by module path and function name
    pub fn binding(&self, module_path: &str, function_name: &str) -> Result<&BindingFn> {
        let module = self
            .modules
            .get(module_path)
            .ok_or_else(|| LocatorError::UnresolvedServiceModule {
                path: module_path.to_string(),
            })?;
        module
            .bindings
            .get(function_name)
            .ok_or_else(|| LocatorError::UnresolvedBindingFunction {
                path: module_path.to_string(),
                function: function_name.to_string(),
            })
    }
}
