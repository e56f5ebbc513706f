//! Per-application registration driver

use crate::catalog::{
    binding_function_name, binding_module_path, service_class_name, service_module_path,
    ServiceCatalog,
};
use crate::Result;
use log::{debug, info};
use modelrpc_registry::SchemaRegistry;

/// Opaque handle to a live transport server
///
/// The registrar never calls into the server itself; generated bindings
/// receive it together with a servicer instance and wire the two up.
pub trait TransportServer: Send + Sync {}

/// Default subfolder holding one service module per model
pub const DEFAULT_SERVICE_FOLDER: &str = "services";

/// Default subfolder holding generated transport bindings
pub const DEFAULT_GRPC_FOLDER: &str = "grpc";

/// Registration driver for one application namespace
///
/// Without a server the registrar runs introspection-only: resolved
/// services are fed into the schema registry. With a server bound it
/// instead resolves the generated binding and attaches a servicer; the
/// registry is not touched on that path.
pub struct AppServiceRegistrar<'a> {
    app_name: String,
    service_folder: Option<String>,
    grpc_folder: String,
    catalog: &'a ServiceCatalog,
    server: Option<&'a dyn TransportServer>,
}

impl<'a> AppServiceRegistrar<'a> {
    pub fn new(app_name: impl Into<String>, catalog: &'a ServiceCatalog) -> Self {
        Self {
            app_name: app_name.into(),
            service_folder: Some(DEFAULT_SERVICE_FOLDER.to_string()),
            grpc_folder: DEFAULT_GRPC_FOLDER.to_string(),
            catalog,
            server: None,
        }
    }

    /// Override the service subfolder; `None` collapses every service
    /// into the app's shared services module
    pub fn with_service_folder(mut self, folder: Option<&str>) -> Self {
        self.service_folder = folder.map(str::to_string);
        self
    }

    pub fn with_grpc_folder(mut self, folder: &str) -> Self {
        self.grpc_folder = folder.to_string();
        self
    }

    /// Bind a transport server, switching the registrar to serving mode
    pub fn with_server(mut self, server: &'a dyn TransportServer) -> Self {
        self.server = Some(server);
        self
    }

    /// Resolve a model's service and register it
    ///
    /// Introspection-only mode derives schemas into `registry`; serving
    /// mode attaches a servicer to the bound server instead.
    pub fn register(&self, registry: &mut SchemaRegistry, model_name: &str) -> Result<()> {
        let module = service_module_path(&self.app_name, self.service_folder.as_deref(), model_name);
        let class = service_class_name(model_name);
        debug!("Resolving service {}.{}", module, class);
        let factory = self.catalog.service(&module, &class)?;

        match self.server {
            None => {
                info!("Introspecting service {} (app: {})", class, self.app_name);
                let service = factory();
                registry.register_service(service.as_ref())?;
            }
            Some(server) => {
                let binding_module = binding_module_path(&self.app_name, &self.grpc_folder);
                let function = binding_function_name(model_name);
                debug!("Resolving binding {}.{}", binding_module, function);
                let binding = self.catalog.binding(&binding_module, &function)?;

                info!("Binding servicer {} to transport server", class);
                binding(factory(), server)?;
            }
        }

        Ok(())
    }
}
