//! Schema registry implementation

use crate::methods::default_methods;
use crate::serializer::SerializerSchema;
use crate::service::ServiceDescriptor;
use crate::settings::RegistrySettings;
use crate::types::{Action, FieldKind, FieldSpec, MethodDescriptor};
use crate::{RegistryError, Result};
use indexmap::IndexMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Schemas registered under one application namespace
///
/// Both mappings are insertion-ordered; the generator walks them in the
/// order services registered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSchemas {
    /// Controller name -> action -> registered method
    controllers: IndexMap<String, IndexMap<Action, MethodDescriptor>>,

    /// Message name -> ordered field list
    messages: IndexMap<String, Vec<FieldSpec>>,
}

impl AppSchemas {
    /// Controllers mapping consumed by the generator
    pub fn controllers(&self) -> &IndexMap<String, IndexMap<Action, MethodDescriptor>> {
        &self.controllers
    }

    /// Messages mapping consumed by the generator
    pub fn messages(&self) -> &IndexMap<String, Vec<FieldSpec>> {
        &self.messages
    }

    /// Methods registered for one controller
    pub fn controller(&self, name: &str) -> Option<&IndexMap<Action, MethodDescriptor>> {
        self.controllers.get(name)
    }

    /// Ordered field list of one message
    pub fn message(&self, name: &str) -> Option<&[FieldSpec]> {
        self.messages.get(name).map(|fields| fields.as_slice())
    }

    /// Register the bare serializer message, first-writer-wins
    fn insert_base_message(&mut self, serializer: &SerializerSchema) {
        let name = serializer.message_name();
        if !self.messages.contains_key(name) {
            debug!(
                "Registered message '{}' ({} fields)",
                name,
                serializer.fields().len()
            );
            self.messages
                .insert(name.to_string(), serializer.fields().to_vec());
        }
    }

    /// Register a per-controller message, overwriting any previous entry
    fn insert_message(&mut self, name: String, fields: Vec<FieldSpec>) {
        debug!("Registered message '{}' ({} fields)", name, fields.len());
        self.messages.insert(name, fields);
    }
}

/// Registry of controllers and message schemas, grouped by application
///
/// One instance is constructed at start-up and threaded through every
/// registration call; there is no global state. Registration is
/// synchronous and expected to run sequentially before serving begins.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    settings: RegistrySettings,
    apps: IndexMap<String, AppSchemas>,
}

impl SchemaRegistry {
    pub fn new(settings: RegistrySettings) -> Self {
        info!(
            "Initializing schema registry (default pagination: {:?})",
            settings.default_pagination_class
        );
        Self {
            settings,
            apps: IndexMap::new(),
        }
    }

    /// Register a service and derive its controller methods and messages
    ///
    /// For every action the service supports, installs the default method
    /// descriptor and derives the corresponding message schemas. Actions
    /// already present on the controller are skipped entirely, method and
    /// messages both, so a manual registration made beforehand suppresses
    /// the default derivation.
    pub fn register_service(&mut self, service: &dyn ServiceDescriptor) -> Result<()> {
        let app_name = service.app_label().to_string();
        let model_name = service.model_name().to_string();
        let controller_name = format!("{model_name}Controller");

        info!(
            "Registering service (app: {}, model: {}, controller: {})",
            app_name, model_name, controller_name
        );

        // A service with an explicit pagination class is paginated; one
        // without falls back to the process-wide default.
        let pagination_active = service.pagination_class().is_some()
            || self.settings.default_pagination_class.is_some();

        let defaults = default_methods(&model_name);

        let app = self.apps.entry(app_name).or_default();
        app.controllers.entry(controller_name.clone()).or_default();

        for action in Action::ALL {
            if !service.supports(action) {
                continue;
            }

            let controller = app.controllers.entry(controller_name.clone()).or_default();
            if controller.contains_key(&action) {
                debug!(
                    "Method {} already registered for {}, keeping existing entry",
                    action, controller_name
                );
                continue;
            }

            let descriptor =
                defaults
                    .get(&action)
                    .cloned()
                    .ok_or_else(|| RegistryError::UnsupportedAction {
                        action: action.to_string(),
                        supported: Action::supported_list(),
                    })?;
            controller.insert(action, descriptor);

            // Serializer resolution is per-action: a service may return a
            // different serializer depending on the action.
            let serializer = service.serializer_for(action);

            match action {
                Action::Create | Action::Update | Action::PartialUpdate => {
                    app.insert_base_message(&serializer);
                }
                Action::List => {
                    let message_name = serializer.message_name().to_string();
                    let mut response_fields = vec![FieldSpec::new(
                        "results",
                        FieldKind::Repeated(message_name.clone()),
                    )];
                    if pagination_active {
                        response_fields.push(FieldSpec::new("count", FieldKind::Int32));
                    }
                    app.insert_message(format!("{message_name}ListRequest"), Vec::new());
                    app.insert_message(format!("{message_name}ListResponse"), response_fields);
                    app.insert_base_message(&serializer);
                }
                Action::Retrieve => {
                    let field = lookup_field_spec(service, &serializer, None)?;
                    app.insert_message(
                        format!("{}RetrieveRequest", serializer.message_name()),
                        vec![field],
                    );
                    app.insert_base_message(&serializer);
                }
                Action::Destroy => {
                    let field = lookup_field_spec(service, &serializer, None)?;
                    app.insert_message(
                        format!("{}DestroyRequest", serializer.message_name()),
                        vec![field],
                    );
                }
                Action::Stream => {
                    app.insert_message(
                        format!("{}StreamRequest", serializer.message_name()),
                        Vec::new(),
                    );
                }
            }
        }

        Ok(())
    }

    /// Manually register a method for a controller, ahead of default
    /// derivation
    ///
    /// A method registered here wins: a later `register_service` will not
    /// overwrite it and will not derive default messages for its action.
    pub fn register_custom_method(
        &mut self,
        app_name: &str,
        controller_name: &str,
        action: Action,
        descriptor: MethodDescriptor,
    ) {
        info!(
            "Registering custom method {} for {} (app: {})",
            action, controller_name, app_name
        );
        let app = self.apps.entry(app_name.to_string()).or_default();
        app.controllers
            .entry(controller_name.to_string())
            .or_default()
            .insert(action, descriptor);
    }

    /// Schemas of one application namespace
    pub fn app(&self, name: &str) -> Option<&AppSchemas> {
        self.apps.get(name)
    }

    /// All registered application namespaces, in registration order
    pub fn apps(&self) -> &IndexMap<String, AppSchemas> {
        &self.apps
    }

    pub fn settings(&self) -> &RegistrySettings {
        &self.settings
    }

    /// Drop all registered schemas; intended for test isolation only
    pub fn reset(&mut self) {
        info!("Resetting schema registry ({} apps)", self.apps.len());
        self.apps.clear();
    }
}

/// Resolve the lookup field used by Retrieve/Destroy requests
///
/// Falls back to the service's configured lookup field when no explicit
/// override is given. The field must exist in the serializer's field set.
fn lookup_field_spec(
    service: &dyn ServiceDescriptor,
    serializer: &SerializerSchema,
    override_name: Option<&str>,
) -> Result<FieldSpec> {
    let name = override_name.unwrap_or_else(|| service.lookup_field());
    serializer
        .field(name)
        .cloned()
        .ok_or_else(|| RegistryError::MissingLookupField {
            field: name.to_string(),
            serializer: serializer.name().to_string(),
        })
}
