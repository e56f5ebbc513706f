//! Catalog-driven registration, both modes

use modelrpc_locator::{
    service_class_name, service_module_path, AppServiceRegistrar, LocatorError, ServiceCatalog,
    TransportServer,
};
use modelrpc_registry::{
    Action, FieldKind, FieldSpec, RegistrySettings, SchemaRegistry, SerializerSchema,
    ServiceDescriptor,
};

struct WidgetService;

impl ServiceDescriptor for WidgetService {
    fn model_name(&self) -> &str {
        "Widget"
    }

    fn app_label(&self) -> &str {
        "inventory"
    }

    fn supports(&self, action: Action) -> bool {
        matches!(action, Action::List | Action::Create | Action::Retrieve)
    }

    fn serializer_for(&self, _action: Action) -> SerializerSchema {
        SerializerSchema::new(
            "WidgetSerializer",
            vec![
                FieldSpec::new("id", FieldKind::Int32),
                FieldSpec::new("name", FieldKind::String),
            ],
        )
    }
}

struct NullServer;

impl TransportServer for NullServer {}

fn catalog_with_widget() -> ServiceCatalog {
    let mut catalog = ServiceCatalog::new();
    catalog.add_service(
        service_module_path("inventory", Some("services"), "Widget"),
        service_class_name("Widget"),
        Box::new(|| Box::new(WidgetService)),
    );
    catalog
}

#[test]
fn introspection_mode_round_trip() {
    let catalog = catalog_with_widget();
    let registrar = AppServiceRegistrar::new("inventory", &catalog);
    let mut registry = SchemaRegistry::new(RegistrySettings::default());

    registrar.register(&mut registry, "Widget").unwrap();

    let app = registry.app("inventory").unwrap();
    let controller = app.controller("WidgetController").unwrap();
    assert_eq!(controller.len(), 3);
    assert!(app.message("WidgetRetrieveRequest").is_some());
}

#[test]
fn registration_errors_name_the_expected_key() {
    let catalog = catalog_with_widget();
    let registrar = AppServiceRegistrar::new("inventory", &catalog);
    let mut registry = SchemaRegistry::new(RegistrySettings::default());

    let err = registrar.register(&mut registry, "Gadget").unwrap_err();
    assert!(err.to_string().contains("inventory.services.gadget_service"));
}

#[test]
fn class_miss_is_distinct_from_module_miss() {
    let mut catalog = ServiceCatalog::new();
    // Module exists, class does not
    catalog.add_service(
        "inventory.services.widget_service",
        "LegacyWidgetService",
        Box::new(|| Box::new(WidgetService)),
    );

    let registrar = AppServiceRegistrar::new("inventory", &catalog);
    let mut registry = SchemaRegistry::new(RegistrySettings::default());

    let err = registrar.register(&mut registry, "Widget").unwrap_err();
    assert!(matches!(err, LocatorError::UnresolvedServiceClass { .. }));
}

#[test]
fn serving_mode_does_not_touch_registry() {
    let mut catalog = catalog_with_widget();
    catalog.add_binding(
        "inventory.grpc.inventory_grpc",
        "add_WidgetControllerServicer_to_server",
        Box::new(|_service: Box<dyn ServiceDescriptor>, _server: &dyn TransportServer| Ok(())),
    );

    let server = NullServer;
    let registrar = AppServiceRegistrar::new("inventory", &catalog).with_server(&server);
    let mut registry = SchemaRegistry::new(RegistrySettings::default());

    registrar.register(&mut registry, "Widget").unwrap();
    assert!(registry.apps().is_empty());
}

#[test]
fn binding_failure_surfaces_as_binding_error() {
    let mut catalog = catalog_with_widget();
    catalog.add_binding(
        "inventory.grpc.inventory_grpc",
        "add_WidgetControllerServicer_to_server",
        Box::new(|_service: Box<dyn ServiceDescriptor>, _server: &dyn TransportServer| {
            Err(LocatorError::Binding("port already bound".to_string()))
        }),
    );

    let server = NullServer;
    let registrar = AppServiceRegistrar::new("inventory", &catalog).with_server(&server);
    let mut registry = SchemaRegistry::new(RegistrySettings::default());

    let err = registrar.register(&mut registry, "Widget").unwrap_err();
    assert!(matches!(err, LocatorError::Binding(_)));
}
