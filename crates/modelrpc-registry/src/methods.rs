//! Default method table
//!
//! Conventional registration metadata for every known action, keyed by
//! model name. The registry installs these descriptors verbatim; the
//! downstream generator consumes them when emitting service definitions.

use crate::types::{Action, MethodDescriptor, MethodIo};
use indexmap::IndexMap;

/// Well-known empty message used where a response carries no body
pub const EMPTY_MESSAGE: &str = "google.protobuf.Empty";

/// Build the default method descriptors for a model
///
/// Covers every action in `Action::ALL`; message names follow the same
/// conventions the derivation pipeline uses for request/response schemas.
pub fn default_methods(model_name: &str) -> IndexMap<Action, MethodDescriptor> {
    let mut methods = IndexMap::new();

    methods.insert(
        Action::List,
        MethodDescriptor {
            request: MethodIo::unary(format!("{model_name}ListRequest")),
            response: MethodIo::unary(format!("{model_name}ListResponse")),
        },
    );
    methods.insert(
        Action::Create,
        MethodDescriptor {
            request: MethodIo::unary(model_name),
            response: MethodIo::unary(model_name),
        },
    );
    methods.insert(
        Action::Retrieve,
        MethodDescriptor {
            request: MethodIo::unary(format!("{model_name}RetrieveRequest")),
            response: MethodIo::unary(model_name),
        },
    );
    methods.insert(
        Action::Update,
        MethodDescriptor {
            request: MethodIo::unary(model_name),
            response: MethodIo::unary(model_name),
        },
    );
    methods.insert(
        Action::PartialUpdate,
        MethodDescriptor {
            request: MethodIo::unary(model_name),
            response: MethodIo::unary(model_name),
        },
    );
    methods.insert(
        Action::Destroy,
        MethodDescriptor {
            request: MethodIo::unary(format!("{model_name}DestroyRequest")),
            response: MethodIo::unary(EMPTY_MESSAGE),
        },
    );
    methods.insert(
        Action::Stream,
        MethodDescriptor {
            request: MethodIo::unary(format!("{model_name}StreamRequest")),
            response: MethodIo::streamed(model_name),
        },
    );

    methods
}
