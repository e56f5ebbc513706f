//! Core types for schema registration

use crate::RegistryError;
use serde::{Deserialize, Serialize};

/// Remote-call action a service may support
///
/// Closed set; `ALL` fixes the iteration order used when building a
/// controller's method set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    List,
    Create,
    Retrieve,
    Update,
    PartialUpdate,
    Destroy,
    Stream,
}

impl Action {
    /// Every known action, in registration order
    pub const ALL: [Action; 7] = [
        Action::List,
        Action::Create,
        Action::Retrieve,
        Action::Update,
        Action::PartialUpdate,
        Action::Destroy,
        Action::Stream,
    ];

    /// Actions whose request/response reuse the bare serializer message
    pub const NO_CUSTOM_MESSAGE: [Action; 3] =
        [Action::Create, Action::Update, Action::PartialUpdate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::List => "List",
            Action::Create => "Create",
            Action::Retrieve => "Retrieve",
            Action::Update => "Update",
            Action::PartialUpdate => "PartialUpdate",
            Action::Destroy => "Destroy",
            Action::Stream => "Stream",
        }
    }

    /// Render the supported set for error messages
    pub fn supported_list() -> String {
        let names: Vec<&str> = Action::ALL.iter().map(|a| a.as_str()).collect();
        names.join(", ")
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "List" => Ok(Action::List),
            "Create" => Ok(Action::Create),
            "Retrieve" => Ok(Action::Retrieve),
            "Update" => Ok(Action::Update),
            "PartialUpdate" => Ok(Action::PartialUpdate),
            "Destroy" => Ok(Action::Destroy),
            "Stream" => Ok(Action::Stream),
            _ => Err(RegistryError::UnsupportedAction {
                action: s.to_string(),
                supported: Action::supported_list(),
            }),
        }
    }
}

/// Protocol kind of a single message field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Bool,
    Int32,
    Int64,
    UInt64,
    Float,
    Double,
    String,
    Bytes,
    /// Reference to another message by name
    Message(String),
    /// Repeated reference to another message by name
    Repeated(String),
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Bool => write!(f, "bool"),
            FieldKind::Int32 => write!(f, "int32"),
            FieldKind::Int64 => write!(f, "int64"),
            FieldKind::UInt64 => write!(f, "uint64"),
            FieldKind::Float => write!(f, "float"),
            FieldKind::Double => write!(f, "double"),
            FieldKind::String => write!(f, "string"),
            FieldKind::Bytes => write!(f, "bytes"),
            FieldKind::Message(name) => write!(f, "{}", name),
            FieldKind::Repeated(name) => write!(f, "repeated {}", name),
        }
    }
}

/// One ordered field of a message schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Request or response side of a registered method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodIo {
    /// Whether this side is streamed
    pub stream: bool,
    /// Message name carried on this side
    pub message: String,
}

impl MethodIo {
    pub fn unary(message: impl Into<String>) -> Self {
        Self {
            stream: false,
            message: message.into(),
        }
    }

    pub fn streamed(message: impl Into<String>) -> Self {
        Self {
            stream: true,
            message: message.into(),
        }
    }
}

/// Opaque registration metadata for one controller method
///
/// Supplied once by the default-method table and consumed by the
/// downstream generator; the registry never reintrospects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub request: MethodIo,
    pub response: MethodIo,
}
