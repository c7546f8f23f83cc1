//! Rule violations and engine failures

use std::fmt;

use serde::Serialize;

/// Coarse kind of the value a rule was evaluated against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    String,
    Int,
    Uint,
    Float,
    Bool,
    Option,
    Slice,
    Map,
    Struct,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::String => "string",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Bool => "bool",
            Kind::Option => "option",
            Kind::Slice => "slice",
            Kind::Map => "map",
            Kind::Struct => "struct",
        };
        f.write_str(name)
    }
}

/// A single rule violation reported by the engine
///
/// `namespace` is the full path of the field starting at the record type
/// (`User.address.street`, `User.tags[0]`), `struct_field` is the last
/// segment of `struct_namespace`. `field` equals `struct_field` unless the
/// engine reports labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    namespace: String,
    struct_namespace: String,
    field: String,
    struct_field: String,
    tag: String,
    param: String,
    kind: Kind,
}

impl FieldError {
    pub fn new(
        namespace: impl Into<String>,
        struct_namespace: impl Into<String>,
        field: impl Into<String>,
        struct_field: impl Into<String>,
        tag: impl Into<String>,
        param: impl Into<String>,
        kind: Kind,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            struct_namespace: struct_namespace.into(),
            field: field.into(),
            struct_field: struct_field.into(),
            tag: tag.into(),
            param: param.into(),
            kind,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn struct_namespace(&self) -> &str {
        &self.struct_namespace
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn struct_field(&self) -> &str {
        &self.struct_field
    }

    /// Name of the rule that failed
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Key: '{}' Error:Field validation for '{}' failed on the '{}' tag",
            self.namespace, self.field, self.tag
        )
    }
}

/// Ordered violations for one evaluation, in the order fields were visited
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buff = String::new();
        for error in &self.0 {
            buff.push_str(&error.to_string());
            buff.push('\n');
        }
        f.write_str(buff.trim_end())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Everything the engine can return instead of success
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// One or more fields failed their rules
    #[error("{0}")]
    Violations(ValidationErrors),

    #[error("validation cancelled")]
    Cancelled,

    #[error("validation deadline exceeded")]
    DeadlineExceeded,

    /// A rule is declared with a parameter the engine cannot use
    #[error("invalid rule '{rule}' on '{namespace}': {reason}")]
    InvalidRule {
        namespace: String,
        rule: String,
        reason: String,
    },
}

impl EngineError {
    pub fn is_violations(&self) -> bool {
        matches!(self, EngineError::Violations(_))
    }
}
