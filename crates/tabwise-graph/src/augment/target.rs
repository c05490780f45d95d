//! Target function descriptors.

use tabwise_core::SemanticType;

/// A declared parameter of a target function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    ty: SemanticType,
}

impl Parameter {
    /// Creates a parameter declaration.
    pub fn new(name: impl Into<String>, ty: SemanticType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Returns the parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared semantic type.
    pub fn ty(&self) -> SemanticType {
        self.ty
    }
}

/// Statically declared signature of the function being augmented.
///
/// Stands in for runtime type-hint extraction: parameter names and their
/// semantic types are declared where the function is registered with the
/// host graph.
#[derive(Debug, Clone)]
pub struct TargetFunction {
    name: String,
    params: Vec<Parameter>,
}

impl TargetFunction {
    /// Creates a signature with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Appends a declared parameter.
    pub fn with_parameter(mut self, name: impl Into<String>, ty: SemanticType) -> Self {
        self.params.push(Parameter::new(name, ty));
        self
    }

    /// Returns the function name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared parameters in order.
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// Returns the declared type of a parameter, if it exists.
    pub fn param_type(&self, name: &str) -> Option<SemanticType> {
        self.params
            .iter()
            .find(|param| param.name() == name)
            .map(Parameter::ty)
    }
}
