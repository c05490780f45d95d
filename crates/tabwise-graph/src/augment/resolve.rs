//! Injection-parameter resolution.

use tabwise_core::SemanticType;

use super::target::TargetFunction;
use crate::error::{GraphError, GraphResult};

/// Determines which parameter of the target receives the table.
///
/// With `on_input`, the named parameter is used and must exist on the
/// target. Otherwise the target must declare exactly one table-typed
/// parameter; zero or several candidates fail rather than silently picking
/// the first.
pub(crate) fn resolve_inject_parameter(
    target: &TargetFunction,
    on_input: Option<&str>,
    table_type: SemanticType,
) -> GraphResult<String> {
    if let Some(name) = on_input {
        if target.param_type(name).is_none() {
            return Err(GraphError::Configuration(format!(
                "on_input parameter {name} does not exist on {}",
                target.name()
            )));
        }
        return Ok(name.to_string());
    }

    let candidates: Vec<&str> = target
        .params()
        .iter()
        .filter(|param| param.ty() == table_type)
        .map(|param| param.name())
        .collect();

    match candidates.as_slice() {
        [] => Err(GraphError::Configuration(format!(
            "{} has no parameter of table type {table_type}",
            target.name()
        ))),
        [single] => Ok((*single).to_string()),
        _ => Err(GraphError::Configuration(format!(
            "{} has multiple parameters of table type {table_type} ({}); set on_input to disambiguate",
            target.name(),
            candidates.join(", ")
        ))),
    }
}

/// Confirms the resolved parameter is declared with the table type.
pub(crate) fn validate_parameter_type(
    target: &TargetFunction,
    parameter: &str,
    table_type: SemanticType,
) -> GraphResult<()> {
    let actual = target.param_type(parameter).ok_or_else(|| {
        GraphError::Configuration(format!(
            "parameter {parameter} does not exist on {}",
            target.name()
        ))
    })?;
    if actual != table_type {
        return Err(GraphError::TypeMismatch {
            parameter: parameter.to_string(),
            expected: table_type,
            actual,
        });
    }
    Ok(())
}
