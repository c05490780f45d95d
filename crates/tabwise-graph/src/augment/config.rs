//! Augmentation options.

use std::sync::Arc;

use derive_builder::Builder;
use strum::AsRefStr;
use tabwise_core::{CapabilityRegistry, SemanticType};

use crate::error::{GraphError, GraphResult};
use crate::op::OperationSource;

/// Behavior when neither `columns_to_pass` nor `on_input` is configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ImplicitTableInputs {
    /// Extract nothing; operations take their inputs from the host graph
    /// directly.
    #[default]
    Allow,
    /// Reject the configuration instead of assuming anything.
    Deny,
}

/// Options for augmenting a table-returning function with a column
/// pipeline.
///
/// Built once per decorated function and immutable afterwards.
/// [`WithColumns::plan`](crate::augment::WithColumns::plan) consumes these
/// options together with a target signature and produces the node set
/// handed to the host graph engine.
#[derive(Debug, Clone, Builder)]
#[builder(
    name = "WithColumnsBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(validate = "Self::validate", error = "GraphError")
)]
pub struct WithColumns {
    /// Operations and operation groups forming the internal pipeline.
    #[builder(default, setter(each(name = "with_operation", into)))]
    pub(crate) operations: Vec<OperationSource>,
    /// Semantic type of the table being augmented.
    pub(crate) table_type: SemanticType,
    /// Capability registry used to resolve the table's column type.
    pub(crate) registry: Arc<CapabilityRegistry>,
    /// Columns to extract from the table as standalone pipeline inputs.
    /// Mutually exclusive with `on_input`.
    #[builder(default)]
    pub(crate) columns_to_pass: Option<Vec<String>>,
    /// Name of a table parameter already available to the pipeline; the
    /// caller is then responsible for extracting columns.
    #[builder(default)]
    pub(crate) on_input: Option<String>,
    /// Alternate-name table passing. Not supported for this table model;
    /// rejected at build time.
    #[builder(default)]
    pub(crate) pass_table_as: Option<String>,
    /// Output columns to reattach. Defaults to every generated node whose
    /// declared type is the column type.
    #[builder(default)]
    pub(crate) select: Option<Vec<String>>,
    /// Prefix applied to every node name except the injection parameter.
    #[builder(default)]
    pub(crate) namespace: Option<String>,
    /// Restricts which configuration keys the operations may see during
    /// resolution.
    #[builder(default)]
    pub(crate) config_required: Option<Vec<String>>,
    /// Behavior when neither `columns_to_pass` nor `on_input` is given.
    #[builder(default)]
    pub(crate) implicit_inputs: ImplicitTableInputs,
}

impl WithColumns {
    /// Returns a builder for augmentation options.
    pub fn builder() -> WithColumnsBuilder {
        WithColumnsBuilder::default()
    }

    /// Re-checks the option invariants.
    ///
    /// The same checks run at build time; every validate and plan entry
    /// point repeats them so they hold regardless of entry path.
    pub(crate) fn validate_options(&self) -> GraphResult<()> {
        if self.pass_table_as.is_some() {
            return Err(GraphError::UnsupportedConfiguration(
                "pass_table_as is not supported for table augmentation".into(),
            ));
        }
        if self.columns_to_pass.is_some() && self.on_input.is_some() {
            return Err(GraphError::Configuration(
                "columns_to_pass and on_input are mutually exclusive".into(),
            ));
        }
        if self.columns_to_pass.is_none()
            && self.on_input.is_none()
            && self.implicit_inputs == ImplicitTableInputs::Deny
        {
            return Err(GraphError::Configuration(
                "no columns_to_pass or on_input given and implicit table inputs are denied".into(),
            ));
        }
        Ok(())
    }
}

impl WithColumnsBuilder {
    fn validate(&self) -> Result<(), GraphError> {
        if matches!(&self.pass_table_as, Some(Some(_))) {
            return Err(GraphError::UnsupportedConfiguration(
                "pass_table_as is not supported for table augmentation".into(),
            ));
        }
        let has_columns = matches!(&self.columns_to_pass, Some(Some(_)));
        let has_on_input = matches!(&self.on_input, Some(Some(_)));
        if has_columns && has_on_input {
            return Err(GraphError::Configuration(
                "columns_to_pass and on_input are mutually exclusive".into(),
            ));
        }
        if !has_columns
            && !has_on_input
            && matches!(self.implicit_inputs, Some(ImplicitTableInputs::Deny))
        {
            return Err(GraphError::Configuration(
                "no columns_to_pass or on_input given and implicit table inputs are denied".into(),
            ));
        }
        Ok(())
    }
}
