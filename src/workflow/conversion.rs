use super::definition::WorkflowDefinition;
use crate::error::WorkflowConversionError;

/// A trait for custom caller formats that can be converted into an orogen
/// [`WorkflowDefinition`].
///
/// This is the extension point for keeping the compiler format-agnostic. By
/// implementing this trait on your own request structs you provide the
/// translation layer from whatever shape your front-end or template library
/// produces into the canonical workflow model.
///
/// # Example
///
/// ```rust
/// use orogen::workflow::{
///     ConnectionDefinition, IntoWorkflow, WorkflowDefinition, WorkflowNodeDefinition,
/// };
/// use orogen::error::WorkflowConversionError;
///
/// struct TemplateStep {
///     step_id: i64,
///     kind: String,
/// }
///
/// struct Template {
///     steps: Vec<TemplateStep>,
/// }
///
/// impl IntoWorkflow for Template {
///     fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError> {
///         let nodes = self
///             .steps
///             .into_iter()
///             .map(|step| WorkflowNodeDefinition::new(step.step_id, step.kind))
///             .collect();
///         Ok(WorkflowDefinition {
///             nodes,
///             connections: vec![],
///         })
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a compilable workflow.
    fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError>;
}

impl IntoWorkflow for WorkflowDefinition {
    fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError> {
        Ok(self)
    }
}
