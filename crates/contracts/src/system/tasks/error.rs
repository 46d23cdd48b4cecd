use super::validation::FieldErrors;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task form has {} invalid field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("no task form is open")]
    NoOpenForm,
}

impl TaskError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            TaskError::Validation(errors) => Some(errors),
            TaskError::NoOpenForm => None,
        }
    }
}
