use super::FormFields;

/// Result of submitting one step of a form flow.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome<T> {
    /// The step passed; carries what the next page shows.
    Proceed(T),
    /// The step must be shown again with `errors`.
    Rejected {
        errors: Vec<String>,
        form: FormFields,
    },
}

impl<T> StepOutcome<T> {
    pub fn is_rejected(&self) -> bool {
        matches!(self, StepOutcome::Rejected { .. })
    }
}
