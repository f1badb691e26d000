//! Pure transitions of the support request form.
//!
//! Every function takes the current [`FormState`] by reference and either
//! produces a new state or reports that the input does not apply in the
//! current phase. Nothing here schedules work or touches the UI; see
//! [`crate::controller`] for the part that owns the state over time.

use crate::error::FormError;
use crate::models::{FieldKey, FormFields, SubmissionReceipt, SubmissionState};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct FormState {
    pub fields: FormFields,
    pub submission: SubmissionState,
    pub receipt: Option<SubmissionReceipt>,
}

impl FormState {
    pub fn is_idle(&self) -> bool {
        self.submission == SubmissionState::Idle
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.submission == SubmissionState::Submitted
    }
}

/// Outcome of a transition that is allowed to be a no-op.
#[derive(Clone, PartialEq, Debug)]
pub enum Transition {
    Applied(FormState),
    Ignored,
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }
}

pub fn apply_field_edit(
    state: &FormState,
    field_name: &str,
    raw_value: &str,
) -> Result<Transition, FormError> {
    let field: FieldKey = field_name.parse()?;
    if !state.submission.is_editable() {
        return Ok(Transition::Ignored);
    }

    Ok(Transition::Applied(FormState {
        fields: state.fields.with_field(field, raw_value)?,
        ..state.clone()
    }))
}

pub fn apply_submit(state: &FormState) -> Result<Transition, FormError> {
    if !state.is_idle() {
        return Ok(Transition::Ignored);
    }

    let missing = state.fields.missing_required();
    if !missing.is_empty() {
        return Err(FormError::Validation { missing });
    }

    Ok(Transition::Applied(FormState {
        submission: SubmissionState::Submitting,
        ..state.clone()
    }))
}

/// Completion signal of an accepted submit. Anything but `Submitting` treats it as stale.
pub fn apply_completion(state: &FormState, receipt: SubmissionReceipt) -> Transition {
    if !state.is_submitting() {
        return Transition::Ignored;
    }

    Transition::Applied(FormState {
        fields: state.fields.clone(),
        submission: SubmissionState::Submitted,
        receipt: Some(receipt),
    })
}
