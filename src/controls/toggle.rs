//! Switch bound to a boolean field.

use super::{ControlBinding, ControlInput, Role, Surface, UpdateRequest};
use crate::error::StyleResult;
use crate::models::{BoolField, StyleModel};

/// Binary switch. Each activation flips the field; there are no other states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleBinding {
    field: BoolField,
    label: String,
}

impl ToggleBinding {
    /// Card shadow switch.
    #[must_use]
    pub fn card_shadow() -> Self {
        Self {
            field: BoolField::CardShadow,
            label: "Shadow".to_string(),
        }
    }
}

impl ControlBinding for ToggleBinding {
    fn translate(
        &mut self,
        input: &ControlInput,
        _model: &StyleModel,
    ) -> StyleResult<Option<UpdateRequest>> {
        Ok(matches!(input, ControlInput::Activate).then_some(UpdateRequest::ToggleBool(self.field)))
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn surfaces(&self, model: &StyleModel) -> Vec<Surface> {
        vec![Surface::new(Role::Switch, self.label.as_str()).checked(model.flag(self.field))]
    }
}
