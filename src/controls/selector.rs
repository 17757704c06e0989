//! Enum selector: a row of buttons, one per declared variant.

use super::{ControlBinding, ControlInput, Role, Surface, UpdateRequest};
use crate::error::StyleResult;
use crate::models::{EnumField, StyleModel};

/// Selector bound to one enum field of the model.
///
/// Selection is absolute. Re-selecting the active variant still yields a
/// request so the preview re-renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSelector {
    field: EnumField,
    label: String,
}

impl EnumSelector {
    /// Selector for `field`.
    pub fn new(field: EnumField, label: impl Into<String>) -> Self {
        Self {
            field,
            label: label.into(),
        }
    }

    /// Card radius selector.
    #[must_use]
    pub fn card_radius() -> Self {
        Self::new(EnumField::CardRadius, "Radius")
    }

    /// Avatar shape selector.
    #[must_use]
    pub fn avatar_shape() -> Self {
        Self::new(EnumField::AvatarShape, "Avatar")
    }

    /// Bound field.
    #[must_use]
    pub const fn field(&self) -> EnumField {
        self.field
    }

    /// Variant `offset` positions away from the current one, stopping at the ends.
    fn neighbour(&self, model: &StyleModel, offset: isize) -> &'static str {
        let variants = self.field.variants();
        let current = model.variant(self.field);
        let index = variants.iter().position(|v| *v == current).unwrap_or(0);
        let target = index
            .saturating_add_signed(offset)
            .min(variants.len().saturating_sub(1));
        variants[target]
    }

    fn set(&self, variant: impl Into<String>) -> UpdateRequest {
        UpdateRequest::SetEnum {
            field: self.field,
            variant: variant.into(),
        }
    }
}

impl ControlBinding for EnumSelector {
    fn translate(
        &mut self,
        input: &ControlInput,
        model: &StyleModel,
    ) -> StyleResult<Option<UpdateRequest>> {
        let variants = self.field.variants();
        let request = match input {
            ControlInput::Select(name) => self.set(name.as_str()),
            ControlInput::Decrement | ControlInput::PageDecrement => {
                self.set(self.neighbour(model, -1))
            }
            ControlInput::Increment | ControlInput::PageIncrement => {
                self.set(self.neighbour(model, 1))
            }
            ControlInput::Home => self.set(variants[0]),
            ControlInput::End => self.set(variants[variants.len() - 1]),
            // Activating the group re-selects whatever is active
            ControlInput::Activate => self.set(model.variant(self.field)),
            ControlInput::Commit(_) => return Ok(None),
        };
        Ok(Some(request))
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn surfaces(&self, model: &StyleModel) -> Vec<Surface> {
        let active = model.variant(self.field);
        self.field
            .variants()
            .iter()
            .zip(self.field.labels())
            .map(|(name, title)| Surface::new(Role::Button, *title).checked(*name == active))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartialUpdate;

    fn set(field: EnumField, variant: &str) -> Option<UpdateRequest> {
        Some(UpdateRequest::SetEnum {
            field,
            variant: variant.to_string(),
        })
    }

    #[test]
    fn test_select_is_absolute() {
        let mut selector = EnumSelector::card_radius();
        let request = selector
            .translate(&ControlInput::Select("Pill".into()), &StyleModel::default())
            .unwrap();
        assert_eq!(request, set(EnumField::CardRadius, "Pill"));
    }

    #[test]
    fn test_step_stops_at_ends() {
        let mut selector = EnumSelector::card_radius();
        let square = StyleModel::default();
        assert_eq!(
            selector.translate(&ControlInput::Decrement, &square).unwrap(),
            set(EnumField::CardRadius, "square")
        );
        assert_eq!(
            selector.translate(&ControlInput::Increment, &square).unwrap(),
            set(EnumField::CardRadius, "rounded")
        );

        let pill = square
            .apply(&PartialUpdate::variant(EnumField::CardRadius, "pill"))
            .unwrap();
        assert_eq!(
            selector.translate(&ControlInput::Increment, &pill).unwrap(),
            set(EnumField::CardRadius, "pill")
        );
    }

    #[test]
    fn test_activate_reselects_current() {
        let mut selector = EnumSelector::avatar_shape();
        assert_eq!(
            selector
                .translate(&ControlInput::Activate, &StyleModel::default())
                .unwrap(),
            set(EnumField::AvatarShape, "circle")
        );
    }

    #[test]
    fn test_one_button_per_variant() {
        let selector = EnumSelector::card_radius();
        let surfaces = selector.surfaces(&StyleModel::default());
        let titles: Vec<_> = surfaces.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Square", "Rounded", "Pill"]);
        assert_eq!(surfaces[0].checked, Some(true));
        assert_eq!(surfaces[2].checked, Some(false));
        assert!(surfaces.iter().all(|s| s.role == Role::Button));
    }
}
