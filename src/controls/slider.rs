//! Range slider bound to the card opacity.

use super::{ControlBinding, ControlInput, Role, Surface, UpdateRequest};
use crate::error::StyleResult;
use crate::models::{StyleModel, OPACITY_MAX, OPACITY_MIN};

/// Default opacity step per key press.
pub const DEFAULT_STEP: f64 = 0.1;
/// Default number of steps per page key.
pub const DEFAULT_PAGE_MULTIPLIER: u8 = 10;

/// Slider that turns step inputs into opacity deltas.
///
/// The model does the clamping, so a decrement at 0.0 still produces a
/// request; applying it is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderBinding {
    label: String,
    step: f64,
    page_multiplier: u8,
}

impl SliderBinding {
    /// Opacity slider with the given step.
    ///
    /// Non-positive or non-finite steps fall back to [`DEFAULT_STEP`].
    pub fn opacity(step: f64, page_multiplier: u8) -> Self {
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            DEFAULT_STEP
        };
        Self {
            label: "Opacity".to_string(),
            step,
            page_multiplier: page_multiplier.max(1),
        }
    }

    /// Step size.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    fn page(&self) -> f64 {
        self.step * f64::from(self.page_multiplier)
    }
}

impl Default for SliderBinding {
    fn default() -> Self {
        Self::opacity(DEFAULT_STEP, DEFAULT_PAGE_MULTIPLIER)
    }
}

impl ControlBinding for SliderBinding {
    fn translate(
        &mut self,
        input: &ControlInput,
        _model: &StyleModel,
    ) -> StyleResult<Option<UpdateRequest>> {
        let request = match input {
            ControlInput::Decrement => UpdateRequest::OpacityDelta(-self.step),
            ControlInput::Increment => UpdateRequest::OpacityDelta(self.step),
            ControlInput::PageDecrement => UpdateRequest::OpacityDelta(-self.page()),
            ControlInput::PageIncrement => UpdateRequest::OpacityDelta(self.page()),
            ControlInput::Home => UpdateRequest::SetOpacity(OPACITY_MIN),
            ControlInput::End => UpdateRequest::SetOpacity(OPACITY_MAX),
            ControlInput::Activate | ControlInput::Select(_) | ControlInput::Commit(_) => {
                return Ok(None)
            }
        };
        Ok(Some(request))
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn surfaces(&self, model: &StyleModel) -> Vec<Surface> {
        vec![Surface::new(Role::Slider, self.label.as_str())
            .value_text(format!("{} {}%", self.label, model.opacity_percent()))]
    }
}
