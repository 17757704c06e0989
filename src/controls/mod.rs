//! Control bindings: translate discrete UI input into style update requests.
//!
//! Each binding owns one kind of control (slider, enum selector, toggle, color
//! picker). A binding never writes the model itself; it derives an
//! [`UpdateRequest`] which the editor controller applies.

pub mod color_picker;
pub mod selector;
pub mod slider;
pub mod toggle;

pub use color_picker::{ColorPickerAdapter, NativeColorInput, ProxySize};
pub use selector::EnumSelector;
pub use slider::SliderBinding;
pub use toggle::ToggleBinding;

use crate::error::StyleResult;
use crate::models::{BoolField, ColorField, EnumField, StyleModel};

/// Discrete input delivered to a focused control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlInput {
    /// One step down (ArrowLeft / ArrowDown)
    Decrement,
    /// One step up (ArrowRight / ArrowUp)
    Increment,
    /// One page down (PageDown)
    PageDecrement,
    /// One page up (PageUp)
    PageIncrement,
    /// Jump to the minimum
    Home,
    /// Jump to the maximum
    End,
    /// Click / Enter / Space
    Activate,
    /// Pick a named option
    Select(String),
    /// Committed value from a native color input (`#RRGGBB`)
    Commit(String),
}

/// Closed set of model mutations, handled by a single dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateRequest {
    /// Relative opacity change
    OpacityDelta(f64),
    /// Absolute opacity
    SetOpacity(f64),
    /// Absolute enum selection by variant name
    SetEnum {
        /// Target field
        field: EnumField,
        /// Variant name as received
        variant: String,
    },
    /// Flip a boolean field
    ToggleBool(BoolField),
    /// Absolute color by channel
    SetColor {
        /// Target field
        field: ColorField,
        /// Raw channels, validated by the model
        channels: [i64; 3],
    },
}

/// Accessibility role of a rendered control element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Range slider
    Slider,
    /// Binary switch
    Switch,
    /// Push button (enum selector options)
    Button,
    /// Visible color swatch that forwards to the native input
    ColorProxy,
    /// Native color input
    ColorInput,
}

/// Descriptor of one element in the control render tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// Element role
    pub role: Role,
    /// Title / accessible name
    pub title: String,
    /// Sequential focus index; negative means excluded from tab traversal
    pub tab_index: i32,
    /// Rendered opacity of the element itself
    pub opacity: f64,
    /// Checked / pressed state, when the role has one
    pub checked: Option<bool>,
    /// Human-readable value, when the role has one
    pub value_text: Option<String>,
}

impl Surface {
    /// Creates a fully opaque, tabbable surface.
    pub fn new(role: Role, title: impl Into<String>) -> Self {
        Self {
            role,
            title: title.into(),
            tab_index: 0,
            opacity: 1.0,
            checked: None,
            value_text: None,
        }
    }

    /// Sets the checked / pressed state.
    #[must_use]
    pub const fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Sets the value text.
    #[must_use]
    pub fn value_text(mut self, text: impl Into<String>) -> Self {
        self.value_text = Some(text.into());
        self
    }

    /// Whether tab traversal can reach this element.
    #[must_use]
    pub const fn is_tabbable(&self) -> bool {
        self.tab_index >= 0
    }
}

/// A control that translates input into update requests.
pub trait ControlBinding {
    /// Translate one input against the current model.
    ///
    /// Returns `Ok(None)` when the input means nothing to this control, so no
    /// state transition should happen.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the input carries a value the control
    /// refuses (e.g. a malformed committed color).
    fn translate(
        &mut self,
        input: &ControlInput,
        model: &StyleModel,
    ) -> StyleResult<Option<UpdateRequest>>;

    /// Label shown next to the control.
    fn label(&self) -> &str;

    /// Elements this control contributes to the render tree.
    fn surfaces(&self, model: &StyleModel) -> Vec<Surface>;
}
