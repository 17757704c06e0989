//! Color picker adapter: a visible proxy swatch stacked over a hidden native
//! color input.
//!
//! The proxy carries no color-selection capability of its own. Clicking it
//! forwards exactly one activation to the native input, which is always in the
//! render tree but fully transparent and excluded from tab traversal.

use super::{ControlBinding, ControlInput, Role, Surface, UpdateRequest};
use crate::error::{StyleError, StyleResult};
use crate::models::{ColorField, RgbColor, StyleModel};

/// Opacity of the native input. Always zero.
pub const NATIVE_INPUT_OPACITY: f64 = 0.0;
/// Tab index of the native input. Always negative.
pub const NATIVE_INPUT_TAB_INDEX: i32 = -1;

/// Diameter preset of the proxy swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProxySize {
    /// 28px
    Sm,
    /// 32px
    #[default]
    Md,
    /// 40px
    Lg,
}

impl ProxySize {
    /// Diameter in pixels.
    #[must_use]
    pub const fn diameter_px(self) -> u16 {
        match self {
            Self::Sm => 28,
            Self::Md => 32,
            Self::Lg => 40,
        }
    }
}

/// Native color input beneath the proxy.
///
/// Opacity and tab index are not fields: they are fixed for every instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeColorInput {
    value: RgbColor,
    activations: u32,
}

impl NativeColorInput {
    fn new(value: RgbColor) -> Self {
        Self {
            value,
            activations: 0,
        }
    }

    /// Rendered opacity.
    #[must_use]
    pub const fn opacity(&self) -> f64 {
        NATIVE_INPUT_OPACITY
    }

    /// Sequential focus index.
    #[must_use]
    pub const fn tab_index(&self) -> i32 {
        NATIVE_INPUT_TAB_INDEX
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> RgbColor {
        self.value
    }

    /// Number of activation events this input has received.
    #[must_use]
    pub const fn activation_count(&self) -> u32 {
        self.activations
    }

    /// Fires the input's activation event (opens the platform color dialog).
    fn activate(&mut self) {
        self.activations = self.activations.saturating_add(1);
    }

    fn surface(&self, title: &str) -> Surface {
        Surface {
            role: Role::ColorInput,
            title: format!("{title} (native)"),
            tab_index: NATIVE_INPUT_TAB_INDEX,
            opacity: NATIVE_INPUT_OPACITY,
            checked: None,
            value_text: Some(self.value.to_hex()),
        }
    }
}

/// Result of clicking the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyActivation {
    /// Field whose picker was opened
    pub field: ColorField,
    /// Value the native input opened with
    pub current: RgbColor,
}

/// Proxy + native pair bound to one color field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPickerAdapter {
    field: ColorField,
    label: String,
    size: ProxySize,
    fill: RgbColor,
    native: NativeColorInput,
}

impl ColorPickerAdapter {
    /// Adapter for `field`, initialised from `model`.
    pub fn new(field: ColorField, label: impl Into<String>, model: &StyleModel) -> Self {
        let color = model.color(field);
        Self {
            field,
            label: label.into(),
            size: ProxySize::default(),
            fill: color,
            native: NativeColorInput::new(color),
        }
    }

    /// Sets the proxy size preset.
    #[must_use]
    pub const fn with_size(mut self, size: ProxySize) -> Self {
        self.size = size;
        self
    }

    /// Bound field.
    #[must_use]
    pub const fn field(&self) -> ColorField {
        self.field
    }

    /// Proxy size preset.
    #[must_use]
    pub const fn size(&self) -> ProxySize {
        self.size
    }

    /// Color currently painted on the proxy.
    #[must_use]
    pub const fn fill(&self) -> RgbColor {
        self.fill
    }

    /// The hidden native input.
    #[must_use]
    pub const fn native(&self) -> &NativeColorInput {
        &self.native
    }

    /// Pointer click on the proxy: forwards exactly one activation to the
    /// native input. Does not touch the model.
    pub fn click_proxy(&mut self) -> ProxyActivation {
        self.native.activate();
        tracing::debug!(field = %self.field, "color proxy forwarded activation");
        ProxyActivation {
            field: self.field,
            current: self.native.value,
        }
    }

    /// Value committed from the native input as a hex string.
    ///
    /// # Errors
    ///
    /// [`StyleError::InvalidColor`] if the string is not `#RRGGBB`.
    pub fn commit_hex(&self, hex: &str) -> StyleResult<UpdateRequest> {
        let color = RgbColor::from_hex(hex)
            .map_err(|e| StyleError::invalid_color(self.field, format!("{e:#}")))?;
        Ok(self.commit_color(color))
    }

    /// Value committed from the native input as raw channels.
    ///
    /// # Errors
    ///
    /// [`StyleError::InvalidColor`] if any channel is outside 0-255.
    pub fn commit_channels(&self, channels: [i64; 3]) -> StyleResult<UpdateRequest> {
        let color = RgbColor::try_from_channels(channels)
            .map_err(|e| StyleError::invalid_color(self.field, format!("{e:#}")))?;
        Ok(self.commit_color(color))
    }

    fn commit_color(&self, color: RgbColor) -> UpdateRequest {
        UpdateRequest::SetColor {
            field: self.field,
            channels: color.channels(),
        }
    }

    /// Mirrors the bound model color onto the proxy fill and native value.
    pub fn sync(&mut self, model: &StyleModel) {
        let color = model.color(self.field);
        self.fill = color;
        self.native.value = color;
    }
}

impl ControlBinding for ColorPickerAdapter {
    fn translate(
        &mut self,
        input: &ControlInput,
        _model: &StyleModel,
    ) -> StyleResult<Option<UpdateRequest>> {
        match input {
            ControlInput::Activate => {
                self.click_proxy();
                Ok(None)
            }
            ControlInput::Commit(hex) => self.commit_hex(hex).map(Some),
            _ => Ok(None),
        }
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn surfaces(&self, _model: &StyleModel) -> Vec<Surface> {
        vec![
            Surface::new(Role::ColorProxy, self.label.as_str()).value_text(self.fill.to_hex()),
            self.native.surface(&self.label),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartialUpdate;

    fn adapter() -> ColorPickerAdapter {
        ColorPickerAdapter::new(ColorField::Theme, "Theme", &StyleModel::default())
    }

    #[test]
    fn test_click_forwards_exactly_once() {
        let mut picker = adapter();
        assert_eq!(picker.native().activation_count(), 0);
        let activation = picker.click_proxy();
        assert_eq!(activation.field, ColorField::Theme);
        assert_eq!(picker.native().activation_count(), 1);
        picker.click_proxy();
        assert_eq!(picker.native().activation_count(), 2);
    }

    #[test]
    fn test_activate_input_clicks_proxy_without_request() {
        let mut picker = adapter();
        let request = picker
            .translate(&ControlInput::Activate, &StyleModel::default())
            .unwrap();
        assert_eq!(request, None);
        assert_eq!(picker.native().activation_count(), 1);
    }

    #[test]
    fn test_native_input_hidden_and_untabbable() {
        let picker = adapter().with_size(ProxySize::Lg);
        assert_eq!(picker.native().opacity(), 0.0);
        assert_eq!(picker.native().tab_index(), -1);

        let surfaces = picker.surfaces(&StyleModel::default());
        let native = surfaces
            .iter()
            .find(|s| s.role == Role::ColorInput)
            .unwrap();
        assert!(!native.is_tabbable());
        assert_eq!(native.opacity, 0.0);
        let proxy = surfaces
            .iter()
            .find(|s| s.role == Role::ColorProxy)
            .unwrap();
        assert!(proxy.is_tabbable());
        assert_eq!(picker.size().diameter_px(), 40);
    }

    #[test]
    fn test_commit_hex() {
        let mut picker = adapter();
        let request = picker
            .translate(&ControlInput::Commit("#3366ff".into()), &StyleModel::default())
            .unwrap();
        assert_eq!(
            request,
            Some(UpdateRequest::SetColor {
                field: ColorField::Theme,
                channels: [0x33, 0x66, 0xFF],
            })
        );
    }

    #[test]
    fn test_commit_rejects_bad_values() {
        let picker = adapter();
        assert!(matches!(
            picker.commit_hex("blue"),
            Err(StyleError::InvalidColor {
                field: ColorField::Theme,
                ..
            })
        ));
        assert!(picker.commit_channels([0, 0, 300]).is_err());
        assert!(picker.commit_channels([0, -5, 0]).is_err());
    }

    #[test]
    fn test_sync_follows_model() {
        let mut picker = adapter();
        let model = StyleModel::default()
            .apply(&PartialUpdate::color(
                ColorField::Theme,
                RgbColor::new(1, 2, 3).into(),
            ))
            .unwrap();
        picker.sync(&model);
        assert_eq!(picker.fill(), RgbColor::new(1, 2, 3));
        assert_eq!(picker.native().value(), RgbColor::new(1, 2, 3));
    }
}
