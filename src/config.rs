//! Layout configuration, loaded once at startup.
//!
//! Every field is optional; anything unset falls back to the original
//! defaults (icon size 40, padding 8, spacing 16, white palette with black
//! icon shadows). Config files are TOML:
//!
//! ```toml
//! icon_size = 48.0
//! padding = 4.0
//! spacing = 4.0
//!
//! [icon_background]
//! r = 1.0
//! g = 0.45
//! b = 0.2
//! a = 1.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::style::{BarStyle, Color};

/// Optional layout overrides for the bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BarConfig {
    /// Side length of a (square) icon slot.
    pub icon_size: Option<f32>,
    /// Padding between the bar edge and the icon row.
    pub padding: Option<f32>,
    /// Horizontal gap between adjacent slots.
    pub spacing: Option<f32>,
    /// Fill color of the pill path.
    pub shape_fill: Option<Color>,
    /// Background color of an active icon.
    pub icon_background: Option<Color>,
    /// Shadow color behind each icon.
    pub icon_shadow: Option<Color>,
    /// Background color of the bar body.
    pub bar_background: Option<Color>,
}

/// Fully-resolved layout constants, defaults substituted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedConfig {
    /// Side length of a (square) icon slot.
    pub icon_size: f32,
    /// Padding between the bar edge and the icon row.
    pub padding: f32,
    /// Horizontal gap between adjacent slots.
    pub spacing: f32,
    /// The bar's palette.
    pub style: BarStyle,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            icon_size: BarConfig::DEFAULT_ICON_SIZE,
            padding: BarConfig::DEFAULT_PADDING,
            spacing: BarConfig::DEFAULT_SPACING,
            style: BarStyle::default(),
        }
    }
}

impl BarConfig {
    /// Default icon slot size.
    pub const DEFAULT_ICON_SIZE: f32 = 40.0;
    /// Default bar padding.
    pub const DEFAULT_PADDING: f32 = 8.0;
    /// Default slot spacing.
    pub const DEFAULT_SPACING: f32 = 16.0;

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid
    /// TOML for this schema, or contains out-of-range values.
    pub fn from_toml(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Substitutes defaults for every unset field.
    #[must_use]
    pub fn resolve(&self) -> ResolvedConfig {
        let defaults = BarStyle::default();
        ResolvedConfig {
            icon_size: self.icon_size.unwrap_or(Self::DEFAULT_ICON_SIZE),
            padding: self.padding.unwrap_or(Self::DEFAULT_PADDING),
            spacing: self.spacing.unwrap_or(Self::DEFAULT_SPACING),
            style: BarStyle {
                shape_fill: self.shape_fill.unwrap_or(defaults.shape_fill),
                icon_background: self.icon_background.unwrap_or(defaults.icon_background),
                icon_shadow: self.icon_shadow.unwrap_or(defaults.icon_shadow),
                bar_background: self.bar_background.unwrap_or(defaults.bar_background),
            },
        }
    }

    /// Checks every set field for sanity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for non-positive sizes, negative spacing, or
    /// color components outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |field, value: Option<f32>| match value {
            Some(v) if v <= 0.0 => Err(ConfigError::InvalidValue { field, value: v }),
            _ => Ok(()),
        };
        positive("icon_size", self.icon_size)?;
        positive("padding", self.padding)?;
        if let Some(spacing) = self.spacing {
            if spacing < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "spacing",
                    value: spacing,
                });
            }
        }

        let valid_color = |field, value: Option<Color>| match value {
            Some(c) if !c.is_valid() => Err(ConfigError::InvalidColor { field }),
            _ => Ok(()),
        };
        valid_color("shape_fill", self.shape_fill)?;
        valid_color("icon_background", self.icon_background)?;
        valid_color("icon_shadow", self.icon_shadow)?;
        valid_color("bar_background", self.bar_background)?;
        Ok(())
    }
}
