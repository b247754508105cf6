//! Tooltip configuration documents.

use crate::error::ConfigError;
use retip_core::{
    normalize_offset, Alignment, Color, DimensionConstraint, PartialOffset, TooltipProps,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

/// One tooltip as written in a config file.
///
/// Colors stay as strings until [`TooltipConfig::to_props`] so that a bad
/// value is reported with its field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    /// Side of the anchor (top, bottom, left, right)
    #[serde(default)]
    pub alignment: Alignment,
    /// Panel fill color
    #[serde(default = "default_background_color")]
    pub background_color: String,
    /// Shadow base color
    #[serde(default = "default_shadow_color")]
    pub shadow_color: String,
    /// Milliseconds between pointer leave and hide
    #[serde(default)]
    pub hide_delay: u64,
    /// Force visible
    #[serde(default)]
    pub is_active: bool,
    /// Block container
    #[serde(default)]
    pub is_block: bool,
    /// "none", pixels, or a CSS length
    #[serde(default)]
    pub max_height: DimensionConstraint,
    /// "none", pixels, or a CSS length
    #[serde(default)]
    pub max_width: DimensionConstraint,
    /// Partial pixel nudge
    #[serde(default)]
    pub offset: Option<PartialOffset>,
    /// Body content
    #[serde(default)]
    pub message: String,
}

fn default_background_color() -> String {
    "#1d1d1d".to_string()
}

fn default_shadow_color() -> String {
    "#d5d5d5".to_string()
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            alignment: Alignment::default(),
            background_color: default_background_color(),
            shadow_color: default_shadow_color(),
            hide_delay: 0,
            is_active: false,
            is_block: false,
            max_height: DimensionConstraint::None,
            max_width: DimensionConstraint::None,
            offset: None,
            message: String::new(),
        }
    }
}

impl TooltipConfig {
    /// Parse a single tooltip from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse a single tooltip from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check values that the type system lets through.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.message.trim().is_empty() {
            return Err(ConfigError::MissingField("message".to_string()));
        }
        validate_dimension("max_height", &self.max_height)?;
        validate_dimension("max_width", &self.max_width)?;

        if let Some(offset) = &self.offset {
            let sides = [offset.top, offset.left, offset.right, offset.bottom];
            if sides.iter().flatten().any(|v| !v.is_finite()) {
                return Err(ConfigError::InvalidValue {
                    field: "offset".to_string(),
                    message: "must be finite".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Validate and convert into runtime props.
    pub fn to_props(&self) -> Result<TooltipProps, ConfigError> {
        self.validate()?;

        Ok(TooltipProps {
            alignment: self.alignment,
            background_color: parse_color("background_color", &self.background_color)?,
            shadow_color: parse_color("shadow_color", &self.shadow_color)?,
            hide_delay: Duration::from_millis(self.hide_delay),
            is_active: self.is_active,
            is_block: self.is_block,
            max_height: self.max_height.clone(),
            max_width: self.max_width.clone(),
            offset: normalize_offset(self.offset),
            message: self.message.clone(),
        })
    }
}

fn validate_dimension(field: &str, constraint: &DimensionConstraint) -> Result<(), ConfigError> {
    let message = match constraint {
        DimensionConstraint::Pixels(px) if !px.is_finite() => "must be finite",
        DimensionConstraint::Css(len) if len.trim().is_empty() => "must not be empty",
        _ => return Ok(()),
    };
    Err(ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    })
}

fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    value.parse().map_err(|source| ConfigError::Color {
        field: field.to_string(),
        source,
    })
}

/// A document holding several named tooltips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TooltipSet {
    /// Tooltips keyed by name
    #[serde(default)]
    pub tooltips: BTreeMap<String, TooltipConfig>,
}

impl TooltipSet {
    /// Parse a tooltip set from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let set: Self = serde_yaml_ng::from_str(yaml)?;
        debug!(count = set.tooltips.len(), "loaded tooltip set");
        Ok(set)
    }

    /// Parse a tooltip set from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let set: Self = serde_json::from_str(json)?;
        debug!(count = set.tooltips.len(), "loaded tooltip set");
        Ok(set)
    }

    /// Look up a tooltip by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TooltipConfig> {
        self.tooltips.get(name)
    }

    /// Convert every entry, failing on the first invalid one.
    ///
    /// Errors name the offending entry in the field path.
    pub fn to_props(&self) -> Result<BTreeMap<String, TooltipProps>, ConfigError> {
        self.tooltips
            .iter()
            .map(|(name, config)| {
                config
                    .to_props()
                    .map(|props| (name.clone(), props))
                    .map_err(|e| qualify(name, e))
            })
            .collect()
    }
}

fn qualify(name: &str, err: ConfigError) -> ConfigError {
    match err {
        ConfigError::MissingField(field) => ConfigError::MissingField(format!("{name}.{field}")),
        ConfigError::InvalidValue { field, message } => ConfigError::InvalidValue {
            field: format!("{name}.{field}"),
            message,
        },
        ConfigError::Color { field, source } => ConfigError::Color {
            field: format!("{name}.{field}"),
            source,
        },
        other => other,
    }
}
