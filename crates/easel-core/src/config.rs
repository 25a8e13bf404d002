//! Editor configuration: factory defaults and drag feedback.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Defaults applied by the factory when text options leave a field unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextDefaults {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub font_family: String,
    pub fill: String,
    pub width: f64,
    pub align: String,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            text: "Double-click to edit".to_string(),
            x: 100.0,
            y: 100.0,
            font_size: 30.0,
            font_family: "Arial".to_string(),
            fill: "black".to_string(),
            width: 200.0,
            align: "left".to_string(),
        }
    }
}

/// Defaults applied by the factory when image options leave a field unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageDefaults {
    pub src: String,
    pub x: f64,
    pub y: f64,
    /// Unsized images are floored to the minimum dimension on construction.
    pub width: f64,
    pub height: f64,
}

impl Default for ImageDefaults {
    fn default() -> Self {
        Self {
            src: String::new(),
            x: 150.0,
            y: 150.0,
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Visual cues shown while an element is being dragged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DragFeedback {
    /// Fill used by text elements while dragging.
    pub text_fill: String,
    /// Opacity used by image elements while dragging.
    pub image_opacity: f64,
}

impl Default for DragFeedback {
    fn default() -> Self {
        Self {
            text_fill: "green".to_string(),
            image_opacity: 0.8,
        }
    }
}

/// Editor-wide configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub text: TextDefaults,
    pub image: ImageDefaults,
    pub drag: DragFeedback,
}

impl EditorConfig {
    /// Parse a configuration from JSON. Missing sections keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        log::debug!("Loaded editor config: {:?}", config);
        Ok(config)
    }

    /// Serialize the configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.text.text, "Double-click to edit");
        assert!((config.text.x - 100.0).abs() < f64::EPSILON);
        assert!((config.image.x - 150.0).abs() < f64::EPSILON);
        assert_eq!(config.drag.text_fill, "green");
        assert!((config.drag.image_opacity - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EditorConfig::from_json(
            r#"{ "text": { "fontFamily": "Helvetica" }, "drag": { "imageOpacity": 0.5 } }"#,
        )
        .unwrap();
        assert_eq!(config.text.font_family, "Helvetica");
        assert_eq!(config.text.fill, "black");
        assert!((config.drag.image_opacity - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.drag.text_fill, "green");
        assert_eq!(config.image, ImageDefaults::default());
    }

    #[test]
    fn test_json_round_trip() {
        let config = EditorConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(EditorConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_json() {
        assert!(EditorConfig::from_json("{ not json").is_err());
    }
}
