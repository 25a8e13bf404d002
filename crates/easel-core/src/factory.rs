//! Element construction from a type tag and typed options.

use crate::config::EditorConfig;
use crate::elements::{Element, ElementId, ElementType, ImageElement, TextElement};
use crate::error::{ElementError, Result};
use serde::{Deserialize, Serialize};

/// Options for a new text element. Unset fields take the configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    pub text: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Options for a new image element. Unset fields take the configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageOptions {
    pub src: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Creation options, one variant per element kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementOptions {
    Text(TextOptions),
    Image(ImageOptions),
}

impl ElementOptions {
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementOptions::Text(_) => ElementType::Text,
            ElementOptions::Image(_) => ElementType::Image,
        }
    }
}

impl From<TextOptions> for ElementOptions {
    fn from(options: TextOptions) -> Self {
        ElementOptions::Text(options)
    }
}

impl From<ImageOptions> for ElementOptions {
    fn from(options: ImageOptions) -> Self {
        ElementOptions::Image(options)
    }
}

/// Builds elements from a type tag.
#[derive(Debug, Clone, Default)]
pub struct ElementFactory {
    config: EditorConfig,
}

impl ElementFactory {
    /// Factory using the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory using the defaults in `config`.
    pub fn with_config(config: EditorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Create an element of kind `tag`.
    ///
    /// Fails with [`ElementError::UnknownType`] for a tag other than `text` or
    /// `image`, and with [`ElementError::OptionsMismatch`] when `options` are for
    /// the other kind.
    pub fn create_element(
        &self,
        tag: &str,
        id: ElementId,
        options: Option<ElementOptions>,
    ) -> Result<Element> {
        let kind = parse_tag(tag)?;
        let element = match (kind, options) {
            (ElementType::Text, None) => self.create_text(id, TextOptions::default()).into(),
            (ElementType::Text, Some(ElementOptions::Text(options))) => {
                self.create_text(id, options).into()
            }
            (ElementType::Image, None) => self.create_image(id, ImageOptions::default()).into(),
            (ElementType::Image, Some(ElementOptions::Image(options))) => {
                self.create_image(id, options).into()
            }
            (expected, Some(options)) => {
                return Err(ElementError::OptionsMismatch {
                    expected,
                    found: options.element_type(),
                });
            }
        };
        log::debug!("Created {} element {}", kind, id);
        Ok(element)
    }

    /// Create an element from an untyped options bag, as handed over by a
    /// script host. Unrecognised keys are ignored; `null` means no options.
    pub fn create_from_json(
        &self,
        tag: &str,
        id: ElementId,
        options: &serde_json::Value,
    ) -> Result<Element> {
        let kind = parse_tag(tag)?;
        if options.is_null() {
            return self.create_element(tag, id, None);
        }
        let options = match kind {
            ElementType::Text => ElementOptions::Text(TextOptions::deserialize(options)?),
            ElementType::Image => ElementOptions::Image(ImageOptions::deserialize(options)?),
        };
        self.create_element(tag, id, Some(options))
    }

    /// Create a text element.
    pub fn create_text(&self, id: ElementId, options: TextOptions) -> TextElement {
        let defaults = &self.config.text;
        let mut text = TextElement::new(
            id,
            options.text.unwrap_or_else(|| defaults.text.clone()),
            options.x.unwrap_or(defaults.x),
            options.y.unwrap_or(defaults.y),
        );
        text.set_font_size(defaults.font_size);
        text.set_font_family(defaults.font_family.clone());
        text.set_fill(defaults.fill.clone());
        text.set_width(defaults.width);
        text.set_align(defaults.align.clone());
        text
    }

    /// Create an image element. Dimensions are floored at [`ImageElement::MIN_SIZE`].
    pub fn create_image(&self, id: ElementId, options: ImageOptions) -> ImageElement {
        let defaults = &self.config.image;
        ImageElement::new(
            id,
            options.src.unwrap_or_else(|| defaults.src.clone()),
            options.x.unwrap_or(defaults.x),
            options.y.unwrap_or(defaults.y),
            options.width.unwrap_or(defaults.width),
            options.height.unwrap_or(defaults.height),
        )
    }
}

fn parse_tag(tag: &str) -> Result<ElementType> {
    tag.parse().inspect_err(|_| {
        log::warn!("Rejected element type tag {:?}", tag);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::CanvasElement;
    use serde_json::json;

    #[test]
    fn test_create_text_defaults() {
        let element = ElementFactory::new().create_element("text", 7, None).unwrap();
        let text = element.as_text().unwrap();
        assert_eq!(text.id(), 7);
        assert_eq!(text.text, "Double-click to edit");
        assert!((text.x() - 100.0).abs() < f64::EPSILON);
        assert!((text.y() - 100.0).abs() < f64::EPSILON);
        assert!((text.font_size() - 30.0).abs() < f64::EPSILON);
        assert!((text.width() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_create_text_with_options() {
        let options = TextOptions {
            text: Some("Title".to_string()),
            x: Some(0.0),
            y: None,
        };
        let element = ElementFactory::new()
            .create_element("text", 1, Some(options.into()))
            .unwrap();
        let text = element.as_text().unwrap();
        assert_eq!(text.text, "Title");
        assert!((text.x() - 0.0).abs() < f64::EPSILON);
        assert!((text.y() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_create_image_defaults() {
        let element = ElementFactory::new().create_element("image", 2, None).unwrap();
        let image = element.as_image().unwrap();
        assert_eq!(image.id(), 2);
        assert_eq!(image.src, "");
        assert!((image.x() - 150.0).abs() < f64::EPSILON);
        assert!((image.y() - 150.0).abs() < f64::EPSILON);
        assert!((image.width() - 30.0).abs() < f64::EPSILON);
        assert!((image.height() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_create_image_with_options() {
        let options = ImageOptions {
            src: Some("https://example.com/cat.png".to_string()),
            width: Some(640.0),
            height: Some(480.0),
            ..ImageOptions::default()
        };
        let element = ElementFactory::new()
            .create_element("image", 3, Some(options.into()))
            .unwrap();
        let image = element.as_image().unwrap();
        assert_eq!(image.src, "https://example.com/cat.png");
        assert!((image.width() - 640.0).abs() < f64::EPSILON);
        assert!((image.height() - 480.0).abs() < f64::EPSILON);
        assert!((image.x() - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_type() {
        let err = ElementFactory::new().create_element("video", 1, None).unwrap_err();
        assert!(matches!(err, ElementError::UnknownType(ref tag) if tag == "video"));
        assert!(err.to_string().contains("video"));
    }

    #[test]
    fn test_options_mismatch() {
        let err = ElementFactory::new()
            .create_element("text", 1, Some(ImageOptions::default().into()))
            .unwrap_err();
        assert!(matches!(
            err,
            ElementError::OptionsMismatch {
                expected: ElementType::Text,
                found: ElementType::Image
            }
        ));
    }

    #[test]
    fn test_create_from_json() {
        let factory = ElementFactory::new();
        let element = factory
            .create_from_json("image", 4, &json!({ "src": "a.png", "x": 5, "extra": true }))
            .unwrap();
        let image = element.as_image().unwrap();
        assert_eq!(image.src, "a.png");
        assert!((image.x() - 5.0).abs() < f64::EPSILON);
        assert!((image.y() - 150.0).abs() < f64::EPSILON);

        let element = factory.create_from_json("text", 5, &serde_json::Value::Null).unwrap();
        assert_eq!(element.as_text().unwrap().text, "Double-click to edit");

        assert!(matches!(
            factory.create_from_json("text", 6, &json!({ "x": "left" })),
            Err(ElementError::Json(_))
        ));
        assert!(matches!(
            factory.create_from_json("shape", 6, &json!({})),
            Err(ElementError::UnknownType(_))
        ));
    }

    #[test]
    fn test_configured_defaults() {
        let mut config = EditorConfig::default();
        config.text.text = "New note".to_string();
        config.text.font_size = 2.0;
        config.text.fill = "purple".to_string();
        config.image.width = 320.0;
        let factory = ElementFactory::with_config(config);

        let element = factory.create_element("text", 1, None).unwrap();
        let text = element.as_text().unwrap();
        assert_eq!(text.text, "New note");
        assert_eq!(text.fill, "purple");
        // Floors still apply to configured values.
        assert!((text.font_size() - 8.0).abs() < f64::EPSILON);

        let element = factory.create_element("image", 2, None).unwrap();
        assert!((element.as_image().unwrap().width() - 320.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_options_deserialize_tagged() {
        let options: ElementOptions =
            serde_json::from_value(json!({ "type": "text", "text": "Hi" })).unwrap();
        assert_eq!(
            options,
            ElementOptions::Text(TextOptions {
                text: Some("Hi".to_string()),
                ..TextOptions::default()
            })
        );
    }
}
