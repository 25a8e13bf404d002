//! Text element.

use super::{CanvasElement, ElementBase, ElementId, ElementType};
use crate::config::DragFeedback;
use crate::node::{NodeAttrs, NodeHandle};
use crate::transformer::{Anchor, BoundBoxConstraint, TransformerConfig};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A text box. Only its width is user-resizable; height follows the content.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    base: ElementBase,
    /// The text content.
    pub text: String,
    font_size: f64,
    /// Font family name, passed through to the backend.
    pub font_family: String,
    /// Fill color, passed through to the backend.
    pub fill: String,
    width: f64,
    /// Horizontal alignment (`left`, `center` or `right`), passed through.
    pub align: String,
}

/// Text render config, field names as the backend expects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextConfig {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub font_family: String,
    pub fill: String,
    pub width: f64,
    pub align: String,
    pub rotation: f64,
    pub opacity: f64,
    pub draggable: bool,
}

impl TextElement {
    pub const DEFAULT_FONT_SIZE: f64 = 30.0;
    pub const DEFAULT_WIDTH: f64 = 200.0;
    pub const MIN_FONT_SIZE: f64 = 8.0;
    pub const MIN_WIDTH: f64 = 30.0;

    /// Create a text element with default font, fill, width and alignment.
    pub fn new(id: ElementId, text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            base: ElementBase::new(id, Point::new(x, y)),
            text: text.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
            font_family: "Arial".to_string(),
            fill: "black".to_string(),
            width: Self::DEFAULT_WIDTH,
            align: "left".to_string(),
        }
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Set the font size, floored at [`Self::MIN_FONT_SIZE`].
    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = size.max(Self::MIN_FONT_SIZE);
        log::trace!("Text {} font size -> {}", self.base.id, self.font_size);
    }

    /// Set the box width, floored at [`Self::MIN_WIDTH`].
    pub fn set_width(&mut self, width: f64) {
        self.width = width.max(Self::MIN_WIDTH);
        log::trace!("Text {} width -> {}", self.base.id, self.width);
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    pub fn set_fill(&mut self, fill: impl Into<String>) {
        self.fill = fill.into();
    }

    pub fn set_align(&mut self, align: impl Into<String>) {
        self.align = align.into();
    }
}

impl CanvasElement for TextElement {
    type Config = TextConfig;

    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn element_type(&self) -> ElementType {
        ElementType::Text
    }

    fn render_config_with(&self, feedback: &DragFeedback) -> TextConfig {
        let fill = if self.base.dragging {
            feedback.text_fill.clone()
        } else {
            self.fill.clone()
        };
        TextConfig {
            text: self.text.clone(),
            x: self.base.position.x,
            y: self.base.position.y,
            font_size: self.font_size,
            font_family: self.font_family.clone(),
            fill,
            width: self.width,
            align: self.align.clone(),
            rotation: self.base.rotation,
            opacity: self.base.opacity(),
            draggable: true,
        }
    }

    fn clone_element(&self) -> Self {
        Self {
            base: self.base.cloned_with_offset(),
            text: self.text.clone(),
            font_size: self.font_size,
            font_family: self.font_family.clone(),
            fill: self.fill.clone(),
            width: self.width,
            align: self.align.clone(),
        }
    }

    fn transformer_config(&self) -> TransformerConfig {
        TransformerConfig {
            rotate_enabled: true,
            enabled_anchors: vec![Anchor::MiddleLeft, Anchor::MiddleRight],
            bound_box: BoundBoxConstraint {
                min_width: Self::MIN_WIDTH,
                min_height: None,
            },
        }
    }

    fn handle_transform(
        &mut self,
        node: &mut dyn NodeHandle,
        on_transform: Option<&mut dyn FnMut(&Self)>,
    ) {
        // Height scale is ignored: text height is intrinsic to the content.
        let width = node.width() * node.scale_x();
        node.set_attrs(&NodeAttrs {
            width: Some(width),
            scale_x: Some(1.0),
            ..NodeAttrs::default()
        });
        self.width = width;
        self.base.position = Point::new(node.x(), node.y());
        self.base.rotation = node.rotation();
        log::debug!("Text {} transformed: width {}", self.base.id, width);

        if let Some(on_transform) = on_transform {
            on_transform(&*self);
        }
    }
}
