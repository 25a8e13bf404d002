//! Image element.

use super::{CanvasElement, ElementBase, ElementId, ElementType};
use crate::config::DragFeedback;
use crate::node::NodeHandle;
use crate::transformer::{Anchor, BoundBoxConstraint, TransformerConfig};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// An image placed on the canvas, resizable on both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    base: ElementBase,
    /// Image source reference (usually a URL).
    pub src: String,
    width: f64,
    height: f64,
    scale_x: f64,
    scale_y: f64,
}

/// Image render config, field names as the backend expects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub src: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
    pub opacity: f64,
    pub draggable: bool,
}

impl ImageElement {
    pub const MIN_SIZE: f64 = 30.0;

    /// Create an image element. Dimensions below [`Self::MIN_SIZE`] are raised to it.
    pub fn new(
        id: ElementId,
        src: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            base: ElementBase::new(id, Point::new(x, y)),
            src: src.into(),
            width: width.max(Self::MIN_SIZE),
            height: height.max(Self::MIN_SIZE),
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    pub fn set_src(&mut self, src: impl Into<String>) {
        self.src = src.into();
    }

    /// Set both dimensions, each floored at [`Self::MIN_SIZE`].
    pub fn set_dimensions(&mut self, width: f64, height: f64) {
        self.width = width.max(Self::MIN_SIZE);
        self.height = height.max(Self::MIN_SIZE);
        log::trace!(
            "Image {} dimensions -> {}x{}",
            self.base.id,
            self.width,
            self.height
        );
    }

    pub fn set_scale(&mut self, scale_x: f64, scale_y: f64) {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
    }
}

impl CanvasElement for ImageElement {
    type Config = ImageConfig;

    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn element_type(&self) -> ElementType {
        ElementType::Image
    }

    fn render_config_with(&self, feedback: &DragFeedback) -> ImageConfig {
        let opacity = if self.base.dragging {
            feedback.image_opacity
        } else {
            self.base.opacity()
        };
        ImageConfig {
            src: self.src.clone(),
            x: self.base.position.x,
            y: self.base.position.y,
            width: self.width,
            height: self.height,
            scale_x: self.scale_x,
            scale_y: self.scale_y,
            rotation: self.base.rotation,
            opacity,
            draggable: true,
        }
    }

    fn clone_element(&self) -> Self {
        Self {
            base: self.base.cloned_with_offset(),
            src: self.src.clone(),
            width: self.width,
            height: self.height,
            scale_x: self.scale_x,
            scale_y: self.scale_y,
        }
    }

    fn transformer_config(&self) -> TransformerConfig {
        TransformerConfig {
            rotate_enabled: true,
            enabled_anchors: Anchor::ALL.to_vec(),
            bound_box: BoundBoxConstraint {
                min_width: Self::MIN_SIZE,
                min_height: Some(Self::MIN_SIZE),
            },
        }
    }

    fn handle_transform(
        &mut self,
        node: &mut dyn NodeHandle,
        on_transform: Option<&mut dyn FnMut(&Self)>,
    ) {
        let scale_x = node.scale_x();
        let scale_y = node.scale_y();

        // Reset the node scale and carry the resize in width/height instead.
        node.set_scale_x(1.0);
        node.set_scale_y(1.0);

        let width = (node.width() * scale_x).max(Self::MIN_SIZE);
        let height = (node.height() * scale_y).max(Self::MIN_SIZE);
        node.set_width(width);
        node.set_height(height);

        self.width = width.round();
        self.height = height.round();
        self.base.position = Point::new(node.x(), node.y());
        self.base.rotation = node.rotation();
        log::debug!(
            "Image {} transformed: {}x{}",
            self.base.id,
            self.width,
            self.height
        );

        if let Some(on_transform) = on_transform {
            on_transform(&*self);
        }
    }
}
