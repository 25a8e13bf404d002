//! Canvas elements.

mod image;
mod text;

pub use image::{ImageConfig, ImageElement};
pub use text::{TextConfig, TextElement};

use crate::config::DragFeedback;
use crate::error::ElementError;
use crate::node::NodeHandle;
use crate::transformer::TransformerConfig;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an element. Uniqueness is the owning collection's job.
pub type ElementId = u64;

/// Offset applied to a cloned element so it does not sit on top of its source.
pub const CLONE_OFFSET: Vec2 = Vec2::new(10.0, 10.0);

/// Type tag of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Text,
    Image,
}

impl ElementType {
    /// The tag as the host spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Text => "text",
            ElementType::Image => "image",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = ElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ElementType::Text),
            "image" => Ok(ElementType::Image),
            other => Err(ElementError::UnknownType(other.to_string())),
        }
    }
}

/// State shared by every element kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementBase {
    pub(crate) id: ElementId,
    /// Top-left position in canvas coordinates.
    pub position: Point,
    /// True between drag start and drag end.
    pub dragging: bool,
    /// Rotation in degrees, unbounded.
    pub rotation: f64,
    opacity: f64,
}

impl ElementBase {
    pub fn new(id: ElementId, position: Point) -> Self {
        Self {
            id,
            position,
            dragging: false,
            rotation: 0.0,
            opacity: 1.0,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Opacity, always within `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity.min(1.0).max(0.0);
    }

    /// Copy for a cloned element: same id, rotation and opacity, offset position,
    /// not dragging.
    pub(crate) fn cloned_with_offset(&self) -> Self {
        Self {
            id: self.id,
            position: self.position + CLONE_OFFSET,
            dragging: false,
            rotation: self.rotation,
            opacity: self.opacity,
        }
    }
}

/// Behaviour shared by every canvas element.
///
/// Position, drag and opacity handling is provided on top of [`ElementBase`];
/// each element kind supplies its render config, transformer config, clone and
/// transform reconciliation.
pub trait CanvasElement {
    /// Attribute map handed to the rendering backend.
    type Config: Serialize;

    fn base(&self) -> &ElementBase;

    fn base_mut(&mut self) -> &mut ElementBase;

    /// Type tag of this element.
    fn element_type(&self) -> ElementType;

    /// Render config for the current state, using `feedback` while dragging.
    fn render_config_with(&self, feedback: &DragFeedback) -> Self::Config;

    /// Copy with the same id, offset by [`CLONE_OFFSET`].
    fn clone_element(&self) -> Self
    where
        Self: Sized;

    /// Which resize/rotate handles the backend should offer.
    fn transformer_config(&self) -> TransformerConfig;

    /// Absorb the scale a resize gesture left on `node` into the element's own
    /// size, reset the node's scale to 1, then notify `on_transform`.
    fn handle_transform(
        &mut self,
        node: &mut dyn NodeHandle,
        on_transform: Option<&mut dyn FnMut(&Self)>,
    );

    /// Render config with the default drag feedback.
    fn render_config(&self) -> Self::Config {
        self.render_config_with(&DragFeedback::default())
    }

    fn id(&self) -> ElementId {
        self.base().id
    }

    fn position(&self) -> Point {
        self.base().position
    }

    fn x(&self) -> f64 {
        self.base().position.x
    }

    fn y(&self) -> f64 {
        self.base().position.y
    }

    fn is_dragging(&self) -> bool {
        self.base().dragging
    }

    fn rotation(&self) -> f64 {
        self.base().rotation
    }

    fn opacity(&self) -> f64 {
        self.base().opacity()
    }

    fn set_position(&mut self, x: f64, y: f64) {
        self.base_mut().position = Point::new(x, y);
    }

    fn start_drag(&mut self) {
        self.base_mut().dragging = true;
    }

    fn end_drag(&mut self, x: f64, y: f64) {
        self.base_mut().dragging = false;
        self.set_position(x, y);
    }

    fn set_rotation(&mut self, rotation: f64) {
        self.base_mut().rotation = rotation;
    }

    /// Set the opacity, clamped to `[0, 1]`.
    fn set_opacity(&mut self, opacity: f64) {
        self.base_mut().set_opacity(opacity);
    }

    fn handle_drag_start(&mut self, on_start: Option<&mut dyn FnMut()>) {
        self.start_drag();
        log::trace!("Drag started on element {}", self.id());
        if let Some(on_start) = on_start {
            on_start();
        }
    }

    /// Finish a drag at the position the backend reports for `node`.
    fn handle_drag_end(&mut self, node: &dyn NodeHandle, on_end: Option<&mut dyn FnMut(&Self)>) {
        let (x, y) = (node.x(), node.y());
        self.set_position(x, y);
        self.end_drag(x, y);
        log::debug!("Drag ended on element {} at ({}, {})", self.id(), x, y);
        if let Some(on_end) = on_end {
            on_end(&*self);
        }
    }
}

/// Render config of any element kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RenderConfig {
    Text(TextConfig),
    Image(ImageConfig),
}

/// Any element kind, for heterogeneous collections.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(TextElement),
    Image(ImageElement),
}

impl Element {
    pub fn as_text(&self) -> Option<&TextElement> {
        match self {
            Element::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextElement> {
        match self {
            Element::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageElement> {
        match self {
            Element::Image(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_image_mut(&mut self) -> Option<&mut ImageElement> {
        match self {
            Element::Image(i) => Some(i),
            _ => None,
        }
    }

    /// Replace the id, for collections that re-key a clone.
    pub(crate) fn set_id(&mut self, id: ElementId) {
        self.base_mut().id = id;
    }
}

impl From<TextElement> for Element {
    fn from(text: TextElement) -> Self {
        Element::Text(text)
    }
}

impl From<ImageElement> for Element {
    fn from(image: ImageElement) -> Self {
        Element::Image(image)
    }
}

impl CanvasElement for Element {
    type Config = RenderConfig;

    fn base(&self) -> &ElementBase {
        match self {
            Element::Text(t) => t.base(),
            Element::Image(i) => i.base(),
        }
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        match self {
            Element::Text(t) => t.base_mut(),
            Element::Image(i) => i.base_mut(),
        }
    }

    fn element_type(&self) -> ElementType {
        match self {
            Element::Text(t) => t.element_type(),
            Element::Image(i) => i.element_type(),
        }
    }

    fn render_config_with(&self, feedback: &DragFeedback) -> RenderConfig {
        match self {
            Element::Text(t) => RenderConfig::Text(t.render_config_with(feedback)),
            Element::Image(i) => RenderConfig::Image(i.render_config_with(feedback)),
        }
    }

    fn clone_element(&self) -> Self {
        match self {
            Element::Text(t) => Element::Text(t.clone_element()),
            Element::Image(i) => Element::Image(i.clone_element()),
        }
    }

    fn transformer_config(&self) -> TransformerConfig {
        match self {
            Element::Text(t) => t.transformer_config(),
            Element::Image(i) => i.transformer_config(),
        }
    }

    fn handle_transform(
        &mut self,
        node: &mut dyn NodeHandle,
        on_transform: Option<&mut dyn FnMut(&Self)>,
    ) {
        match self {
            Element::Text(t) => t.handle_transform(node, None),
            Element::Image(i) => i.handle_transform(node, None),
        }
        if let Some(on_transform) = on_transform {
            on_transform(&*self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::SceneNode;

    fn text(id: ElementId) -> Element {
        TextElement::new(id, "Hello", 10.0, 20.0).into()
    }

    #[test]
    fn test_element_type_parse() {
        assert_eq!("text".parse::<ElementType>().unwrap(), ElementType::Text);
        assert_eq!("image".parse::<ElementType>().unwrap(), ElementType::Image);
        let err = "video".parse::<ElementType>().unwrap_err();
        assert!(matches!(err, ElementError::UnknownType(ref tag) if tag == "video"));
        assert_eq!(err.to_string(), "unknown element type: video");
    }

    #[test]
    fn test_opacity_is_clamped() {
        let mut element = text(1);
        for (input, expected) in [(-0.5, 0.0), (0.0, 0.0), (0.4, 0.4), (1.0, 1.0), (7.0, 1.0)] {
            element.set_opacity(input);
            assert!((element.opacity() - expected).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_rotation_is_unbounded() {
        let mut element = text(1);
        element.set_rotation(725.0);
        assert!((element.rotation() - 725.0).abs() < f64::EPSILON);
        element.set_rotation(-90.0);
        assert!((element.rotation() + 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut element = text(1);
        let mut started = 0;
        element.handle_drag_start(Some(&mut || started += 1));
        assert!(element.is_dragging());
        assert_eq!(started, 1);

        let node = SceneNode::new(300.0, -40.0, 0.0, 0.0);
        let mut reported = None;
        element.handle_drag_end(
            &node,
            Some(&mut |e: &Element| reported = Some((e.id(), e.position()))),
        );
        assert!(!element.is_dragging());
        assert_eq!(element.position(), Point::new(300.0, -40.0));
        assert_eq!(reported, Some((1, Point::new(300.0, -40.0))));
    }

    #[test]
    fn test_end_drag_without_start() {
        let mut element = text(1);
        element.end_drag(5.0, 6.0);
        element.end_drag(5.0, 6.0);
        assert!(!element.is_dragging());
        assert_eq!(element.position(), Point::new(5.0, 6.0));
    }

    #[test]
    fn test_drag_callbacks_are_optional() {
        let mut element = text(1);
        element.handle_drag_start(None);
        element.handle_drag_end(&SceneNode::new(1.0, 2.0, 0.0, 0.0), None);
        assert_eq!(element.position(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_clone_keeps_id_and_offsets() {
        let mut element = text(3);
        element.set_rotation(45.0);
        element.set_opacity(0.5);
        element.start_drag();
        let cloned = element.clone_element();
        assert_eq!(cloned.id(), 3);
        assert_eq!(cloned.position(), element.position() + CLONE_OFFSET);
        assert!((cloned.rotation() - 45.0).abs() < f64::EPSILON);
        assert!((cloned.opacity() - 0.5).abs() < f64::EPSILON);
        assert!(!cloned.is_dragging());
    }

    #[test]
    fn test_enum_transform_notifies_with_wrapper() {
        let mut element: Element = ImageElement::new(9, "cat.png", 0.0, 0.0, 40.0, 50.0).into();
        let mut node = SceneNode::new(0.0, 0.0, 40.0, 50.0).with_scale(2.0, 3.0);
        let mut seen = None;
        element.handle_transform(
            &mut node,
            Some(&mut |e: &Element| seen = Some(e.element_type())),
        );
        assert_eq!(seen, Some(ElementType::Image));
        let image = element.as_image().unwrap();
        assert!((image.width() - 80.0).abs() < f64::EPSILON);
        assert!((image.height() - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_render_config_untagged() {
        let value = serde_json::to_value(text(1).render_config()).unwrap();
        assert_eq!(value["text"], "Hello");
        assert_eq!(value["draggable"], true);
    }
}
