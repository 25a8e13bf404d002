//! Rendering backend node handles.
//!
//! The backend owns the live node while a gesture is in progress. Elements only
//! read from and write to it through [`NodeHandle`], so any scene graph binding
//! (or the in-memory [`SceneNode`]) can stand behind it.

use serde::{Deserialize, Serialize};

/// Bulk attribute update for a node. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    // Text-backed nodes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
}

/// The accessors an element needs from a backend node.
pub trait NodeHandle {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn scale_x(&self) -> f64;
    fn scale_y(&self) -> f64;
    fn rotation(&self) -> f64;

    fn set_x(&mut self, x: f64);
    fn set_y(&mut self, y: f64);
    fn set_width(&mut self, width: f64);
    fn set_height(&mut self, height: f64);
    fn set_scale_x(&mut self, scale_x: f64);
    fn set_scale_y(&mut self, scale_y: f64);
    fn set_rotation(&mut self, rotation: f64);

    /// Apply every set field of `attrs`.
    ///
    /// The default only knows geometry; nodes that carry text override it.
    fn set_attrs(&mut self, attrs: &NodeAttrs) {
        if let Some(x) = attrs.x {
            self.set_x(x);
        }
        if let Some(y) = attrs.y {
            self.set_y(y);
        }
        if let Some(width) = attrs.width {
            self.set_width(width);
        }
        if let Some(height) = attrs.height {
            self.set_height(height);
        }
        if let Some(scale_x) = attrs.scale_x {
            self.set_scale_x(scale_x);
        }
        if let Some(scale_y) = attrs.scale_y {
            self.set_scale_y(scale_y);
        }
        if let Some(rotation) = attrs.rotation {
            self.set_rotation(rotation);
        }
    }
}

/// In-memory node, for headless hosts and tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneNode {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            text: None,
            font_size: None,
            font_family: None,
            fill: None,
            align: None,
        }
    }
}

impl SceneNode {
    /// Create an unscaled node with the given geometry.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the scale factors, as a resize gesture would.
    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    /// Set the rotation in degrees.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Whether this node carries text attributes.
    pub fn is_text(&self) -> bool {
        self.text.is_some()
    }
}

impl NodeHandle for SceneNode {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn scale_x(&self) -> f64 {
        self.scale_x
    }

    fn scale_y(&self) -> f64 {
        self.scale_y
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    fn set_scale_x(&mut self, scale_x: f64) {
        self.scale_x = scale_x;
    }

    fn set_scale_y(&mut self, scale_y: f64) {
        self.scale_y = scale_y;
    }

    fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    fn set_attrs(&mut self, attrs: &NodeAttrs) {
        if let Some(x) = attrs.x {
            self.x = x;
        }
        if let Some(y) = attrs.y {
            self.y = y;
        }
        if let Some(width) = attrs.width {
            self.width = width;
        }
        if let Some(height) = attrs.height {
            self.height = height;
        }
        if let Some(scale_x) = attrs.scale_x {
            self.scale_x = scale_x;
        }
        if let Some(scale_y) = attrs.scale_y {
            self.scale_y = scale_y;
        }
        if let Some(rotation) = attrs.rotation {
            self.rotation = rotation;
        }
        if let Some(text) = &attrs.text {
            self.text = Some(text.clone());
        }
        if let Some(font_size) = attrs.font_size {
            self.font_size = Some(font_size);
        }
        if let Some(font_family) = &attrs.font_family {
            self.font_family = Some(font_family.clone());
        }
        if let Some(fill) = &attrs.fill {
            self.fill = Some(fill.clone());
        }
        if let Some(align) = &attrs.align {
            self.align = Some(align.clone());
        }
    }
}
