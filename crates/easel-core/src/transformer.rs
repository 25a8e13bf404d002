//! Transformer configuration: which resize/rotate handles the backend offers
//! for a selected element, and the size floor enforced while resizing.

use serde::{Deserialize, Serialize};

/// A resize anchor on the transformer frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    /// All eight anchors in backend order.
    pub const ALL: [Anchor; 8] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::MiddleLeft,
        Anchor::MiddleRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    /// Anchor name as the backend spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::TopLeft => "top-left",
            Anchor::TopCenter => "top-center",
            Anchor::TopRight => "top-right",
            Anchor::MiddleLeft => "middle-left",
            Anchor::MiddleRight => "middle-right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomCenter => "bottom-center",
            Anchor::BottomRight => "bottom-right",
        }
    }
}

/// A box proposed by the backend during a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
        }
    }
}

/// Minimum size a proposed box is clamped to before it is committed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundBoxConstraint {
    pub min_width: f64,
    /// `None` leaves the height unconstrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
}

impl BoundBoxConstraint {
    /// Clamp `new` to the minimum size. Position and rotation pass through.
    pub fn apply(&self, mut new: BoundingBox) -> BoundingBox {
        new.width = new.width.max(self.min_width);
        if let Some(min_height) = self.min_height {
            new.height = new.height.max(min_height);
        }
        new
    }
}

/// Transformer settings for one element type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformerConfig {
    pub rotate_enabled: bool,
    pub enabled_anchors: Vec<Anchor>,
    /// Constraint the backend's `boundBoxFunc` must enforce.
    pub bound_box: BoundBoxConstraint,
}

impl TransformerConfig {
    /// The backend's `boundBoxFunc(oldBox, newBox)`.
    pub fn bound_box_func(&self, _old: BoundingBox, new: BoundingBox) -> BoundingBox {
        self.bound_box.apply(new)
    }

    /// Check if `anchor` is offered.
    pub fn has_anchor(&self, anchor: Anchor) -> bool {
        self.enabled_anchors.contains(&anchor)
    }
}
