//! Easel Core Library
//!
//! Element model for a drawing canvas rendered by a Konva-style scene graph.
//! Elements hold semantic state (position, size, rotation, opacity) and produce
//! the attribute maps the rendering backend consumes.

pub mod board;
pub mod config;
pub mod elements;
pub mod error;
pub mod factory;
pub mod node;
pub mod transformer;

pub use board::Board;
pub use config::{DragFeedback, EditorConfig, ImageDefaults, TextDefaults};
pub use elements::{
    CanvasElement, Element, ElementBase, ElementId, ElementType, ImageConfig, ImageElement,
    RenderConfig, TextConfig, TextElement, CLONE_OFFSET,
};
pub use error::{ElementError, Result};
pub use factory::{ElementFactory, ElementOptions, ImageOptions, TextOptions};
pub use node::{NodeAttrs, NodeHandle, SceneNode};
pub use transformer::{Anchor, BoundBoxConstraint, BoundingBox, TransformerConfig};
