//! The board: an ordered collection of elements with id allocation,
//! selection and draw order.

use crate::config::EditorConfig;
use crate::elements::{CanvasElement, Element, ElementId, RenderConfig};
use crate::error::{ElementError, Result};
use crate::factory::{ElementFactory, ElementOptions};
use crate::node::NodeHandle;
use crate::transformer::TransformerConfig;

/// Elements on a canvas, back to front.
#[derive(Debug, Clone)]
pub struct Board {
    /// Elements in draw order (back to front).
    elements: Vec<Element>,
    /// Next id handed out by [`Board::create`] and [`Board::duplicate`].
    next_id: ElementId,
    /// Currently selected element.
    selected: Option<ElementId>,
    factory: ElementFactory,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with default configuration.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Create an empty board whose factory and drag feedback use `config`.
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            elements: Vec::new(),
            next_id: 1,
            selected: None,
            factory: ElementFactory::with_config(config),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        self.factory.config()
    }

    /// Create an element of kind `tag` under a fresh id and add it on top.
    pub fn create(&mut self, tag: &str, options: Option<ElementOptions>) -> Result<ElementId> {
        let id = self.fresh_id()?;
        let element = self.factory.create_element(tag, id, options)?;
        self.insert(element)?;
        Ok(id)
    }

    /// Create an element from an untyped options bag under a fresh id.
    pub fn create_from_json(
        &mut self,
        tag: &str,
        options: &serde_json::Value,
    ) -> Result<ElementId> {
        let id = self.fresh_id()?;
        let element = self.factory.create_from_json(tag, id, options)?;
        self.insert(element)?;
        Ok(id)
    }

    /// Add an element on top. Fails if its id is already on the board.
    pub fn insert(&mut self, element: Element) -> Result<()> {
        let id = element.id();
        if self.contains(id) {
            return Err(ElementError::DuplicateId(id));
        }
        self.next_id = self.next_id.max(id.saturating_add(1));
        self.elements.push(element);
        Ok(())
    }

    /// Remove an element. Clears the selection if it was selected.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.index_of(id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        log::debug!("Removed element {}", id);
        Some(self.elements.remove(index))
    }

    /// Remove all elements. Ids are not reused.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.selected = None;
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// Elements in draw order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Clone an element under a fresh id, placed directly above its source.
    pub fn duplicate(&mut self, id: ElementId) -> Result<ElementId> {
        let index = self.index_of(id).ok_or(ElementError::NotFound(id))?;
        let new_id = self.fresh_id()?;
        let mut copy = self.elements[index].clone_element();
        copy.set_id(new_id);
        self.elements.insert(index + 1, copy);
        self.next_id = new_id.saturating_add(1);
        log::debug!("Duplicated element {} as {}", id, new_id);
        Ok(new_id)
    }

    /// Select an element.
    pub fn select(&mut self, id: ElementId) -> Result<()> {
        if !self.contains(id) {
            return Err(ElementError::NotFound(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    /// Transformer config for the selected element, if any.
    pub fn transformer_config(&self) -> Option<TransformerConfig> {
        self.selected
            .and_then(|id| self.get(id))
            .map(|e| e.transformer_config())
    }

    /// Move an element to the top of the draw order.
    pub fn bring_to_front(&mut self, id: ElementId) -> Result<()> {
        let index = self.index_of(id).ok_or(ElementError::NotFound(id))?;
        let element = self.elements.remove(index);
        self.elements.push(element);
        Ok(())
    }

    /// Move an element to the bottom of the draw order.
    pub fn send_to_back(&mut self, id: ElementId) -> Result<()> {
        let index = self.index_of(id).ok_or(ElementError::NotFound(id))?;
        let element = self.elements.remove(index);
        self.elements.insert(0, element);
        Ok(())
    }

    /// Render configs in draw order, using the configured drag feedback.
    pub fn render_configs(&self) -> Vec<RenderConfig> {
        let feedback = &self.config().drag;
        self.elements
            .iter()
            .map(|e| e.render_config_with(feedback))
            .collect()
    }

    /// Route a drag start to an element.
    pub fn handle_drag_start(&mut self, id: ElementId) -> Result<()> {
        self.element_mut(id)?.handle_drag_start(None);
        Ok(())
    }

    /// Route a drag end to an element.
    pub fn handle_drag_end(&mut self, id: ElementId, node: &dyn NodeHandle) -> Result<()> {
        self.element_mut(id)?.handle_drag_end(node, None);
        Ok(())
    }

    /// Route a finished transform gesture to an element.
    pub fn handle_transform(&mut self, id: ElementId, node: &mut dyn NodeHandle) -> Result<()> {
        self.element_mut(id)?.handle_transform(node, None);
        Ok(())
    }

    /// The id the next new element gets. Fails once the id space is used up.
    fn fresh_id(&self) -> Result<ElementId> {
        if self.contains(self.next_id) {
            return Err(ElementError::IdsExhausted);
        }
        Ok(self.next_id)
    }

    fn element_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.get_mut(id).ok_or(ElementError::NotFound(id))
    }

    fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == id)
    }
}
