//! Interaction scripts: the events a browser host would route to the board,
//! written down as JSON.

use crate::error::AppError;
use easel_core::{
    Board, CanvasElement, Element, ElementError, ElementId, ImageElement, RenderConfig,
    SceneNode, TextElement, TransformerConfig,
};
use serde::{Deserialize, Serialize};

/// One host interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Command {
    /// Create an element; `options` is the untyped options bag.
    Create {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        options: serde_json::Value,
    },
    DragStart {
        id: ElementId,
    },
    /// Drag finished with the node at `(x, y)`.
    DragEnd {
        id: ElementId,
        x: f64,
        y: f64,
    },
    /// Resize/rotate gesture finished with the node scaled by `scaleX`/`scaleY`.
    #[serde(rename_all = "camelCase")]
    Transform {
        id: ElementId,
        #[serde(default = "one")]
        scale_x: f64,
        #[serde(default = "one")]
        scale_y: f64,
        #[serde(default)]
        rotation: Option<f64>,
    },
    Duplicate {
        id: ElementId,
    },
    Remove {
        id: ElementId,
    },
    Select {
        id: ElementId,
    },
    Deselect,
    BringToFront {
        id: ElementId,
    },
    SendToBack {
        id: ElementId,
    },
    SetPosition {
        id: ElementId,
        x: f64,
        y: f64,
    },
    SetRotation {
        id: ElementId,
        value: f64,
    },
    SetOpacity {
        id: ElementId,
        value: f64,
    },
    SetText {
        id: ElementId,
        text: String,
    },
    SetFontSize {
        id: ElementId,
        value: f64,
    },
    SetWidth {
        id: ElementId,
        value: f64,
    },
    SetDimensions {
        id: ElementId,
        width: f64,
        height: f64,
    },
    SetSrc {
        id: ElementId,
        src: String,
    },
}

fn one() -> f64 {
    1.0
}

/// Board state after a script has run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub elements: Vec<RenderConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<ElementId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformer: Option<TransformerConfig>,
}

impl Report {
    pub fn from_board(board: &Board) -> Self {
        Self {
            elements: board.render_configs(),
            selected: board.selected(),
            transformer: board.transformer_config(),
        }
    }
}

/// Parse a script: a JSON array of commands.
pub fn parse(source: &str) -> Result<Vec<Command>, AppError> {
    Ok(serde_json::from_str(source)?)
}

/// Apply every command in order, stopping at the first failure.
pub fn run(board: &mut Board, commands: &[Command]) -> Result<(), AppError> {
    for (index, command) in commands.iter().enumerate() {
        log::debug!("Applying command {}: {:?}", index, command);
        apply(board, command).map_err(|source| AppError::Command {
            index,
            source: Box::new(source),
        })?;
    }
    Ok(())
}

/// Apply one command.
pub fn apply(board: &mut Board, command: &Command) -> Result<(), AppError> {
    match command {
        Command::Create { kind, options } => {
            let id = board.create_from_json(kind, options)?;
            log::info!("Created {} element {}", kind, id);
        }
        Command::DragStart { id } => board.handle_drag_start(*id)?,
        Command::DragEnd { id, x, y } => {
            board.handle_drag_end(*id, &SceneNode::new(*x, *y, 0.0, 0.0))?;
        }
        Command::Transform {
            id,
            scale_x,
            scale_y,
            rotation,
        } => {
            let element = board.get(*id).ok_or(ElementError::NotFound(*id))?;
            let mut node = node_for(element)
                .with_scale(*scale_x, *scale_y)
                .with_rotation(rotation.unwrap_or_else(|| element.rotation()));
            board.handle_transform(*id, &mut node)?;
        }
        Command::Duplicate { id } => {
            let copy = board.duplicate(*id)?;
            log::info!("Duplicated element {} as {}", id, copy);
        }
        Command::Remove { id } => {
            if board.remove(*id).is_none() {
                log::warn!("Remove ignored: no element {}", id);
            }
        }
        Command::Select { id } => board.select(*id)?,
        Command::Deselect => board.deselect(),
        Command::BringToFront { id } => board.bring_to_front(*id)?,
        Command::SendToBack { id } => board.send_to_back(*id)?,
        Command::SetPosition { id, x, y } => element_mut(board, *id)?.set_position(*x, *y),
        Command::SetRotation { id, value } => element_mut(board, *id)?.set_rotation(*value),
        Command::SetOpacity { id, value } => element_mut(board, *id)?.set_opacity(*value),
        Command::SetText { id, text } => text_mut(board, *id)?.set_text(text.as_str()),
        Command::SetFontSize { id, value } => text_mut(board, *id)?.set_font_size(*value),
        Command::SetWidth { id, value } => text_mut(board, *id)?.set_width(*value),
        Command::SetDimensions { id, width, height } => {
            image_mut(board, *id)?.set_dimensions(*width, *height);
        }
        Command::SetSrc { id, src } => image_mut(board, *id)?.set_src(src.as_str()),
    }
    Ok(())
}

/// The node the backend would hold for `element` before a gesture.
fn node_for(element: &Element) -> SceneNode {
    let (width, height) = match element {
        Element::Text(t) => (t.width(), 0.0),
        Element::Image(i) => (i.width(), i.height()),
    };
    SceneNode::new(element.x(), element.y(), width, height)
}

fn element_mut(board: &mut Board, id: ElementId) -> Result<&mut Element, AppError> {
    Ok(board.get_mut(id).ok_or(ElementError::NotFound(id))?)
}

fn text_mut(board: &mut Board, id: ElementId) -> Result<&mut TextElement, AppError> {
    element_mut(board, id)?
        .as_text_mut()
        .ok_or(AppError::WrongKind(id, "text"))
}

fn image_mut(board: &mut Board, id: ElementId) -> Result<&mut ImageElement, AppError> {
    element_mut(board, id)?
        .as_image_mut()
        .ok_or(AppError::WrongKind(id, "image"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run_json(value: serde_json::Value) -> Result<Board, AppError> {
        let commands = parse(&value.to_string())?;
        let mut board = Board::new();
        run(&mut board, &commands)?;
        Ok(board)
    }

    #[test]
    fn test_parse_commands() {
        let commands = parse(
            r#"[
                { "op": "create", "type": "text" },
                { "op": "transform", "id": 1, "scaleX": 1.5 },
                { "op": "deselect" }
            ]"#,
        )
        .unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Create {
                    kind: "text".to_string(),
                    options: serde_json::Value::Null,
                },
                Command::Transform {
                    id: 1,
                    scale_x: 1.5,
                    scale_y: 1.0,
                    rotation: None,
                },
                Command::Deselect,
            ]
        );
    }

    #[test]
    fn test_drag_and_transform_text() {
        let board = run_json(json!([
            { "op": "create", "type": "text", "options": { "text": "Hello" } },
            { "op": "dragStart", "id": 1 },
            { "op": "dragEnd", "id": 1, "x": 20, "y": 30 },
            { "op": "transform", "id": 1, "scaleX": 1.5, "scaleY": 9.0 }
        ]))
        .unwrap();
        let text = board.get(1).unwrap().as_text().unwrap();
        assert!((text.x() - 20.0).abs() < f64::EPSILON);
        assert!((text.y() - 30.0).abs() < f64::EPSILON);
        assert!((text.width() - 300.0).abs() < f64::EPSILON);
        assert!(!text.is_dragging());
    }

    #[test]
    fn test_transform_image_with_rotation() {
        let board = run_json(json!([
            { "op": "create", "type": "image", "options": { "width": 40, "height": 50 } },
            { "op": "transform", "id": 1, "scaleX": 2, "scaleY": 3, "rotation": 45 }
        ]))
        .unwrap();
        let image = board.get(1).unwrap().as_image().unwrap();
        assert!((image.width() - 80.0).abs() < f64::EPSILON);
        assert!((image.height() - 150.0).abs() < f64::EPSILON);
        assert!((image.rotation() - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_setters_and_report() {
        let board = run_json(json!([
            { "op": "create", "type": "text" },
            { "op": "create", "type": "image", "options": { "src": "cat.png" } },
            { "op": "setFontSize", "id": 1, "value": 2 },
            { "op": "setOpacity", "id": 2, "value": 3 },
            { "op": "setDimensions", "id": 2, "width": 10, "height": 64 },
            { "op": "duplicate", "id": 1 },
            { "op": "select", "id": 2 }
        ]))
        .unwrap();
        let report = serde_json::to_value(Report::from_board(&board)).unwrap();
        let elements = report["elements"].as_array().unwrap();
        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0]["fontSize"], 8.0);
        // The duplicate sits directly above its source.
        assert_eq!(elements[1]["x"], 110.0);
        assert_eq!(elements[2]["src"], "cat.png");
        assert_eq!(elements[2]["opacity"], 1.0);
        assert_eq!(elements[2]["width"], 30.0);
        assert_eq!(report["selected"], 2);
        assert_eq!(report["transformer"]["enabledAnchors"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_failing_command_reports_index() {
        let err = run_json(json!([
            { "op": "create", "type": "text" },
            { "op": "create", "type": "video" }
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::Command { index: 1, .. }));
        assert!(err.to_string().contains("unknown element type: video"));
    }

    #[test]
    fn test_wrong_kind() {
        let err = run_json(json!([
            { "op": "create", "type": "image" },
            { "op": "setText", "id": 1, "text": "nope" }
        ]))
        .unwrap_err();
        match err {
            AppError::Command { source, .. } => {
                assert!(matches!(*source, AppError::WrongKind(1, "text")));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_remove_missing_is_ignored() {
        let board = run_json(json!([{ "op": "remove", "id": 5 }])).unwrap();
        assert!(board.is_empty());
    }
}
