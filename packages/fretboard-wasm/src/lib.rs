use wasm_bindgen::prelude::*;
use serde::Serialize;

use fretboard::render::{display_list, export_file_name, DrawCommand};
use fretboard::{Advisory, Fretboard, FretboardConfig, FretboardError, Highlights, PlaybackRequest};

#[derive(Serialize)]
struct QueryError {
    kind: &'static str,
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Rendered<'a> {
    title: String,
    file_name: String,
    canvas_width: f64,
    canvas_height: f64,
    commands: Vec<DrawCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    advisory: Option<&'a Advisory>,
}

fn error_to_query_error(e: FretboardError) -> QueryError {
    let kind = match e {
        FretboardError::InvalidRoot(_) => "invalidRoot",
        FretboardError::CatalogError(_) => "catalog",
        FretboardError::ConfigError(_) => "config",
    };
    QueryError {
        kind,
        message: e.to_string(),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js_error(e: FretboardError) -> JsValue {
    match serde_json::to_string(&error_to_query_error(e)) {
        Ok(json) => JsValue::from_str(&json),
        Err(e) => JsValue::from_str(&e.to_string()),
    }
}

/// Compute highlights for a root and optional chord/scale name, as JSON
#[wasm_bindgen]
pub fn compute_highlights(root: &str, chord: Option<String>) -> Result<String, JsValue> {
    let highlights = fretboard::compute_highlights(root, chord.as_deref()).map_err(to_js_error)?;
    to_json(&highlights)
}

/// A rendered fretboard and the highlights currently shown on it.
///
/// Each `display` call replaces the shown highlights as a whole; `click`
/// only ever sees a complete set.
#[wasm_bindgen]
pub struct FretboardView {
    config: FretboardConfig,
    current: Option<Highlights>,
}

impl FretboardView {
    fn board(&self) -> Fretboard<'static> {
        Fretboard::from_config(&self.config)
    }
}

#[wasm_bindgen]
impl FretboardView {
    /// Create a view from optional YAML settings
    #[wasm_bindgen(constructor)]
    pub fn new(config_yaml: Option<String>) -> Result<FretboardView, JsValue> {
        let config = match config_yaml {
            Some(source) => FretboardConfig::from_yaml(&source).map_err(to_js_error)?,
            None => FretboardConfig::default(),
        };
        Ok(FretboardView {
            config,
            current: None,
        })
    }

    /// Grouped chord/scale selector rows as JSON
    pub fn options(&self) -> Result<String, JsValue> {
        to_json(&self.board().catalog().option_list())
    }

    /// Draw instructions for the empty board as JSON
    pub fn blank(&mut self) -> Result<String, JsValue> {
        self.current = None;
        let board = self.board();
        let (canvas_width, canvas_height) = self
            .config
            .layout
            .canvas_size(board.frets(), board.tuning().string_count());
        to_json(&Rendered {
            title: String::new(),
            file_name: export_file_name(""),
            canvas_width,
            canvas_height,
            commands: display_list(&self.config.layout, board.tuning(), board.frets(), &[]),
            advisory: None,
        })
    }

    /// Compute and show highlights, returning the draw instructions as JSON
    pub fn display(&mut self, root: &str, chord: Option<String>) -> Result<String, JsValue> {
        let board = self.board();
        let highlights = board.highlights(root, chord.as_deref()).map_err(to_js_error)?;
        let highlights = self.current.insert(highlights);

        let layout = &self.config.layout;
        let (canvas_width, canvas_height) =
            layout.canvas_size(board.frets(), board.tuning().string_count());
        let title = highlights.title();
        to_json(&Rendered {
            file_name: export_file_name(&title),
            title,
            canvas_width,
            canvas_height,
            commands: display_list(layout, board.tuning(), board.frets(), &highlights.positions),
            advisory: highlights.advisory.as_ref(),
        })
    }

    /// Playback request JSON for the note under (x, y), if any
    pub fn click(&self, x: f64, y: f64) -> Option<String> {
        let highlights = self.current.as_ref()?;
        let position = fretboard::find_position_at(&highlights.positions, &self.config.layout, x, y)?;
        let request = PlaybackRequest::for_position(position, self.config.note_duration);
        serde_json::to_string(&request).ok()
    }
}
