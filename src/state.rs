use std::path::PathBuf;

use pagescript_layout::TableGrid;
use pagescript_types::{Color, FontSpec, Point, color};

pub const DEFAULT_FONT_SIZE: f32 = 12.0;
pub const DEFAULT_OUTPUT: &str = "out.pdf";

/// Mutable interpreter context, one instance per run. Commands are the
/// only mutators; nothing here is shared across runs.
pub struct LayoutState {
    pub cursor: Point,
    pub font: FontSpec,
    pub font_size: f32,
    pub font_color: Color,
    /// The active table, cleared on every page change.
    pub table: Option<TableGrid>,
    pub output: PathBuf,
}

impl LayoutState {
    pub fn new(page_height: f32, margin: f32) -> Self {
        Self {
            cursor: Point::new(margin, page_height - margin),
            font: FontSpec::default(),
            font_size: DEFAULT_FONT_SIZE,
            font_color: color::BLACK,
            table: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    /// Baseline-to-baseline distance for the current font size.
    pub fn line_height(&self) -> f32 {
        self.font_size * 4.0 / 3.0
    }

    /// Fresh-page state: cursor home, no active table. Font and output
    /// path survive page breaks.
    pub fn start_page(&mut self, page_height: f32, margin: f32) {
        self.cursor = Point::new(margin, page_height - margin);
        self.table = None;
    }
}
