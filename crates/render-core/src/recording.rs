//! A backend that records every primitive call instead of drawing.
//! Core-logic tests assert against the captured event stream, so they
//! never depend on real PDF byte output.

use crate::traits::DocumentBackend;
use crate::types::FormControl;
use crate::RenderError;
use pagescript_types::{Color, FontSpec, Point, Rect};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    BeginPage,
    Text {
        font: FontSpec,
        size: f32,
        color: Color,
        x: f32,
        y: f32,
        text: String,
    },
    Rect {
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<(Color, f32)>,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        thickness: f32,
    },
    Image {
        path: PathBuf,
        rect: Rect,
    },
    FormField {
        control: FormControl,
        rect: Rect,
    },
    Finalize {
        path: PathBuf,
    },
}

/// Width model: a fixed advance of `0.6 * size` per character, a fair
/// stand-in for real metrics that keeps wrap behavior predictable in
/// tests.
#[derive(Debug)]
pub struct RecordingBackend {
    pub events: Vec<DrawEvent>,
    page_width: f32,
    page_height: f32,
    /// Natural size reported for any image path.
    pub image_size: (f32, f32),
}

impl RecordingBackend {
    pub fn new() -> Self {
        // A4 in points, same as the real backend.
        Self {
            events: Vec::new(),
            page_width: 595.0,
            page_height: 842.0,
            image_size: (100.0, 100.0),
        }
    }

    pub fn page_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, DrawEvent::BeginPage))
            .count()
    }

    pub fn texts(&self) -> Vec<&DrawEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, DrawEvent::Text { .. }))
            .collect()
    }
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBackend for RecordingBackend {
    fn measure_text(&self, _font: FontSpec, size: f32, text: &str) -> f32 {
        text.chars().count() as f32 * size * 0.6
    }

    fn page_size(&self) -> (f32, f32) {
        (self.page_width, self.page_height)
    }

    fn begin_page(&mut self) -> Result<(), RenderError> {
        self.events.push(DrawEvent::BeginPage);
        Ok(())
    }

    fn draw_text(
        &mut self,
        font: FontSpec,
        size: f32,
        color: Color,
        x: f32,
        y: f32,
        text: &str,
    ) -> Result<(), RenderError> {
        self.events.push(DrawEvent::Text {
            font,
            size,
            color,
            x,
            y,
            text: text.to_string(),
        });
        Ok(())
    }

    fn draw_rect(
        &mut self,
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<(Color, f32)>,
    ) -> Result<(), RenderError> {
        self.events.push(DrawEvent::Rect { rect, fill, stroke });
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        thickness: f32,
    ) -> Result<(), RenderError> {
        self.events.push(DrawEvent::Line { from, to, color, thickness });
        Ok(())
    }

    fn draw_image(&mut self, path: &Path, rect: Rect) -> Result<(), RenderError> {
        self.events.push(DrawEvent::Image { path: path.to_path_buf(), rect });
        Ok(())
    }

    fn image_size(&mut self, _path: &Path) -> Result<(f32, f32), RenderError> {
        Ok(self.image_size)
    }

    fn create_form_field(
        &mut self,
        control: &FormControl,
        rect: Rect,
    ) -> Result<(), RenderError> {
        self.events.push(DrawEvent::FormField { control: control.clone(), rect });
        Ok(())
    }

    fn finalize(&mut self, path: &Path) -> Result<(), RenderError> {
        self.events.push(DrawEvent::Finalize { path: path.to_path_buf() });
        Ok(())
    }
}
