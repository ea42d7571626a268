use crate::RenderError;
use crate::types::FormControl;
use pagescript_types::{Color, FontSpec, Point, Rect};
use std::path::Path;

/// The primitive interface the interpreter drives. Implementors own the
/// document being built and its current page; exactly one page content
/// stream is open at a time — `begin_page` closes the previous page
/// before opening the next, and `finalize` closes the last one and
/// writes the artifact.
///
/// All coordinates are page space: origin at the bottom-left corner,
/// y growing upward.
pub trait DocumentBackend {
    /// Measured width of `text` at the given font and size.
    fn measure_text(&self, font: FontSpec, size: f32, text: &str) -> f32;

    /// Page geometry in points, fixed for the whole document.
    fn page_size(&self) -> (f32, f32);

    fn begin_page(&mut self) -> Result<(), RenderError>;

    /// Draw one line of text with its baseline at `(x, y)`.
    fn draw_text(
        &mut self,
        font: FontSpec,
        size: f32,
        color: Color,
        x: f32,
        y: f32,
        text: &str,
    ) -> Result<(), RenderError>;

    fn draw_rect(
        &mut self,
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<(Color, f32)>,
    ) -> Result<(), RenderError>;

    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        thickness: f32,
    ) -> Result<(), RenderError>;

    /// Draw the image file into `rect`. Unreadable or unsupported
    /// files are a resource error.
    fn draw_image(&mut self, path: &Path, rect: Rect) -> Result<(), RenderError>;

    /// Natural pixel size of the image file, without drawing it. The
    /// backend may cache the loaded file for a subsequent
    /// `draw_image` of the same path.
    fn image_size(&mut self, path: &Path) -> Result<(f32, f32), RenderError>;

    /// Place one form widget. A radio control appends a widget to the
    /// logical field named by its group, creating the field on first
    /// use.
    fn create_form_field(&mut self, control: &FormControl, rect: Rect)
    -> Result<(), RenderError>;

    /// Close the last page and write the document to `path`. The
    /// backend must not be drawn to again afterwards.
    fn finalize(&mut self, path: &Path) -> Result<(), RenderError>;
}
