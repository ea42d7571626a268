//! A `DocumentBackend` that assembles the PDF in memory with `lopdf`
//! and writes it out on finalize.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};

use pagescript_render_core::{DocumentBackend, FormControl, RenderError};
use pagescript_types::{Color, FontSpec, Point, Rect};

use crate::forms::FormState;
use crate::images::{self, EmbeddedImage, Encoding};
use crate::metrics;

/// A4 portrait, in points.
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;

/// The base-14 fonts use WinAnsi encoding; anything the encoding
/// cannot represent is replaced with `?`.
pub(crate) fn to_win_ansi(s: &str) -> Vec<u8> {
    let mut replaced = 0usize;
    let bytes: Vec<u8> = s
        .chars()
        .map(|c| {
            if c as u32 <= 255 {
                c as u8
            } else {
                replaced += 1;
                b'?'
            }
        })
        .collect();
    if replaced > 0 {
        log::warn!("{replaced} character(s) in {s:?} are outside WinAnsi, replaced with '?'");
    }
    bytes
}

fn pdf_err(e: lopdf::Error) -> RenderError {
    RenderError::Pdf(e.to_string())
}

struct FontResource {
    name: String,
    id: ObjectId,
}

struct ImageResource {
    name: String,
    id: ObjectId,
    width: u32,
    height: u32,
}

/// Operator state for the open content stream, so repeated draws in
/// the same font and color do not re-emit Tf/rg.
#[derive(Default, Clone, PartialEq)]
struct GraphicsState {
    font_name: String,
    font_size: f32,
    fill: Option<Color>,
}

struct PageInProgress {
    id: ObjectId,
    content: Content,
    annotations: Vec<Object>,
    state: GraphicsState,
}

pub struct PdfBackend {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    page: Option<PageInProgress>,
    fonts: HashMap<FontSpec, FontResource>,
    images: HashMap<PathBuf, ImageResource>,
    /// Files read for their size but not yet drawn, so sizing an image
    /// and then drawing it only hits the filesystem once.
    loaded: HashMap<PathBuf, EmbeddedImage>,
    forms: FormState,
}

impl Default for PdfBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBackend {
    pub fn new() -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();
        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            page: None,
            fonts: HashMap::new(),
            images: HashMap::new(),
            loaded: HashMap::new(),
            forms: FormState::new(),
        }
    }

    fn ensure_font(&mut self, spec: FontSpec) -> (String, ObjectId) {
        if let Some(res) = self.fonts.get(&spec) {
            return (res.name.clone(), res.id);
        }
        let dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => spec.postscript_name(),
            "Encoding" => "WinAnsiEncoding",
        };
        let id = self.document.add_object(dict);
        let name = format!("F{}", self.fonts.len() + 1);
        self.fonts.insert(spec, FontResource { name: name.clone(), id });
        (name, id)
    }

    fn ensure_image(&mut self, path: &Path) -> Result<String, RenderError> {
        if let Some(res) = self.images.get(path) {
            return Ok(res.name.clone());
        }
        let img = match self.loaded.remove(path) {
            Some(img) => img,
            None => images::load(path)?,
        };
        log::debug!("embedding image '{}' ({}x{})", path.display(), img.width, img.height);
        let mut dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => img.width as i64,
            "Height" => img.height as i64,
            "ColorSpace" => img.color_space.pdf_name(),
            "BitsPerComponent" => 8,
        };
        match img.encoding {
            Encoding::Dct => {
                dict.set("Filter", "DCTDecode");
            }
            Encoding::FlateWithPngPredictor => {
                dict.set("Filter", "FlateDecode");
                dict.set(
                    "DecodeParms",
                    dictionary! {
                        "Predictor" => 15,
                        "Colors" => i64::from(img.color_space.components()),
                        "BitsPerComponent" => 8,
                        "Columns" => img.width as i64,
                    },
                );
            }
        }
        let (width, height) = (img.width, img.height);
        let id = self.document.add_object(Stream::new(dict, img.data));
        let name = format!("Im{}", self.images.len() + 1);
        self.images
            .insert(path.to_path_buf(), ImageResource { name: name.clone(), id, width, height });
        Ok(name)
    }

    fn page_mut(&mut self) -> Result<&mut PageInProgress, RenderError> {
        self.page
            .as_mut()
            .ok_or_else(|| RenderError::Pdf("no page is open".to_string()))
    }

    fn close_page(&mut self) -> Result<(), RenderError> {
        let Some(page) = self.page.take() else {
            return Ok(());
        };
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&page.content.encode().map_err(pdf_err)?)?;
        let compressed = encoder.finish()?;
        let content_id = self
            .document
            .add_object(Stream::new(dictionary! { "Filter" => "FlateDecode" }, compressed));

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        if !page.annotations.is_empty() {
            page_dict.set("Annots", page.annotations);
        }
        self.document.objects.insert(page.id, Object::Dictionary(page_dict));
        self.page_ids.push(page.id);
        Ok(())
    }
}

fn set_fill(page: &mut PageInProgress, color: Color) {
    if page.state.fill != Some(color) {
        page.content.operations.push(Operation::new(
            "rg",
            vec![
                (f32::from(color.r) / 255.0).into(),
                (f32::from(color.g) / 255.0).into(),
                (f32::from(color.b) / 255.0).into(),
            ],
        ));
        page.state.fill = Some(color);
    }
}

fn set_stroke(page: &mut PageInProgress, color: Color, thickness: f32) {
    page.content.operations.push(Operation::new(
        "RG",
        vec![
            (f32::from(color.r) / 255.0).into(),
            (f32::from(color.g) / 255.0).into(),
            (f32::from(color.b) / 255.0).into(),
        ],
    ));
    page.content.operations.push(Operation::new("w", vec![thickness.into()]));
}

impl DocumentBackend for PdfBackend {
    fn measure_text(&self, font: FontSpec, size: f32, text: &str) -> f32 {
        metrics::text_width(font, size, text)
    }

    fn page_size(&self) -> (f32, f32) {
        (PAGE_WIDTH, PAGE_HEIGHT)
    }

    fn begin_page(&mut self) -> Result<(), RenderError> {
        self.close_page()?;
        self.page = Some(PageInProgress {
            id: self.document.new_object_id(),
            content: Content { operations: vec![] },
            annotations: Vec::new(),
            state: GraphicsState::default(),
        });
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
        let (font_name, _) = self.ensure_font(font);
        let page = self.page_mut()?;
        set_fill(page, color);
        page.content.operations.push(Operation::new("BT", vec![]));
        if page.state.font_name != font_name || page.state.font_size != size {
            page.content.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(font_name.clone().into_bytes()), size.into()],
            ));
            page.state.font_name = font_name;
            page.state.font_size = size;
        }
        page.content.operations.push(Operation::new("Td", vec![x.into(), y.into()]));
        page.content.operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        page.content.operations.push(Operation::new("ET", vec![]));
        Ok(())
    }

    fn draw_rect(
        &mut self,
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<(Color, f32)>,
    ) -> Result<(), RenderError> {
        let page = self.page_mut()?;
        let operands = || -> Vec<Object> {
            vec![rect.x.into(), rect.y.into(), rect.width.into(), rect.height.into()]
        };
        if let Some(color) = fill {
            set_fill(page, color);
            page.content.operations.push(Operation::new("re", operands()));
            page.content.operations.push(Operation::new("f", vec![]));
        }
        if let Some((color, thickness)) = stroke {
            set_stroke(page, color, thickness);
            page.content.operations.push(Operation::new("re", operands()));
            page.content.operations.push(Operation::new("S", vec![]));
        }
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        thickness: f32,
    ) -> Result<(), RenderError> {
        let page = self.page_mut()?;
        set_stroke(page, color, thickness);
        page.content.operations.push(Operation::new("m", vec![from.x.into(), from.y.into()]));
        page.content.operations.push(Operation::new("l", vec![to.x.into(), to.y.into()]));
        page.content.operations.push(Operation::new("S", vec![]));
        Ok(())
    }

    fn draw_image(&mut self, path: &Path, rect: Rect) -> Result<(), RenderError> {
        let name = self.ensure_image(path)?;
        let page = self.page_mut()?;
        page.content.operations.push(Operation::new("q", vec![]));
        page.content.operations.push(Operation::new(
            "cm",
            vec![
                rect.width.into(),
                0.into(),
                0.into(),
                rect.height.into(),
                rect.x.into(),
                rect.y.into(),
            ],
        ));
        page.content.operations.push(Operation::new("Do", vec![Object::Name(name.into_bytes())]));
        page.content.operations.push(Operation::new("Q", vec![]));
        Ok(())
    }

    fn image_size(&mut self, path: &Path) -> Result<(f32, f32), RenderError> {
        if let Some(res) = self.images.get(path) {
            return Ok((res.width as f32, res.height as f32));
        }
        if let Some(img) = self.loaded.get(path) {
            return Ok((img.width as f32, img.height as f32));
        }
        let img = images::load(path)?;
        let size = (img.width as f32, img.height as f32);
        self.loaded.insert(path.to_path_buf(), img);
        Ok(size)
    }

    fn create_form_field(
        &mut self,
        control: &FormControl,
        rect: Rect,
    ) -> Result<(), RenderError> {
        let page_id = self.page_mut()?.id;
        let annot_id = self.forms.place(&mut self.document, control, rect, page_id);
        self.page_mut()?.annotations.push(Object::Reference(annot_id));
        Ok(())
    }

    fn finalize(&mut self, path: &Path) -> Result<(), RenderError> {
        self.close_page()?;

        let mut font_dict = Dictionary::new();
        let helvetica_id = if self.forms.has_fields() {
            Some(self.ensure_font(FontSpec::default()).1)
        } else {
            None
        };
        for res in self.fonts.values() {
            font_dict.set(res.name.clone(), Object::Reference(res.id));
        }
        let mut resources = dictionary! { "Font" => font_dict };
        if !self.images.is_empty() {
            let mut xobjects = Dictionary::new();
            for res in self.images.values() {
                xobjects.set(res.name.clone(), Object::Reference(res.id));
            }
            resources.set("XObject", xobjects);
        }
        self.document
            .objects
            .insert(self.resources_id, Object::Dictionary(resources));

        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i32,
        };
        self.document.objects.insert(self.pages_id, Object::Dictionary(pages));

        let mut catalog = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        if let Some(helvetica_id) = helvetica_id {
            let fields = self.forms.finish(&mut self.document);
            let acroform = self.forms.acroform(fields, helvetica_id);
            let acroform_id = self.document.add_object(acroform);
            catalog.set("AcroForm", acroform_id);
        }
        let catalog_id = self.document.add_object(catalog);
        self.document.trailer.set("Root", catalog_id);

        let mut writer = BufWriter::new(File::create(path)?);
        self.document
            .save_to(&mut writer)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        writer.flush()?;
        Ok(())
    }
}
