use crate::images::{decode_rgb, StagedImage};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};
use std::io::Cursor;
use vitae_render_core::utils::{base14_font_name, flip_y};
use vitae_render_core::{PaintMode, RenderError, Surface};
use vitae_style::FontSpec;
use vitae_types::{Color, Rect, Size};

/// Magic constant for approximating a quarter circle with a cubic Bézier.
const CIRCLE_KAPPA: f32 = 0.552_284_8;

/// A buffering PDF surface.
///
/// Drawing calls append operations to the current page's content stream;
/// `finish()` assembles fonts, images, pages and the catalog into a complete
/// document and serializes it. Output is fully deterministic: resource names
/// are assigned in first-use order and no timestamps are written.
pub struct PdfSurface {
    size: Size,
    completed: Vec<Vec<Operation>>,
    ops: Vec<Operation>,
    /// Registered standard-14 fonts: (PostScript name, resource name).
    fonts: Vec<(&'static str, String)>,
    images: Vec<StagedImage>,
    current_font: Option<(String, f32)>,
}

impl PdfSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            completed: Vec::new(),
            ops: Vec::new(),
            fonts: Vec::new(),
            images: Vec::new(),
            current_font: None,
        }
    }

    /// An ISO A4 surface (595.28 × 841.89 pt).
    pub fn a4() -> Self {
        Self::new(Size::new(595.28, 841.89))
    }

    /// Number of pages the document will have, counting the open one.
    pub fn page_count(&self) -> usize {
        self.completed.len() + 1
    }

    fn font_resource(&mut self, postscript_name: &'static str) -> String {
        if let Some((_, resource)) = self
            .fonts
            .iter()
            .find(|(name, _)| *name == postscript_name)
        {
            return resource.clone();
        }
        let resource = format!("F{}", self.fonts.len() + 1);
        self.fonts.push((postscript_name, resource.clone()));
        resource
    }

    fn push_color(&mut self, op: &str, color: Color) {
        let (r, g, b) = color.to_fractions();
        self.ops
            .push(Operation::new(op, vec![r.into(), g.into(), b.into()]));
    }

    /// Append the four Bézier arcs of a full circle as a path, starting at
    /// the rightmost point. Coordinates are already in PDF space.
    fn push_circle_path(&mut self, cx: f32, cy: f32, r: f32) {
        let k = CIRCLE_KAPPA * r;
        self.ops
            .push(Operation::new("m", vec![(cx + r).into(), cy.into()]));
        self.ops.push(Operation::new(
            "c",
            vec![
                (cx + r).into(),
                (cy + k).into(),
                (cx + k).into(),
                (cy + r).into(),
                cx.into(),
                (cy + r).into(),
            ],
        ));
        self.ops.push(Operation::new(
            "c",
            vec![
                (cx - k).into(),
                (cy + r).into(),
                (cx - r).into(),
                (cy + k).into(),
                (cx - r).into(),
                cy.into(),
            ],
        ));
        self.ops.push(Operation::new(
            "c",
            vec![
                (cx - r).into(),
                (cy - k).into(),
                (cx - k).into(),
                (cy - r).into(),
                cx.into(),
                (cy - r).into(),
            ],
        ));
        self.ops.push(Operation::new(
            "c",
            vec![
                (cx + k).into(),
                (cy - r).into(),
                (cx + r).into(),
                (cy - k).into(),
                (cx + r).into(),
                cy.into(),
            ],
        ));
    }

    fn paint_op(mode: PaintMode) -> &'static str {
        match mode {
            PaintMode::Stroke => "S",
            PaintMode::Fill => "f",
            PaintMode::FillStroke => "B",
        }
    }

    /// Assemble and serialize the document.
    pub fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        let pages: Vec<Vec<Operation>> = {
            let mut pages = std::mem::take(&mut self.completed);
            pages.push(std::mem::take(&mut self.ops));
            pages
        };

        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for (postscript_name, resource) in &self.fonts {
            let single_font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => *postscript_name,
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(resource.as_bytes(), Object::Dictionary(single_font_dict));
        }

        let mut resources = dictionary! {
            "Font" => font_dict,
        };
        if !self.images.is_empty() {
            let mut xobject_dict = Dictionary::new();
            for staged in std::mem::take(&mut self.images) {
                let stream = Stream::new(
                    dictionary! {
                        "Type" => "XObject",
                        "Subtype" => "Image",
                        "Width" => staged.width as i64,
                        "Height" => staged.height as i64,
                        "ColorSpace" => "DeviceRGB",
                        "BitsPerComponent" => 8,
                    },
                    staged.data,
                );
                let stream_id = doc.add_object(Object::Stream(stream));
                xobject_dict.set(staged.name.as_bytes(), Object::Reference(stream_id));
            }
            resources.set("XObject", Object::Dictionary(xobject_dict));
        }
        let resources_id = doc.add_object(Object::Dictionary(resources));

        let mut kids = Vec::with_capacity(pages.len());
        let page_count = pages.len() as i64;
        for operations in pages {
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    0.0.into(),
                    0.0.into(),
                    self.size.width.into(),
                    self.size.height.into(),
                ],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        log::debug!(
            "Serializing PDF: {} page(s), {} font(s)",
            page_count,
            self.fonts.len()
        );

        let mut buffer = Cursor::new(Vec::new());
        doc.save_to(&mut buffer)?;
        Ok(buffer.into_inner())
    }
}

impl Surface for PdfSurface {
    fn page_size(&self) -> Size {
        self.size
    }

    fn set_font(&mut self, font: &FontSpec) {
        let resource = self.font_resource(base14_font_name(font));
        self.current_font = Some((resource, font.size));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.push_color("rg", color);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.push_color("RG", color);
    }

    fn set_line_width(&mut self, width: f32) {
        self.ops.push(Operation::new("w", vec![width.into()]));
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str) {
        let (resource, size) = match &self.current_font {
            Some((resource, size)) => (resource.clone(), *size),
            None => (self.font_resource("Helvetica"), 12.0),
        };
        let baseline = flip_y(y, self.size.height);
        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(Operation::new(
            "Tf",
            vec![resource.as_str().into(), size.into()],
        ));
        self.ops
            .push(Operation::new("Td", vec![x.into(), baseline.into()]));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(
                text.as_bytes().to_vec(),
                StringFormat::Literal,
            )],
        ));
        self.ops.push(Operation::new("ET", vec![]));
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let h = self.size.height;
        self.ops.push(Operation::new(
            "m",
            vec![x1.into(), flip_y(y1, h).into()],
        ));
        self.ops.push(Operation::new(
            "l",
            vec![x2.into(), flip_y(y2, h).into()],
        ));
        self.ops.push(Operation::new("S", vec![]));
    }

    fn draw_rect(&mut self, rect: Rect, mode: PaintMode) {
        let bottom = flip_y(rect.y + rect.height, self.size.height);
        self.ops.push(Operation::new(
            "re",
            vec![
                rect.x.into(),
                bottom.into(),
                rect.width.into(),
                rect.height.into(),
            ],
        ));
        self.ops.push(Operation::new(Self::paint_op(mode), vec![]));
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, mode: PaintMode) {
        let cy = flip_y(cy, self.size.height);
        self.push_circle_path(cx, cy, radius);
        self.ops.push(Operation::new(Self::paint_op(mode), vec![]));
    }

    fn draw_image(&mut self, rect: Rect, data: &[u8]) -> Result<(), RenderError> {
        let (width, height, rgb) = decode_rgb(data)?;
        let name = format!("Im{}", self.images.len() + 1);
        self.images.push(StagedImage {
            name: name.clone(),
            width,
            height,
            data: rgb,
        });

        let bottom = flip_y(rect.y + rect.height, self.size.height);
        self.ops.push(Operation::new("q", vec![]));
        self.ops.push(Operation::new(
            "cm",
            vec![
                rect.width.into(),
                0.0.into(),
                0.0.into(),
                rect.height.into(),
                rect.x.into(),
                bottom.into(),
            ],
        ));
        self.ops
            .push(Operation::new("Do", vec![name.as_str().into()]));
        self.ops.push(Operation::new("Q", vec![]));
        Ok(())
    }

    fn save_state(&mut self) {
        self.ops.push(Operation::new("q", vec![]));
    }

    fn restore_state(&mut self) {
        self.ops.push(Operation::new("Q", vec![]));
    }

    fn clip_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        let cy = flip_y(cy, self.size.height);
        self.push_circle_path(cx, cy, radius);
        self.ops.push(Operation::new("W", vec![]));
        self.ops.push(Operation::new("n", vec![]));
    }

    fn new_page(&mut self) {
        let finished = std::mem::take(&mut self.ops);
        self.completed.push(finished);
        // Graphics state does not survive a page boundary.
        self.current_font = None;
    }
}
