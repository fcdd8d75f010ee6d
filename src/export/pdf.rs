use crate::export::layout::{PageLayout, encode_win_ansi};
use crate::export::photo::EmbeddedImage;
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

/// Points per millimetre.
const MM: f32 = 72.0 / 25.4;

/// A page being drawn: its content stream plus the image XObjects it uses.
pub struct PageCanvas {
    content: Content,
    x_objects: Vec<(String, Ref)>,
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,

    page_w: f32,
    page_h: f32,

    next_id: i32,
    font_id: Ref,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // IDs handed out manually
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),

            // A4
            page_w: 595.0,
            page_h: 842.0,

            next_id,
            font_id,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Horizontal millimetres → points.
    fn x_pt(&self, mm: f32) -> f32 {
        mm * MM
    }

    /// Millimetres from the top edge → points from the bottom edge.
    fn y_pt(&self, mm: f32) -> f32 {
        self.page_h - mm * MM
    }

    pub fn begin_page(&self) -> PageCanvas {
        PageCanvas {
            content: Content::new(),
            x_objects: Vec::new(),
        }
    }

    /// Register an image XObject for the current page and return its resource name.
    pub fn add_image(&mut self, canvas: &mut PageCanvas, image: &EmbeddedImage) -> String {
        let id = self.fresh_ref();
        let name = format!("Im{}", canvas.x_objects.len() + 1);

        let mut xobj = self.pdf.image_xobject(id, &image.data);
        xobj.filter(Filter::FlateDecode);
        xobj.width(image.width as i32);
        xobj.height(image.height as i32);
        xobj.color_space().device_rgb();
        xobj.bits_per_component(8);
        drop(xobj);

        canvas.x_objects.push((name.clone(), id));
        name
    }

    pub fn draw_text(&self, canvas: &mut PageCanvas, x: f32, y: f32, size: f32, text: &str) {
        let bytes = encode_win_ansi(text);
        let content = &mut canvas.content;
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, self.x_pt(x), self.y_pt(y)]);
        content.show(Str(&bytes));
        content.end_text();
    }

    /// Draw a registered image into a box whose top-left corner is (x, y).
    pub fn draw_image(&self, canvas: &mut PageCanvas, name: &str, x: f32, y: f32, w: f32, h: f32) {
        let (w_pt, h_pt) = (w * MM, h * MM);
        let content = &mut canvas.content;
        content.save_state();
        content.transform([w_pt, 0.0, 0.0, h_pt, self.x_pt(x), self.y_pt(y) - h_pt]);
        content.x_object(Name(name.as_bytes()));
        content.restore_state();
    }

    pub fn fill_rect(
        &self,
        canvas: &mut PageCanvas,
        rgb: (f32, f32, f32),
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    ) {
        let (w_pt, h_pt) = (w * MM, h * MM);
        let content = &mut canvas.content;
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(self.x_pt(x), self.y_pt(y) - h_pt, w_pt, h_pt);
        content.fill_nonzero();
        content.restore_state();
    }

    /// Draw every text, swatch and image slot of `layout`.
    ///
    /// `images` pairs with `layout.image_slots` by position.
    pub fn draw_layout(
        &mut self,
        canvas: &mut PageCanvas,
        layout: &PageLayout,
        images: &[EmbeddedImage],
    ) {
        for item in &layout.texts {
            self.draw_text(canvas, item.x, item.y, item.size, &item.text);
        }

        if let Some(s) = &layout.swatch {
            self.fill_rect(canvas, s.rgb, s.x, s.y, s.size, s.size);
        }

        for (slot, image) in layout.image_slots.iter().zip(images) {
            let name = self.add_image(canvas, image);
            self.draw_image(canvas, &name, slot.x, slot.y, slot.w, slot.h);
        }
    }

    /// Write the page object and its content stream.
    pub fn finish_page(&mut self, canvas: PageCanvas) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);

            let mut resources = page.resources();
            resources.fonts().pair(Name(b"F1"), self.font_id);
            if !canvas.x_objects.is_empty() {
                let mut x_objects = resources.x_objects();
                for (name, id) in &canvas.x_objects {
                    x_objects.pair(Name(name.as_bytes()), *id);
                }
            }
        }

        self.pdf.stream(content_id, &canvas.content.finish());
    }

    /// Close the catalog and page tree and return the document bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.iter().copied());
        drop(pages);

        self.pdf.finish()
    }
}
