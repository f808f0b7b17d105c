//! Page layout of the PDF report.
//!
//! Coordinates are PDF user space: points, origin at the bottom-left corner, text
//! positioned by its baseline.

use std::mem;

use crate::server::report::{
    document::{ReportDocument, SEM_COMPONENTES},
    metrics::{text_width, Font},
};

pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;
pub const MARGIN: f32 = 50.0;
pub const USABLE_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
pub const LOGO_SIZE: f32 = 125.0;
pub const MAX_IMAGE_HEIGHT: f32 = 300.0;

const LOGO_TOP_OFFSET: f32 = 5.0;
const TITLE_SIZE: f32 = 16.0;
const HEADING_SIZE: f32 = 13.0;
const BODY_SIZE: f32 = 10.0;
const SMALL_SIZE: f32 = 8.0;
const LEADING: f32 = 1.4;
const BLOCK_GAP: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRef {
    Logo,
    /// Index into [`ReportDocument::fotos`].
    Foto(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text {
        x: f32,
        y: f32,
        font: Font,
        size: f32,
        text: String,
    },
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        image: ImageRef,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub elements: Vec<Element>,
}

/// Splits `text` into lines no wider than `max_width`. Words that do not fit on a
/// line of their own are broken between characters.
pub fn wrap_text(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let fits = |s: &str| text_width(s, font, size) <= max_width;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if fits(&candidate) {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(mem::take(&mut current));
        }

        if fits(word) {
            current = word.to_string();
            continue;
        }

        for c in word.chars() {
            current.push(c);
            if !fits(&current) && current.chars().count() > 1 {
                current.pop();
                lines.push(mem::replace(&mut current, c.to_string()));
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Size of an image scaled to the usable width and [`MAX_IMAGE_HEIGHT`], never enlarged.
pub fn fit_image(width: u32, height: u32) -> (f32, f32) {
    let (width, height) = (width.max(1) as f32, height.max(1) as f32);
    let scale = (USABLE_WIDTH / width)
        .min(MAX_IMAGE_HEIGHT / height)
        .min(1.0);

    (width * scale, height * scale)
}

struct PageWriter<'a> {
    vistoria_id: &'a str,
    finished: Vec<Page>,
    current: Page,
    /// Top of the free area on the current page.
    y: f32,
}

impl<'a> PageWriter<'a> {
    fn new(vistoria_id: &'a str) -> Self {
        Self {
            vistoria_id,
            finished: Vec::new(),
            current: Page::default(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn ensure(&mut self, height: f32) {
        if self.y - height < MARGIN {
            self.new_page();
        }
    }

    fn new_page(&mut self) {
        self.finished.push(mem::take(&mut self.current));

        let header = format!(
            "Vistoria {} — página {}",
            self.vistoria_id,
            self.finished.len() + 1
        );
        let top = PAGE_HEIGHT - MARGIN;
        self.current.elements.push(Element::Text {
            x: MARGIN,
            y: top - SMALL_SIZE,
            font: Font::Regular,
            size: SMALL_SIZE,
            text: header,
        });
        self.y = top - SMALL_SIZE * LEADING - BLOCK_GAP;
    }

    fn line(&mut self, text: String, font: Font, size: f32) {
        let height = size * LEADING;
        self.ensure(height);
        self.current.elements.push(Element::Text {
            x: MARGIN,
            y: self.y - size,
            font,
            size,
            text,
        });
        self.y -= height;
    }

    fn paragraph(&mut self, text: &str, font: Font, size: f32) {
        for line in wrap_text(text, font, size, USABLE_WIDTH) {
            self.line(line, font, size);
        }
    }

    fn gap(&mut self) {
        self.y -= BLOCK_GAP;
    }

    fn image(&mut self, width: f32, height: f32, image: ImageRef) {
        self.ensure(height);
        self.current.elements.push(Element::Image {
            x: MARGIN + (USABLE_WIDTH - width) / 2.0,
            y: self.y - height,
            width,
            height,
            image,
        });
        self.y -= height + BLOCK_GAP;
    }

    fn finish(mut self) -> Vec<Page> {
        self.finished.push(self.current);

        let total = self.finished.len();
        for (index, page) in self.finished.iter_mut().enumerate() {
            let text = format!("{} / {}", index + 1, total);
            let x = (PAGE_WIDTH - text_width(&text, Font::Regular, SMALL_SIZE)) / 2.0;
            page.elements.push(Element::Text {
                x,
                y: MARGIN / 2.0,
                font: Font::Regular,
                size: SMALL_SIZE,
                text,
            });
        }

        self.finished
    }
}

/// Places the report content on A4 pages.
pub fn layout(doc: &ReportDocument) -> Vec<Page> {
    let mut writer = PageWriter::new(&doc.vistoria_id);

    if doc.logo.is_some() {
        let y = PAGE_HEIGHT - LOGO_TOP_OFFSET - LOGO_SIZE;
        writer.current.elements.push(Element::Image {
            x: (PAGE_WIDTH - LOGO_SIZE) / 2.0,
            y,
            width: LOGO_SIZE,
            height: LOGO_SIZE,
            image: ImageRef::Logo,
        });
        writer.y = y - BLOCK_GAP;
    }

    writer.paragraph(&doc.title, Font::Bold, TITLE_SIZE);
    writer.gap();
    for line in &doc.header_lines {
        writer.paragraph(line, Font::Regular, BODY_SIZE);
    }

    for section in &doc.sections {
        writer.gap();
        // Keep the heading together with its first line.
        writer.ensure(HEADING_SIZE * LEADING + BODY_SIZE * LEADING);
        writer.paragraph(&section.heading, Font::Bold, HEADING_SIZE);

        if section.rows.is_empty() {
            writer.paragraph(SEM_COMPONENTES, Font::Regular, BODY_SIZE);
        }
        for row in &section.rows {
            writer.paragraph(&row.line(), Font::Regular, BODY_SIZE);
        }
    }

    if !doc.fotos.is_empty() {
        writer.gap();
        writer.paragraph("Fotos", Font::Bold, HEADING_SIZE);
        for (index, foto) in doc.fotos.iter().enumerate() {
            let (width, height) = fit_image(foto.width, foto.height);
            writer.image(width, height, ImageRef::Foto(index));
        }
    }

    writer.finish()
}
