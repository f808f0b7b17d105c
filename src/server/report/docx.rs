//! DOCX rendering: a minimal WordprocessingML package written with `zip`.

use std::io::{Cursor, Write};

use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::server::{
    error::report::ReportError,
    report::{
        document::{ReportDocument, ReportImage, ReportRow, SEM_COMPONENTES},
        layout::{fit_image, LOGO_SIZE},
    },
};

const EMU_PER_POINT: u64 = 12_700;
const TABLE_HEADER: [&str; 5] = ["Componente", "Estado", "Cor", "Material", "Obs"];

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Default Extension="png" ContentType="image/png"/><Default Extension="jpeg" ContentType="image/jpeg"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const IMAGE_RELATIONSHIP: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Picture stored under `word/media` and referenced from the document body.
struct Media<'a> {
    rel_id: String,
    path: String,
    image: &'a ReportImage,
}

pub fn render(doc: &ReportDocument) -> Result<Vec<u8>, ReportError> {
    let media: Vec<Media> = doc
        .logo
        .iter()
        .chain(doc.fotos.iter())
        .enumerate()
        .map(|(index, image)| Media {
            rel_id: format!("rId{}", index + 1),
            path: format!("media/image{}.{}", index + 1, image.extension),
            image,
        })
        .collect();

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(CONTENT_TYPES.as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(PACKAGE_RELS.as_bytes())?;

    zip.start_file("word/document.xml", options)?;
    zip.write_all(document_xml(doc, &media).as_bytes())?;

    zip.start_file("word/_rels/document.xml.rels", options)?;
    zip.write_all(document_rels(&media).as_bytes())?;

    for item in &media {
        zip.start_file(format!("word/{}", item.path), options)?;
        zip.write_all(&item.image.source)?;
    }

    Ok(zip.finish()?.into_inner())
}

fn document_rels(media: &[Media]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for item in media {
        xml.push_str(&format!(
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            item.rel_id, IMAGE_RELATIONSHIP, item.path
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

fn document_xml(doc: &ReportDocument, media: &[Media]) -> String {
    let mut body = String::new();
    let mut media = media.iter();
    let mut picture_id = 0;
    let mut picture = |item: &Media, width: f32, height: f32| {
        picture_id += 1;
        inline_picture(picture_id, &item.rel_id, width, height)
    };

    if doc.logo.is_some() {
        if let Some(item) = media.next() {
            body.push_str(&centered(&picture(item, LOGO_SIZE, LOGO_SIZE)));
        }
    }

    body.push_str(&paragraph(&doc.title, true, 32));
    for line in &doc.header_lines {
        body.push_str(&paragraph(line, false, 20));
    }

    for section in &doc.sections {
        body.push_str(&paragraph(&section.heading, true, 26));
        if section.rows.is_empty() {
            body.push_str(&paragraph(SEM_COMPONENTES, false, 20));
        } else {
            body.push_str(&table(&section.rows));
        }
    }

    if !doc.fotos.is_empty() {
        body.push_str(&paragraph("Fotos", true, 26));
        for item in media {
            let (width, height) = fit_image(item.image.width, item.image.height);
            body.push_str(&centered(&picture(item, width, height)));
        }
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture"><w:body>{}<w:sectPr><w:pgSz w:w="11906" w:h="16838"/><w:pgMar w:top="1000" w:right="1000" w:bottom="1000" w:left="1000" w:header="708" w:footer="708" w:gutter="0"/></w:sectPr></w:body></w:document>"#,
        body
    )
}

/// Run properties in half-points, as WordprocessingML expects.
fn run(text: &str, bold: bool, half_points: u32) -> String {
    let bold = if bold { "<w:b/>" } else { "" };
    format!(
        r#"<w:r><w:rPr>{}<w:sz w:val="{}"/></w:rPr><w:t xml:space="preserve">{}</w:t></w:r>"#,
        bold,
        half_points,
        escape(text)
    )
}

fn paragraph(text: &str, bold: bool, half_points: u32) -> String {
    format!("<w:p>{}</w:p>", run(text, bold, half_points))
}

fn centered(content: &str) -> String {
    format!(r#"<w:p><w:pPr><w:jc w:val="center"/></w:pPr>{}</w:p>"#, content)
}

fn table(rows: &[ReportRow]) -> String {
    let cell = |text: &str, bold: bool| {
        format!(
            "<w:tc><w:tcPr><w:tcW w:w=\"0\" w:type=\"auto\"/></w:tcPr>{}</w:tc>",
            paragraph(text, bold, 18)
        )
    };

    let mut xml = String::from(
        r#"<w:tbl><w:tblPr><w:tblW w:w="5000" w:type="pct"/><w:tblBorders><w:top w:val="single" w:sz="4"/><w:left w:val="single" w:sz="4"/><w:bottom w:val="single" w:sz="4"/><w:right w:val="single" w:sz="4"/><w:insideH w:val="single" w:sz="4"/><w:insideV w:val="single" w:sz="4"/></w:tblBorders></w:tblPr>"#,
    );

    xml.push_str("<w:tr>");
    for header in TABLE_HEADER {
        xml.push_str(&cell(header, true));
    }
    xml.push_str("</w:tr>");

    for row in rows {
        xml.push_str("<w:tr>");
        for value in [&row.componente, &row.estado, &row.cor, &row.material, &row.obs] {
            xml.push_str(&cell(value.as_str(), false));
        }
        xml.push_str("</w:tr>");
    }

    xml.push_str("</w:tbl><w:p/>");
    xml
}

fn inline_picture(id: u32, rel_id: &str, width: f32, height: f32) -> String {
    let cx = (width.max(1.0) as u64) * EMU_PER_POINT;
    let cy = (height.max(1.0) as u64) * EMU_PER_POINT;
    format!(
        r#"<w:r><w:drawing><wp:inline distT="0" distB="0" distL="0" distR="0"><wp:extent cx="{cx}" cy="{cy}"/><wp:docPr id="{id}" name="Imagem {id}"/><a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture"><pic:pic><pic:nvPicPr><pic:cNvPr id="{id}" name="Imagem {id}"/><pic:cNvPicPr/></pic:nvPicPr><pic:blipFill><a:blip r:embed="{rel_id}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill><pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr></pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing></w:r>"#
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' | '\n' | '\r' => escaped.push(c),
            // Not allowed anywhere in an XML 1.0 document.
            '\u{0}'..='\u{1F}' => {}
            '\u{FFFE}' | '\u{FFFF}' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}
