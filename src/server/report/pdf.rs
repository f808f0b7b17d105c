//! PDF rendering with `lopdf`.

use lopdf::{
    content::{Content, Operation},
    dictionary, Dictionary, Document, Object, Stream, StringFormat,
};

use crate::server::{
    error::report::ReportError,
    report::{
        document::{ReportDocument, ReportImage},
        layout::{layout, Element, ImageRef, PAGE_HEIGHT, PAGE_WIDTH},
        metrics::{to_win_ansi, Font},
    },
};

pub fn render(doc: &ReportDocument) -> Result<Vec<u8>, ReportError> {
    let pages = layout(doc);
    let mut pdf = Document::with_version("1.5");
    let pages_id = pdf.new_object_id();

    let mut fonts = Dictionary::new();
    for font in [Font::Regular, Font::Bold] {
        let font_id = pdf.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), font_id);
    }

    let mut xobjects = Dictionary::new();
    if let Some(logo) = &doc.logo {
        xobjects.set(image_name(ImageRef::Logo), pdf.add_object(image_stream(logo)));
    }
    for (index, foto) in doc.fotos.iter().enumerate() {
        xobjects.set(
            image_name(ImageRef::Foto(index)),
            pdf.add_object(image_stream(foto)),
        );
    }

    let resources_id = pdf.add_object(dictionary! {
        "Font" => fonts,
        "XObject" => xobjects,
    });

    let mut kids = Vec::with_capacity(pages.len());
    for page in &pages {
        let operations: Vec<_> = page.elements.iter().flat_map(element_operations).collect();
        let content = Content { operations }.encode()?;
        let content_id = pdf.add_object(Stream::new(dictionary! {}, content));
        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::from(page_id));
    }

    let page_count = kids.len() as i64;
    let media_box: Vec<Object> = vec![
        Object::Integer(0),
        Object::Integer(0),
        PAGE_WIDTH.into(),
        PAGE_HEIGHT.into(),
    ];
    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => media_box,
        }),
    );

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    pdf.trailer.set("Root", catalog_id);
    pdf.compress();

    let mut bytes = Vec::new();
    pdf.save_to(&mut bytes)?;
    Ok(bytes)
}

fn image_name(image: ImageRef) -> String {
    match image {
        ImageRef::Logo => "Logo".to_string(),
        ImageRef::Foto(index) => format!("Im{}", index + 1),
    }
}

fn image_stream(image: &ReportImage) -> Stream {
    Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(image.width),
            "Height" => i64::from(image.height),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8_i64,
        },
        image.rgb.clone(),
    )
}

fn element_operations(element: &Element) -> Vec<Operation> {
    match element {
        Element::Text {
            x,
            y,
            font,
            size,
            text,
        } => vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![font.resource_name().into(), (*size).into()]),
            Operation::new("Td", vec![(*x).into(), (*y).into()]),
            Operation::new(
                "Tj",
                vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ],
        Element::Image {
            x,
            y,
            width,
            height,
            image,
        } => vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    (*width).into(),
                    Object::Integer(0),
                    Object::Integer(0),
                    (*height).into(),
                    (*x).into(),
                    (*y).into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(image_name(*image).into_bytes())]),
            Operation::new("Q", vec![]),
        ],
    }
}
