//! DOCX output.
//!
//! Writes a minimal WordprocessingML package. Word lays out right-to-left
//! text natively, so Arabic values are stored in logical order and only
//! flagged: `w:bidi` + right justification on the paragraph, `w:rtl` on any
//! run holding Arabic.

use std::io::{Cursor, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::common::{format_report_date, strip_xml_invalid, Assets, HeaderImage};
use super::{DocumentFormat, DocumentRenderer, RenderError, RenderedDocument, ReportRequest};
use crate::bidi::contains_arabic;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Default Extension="png" ContentType="image/png"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const DOCUMENT_RELS_WITH_IMAGE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="media/header.png"/></Relationships>"#;

const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:eastAsia="Calibri" w:cs="Arial"/><w:sz w:val="22"/><w:szCs w:val="22"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="80"/></w:pPr></w:pPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style><w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:pPr><w:jc w:val="center"/></w:pPr><w:rPr><w:b/><w:bCs/><w:sz w:val="32"/><w:szCs w:val="32"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:pPr><w:keepNext/><w:spacing w:before="240" w:after="120"/></w:pPr><w:rPr><w:b/><w:bCs/><w:color w:val="1F4E79"/><w:sz w:val="26"/><w:szCs w:val="26"/></w:rPr></w:style></w:styles>"#;

const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_PIC: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";

/// Header image width on the page: 6 inches in EMU.
const HEADER_WIDTH_EMU: u64 = 6 * 914_400;

/// Page extent of the header image in EMU, scaled to `HEADER_WIDTH_EMU`.
fn header_extent(image: &HeaderImage) -> (u64, u64) {
    let height = HEADER_WIDTH_EMU * u64::from(image.height) / u64::from(image.width.max(1));
    (HEADER_WIDTH_EMU, height)
}

/// Thin event helpers over the quick-xml writer.
struct XmlOut {
    writer: Writer<Vec<u8>>,
}

impl XmlOut {
    fn new() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
        }
    }

    fn decl(&mut self) -> Result<(), RenderError> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(())
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), RenderError> {
        let element = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Start(element))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<(), RenderError> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), RenderError> {
        let element = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Empty(element))?;
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), RenderError> {
        self.writer
            .write_event(Event::Text(BytesText::new(&strip_xml_invalid(text))))?;
        Ok(())
    }

    fn into_bytes(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

/// Run formatting.
#[derive(Default, Clone, Copy)]
struct RunStyle<'a> {
    bold: bool,
    color: Option<&'a str>,
    rtl: bool,
}

fn write_run(out: &mut XmlOut, text: &str, style: RunStyle<'_>) -> Result<(), RenderError> {
    out.start("w:r", &[])?;
    if style.bold || style.color.is_some() || style.rtl {
        out.start("w:rPr", &[])?;
        if style.bold {
            out.empty("w:b", &[])?;
            out.empty("w:bCs", &[])?;
        }
        if let Some(color) = style.color {
            out.empty("w:color", &[("w:val", color)])?;
        }
        if style.rtl {
            out.empty("w:rtl", &[])?;
        }
        out.end("w:rPr")?;
    }

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.empty("w:br", &[])?;
        }
        out.start("w:t", &[("xml:space", "preserve")])?;
        out.text(line)?;
        out.end("w:t")?;
    }

    out.end("w:r")
}

fn write_styled_paragraph(out: &mut XmlOut, style_id: &str, text: &str) -> Result<(), RenderError> {
    out.start("w:p", &[])?;
    out.start("w:pPr", &[])?;
    out.empty("w:pStyle", &[("w:val", style_id)])?;
    out.end("w:pPr")?;
    write_run(
        out,
        text,
        RunStyle {
            rtl: contains_arabic(text),
            ..RunStyle::default()
        },
    )?;
    out.end("w:p")
}

fn write_field_row(out: &mut XmlOut, label: &str, value: &str) -> Result<(), RenderError> {
    let rtl = contains_arabic(value);
    let label = format!("{label}: ");

    out.start("w:p", &[])?;
    if rtl {
        out.start("w:pPr", &[])?;
        out.empty("w:bidi", &[])?;
        out.empty("w:jc", &[("w:val", "right")])?;
        out.end("w:pPr")?;
    }
    write_run(
        out,
        &label,
        RunStyle {
            bold: true,
            rtl: contains_arabic(&label),
            ..RunStyle::default()
        },
    )?;
    write_run(
        out,
        value.trim(),
        RunStyle {
            color: Some("555555"),
            rtl,
            ..RunStyle::default()
        },
    )?;
    out.end("w:p")
}

fn write_header_image(out: &mut XmlOut, image: &HeaderImage) -> Result<(), RenderError> {
    let (width_emu, height_emu) = header_extent(image);
    let cx = width_emu.to_string();
    let cy = height_emu.to_string();

    out.start("w:p", &[])?;
    out.start("w:pPr", &[])?;
    out.empty("w:jc", &[("w:val", "center")])?;
    out.end("w:pPr")?;
    out.start("w:r", &[])?;
    out.start("w:drawing", &[])?;
    out.start(
        "wp:inline",
        &[("distT", "0"), ("distB", "0"), ("distL", "0"), ("distR", "0")],
    )?;
    out.empty("wp:extent", &[("cx", &cx), ("cy", &cy)])?;
    out.empty("wp:docPr", &[("id", "1"), ("name", "Header")])?;
    out.start("a:graphic", &[("xmlns:a", NS_A)])?;
    out.start(
        "a:graphicData",
        &[("uri", "http://schemas.openxmlformats.org/drawingml/2006/picture")],
    )?;
    out.start("pic:pic", &[("xmlns:pic", NS_PIC)])?;
    out.start("pic:nvPicPr", &[])?;
    out.empty("pic:cNvPr", &[("id", "0"), ("name", "header.png")])?;
    out.empty("pic:cNvPicPr", &[])?;
    out.end("pic:nvPicPr")?;
    out.start("pic:blipFill", &[])?;
    out.empty("a:blip", &[("r:embed", "rId2")])?;
    out.start("a:stretch", &[])?;
    out.empty("a:fillRect", &[])?;
    out.end("a:stretch")?;
    out.end("pic:blipFill")?;
    out.start("pic:spPr", &[])?;
    out.start("a:xfrm", &[])?;
    out.empty("a:off", &[("x", "0"), ("y", "0")])?;
    out.empty("a:ext", &[("cx", &cx), ("cy", &cy)])?;
    out.end("a:xfrm")?;
    out.start("a:prstGeom", &[("prst", "rect")])?;
    out.empty("a:avLst", &[])?;
    out.end("a:prstGeom")?;
    out.end("pic:spPr")?;
    out.end("pic:pic")?;
    out.end("a:graphicData")?;
    out.end("a:graphic")?;
    out.end("wp:inline")?;
    out.end("w:drawing")?;
    out.end("w:r")?;
    out.end("w:p")
}

/// Build `word/document.xml` without a header image.
pub fn document_xml(request: &ReportRequest) -> Result<Vec<u8>, RenderError> {
    build_document_xml(request, None)
}

fn build_document_xml(request: &ReportRequest, header: Option<&HeaderImage>) -> Result<Vec<u8>, RenderError> {
    let mut out = XmlOut::new();
    out.decl()?;
    out.start(
        "w:document",
        &[
            ("xmlns:w", NS_W),
            ("xmlns:r", NS_R),
            ("xmlns:wp", NS_WP),
        ],
    )?;
    out.start("w:body", &[])?;

    if let Some(image) = header {
        write_header_image(&mut out, image)?;
    }

    write_styled_paragraph(&mut out, "Title", &request.title)?;

    out.start("w:p", &[])?;
    out.start("w:pPr", &[])?;
    out.empty("w:jc", &[("w:val", "center")])?;
    out.end("w:pPr")?;
    write_run(
        &mut out,
        &format!("Date: {}", format_report_date(&request.generated_at)),
        RunStyle {
            color: Some("808080"),
            ..RunStyle::default()
        },
    )?;
    out.end("w:p")?;

    for block in request.layout.printable_sections() {
        write_styled_paragraph(&mut out, "Heading2", &block.section.heading())?;
        for row in block.visible_rows() {
            write_field_row(&mut out, &row.label.display(), &row.value)?;
        }
    }

    out.start("w:sectPr", &[])?;
    out.empty("w:pgSz", &[("w:w", "11906"), ("w:h", "16838")])?;
    out.empty(
        "w:pgMar",
        &[
            ("w:top", "1134"),
            ("w:right", "1134"),
            ("w:bottom", "1134"),
            ("w:left", "1134"),
            ("w:header", "708"),
            ("w:footer", "708"),
            ("w:gutter", "0"),
        ],
    )?;
    out.end("w:sectPr")?;

    out.end("w:body")?;
    out.end("w:document")?;
    Ok(out.into_bytes())
}

fn file_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

/// Renders reports to DOCX.
pub struct DocxRenderer {
    assets: Assets,
}

impl DocxRenderer {
    pub fn new(assets: Assets) -> Self {
        Self { assets }
    }
}

impl DocumentRenderer for DocxRenderer {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn render(&self, request: &ReportRequest) -> Result<RenderedDocument, RenderError> {
        let header = self.assets.header_image();
        let document = build_document_xml(request, header.as_ref())?;

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        zip.start_file("[Content_Types].xml", file_options())?;
        zip.write_all(CONTENT_TYPES.as_bytes())?;

        zip.start_file("_rels/.rels", file_options())?;
        zip.write_all(PACKAGE_RELS.as_bytes())?;

        zip.start_file("word/_rels/document.xml.rels", file_options())?;
        let rels = if header.is_some() {
            DOCUMENT_RELS_WITH_IMAGE
        } else {
            DOCUMENT_RELS
        };
        zip.write_all(rels.as_bytes())?;

        zip.start_file("word/styles.xml", file_options())?;
        zip.write_all(STYLES.as_bytes())?;

        zip.start_file("word/document.xml", file_options())?;
        zip.write_all(&document)?;

        if let Some(image) = &header {
            zip.start_file(
                "word/media/header.png",
                SimpleFileOptions::default().compression_method(CompressionMethod::Stored),
            )?;
            zip.write_all(&image.bytes)?;
        }

        let bytes = zip.finish()?.into_inner();
        Ok(RenderedDocument::new(bytes, DocumentFormat::Docx, request))
    }
}
