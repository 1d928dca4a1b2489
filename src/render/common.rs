//! Common utilities for document rendering.
//!
//! Shared helpers for report dates, filenames, escaping and bundled assets.

use chrono::{DateTime, Datelike, Local};
use image::ImageReader;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use super::DocumentFormat;

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ARABIC_MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Format a report date in English and Arabic (e.g. "19 October 2026 / 19 أكتوبر 2026").
pub fn format_report_date(at: &DateTime<Local>) -> String {
    let date = at.date_naive();
    let month = (date.month0() as usize).min(ENGLISH_MONTHS.len() - 1);
    let day = date.day();
    let year = date.year();

    format!(
        "{day} {} {year} / {day} {} {year}",
        ENGLISH_MONTHS[month], ARABIC_MONTHS[month]
    )
}

/// Attachment filename: `<prefix>_<epoch-ms>.<ext>`.
pub fn attachment_filename(prefix: &str, at: &DateTime<Local>, format: DocumentFormat) -> String {
    let safe_prefix = sanitize_filename::sanitize(prefix.trim());
    let safe_prefix = if safe_prefix.is_empty() {
        "Submission".to_string()
    } else {
        safe_prefix.replace(' ', "_")
    };
    format!(
        "{}_{}.{}",
        safe_prefix,
        at.timestamp_millis(),
        format.extension()
    )
}

/// Escape special characters for Typst strings.
pub fn escape_typst_string(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace('\n', r"\n")
        .replace('\r', "")
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Drop characters XML 1.0 does not allow (control characters other than
/// tab, newline and carriage return).
pub fn strip_xml_invalid(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

/// Get the bundled static assets directory path.
pub fn get_static_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

/// A header image whose PNG header decoded cleanly.
#[derive(Debug, Clone)]
pub struct HeaderImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl HeaderImage {
    pub fn decode(bytes: Vec<u8>) -> image::ImageResult<Self> {
        let (width, height) = ImageReader::new(Cursor::new(&bytes))
            .with_guessed_format()?
            .into_dimensions()?;
        Ok(Self {
            bytes,
            width,
            height,
        })
    }
}

/// Bundled assets used by the renderers. Every asset is optional.
#[derive(Debug, Clone)]
pub struct Assets {
    pub dir: PathBuf,
    pub include_header_image: bool,
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            dir: get_static_dir().to_path_buf(),
            include_header_image: true,
        }
    }
}

impl Assets {
    pub const HEADER_IMAGE: &'static str = "header.png";
    pub const FONT_DIR: &'static str = "fonts";

    pub fn new(dir: impl Into<PathBuf>, include_header_image: bool) -> Self {
        Self {
            dir: dir.into(),
            include_header_image,
        }
    }

    /// Header image, or `None` when disabled, unreadable or not a PNG.
    pub fn header_image(&self) -> Option<HeaderImage> {
        if !self.include_header_image {
            return None;
        }

        let path = self.dir.join(Self::HEADER_IMAGE);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!(
                    "Header image {} could not be read, continuing without it: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        match HeaderImage::decode(bytes) {
            Ok(image) => Some(image),
            Err(e) => {
                log::warn!(
                    "Header image {} is not a usable PNG, continuing without it: {}",
                    path.display(),
                    e
                );
                None
            }
        }
    }

    /// Directory of bundled fonts, if it exists.
    pub fn font_dir(&self) -> Option<PathBuf> {
        let path = self.dir.join(Self::FONT_DIR);
        if path.is_dir() {
            Some(path)
        } else {
            log::warn!(
                "Font directory {} not found, using default fonts",
                path.display()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_format_report_date() {
        assert_eq!(
            format_report_date(&fixed_time()),
            "19 October 2026 / 19 أكتوبر 2026"
        );
    }

    #[test]
    fn test_attachment_filename() {
        let at = fixed_time();
        let name = attachment_filename("DS-160_Submission", &at, DocumentFormat::Docx);
        assert_eq!(name, format!("DS-160_Submission_{}.docx", at.timestamp_millis()));
    }

    #[test]
    fn test_attachment_filename_sanitizes_prefix() {
        let at = fixed_time();
        assert!(!attachment_filename("../etc/passwd", &at, DocumentFormat::Pdf).contains('/'));
        assert!(attachment_filename("   ", &at, DocumentFormat::Pdf).starts_with("Submission_"));
        assert!(attachment_filename("My Form", &at, DocumentFormat::Text).starts_with("My_Form_"));
    }

    #[test]
    fn test_escape_typst_string() {
        assert_eq!(escape_typst_string(r#"Hello "World""#), r#"Hello \"World\""#);
        assert_eq!(escape_typst_string("Line1\nLine2"), r"Line1\nLine2");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_strip_xml_invalid() {
        assert_eq!(strip_xml_invalid("a\u{0001}b\tc"), "ab\tc");
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        image::RgbaImage::new(width, height)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_header_image_reads_png_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(Assets::HEADER_IMAGE), png_bytes(40, 10)).unwrap();

        let image = Assets::new(dir.path(), true).header_image().unwrap();
        assert_eq!((image.width, image.height), (40, 10));
    }

    #[test]
    fn test_corrupt_header_image_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(Assets::HEADER_IMAGE), b"this is not an image").unwrap();
        assert!(Assets::new(dir.path(), true).header_image().is_none());

        let mut truncated = png_bytes(40, 10);
        truncated.truncate(20);
        fs::write(dir.path().join(Assets::HEADER_IMAGE), truncated).unwrap();
        assert!(Assets::new(dir.path(), true).header_image().is_none());
    }

    #[test]
    fn test_missing_assets_are_optional() {
        let assets = Assets::new("/nonexistent/assets", true);
        assert!(assets.header_image().is_none());
        assert!(assets.font_dir().is_none());
        assert!(Assets::new("/nonexistent/assets", false).header_image().is_none());
    }
}
