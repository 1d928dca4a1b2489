//! Groups submitted fields into report sections.

use std::collections::BTreeMap;

use super::countries::arabic_country_name;
use super::labels::{display_label, FieldLabel};
use super::rules::{classify, normalize_key};
use super::section::Section;
use crate::submission::models::{FieldValue, Submission};

/// A single field as it appears in the report.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRow {
    pub key: String,
    pub label: FieldLabel,
    pub value: String,
}

impl FieldRow {
    /// Blank rows keep their place in the layout but are never printed.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// A section and the fields assigned to it, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBlock {
    pub section: Section,
    pub rows: Vec<FieldRow>,
}

impl SectionBlock {
    pub fn visible_rows(&self) -> impl Iterator<Item = &FieldRow> {
        self.rows.iter().filter(|row| !row.is_blank())
    }

    pub fn has_visible_rows(&self) -> bool {
        self.visible_rows().next().is_some()
    }
}

/// Ordered, non-empty sections built from a submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub sections: Vec<SectionBlock>,
}

impl Layout {
    /// Sections with at least one printable row, in canonical order.
    pub fn printable_sections(&self) -> impl Iterator<Item = &SectionBlock> {
        self.sections.iter().filter(|block| block.has_visible_rows())
    }

    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|block| block.rows.len()).sum()
    }

    pub fn visible_row_count(&self) -> usize {
        self.sections
            .iter()
            .map(|block| block.visible_rows().count())
            .sum()
    }

    pub fn section(&self, section: Section) -> Option<&SectionBlock> {
        self.sections.iter().find(|block| block.section == section)
    }
}

/// Display value of a field, with Arabic country names added to known
/// country answers.
pub fn display_value(key: &str, value: &FieldValue) -> String {
    let text = value.display();
    if !is_country_field(key) {
        return text;
    }

    match value {
        FieldValue::Text(name) => localize_country(name).unwrap_or(text),
        FieldValue::List(names) => names
            .iter()
            .flatten()
            .map(|name| localize_country(name).unwrap_or_else(|| name.clone()))
            .collect::<Vec<_>>()
            .join(", "),
        _ => text,
    }
}

fn is_country_field(key: &str) -> bool {
    let normalized = normalize_key(key);
    normalized
        .split('_')
        .any(|token| token.starts_with("nationalit") || token.starts_with("countr") || token.starts_with("resident"))
}

fn localize_country(name: &str) -> Option<String> {
    arabic_country_name(name).map(|arabic| format!("{} ({})", name.trim(), arabic))
}

/// Classify every non-metadata field and emit the non-empty sections in
/// canonical order.
pub fn assemble(submission: &Submission) -> Layout {
    let mut buckets: BTreeMap<Section, Vec<FieldRow>> = BTreeMap::new();

    for field in submission.data_fields() {
        let row = FieldRow {
            key: field.key.clone(),
            label: display_label(&field.key),
            value: display_value(&field.key, &field.value),
        };
        buckets.entry(classify(&field.key)).or_default().push(row);
    }

    Layout {
        sections: buckets
            .into_iter()
            .map(|(section, rows)| SectionBlock { section, rows })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_fields_are_localized() {
        assert_eq!(
            display_value("Nationality", &FieldValue::from("Egypt")),
            "Egypt (مصر)"
        );
        assert_eq!(
            display_value(
                "CountriesVisited",
                &FieldValue::List(vec![Some("Jordan".into()), None, Some("Narnia".into())])
            ),
            "Jordan (الأردن), Narnia"
        );
    }

    #[test]
    fn test_non_country_fields_untouched() {
        assert_eq!(display_value("City", &FieldValue::from("Egypt")), "Egypt");
    }

    #[test]
    fn test_blank_row() {
        let row = FieldRow {
            key: "Notes".into(),
            label: display_label("Notes"),
            value: "   ".into(),
        };
        assert!(row.is_blank());
    }
}
