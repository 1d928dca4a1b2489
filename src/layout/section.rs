//! Fixed catalog of report sections.

use serde::Serialize;

/// Semantic grouping a form field is displayed under.
///
/// The declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Section {
    Personal,
    Contact,
    Companions,
    UsHistory,
    Family,
    CurrentEmployment,
    PreviousEmployment,
    Education,
    TravelHistory,
    Other,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 10] = [
        Section::Personal,
        Section::Contact,
        Section::Companions,
        Section::UsHistory,
        Section::Family,
        Section::CurrentEmployment,
        Section::PreviousEmployment,
        Section::Education,
        Section::TravelHistory,
        Section::Other,
    ];

    pub fn english(&self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Contact => "Contact Information",
            Self::Companions => "Travel Companions",
            Self::UsHistory => "US History",
            Self::Family => "Family Data",
            Self::CurrentEmployment => "Current Employment",
            Self::PreviousEmployment => "Previous Employment",
            Self::Education => "Education History",
            Self::TravelHistory => "Travel History",
            Self::Other => "Other",
        }
    }

    pub fn arabic(&self) -> &'static str {
        match self {
            Self::Personal => "المعلومات الشخصية",
            Self::Contact => "معلومات الاتصال",
            Self::Companions => "مرافقو السفر",
            Self::UsHistory => "السفر السابق إلى الولايات المتحدة",
            Self::Family => "بيانات العائلة",
            Self::CurrentEmployment => "العمل الحالي",
            Self::PreviousEmployment => "العمل السابق",
            Self::Education => "المؤهلات الدراسية",
            Self::TravelHistory => "سجل السفر",
            Self::Other => "معلومات أخرى",
        }
    }

    /// Heading text shown in rendered documents, e.g. `Family Data / بيانات العائلة`.
    pub fn heading(&self) -> String {
        format!("{} / {}", self.english(), self.arabic())
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        let mut sorted = Section::ALL;
        sorted.sort();
        assert_eq!(sorted, Section::ALL);
        assert_eq!(Section::ALL.last(), Some(&Section::Other));
    }

    #[test]
    fn test_heading_is_bilingual() {
        let heading = Section::Contact.heading();
        assert!(heading.starts_with("Contact Information"));
        assert!(heading.ends_with("معلومات الاتصال"));
    }
}
