//! Human-readable labels for field keys.

use super::rules::split_words;

/// Display label of a field, optionally with an Arabic counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLabel {
    pub english: String,
    pub arabic: Option<String>,
}

impl FieldLabel {
    /// Label text as printed in documents.
    pub fn display(&self) -> String {
        match &self.arabic {
            Some(arabic) => format!("{} / {}", self.english, arabic),
            None => self.english.clone(),
        }
    }
}

/// Known fields whose label should not be derived from the key.
///
/// Entries: (raw key, English label, Arabic label).
const DISPLAY_OVERRIDES: &[(&str, &str, Option<&str>)] = &[
    ("FullName", "Full Name (Arabic)", Some("الاسم الكامل")),
    ("FirstName_Arabic", "First Name (Arabic)", Some("الاسم الأول")),
    ("LastName_Arabic", "Last Name (Arabic)", Some("اسم العائلة")),
    ("Current_Workplace", "Current Workplace", Some("جهة العمل الحالية")),
    ("ContactInformation", "Contact Information", Some("معلومات الاتصال")),
    ("MaritalStatus", "Marital Status", Some("الحالة الاجتماعية")),
    ("TravellingWithOthers", "Travelling With Others", Some("هل تسافر مع آخرين")),
    ("HadUSVisaBefore", "Previous U.S. Visa", Some("هل حصلت على تأشيرة أمريكية سابقاً")),
    ("USVisaDenied", "U.S. Visa Ever Refused", Some("هل رُفضت لك تأشيرة أمريكية")),
    ("HasOtherNationality", "Other Nationality", Some("هل تحمل جنسية أخرى")),
    ("Other_Nationality_Passport", "Passport of Other Nationality", Some("جواز سفر الجنسية الأخرى")),
    ("HasOtherPermanentResident", "Permanent Resident of Another Country", Some("هل أنت مقيم دائم في دولة أخرى")),
    ("Second_Degree_Name", "Second Degree", Some("الدرجة العلمية الثانية")),
    ("Second_Degree_University", "Second Degree University", Some("جامعة الدرجة الثانية")),
    ("Second_Degree_Major", "Second Degree Major", Some("تخصص الدرجة الثانية")),
    ("Second_Degree_Year", "Second Degree Graduation Year", Some("سنة التخرج للدرجة الثانية")),
];

/// Resolve the label for a raw key: override table first, then the key's
/// words separated by spaces.
pub fn display_label(key: &str) -> FieldLabel {
    if let Some((_, english, arabic)) = DISPLAY_OVERRIDES.iter().find(|(k, _, _)| *k == key) {
        return FieldLabel {
            english: english.to_string(),
            arabic: arabic.map(str::to_string),
        };
    }

    let words = split_words(key);
    let english = if words.is_empty() {
        key.trim().to_string()
    } else {
        words.join(" ")
    };

    FieldLabel { english, arabic: None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let label = display_label("FullName");
        assert_eq!(label.english, "Full Name (Arabic)");
        assert_eq!(label.arabic.as_deref(), Some("الاسم الكامل"));
        assert_eq!(label.display(), "Full Name (Arabic) / الاسم الكامل");
    }

    #[test]
    fn test_derived_label() {
        assert_eq!(display_label("PassportNumber").english, "Passport Number");
        assert_eq!(display_label("Home_Address").english, "Home Address");
        assert_eq!(display_label("USVisaDenialTime").english, "US Visa Denial Time");
        assert_eq!(display_label("xyz123").display(), "xyz123");
    }
}
