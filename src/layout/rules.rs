//! Field classification rule table.
//!
//! Keys are normalised into lowercase word tokens joined by `_` before any
//! rule is tested, so patterns can anchor on token boundaries instead of
//! matching loose substrings (`status` never hits the `us` token).

use lazy_static::lazy_static;
use regex::Regex;

use super::section::Section;

/// One entry of the ordered rule table.
#[derive(Debug)]
pub struct ClassificationRule {
    pub section: Section,
    pub pattern: Regex,
}

impl ClassificationRule {
    fn new(section: Section, pattern: &str) -> Self {
        Self {
            section,
            pattern: Regex::new(pattern).expect("classification pattern must compile"),
        }
    }

    pub fn matches(&self, normalized_key: &str) -> bool {
        self.pattern.is_match(normalized_key)
    }
}

// Patterns run against `normalize_key` output. `(?:^|_)` / `(?:_|$)` are the
// token boundaries; a stem without the trailing boundary matches as a token
// prefix (`birth` hits `birthdate`).
const PERSONAL: &str = concat!(
    r"^full_?name$",
    r"|^(?:full|first|last|middle|given|family|maiden|other)?_?names?(?:_|$)",
    r"|(?:^|_)(?:dob|gender|sex|age)(?:_|$)",
    r"|^place(?:_|$)",
    r"|(?:^|_)(?:birth|nationalit|marital|passport|surname|resident|residency|national_id)",
);

// Keys whose subject is a relative (`SpouseNationality`, `FatherDateOfBirth`).
// Checked before the personal rule so the relative's details stay in Family.
const RELATIVE_SUBJECT: &str = concat!(
    r"^(?:father|mother|spouse|husband|wife|son|daughter|child|children|sibling|brother|sister|parent)s?",
    r"(?:_|$)",
);

const CONTACT: &str = concat!(
    r"(?:^|_)(?:tel|fax|city|state|zip)(?:_|$)",
    r"|(?:^|_)(?:e_?mail|mail|phone|mobile|telephone|address|postal|contact|social|whatsapp)",
);

const COMPANIONS: &str = r"(?:^|_)(?:companion|travell?ing_with|accompan|group_travel)";

const US_HISTORY: &str = concat!(
    r"(?:^|_)(?:us|usa|u_s)(?:_|$)",
    r"|(?:^|_)(?:visa|denied|denial|refus|esta|deport|overstay)",
);

const FAMILY: &str = concat!(
    r"(?:^|_)(?:son|wife|kin)(?:_|$)",
    r"|(?:^|_)(?:father|mother|spouse|husband|child|sibling|brother|sister|relative|family|parent|daughter|married|widow|divorc|marriage)",
    r"|الأب|الاب|الأم|الام|الزوج|الزوجة|الأبناء|الابن|الابنة|الأخ|الأخت|أقارب|الأقارب",
);

const CURRENT_EMPLOYMENT: &str = concat!(
    r"(?:^|_)(?:current|present)(?:_|$)",
    r"|^(?:employer|employment|occupation|job|work|salary|income|company|position|duties)",
);

const PREVIOUS_EMPLOYMENT: &str = r"(?:^|_)(?:prev|previous|previously|former|past)(?:_|$)";

const EDUCATION: &str = concat!(
    r"(?:^|_)(?:educat|school|universit|college|degree|graduat|stud|institut|qualification|diploma|course)",
    r"|(?:^|_)major(?:_|$)",
);

const TRAVEL_HISTORY: &str = concat!(
    r"(?:^|_)(?:travel|trip|visited|countr|abroad|arrival|departure|destination|itinerary)",
);

lazy_static! {
    /// Ordered rule table; the first matching rule decides the section.
    pub static ref RULES: Vec<ClassificationRule> = vec![
        ClassificationRule::new(Section::Family, RELATIVE_SUBJECT),
        ClassificationRule::new(Section::Personal, PERSONAL),
        ClassificationRule::new(Section::Contact, CONTACT),
        ClassificationRule::new(Section::Companions, COMPANIONS),
        ClassificationRule::new(Section::UsHistory, US_HISTORY),
        ClassificationRule::new(Section::Family, FAMILY),
        ClassificationRule::new(Section::CurrentEmployment, CURRENT_EMPLOYMENT),
        ClassificationRule::new(Section::PreviousEmployment, PREVIOUS_EMPLOYMENT),
        ClassificationRule::new(Section::Education, EDUCATION),
        ClassificationRule::new(Section::TravelHistory, TRAVEL_HISTORY),
    ];
}

/// Split a raw field key into words.
///
/// Breaks on `_`, `-`, `.`, whitespace, lower-to-upper transitions and the
/// end of an acronym, so `USVisaDenied` yields `US`, `Visa`, `Denied`.
pub fn split_words(key: &str) -> Vec<String> {
    let chars: Vec<char> = key.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '_' || ch == '-' || ch == '.' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if ch.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(ch);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Normalise a raw key into lowercase `_`-joined tokens.
pub fn normalize_key(key: &str) -> String {
    split_words(key)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Classify a raw field key. Pure and deterministic.
pub fn classify(key: &str) -> Section {
    let normalized = normalize_key(key);
    RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.section)
        .unwrap_or(Section::Other)
}
