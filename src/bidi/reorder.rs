//! Visual reordering with the Unicode Bidirectional Algorithm.

use unicode_bidi::BidiInfo;

/// Reorder logical text into left-to-right display order, line by line.
///
/// Mixed Arabic/Latin lines keep Latin runs and digits readable, which plain
/// character reversal does not.
pub fn visual_order(text: &str) -> String {
    text.split('\n')
        .map(visual_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn visual_line(line: &str) -> String {
    if line.is_empty() {
        return String::new();
    }

    let info = BidiInfo::new(line, None);
    let mut visual = String::with_capacity(line.len());
    for paragraph in &info.paragraphs {
        let (levels, runs) = info.visual_runs(paragraph, paragraph.range.clone());
        for run in runs {
            let text = &line[run.clone()];
            if levels[run.start].is_rtl() {
                visual.extend(text.chars().rev().map(mirror));
            } else {
                visual.push_str(text);
            }
        }
    }
    visual
}

/// Paired punctuation swaps glyphs inside right-to-left runs.
fn mirror(c: char) -> char {
    match c {
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '<' => '>',
        '>' => '<',
        '«' => '»',
        '»' => '«',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_is_unchanged() {
        assert_eq!(visual_order("Hello, world"), "Hello, world");
    }

    #[test]
    fn test_arabic_run_is_reversed() {
        assert_eq!(visual_order("محمد علي"), "يلع دمحم");
    }

    #[test]
    fn test_numbers_keep_their_order_in_rtl_text() {
        let visual = visual_order("عمري 25 سنة");
        assert!(visual.contains("25"));
        assert!(!visual.contains("52"));
    }

    #[test]
    fn test_brackets_are_mirrored_in_rtl_runs() {
        assert_eq!(visual_order("محمد (علي)"), "(يلع) دمحم");
        assert_eq!(visual_order("Smith (Jr)"), "Smith (Jr)");
    }

    #[test]
    fn test_lines_are_reordered_independently() {
        assert_eq!(visual_order("ab\nمن"), "ab\nنم");
    }
}
