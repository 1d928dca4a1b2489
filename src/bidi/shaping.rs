//! Contextual Arabic shaping into Unicode presentation forms.
//!
//! Output targets renderers that draw code points one by one without a
//! shaping engine: each letter is replaced by its isolated, final, initial or
//! medial presentation form, and lam-alef pairs by their ligature.

/// Presentation forms of a letter: (isolated, final, initial, medial).
/// Right-joining letters have no initial/medial form.
struct Forms {
    isolated: char,
    fin: char,
    initial: Option<char>,
    medial: Option<char>,
}

const fn dual(isolated: char, fin: char, initial: char, medial: char) -> Forms {
    Forms {
        isolated,
        fin,
        initial: Some(initial),
        medial: Some(medial),
    }
}

const fn right(isolated: char, fin: char) -> Forms {
    Forms {
        isolated,
        fin,
        initial: None,
        medial: None,
    }
}

fn forms(ch: char) -> Option<Forms> {
    let forms = match ch {
        'آ' => right('\u{FE81}', '\u{FE82}'),
        'أ' => right('\u{FE83}', '\u{FE84}'),
        'ؤ' => right('\u{FE85}', '\u{FE86}'),
        'إ' => right('\u{FE87}', '\u{FE88}'),
        'ئ' => dual('\u{FE89}', '\u{FE8A}', '\u{FE8B}', '\u{FE8C}'),
        'ا' => right('\u{FE8D}', '\u{FE8E}'),
        'ب' => dual('\u{FE8F}', '\u{FE90}', '\u{FE91}', '\u{FE92}'),
        'ة' => right('\u{FE93}', '\u{FE94}'),
        'ت' => dual('\u{FE95}', '\u{FE96}', '\u{FE97}', '\u{FE98}'),
        'ث' => dual('\u{FE99}', '\u{FE9A}', '\u{FE9B}', '\u{FE9C}'),
        'ج' => dual('\u{FE9D}', '\u{FE9E}', '\u{FE9F}', '\u{FEA0}'),
        'ح' => dual('\u{FEA1}', '\u{FEA2}', '\u{FEA3}', '\u{FEA4}'),
        'خ' => dual('\u{FEA5}', '\u{FEA6}', '\u{FEA7}', '\u{FEA8}'),
        'د' => right('\u{FEA9}', '\u{FEAA}'),
        'ذ' => right('\u{FEAB}', '\u{FEAC}'),
        'ر' => right('\u{FEAD}', '\u{FEAE}'),
        'ز' => right('\u{FEAF}', '\u{FEB0}'),
        'س' => dual('\u{FEB1}', '\u{FEB2}', '\u{FEB3}', '\u{FEB4}'),
        'ش' => dual('\u{FEB5}', '\u{FEB6}', '\u{FEB7}', '\u{FEB8}'),
        'ص' => dual('\u{FEB9}', '\u{FEBA}', '\u{FEBB}', '\u{FEBC}'),
        'ض' => dual('\u{FEBD}', '\u{FEBE}', '\u{FEBF}', '\u{FEC0}'),
        'ط' => dual('\u{FEC1}', '\u{FEC2}', '\u{FEC3}', '\u{FEC4}'),
        'ظ' => dual('\u{FEC5}', '\u{FEC6}', '\u{FEC7}', '\u{FEC8}'),
        'ع' => dual('\u{FEC9}', '\u{FECA}', '\u{FECB}', '\u{FECC}'),
        'غ' => dual('\u{FECD}', '\u{FECE}', '\u{FECF}', '\u{FED0}'),
        'ـ' => dual('\u{0640}', '\u{0640}', '\u{0640}', '\u{0640}'),
        'ف' => dual('\u{FED1}', '\u{FED2}', '\u{FED3}', '\u{FED4}'),
        'ق' => dual('\u{FED5}', '\u{FED6}', '\u{FED7}', '\u{FED8}'),
        'ك' => dual('\u{FED9}', '\u{FEDA}', '\u{FEDB}', '\u{FEDC}'),
        'ل' => dual('\u{FEDD}', '\u{FEDE}', '\u{FEDF}', '\u{FEE0}'),
        'م' => dual('\u{FEE1}', '\u{FEE2}', '\u{FEE3}', '\u{FEE4}'),
        'ن' => dual('\u{FEE5}', '\u{FEE6}', '\u{FEE7}', '\u{FEE8}'),
        'ه' => dual('\u{FEE9}', '\u{FEEA}', '\u{FEEB}', '\u{FEEC}'),
        'و' => right('\u{FEED}', '\u{FEEE}'),
        'ى' => right('\u{FEEF}', '\u{FEF0}'),
        'ي' => dual('\u{FEF1}', '\u{FEF2}', '\u{FEF3}', '\u{FEF4}'),
        'پ' => dual('\u{FB56}', '\u{FB57}', '\u{FB58}', '\u{FB59}'),
        'چ' => dual('\u{FB7A}', '\u{FB7B}', '\u{FB7C}', '\u{FB7D}'),
        'ژ' => right('\u{FB8A}', '\u{FB8B}'),
        'ک' => dual('\u{FB8E}', '\u{FB8F}', '\u{FB90}', '\u{FB91}'),
        'گ' => dual('\u{FB92}', '\u{FB93}', '\u{FB94}', '\u{FB95}'),
        'ی' => dual('\u{FBFC}', '\u{FBFD}', '\u{FBFE}', '\u{FBFF}'),
        _ => return None,
    };
    Some(forms)
}

/// Lam-alef ligature (isolated, final) for the alef following a lam.
fn lam_alef(alef: char) -> Option<(char, char)> {
    match alef {
        'آ' => Some(('\u{FEF5}', '\u{FEF6}')),
        'أ' => Some(('\u{FEF7}', '\u{FEF8}')),
        'إ' => Some(('\u{FEF9}', '\u{FEFA}')),
        'ا' => Some(('\u{FEFB}', '\u{FEFC}')),
        _ => None,
    }
}

/// Harakat and other marks that do not break joining.
fn is_transparent(ch: char) -> bool {
    matches!(ch, '\u{0610}'..='\u{061A}' | '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{06D6}'..='\u{06DC}' | '\u{06DF}'..='\u{06E4}')
}

fn joins_forward(ch: char) -> bool {
    forms(ch).is_some_and(|f| f.initial.is_some())
}

fn joins_backward(ch: char) -> bool {
    forms(ch).is_some()
}

fn previous_letter(chars: &[char], index: usize) -> Option<char> {
    chars[..index].iter().rev().find(|c| !is_transparent(**c)).copied()
}

fn next_letter(chars: &[char], index: usize) -> Option<(usize, char)> {
    chars
        .iter()
        .enumerate()
        .skip(index + 1)
        .find(|(_, c)| !is_transparent(**c))
        .map(|(i, c)| (i, *c))
}

/// Replace Arabic letters with their contextual presentation forms.
/// Text without Arabic letters is returned unchanged.
pub fn shape(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut shaped = String::with_capacity(text.len());
    let mut index = 0;

    while index < chars.len() {
        let ch = chars[index];
        let Some(letter) = forms(ch) else {
            shaped.push(ch);
            index += 1;
            continue;
        };

        let joined_before = previous_letter(&chars, index).is_some_and(joins_forward);
        let next = next_letter(&chars, index);

        if ch == 'ل' {
            if let Some((ligature, (next_index, _))) =
                next.and_then(|(i, c)| lam_alef(c).map(|lig| (lig, (i, c))))
            {
                shaped.push(if joined_before { ligature.1 } else { ligature.0 });
                // Keep any marks that sat between lam and alef.
                shaped.extend(&chars[index + 1..next_index]);
                index = next_index + 1;
                continue;
            }
        }

        let joined_after = letter.initial.is_some() && next.is_some_and(|(_, c)| joins_backward(c));

        let form = match (joined_before, joined_after) {
            (true, true) => letter.medial.unwrap_or(letter.fin),
            (true, false) => letter.fin,
            (false, true) => letter.initial.unwrap_or(letter.isolated),
            (false, false) => letter.isolated,
        };
        shaped.push(form);
        index += 1;
    }

    shaped
}
