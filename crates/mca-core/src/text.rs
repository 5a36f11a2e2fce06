//! Text helpers shared by the extraction and context crates.

/// Count words in possibly multilingual text.
///
/// Whitespace-delimited tokens count once each, except that every CJK
/// ideograph counts as its own word, since Chinese text carries no spaces.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().map(token_word_count).sum()
}

fn token_word_count(token: &str) -> usize {
    let mut count = 0;
    let mut in_latin_run = false;
    for c in token.chars() {
        if is_cjk(c) {
            count += 1;
            in_latin_run = false;
        } else if c.is_alphanumeric() {
            if !in_latin_run {
                count += 1;
                in_latin_run = true;
            }
        } else {
            in_latin_run = false;
        }
    }
    count
}

/// CJK unified ideographs (basic block and extension A) plus compatibility ideographs.
pub fn is_cjk(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{F900}'..='\u{FAFF}')
}
