/// Greedily wrap `text` into lines no wider than `max_width`.
///
/// Width measurement is injected so the algorithm stays independent of
/// any font technology. Explicit `\n` characters split the text into
/// paragraphs that wrap independently; an empty line is emitted between
/// consecutive paragraphs to preserve the forced break. The result is
/// never empty.
pub fn wrap<F>(measure: F, max_width: f32, text: &str) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut out = Vec::new();
    let parts: Vec<&str> = text.split('\n').collect();
    for (p, part) in parts.iter().enumerate() {
        wrap_paragraph(&measure, max_width, part, &mut out);
        if p < parts.len() - 1 {
            out.push(String::new());
        }
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Scan greedily for the widest prefix that still fits, remembering the
/// last whitespace or hyphen as a break point. When the budget is
/// exceeded, cut at the last break point (a hyphen stays on the line,
/// trailing whitespace does not); with no break point recorded a hard
/// mid-word cut is taken at the last position that fit.
fn wrap_paragraph<F>(measure: &F, max_width: f32, s: &str, out: &mut Vec<String>)
where
    F: Fn(&str) -> f32,
{
    let chars: Vec<char> = s.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        if i >= chars.len() {
            break;
        }

        let start = i;
        let mut last_break: Option<usize> = None;
        let mut pos = i;

        while pos < chars.len() {
            let ch = chars[pos];
            if ch.is_whitespace() || ch == '-' {
                last_break = Some(pos);
            }
            let cand: String = chars[start..=pos].iter().collect();
            if measure(&cand) > max_width {
                break;
            }
            pos += 1;
        }

        if pos >= chars.len() {
            out.push(chars[start..].iter().collect());
            return;
        }

        match last_break {
            Some(brk) if brk >= start => {
                let cut = if chars[brk] == '-' { brk + 1 } else { brk };
                out.push(rtrim(&chars[start..cut]));
                i = brk + 1;
            }
            _ => {
                // Unbreakable word wider than the budget: hard cut, but
                // always consume at least one character.
                let cut = pos.max(start + 1);
                out.push(chars[start..cut].iter().collect());
                i = cut;
            }
        }
    }
}

fn rtrim(chars: &[char]) -> String {
    let mut end = chars.len();
    while end > 0 && chars[end - 1].is_whitespace() {
        end -= 1;
    }
    chars[..end].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-advance measure: 10 units per char.
    fn measure(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn empty_input_yields_one_empty_line() {
        assert_eq!(wrap(measure, 100.0, ""), vec![""]);
    }

    #[test]
    fn short_text_is_a_single_line() {
        assert_eq!(wrap(measure, 200.0, "hello world"), vec!["hello world"]);
    }

    #[test]
    fn breaks_at_whitespace() {
        let lines = wrap(measure, 60.0, "hello world");
        assert_eq!(lines, vec!["hello", "world"]);
    }

    #[test]
    fn hyphen_stays_on_the_line() {
        let lines = wrap(measure, 60.0, "self-aware");
        assert_eq!(lines, vec!["self-", "aware"]);
    }

    #[test]
    fn unbreakable_word_gets_a_hard_cut() {
        let lines = wrap(measure, 40.0, "abcdefghij");
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn explicit_newline_inserts_an_empty_line() {
        let lines = wrap(measure, 200.0, "one\ntwo");
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn no_trailing_empty_line_after_last_paragraph() {
        let lines = wrap(measure, 200.0, "one\n");
        assert_eq!(lines, vec!["one", ""]);
    }

    #[test]
    fn lines_never_exceed_budget_when_words_fit() {
        let text = "the quick brown fox jumps over the lazy dog";
        for &w in &[40.0, 60.0, 90.0, 150.0] {
            for line in wrap(measure, w, text) {
                assert!(measure(&line) <= w, "'{}' exceeds {}", line, w);
            }
        }
    }
}
