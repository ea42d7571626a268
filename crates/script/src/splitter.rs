use crate::SyntaxError;

/// Split a script on `.` characters that occur outside string literals.
///
/// Both literal forms are recognized: `"..."` toggles the in-string
/// flag, `"""..."""` is skipped wholesale (it may span lines and
/// contain unescaped `.` and `"`). The trailing fragment after the last
/// `.` is kept; whitespace-only statements are the caller's to skip.
pub fn split_statements(script: &str) -> Result<Vec<String>, SyntaxError> {
    let chars: Vec<char> = script.chars().collect();
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_str = false;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        if c == '"' && (i == 0 || chars[i - 1] != '\\') {
            if !in_str && chars.get(i + 1) == Some(&'"') && chars.get(i + 2) == Some(&'"') {
                let end = find_triple_close(&chars, i + 3)
                    .ok_or(SyntaxError::UnterminatedTripleString)?;
                cur.extend(&chars[i..end + 3]);
                i = end + 3;
                continue;
            }
            in_str = !in_str;
        }

        if c == '.' && !in_str {
            out.push(std::mem::take(&mut cur));
        } else {
            cur.push(c);
        }
        i += 1;
    }

    if in_str {
        return Err(SyntaxError::UnterminatedString);
    }
    if !cur.is_empty() {
        out.push(cur);
    }
    Ok(out)
}

fn find_triple_close(chars: &[char], from: usize) -> Option<usize> {
    let mut i = from;
    while i + 2 < chars.len() {
        if chars[i] == '"' && chars[i + 1] == '"' && chars[i + 2] == '"' {
            return Some(i);
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_bare_dots() {
        let stmts = split_statements("nextpage. nextpage. nextpage").unwrap();
        assert_eq!(stmts.len(), 3);
    }

    #[test]
    fn dot_inside_quoted_literal_does_not_split() {
        let stmts = split_statements(r#"print "a. b. c". nextpage"#).unwrap();
        assert_eq!(stmts.len(), 2);
        assert_eq!(stmts[0], r#"print "a. b. c""#);
    }

    #[test]
    fn dot_inside_triple_quoted_literal_does_not_split() {
        let script = "print \"\"\"one. two.\nthree.\"\"\". nextpage";
        let stmts = split_statements(script).unwrap();
        assert_eq!(stmts.len(), 2);
    }

    #[test]
    fn rejoining_preserves_statement_count() {
        let script = r#"output "a.pdf". print """x.y""". print "z""#;
        let stmts = split_statements(script).unwrap();
        let rejoined = stmts.join(".");
        assert_eq!(split_statements(&rejoined).unwrap().len(), stmts.len());
    }

    #[test]
    fn unclosed_triple_literal_fails() {
        assert_eq!(
            split_statements("print \"\"\"never closed"),
            Err(SyntaxError::UnterminatedTripleString)
        );
    }

    #[test]
    fn unclosed_single_literal_fails() {
        assert_eq!(
            split_statements("print \"never closed"),
            Err(SyntaxError::UnterminatedString)
        );
    }
}
