use crate::SyntaxError;

/// One lexed token: a bare word, or a string literal with its escapes
/// already decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Word(String),
    Literal(String),
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Word(s) | Token::Literal(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Token::Word(s) | Token::Literal(s) => s,
        }
    }
}

/// Tokenize one statement. Quoted literals (either form) become a
/// single token; embedded raw line breaks inside `"""..."""` collapse
/// to single spaces, so only `\n` escapes can force a line break in
/// rendered text.
pub fn tokenize(stmt: &str) -> Result<Vec<Token>, SyntaxError> {
    let chars: Vec<char> = stmt.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        if i >= chars.len() {
            break;
        }

        if chars[i] == '"' {
            if chars.get(i + 1) == Some(&'"') && chars.get(i + 2) == Some(&'"') {
                let end = find_triple_close(&chars, i + 3)
                    .ok_or(SyntaxError::UnterminatedTripleString)?;
                let raw: String = chars[i + 3..end]
                    .iter()
                    .filter(|&&c| c != '\r')
                    .map(|&c| if c == '\n' { ' ' } else { c })
                    .collect();
                out.push(Token::Literal(decode(&raw)?));
                i = end + 3;
            } else {
                i += 1;
                let start = i;
                while i < chars.len() {
                    if chars[i] == '"' && chars[i - 1] != '\\' {
                        break;
                    }
                    i += 1;
                }
                if i >= chars.len() {
                    return Err(SyntaxError::UnterminatedString);
                }
                let raw: String = chars[start..i].iter().collect();
                out.push(Token::Literal(decode(&raw)?));
                i += 1; // closing "
            }
        } else {
            let start = i;
            while i < chars.len() && !chars[i].is_whitespace() {
                i += 1;
            }
            out.push(Token::Word(chars[start..i].iter().collect()));
        }
    }
    Ok(out)
}

/// Decode the three supported escapes: `\n`, `\\`, `\"`. Anything else
/// is a syntax error.
fn decode(raw: &str) -> Result<String, SyntaxError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => return Err(SyntaxError::BadEscape(other)),
            None => return Err(SyntaxError::DanglingEscape),
        }
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

    fn words(stmt: &str) -> Vec<String> {
        tokenize(stmt)
            .unwrap()
            .into_iter()
            .map(Token::into_string)
            .collect()
    }

    #[test]
    fn bare_words_split_on_whitespace() {
        assert_eq!(words("font size 12"), vec!["font", "size", "12"]);
    }

    #[test]
    fn quoted_literal_is_one_token() {
        let toks = tokenize(r#"print "hello world""#).unwrap();
        assert_eq!(toks[1], Token::Literal("hello world".into()));
    }

    #[test]
    fn escape_decoding() {
        assert_eq!(words(r#""a\nb""#), vec!["a\nb"]);
        assert_eq!(words(r#""\\""#), vec!["\\"]);
        assert_eq!(words(r#""say \"hi\"""#), vec![r#"say "hi""#]);
    }

    #[test]
    fn unknown_escape_fails() {
        assert_eq!(tokenize(r#"print "\q""#), Err(SyntaxError::BadEscape('q')));
    }

    #[test]
    fn triple_quoted_collapses_raw_newlines_to_spaces() {
        let toks = tokenize("print \"\"\"one\ntwo\r\nthree\"\"\"").unwrap();
        assert_eq!(toks[1], Token::Literal("one two three".into()));
    }

    #[test]
    fn triple_quoted_keeps_escaped_newlines() {
        let toks = tokenize("print \"\"\"one\\ntwo\"\"\"").unwrap();
        assert_eq!(toks[1], Token::Literal("one\ntwo".into()));
    }

    #[test]
    fn unterminated_literals_fail() {
        assert_eq!(tokenize("print \"oops"), Err(SyntaxError::UnterminatedString));
        assert_eq!(
            tokenize("print \"\"\"oops"),
            Err(SyntaxError::UnterminatedTripleString)
        );
    }
}
