use std::iter::Peekable;
use std::str::CharIndices;

use logomotion_sourcemap::Span;

/// A maximal run of non-whitespace characters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Character offsets into the scanned source.
    pub span: Span,
}

/// Iterator over the whitespace-delimited tokens of a source. Line breaks count as
/// whitespace.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(source: &'a str) -> Self {
        Tokens {
            source,
            chars: source.char_indices().peekable(),
            pos: 0,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let (start_byte, start) = loop {
            let (idx, c) = self.chars.next()?;
            self.pos += 1;
            if !c.is_whitespace() {
                break (idx, self.pos - 1);
            }
        };

        let mut end_byte = self.source.len();
        while let Some(&(idx, c)) = self.chars.peek() {
            if c.is_whitespace() {
                end_byte = idx;
                break;
            }
            self.chars.next();
            self.pos += 1;
        }

        Some(Token {
            text: &self.source[start_byte..end_byte],
            span: Span::from_bounds(start, self.pos),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Use pretty_assertions for `assert_eq` diffs.
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_any_whitespace() {
        let tokens: Vec<_> = Tokens::new("  fd 100\n\n\trt\u{3000}90 ").collect();
        assert_eq!(
            vec![
                Token { text: "fd", span: Span::new(2, 2) },
                Token { text: "100", span: Span::new(5, 3) },
                Token { text: "rt", span: Span::new(11, 2) },
                Token { text: "90", span: Span::new(14, 2) },
            ],
            tokens
        );
    }

    #[test]
    fn spans_count_characters() {
        let tokens: Vec<_> = Tokens::new("näytä Äiti").collect();
        assert_eq!(Span::new(0, 5), tokens[0].span);
        assert_eq!(Span::new(6, 4), tokens[1].span);
        assert_eq!("Äiti", tokens[1].text);
    }

    #[test]
    fn blank_sources_have_no_tokens() {
        assert_eq!(0, Tokens::new("").count());
        assert_eq!(0, Tokens::new(" \n\t\r\n").count());
    }
}
