use std::fmt;

use log::trace;

/// Character reported by the end-of-input token.
pub const END_OF_INPUT: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenClass {
    /// No token has been produced yet
    #[default]
    Invalid,
    EndOfInput,
    /// 0-9
    Digit,
    /// Anything else: operators, parentheses, garbage
    Char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub class: TokenClass,
    pub character: char,
    pub line: usize,
}

impl Default for Token {
    fn default() -> Self {
        Self {
            class: TokenClass::Invalid,
            character: '\0',
            line: 0,
        }
    }
}

impl Token {
    pub fn is_end_of_input(&self) -> bool {
        self.class == TokenClass::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = match self.class {
            TokenClass::Invalid => "INVALID",
            TokenClass::EndOfInput => "EOF",
            TokenClass::Digit => "DIGIT",
            TokenClass::Char => "CHAR",
        };
        write!(f, "{} - {}", class, self.character)
    }
}

/// On-demand tokenizer over a multi-line source.
///
/// Every token is a single character, so spaces are removed from the
/// source up front and the rest is split into lines.
pub struct Lexer {
    lines: Vec<Vec<char>>,
    line_index: usize,
    char_index: usize,
    current: Token,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        let lines = source
            .replace(' ', "")
            .split('\n')
            .map(|line| line.chars().collect())
            .collect();

        Self {
            lines,
            line_index: 0,
            char_index: 0,
            current: Token::default(),
        }
    }

    /// Last token returned by `next_token`.
    pub fn current_token(&self) -> Token {
        self.current
    }

    pub fn next_token(&mut self) -> Token {
        let token = loop {
            let Some(line) = self.lines.get(self.line_index) else {
                // The cursor never moves past the last line, so every call
                // after this one lands here again.
                break Token {
                    class: TokenClass::EndOfInput,
                    character: END_OF_INPUT,
                    line: self.lines.len().saturating_sub(1),
                };
            };

            match line.get(self.char_index) {
                Some(&ch) => {
                    self.char_index += 1;
                    if is_layout_char(ch) {
                        continue;
                    }

                    let class = if ch.is_ascii_digit() {
                        TokenClass::Digit
                    } else {
                        TokenClass::Char
                    };
                    break Token {
                        class,
                        character: ch,
                        line: self.line_index,
                    };
                }
                None => {
                    self.line_index += 1;
                    self.char_index = 0;
                }
            }
        };

        trace!("token {} at line {}", token, token.line);
        self.current = token;
        token
    }
}

fn is_layout_char(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r')
}

/// Drains a fresh lexer, end-of-input token included.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        tokens.push(token);
        if token.is_end_of_input() {
            break;
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(source: &str) -> Vec<(TokenClass, char)> {
        tokenize(source)
            .into_iter()
            .map(|token| (token.class, token.character))
            .collect()
    }

    #[test]
    fn classifies_digits_and_chars() {
        use TokenClass::*;
        assert_eq!(
            classes("(5+x)"),
            vec![
                (Char, '('),
                (Digit, '5'),
                (Char, '+'),
                (Char, 'x'),
                (Char, ')'),
                (EndOfInput, END_OF_INPUT),
            ]
        );
    }

    #[test]
    fn strips_spaces_and_skips_layout() {
        let tokens = tokenize("( 1 +\t2 )\r\n");
        let chars: String = tokens.iter().map(|t| t.character).collect();
        assert_eq!(chars, "(1+2)#");
    }

    #[test]
    fn records_line_index() {
        let tokens = tokenize("1\n\n  2");
        assert_eq!(tokens[0].line, 0);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[2].class, TokenClass::EndOfInput);
        assert_eq!(tokens[2].line, 2);
    }

    #[test]
    fn end_of_input_is_sticky() {
        let mut lexer = Lexer::new("7");
        assert_eq!(lexer.next_token().class, TokenClass::Digit);
        for _ in 0..5 {
            let token = lexer.next_token();
            assert!(token.is_end_of_input());
            assert_eq!(token.character, END_OF_INPUT);
        }
        assert!(lexer.current_token().is_end_of_input());
    }

    #[test]
    fn empty_source_is_end_of_input() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.current_token().class, TokenClass::Invalid);
        assert!(lexer.next_token().is_end_of_input());
        assert!(lexer.next_token().is_end_of_input());

        assert_eq!(tokenize("  \t \n ").len(), 1);
    }
}
