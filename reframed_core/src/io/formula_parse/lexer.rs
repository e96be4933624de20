//! Lex a chemical formula string into a series of element tokens

use crate::io::formula_parse::token::ElementToken;

/// Code points of the digit zero of every run of ten Unicode decimal digits (category Nd)
#[rustfmt::skip]
const DECIMAL_DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6,
    0x0C66, 0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0,
    0x1810, 0x1946, 0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620,
    0xA8D0, 0xA900, 0xA9D0, 0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066,
    0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0,
    0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8,
    0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Scanner over a formula string.
///
/// Anything which can't start an element token is skipped, so lexing never fails.
pub struct Lexer {
    source: Vec<char>,
    tokens: Vec<ElementToken>,
    start: usize,
    current: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
        }
    }

    /// Scan the whole source, returning the element tokens in order of appearance
    ///
    /// # Examples
    /// ```rust
    /// use reframed_core::io::formula_parse::lexer::Lexer;
    /// let tokens = Lexer::new("C2C3").lex();
    /// assert_eq!(tokens.len(), 2);
    /// assert_eq!(tokens[1].count, 3);
    /// ```
    pub fn lex(mut self) -> Vec<ElementToken> {
        self.scan_tokens();
        self.tokens
    }

    fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }
    }

    fn scan_token(&mut self) {
        let c: char = self.advance();
        match c {
            'A'..='Z' => self.read_element(),
            // Whitespace, stray digits, lowercase letters, punctuation
            _ => {}
        }
    }

    fn advance(&mut self) -> char {
        let char_at_current = self.source[self.current];
        self.current += 1;
        char_at_current
    }

    fn read_element(&mut self) {
        if Lexer::is_lower(self.peek()) {
            self.advance();
        }
        let symbol: String = self.source[self.start..self.current].iter().collect();

        let digits_start = self.current;
        while Lexer::is_digit(self.peek()) {
            self.advance();
        }
        let count = if digits_start == self.current {
            1
        } else {
            self.source[digits_start..self.current]
                .iter()
                .filter_map(|c| Lexer::digit_value(*c))
                .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(d as u64))
        };

        self.add_token(ElementToken { symbol, count });
    }

    fn is_digit(c: char) -> bool {
        Lexer::digit_value(c).is_some()
    }

    /// Value of a Unicode decimal digit (general category Nd), from any script
    fn digit_value(c: char) -> Option<u32> {
        let code = c as u32;
        let block = DECIMAL_DIGIT_ZEROS.partition_point(|zero| *zero <= code);
        if block == 0 {
            return None;
        }
        let value = code - DECIMAL_DIGIT_ZEROS[block - 1];
        (value < 10).then_some(value)
    }

    fn is_lower(c: char) -> bool {
        c.is_ascii_lowercase()
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            return '\0';
        }
        self.source[self.current]
    }

    fn add_token(&mut self, token: ElementToken) {
        self.tokens.push(token);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}
