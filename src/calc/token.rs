//! Tokenizer: expression text → typed tokens.
//!
//! Recognition order at each position:
//!
//! | Input                         | Token                         |
//! |-------------------------------|-------------------------------|
//! | whitespace                    | skipped                       |
//! | `+ - * / ^`                   | `Operator`                    |
//! | `sin`/`cos`/`tan` + angle     | `Call` (angle in degrees)     |
//! | digit, `.`, unary `-` + digit | `Number`                      |
//! | anything else                 | `ParseError::UnexpectedChar`  |
//!
//! A `-` is unary only where an operand is expected (start of text or
//! right after another operator) and a digit follows.  Literal runs end
//! at the next operator, whitespace or end of text, and must be plain
//! decimals: no exponents, no `inf`/`nan`.

use log::debug;

use crate::error::ParseError;

/// Binary operators in the calculator alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Precedence tiers, reduced in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Exponent,
    Product,
    Sum,
}

impl Tier {
    pub const ALL: [Self; 3] = [Self::Exponent, Self::Product, Self::Sum];
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    pub fn tier(self) -> Tier {
        match self {
            Self::Pow => Tier::Exponent,
            Self::Mul | Self::Div => Tier::Product,
            Self::Add | Self::Sub => Tier::Sum,
        }
    }
}

/// Trigonometric functions; arguments are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
}

impl Function {
    /// Match a three-letter function name at the start of `text`.
    pub fn from_prefix(text: &str) -> Option<Self> {
        match text.get(..3)? {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }

    /// Evaluate at an angle given in degrees.  `tan(90)` is not guarded.
    pub fn apply_degrees(self, degrees: f64) -> f64 {
        let rad = degrees.to_radians();
        match self {
            Self::Sin => rad.sin(),
            Self::Cos => rad.cos(),
            Self::Tan => rad.tan(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    Call { func: Function, degrees: f64 },
}

/// Split `text` into tokens.  Aborts on the first unrecognised input; no
/// partial token list is returned.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(c) = text[pos..].chars().next() {
        if c.is_whitespace() {
            pos += c.len_utf8();
            continue;
        }

        let unary_minus = c == '-' && expects_operand(&tokens) && digit_at(text, pos + 1);

        if let Some(op) = Operator::from_char(c) {
            if !unary_minus {
                tokens.push(Token::Operator(op));
                pos += 1;
                continue;
            }
        }

        if let Some(func) = Function::from_prefix(&text[pos..]) {
            let arg_start = pos + 3;
            let arg_end = literal_end(text, arg_start);
            let degrees = parse_decimal(&text[arg_start..arg_end])
                .ok_or(ParseError::MalformedAngle { pos })?;
            tokens.push(Token::Call { func, degrees });
            pos = arg_end;
            continue;
        }

        if c.is_ascii_digit() || c == '.' || unary_minus {
            let digits_start = if unary_minus { pos + 1 } else { pos };
            let end = literal_end(text, digits_start);
            let magnitude = parse_decimal(&text[digits_start..end])
                .ok_or(ParseError::MalformedNumber { pos })?;
            tokens.push(Token::Number(if unary_minus { -magnitude } else { magnitude }));
            pos = end;
            continue;
        }

        return Err(ParseError::UnexpectedChar { ch: c, pos });
    }

    debug!("tokenized {:?} into {} tokens", text, tokens.len());
    Ok(tokens)
}

fn expects_operand(tokens: &[Token]) -> bool {
    matches!(tokens.last(), None | Some(Token::Operator(_)))
}

fn digit_at(text: &str, pos: usize) -> bool {
    text.as_bytes().get(pos).is_some_and(u8::is_ascii_digit)
}

/// End of the literal run starting at `from`: next operator, whitespace,
/// or end of text.
fn literal_end(text: &str, from: usize) -> usize {
    text[from..]
        .char_indices()
        .find(|&(_, c)| c.is_whitespace() || Operator::from_char(c).is_some())
        .map_or(text.len(), |(i, _)| from + i)
}

/// Digits with at most one decimal point, at least one digit.
fn parse_decimal(s: &str) -> Option<f64> {
    let digits = s.bytes().filter(u8::is_ascii_digit).count();
    let points = s.bytes().filter(|&b| b == b'.').count();
    if digits == 0 || points > 1 || digits + points != s.len() {
        return None;
    }
    s.parse().ok()
}
