/// Circuit script lexer.
///
/// Scripts are line-oriented: one statement per line, tokens separated by
/// whitespace. Comments begin with `//` or `#` and run to end of line.
///
/// Recognized constructs:
///   - Keywords (case-insensitive): QUBITS, I, H, X, Y, Z, RX, RY, RZ,
///     CNOT (alias CX), SWAP
///   - Positions:        @10, @12.5, @-3
///   - Integer literals: 0, 1, 2, …
///   - Float literals:   90, 45.5, 1e2
///
/// Angles are plain degree values; there are no named constants.
use crate::error::{Error, Result};

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Qubits,
    I, H, X, Y, Z,
    Rx, Ry, Rz,
    Cnot, Swap,
    /// `@<position>` prefix of a gate line.
    At(f64),
    Int(usize),
    Float(f64),
}

impl Token {
    /// Source-like spelling, for error messages.
    pub fn display(&self) -> String {
        match self {
            Token::Qubits   => "QUBITS".into(),
            Token::I        => "I".into(),
            Token::H        => "H".into(),
            Token::X        => "X".into(),
            Token::Y        => "Y".into(),
            Token::Z        => "Z".into(),
            Token::Rx       => "RX".into(),
            Token::Ry       => "RY".into(),
            Token::Rz       => "RZ".into(),
            Token::Cnot     => "CNOT".into(),
            Token::Swap     => "SWAP".into(),
            Token::At(p)    => format!("@{p}"),
            Token::Int(n)   => n.to_string(),
            Token::Float(f) => f.to_string(),
        }
    }
}

/// A token annotated with its 1-based source line.
#[derive(Debug, Clone)]
pub struct Spanned {
    pub token: Token,
    pub line: usize,
}

// ── Public API ────────────────────────────────────────────────────────────

/// Tokenize a script. Each inner `Vec` is the token list of one non-empty
/// source line.
pub fn tokenize(source: &str) -> Result<Vec<Vec<Spanned>>> {
    let mut statements = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let line_num = idx + 1;

        let content = strip_comment(line).trim();
        if content.is_empty() {
            continue;
        }

        let tokens = content
            .split_whitespace()
            .map(|word| lex_word(word, line_num).map(|token| Spanned { token, line: line_num }))
            .collect::<Result<Vec<_>>>()?;
        statements.push(tokens);
    }

    Ok(statements)
}

// ── Internal helpers ──────────────────────────────────────────────────────

fn strip_comment(line: &str) -> &str {
    let line = line.find("//").map_or(line, |p| &line[..p]);
    line.find('#').map_or(line, |p| &line[..p])
}

fn lex_word(word: &str, line: usize) -> Result<Token> {
    match word.to_ascii_uppercase().as_str() {
        "QUBITS"       => return Ok(Token::Qubits),
        "I" | "ID"     => return Ok(Token::I),
        "H"            => return Ok(Token::H),
        "X"            => return Ok(Token::X),
        "Y"            => return Ok(Token::Y),
        "Z"            => return Ok(Token::Z),
        "RX"           => return Ok(Token::Rx),
        "RY"           => return Ok(Token::Ry),
        "RZ"           => return Ok(Token::Rz),
        "CNOT" | "CX"  => return Ok(Token::Cnot),
        "SWAP"         => return Ok(Token::Swap),
        _ => {}
    }

    if let Some(rest) = word.strip_prefix('@') {
        return match rest.parse::<f64>() {
            Ok(p) if p.is_finite() => Ok(Token::At(p)),
            _ => Err(Error::lex(line, format!("invalid position '{word}'"))),
        };
    }

    if let Ok(n) = word.parse::<usize>() {
        return Ok(Token::Int(n));
    }

    // Rejects "inf" and "NaN" spellings that `f64::from_str` would accept.
    match word.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(Token::Float(f)),
        _ => Err(Error::lex(line, format!("unrecognized token '{word}'"))),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
