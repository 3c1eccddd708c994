// crates/rungs-core/src/symbol/mod.rs
//
// Canonical outcome symbol: (side, line_count, parity).
//
// Canonical string form, used for display, serialization and as the
// deterministic tiebreak key when ranking:
//   side letter   L | R
//   line count    decimal, no padding
//   parity letter O | E
// e.g. "L3O", "R4E", "L12E".
//
// line_count is an open enumeration: any positive integer is a valid value.

pub mod record;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RungsError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    #[inline]
    pub fn letter(self) -> char {
        match self {
            Side::Left => 'L',
            Side::Right => 'R',
        }
    }

    /// Accepts `LEFT`/`RIGHT`, `L`/`R` (any case) and the native `좌`/`우`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LEFT" | "좌" => Some(Side::Left),
            "R" | "RIGHT" | "우" => Some(Side::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Parity::Odd => Parity::Even,
            Parity::Even => Parity::Odd,
        }
    }

    #[inline]
    pub fn letter(self) -> char {
        match self {
            Parity::Odd => 'O',
            Parity::Even => 'E',
        }
    }

    /// Accepts `ODD`/`EVEN`, `O`/`E` (any case) and the native `홀`/`짝`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "O" | "ODD" | "홀" => Some(Parity::Odd),
            "E" | "EVEN" | "짝" => Some(Parity::Even),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol {
    side: Side,
    line_count: u32,
    parity: Parity,
}

impl Symbol {
    pub fn new(side: Side, line_count: u32, parity: Parity) -> Result<Self> {
        if line_count == 0 {
            return Err(RungsError::Validation("line_count must be positive".into()));
        }
        Ok(Self {
            side,
            line_count,
            parity,
        })
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    #[inline]
    pub fn parity(&self) -> Parity {
        self.parity
    }

    #[inline]
    pub fn with_side(self, side: Side) -> Self {
        Self { side, ..self }
    }

    #[inline]
    pub fn with_parity(self, parity: Parity) -> Self {
        Self { parity, ..self }
    }

    pub fn canonical(&self) -> String {
        format!(
            "{}{}{}",
            self.side.letter(),
            self.line_count,
            self.parity.letter()
        )
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.side.letter(),
            self.line_count,
            self.parity.letter()
        )
    }
}

impl FromStr for Symbol {
    type Err = RungsError;

    /// Parses the canonical form (`L3O`) or the native result form (`좌3짝`).
    fn from_str(s: &str) -> Result<Self> {
        let bad = || RungsError::InvalidSymbol(s.to_string());
        let t = s.trim();

        let mut chars = t.chars();
        let first = chars.next().ok_or_else(bad)?;
        let last = chars.next_back().ok_or_else(bad)?;
        let middle = chars.as_str();

        let side = Side::parse(first.encode_utf8(&mut [0u8; 4])).ok_or_else(bad)?;
        let parity = Parity::parse(last.encode_utf8(&mut [0u8; 4])).ok_or_else(bad)?;

        if middle.is_empty() || !middle.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        let line_count: u32 = middle.parse().map_err(|_| bad())?;
        Symbol::new(side, line_count, parity).map_err(|_| bad())
    }
}

impl TryFrom<String> for Symbol {
    type Error = RungsError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Symbol> for String {
    fn from(s: Symbol) -> Self {
        s.canonical()
    }
}

/// Parse a whitespace/comma separated list of symbols (test and CLI helper).
pub fn parse_sequence(s: &str) -> Result<Vec<Symbol>> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}
