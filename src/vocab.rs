//! Symbol vocabulary for arithmetic sign entry
//!
//! The classifier emits string labels; only labels in this vocabulary can
//! ever become committed symbols. Everything else is out-of-vocabulary noise.

/// Canonical label list (order matches training)
pub const SYMBOL_LABELS: [&str; 16] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9",
    "+", "-", "×", "÷",
    "separator", "commit",
];

/// Arithmetic operator signs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn as_char(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '×',
            Operator::Div => '÷',
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "×" => Some(Operator::Mul),
            "÷" => Some(Operator::Div),
            _ => None,
        }
    }
}

/// A recognized sign, produced only by the gesture stabilizer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    Digit(char),
    Op(Operator),
    Separator,
    Commit,
}

impl Symbol {
    /// Parse a classifier label. Returns None for out-of-vocabulary labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "separator" => Some(Symbol::Separator),
            "commit" => Some(Symbol::Commit),
            _ => {
                if let Some(op) = Operator::from_label(label) {
                    return Some(Symbol::Op(op));
                }
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(d), None) if d.is_ascii_digit() => Some(Symbol::Digit(d)),
                    _ => None,
                }
            }
        }
    }

    /// Canonical label for this symbol (round-trips through from_label)
    pub fn as_label(&self) -> String {
        match self {
            Symbol::Digit(d) => d.to_string(),
            Symbol::Op(op) => op.as_char().to_string(),
            Symbol::Separator => "separator".to_string(),
            Symbol::Commit => "commit".to_string(),
        }
    }
}
