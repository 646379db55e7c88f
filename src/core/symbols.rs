//! Roman numeral symbols and the fixed table that orders them.

use std::fmt;

/// One of the seven base numeral symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl Symbol {
    pub const fn value(self) -> u32 {
        match self {
            Self::I => 1,
            Self::V => 5,
            Self::X => 10,
            Self::L => 50,
            Self::C => 100,
            Self::D => 500,
            Self::M => 1000,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::I => 'I',
            Self::V => 'V',
            Self::X => 'X',
            Self::L => 'L',
            Self::C => 'C',
            Self::D => 'D',
            Self::M => 'M',
        }
    }

    /// Powers of ten below M may precede a larger symbol to subtract from it.
    pub const fn is_subtractive(self) -> bool {
        matches!(self, Self::I | Self::X | Self::C)
    }

    /// Longest contiguous run this symbol may form, or `None` when unbounded.
    pub const fn max_run(self) -> Option<usize> {
        match self {
            Self::V | Self::L | Self::D => Some(1),
            Self::I | Self::X | Self::C => Some(3),
            Self::M => None,
        }
    }

    /// The only symbol allowed to subtract from this one.
    ///
    /// That is the power of ten one decade below: I for V and X, X for L and C,
    /// C for D and M.
    pub const fn subtractive_prefix(self) -> Option<Self> {
        match self {
            Self::V | Self::X => Some(Self::I),
            Self::L | Self::C => Some(Self::X),
            Self::D | Self::M => Some(Self::C),
            Self::I => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Base symbols ordered by strictly decreasing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolTable {
    entries: [Symbol; 7],
}

impl SymbolTable {
    pub const fn new() -> Self {
        Self {
            entries: [
                Symbol::M,
                Symbol::D,
                Symbol::C,
                Symbol::L,
                Symbol::X,
                Symbol::V,
                Symbol::I,
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Symbol> + '_ {
        self.entries.iter().copied()
    }

    pub fn largest(&self) -> Symbol {
        self.entries[0]
    }

    /// Symbol with the greatest value not exceeding `n`.
    pub fn largest_fitting(&self, n: u32) -> Option<Symbol> {
        self.iter().find(|symbol| symbol.value() <= n)
    }

    /// Symbol with the smallest value not below `n`.
    pub fn smallest_covering(&self, n: u32) -> Option<Symbol> {
        self.iter().rev().find(|symbol| symbol.value() >= n)
    }

    /// Case-insensitive symbol lookup.
    pub fn lookup(&self, c: char) -> Option<Symbol> {
        let upper = c.to_ascii_uppercase();
        self.iter().find(|symbol| symbol.as_char() == upper)
    }

    pub fn value_of(&self, c: char) -> Option<u32> {
        self.lookup(c).map(Symbol::value)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
