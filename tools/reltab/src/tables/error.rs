//! Typed failures for table extraction.

use std::fmt;

/// Errors raised while extracting tables from a parsed ELF image.
///
/// Every variant is fatal to the current run: extraction aborts at the
/// first violation and no output artifact is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A required section (the symbol table) is absent.
    MissingSection(String),
    /// A section exists but its declared kind does not match what the
    /// operation requires, or its declared extents don't form a usable
    /// table of that kind.
    WrongSectionKind(String),
    /// No symbol with the requested name exists.
    SymbolNotFound(String),
    /// More than one symbol with the requested name exists.
    AmbiguousSymbol(String),
    /// The section uses the addend-carrying RELA encoding, which is never
    /// translated.
    UnsupportedRelocationForm(String),
    /// An entry uses a relocation code other than the supported
    /// absolute-32-bit patch.
    UnsupportedRelocationType {
        /// Name of the relocation section containing the entry.
        section: String,
        /// Zero-based position of the offending entry in file order.
        index: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSection(name) => {
                write!(f, "{name}: no section with this name found")
            }
            Self::WrongSectionKind(name) => {
                write!(f, "{name}: is not a section of the required kind")
            }
            Self::SymbolNotFound(name) => {
                write!(f, ".symtab: {name}: no symbol with this name")
            }
            Self::AmbiguousSymbol(name) => {
                write!(f, ".symtab: {name}: more than one symbol with this name")
            }
            Self::UnsupportedRelocationForm(name) => {
                write!(f, "{name}: unsupported RELA relocation form")
            }
            Self::UnsupportedRelocationType { section, index } => {
                write!(f, "{section}: entry {index}: unsupported relocation type")
            }
        }
    }
}

impl std::error::Error for TableError {}
