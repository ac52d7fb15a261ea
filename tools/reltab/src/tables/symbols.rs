//! Symbol address resolution.
//!
//! Finds each requested name in `.symtab` and returns its load address,
//! enforcing that exactly one symbol matches per name.

use reltab_elf::{Elf32SectionHeader, ElfFile, SHT_SYMTAB};

use super::error::TableError;
use super::words;
use crate::verbose::vprintln;

/// Conventional name of the symbol table section.
const SYMTAB: &str = ".symtab";

/// Locate `.symtab` and validate that it is a symbol-table section.
///
/// The declared type must be exactly `SHT_SYMTAB`: a mislabeled data
/// section and a `.symtab` that declares the dynamic-symbol kind both fail.
fn symtab_section(elf: &ElfFile<'_>) -> Result<Elf32SectionHeader, TableError> {
    let sh = elf
        .find_section_by_name(SYMTAB)
        .ok_or_else(|| TableError::MissingSection(SYMTAB.into()))?;
    if sh.sh_type != SHT_SYMTAB {
        return Err(TableError::WrongSectionKind(SYMTAB.into()));
    }
    Ok(sh)
}

/// Resolve each requested name, in request order, to its load address.
///
/// # Errors
///
/// Fails on the first name with zero ([`TableError::SymbolNotFound`]) or
/// multiple ([`TableError::AmbiguousSymbol`]) matches; no partial result is
/// ever returned.
pub fn resolve_symbols<S: AsRef<str>>(
    elf: &ElfFile<'_>,
    names: &[S],
) -> Result<Vec<u32>, TableError> {
    let sh = symtab_section(elf)?;
    let strtab = elf
        .linked_strtab(&sh)
        .ok_or_else(|| TableError::WrongSectionKind(SYMTAB.into()))?;

    let mut addrs = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        let mut matches = elf
            .symbols(&sh)
            .ok_or_else(|| TableError::WrongSectionKind(SYMTAB.into()))?
            .filter(|sym| strtab.get(sym.st_name) == Some(name));

        let sym = matches
            .next()
            .ok_or_else(|| TableError::SymbolNotFound(name.into()))?;
        if matches.next().is_some() {
            return Err(TableError::AmbiguousSymbol(name.into()));
        }

        vprintln!("  {name} = {:#x}", sym.st_value);
        addrs.push(sym.st_value);
    }
    Ok(addrs)
}

/// Serialize resolved addresses as consecutive little-endian words, in
/// query order. No count prefix, no padding.
#[must_use]
pub fn address_table(addrs: &[u32]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(addrs.len() * 4);
    for &addr in addrs {
        words::push_word(&mut buf, addr);
    }
    buf
}
