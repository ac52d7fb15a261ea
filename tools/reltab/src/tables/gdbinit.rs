//! GDB startup directives for the image's memory boundaries.
//!
//! Resolves the flash image boundary and the first unused RAM word and
//! renders them as variable assignments for an interactive debugging
//! session, alongside a `symbol-file` directive naming the image.

use std::path::Path;

use reltab_elf::ElfFile;

use super::error::TableError;
use super::symbols;

/// Symbol marking the end of the flash image.
const FLASH_END_SYMBOL: &str = "__root";

/// Symbol marking the first unused RAM word.
const RAM_END_SYMBOL: &str = "__unusedRamStart";

/// Render the three-line GDB startup script for the image at `path`.
///
/// # Errors
///
/// Same failure modes as symbol resolution: both boundary symbols must
/// exist exactly once.
pub fn directives(elf: &ElfFile<'_>, path: &Path) -> Result<String, TableError> {
    let addrs = symbols::resolve_symbols(elf, &[FLASH_END_SYMBOL, RAM_END_SYMBOL])?;
    // resolve_symbols returns one address per requested name
    Ok(format!(
        "symbol-file {}\nset $flash_end = {}\nset $ram_end = {}\n",
        path.display(),
        addrs[0],
        addrs[1],
    ))
}
