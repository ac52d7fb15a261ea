//! Minimal ELF32 parser for the reltab table generator.
//!
//! Parses ELF32 headers, section tables, symbol tables, and `SHT_REL`
//! relocation sections from raw byte slices using safe field extraction
//! (`from_le_bytes`). No unsafe code, no allocations.
//!
//! # Usage
//!
//! ```
//! use reltab_elf::ElfFile;
//!
//! fn first_symbol_address(data: &[u8]) -> Option<u32> {
//!     let elf = ElfFile::parse(data).ok()?;
//!     let symtab = elf.find_section_by_name(".symtab")?;
//!     let mut syms = elf.symbols(&symtab)?;
//!     Some(syms.next()?.st_value)
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod file;
pub mod header;
pub mod reloc;
pub mod section;

pub use file::ElfFile;
pub use header::{Elf32Header, ElfError};
pub use reloc::{
    Elf32Rel, RelIter, R_ARM_ABS32, R_ARM_NONE, R_ARM_PC24, R_ARM_REL32, R_ARM_THM_CALL,
};
pub use section::{
    Elf32SectionHeader, Elf32Symbol, StringTable, SHT_DYNSYM, SHT_REL, SHT_RELA, SHT_STRTAB,
    SHT_SYMTAB,
};
