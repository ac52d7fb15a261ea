//! ELF32 header parsing.
//!
//! Parses the ELF32 file header from raw byte slices using safe field
//! extraction via `from_le_bytes()`.

use core::fmt;

/// ELF magic bytes: `\x7fELF`.
const ELF_MAGIC: [u8; 4] = [0x7f, b'E', b'L', b'F'];

/// ELF class: 32-bit.
const ELFCLASS32: u8 = 1;

/// ELF data encoding: little-endian.
const ELFDATA2LSB: u8 = 1;

/// Size of an ELF32 file header (52 bytes).
const ELF32_EHDR_SIZE: usize = 52;

/// Size of an ELF32 section header entry (40 bytes).
pub(crate) const ELF32_SHDR_SIZE: usize = 40;

/// Read a little-endian `u16` from `data` at byte offset `off`.
///
/// # Panics
///
/// Panics if `off + 2 > data.len()`. Callers must bounds-check first.
pub(crate) fn le_u16(data: &[u8], off: usize) -> u16 {
    u16::from_le_bytes(*data[off..].first_chunk().unwrap())
}

/// Read a little-endian `u32` from `data` at byte offset `off`.
pub(crate) fn le_u32(data: &[u8], off: usize) -> u32 {
    u32::from_le_bytes(*data[off..].first_chunk().unwrap())
}

/// Errors that can occur when parsing an ELF file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfError {
    /// The file does not start with the ELF magic bytes.
    BadMagic,
    /// The ELF file is not 32-bit (`ELFCLASS32`).
    UnsupportedClass,
    /// The ELF file is not little-endian.
    UnsupportedEncoding,
    /// The input data is too short for the declared structure.
    Truncated,
    /// A header offset or size is out of bounds.
    InvalidOffset,
}

impl fmt::Display for ElfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadMagic => write!(f, "invalid ELF magic bytes"),
            Self::UnsupportedClass => write!(f, "unsupported ELF class (expected ELFCLASS32)"),
            Self::UnsupportedEncoding => {
                write!(f, "unsupported data encoding (expected little-endian)")
            }
            Self::Truncated => write!(f, "input data truncated"),
            Self::InvalidOffset => write!(f, "invalid header offset or size"),
        }
    }
}

/// Parsed ELF32 file header.
///
/// Only the fields the section and symbol accessors consume are retained;
/// program header fields are skipped entirely. The machine and object type
/// are parsed but not restricted; relocation codes are validated per entry
/// by the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elf32Header {
    /// ELF object type (`ET_EXEC`, `ET_REL`, ...).
    pub e_type: u16,
    /// Target machine architecture.
    pub e_machine: u16,
    /// Link-time address of the entry point.
    pub e_entry: u32,
    /// Offset of the section header table in the file.
    pub e_shoff: u32,
    /// Size of each section header entry.
    pub e_shentsize: u16,
    /// Number of section header entries.
    pub e_shnum: u16,
    /// Section header string table index.
    pub e_shstrndx: u16,
}

impl Elf32Header {
    /// Parse an ELF32 file header from raw bytes.
    ///
    /// Validates the magic, class, encoding, and that the section header
    /// table fits within `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError`] if validation fails or the data is too short.
    pub fn parse(data: &[u8]) -> Result<Self, ElfError> {
        if data.len() < ELF32_EHDR_SIZE {
            return Err(ElfError::Truncated);
        }

        // Validate magic
        if data[..4] != ELF_MAGIC {
            return Err(ElfError::BadMagic);
        }

        // Validate class (byte 4) — must be ELFCLASS32
        if data[4] != ELFCLASS32 {
            return Err(ElfError::UnsupportedClass);
        }

        // Validate data encoding (byte 5) — must be little-endian
        if data[5] != ELFDATA2LSB {
            return Err(ElfError::UnsupportedEncoding);
        }

        // Parse fields — offsets are safe because we checked len >= 52 above
        let e_type = le_u16(data, 16);
        let e_machine = le_u16(data, 18);
        let e_entry = le_u32(data, 24);
        let e_shoff = le_u32(data, 32);
        let e_shentsize = le_u16(data, 46);
        let e_shnum = le_u16(data, 48);
        let e_shstrndx = le_u16(data, 50);

        // Validate section header table bounds (if present)
        if e_shnum > 0 {
            if usize::from(e_shentsize) < ELF32_SHDR_SIZE {
                return Err(ElfError::InvalidOffset);
            }
            let sh_end = u64::from(e_shoff) + u64::from(e_shnum) * u64::from(e_shentsize);
            if sh_end > data.len() as u64 {
                return Err(ElfError::InvalidOffset);
            }
        }

        Ok(Self {
            e_type,
            e_machine,
            e_entry,
            e_shoff,
            e_shentsize,
            e_shnum,
            e_shstrndx,
        })
    }
}
