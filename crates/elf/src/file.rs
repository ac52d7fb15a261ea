//! ELF32 file view.
//!
//! Provides [`ElfFile`] as the entry point for parsing an ELF32 image.

use crate::header::{Elf32Header, ElfError};

/// A parsed ELF32 file, holding a reference to the raw data and the parsed header.
///
/// The view is immutable after construction: queries never mutate it, so one
/// parsed file may serve any number of section and symbol lookups.
#[derive(Debug, Clone, Copy)]
pub struct ElfFile<'a> {
    pub(crate) data: &'a [u8],
    header: Elf32Header,
}

impl<'a> ElfFile<'a> {
    /// Parse an ELF32 file from raw bytes.
    ///
    /// This validates the file header and ensures the section header table
    /// is within bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError`] if the header is invalid or the data is too short.
    pub fn parse(data: &'a [u8]) -> Result<Self, ElfError> {
        let header = Elf32Header::parse(data)?;
        Ok(Self { data, header })
    }

    /// Returns the parsed ELF32 file header.
    #[must_use]
    pub fn header(&self) -> &Elf32Header {
        &self.header
    }

    /// Returns the underlying raw ELF data.
    #[must_use]
    pub fn raw_data(&self) -> &'a [u8] {
        self.data
    }
}
