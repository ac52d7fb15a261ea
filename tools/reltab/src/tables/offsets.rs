//! Relocation offset extraction.
//!
//! For each requested REL section, emits a count word followed by the entry
//! target offsets, all little-endian, in file-encounter order. A missing
//! section contributes a zero count, since an image with no relocations of
//! a given class is valid. A RELA section or any entry that is not an
//! absolute-32-bit patch aborts the run.

use reltab_elf::{ElfFile, R_ARM_ABS32, SHT_REL, SHT_RELA};

use super::error::TableError;
use super::words;
use crate::verbose::vprintln;

/// Build the `[count][offset]×count` sub-table for one named section.
fn section_table(elf: &ElfFile<'_>, name: &str) -> Result<Vec<u8>, TableError> {
    let Some(sh) = elf.find_section_by_name(name) else {
        vprintln!("  {name}: absent, 0 entries");
        return Ok(words::word(0).to_vec());
    };
    if sh.sh_type != SHT_REL && sh.sh_type != SHT_RELA {
        return Err(TableError::WrongSectionKind(name.into()));
    }
    if sh.sh_type == SHT_RELA {
        return Err(TableError::UnsupportedRelocationForm(name.into()));
    }

    let entries = elf
        .rel_entries(&sh)
        .ok_or_else(|| TableError::WrongSectionKind(name.into()))?;

    let mut offsets = Vec::new();
    for (index, rel) in entries.enumerate() {
        if rel.r_type != R_ARM_ABS32 {
            return Err(TableError::UnsupportedRelocationType {
                section: name.into(),
                index,
            });
        }
        offsets.push(rel.r_offset);
    }
    vprintln!("  {name}: {} entries", offsets.len());

    // The count prefix comes from the entries actually walked, so it can
    // never disagree with the offset words that follow.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "entry count is bounded by a u32 section size"
    )]
    let count = offsets.len() as u32;

    let mut buf = Vec::with_capacity((offsets.len() + 1) * 4);
    words::push_word(&mut buf, count);
    for &offset in &offsets {
        words::push_word(&mut buf, offset);
    }
    Ok(buf)
}

/// Extract the concatenated offset tables for `names`, in request order.
///
/// Sub-tables are concatenated, never merged or sorted: the downstream
/// relocator indexes them positionally.
///
/// # Errors
///
/// Aborts on the first offending section; no partial output is produced.
pub fn extract_offsets<S: AsRef<str>>(
    elf: &ElfFile<'_>,
    names: &[S],
) -> Result<Vec<u8>, TableError> {
    let mut parts = Vec::with_capacity(names.len());
    for name in names {
        parts.push(section_table(elf, name.as_ref())?);
    }
    Ok(words::concat(parts))
}
