//! Synthetic ELF32 images for engine tests.
//!
//! Builds byte-exact test images: file header, a NULL section, the caller's
//! sections, and a trailing `.shstrtab`. Caller sections land at header-table
//! indices starting at 1, so `sh_link` values refer to those final indices.

use reltab_elf::{SHT_STRTAB, SHT_SYMTAB};

const EHDR_SIZE: usize = 52;
const SHDR_SIZE: usize = 40;
const SYM_SIZE: usize = 16;

/// A section to place in a test image.
pub(crate) struct Section {
    name: String,
    sh_type: u32,
    sh_link: u32,
    sh_entsize: u32,
    data: Vec<u8>,
}

impl Section {
    pub(crate) fn new(name: &str, sh_type: u32, sh_link: u32, sh_entsize: u32, data: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            sh_type,
            sh_link,
            sh_entsize,
            data,
        }
    }
}

/// Build a minimal valid ELF32 header (52 bytes): `ET_EXEC`, `EM_ARM`,
/// little-endian, no sections.
fn make_elf_header() -> Vec<u8> {
    let mut buf = vec![0u8; EHDR_SIZE];
    buf[0..4].copy_from_slice(&[0x7f, b'E', b'L', b'F']);
    buf[4] = 1; // ELFCLASS32
    buf[5] = 1; // ELFDATA2LSB
    buf[6] = 1; // EV_CURRENT
    buf[16..18].copy_from_slice(&2u16.to_le_bytes()); // ET_EXEC
    buf[18..20].copy_from_slice(&40u16.to_le_bytes()); // EM_ARM
    buf[20..24].copy_from_slice(&1u32.to_le_bytes());
    buf[24..28].copy_from_slice(&0x0800_0000u32.to_le_bytes());
    buf[40..42].copy_from_slice(&(EHDR_SIZE as u16).to_le_bytes());
    buf[46..48].copy_from_slice(&(SHDR_SIZE as u16).to_le_bytes());
    buf
}

/// Append one section header.
fn push_shdr(buf: &mut Vec<u8>, name: u32, sh_type: u32, offset: u32, size: u32, link: u32, entsize: u32) {
    let start = buf.len();
    buf.resize(start + SHDR_SIZE, 0);
    let b = &mut buf[start..];
    b[0..4].copy_from_slice(&name.to_le_bytes());
    b[4..8].copy_from_slice(&sh_type.to_le_bytes());
    // sh_flags, sh_addr — zero
    b[16..20].copy_from_slice(&offset.to_le_bytes());
    b[20..24].copy_from_slice(&size.to_le_bytes());
    b[24..28].copy_from_slice(&link.to_le_bytes());
    // sh_info, sh_addralign — zero
    b[36..40].copy_from_slice(&entsize.to_le_bytes());
}

/// Build a complete ELF32 image from `sections`.
pub(crate) fn build_image(sections: &[Section]) -> Vec<u8> {
    // .shstrtab: leading NUL, each section name, then ".shstrtab" itself
    let mut shstrtab = vec![0u8];
    let mut name_offsets = Vec::with_capacity(sections.len());
    for s in sections {
        name_offsets.push(shstrtab.len() as u32);
        shstrtab.extend_from_slice(s.name.as_bytes());
        shstrtab.push(0);
    }
    let shstrtab_name = shstrtab.len() as u32;
    shstrtab.extend_from_slice(b".shstrtab");
    shstrtab.push(0);

    let shnum = sections.len() + 2;
    let mut data_off = EHDR_SIZE + shnum * SHDR_SIZE;

    let mut buf = make_elf_header();
    buf[32..36].copy_from_slice(&(EHDR_SIZE as u32).to_le_bytes()); // e_shoff
    buf[48..50].copy_from_slice(&(shnum as u16).to_le_bytes()); // e_shnum
    buf[50..52].copy_from_slice(&((shnum - 1) as u16).to_le_bytes()); // e_shstrndx

    // Section 0: NULL
    buf.resize(buf.len() + SHDR_SIZE, 0);

    for (s, &name_off) in sections.iter().zip(&name_offsets) {
        push_shdr(
            &mut buf,
            name_off,
            s.sh_type,
            data_off as u32,
            s.data.len() as u32,
            s.sh_link,
            s.sh_entsize,
        );
        data_off += s.data.len();
    }
    push_shdr(
        &mut buf,
        shstrtab_name,
        SHT_STRTAB,
        data_off as u32,
        shstrtab.len() as u32,
        0,
        0,
    );

    for s in sections {
        buf.extend_from_slice(&s.data);
    }
    buf.extend_from_slice(&shstrtab);
    buf
}

/// Build `.strtab` data for `names`, returning the data and each name's offset.
pub(crate) fn strtab(names: &[&str]) -> (Vec<u8>, Vec<u32>) {
    let mut data = vec![0u8];
    let mut offsets = Vec::with_capacity(names.len());
    for name in names {
        offsets.push(data.len() as u32);
        data.extend_from_slice(name.as_bytes());
        data.push(0);
    }
    (data, offsets)
}

/// Build `.symtab` data: a NULL symbol followed by one entry per
/// `(name_offset, value)` pair.
pub(crate) fn symtab(entries: &[(u32, u32)]) -> Vec<u8> {
    let mut data = vec![0u8; SYM_SIZE]; // null symbol
    for &(name_off, value) in entries {
        let start = data.len();
        data.resize(start + SYM_SIZE, 0);
        let b = &mut data[start..];
        b[0..4].copy_from_slice(&name_off.to_le_bytes());
        b[4..8].copy_from_slice(&value.to_le_bytes());
        b[14..16].copy_from_slice(&1u16.to_le_bytes()); // st_shndx
    }
    data
}

/// Build `SHT_REL` section data from `(r_offset, r_type)` pairs.
pub(crate) fn rel_entries(entries: &[(u32, u8)]) -> Vec<u8> {
    let mut data = Vec::with_capacity(entries.len() * 8);
    for &(offset, r_type) in entries {
        data.extend_from_slice(&offset.to_le_bytes());
        let r_info = (1u32 << 8) | u32::from(r_type);
        data.extend_from_slice(&r_info.to_le_bytes());
    }
    data
}

/// Build `SHT_RELA` section data (12-byte entries, zero addends).
pub(crate) fn rela_entries(entries: &[(u32, u8)]) -> Vec<u8> {
    let mut data = Vec::with_capacity(entries.len() * 12);
    for &(offset, r_type) in entries {
        data.extend_from_slice(&offset.to_le_bytes());
        data.extend_from_slice(&u32::from(r_type).to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
    }
    data
}

/// Image with `.strtab` + `.symtab` holding `(name, value)` symbols.
pub(crate) fn image_with_symtab(symbols: &[(&str, u32)]) -> Vec<u8> {
    image_with_symtab_type(symbols, SHT_SYMTAB)
}

/// Like [`image_with_symtab`] but with an arbitrary declared type for the
/// section named `.symtab`.
pub(crate) fn image_with_symtab_type(symbols: &[(&str, u32)], sh_type: u32) -> Vec<u8> {
    let names: Vec<&str> = symbols.iter().map(|&(name, _)| name).collect();
    let (strtab_data, name_offs) = strtab(&names);
    let entries: Vec<(u32, u32)> = name_offs
        .iter()
        .zip(symbols)
        .map(|(&off, &(_, value))| (off, value))
        .collect();
    build_image(&[
        Section::new(".strtab", SHT_STRTAB, 0, 0, strtab_data),
        // .strtab is final header-table index 1
        Section::new(".symtab", sh_type, 1, SYM_SIZE as u32, symtab(&entries)),
    ])
}
