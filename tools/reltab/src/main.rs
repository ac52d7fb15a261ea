//! Boot-relocation table generator.
//!
//! Extracts symbol addresses and relocation offsets from an ELF32 kernel
//! image and serializes them into little-endian word tables consumed by the
//! boot-time relocator. Any structural violation in the input aborts the run
//! before a single output byte is written.
//!
//! Pipeline: read image → parse ELF32 view → extract tables → write artifact.

mod cli;
mod tables;
mod verbose;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use reltab_elf::ElfFile;

use verbose::dprintln;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    verbose::init(cli.quiet, cli.verbose);

    match cli.command {
        cli::Command::Symbols(ref args) => cmd_symbols(args),
        cli::Command::Relocs(ref args) => cmd_relocs(args),
        cli::Command::Gdbinit(ref args) => cmd_gdbinit(args),
    }
}

// ===========================================================================
// Commands
// ===========================================================================

/// Resolve symbol addresses and write the address table.
fn cmd_symbols(args: &cli::SymbolsArgs) -> Result<()> {
    let data = read_image(&args.elf)?;
    let elf = parse_image(&data)?;

    let addrs = tables::symbols::resolve_symbols(&elf, &args.symbols)?;
    let table = tables::symbols::address_table(&addrs);
    write_output(&args.output, &table)?;

    dprintln!(
        "  symbols: {} resolved, {} bytes -> {}",
        addrs.len(),
        table.len(),
        args.output.display()
    );
    Ok(())
}

/// Extract relocation offset tables and write the concatenated result.
fn cmd_relocs(args: &cli::RelocsArgs) -> Result<()> {
    let data = read_image(&args.elf)?;
    let elf = parse_image(&data)?;

    let table = tables::offsets::extract_offsets(&elf, &args.sections)?;
    write_output(&args.output, &table)?;

    dprintln!(
        "  relocs: {} sections, {} bytes -> {}",
        args.sections.len(),
        table.len(),
        args.output.display()
    );
    Ok(())
}

/// Print GDB startup directives for the image's memory boundaries.
fn cmd_gdbinit(args: &cli::GdbinitArgs) -> Result<()> {
    let data = read_image(&args.elf)?;
    let elf = parse_image(&data)?;

    let script = tables::gdbinit::directives(&elf, &args.elf)?;
    print!("{script}");
    Ok(())
}

// ===========================================================================
// File I/O
// ===========================================================================

/// Read the whole image into memory; inputs are small and fully buffered.
fn read_image(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("reading {}", path.display()))
}

/// Parse the buffered image as an ELF32 view.
fn parse_image(data: &[u8]) -> Result<ElfFile<'_>> {
    ElfFile::parse(data).map_err(|e| anyhow::anyhow!("parsing ELF: {e}"))
}

/// Write a finished table to `path`, creating parent directories.
///
/// Callers only reach this once the whole table has been built, so an
/// aborted run never leaves a partial artifact behind.
fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}
