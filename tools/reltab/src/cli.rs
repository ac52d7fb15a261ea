//! Command-line interface definitions for reltab.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Boot-relocation table generator.
#[derive(Parser)]
#[command(name = "reltab", version, about)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Suppress per-run summary lines; show only errors.
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose output with per-section and per-symbol diagnostics.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve symbol addresses into a flat little-endian address table.
    Symbols(SymbolsArgs),
    /// Extract relocation offset tables from REL sections.
    Relocs(RelocsArgs),
    /// Print GDB startup directives for the image's memory boundaries.
    Gdbinit(GdbinitArgs),
}

/// Arguments for the `symbols` subcommand.
#[derive(Parser)]
pub struct SymbolsArgs {
    /// Path to the ELF32 image.
    pub elf: PathBuf,

    /// Output path for the address table.
    pub output: PathBuf,

    /// Symbol names to resolve, in output order.
    #[arg(required = true)]
    pub symbols: Vec<String>,
}

/// Arguments for the `relocs` subcommand.
#[derive(Parser)]
pub struct RelocsArgs {
    /// Path to the ELF32 image.
    pub elf: PathBuf,

    /// Output path for the concatenated offset tables.
    pub output: PathBuf,

    /// Relocation section names to extract, in output order.
    #[arg(required = true)]
    pub sections: Vec<String>,
}

/// Arguments for the `gdbinit` subcommand.
#[derive(Parser)]
pub struct GdbinitArgs {
    /// Path to the ELF32 image.
    pub elf: PathBuf,
}
