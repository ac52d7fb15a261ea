//! Table extraction engine.
//!
//! Three extraction pipelines over one parsed ELF32 view: symbol address
//! tables, relocation offset tables, and GDB startup directives. Every
//! pipeline aborts on the first structural violation and returns a typed
//! [`error::TableError`]; serialization happens only after extraction has
//! fully succeeded.

pub mod error;
pub mod gdbinit;
pub mod offsets;
pub mod symbols;
pub mod words;

#[cfg(test)]
pub(crate) mod testelf;
