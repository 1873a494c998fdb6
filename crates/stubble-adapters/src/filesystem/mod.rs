//! Filesystem adapters.
//!
//! Both implementations share the port's create-exclusive write semantics;
//! [`MemoryFilesystem`] exists so pipeline tests never touch a real disk.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
