//! Transport implementations

#[cfg(feature = "file")]
pub mod file;
pub mod memory;
#[cfg(feature = "stdout")]
pub mod stdout;

#[cfg(feature = "file")]
pub use file::FileTransport;
pub use memory::MemoryTransport;
#[cfg(feature = "stdout")]
pub use stdout::{StdOutTransport, StdOutTransportConfig};

pub use crate::core::Transport;
