//! Raw values handed over by a system information provider

mod cpu;
mod disk;
mod host;
mod memory;
mod network;
mod reading;
mod session;

pub use cpu::*;
pub use disk::*;
pub use host::*;
pub use memory::*;
pub use network::*;
pub use reading::*;
pub use session::*;
