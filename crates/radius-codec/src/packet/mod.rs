pub mod code;
#[allow(clippy::module_inception)]
pub mod packet;

pub use code::Code;
pub use packet::{Packet, PacketError};
