// Purpose - hand rendered audio to the outside world: device buffers, visualisers

pub mod converter;
pub mod visualiser;

pub use converter::interleave;
pub use visualiser::BlockSink;
#[cfg(feature = "rtrb")]
pub use visualiser::{scope_channel, ScopeBuffer};
