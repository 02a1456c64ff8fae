/// Compact re-encode command.
pub mod encode;
/// Size report command.
pub mod estimate;
/// Stderr log sink.
pub mod logger;
/// Shared input helpers.
pub mod util;
