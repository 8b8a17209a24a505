pub mod error;
pub mod queue;
pub mod raw;
pub mod ring;

pub use self::error::TryReserveError;
pub use self::queue::Queue;
pub use self::ring::RingBuffer;
