use thiserror::Error;

/// Reported by operations that may need to grow the backing storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TryReserveError {
    #[error("capacity overflow")]
    CapacityOverflow,

    #[error("failed to allocate {size} bytes")]
    AllocFailed { size: usize },
}
