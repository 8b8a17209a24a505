mod fifo;

pub use self::fifo::Queue;
