mod ring_buffer;

pub use self::ring_buffer::{Iter, IterMut, IterOwned, RingBuffer};
