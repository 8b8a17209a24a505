mod raw_array;

pub use self::raw_array::RawArray;
