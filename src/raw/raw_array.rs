use crate::error::TryReserveError;

use std::alloc::Layout;
use std::mem::{align_of, size_of};
use std::ptr::NonNull;

pub struct RawArray<T> {
    pub arr: NonNull<T>,
    pub cap: usize,
}

impl<T> RawArray<T> {
    pub const fn dangling() -> Self {
        Self {
            arr: NonNull::dangling(),
            cap: 0,
        }
    }

    pub unsafe fn try_alloc(capacity: usize) -> Result<Self, TryReserveError> {
        assert!(size_of::<T>() != 0);

        if capacity == 0 {
            return Ok(Self::dangling());
        }

        let alloc_size = capacity
            .checked_mul(size_of::<T>())
            .filter(|&size| size <= isize::max_value() as usize)
            .ok_or(TryReserveError::CapacityOverflow)?;
        let layout = Layout::from_size_align(alloc_size, align_of::<T>())
            .map_err(|_| TryReserveError::CapacityOverflow)?;

        let ptr = std::alloc::alloc(layout) as *mut T;
        match NonNull::new(ptr) {
            Some(arr) => Ok(Self { arr, cap: capacity }),
            None => Err(TryReserveError::AllocFailed { size: alloc_size }),
        }
    }

    pub unsafe fn dealloc(&mut self) {
        if self.cap == 0 {
            return;
        }
        let alloc_size = self.cap * size_of::<T>();
        let layout = Layout::from_size_align_unchecked(alloc_size, align_of::<T>());
        std::alloc::dealloc(self.arr.as_ptr() as *mut u8, layout);
        self.arr = NonNull::dangling();
        self.cap = 0;
    }

    pub unsafe fn offset(&self, index: usize) -> *mut T {
        self.arr.as_ptr().add(index)
    }

    // cond: at most one of the copies may dealloc
    pub unsafe fn shadow_clone(&self) -> Self {
        Self {
            arr: self.arr,
            cap: self.cap,
        }
    }
}
