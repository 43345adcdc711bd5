use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::fmt::DebugList;

/// A heap allocation holding exactly `size` values of `T`, sized at runtime. Similar to a
/// [`Box<[T]>`](Box<T>).
///
/// A `Buffer<T>` always holds `size` initialized values. Growable collections use a
/// `Buffer<MaybeUninit<T>>` instead and track which slots are initialized themselves, which is
/// also the only form that can be [`realloc`](Buffer::realloc)ated.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Buffer.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `repeat_default` | `O(n)` |
/// | `realloc` | `O(n)`*, `O(1)` |
///
/// \* The global allocator may be able to grow or shrink the allocation in place.
pub struct Buffer<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Returns the number of values held by the Buffer.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Buffer with size 0, without allocating.
    pub fn new() -> Buffer<T> {
        // SAFETY: There are no values, so they are all initialized.
        unsafe { Self::new_uninit(0).assume_init() }
    }

    /// Creates a new Buffer of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new_uninit(size: usize) -> Buffer<MaybeUninit<T>> {
        let layout = Buffer::<MaybeUninit<T>>::make_layout(size);
        let ptr = Buffer::<MaybeUninit<T>>::make_ptr(layout);

        Buffer {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Decomposes a Buffer into its pointer and size without dropping or deallocating anything.
    /// The parts can be reassembled with [`Buffer::from_parts`].
    pub fn into_parts(self) -> (NonNull<T>, usize) {
        let ret = (self.ptr, self.size);
        mem::forget(self);
        ret
    }

    /// Creates a Buffer from its raw components.
    ///
    /// # Safety
    /// For the produced value to be valid:
    /// - `ptr` needs to be dangling with `size * size_of::<T>() == 0`, or be a live allocation in
    ///   the global allocator made with `Layout::array::<T>(size)`.
    /// - `ptr` needs to refer to `size` properly initialized values of `T`.
    pub const unsafe fn from_parts(ptr: NonNull<T>, size: usize) -> Buffer<T> {
        Buffer {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        match Layout::array::<T>(size) {
            Ok(layout) => layout,
            Err(_) => panic!("Capacity overflow!"),
        }
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T: Default> Buffer<T> {
    /// Creates a new `Buffer<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_default(count: usize) -> Buffer<T> {
        let buf = Self::new_uninit(count);

        for i in 0..count {
            // SAFETY: count * size_of::<T>() <= isize::MAX is checked by new_uninit and i is
            // within the allocated range of the Buffer.
            unsafe {
                buf.ptr.add(i).write(MaybeUninit::new(T::default()))
            }
        }

        // SAFETY: All values are initialized with the default value for T.
        unsafe { buf.assume_init() }
    }
}

impl<T> Buffer<MaybeUninit<T>> {
    /// Assume that all values of a `Buffer<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Buffer is properly initialized. Failing to do
    /// so is undefined behavior.
    pub unsafe fn assume_init(self) -> Buffer<T> {
        let (ptr, size) = self.into_parts();
        // SAFETY: The layouts match and the caller guarantees that every value is initialized.
        unsafe { Buffer::from_parts(ptr.cast(), size) }
    }

    /// Reallocates the Buffer to have size equal to `new_size`. Retained values keep their
    /// positions, new positions are uninitialized and values past `new_size` are discarded
    /// without being dropped.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn realloc(&mut self, new_size: usize) {
        let new_layout = Self::make_layout(new_size);

        let new_ptr = match (self.size, new_size) {
            (_, _) if size_of::<T>() == 0 => {
                // Zero-sized types never allocate, the dangling pointer stays valid for any size.
                self.ptr
            },
            (old, new) if old == new => return,
            (0, _) => Self::make_ptr(new_layout),
            (_, 0) => {
                let old_layout = Self::make_layout(self.size);
                // SAFETY: ptr was allocated in the global allocator with old_layout, which has a
                // non-zero size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) }
                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Self::make_layout(self.size);

                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // layout size is > 0 and <= isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(
                        self.ptr.as_ptr().cast(),
                        old_layout,
                        new_layout.size(),
                    ).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        log::trace!("Reallocated buffer from {} to {} slots", self.size, new_size);

        self.ptr = new_ptr;
        self.size = new_size;
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        // SAFETY: The pointer is nonnull, properly aligned and all size values are initialized and
        // ready to drop.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        let layout = Buffer::<T>::make_layout(self.size);
        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}

impl<T> Deref for Buffer<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for size values, all of which are initialized. The borrow checker prevents
        // mutation for the lifetime of the slice.
        unsafe {
            slice::from_raw_parts(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> DerefMut for Buffer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and self is borrowed mutably for the lifetime of the slice.
        unsafe {
            slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size)
        }
    }
}

// SAFETY: Buffers, when used safely rely on unique pointers and are therefore safe for Send when
// T: Send.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: Buffer's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Buffer<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Buffer<T> {}

impl<T: Debug> Debug for Buffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("contents", &DebugList(self.iter()))
            .field("size", &self.size)
            .finish()
    }
}
