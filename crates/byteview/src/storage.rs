//! The shared storage block underlying every view.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// A fixed-length byte allocation.
///
/// Allocated once and never resized. Shared between views via `Rc`; interior
/// mutability lets aliasing views mutate it in a single-threaded context. The
/// allocation is freed when the last view referencing it drops.
pub struct Storage {
    len: usize,
    bytes: RefCell<Box<[u8]>>,
}

impl Storage {
    /// Allocates a zero-filled block of the given length.
    pub fn zeroed(len: usize) -> Rc<Storage> {
        Self::from_vec(vec![0; len])
    }

    /// Wraps an existing byte vector as a block.
    pub fn from_vec(bytes: Vec<u8>) -> Rc<Storage> {
        Rc::new(Storage {
            len: bytes.len(),
            bytes: RefCell::new(bytes.into_boxed_slice()),
        })
    }

    /// Length of the block, fixed at allocation time.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the block is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn borrow(&self) -> Ref<'_, Box<[u8]>> {
        self.bytes.borrow()
    }

    pub(crate) fn borrow_mut(&self) -> RefMut<'_, Box<[u8]>> {
        self.bytes.borrow_mut()
    }
}
