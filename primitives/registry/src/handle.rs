//! Shared handles to registered method records

use std::cell::{BorrowError, BorrowMutError, Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use ir::MethodRecord;

/// Shared handle to a method record.
///
/// Two handles are equal when they point at the same record instance, not
/// when the records have equal contents. Cloning a handle never clones the
/// record.
pub struct MethodHandle<M>(Rc<RefCell<M>>);

impl<M> MethodHandle<M> {
    /// Wrap a record in a new handle
    pub fn new(method: M) -> Self { Self(Rc::new(RefCell::new(method))) }

    /// Borrow the record
    ///
    /// # Panics
    ///
    /// Panics if the record is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, M> { self.0.borrow() }

    /// Mutably borrow the record
    ///
    /// # Panics
    ///
    /// Panics if the record is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, M> { self.0.borrow_mut() }

    /// Borrow the record, failing if it is mutably borrowed
    pub fn try_borrow(&self) -> Result<Ref<'_, M>, BorrowError> { self.0.try_borrow() }

    /// Mutably borrow the record, failing if it is borrowed
    pub fn try_borrow_mut(&self) -> Result<RefMut<'_, M>, BorrowMutError> {
        self.0.try_borrow_mut()
    }

    /// Whether both handles point at the same record instance
    pub fn ptr_eq(&self, other: &Self) -> bool { Rc::ptr_eq(&self.0, &other.0) }
}

impl<M: MethodRecord> MethodHandle<M> {
    /// Owned copy of the record's selector
    ///
    /// # Panics
    ///
    /// Panics if the record is currently mutably borrowed.
    pub fn selector(&self) -> String { self.borrow().selector().to_string() }

    /// Detached copy of the record's current contents
    ///
    /// # Panics
    ///
    /// Panics if the record is currently mutably borrowed.
    pub fn snapshot(&self) -> M { self.borrow().clone() }
}

impl<M> Clone for MethodHandle<M> {
    fn clone(&self) -> Self { Self(Rc::clone(&self.0)) }
}

impl<M> PartialEq for MethodHandle<M> {
    fn eq(&self, other: &Self) -> bool { self.ptr_eq(other) }
}

impl<M> Eq for MethodHandle<M> {}

impl<M: fmt::Debug> fmt::Debug for MethodHandle<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MethodHandle").field(&*self.0.borrow()).finish()
    }
}

impl<M> From<M> for MethodHandle<M> {
    fn from(method: M) -> Self { Self::new(method) }
}
