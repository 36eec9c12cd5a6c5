//! Type-erased host payload stored behind the native host-data pointer.
//!
//! The pointer handed to `csoundCreate` always points at a [`HostData`]; the
//! user payload lives inside it as a `Box<dyn Any + Send>` so that reads get
//! a checked downcast instead of an unchecked pointer cast. The slot holds a
//! single active value, last write wins.

use std::any::Any;
use std::cell::RefCell;

#[derive(Default)]
pub(crate) struct HostData {
    payload: RefCell<Option<Box<dyn Any + Send>>>,
}

impl HostData {
    pub(crate) fn new(payload: Option<Box<dyn Any + Send>>) -> HostData {
        HostData {
            payload: RefCell::new(payload),
        }
    }

    /// Stores the given box verbatim. No copy is made, so the allocation the
    /// caller passed in is the one a later read observes.
    pub(crate) fn set(&self, data: Box<dyn Any + Send>) {
        *self.payload.borrow_mut() = Some(data);
    }

    pub(crate) fn take(&self) -> Option<Box<dyn Any + Send>> {
        self.payload.borrow_mut().take()
    }

    pub(crate) fn is_set(&self) -> bool {
        self.payload.borrow().is_some()
    }

    /// Borrows the payload downcast to `T`. Returns `None` when the slot is
    /// empty or holds a different type.
    pub(crate) fn with<T, R, F>(&self, f: F) -> Option<R>
    where
        T: Any,
        F: FnOnce(&T) -> R,
    {
        let payload = self.payload.borrow();
        payload
            .as_deref()
            .and_then(|p| p.downcast_ref::<T>())
            .map(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_the_given_allocation() {
        let slot = HostData::default();
        let payload = Box::new(1956i32);
        let addr = &*payload as *const i32;
        slot.set(payload);
        assert_eq!(slot.with(|v: &i32| v as *const i32), Some(addr));
    }

    #[test]
    fn downcast_mismatch_is_none() {
        let slot = HostData::new(Some(Box::new("une chaîne".to_owned())));
        assert!(slot.with(|_: &i32| ()).is_none());
        assert_eq!(
            slot.with(|s: &String| s.clone()).as_deref(),
            Some("une chaîne")
        );
    }

    #[test]
    fn take_clears_the_slot() {
        let slot = HostData::new(Some(Box::new(42u64)));
        assert!(slot.is_set());
        let taken = slot.take().unwrap();
        assert_eq!(taken.downcast_ref::<u64>(), Some(&42));
        assert!(!slot.is_set());
        assert!(slot.take().is_none());
    }
}
