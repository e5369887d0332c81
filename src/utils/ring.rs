use super::Cursor;
use crate::errors::{CapacityError, EmptyError, FullError};
use crate::iter::{Drain, Iter};

#[cfg(feature = "alloc")]
use alloc::boxed::Box;

/// Backing storage for a [`Ring`]: a fixed number of optional slots.
pub(crate) trait Slots {
    type Item;

    fn as_slots(&self) -> &[Option<Self::Item>];
    fn as_slots_mut(&mut self) -> &mut [Option<Self::Item>];
}

impl<T, const N: usize> Slots for [Option<T>; N] {
    type Item = T;

    fn as_slots(&self) -> &[Option<T>] {
        self
    }

    fn as_slots_mut(&mut self) -> &mut [Option<T>] {
        self
    }
}

#[cfg(feature = "alloc")]
impl<T> Slots for Box<[Option<T>]> {
    type Item = T;

    fn as_slots(&self) -> &[Option<T>] {
        self
    }

    fn as_slots_mut(&mut self) -> &mut [Option<T>] {
        self
    }
}

/// A circular buffer over some slot storage.
///
/// Slots inside the cursor's occupied range are always `Some`; every other
/// slot is `None`. Dequeueing moves the value out, so the queue never keeps
/// a removed element alive.
#[derive(Clone)]
pub(crate) struct Ring<S> {
    slots: S,
    cursor: Cursor,
}

impl<S: Slots> Ring<S> {
    /// Wrap empty storage. Fails if the storage has no slots.
    pub(crate) fn new(slots: S) -> Result<Self, CapacityError> {
        debug_assert!(slots.as_slots().iter().all(Option::is_none));
        let cursor = Cursor::new(slots.as_slots().len())?;
        Ok(Self { slots, cursor })
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cursor.capacity()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.cursor.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.cursor.is_full()
    }

    pub(crate) fn enqueue(&mut self, item: S::Item) -> Result<(), FullError<S::Item>> {
        if self.cursor.is_full() {
            return Err(FullError::new(item));
        }
        let index = self.cursor.push();
        self.slots.as_slots_mut()[index] = Some(item);
        Ok(())
    }

    pub(crate) fn dequeue(&mut self) -> Result<S::Item, EmptyError> {
        if self.cursor.is_empty() {
            return Err(EmptyError);
        }
        let item = self.slots.as_slots_mut()[self.cursor.front()]
            .take()
            .ok_or(EmptyError)?;
        self.cursor.pop();
        Ok(item)
    }

    pub(crate) fn peek(&self) -> Result<&S::Item, EmptyError> {
        if self.cursor.is_empty() {
            return Err(EmptyError);
        }
        self.slots.as_slots()[self.cursor.front()]
            .as_ref()
            .ok_or(EmptyError)
    }

    pub(crate) fn peek_mut(&mut self) -> Result<&mut S::Item, EmptyError> {
        if self.cursor.is_empty() {
            return Err(EmptyError);
        }
        self.slots.as_slots_mut()[self.cursor.front()]
            .as_mut()
            .ok_or(EmptyError)
    }

    /// Only the occupied range is scanned.
    pub(crate) fn contains(&self, item: &S::Item) -> bool
    where
        S::Item: PartialEq,
    {
        self.iter().any(|x| x == item)
    }

    pub(crate) fn try_extend<I>(&mut self, iter: I) -> Result<(), FullError<S::Item>>
    where
        I: IntoIterator<Item = S::Item>,
    {
        iter.into_iter().try_for_each(|item| self.enqueue(item))
    }

    pub(crate) fn clear(&mut self) {
        for index in self.cursor.indices() {
            self.slots.as_slots_mut()[index] = None;
        }
        self.cursor.clear();
    }

    pub(crate) fn iter(&self) -> Iter<'_, S::Item> {
        Iter::new(self.slots.as_slots(), self.cursor.indices())
    }

    pub(crate) fn drain(&mut self) -> Drain<'_, S::Item> {
        Drain::new(self.slots.as_slots_mut(), &mut self.cursor)
    }

    #[cfg(test)]
    pub(crate) fn slots(&self) -> &[Option<S::Item>] {
        self.slots.as_slots()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ring<const N: usize>() -> Ring<[Option<u32>; N]> {
        Ring::new(core::array::from_fn(|_| None)).unwrap()
    }

    #[test]
    fn empty_storage_is_rejected() {
        let err = Ring::<[Option<u32>; 0]>::new([]).err().unwrap();
        assert_eq!(err.capacity(), 0);
    }

    #[test]
    fn dequeue_clears_the_slot() {
        let mut ring = ring::<3>();
        ring.enqueue(10).unwrap();
        ring.enqueue(20).unwrap();
        assert_eq!(ring.dequeue(), Ok(10));
        assert_eq!(ring.slots(), &[None, Some(20), None]);
    }

    #[test]
    fn wrap_around_writes_into_freed_slot() {
        let mut ring = ring::<3>();
        ring.try_extend([10, 20, 30]).unwrap();
        ring.dequeue().unwrap();
        ring.enqueue(40).unwrap();
        assert_eq!(ring.slots(), &[Some(40), Some(20), Some(30)]);
        assert_eq!(ring.peek(), Ok(&20));
    }

    #[test]
    fn failed_enqueue_changes_nothing() {
        let mut ring = ring::<2>();
        ring.try_extend([1, 2]).unwrap();
        let err = ring.enqueue(3).unwrap_err();
        assert_eq!(err.into_inner(), 3);
        assert_eq!(ring.slots(), &[Some(1), Some(2)]);
        assert_eq!(ring.len(), 2);
    }

    #[test]
    fn try_extend_stops_at_first_rejected_item() {
        let mut ring = ring::<2>();
        let err = ring.try_extend([1, 2, 3, 4]).unwrap_err();
        assert_eq!(err.into_inner(), 3);
        assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn clear_empties_every_slot() {
        let mut ring = ring::<3>();
        ring.try_extend([1, 2, 3]).unwrap();
        ring.dequeue().unwrap();
        ring.enqueue(4).unwrap();
        ring.clear();
        assert!(ring.is_empty());
        assert!(ring.slots().iter().all(Option::is_none));
        assert_eq!(ring.peek(), Err(EmptyError));
    }

    #[test]
    fn contains_ignores_dequeued_values() {
        let mut ring = ring::<3>();
        ring.try_extend([1, 2, 3]).unwrap();
        assert_eq!(ring.dequeue(), Ok(1));
        assert!(!ring.contains(&1));
        assert!(ring.contains(&3));
    }
}
