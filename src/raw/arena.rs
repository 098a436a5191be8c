use alloc::vec::Vec;

use super::handle::Handle;

/// Slab of node slots addressed by [`Handle`].
///
/// Slots vacated by `take` go onto a free-list and are reused by the next
/// `alloc`, so handles held elsewhere stay stable for the life of their
/// element. `len` counts live elements only.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        if let Some(handle) = self.free.pop() {
            // Reuse a vacated slot.
            self.slots[handle.to_index()] = Some(element);
            handle
        } else {
            // Strict less-than keeps every live slot addressable: the new
            // slot's index must still fit in a `Handle`.
            assert!(
                self.slots.len() < Handle::MAX,
                "`Arena::alloc()` - arena is at maximum capacity ({})",
                Handle::MAX
            );
            self.slots.push(Some(element));
            Handle::from_index(self.slots.len() - 1)
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    /// Removes and returns an element, putting its slot on the free-list.
    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.to_index()].take().expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn with_capacity_preallocates() {
        let arena: Arena<i32> = Arena::with_capacity(8);
        assert_eq!(arena.capacity(), 8);
        assert!(arena.is_empty());
    }

    #[test]
    fn freed_slot_is_reused() {
        let mut arena: Arena<i32> = Arena::new();
        let first = arena.alloc(1);
        let second = arena.alloc(2);
        assert_eq!(arena.take(first), 1);
        assert_eq!(arena.len(), 1);

        // The next allocation must land in the vacated slot, not grow the
        // slot vector, and `second` stays valid throughout.
        let third = arena.alloc(3);
        assert_eq!(third, first);
        assert_eq!(*arena.get(second), 2);
        assert_eq!(*arena.get(third), 3);
    }

    #[test]
    #[should_panic(expected = "`Arena::take()` - `handle` is invalid!")]
    fn double_take_panics() {
        let mut arena: Arena<i32> = Arena::new();
        let handle = arena.alloc(7);
        let _ = arena.take(handle);
        let _ = arena.take(handle);
    }

    #[derive(Clone, Debug)]
    enum Step {
        Alloc(i32),
        Mutate(usize, i32),
        Take(usize),
        Clear,
    }

    fn step_strategy() -> impl Strategy<Value = Step> {
        prop_oneof![
            8 => any::<i32>().prop_map(Step::Alloc),
            3 => (any::<usize>(), any::<i32>()).prop_map(|(which, value)| Step::Mutate(which, value)),
            4 => any::<usize>().prop_map(Step::Take),
            1 => Just(Step::Clear),
        ]
    }

    proptest! {
        /// Replays random alloc/mutate/take/clear sequences against a
        /// `Vec<(Handle, i32)>` model and checks every live handle resolves
        /// to its model value after each step.
        #[test]
        fn arena_matches_model(steps in prop::collection::vec(step_strategy(), 0..256)) {
            let mut model: Vec<(Handle, i32)> = Vec::new();
            let mut arena: Arena<i32> = Arena::new();

            for step in steps {
                match step {
                    Step::Alloc(value) => {
                        let handle = arena.alloc(value);
                        model.push((handle, value));
                    }
                    Step::Mutate(which, value) => {
                        if model.is_empty() {
                            continue;
                        }
                        let index = which % model.len();
                        *arena.get_mut(model[index].0) = value;
                        model[index].1 = value;
                    }
                    Step::Take(which) => {
                        if model.is_empty() {
                            continue;
                        }
                        let index = which % model.len();
                        let (handle, expected) = model.swap_remove(index);
                        prop_assert_eq!(arena.take(handle), expected);
                    }
                    Step::Clear => {
                        arena.clear();
                        model.clear();
                    }
                }

                prop_assert_eq!(arena.len(), model.len());
                prop_assert_eq!(arena.is_empty(), model.is_empty());
                for &(handle, value) in &model {
                    prop_assert_eq!(*arena.get(handle), value);
                }
            }
        }
    }
}
