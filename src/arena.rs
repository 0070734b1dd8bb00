//! Slot arena backing the positional list.
//!
//! Nodes live in a growable slot table and link to each other by `u32`
//! index, with `NONE` (`u32::MAX`) as the reserved null link. Removing a
//! node vacates its slot, recycles the index through a free stack, and bumps
//! the slot's generation so that every handle minted for the old occupant
//! stays dead even after the slot is reused.

/// Reserved null link. Never a valid slot index.
pub(crate) const NONE: u32 = u32::MAX;

/// A list node: one payload plus its neighbor links.
///
/// `element` is `None` only for the two sentinel nodes a list creates for
/// itself; every node reachable through a public handle holds a value.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub element: Option<T>,
    pub prev: u32,
    pub next: u32,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

/// Growable slot table with generation-tagged indices.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Inserts a node, returning its slot index and the slot's generation.
    pub fn insert(&mut self, node: Node<T>) -> (u32, u32) {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                debug_assert!(slot.node.is_none(), "free slot must be vacant");
                slot.node = Some(node);
                (index, slot.generation)
            }
            None => {
                let index = self.slots.len();
                assert!(index < NONE as usize, "arena exhausted the index space");
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                (index as u32, 0)
            }
        }
    }

    /// Vacates a slot and returns its node.
    ///
    /// The generation is bumped on removal, permanently invalidating every
    /// tagged index minted for the departing occupant.
    pub fn remove(&mut self, index: u32) -> Option<Node<T>> {
        let slot = self.slots.get_mut(index as usize)?;
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        Some(node)
    }

    pub fn get(&self, index: u32) -> Option<&Node<T>> {
        self.slots.get(index as usize)?.node.as_ref()
    }

    pub fn get_mut(&mut self, index: u32) -> Option<&mut Node<T>> {
        self.slots.get_mut(index as usize)?.node.as_mut()
    }

    /// Current generation of an occupied slot.
    pub fn generation(&self, index: u32) -> Option<u32> {
        let slot = self.slots.get(index as usize)?;
        slot.node.as_ref()?;
        Some(slot.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(value: u64) -> Node<u64> {
        Node {
            element: Some(value),
            prev: NONE,
            next: NONE,
        }
    }

    #[test]
    fn insert_get_remove() {
        let mut arena: Arena<u64> = Arena::new();

        let (index, generation) = arena.insert(node(42));
        assert_eq!(generation, 0);
        assert_eq!(arena.get(index).unwrap().element, Some(42));

        let removed = arena.remove(index).unwrap();
        assert_eq!(removed.element, Some(42));
        assert!(arena.get(index).is_none());
    }

    #[test]
    fn slot_reuse_bumps_generation() {
        let mut arena: Arena<u64> = Arena::new();

        let (first, generation_a) = arena.insert(node(1));
        arena.remove(first);

        // LIFO free stack hands back the same slot with a new generation.
        let (second, generation_b) = arena.insert(node(2));
        assert_eq!(first, second);
        assert_ne!(generation_a, generation_b);
        assert_eq!(arena.generation(second), Some(generation_b));
    }

    #[test]
    fn generation_of_vacant_slot_is_none() {
        let mut arena: Arena<u64> = Arena::new();

        let (index, _) = arena.insert(node(7));
        assert!(arena.generation(index).is_some());

        arena.remove(index);
        assert_eq!(arena.generation(index), None);
        assert_eq!(arena.generation(999), None);
    }

    #[test]
    fn double_remove_returns_none() {
        let mut arena: Arena<u64> = Arena::new();

        let (index, _) = arena.insert(node(3));
        assert!(arena.remove(index).is_some());
        assert!(arena.remove(index).is_none());
    }
}
