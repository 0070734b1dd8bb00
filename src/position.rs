//! Opaque handles addressing elements of a [`PositionalList`].
//!
//! [`PositionalList`]: crate::PositionalList

/// A stable, opaque handle to one element of a positional list.
///
/// A position identifies its element for the element's entire lifetime in
/// the list: it survives insertions and removals elsewhere and is never
/// renumbered. It becomes permanently invalid the moment its element is
/// removed; using it afterwards yields [`InvalidPosition`], never a
/// different element.
///
/// Positions carry no public state and cannot be fabricated; the only way to
/// obtain one is from the list that owns the element.
///
/// # Example
///
/// ```
/// use positional::PositionalList;
///
/// let mut list = PositionalList::new();
/// let p = list.add_last(10);
/// list.add_last(20);
///
/// // p still addresses 10 after unrelated mutation
/// list.add_first(0);
/// assert_eq!(list.get(p), Ok(&10));
///
/// list.remove(p).unwrap();
/// assert!(list.get(p).is_err());
/// ```
///
/// [`InvalidPosition`]: crate::InvalidPosition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl Position {
    #[inline]
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}
