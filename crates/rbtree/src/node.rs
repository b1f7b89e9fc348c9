#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Id(u32);

impl Id {
    /// Slot of the shared sentinel. Every tree reserves it at construction.
    pub(crate) const NIL: Self = Self(0);

    #[inline(always)]
    pub(crate) fn is_nil(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub(crate) fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Slot indices are 32-bit; an arena past `u32::MAX` slots would wrap onto
/// the sentinel, so that is a hard limit.
#[inline(always)]
pub(crate) fn id(v: usize) -> Id {
    Id(u32::try_from(v).expect("arena exceeds u32::MAX slots"))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    #[inline(always)]
    pub fn is_red(self) -> bool {
        self == Color::Red
    }

    #[inline(always)]
    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    /// `None` for the sentinel and for slots sitting on the free list.
    pub(crate) key: Option<K>,
    pub(crate) color: Color,
    pub(crate) left: Id,
    pub(crate) right: Id,
    pub(crate) parent: Id,
}

impl<K> Node<K> {
    pub(crate) fn sentinel() -> Self {
        Self {
            key: None,
            color: Color::Black,
            left: Id::NIL,
            right: Id::NIL,
            parent: Id::NIL,
        }
    }

    pub(crate) fn new(key: K) -> Self {
        Self {
            key: Some(key),
            color: Color::Red,
            left: Id::NIL,
            right: Id::NIL,
            parent: Id::NIL,
        }
    }
}
