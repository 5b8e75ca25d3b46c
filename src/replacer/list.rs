//! Recency List Module
//!
//! Doubly linked recency order stored in a vector-backed arena.
//!
//! Slots are addressed by stable indices instead of pointers, so the list
//! needs no unsafe code and no reference counting. Two permanent sentinel
//! slots bound the sequence: everything linked between them is a live
//! entry, ordered from most recently used (after the head sentinel) to
//! least recently used (before the tail sentinel).

// == Arena Constants ==
/// Slot index of the head sentinel (most-recently-used end).
const HEAD: usize = 0;
/// Slot index of the tail sentinel (least-recently-used end).
const TAIL: usize = 1;
/// Link terminator for the free-slot chain.
const NIL: usize = usize::MAX;

// == Slot ==
/// One arena cell: a token plus its two ordering links.
///
/// Sentinel slots and freed slots hold no token. Freed slots are chained
/// through `next` into a reuse list so the arena only grows when the
/// number of live entries exceeds every previous peak.
#[derive(Debug)]
struct Slot<T> {
    token: Option<T>,
    prev: usize,
    next: usize,
}

// == Recency List ==
/// Sentinel-bounded doubly linked list with O(1) insert, unlink, and
/// move-to-front.
///
/// Because the sentinels are real slots, interior link surgery never
/// branches on "am I at an edge": the neighbors of a live entry always
/// exist.
#[derive(Debug)]
pub struct RecencyList<T> {
    /// Arena of slots; indices 0 and 1 are the sentinels.
    slots: Vec<Slot<T>>,
    /// Head of the freed-slot chain, `NIL` when none are free.
    free_head: usize,
    /// Number of live entries (sentinels excluded).
    len: usize,
}

impl<T> RecencyList<T> {
    // == Constructor ==
    /// Creates an empty list holding only the two sentinels.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with space reserved for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity.saturating_add(2));
        slots.push(Slot {
            token: None,
            prev: NIL,
            next: TAIL,
        });
        slots.push(Slot {
            token: None,
            prev: HEAD,
            next: NIL,
        });
        Self {
            slots,
            free_head: NIL,
            len: 0,
        }
    }

    // == Length ==
    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no entries are linked between the sentinels.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Push Front ==
    /// Links a new entry for `token` immediately after the head sentinel
    /// and returns its slot index.
    ///
    /// The returned index stays valid until the entry is removed; callers
    /// keep it in their own lookup structure.
    pub fn push_front(&mut self, token: T) -> usize {
        let slot = self.alloc(token);
        self.link_after_head(slot);
        self.len += 1;
        slot
    }

    // == Move To Front ==
    /// Re-links an existing entry immediately after the head sentinel,
    /// making it the most recently used.
    ///
    /// The relative order of all other entries is untouched.
    pub fn move_to_front(&mut self, slot: usize) {
        if self.slots[HEAD].next == slot {
            return;
        }
        self.unlink(slot);
        self.link_after_head(slot);
    }

    // == Remove ==
    /// Unlinks the entry at `slot`, returns its token, and recycles the
    /// slot through the free chain.
    pub fn remove(&mut self, slot: usize) -> T {
        debug_assert!(slot != HEAD && slot != TAIL, "sentinels are never removed");
        self.unlink(slot);
        let token = self.slots[slot]
            .token
            .take()
            .expect("a linked slot always holds a token");
        self.slots[slot].prev = NIL;
        self.slots[slot].next = self.free_head;
        self.free_head = slot;
        self.len -= 1;
        token
    }

    // == Back ==
    /// Returns the slot index of the least-recently-used entry, or `None`
    /// if the list is empty.
    pub fn back(&self) -> Option<usize> {
        let last = self.slots[TAIL].prev;
        if last == HEAD {
            None
        } else {
            Some(last)
        }
    }

    /// Returns the token of the least-recently-used entry without
    /// unlinking it.
    pub fn peek_back(&self) -> Option<&T> {
        self.back().and_then(|slot| self.slots[slot].token.as_ref())
    }

    // == Clear ==
    /// Drops every entry and resets the arena to just the sentinels.
    ///
    /// The underlying allocation is retained for reuse.
    pub fn clear(&mut self) {
        self.slots.truncate(2);
        self.slots[HEAD].next = TAIL;
        self.slots[TAIL].prev = HEAD;
        self.free_head = NIL;
        self.len = 0;
    }

    // == Iteration ==
    /// Iterates over tokens from most recently used to least recently
    /// used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            cursor: self.slots[HEAD].next,
        }
    }

    // == Internal Link Surgery ==
    /// Takes a slot from the free chain, or grows the arena by one.
    fn alloc(&mut self, token: T) -> usize {
        if self.free_head != NIL {
            let slot = self.free_head;
            self.free_head = self.slots[slot].next;
            self.slots[slot].token = Some(token);
            slot
        } else {
            let slot = self.slots.len();
            self.slots.push(Slot {
                token: Some(token),
                prev: NIL,
                next: NIL,
            });
            slot
        }
    }

    /// Splices `slot` in between the head sentinel and its current
    /// successor. Correct even when the list is empty, because the
    /// successor is then the tail sentinel.
    fn link_after_head(&mut self, slot: usize) {
        let first = self.slots[HEAD].next;
        self.slots[slot].prev = HEAD;
        self.slots[slot].next = first;
        self.slots[first].prev = slot;
        self.slots[HEAD].next = slot;
    }

    /// Unlinks `slot` from its neighbors. The neighbors always exist
    /// (worst case they are the sentinels), so no edge cases arise.
    fn unlink(&mut self, slot: usize) {
        let prev = self.slots[slot].prev;
        let next = self.slots[slot].next;
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// == Iterator ==
/// Iterator over tokens in most-recent-first order.
#[derive(Debug)]
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    cursor: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.cursor == TAIL {
            return None;
        }
        let slot = &self.slots[self.cursor];
        self.cursor = slot.next;
        slot.token.as_ref()
    }
}
