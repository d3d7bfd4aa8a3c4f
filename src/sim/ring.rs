//! Arena-backed circular sequence
//!
//! Every slot stores its value plus the indices of its clockwise and
//! counter-clockwise neighbors. Positions are plain slot indices, so a removal
//! never leaves a dangling reference, only a stale index that is rejected.
//! Freed slots are recycled through a free list, which means slot indices are
//! NOT contiguous in ring order: navigation always follows the links.

use crate::error::RingError;

/// Handle to an item in a [`Ring`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(u32);

impl Position {
    /// Raw slot index
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    value: u32,
    next: u32,
    prev: u32,
    live: bool,
}

/// Cyclic sequence with O(1) insert/remove at any held position
#[derive(Debug, Clone)]
pub struct Ring {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl Ring {
    /// Create a ring holding a single item
    pub fn new(initial: u32) -> Self {
        Self::with_capacity(1, initial)
    }

    /// Create a single-item ring with room for `capacity` items before reallocating
    pub fn with_capacity(capacity: usize, initial: u32) -> Self {
        let mut slots = Vec::with_capacity(capacity.max(1));
        slots.push(Slot {
            value: initial,
            next: 0,
            prev: 0,
            live: true,
        });
        Self {
            slots,
            free: Vec::new(),
            len: 1,
        }
    }

    /// Position of the initial item
    ///
    /// Only meaningful until that item is removed.
    pub fn head(&self) -> Position {
        Position(0)
    }

    /// Number of items in the ring
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a ring never gives up its last item
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Value stored at `pos`, if it is still live
    pub fn value(&self, pos: Position) -> Option<u32> {
        self.slots
            .get(pos.0 as usize)
            .filter(|slot| slot.live)
            .map(|slot| slot.value)
    }

    /// Move `delta` items away from `pos` (positive = clockwise)
    ///
    /// Whole laps are skipped, and the remainder is walked along whichever
    /// direction is shorter, one link at a time.
    pub fn step(&self, pos: Position, delta: isize) -> Result<Position, RingError> {
        let mut idx = self.live_index(pos)?;
        let len = self.len as isize;
        let forward = delta.rem_euclid(len);
        let backward = len - forward;

        if forward <= backward {
            for _ in 0..forward {
                idx = self.slots[idx as usize].next;
            }
        } else {
            for _ in 0..backward {
                idx = self.slots[idx as usize].prev;
            }
        }
        Ok(Position(idx))
    }

    /// Insert `value` immediately clockwise of `pos` and return its position
    pub fn insert_after(&mut self, pos: Position, value: u32) -> Result<Position, RingError> {
        let at = self.live_index(pos)?;
        let next = self.slots[at as usize].next;
        let slot = Slot {
            value,
            next,
            prev: at,
            live: true,
        };

        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx as usize] = slot;
                idx
            }
            None => {
                let idx = u32::try_from(self.slots.len()).map_err(|_| RingError::Full)?;
                self.slots.push(slot);
                idx
            }
        };

        self.slots[at as usize].next = idx;
        self.slots[next as usize].prev = idx;
        self.len += 1;
        Ok(Position(idx))
    }

    /// Remove the item at `pos` and return its value
    ///
    /// `pos` is invalid afterwards; grab its neighbor with [`Ring::step`] first.
    pub fn remove(&mut self, pos: Position) -> Result<u32, RingError> {
        let at = self.live_index(pos)?;
        if self.len == 1 {
            return Err(RingError::Empty);
        }

        let Slot {
            value, next, prev, ..
        } = self.slots[at as usize];
        self.slots[prev as usize].next = next;
        self.slots[next as usize].prev = prev;
        self.slots[at as usize].live = false;
        self.free.push(at);
        self.len -= 1;
        Ok(value)
    }

    /// Ring contents in clockwise order, starting at `pos`
    pub fn values_from(&self, pos: Position) -> Result<Vec<u32>, RingError> {
        let start = self.live_index(pos)?;
        let mut values = Vec::with_capacity(self.len);
        let mut idx = start;
        loop {
            let slot = &self.slots[idx as usize];
            values.push(slot.value);
            idx = slot.next;
            if idx == start {
                break;
            }
        }
        Ok(values)
    }

    fn live_index(&self, pos: Position) -> Result<u32, RingError> {
        match self.slots.get(pos.0 as usize) {
            Some(slot) if slot.live => Ok(pos.0),
            _ => Err(RingError::StalePosition(pos.0)),
        }
    }
}
