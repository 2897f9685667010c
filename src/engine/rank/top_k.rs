use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Bounded best-k selector.
///
/// Keeps at most `capacity` entries, always the best seen so far, in
/// O(n log k). Ordering is by key with LESS meaning BETTER; callers encode
/// the ranking direction in the key type (wrap a component in
/// `std::cmp::Reverse` for a descending ranking). Internally the worst kept
/// key sits at the heap top, so one comparison decides whether a candidate
/// evicts it.
pub struct BoundedTopK<K: Ord, T> {
    capacity: usize,
    heap: BinaryHeap<Entry<K, T>>,
}

impl<K: Ord, T> BoundedTopK<K, T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1)),
        }
    }

    /// Offers a candidate. Kept if the selector still has room or if its
    /// key beats the worst kept key; otherwise dropped on the spot.
    pub fn offer(&mut self, key: K, value: T) {
        if self.capacity == 0 {
            return;
        }
        if self.heap.len() < self.capacity {
            self.heap.push(Entry { key, value });
            return;
        }
        if let Some(worst) = self.heap.peek() {
            if key < worst.key {
                self.heap.pop();
                self.heap.push(Entry { key, value });
            }
        }
    }

    /// Consumes the selector, returning the kept values best-first.
    pub fn into_sorted(self) -> Vec<T> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|entry| entry.value)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Heap entry ordered by key alone, so values need no ordering of their own.
struct Entry<K: Ord, T> {
    key: K,
    value: T,
}

impl<K: Ord, T> PartialEq for Entry<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Ord, T> Eq for Entry<K, T> {}

impl<K: Ord, T> PartialOrd for Entry<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, T> Ord for Entry<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
