use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;


/// Use indexmap for fast lookups and rustc_hash for fast hashing
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;


/// Priority queue ordered by a caller supplied "comes before" comparator
/// `before(a, b)` returns true when `a` must be dequeued ahead of `b`
/// Backed by a binary heap: O(log n) enqueue and dequeue
/// Elements that compare equal come out in no particular order
pub struct PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    elements: Vec<T>,
    before: F,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{

    /// Create an empty queue
    pub fn new(before: F) -> Self {
        Self {
            elements: Vec::new(),
            before,
        }
    }

    /// Create a queue seeded with elements
    pub fn with_elements(before: F, elements: Vec<T>) -> Self {
        let mut queue = Self { elements, before };

        // heapify bottom up, leaves are already valid heaps
        for i in (0..queue.elements.len() / 2).rev() {
            queue.sift_down(i);
        }
        queue
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Insert an element
    pub fn enqueue(&mut self, element: T) {
        self.elements.push(element);
        self.sift_up(self.elements.len() - 1);
    }

    /// Remove and return the minimal element, None if the queue is empty
    pub fn dequeue(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }

        // last element takes the root slot, then sinks to its place
        let min = self.elements.swap_remove(0);
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// Minimal element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// First element in comparator order matching `predicate`, without removing it
    /// Linear scan, meant for diagnostics rather than hot loops
    pub fn peek_where<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.elements
            .iter()
            .filter(|e| predicate(*e))
            .fold(None, |best, e| match best {
                Some(b) if !(self.before)(e, b) => Some(b),
                _ => Some(e),
            })
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if (self.before)(&self.elements[index], &self.elements[parent]) {
                self.elements.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.elements.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && (self.before)(&self.elements[left], &self.elements[smallest]) {
                smallest = left;
            }
            if right < len && (self.before)(&self.elements[right], &self.elements[smallest]) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.elements.swap(index, smallest);
            index = smallest;
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_dequeue_returns_minimum_first() {
        let mut queue = PriorityQueue::new(|a: &i32, b: &i32| a < b);
        for v in [5, 1, 4, 2, 3] {
            queue.enqueue(v);
        }

        assert_eq!(queue.len(), 5);
        let drained: Vec<i32> = std::iter::from_fn(|| queue.dequeue()).collect();
        assert_eq!(drained, vec![1, 2, 3, 4, 5]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = PriorityQueue::new(|a: &u8, b: &u8| a < b);
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.peek_where(|_| true), None);
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut queue = PriorityQueue::new(|a: &i32, b: &i32| a < b);
        queue.enqueue(7);
        queue.enqueue(3);

        assert_eq!(queue.peek(), Some(&3));
        assert_eq!(queue.peek(), Some(&3));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_peek_where_uses_comparator_order() {
        let mut queue = PriorityQueue::new(|a: &i32, b: &i32| a < b);
        for v in [10, 3, 8, 6, 1, 9] {
            queue.enqueue(v);
        }

        // smallest even number, not the first even one inserted
        assert_eq!(queue.peek_where(|v| v % 2 == 0), Some(&6));
        assert_eq!(queue.peek_where(|v| *v > 100), None);
        assert_eq!(queue.len(), 6);
    }

    #[test]
    fn test_custom_comparator_max_first() {
        let mut queue = PriorityQueue::new(|a: &(char, u32), b: &(char, u32)| a.1 > b.1);
        queue.enqueue(('a', 2));
        queue.enqueue(('b', 9));
        queue.enqueue(('c', 5));

        assert_eq!(queue.dequeue(), Some(('b', 9)));
        assert_eq!(queue.dequeue(), Some(('c', 5)));
        assert_eq!(queue.dequeue(), Some(('a', 2)));
    }

    #[test]
    fn test_with_elements_heapifies() {
        let mut queue = PriorityQueue::with_elements(|a: &i32, b: &i32| a < b, vec![9, 4, 7, 1, 8, 2, 2]);

        assert_eq!(queue.peek(), Some(&1));
        let drained: Vec<i32> = std::iter::from_fn(|| queue.dequeue()).collect();
        assert_eq!(drained, vec![1, 2, 2, 4, 7, 8, 9]);
    }

    #[test]
    fn test_interleaved_operations_match_sorted_model() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut queue = PriorityQueue::new(|a: &u32, b: &u32| a < b);
        let mut model: Vec<u32> = Vec::new();

        for _ in 0..2_000 {
            if rng.random_bool(0.6) {
                let v = rng.random_range(0..50);
                queue.enqueue(v);
                model.push(v);
            } else {
                let expected = model.iter().copied().min();
                if let Some(min) = expected {
                    let pos = model.iter().position(|v| *v == min).unwrap();
                    model.swap_remove(pos);
                }
                assert_eq!(queue.dequeue(), expected);
            }
            assert_eq!(queue.len(), model.len());
            assert_eq!(queue.peek().copied(), model.iter().copied().min());
        }
    }
}
