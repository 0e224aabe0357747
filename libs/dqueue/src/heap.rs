use std::time::{Duration, Instant};

use crate::Task;

/// Watermark horizon for an empty heap. Far enough out that no real
/// schedule collides with it.
pub(crate) const EMPTY_HORIZON: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Array-backed binary min-heap of tasks, ordered by `execute_at`.
///
/// Alongside the heap itself a `next_on` watermark is maintained: the
/// earliest pending `execute_at`, or `now + EMPTY_HORIZON` when the heap is
/// empty. Callers can compare the watermark against the clock to reject a
/// retrieval in O(1) without touching the heap array.
#[derive(Debug)]
pub(crate) struct TimeHeap<T> {
    tasks: Vec<Task<T>>,
    next_on: Instant,
}

impl<T> TimeHeap<T> {
    pub(crate) fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_on: Instant::now() + EMPTY_HORIZON,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Earliest pending `execute_at`, possibly a stale upper bound right
    /// after a removal (see [`TimeHeap::remove_min`]).
    pub(crate) fn next_on(&self) -> Instant {
        self.next_on
    }

    /// Stored tasks in internal heap order (not sorted).
    pub(crate) fn tasks(&self) -> &[Task<T>] {
        &self.tasks
    }

    /// Insert a task, silently dropping one whose execution time is already
    /// in the past. Schedule calls pre-filter; this is the defense in depth
    /// for anything that slips through.
    pub(crate) fn insert(&mut self, task: Task<T>) {
        if task.execute_at < Instant::now() {
            return;
        }
        self.push(task);
    }

    /// Restore a previously removed task, unconditionally.
    ///
    /// Used when a popped root turns out not yet due: it must go back even
    /// if its timestamp arrived while it was out of the heap, otherwise the
    /// task would be lost instead of retrieved on the next poll.
    pub(crate) fn reinsert(&mut self, task: Task<T>) {
        self.push(task);
    }

    /// Remove and return the earliest task, or `None` on an empty heap.
    ///
    /// The watermark is set to the removed task's own `execute_at` rather
    /// than the new true minimum. That keeps removal O(log n) with no extra
    /// peek and is always an upper bound on the remaining minimum, so a
    /// watermark check can only err towards "maybe ready"; callers re-check
    /// the popped root against the clock.
    pub(crate) fn remove_min(&mut self) -> Option<Task<T>> {
        if self.tasks.is_empty() {
            return None;
        }
        let task = self.tasks.swap_remove(0);
        if !self.tasks.is_empty() {
            self.sift_down(0);
        }
        self.next_on = task.execute_at;
        Some(task)
    }

    /// Discard every stored task and push the watermark back to the empty
    /// horizon.
    pub(crate) fn clear(&mut self) {
        self.tasks.clear();
        self.next_on = Instant::now() + EMPTY_HORIZON;
    }

    fn push(&mut self, task: Task<T>) {
        if task.execute_at < self.next_on {
            self.next_on = task.execute_at;
        }
        self.tasks.push(task);
        self.sift_up(self.tasks.len() - 1);
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.tasks[idx].execute_at >= self.tasks[parent].execute_at {
                break;
            }
            self.tasks.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.tasks.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && self.tasks[left].execute_at < self.tasks[smallest].execute_at {
                smallest = left;
            }
            if right < len && self.tasks[right].execute_at < self.tasks[smallest].execute_at {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.tasks.swap(idx, smallest);
            idx = smallest;
        }
    }
}
