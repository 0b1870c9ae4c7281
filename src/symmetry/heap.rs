// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A binary min-heap ordered by a caller-supplied comparator.
//!
//! The ordering comes from a comparator supplied at construction, not from
//! `Ord` on the element type.

use std::cmp::Ordering;

/// Binary min-heap: [`MinHeap::pop`] returns the element that compares least.
///
/// Elements that compare equal come out in an unspecified order.
pub struct MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    elements: Vec<T>,
    compare: F,
}

impl<T, F> MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: F) -> Self {
        Self::with_capacity(0, compare)
    }

    pub fn with_capacity(capacity: usize, compare: F) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            compare,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The least element, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    pub fn push(&mut self, element: T) {
        self.elements.push(element);
        self.sift_up(self.elements.len() - 1);
    }

    /// Remove and return the least element.
    pub fn pop(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let least = self.elements.swap_remove(0);
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        Some(least)
    }

    /// Remove every element, in no particular order.
    pub fn drain(&mut self) -> std::vec::Drain<'_, T> {
        self.elements.drain(..)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        (self.compare)(&self.elements[i], &self.elements[j]) == Ordering::Less
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.elements.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.elements.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, index) {
                break;
            }
            self.elements.swap(index, child);
            index = child;
        }
    }
}
