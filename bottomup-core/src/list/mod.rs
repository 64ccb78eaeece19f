//! Singly linked list where every node owns its successor.

use std::fmt::{self, Debug};

/// Owning pointer to the rest of a chain, empty at the tail.
///
/// Drop, clone, equality and `Debug` all walk the chain in a loop, so none of
/// them grows the stack with the length of the chain.
pub struct Link<T>(Option<Box<Node<T>>>);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            next: Link::empty(),
        }
    }
}

impl<T> Link<T> {
    #[must_use]
    pub const fn empty() -> Self {
        Self(None)
    }
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }
    #[must_use]
    pub fn is_some(&self) -> bool {
        self.0.is_some()
    }
    /// Detach the first node, leaving this link empty.
    pub fn take(&mut self) -> Option<Box<Node<T>>> {
        self.0.take()
    }
    #[must_use]
    pub fn as_deref(&self) -> Option<&Node<T>> {
        self.0.as_deref()
    }
    pub fn as_deref_mut(&mut self) -> Option<&mut Node<T>> {
        self.0.as_deref_mut()
    }
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.as_deref(),
        }
    }
}

impl<T> Default for Link<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Box<Node<T>>> for Link<T> {
    fn from(node: Box<Node<T>>) -> Self {
        Self(Some(node))
    }
}

impl<T> From<Option<Box<Node<T>>>> for Link<T> {
    fn from(node: Option<Box<Node<T>>>) -> Self {
        Self(node)
    }
}

impl<T> Drop for Link<T> {
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(mut node) = next {
            next = node.next.0.take();
        }
    }
}

impl<T: Clone> Clone for Link<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Link<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Link<T> {}

impl<T: Debug> Debug for Link<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Link<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut head = Self::empty();
        let mut tail = &mut head;
        for value in iter {
            tail = &mut tail.0.insert(Box::new(Node::new(value))).next;
        }
        head
    }
}

/// Collapse runs of equal values in an ascending chain, reusing the surviving
/// nodes.
///
/// Walks the chain once with a cursor on the last kept node, so stack usage
/// does not depend on the length of the chain.
#[must_use]
pub fn dedup_sorted_list<T: PartialEq>(mut head: Link<T>) -> Link<T> {
    let mut cursor = head.as_deref_mut();
    while let Some(node) = cursor {
        while let Some(mut next) = node.next.take() {
            if next.value == node.value {
                node.next = std::mem::take(&mut next.next);
            } else {
                node.next = Link::from(next);
                break;
            }
        }
        cursor = node.next.as_deref_mut();
    }
    head
}

/// Owning handle to the head of a chain.
pub struct List<T> {
    head: Link<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            head: Link::empty(),
        }
    }
    #[must_use]
    pub fn from_head(head: Link<T>) -> Self {
        Self { head }
    }
    #[must_use]
    pub fn into_head(self) -> Link<T> {
        self.head
    }
    #[must_use]
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }
    pub fn push_front(&mut self, value: T) {
        let next = std::mem::take(&mut self.head);
        self.head = Link::from(Box::new(Node { value, next }));
    }
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            value
        })
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }
    pub fn iter(&self) -> Iter<'_, T> {
        self.head.iter()
    }
}

impl<T: PartialEq> List<T> {
    /// See [`dedup_sorted_list`].
    pub fn dedup_sorted(&mut self) {
        self.head = dedup_sorted_list(std::mem::take(&mut self.head));
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_head(iter.into_iter().collect())
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::{Link, List, Node, dedup_sorted_list};
    use expect_test::expect;

    fn chain(values: &[i32]) -> Vec<i32> {
        let list: List<i32> = values.iter().copied().collect();
        let head = dedup_sorted_list(list.into_head());
        List::from_head(head).into_iter().collect()
    }

    #[test]
    fn dedup_list_smoke() {
        assert_eq!(chain(&[1, 1, 2, 3, 3]), [1, 2, 3]);
        assert_eq!(chain(&[1, 1, 2]), [1, 2]);
    }
    #[test]
    fn dedup_list_absent_head() {
        assert!(dedup_sorted_list::<i32>(Link::empty()).is_none());
    }
    #[test]
    fn dedup_list_single_node() {
        let head = Link::from(Box::new(Node::new(7)));
        assert_eq!(dedup_sorted_list(head), Link::from(Box::new(Node::new(7))));
    }
    #[test]
    fn dedup_list_all_equal() {
        assert_eq!(chain(&[4; 9]), [4]);
    }
    #[test]
    fn dedup_list_reuses_first_node_of_each_run() {
        let mut list: List<i32> = [1, 1, 2, 2].into_iter().collect();
        let addrs = |list: &List<i32>| {
            let mut out = Vec::new();
            let mut node = list.head();
            while let Some(n) = node {
                out.push(std::ptr::from_ref(n) as usize);
                node = n.next.as_deref();
            }
            out
        };
        let before = addrs(&list);
        list.dedup_sorted();
        assert_eq!(addrs(&list), [before[0], before[2]]);
    }
    #[test]
    fn long_list_does_not_overflow() {
        let mut list: List<u32> = (0..1_000_000).map(|x| x / 3).collect();
        list.dedup_sorted();
        assert_eq!(list.len(), 333_334);
        assert_eq!(list.iter().last(), Some(&333_333));
        // dropped iteratively here
    }
    #[test]
    fn long_bare_link_does_not_overflow() {
        let head: Link<u32> = (0..1_000_000).collect();
        let head = dedup_sorted_list(head);
        assert_eq!(head.iter().count(), 1_000_000);
        let copy = head.clone();
        assert_eq!(copy, head);
        drop(copy);
        drop(head);
    }
    #[test]
    fn long_link_through_list_round_trip() {
        let list: List<u32> = (0..1_000_000).map(|x| x / 2).collect();
        let head = dedup_sorted_list(list.into_head());
        assert_eq!(head.as_deref().map(|n| n.value), Some(0));
        drop(head);
    }
    #[test]
    fn node_debug_and_eq() {
        let head: Link<i32> = [1, 2, 3].into_iter().collect();
        let node = head.as_deref().unwrap();
        expect!["Node { value: 1, next: [2, 3] }"].assert_eq(&format!("{node:?}"));
        assert_eq!(node.clone(), *node);
        assert_ne!(head, [1, 2].into_iter().collect::<Link<i32>>());
    }
    #[test]
    fn push_pop_order() {
        let mut list = List::new();
        assert!(list.is_empty());
        list.push_front(1);
        list.push_front(2);
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), None);
    }
    #[test]
    fn debug_format() {
        let list: List<i32> = [1, 1, 2, 3, 3].into_iter().collect();
        expect!["[1, 1, 2, 3, 3]"].assert_eq(&format!("{list:?}"));
        let mut list = list;
        list.dedup_sorted();
        expect!["[1, 2, 3]"].assert_eq(&format!("{list:?}"));
    }
}
