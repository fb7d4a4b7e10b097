/*
 * ==========================================================================
 * MINIPAS - A Tiny Pascal-Subset Front End
 * ==========================================================================
 *
 * File:      cursor.rs
 * Purpose:   Generic read-forward cursor over an ordered collection. Used
 *            by the lexer (over characters) and the parser (over tokens).
 *
 * License:
 * This file is part of the MINIPAS compiler project.
 *
 * MINIPAS is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

/// A read-forward, non-rewindable pointer over an ordered collection.
///
/// The cursor exposes exactly two views of the stream:
/// - `current()` peeks at the element under the cursor without advancing
/// - `consume()` returns the current element and advances one position
///
/// There is no rewind. Past-the-end access is surfaced as `None`; callers
/// that need stronger guarantees check `is_open()` first.
pub struct Cursor<T> {
    position: usize,
    collection: Vec<T>,
}

impl<T> Cursor<T> {
    /// Creates a cursor positioned at the start of `collection`.
    pub fn new(collection: Vec<T>) -> Self {
        Self {
            position: 0,
            collection,
        }
    }

    /// Peeks at the element under the cursor without advancing.
    pub fn current(&self) -> Option<&T> {
        self.collection.get(self.position)
    }

    /// Returns true while unread elements remain.
    pub fn is_open(&self) -> bool {
        self.position < self.collection.len()
    }
}

impl<T: Clone> Cursor<T> {
    /// Returns the current element and advances the cursor one position.
    pub fn consume(&mut self) -> Option<T> {
        let current = self.collection.get(self.position).cloned();
        if current.is_some() {
            self.position += 1;
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn peek_does_not_advance() {
        let cursor = Cursor::new(vec![1, 2, 3]);
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(cursor.current(), Some(&1));
    }

    #[test]
    fn consume_advances_one_position() {
        let mut cursor = Cursor::new(vec![1, 2, 3]);
        assert_eq!(cursor.consume(), Some(1));
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(cursor.consume(), Some(2));
        assert_eq!(cursor.consume(), Some(3));
        assert_eq!(cursor.consume(), None);
    }

    #[test]
    fn is_open_reports_remaining_input() {
        let mut cursor = Cursor::new(vec!['a']);
        assert!(cursor.is_open());
        cursor.consume();
        assert!(!cursor.is_open());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn empty_collection_is_closed() {
        let cursor: Cursor<u8> = Cursor::new(Vec::new());
        assert!(!cursor.is_open());
        assert_eq!(cursor.current(), None);
    }
}
