//! Growable list of booleans packed eight to a byte.
//!
//! # Examples
//!
//! ```rust
//! use bit_list::BitList;
//!
//! let mut bits = BitList::from_slice(&[true, false, true, false, true, false, true, false]);
//! bits.insert(3, true).unwrap();
//!
//! assert_eq!(bits.len(), 9);
//! assert_eq!(
//!     bits.to_vec(),
//!     vec![true, false, true, true, false, true, false, true, false]
//! );
//!
//! assert_eq!(bits.remove(8), Ok(false));
//! assert_eq!(bits.as_bytes().len(), 1);
//! ```
use crate::BitListError;
use crate::bit_ops::{self, WORD_BITS};
use crate::cursor::Cursor;
use raw_bytes::{Container, Vec};

type Result<T> = core::result::Result<T, BitListError>;

/// An ordered, mutable sequence of `bool` stored one bit per element.
///
/// Element `i` is bit `i % 8` of byte `i / 8`. The storage always holds exactly
/// `ceil(len / 8)` bytes; bits of the last byte past `len` are unspecified.
#[derive(Clone, Default)]
pub struct BitList {
    storage: Container<u8>,
    len: usize,
}

impl BitList {
    /// Creates an empty list without allocating.
    pub fn new() -> Self {
        Self {
            storage: Container::new(),
            len: 0,
        }
    }

    /// Creates an empty list with room for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_list::BitList;
    ///
    /// let bits = BitList::with_capacity(12);
    /// assert!(bits.is_empty());
    /// assert!(bits.capacity() >= 12);
    /// assert_eq!(bits.capacity() % 8, 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Container::with_capacity(bit_ops::words_for(capacity)),
            len: 0,
        }
    }

    /// Creates a list holding a copy of `values`.
    pub fn from_slice(values: &[bool]) -> Self {
        values.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the list can hold without reallocating. Always a
    /// multiple of 8.
    pub fn capacity(&self) -> usize {
        self.storage.capacity() * WORD_BITS
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        let needed = bit_ops::words_for(self.len.saturating_add(additional));
        self.storage.reserve(needed.saturating_sub(self.storage.len()));
    }

    /// The packed words. Bits of the last word at offsets `>= len % 8` are
    /// unspecified.
    pub fn as_bytes(&self) -> &[u8] {
        self.storage.as_slice()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// `BitListError::IndexOutOfBounds` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        let (sub, offset) = bit_ops::address(index);
        Ok(bit_ops::get_bit(*self.storage.get(sub)?, offset))
    }

    /// Overwrites the element at `index`. Never changes the length.
    ///
    /// # Errors
    ///
    /// `BitListError::IndexOutOfBounds` if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_list::BitList;
    ///
    /// let mut bits = BitList::from_slice(&[false; 10]);
    /// bits.set(9, true).unwrap();
    /// assert_eq!(bits.get(9), Ok(true));
    /// assert!(bits.set(10, true).is_err());
    /// ```
    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_index(index)?;
        let (sub, offset) = bit_ops::address(index);
        bit_ops::set_bit(self.storage.get_mut(sub)?, offset, value);
        Ok(())
    }

    pub fn first(&self) -> Option<bool> {
        self.get(0).ok()
    }

    pub fn last(&self) -> Option<bool> {
        self.len.checked_sub(1).and_then(|i| self.get(i).ok())
    }

    /// Appends an element, growing the storage by one word when the last word
    /// is full.
    pub fn push(&mut self, value: bool) {
        let (sub, offset) = bit_ops::address(self.len);
        if offset == 0 {
            self.storage.push(0);
        }
        bit_ops::set_bit(&mut self.storage[sub], offset, value);
        self.len += 1;
    }

    /// Inserts `value` at `index`, moving every later element up by one.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// `BitListError::IndexOutOfBounds` if `index > len()`. The list is left
    /// untouched.
    pub fn insert(&mut self, index: usize, value: bool) -> Result<()> {
        if index > self.len {
            return Err(BitListError::IndexOutOfBounds(index, self.len));
        }
        if self.len % WORD_BITS == 0 {
            self.storage.push(0);
        }

        let (sub, offset) = bit_ops::address(index);
        let words = self.storage.as_mut_slice();
        let mut carry = bit_ops::shift_up(&mut words[sub], offset, value);
        for word in &mut words[sub + 1..] {
            carry = bit_ops::shift_up(word, 0, carry);
        }

        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, moving every later element
    /// down by one.
    ///
    /// # Errors
    ///
    /// `BitListError::IndexOutOfBounds` if `index >= len()`. The list is left
    /// untouched.
    pub fn remove(&mut self, index: usize) -> Result<bool> {
        self.check_index(index)?;

        let (sub, offset) = bit_ops::address(index);
        let words = self.storage.as_mut_slice();
        let mut carry = false;
        for word in words[sub + 1..].iter_mut().rev() {
            carry = bit_ops::shift_down(word, 0, carry);
        }
        let removed = bit_ops::shift_down(&mut words[sub], offset, carry);

        // the last word held only the element that just left
        if self.len % WORD_BITS == 1 {
            self.storage.pop();
        }
        self.len -= 1;
        Ok(removed)
    }

    /// Removes the last element, or returns `None` if the list is empty.
    pub fn pop(&mut self) -> Option<bool> {
        let last = self.len.checked_sub(1)?;
        self.remove(last).ok()
    }

    /// Removes every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.len = 0;
    }

    /// Copies every element into `dest`, starting at `dest[offset]`.
    ///
    /// # Errors
    ///
    /// - `BitListError::OffsetOutOfBounds` if `dest` is non-empty and
    ///   `offset >= dest.len()`
    /// - `BitListError::DestinationTooShort` if `dest.len() < offset + len()`
    ///
    /// Nothing is written when an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_list::BitList;
    ///
    /// let bits = BitList::from_slice(&[true, true]);
    /// let mut dest = [false; 4];
    /// bits.copy_to(&mut dest, 1).unwrap();
    /// assert_eq!(dest, [false, true, true, false]);
    ///
    /// assert!(bits.copy_to(&mut dest, 3).is_err());
    /// ```
    pub fn copy_to(&self, dest: &mut [bool], offset: usize) -> Result<()> {
        if !dest.is_empty() && offset >= dest.len() {
            return Err(BitListError::OffsetOutOfBounds(offset, dest.len()));
        }
        let needed = offset.saturating_add(self.len);
        if dest.len() < needed {
            return Err(BitListError::DestinationTooShort {
                needed,
                available: dest.len(),
            });
        }

        for (i, slot) in dest[offset..needed].iter_mut().enumerate() {
            *slot = self.get(i)?;
        }
        Ok(())
    }

    pub fn to_vec(&self) -> Vec<bool> {
        self.iter().collect()
    }

    /// Always fails: membership tests are not offered on a packed list.
    pub fn contains(&self, _value: bool) -> Result<bool> {
        Err(BitListError::Unsupported("contains"))
    }

    /// Always fails: searching by value is not offered on a packed list.
    pub fn index_of(&self, _value: bool) -> Result<usize> {
        Err(BitListError::Unsupported("index_of"))
    }

    /// Always fails: removing by value is not offered on a packed list. Use
    /// [`BitList::remove`] with an index instead.
    pub fn remove_item(&mut self, _value: bool) -> Result<bool> {
        Err(BitListError::Unsupported("remove_item"))
    }

    /// Returns a restartable cursor positioned before the first element.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            front: 0,
            back: self.len,
        }
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(BitListError::IndexOutOfBounds(index, self.len))
        }
    }

    #[inline]
    fn bit(&self, index: usize) -> bool {
        debug_assert!(index < self.len);
        let (sub, offset) = bit_ops::address(index);
        bit_ops::get_bit(self.storage[sub], offset)
    }
}

impl core::fmt::Debug for BitList {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for BitList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for BitList {}

impl core::ops::Index<usize> for BitList {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(true) => &true,
            Ok(false) => &false,
            Err(_) => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len, index
            ),
        }
    }
}

impl FromIterator<bool> for BitList {
    /// Packs the source eight elements at a time. A source with an exact size
    /// hint is allocated up front; anything else grows one word per eight
    /// elements.
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = match iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Self::with_capacity(lower),
            _ => Self::new(),
        };

        let mut word = 0u8;
        for value in iter {
            let offset = list.len % WORD_BITS;
            bit_ops::set_bit(&mut word, offset, value);
            list.len += 1;
            if offset == WORD_BITS - 1 {
                list.storage.push(word);
                word = 0;
            }
        }
        if list.len % WORD_BITS != 0 {
            list.storage.push(word);
        }
        list
    }
}

impl Extend<bool> for BitList {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl From<&[bool]> for BitList {
    fn from(values: &[bool]) -> Self {
        Self::from_slice(values)
    }
}

impl<const N: usize> From<[bool; N]> for BitList {
    fn from(values: [bool; N]) -> Self {
        values.into_iter().collect()
    }
}

impl From<Vec<bool>> for BitList {
    fn from(values: Vec<bool>) -> Self {
        values.into_iter().collect()
    }
}

/// Double-ended iterator over the elements of a [`BitList`].
pub struct Iter<'a> {
    list: &'a BitList,
    front: usize,
    back: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let value = self.list.bit(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.list.bit(self.back))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a BitList {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
