use crate::{ContainerError, Vec};
use bytemuck::Pod;

/// Growable in-memory buffer of plain-old-data words.
///
/// `Container<T>` wraps a heap-allocated vector of `T`, where `T` must implement
/// [`bytemuck::Pod`] so the whole buffer can be viewed as raw bytes with
/// [`Container::as_bytes`].
///
/// Unlike a bare `Vec`, element access is checked and reported through
/// [`ContainerError`] instead of panicking, and the capacity the buffer was
/// created with is observable through [`Container::capacity`].
///
/// # Examples
///
/// ```
/// use raw_bytes::Container;
///
/// let mut words = Container::<u8>::with_capacity(4);
/// words.push(0b1010_0001);
/// words.push(0b0000_0011);
///
/// assert_eq!(words.len(), 2);
/// assert!(words.capacity() >= 4);
/// assert_eq!(*words.get(1).unwrap(), 0b0000_0011);
/// assert!(words.get(2).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container<T: Pod> {
    words: Vec<T>,
}

impl<T: Pod> Container<T> {
    /// Creates an empty container without allocating.
    pub fn new() -> Self {
        Container { words: Vec::new() }
    }

    /// Creates an empty container with room for at least `capacity` words.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_bytes::Container;
    ///
    /// let c = Container::<u32>::with_capacity(10);
    /// assert!(c.is_empty());
    /// assert!(c.capacity() >= 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Container {
            words: Vec::with_capacity(capacity),
        }
    }

    /// Creates a container holding a copy of `values`.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_bytes::Container;
    ///
    /// let c = Container::from_slice(&[1u16, 2, 3]);
    /// assert_eq!(c.len(), 3);
    /// assert_eq!(c.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn from_slice(values: &[T]) -> Self {
        Container {
            words: values.to_vec(),
        }
    }

    /// Returns the number of words in the container.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the container holds no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the number of words the container can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.capacity()
    }

    /// Returns a reference to the word at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::OutOfBounds` if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        let len = self.words.len();
        self.words
            .get(index)
            .ok_or(ContainerError::OutOfBounds { index, len })
    }

    /// Returns a mutable reference to the word at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::OutOfBounds` if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_bytes::Container;
    ///
    /// let mut c = Container::from_slice(&[0b0001u8]);
    /// *c.get_mut(0).unwrap() |= 0b1000;
    /// assert_eq!(c[0], 0b1001);
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let len = self.words.len();
        self.words
            .get_mut(index)
            .ok_or(ContainerError::OutOfBounds { index, len })
    }

    /// Overwrites the word at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::OutOfBounds` if `index >= len()`.
    pub fn write(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        let slot = self.get_mut(index)?;
        *slot = value;
        Ok(())
    }

    /// Appends a word to the back of the container.
    pub fn push(&mut self, value: T) {
        self.words.push(value);
    }

    /// Removes the last word and returns it, or `None` if the container is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_bytes::Container;
    ///
    /// let mut c = Container::from_slice(&[7u8, 9]);
    /// assert_eq!(c.pop(), Some(9));
    /// assert_eq!(c.pop(), Some(7));
    /// assert_eq!(c.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.words.pop()
    }

    /// Reserves room for at least `additional` more words.
    pub fn reserve(&mut self, additional: usize) {
        self.words.reserve(additional);
    }

    /// Removes every word, keeping the allocation.
    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Returns the words as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.words.as_slice()
    }

    /// Returns the words as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.words.as_mut_slice()
    }

    /// Returns the raw bytes backing the container.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_bytes::Container;
    ///
    /// let c = Container::from_slice(&[0x0201u16]);
    /// assert_eq!(c.as_bytes().len(), 2);
    /// ```
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.words.as_slice())
    }

    /// Returns an iterator over the words.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.words.iter()
    }
}

impl<T: Pod> core::ops::Index<usize> for Container<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.words[index]
    }
}

impl<T: Pod> core::ops::IndexMut<usize> for Container<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.words[index]
    }
}
