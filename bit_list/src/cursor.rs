//! Restartable forward cursor over a [`BitList`].
//!
//! The cursor holds nothing but a position and reads each element through the
//! list when asked, so it always observes the list as it is now.

use crate::{BitList, BitListError};

type Result<T> = core::result::Result<T, BitListError>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CursorState {
    /// Before the first element; `advance` has not been called since creation
    /// or the last `reset`.
    NotStarted,
    /// On the element at this index.
    At(usize),
    /// Past the last element.
    Finished,
}

/// A forward cursor with explicit `advance`/`current`/`reset` steps.
///
/// # Examples
///
/// ```
/// use bit_list::{BitList, BitListError};
///
/// let bits = BitList::from_slice(&[true, false]);
/// let mut cursor = bits.cursor();
///
/// assert_eq!(cursor.current(), Err(BitListError::CursorNotStarted));
/// assert!(cursor.advance());
/// assert_eq!(cursor.current(), Ok(true));
/// assert!(cursor.advance());
/// assert_eq!(cursor.current(), Ok(false));
/// assert!(!cursor.advance());
/// assert_eq!(cursor.current(), Err(BitListError::CursorFinished));
///
/// cursor.reset();
/// assert!(cursor.advance());
/// assert_eq!(cursor.current(), Ok(true));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    list: &'a BitList,
    state: CursorState,
}

impl<'a> Cursor<'a> {
    pub fn new(list: &'a BitList) -> Self {
        Self {
            list,
            state: CursorState::NotStarted,
        }
    }

    /// Moves to the next element. Returns `false`, and finishes the cursor,
    /// once there is none.
    pub fn advance(&mut self) -> bool {
        let next = match self.state {
            CursorState::NotStarted => 0,
            CursorState::At(i) => i + 1,
            CursorState::Finished => return false,
        };
        if next < self.list.len() {
            self.state = CursorState::At(next);
            true
        } else {
            self.state = CursorState::Finished;
            false
        }
    }

    /// Reads the element under the cursor.
    ///
    /// # Errors
    ///
    /// - `BitListError::CursorNotStarted` before the first `advance`
    /// - `BitListError::CursorFinished` once `advance` has returned `false`
    pub fn current(&self) -> Result<bool> {
        match self.state {
            CursorState::NotStarted => Err(BitListError::CursorNotStarted),
            CursorState::Finished => Err(BitListError::CursorFinished),
            CursorState::At(i) => self.list.get(i),
        }
    }

    /// Goes back to before the first element.
    pub fn reset(&mut self) {
        self.state = CursorState::NotStarted;
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn position(&self) -> Option<usize> {
        match self.state {
            CursorState::At(i) => Some(i),
            _ => None,
        }
    }
}
