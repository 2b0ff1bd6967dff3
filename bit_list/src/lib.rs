//! # bit_list
//!
//! A `no_std` compatible list of booleans packed eight to a byte.
//!
//! ```rust
//! use bit_list::BitList;
//!
//! let mut bits = BitList::new();
//! bits.push(true);
//! bits.push(false);
//! bits.insert(1, true).unwrap();
//!
//! assert_eq!(bits.to_vec(), vec![true, true, false]);
//! assert_eq!(bits.remove(0), Ok(true));
//! assert_eq!(bits.get(1), Ok(false));
//! ```
//!
//! ## Memory Savings Example
//!
//! ```rust
//! use bit_list::BitList;
//!
//! // Vec<bool>: 10_000 elements × 1 byte = 10_000 bytes
//! let standard = vec![true; 10_000];
//!
//! // BitList: 10_000 elements × 1 bit = 1_250 bytes
//! let packed = BitList::from_slice(&standard);
//! assert_eq!(packed.as_bytes().len(), 1_250);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::BitListError;

mod bit_ops;

pub mod cursor;
pub mod list;

pub use cursor::{Cursor, CursorState};
pub use list::{BitList, Iter};
