//! # raw_bytes
//!
//! A growable buffer of plain-old-data words. Used as the backing store for
//! the bit-packed containers in this workspace.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
pub use std::vec::Vec;

#[cfg(not(feature = "std"))]
pub use alloc::vec::Vec;

pub mod container;
pub mod error;

pub use container::Container;
pub use error::ContainerError;
