//! Allocation types resolved against `std` or `alloc` depending on features.
//!
//! Every module that allocates imports from here instead of naming `std` or
//! `alloc` directly, so the crate builds the same way with and without `std`.

#[cfg(feature = "std")]
pub use std::{
    borrow::{Cow, ToOwned},
    boxed::Box,
    format,
    string::{String, ToString},
    vec::Vec,
};

#[cfg(not(feature = "std"))]
pub use alloc::{
    borrow::{Cow, ToOwned},
    boxed::Box,
    format,
    string::{String, ToString},
    vec::Vec,
};
