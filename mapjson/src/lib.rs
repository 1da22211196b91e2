// SPDX-License-Identifier: Apache-2.0

//! A schema-driven JSON codec for fixed-layout destinations.
//!
//! The caller declares a [`Slot`] tree binding JSON shape to native
//! destinations up front; [`decode`] populates those destinations in place
//! and [`encode`] renders them back to JSON text. No document tree is built
//! and nothing is heap-allocated: decoding works over a fixed-capacity
//! [`Arena`] of parser frames.

#![cfg_attr(not(test), no_std)]

mod arena;
mod classify;
mod convert;
mod decoder;
mod encoder;
mod error;
mod mapping;
mod resolver;
mod tokenizer;

pub use arena::{Arena, DEFAULT_DEPTH, DEFAULT_POOL};
pub use decoder::{decode, decode_with};
pub use encoder::encode;
pub use error::Error;
pub use mapping::{Attr, FloatSlot, IntSlot, Slot};
