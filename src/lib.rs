#![doc = include_str!("../README.md")]
#![warn(missing_docs, unreachable_pub, rust_2021_compatibility)]
#![warn(clippy::all, clippy::pedantic)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bigint;
mod buffer;
pub mod error;
mod limb;

pub use bigint::BigInt;
pub use error::ParseBigIntError;
