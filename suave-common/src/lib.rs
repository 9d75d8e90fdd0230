//! Common types for SUAVE transaction envelopes.
//!
//! This crate provides the primitive types shared by every transaction
//! variant: addresses, hashes, access lists and the discriminant byte
//! space used to tag each variant on the wire.
//!
//! # Discriminants
//!
//! Each variant owns one byte in the [`TxType`] table. New variants must
//! claim an unused byte; existing bytes are never reassigned.

#![no_std]

extern crate alloc;

pub mod error;
pub mod types;

pub use error::TxError;
pub use types::*;
