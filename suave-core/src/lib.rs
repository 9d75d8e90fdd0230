//! Polymorphic transaction payloads and the SUAVE confidential compute
//! envelope.
//!
//! This crate provides:
//! - The [`TxData`] capability contract shared by every payload variant
//! - Legacy, EIP-2930, EIP-1559 and EIP-4844 payloads
//! - The [`ConfidentialComputeRequest`] payload, signed by a requester
//! - The [`SuaveTransaction`] envelope, signed by an execution node
//! - The immutable [`Transaction`] wrapper handed between subsystems
//!
//! # Ownership
//!
//! Every payload can be deep-copied with [`TxData::copy`]. The copy shares
//! nothing with its source, so a transaction held by the pool and one being
//! re-signed by a client never observe each other's mutations.
//!
//! # Signature layers
//!
//! An envelope carries two independent signatures: the requester's, inside
//! the wrapped request, and the execution node's, on the envelope itself.
//! The envelope accessors only ever expose the latter.

#![no_std]

extern crate alloc;

pub mod envelope;
pub mod transaction;
pub mod variants;

pub use envelope::SuaveTransaction;
pub use transaction::{SignatureLayer, Transaction};
pub use variants::{
    copy_address, AccessListTx, BlobTx, ConfidentialComputeRequest, DynamicFeeTx, LegacyTx,
    TxData, TxInner,
};

pub use num_bigint::BigUint;
pub use suave_common::{AccessList, AccessTuple, Address, Hash256, TxError, TxType};
