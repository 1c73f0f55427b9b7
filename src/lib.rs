//! Zengin (全銀) bank-transfer batch files.
//!
//! Turns a transfer header and a list of remittances into the 120-byte
//! fixed-width records that Japanese online-banking portals accept, and reads
//! such files back for verification.

pub mod batch;
pub mod charset;
pub mod zengin_record;

pub use batch::{
    encode, encode_batch, AccountType, EncodedBatch, TransferDate, TransferHeader,
    TransferLineItem, TransferType, ValidationError,
};
pub use charset::normalize;
