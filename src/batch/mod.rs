pub mod encoder;
pub mod input;
pub mod model;
pub mod verify;

pub use encoder::{encode, encode_batch, EncodedBatch, ValidationError, RECORD_SEPARATOR};
pub use input::{parse_line_items, read_line_items, InputError};
pub use model::{
    AccountType, ParseCodeError, TrailerAggregate, TransferDate, TransferHeader, TransferLineItem,
    TransferType,
};
pub use verify::{read_batch, BatchSummary, VerifyError};
