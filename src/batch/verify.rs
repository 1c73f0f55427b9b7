//! Reads a finished Zengin file back and checks its structure.
//!
//! The checks are the ones a receiving bank applies before accepting an
//! upload: every record is 120 bytes, records come in the order
//! header, data..., trailer, end, and the trailer totals agree with the data
//! records. Trailer fields are fixed-width, so they are compared modulo their
//! digit capacity.

use crate::zengin_record::layout::{numeric_modulus, TRAILER_AMOUNT_WIDTH, TRAILER_COUNT_WIDTH};
use crate::zengin_record::{EncodedRecord, RecordError, RecordType};
use log::debug;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("record {index}: {source}")]
    Record { index: usize, source: RecordError },

    #[error("record {index}: expected {expected} record, found {found}")]
    UnexpectedRecord {
        index: usize,
        expected: &'static str,
        found: RecordType,
    },

    #[error("record {index}: {found} record after end record")]
    TrailingRecord { index: usize, found: RecordType },

    #[error("file ends before {expected} record")]
    Truncated { expected: &'static str },

    #[error("record {index}: field {field} is not numeric")]
    NonNumeric { index: usize, field: &'static str },

    #[error("trailer count {trailer} does not match {actual} data records")]
    CountMismatch { trailer: u64, actual: u64 },

    #[error("trailer amount {trailer} does not match data total {actual}")]
    AmountMismatch { trailer: u64, actual: u64 },
}

/// What a verified file contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub transfer_type_code: String,
    pub client_code: String,
    pub client_name: String,
    pub transfer_date: String,
    pub record_count: usize,
    pub data_count: u64,
    pub total_amount: u64,
}

fn split_records(bytes: &[u8]) -> Vec<&[u8]> {
    let body = bytes.strip_suffix(b"\r\n").unwrap_or(bytes);
    if body.is_empty() {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut rest = body;
    while let Some(pos) = rest.windows(2).position(|w| w == b"\r\n") {
        lines.push(&rest[..pos]);
        rest = &rest[pos + 2..];
    }
    lines.push(rest);
    lines
}

fn numeric(record: &EncodedRecord, index: usize, field: &'static str) -> Result<u64, VerifyError> {
    record
        .numeric_field(field)
        .ok_or(VerifyError::NonNumeric { index, field })
}

fn expect_type(
    record: Option<&EncodedRecord>,
    index: usize,
    expected: RecordType,
    expected_name: &'static str,
) -> Result<(), VerifyError> {
    match record {
        None => Err(VerifyError::Truncated {
            expected: expected_name,
        }),
        Some(r) if r.record_type() != expected => Err(VerifyError::UnexpectedRecord {
            index,
            expected: expected_name,
            found: r.record_type(),
        }),
        Some(_) => Ok(()),
    }
}

/// Parses and checks a Shift_JIS Zengin file. A single trailing CRLF is
/// accepted.
pub fn read_batch(bytes: &[u8]) -> Result<BatchSummary, VerifyError> {
    let records = split_records(bytes)
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            EncodedRecord::parse_from_bytes(line).map_err(|source| VerifyError::Record {
                index: index + 1,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    expect_type(records.first(), 1, RecordType::Header, "header")?;
    let header = &records[0];

    let mut index = 1;
    let mut data_count = 0u64;
    let mut data_total = 0u64;
    while let Some(record) = records.get(index) {
        if record.record_type() != RecordType::Data {
            break;
        }
        data_count += 1;
        data_total += numeric(record, index + 1, "amount")?;
        index += 1;
    }
    if data_count == 0 {
        expect_type(records.get(index), index + 1, RecordType::Data, "data")?;
    }

    expect_type(records.get(index), index + 1, RecordType::Trailer, "trailer")?;
    let trailer = &records[index];
    let trailer_count = numeric(trailer, index + 1, "total_count")?;
    let trailer_amount = numeric(trailer, index + 1, "total_amount")?;
    index += 1;

    expect_type(records.get(index), index + 1, RecordType::End, "end")?;
    index += 1;

    if let Some(extra) = records.get(index) {
        return Err(VerifyError::TrailingRecord {
            index: index + 1,
            found: extra.record_type(),
        });
    }

    if trailer_count != data_count % numeric_modulus(TRAILER_COUNT_WIDTH) {
        return Err(VerifyError::CountMismatch {
            trailer: trailer_count,
            actual: data_count,
        });
    }
    if trailer_amount != data_total % numeric_modulus(TRAILER_AMOUNT_WIDTH) {
        return Err(VerifyError::AmountMismatch {
            trailer: trailer_amount,
            actual: data_total,
        });
    }

    let field = |name: &str| header.field(name).unwrap_or_default().trim_end().to_string();
    let summary = BatchSummary {
        transfer_type_code: field("transfer_type_code"),
        client_code: field("client_code"),
        client_name: field("client_name"),
        transfer_date: field("transfer_date"),
        record_count: records.len(),
        data_count,
        total_amount: data_total,
    };
    debug!("Verified batch: {:?}", summary);
    Ok(summary)
}
