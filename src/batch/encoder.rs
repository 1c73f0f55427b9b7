// --- Zengin batch encoder ---

use crate::batch::model::{TrailerAggregate, TransferHeader, TransferLineItem};
use crate::charset::sjis::{self, EncodingError};
use crate::zengin_record::field::digits_only;
use crate::zengin_record::layout::{
    numeric_modulus, DATA_AMOUNT_WIDTH, TRAILER_AMOUNT_WIDTH, TRAILER_COUNT_WIDTH,
};
use crate::zengin_record::{data_record, end_record, header_record, trailer_record, EncodedRecord};
use log::{debug, info, warn};
use num_format::{Locale, ToFormattedString};
use rayon::prelude::*;
use thiserror::Error;

/// Records are joined with CRLF regardless of platform.
pub const RECORD_SEPARATOR: &str = "\r\n";

const TRAILER_COUNT_MAX: u64 = numeric_modulus(TRAILER_COUNT_WIDTH) - 1;
const TRAILER_AMOUNT_MAX: u64 = numeric_modulus(TRAILER_AMOUNT_WIDTH) - 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required header field is empty: {field}")]
    MissingHeaderField { field: &'static str },

    #[error("no valid line items (each needs bank code, branch code, account number, recipient name and amount)")]
    NoValidLineItems,
}

fn get_par_min_items() -> usize {
    std::env::var("ZENGIN_PAR_MIN_ITEMS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(256)
}

/// A finished batch: header, data records in input order, trailer, end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBatch {
    records: Vec<EncodedRecord>,
    aggregate: TrailerAggregate,
}

impl EncodedBatch {
    pub fn records(&self) -> &[EncodedRecord] {
        &self.records
    }

    pub fn aggregate(&self) -> TrailerAggregate {
        self.aggregate
    }

    /// Records joined by CRLF, no trailing separator.
    pub fn to_text(&self) -> String {
        self.records
            .iter()
            .map(EncodedRecord::as_str)
            .collect::<Vec<_>>()
            .join(RECORD_SEPARATOR)
    }

    /// The text as Shift_JIS bytes, ready for upload.
    pub fn to_legacy_bytes(&self) -> Result<Vec<u8>, EncodingError> {
        sjis::encode(&self.to_text())
    }
}

fn validate_header(header: &TransferHeader) -> Result<(), ValidationError> {
    if header.client_code.trim().is_empty() {
        return Err(ValidationError::MissingHeaderField {
            field: "client_code",
        });
    }
    if header.client_name.trim().is_empty() {
        return Err(ValidationError::MissingHeaderField {
            field: "client_name",
        });
    }
    Ok(())
}

fn warn_on_lossy_amount(index: usize, item: &TransferLineItem) {
    if item.amount.contains('-') {
        warn!(
            "Line item #{}: amount {:?} carries a minus sign, which the format cannot express; encoding {}",
            index + 1,
            item.amount,
            item.amount_yen()
        );
    }
    if digits_only(&item.amount).len() > DATA_AMOUNT_WIDTH {
        warn!(
            "Line item #{}: amount {:?} exceeds {} digits and is truncated",
            index + 1,
            item.amount,
            DATA_AMOUNT_WIDTH
        );
    }
}

/// Validates and encodes a batch, keeping the tagged records.
pub fn encode_batch(
    header: &TransferHeader,
    items: &[TransferLineItem],
) -> Result<EncodedBatch, ValidationError> {
    validate_header(header)?;

    let valid: Vec<&TransferLineItem> = items
        .iter()
        .enumerate()
        .filter(|(i, item)| {
            let ok = item.is_valid();
            if !ok {
                debug!("Skipping line item #{}: missing required field", i + 1);
            }
            ok
        })
        .map(|(i, item)| {
            warn_on_lossy_amount(i, item);
            item
        })
        .collect();

    if valid.is_empty() {
        return Err(ValidationError::NoValidLineItems);
    }

    let aggregate = TrailerAggregate::from_items(valid.iter().copied());
    if aggregate.count() > TRAILER_COUNT_MAX {
        warn!(
            "Transfer count {} exceeds {} digits; the trailer keeps the low-order digits",
            aggregate.count().to_formatted_string(&Locale::en),
            TRAILER_COUNT_WIDTH
        );
    }
    if aggregate.total_amount() > TRAILER_AMOUNT_MAX {
        warn!(
            "Total amount {} exceeds {} digits; the trailer keeps the low-order digits",
            aggregate.total_amount().to_formatted_string(&Locale::en),
            TRAILER_AMOUNT_WIDTH
        );
    }

    // collect() on an indexed parallel iterator keeps input order
    let data: Vec<EncodedRecord> = if valid.len() >= get_par_min_items() {
        debug!("Building {} data records in parallel", valid.len());
        valid.par_iter().map(|item| data_record(item)).collect()
    } else {
        valid.iter().map(|item| data_record(item)).collect()
    };

    let mut records = Vec::with_capacity(data.len() + 3);
    records.push(header_record(header));
    records.extend(data);
    records.push(trailer_record(&aggregate));
    records.push(end_record());

    info!(
        "Encoded batch: {} of {} line items, total ¥{}",
        aggregate.count(),
        items.len(),
        aggregate.total_amount().to_formatted_string(&Locale::en)
    );

    Ok(EncodedBatch { records, aggregate })
}

/// Encodes a batch to its Zengin text form.
pub fn encode(header: &TransferHeader, items: &[TransferLineItem]) -> Result<String, ValidationError> {
    encode_batch(header, items).map(|batch| batch.to_text())
}
