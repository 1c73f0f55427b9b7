// --- Line item CSV ingestion ---
//
// Columns, no header row:
// bankCode,bankName,branchCode,branchName,accountType,accountNumber,recipientName,amount

use crate::batch::model::{AccountType, TransferLineItem};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

pub const COLUMNS: [&str; 8] = [
    "bankCode",
    "bankName",
    "branchCode",
    "branchName",
    "accountType",
    "accountNumber",
    "recipientName",
    "amount",
];

#[derive(Debug, Error)]
pub enum InputError {
    #[error("line {line}: unrecognised account type {value:?}")]
    InvalidAccountType { line: u64, value: String },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn record_to_item(record: &StringRecord) -> Result<TransferLineItem, InputError> {
    let col = |idx: usize| record.get(idx).unwrap_or("").to_string();
    let line = record.position().map(|p| p.line()).unwrap_or(0);

    let raw_account_type = col(4);
    let account_type = if raw_account_type.is_empty() {
        AccountType::default()
    } else {
        raw_account_type
            .parse::<AccountType>()
            .map_err(|_| InputError::InvalidAccountType {
                line,
                value: raw_account_type.clone(),
            })?
    };

    Ok(TransferLineItem {
        bank_code: col(0),
        bank_name: col(1),
        branch_code: col(2),
        branch_name: col(3),
        account_type,
        account_number: col(5),
        recipient_name: col(6),
        amount: col(7),
    })
}

/// Reads line items from a headerless CSV payload. Short rows are kept with
/// empty trailing fields; the encoder decides whether they are usable.
pub fn parse_line_items<R: Read>(reader: R) -> Result<Vec<TransferLineItem>, InputError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut items = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        items.push(record_to_item(&record)?);
    }
    debug!("Parsed {} line items", items.len());
    Ok(items)
}

pub fn read_line_items(path: &Path) -> Result<Vec<TransferLineItem>, InputError> {
    let file = File::open(path)?;
    parse_line_items(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows_in_order() {
        let csv = "0001,ミズホ,001,ホンテン,1,1234567,タナカ タロウ,50000\n\
                   0005, ミツビシ ,002,シブヤ,当座,7654321,ヤマダ ハナコ,\"1,200\"\n";
        let items = parse_line_items(csv.as_bytes()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].recipient_name, "タナカ タロウ");
        assert_eq!(items[0].account_type, AccountType::Ordinary);
        assert_eq!(items[1].bank_name, "ミツビシ");
        assert_eq!(items[1].account_type, AccountType::Current);
        assert_eq!(items[1].amount, "1,200");
    }

    #[test]
    fn test_short_rows_and_blank_lines() {
        let csv = "0001,,001\n\n,,,,,,,\n0001,,001,,,1234567,ｱ,10\n";
        let items = parse_line_items(csv.as_bytes()).unwrap();
        assert_eq!(items.len(), 2);
        assert!(!items[0].is_valid());
        assert_eq!(items[0].amount, "");
        assert!(items[1].is_valid());
    }

    #[test]
    fn test_bad_account_type_reports_line() {
        let csv = "0001,,001,,1,1,ｱ,1\n0001,,001,,9,1,ｱ,1\n";
        match parse_line_items(csv.as_bytes()) {
            Err(InputError::InvalidAccountType { line, value }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "9");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
