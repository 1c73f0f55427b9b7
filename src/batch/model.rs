// --- Transfer batch data model ---

use crate::zengin_record::field::digits_only;
use crate::zengin_record::layout::DATA_AMOUNT_WIDTH;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised {kind}: {value:?}")]
pub struct ParseCodeError {
    pub kind: &'static str,
    pub value: String,
}

/// 種別コード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferType {
    #[default]
    General,
    Salary,
    Bonus,
}

impl TransferType {
    pub fn code(self) -> &'static str {
        match self {
            TransferType::General => "21",
            TransferType::Salary => "11",
            TransferType::Bonus => "12",
        }
    }
}

impl FromStr for TransferType {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "21" | "general" | "総合" | "総合振込" => Ok(TransferType::General),
            "11" | "salary" | "給与" | "給与振込" => Ok(TransferType::Salary),
            "12" | "bonus" | "賞与" | "賞与振込" => Ok(TransferType::Bonus),
            _ => Err(ParseCodeError {
                kind: "transfer type",
                value: s.to_string(),
            }),
        }
    }
}

/// 預金種目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountType {
    #[default]
    Ordinary,
    Current,
    Savings,
}

impl AccountType {
    pub fn code(self) -> &'static str {
        match self {
            AccountType::Ordinary => "1",
            AccountType::Current => "2",
            AccountType::Savings => "4",
        }
    }
}

impl FromStr for AccountType {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "ordinary" | "普通" => Ok(AccountType::Ordinary),
            "2" | "current" | "当座" => Ok(AccountType::Current),
            "4" | "savings" | "貯蓄" => Ok(AccountType::Savings),
            _ => Err(ParseCodeError {
                kind: "account type",
                value: s.to_string(),
            }),
        }
    }
}

/// 取組日, rendered as MMDD. Always a real calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferDate {
    month: u32,
    day: u32,
}

impl TransferDate {
    /// Fails unless month/day exists in some year; 02-29 is allowed.
    pub fn new(month: u32, day: u32) -> Result<Self, ParseCodeError> {
        // 2000 is a leap year, so 02-29 passes
        match NaiveDate::from_ymd_opt(2000, month, day) {
            Some(_) => Ok(Self { month, day }),
            None => Err(ParseCodeError {
                kind: "transfer date",
                value: format!("{:02}{:02}", month, day),
            }),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn mmdd(&self) -> String {
        format!("{:02}{:02}", self.month, self.day)
    }
}

impl From<NaiveDate> for TransferDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl FromStr for TransferDate {
    type Err = ParseCodeError;

    /// Accepts `MMDD`, `MM/DD`, `MM-DD` or a full `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCodeError {
            kind: "transfer date",
            value: s.to_string(),
        };
        let trimmed = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(date.into());
        }
        let digits = digits_only(trimmed);
        if digits.len() != 4 {
            return Err(err());
        }
        let month: u32 = digits[..2].parse().map_err(|_| err())?;
        let day: u32 = digits[2..].parse().map_err(|_| err())?;
        Self::new(month, day).map_err(|_| err())
    }
}

impl fmt::Display for TransferDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mmdd())
    }
}

/// Originator side of a batch. The encoder only borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferHeader {
    pub transfer_type: TransferType,
    pub client_code: String,
    pub client_name: String,
    pub transfer_date: TransferDate,
    pub bank_code: String,
    pub bank_name: String,
    pub branch_code: String,
    pub branch_name: String,
    pub account_type: AccountType,
    pub account_number: String,
}

/// One remittance. Fields hold the text as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferLineItem {
    pub bank_code: String,
    pub bank_name: String,
    pub branch_code: String,
    pub branch_name: String,
    pub account_type: AccountType,
    pub account_number: String,
    pub recipient_name: String,
    pub amount: String,
}

impl TransferLineItem {
    /// Bank code, branch code, account number, recipient name and amount
    /// must all be present.
    pub fn is_valid(&self) -> bool {
        [
            &self.bank_code,
            &self.branch_code,
            &self.account_number,
            &self.recipient_name,
            &self.amount,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }

    /// Amount as written to the data record: digits only, `0` when nothing
    /// numeric remains, low-order digits if longer than the field.
    pub fn amount_digits(&self) -> String {
        let digits = digits_only(&self.amount);
        if digits.is_empty() {
            return "0".to_string();
        }
        let skip = digits.len().saturating_sub(DATA_AMOUNT_WIDTH);
        digits[skip..].to_string()
    }

    pub fn amount_yen(&self) -> u64 {
        // at most DATA_AMOUNT_WIDTH digits, fits in u64
        self.amount_digits().parse().unwrap_or(0)
    }
}

/// Trailer count and amount. Only ever derived from line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrailerAggregate {
    count: u64,
    total_amount: u64,
}

impl TrailerAggregate {
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a TransferLineItem>,
    {
        items.into_iter().fold(Self::default(), |acc, item| Self {
            count: acc.count + 1,
            total_amount: acc.total_amount + item.amount_yen(),
        })
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }
}
