use crate::charset::sjis::{self, EncodingError};
use crate::zengin_record::layout::{
    field_range, FieldSpec, DATA_LAYOUT, END_LAYOUT, HEADER_LAYOUT, RECORD_LEN, TRAILER_LAYOUT,
};
use std::fmt;
use thiserror::Error;

/// Record type discriminant, the first byte of every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    Header = 1,
    Data = 2,
    Trailer = 8,
    End = 9,
}

impl RecordType {
    pub fn code(self) -> char {
        match self {
            RecordType::Header => '1',
            RecordType::Data => '2',
            RecordType::Trailer => '8',
            RecordType::End => '9',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '1' => Some(RecordType::Header),
            '2' => Some(RecordType::Data),
            '8' => Some(RecordType::Trailer),
            '9' => Some(RecordType::End),
            _ => None,
        }
    }

    pub fn layout(self) -> &'static [FieldSpec] {
        match self {
            RecordType::Header => HEADER_LAYOUT,
            RecordType::Data => DATA_LAYOUT,
            RecordType::Trailer => TRAILER_LAYOUT,
            RecordType::End => END_LAYOUT,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordType::Header => "header",
            RecordType::Data => "data",
            RecordType::Trailer => "trailer",
            RecordType::End => "end",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record is {actual} bytes, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("unknown record type {0:?}")]
    UnknownType(char),

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// One 120-byte Zengin record, held as text whose every character is a single
/// Shift_JIS byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRecord {
    record_type: RecordType,
    text: String,
}

impl EncodedRecord {
    pub(crate) fn new(record_type: RecordType, text: String) -> Self {
        debug_assert_eq!(sjis::str_width(&text), RECORD_LEN, "{} record width", record_type);
        Self { record_type, text }
    }

    /// Parses one record from its text form (no line terminator). Every
    /// character must be a single Shift_JIS byte.
    pub fn parse_from_fixed(input: &str) -> Result<Self, RecordError> {
        let width = sjis::str_width(input);
        if width != RECORD_LEN {
            return Err(RecordError::WrongLength {
                expected: RECORD_LEN,
                actual: width,
            });
        }
        sjis::encode(input)?;
        let first = input.chars().next().unwrap_or(' ');
        let record_type = RecordType::from_code(first).ok_or(RecordError::UnknownType(first))?;
        Ok(Self {
            record_type,
            text: input.to_string(),
        })
    }

    /// Parses one record from its Shift_JIS bytes.
    pub fn parse_from_bytes(input: &[u8]) -> Result<Self, RecordError> {
        if input.len() != RECORD_LEN {
            return Err(RecordError::WrongLength {
                expected: RECORD_LEN,
                actual: input.len(),
            });
        }
        let text = sjis::decode(input)?;
        Self::parse_from_fixed(&text)
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodingError> {
        sjis::encode(&self.text)
    }

    /// Raw content of the named field, padding included.
    pub fn field(&self, name: &str) -> Option<String> {
        let range = field_range(self.record_type.layout(), name)?;
        Some(self.text.chars().skip(range.start).take(range.len()).collect())
    }

    /// Named field parsed as a number. Blank fields read as zero.
    pub fn numeric_field(&self, name: &str) -> Option<u64> {
        let raw = self.field(name)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Some(0);
        }
        trimmed.parse::<u64>().ok()
    }
}

impl fmt::Display for EncodedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
