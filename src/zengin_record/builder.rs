// --- Record builders ---
//
// Each builder feeds values into a RecordWriter in layout order. Constant and
// filler fields are written by the writer itself, so a builder only supplies
// the Numeric and Text fields.

use crate::batch::model::{TrailerAggregate, TransferHeader, TransferLineItem};
use crate::charset::normalize;
use crate::zengin_record::field::{digits_only, pad_left, pad_right};
use crate::zengin_record::layout::{FieldKind, FieldSpec, RECORD_LEN};
use crate::zengin_record::record::{EncodedRecord, RecordType};

struct RecordWriter {
    record_type: RecordType,
    layout: &'static [FieldSpec],
    next: usize,
    buf: String,
}

impl RecordWriter {
    fn new(record_type: RecordType) -> Self {
        Self {
            record_type,
            layout: record_type.layout(),
            next: 0,
            buf: String::with_capacity(RECORD_LEN),
        }
    }

    /// Writes constant and filler fields up to the next value field.
    fn write_fixed(&mut self) {
        while let Some(spec) = self.layout.get(self.next) {
            match spec.kind {
                FieldKind::Constant(literal) => self.buf.push_str(&pad_right(literal, spec.width)),
                FieldKind::Filler => self.buf.push_str(&pad_right("", spec.width)),
                FieldKind::Numeric | FieldKind::Text => break,
            }
            self.next += 1;
        }
    }

    fn value(mut self, value: &str) -> Self {
        self.write_fixed();
        let Some(spec) = self.layout.get(self.next) else {
            debug_assert!(false, "too many values for {} record", self.record_type);
            return self;
        };
        let rendered = match spec.kind {
            FieldKind::Numeric => pad_left(&digits_only(&normalize(value)), spec.width, '0'),
            _ => pad_right(&normalize(value), spec.width),
        };
        self.buf.push_str(&rendered);
        self.next += 1;
        self
    }

    fn finish(mut self) -> EncodedRecord {
        self.write_fixed();
        debug_assert_eq!(self.next, self.layout.len(), "missing values for {} record", self.record_type);
        EncodedRecord::new(self.record_type, self.buf)
    }
}

pub fn header_record(header: &TransferHeader) -> EncodedRecord {
    RecordWriter::new(RecordType::Header)
        .value(header.transfer_type.code())
        .value(&header.client_code)
        .value(&header.client_name)
        .value(&header.transfer_date.mmdd())
        .value(&header.bank_code)
        .value(&header.bank_name)
        .value(&header.branch_code)
        .value(&header.branch_name)
        .value(header.account_type.code())
        .value(&header.account_number)
        .finish()
}

pub fn data_record(item: &TransferLineItem) -> EncodedRecord {
    RecordWriter::new(RecordType::Data)
        .value(&item.bank_code)
        .value(&item.bank_name)
        .value(&item.branch_code)
        .value(&item.branch_name)
        .value(item.account_type.code())
        .value(&item.account_number)
        .value(&item.recipient_name)
        .value(&item.amount_digits())
        .finish()
}

pub fn trailer_record(aggregate: &TrailerAggregate) -> EncodedRecord {
    RecordWriter::new(RecordType::Trailer)
        .value(&aggregate.count().to_string())
        .value(&aggregate.total_amount().to_string())
        .finish()
}

pub fn end_record() -> EncodedRecord {
    RecordWriter::new(RecordType::End).finish()
}
