// --- Zengin record layouts ---
//
// Offsets are not stored: a field starts where the previous one ends. The
// const assertions at the bottom pin every layout to RECORD_LEN.

pub const RECORD_LEN: usize = 120;
pub const DATA_AMOUNT_WIDTH: usize = 10;
pub const TRAILER_COUNT_WIDTH: usize = 6;
pub const TRAILER_AMOUNT_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Literal written as-is
    Constant(&'static str),
    /// Normalized, reduced to ASCII digits, zero-padded on the left
    Numeric,
    /// Normalized, space-padded on the right
    Text,
    /// Spaces
    Filler,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub width: usize,
    pub kind: FieldKind,
}

const fn field(name: &'static str, width: usize, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, width, kind }
}

use FieldKind::*;

pub const HEADER_LAYOUT: &[FieldSpec] = &[
    field("record_type", 1, Constant("1")),
    field("transfer_type_code", 2, Numeric),
    field("code_type", 1, Constant("0")),
    field("client_code", 10, Numeric),
    field("client_name", 40, Text),
    field("transfer_date", 4, Numeric),
    field("bank_code", 4, Numeric),
    field("bank_name", 15, Text),
    field("branch_code", 3, Numeric),
    field("branch_name", 15, Text),
    field("account_type", 1, Numeric),
    field("account_number", 7, Numeric),
    field("dummy", 17, Filler),
];

pub const DATA_LAYOUT: &[FieldSpec] = &[
    field("record_type", 1, Constant("2")),
    field("bank_code", 4, Numeric),
    field("bank_name", 15, Text),
    field("branch_code", 3, Numeric),
    field("branch_name", 15, Text),
    field("clearing_house", 4, Filler),
    field("account_type", 1, Numeric),
    field("account_number", 7, Numeric),
    field("recipient_name", 30, Text),
    field("amount", DATA_AMOUNT_WIDTH, Numeric),
    field("new_code", 1, Constant("0")),
    field("edi_info", 20, Filler),
    field("transfer_designation", 1, Filler),
    field("identification", 1, Filler),
    field("dummy", 7, Filler),
];

pub const TRAILER_LAYOUT: &[FieldSpec] = &[
    field("record_type", 1, Constant("8")),
    field("total_count", TRAILER_COUNT_WIDTH, Numeric),
    field("total_amount", TRAILER_AMOUNT_WIDTH, Numeric),
    field("dummy", 101, Filler),
];

pub const END_LAYOUT: &[FieldSpec] = &[
    field("record_type", 1, Constant("9")),
    field("dummy", 119, Filler),
];

pub const fn layout_width(layout: &[FieldSpec]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < layout.len() {
        total += layout[i].width;
        i += 1;
    }
    total
}

/// 10^width: a numeric field of `width` digits holds values modulo this.
pub const fn numeric_modulus(width: usize) -> u64 {
    let mut modulus = 1u64;
    let mut i = 0;
    while i < width {
        modulus *= 10;
        i += 1;
    }
    modulus
}

/// Byte range of the named field, if the layout has it.
pub fn field_range(layout: &[FieldSpec], name: &str) -> Option<std::ops::Range<usize>> {
    let mut offset = 0;
    for spec in layout {
        if spec.name == name {
            return Some(offset..offset + spec.width);
        }
        offset += spec.width;
    }
    None
}

const _: () = assert!(layout_width(HEADER_LAYOUT) == RECORD_LEN);
const _: () = assert!(layout_width(DATA_LAYOUT) == RECORD_LEN);
const _: () = assert!(layout_width(TRAILER_LAYOUT) == RECORD_LEN);
const _: () = assert!(layout_width(END_LAYOUT) == RECORD_LEN);
