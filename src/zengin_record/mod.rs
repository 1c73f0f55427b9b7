pub mod builder;
pub mod field;
pub mod layout;
pub mod record;

pub use builder::{data_record, end_record, header_record, trailer_record};
pub use field::{pad_left, pad_right};
pub use layout::{FieldKind, FieldSpec, RECORD_LEN};
pub use record::{EncodedRecord, RecordError, RecordType};
