//! Position-based field extraction configuration.
//!
//! The export tags each row with a key field at a fixed column and puts
//! the payload at another fixed column. The index pair differs per field
//! kind, so each kind carries its own spec.

/// One extractable field kind: the key text plus the 0-based tab-split
/// indices of the key field and the value field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub key_index: usize,
    pub value_index: usize,
}

/// Patient identifier rows.
pub const URN: FieldSpec = FieldSpec {
    key: "URNumber",
    key_index: 1,
    value_index: 2,
};

/// Imaging modality rows.
pub const MODALITY: FieldSpec = FieldSpec {
    key: "Modality",
    key_index: 5,
    value_index: 6,
};

/// Series group number rows.
pub const GROUP_NUMBER: FieldSpec = FieldSpec {
    key: "GroupNumber",
    key_index: 5,
    value_index: 6,
};
