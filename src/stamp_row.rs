//! The rows of a signature stamp.
//!
//! Rows come from a fixed, ordered list of `(label, value, kind)` entries.
//! Entries with an empty value are dropped. Which edges of a row get a
//! border only depends on the row's kind and position in the remaining list.

use crate::signature_record::SignatureRecord;
use crate::table::BorderSides;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampRowKind {
    Signer,
    Serial,
    Validity,
    Timestamp,
    Certified,
}

impl StampRowKind {
    pub fn label(&self) -> &'static str {
        match self {
            StampRowKind::Signer => "Signed with electronic signature",
            StampRowKind::Serial => "Certificate serial number",
            StampRowKind::Validity => "Certificate validity period",
            StampRowKind::Timestamp => "Timestamp",
            StampRowKind::Certified => "Signature certified",
        }
    }

    /// Rows that are only shown when the signature carries time info.
    pub fn is_optional(&self) -> bool {
        matches!(self, StampRowKind::Timestamp | StampRowKind::Certified)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampRow<'a> {
    pub kind: StampRowKind,
    pub value: &'a str,
}

impl<'a> StampRow<'a> {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Rows of the stamp for `record`, in display order.
pub fn stamp_rows(record: &SignatureRecord) -> Vec<StampRow<'_>> {
    [
        (StampRowKind::Signer, record.employee_full_name()),
        (StampRowKind::Serial, record.certificate_serial()),
        (StampRowKind::Validity, record.validity_period_text()),
        (StampRowKind::Timestamp, record.signing_time_text()),
        (StampRowKind::Certified, record.signature_timestamp_text()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(kind, value)| StampRow { kind, value })
    .collect()
}

/// Index of the first time row, the one separated from the certificate rows.
fn first_optional_index(rows: &[StampRow]) -> Option<usize> {
    rows.iter().position(|row| row.kind.is_optional())
}

/// Edges of row `index` that get a border in the framed layout.
/// The frame itself is drawn by the outer table, so only the separator above
/// the time rows is added here.
pub fn framed_edges(rows: &[StampRow], index: usize) -> BorderSides {
    if first_optional_index(rows) == Some(index) {
        BorderSides::TOP
    } else {
        BorderSides::empty()
    }
}

/// Edges of row `index` that get a border in the flat layout.
/// The first row and the time separator get a top border, the table is closed
/// with a bottom border on whatever row ends up last.
pub fn flat_edges(rows: &[StampRow], index: usize) -> BorderSides {
    let mut sides = BorderSides::empty();
    if index == 0 || first_optional_index(rows) == Some(index) {
        sides |= BorderSides::TOP;
    }
    if index + 1 == rows.len() {
        sides |= BorderSides::BOTTOM;
    }
    sides
}
