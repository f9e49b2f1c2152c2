use syndx_core::models::case::CaseRecord;

/// Ordered, append-only sequence of case records.
///
/// Insertion order is meaningful: the outbreak detector windows over the
/// most recent entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseHistory {
    records: Vec<CaseRecord>,
    next_id: u64,
}

impl CaseHistory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild from persisted records, keeping their ids.
    pub fn from_records(records: Vec<CaseRecord>) -> Self {
        let next_id = records
            .iter()
            .map(|r| r.case_id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        Self { records, next_id }
    }

    /// The id the next appended case should carry. Starts at 1.
    pub fn next_case_id(&self) -> u64 {
        self.next_id.max(1)
    }

    pub fn append(&mut self, record: CaseRecord) {
        self.next_id = self.next_case_id().max(record.case_id.saturating_add(1));
        self.records.push(record);
    }

    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The last `n` records in insertion order.
    pub fn recent(&self, n: usize) -> &[CaseRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }
}
