///
/// A single row of input, already split into fields but not yet parsed.
///
/// `row` is the 1-based position of the record in its source and is what
/// error messages point at.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub row: usize,
    pub fields: Vec<String>,
}

impl RawRecord {
    pub fn new<S: Into<String>>(row: usize, fields: impl IntoIterator<Item = S>) -> Self {
        RawRecord {
            row,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<S: Into<String>> From<(usize, [S; 3])> for RawRecord {
    fn from(value: (usize, [S; 3])) -> Self {
        RawRecord::new(value.0, value.1)
    }
}
