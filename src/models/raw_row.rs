use std::collections::HashMap;

/// One CSV data row before validation: column name to raw cell text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    /// 1-based data-row index (header excluded).
    pub index: usize,
    pub fields: HashMap<String, String>,
}

impl RawRow {
    /// Build a row from (column, value) pairs.
    pub fn from_pairs<K, V>(index: usize, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            index,
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}
