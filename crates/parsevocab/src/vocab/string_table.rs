//! # Bidirectional ``{ String <-> u32 }`` Table

use crate::errors::{PVResult, ParseVocabError};
use crate::types::PVHashMap;

/// A dense, bijective string/id table.
///
/// Ids are assigned in insertion order, from 0; entries are never removed
/// except by [`StringTable::clear`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringTable {
    to_id: PVHashMap<String, u32>,
    from_id: Vec<String>,
}

impl StringTable {
    /// Rebuild a table by re-indexing an ordered list.
    ///
    /// ## Arguments
    /// * `name` - the table name, for error messages.
    /// * `entries` - the ``id -> string`` list.
    ///
    /// ## Returns
    /// The table; or an error if `entries` holds a duplicate, or more entries than fit in a `u32`.
    pub fn from_list(
        name: &str,
        entries: Vec<String>,
    ) -> PVResult<Self> {
        if u32::try_from(entries.len()).is_err() {
            return Err(ParseVocabError::Deserialize(format!(
                "{name} table has {} entries",
                entries.len()
            )));
        }

        let mut to_id = PVHashMap::default();
        to_id.reserve(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if to_id.insert(entry.clone(), idx as u32).is_some() {
                return Err(ParseVocabError::Deserialize(format!(
                    "{name} table has duplicate entry {entry:?}"
                )));
            }
        }

        Ok(Self {
            to_id,
            from_id: entries,
        })
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.from_id.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.from_id.is_empty()
    }

    /// Look up the id of `entry`.
    pub fn get(
        &self,
        entry: &str,
    ) -> Option<u32> {
        self.to_id.get(entry).copied()
    }

    /// Look up the string for `id`.
    pub fn get_str(
        &self,
        id: u32,
    ) -> Option<&str> {
        self.from_id.get(id as usize).map(String::as_str)
    }

    /// Look up `entry`, appending it under the next dense id if unseen.
    ///
    /// ## Returns
    /// ``(id, inserted)``.
    pub fn get_or_add(
        &mut self,
        entry: &str,
    ) -> (u32, bool) {
        if let Some(id) = self.get(entry) {
            return (id, false);
        }
        let id = self.from_id.len() as u32;
        self.to_id.insert(entry.to_string(), id);
        self.from_id.push(entry.to_string());
        (id, true)
    }

    /// The ``id -> string`` list.
    pub fn entries(&self) -> &[String] {
        &self.from_id
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.to_id.clear();
        self.from_id.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_add() {
        let mut table = StringTable::default();
        assert!(table.is_empty());

        assert_eq!(table.get_or_add("a"), (0, true));
        assert_eq!(table.get_or_add("b"), (1, true));
        assert_eq!(table.get_or_add("a"), (0, false));

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("b"), Some(1));
        assert_eq!(table.get("c"), None);
        assert_eq!(table.get_str(1), Some("b"));
        assert_eq!(table.get_str(2), None);
    }

    #[test]
    fn test_from_list() {
        let table = StringTable::from_list("pos", vec!["DET".into(), "NOUN".into()]).unwrap();
        assert_eq!(table.get("NOUN"), Some(1));
        assert_eq!(table.entries(), &["DET".to_string(), "NOUN".to_string()]);

        let err = StringTable::from_list("pos", vec!["DET".into(), "DET".into()]).unwrap_err();
        assert!(matches!(err, ParseVocabError::Deserialize(_)));
    }
}
