//! # Sentence

use std::collections::BTreeMap;

use crate::types::{PosId, ROOT_TOKEN_ID, TokenIndex, WordId};

/// Sparse ``{ TokenIndex -> id }`` map, iterated in index order.
pub type SentenceMap = BTreeMap<TokenIndex, u32>;

/// Sparse ``{ TokenIndex -> surface form }`` map.
pub type SentenceUnkMap = BTreeMap<TokenIndex, String>;

/// One treebank sentence.
///
/// Token indices need not be contiguous. The synthetic root token, when
/// present, is stored under [`ROOT_TOKEN_ID`], and so is visited last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    /// ``{ TokenIndex -> WordId }``.
    pub words: SentenceMap,

    /// ``{ TokenIndex -> PosId }``.
    pub poses: SentenceMap,

    /// Surface forms of the tokens whose word resolved to UNK.
    pub unk_surface_forms: SentenceUnkMap,
}

impl Sentence {
    /// The number of tokens, root included.
    pub fn size(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the sentence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns true if the sentence holds a root token.
    pub fn has_root(&self) -> bool {
        self.words.contains_key(&ROOT_TOKEN_ID)
    }

    /// Iterate ``(index, word, pos)`` in ascending index order.
    ///
    /// Tokens lacking a tag are skipped.
    pub fn tokens(&self) -> impl Iterator<Item = (TokenIndex, WordId, PosId)> + '_ {
        self.words
            .iter()
            .filter_map(|(&idx, &word)| self.poses.get(&idx).map(|&pos| (idx, word, pos)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_visited_last() {
        for len in [0, 1, 5, 300] {
            let mut sentence = Sentence::default();
            sentence.words.insert(ROOT_TOKEN_ID, 9);
            sentence.poses.insert(ROOT_TOKEN_ID, 0);
            for idx in (0..len).rev() {
                sentence.words.insert(idx, 2 + idx);
                sentence.poses.insert(idx, 1);
            }

            let order: Vec<TokenIndex> = sentence.tokens().map(|(idx, _, _)| idx).collect();
            assert_eq!(order.last(), Some(&ROOT_TOKEN_ID));
            assert_eq!(order.len(), len as usize + 1);
            assert_eq!(sentence.size(), len as usize + 1);
            assert!(sentence.has_root());
        }
    }

    #[test]
    fn test_sparse_indices() {
        let mut sentence = Sentence::default();
        assert!(sentence.is_empty());

        sentence.words.insert(7, 3);
        sentence.words.insert(2, 4);
        sentence.poses.insert(7, 0);
        assert_eq!(sentence.size(), 2);
        assert!(!sentence.has_root());
        assert_eq!(sentence.tokens().collect::<Vec<_>>(), vec![(7, 3, 0)]);
    }
}
