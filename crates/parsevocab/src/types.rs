//! # Common Types

/// Id of an entry in the word table.
pub type WordId = u32;

/// Id of an entry in the part-of-speech table.
pub type PosId = u32;

/// Id of an entry in the character table.
pub type CharId = u32;

/// Id of a parser action; the position of the action in the action alphabet.
pub type ActionId = u32;

/// Position of a token within its sentence.
pub type TokenIndex = u32;

/// The token index of the synthetic ROOT token.
///
/// Being the maximum representable index, it sorts after every real token
/// under ascending iteration of a [`crate::corpus::SentenceMap`].
pub const ROOT_TOKEN_ID: TokenIndex = TokenIndex::MAX;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type PVHashMap<K, V> = ahash::AHashMap<K, V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type PVHashMap<K, V> = std::collections::HashMap<K, V>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_sorts_last() {
        assert!((0..1024).all(|idx: TokenIndex| idx < ROOT_TOKEN_ID));
    }
}
