//! # UTF-8 Boundary Helpers
//!
//! Character-level handling of surface forms segments and truncates by
//! byte offsets; these helpers keep those offsets on character boundaries.

/// The byte length of a UTF-8 sequence, from its lead byte.
///
/// Accepts the historical 5 and 6 byte lead forms.
///
/// ## Returns
/// The sequence length in ``1..=6``; or 0 for a continuation or invalid byte.
pub fn utf8_len(lead: u8) -> usize {
    if lead < 0x80 {
        1
    } else if (lead >> 5) == 0x06 {
        2
    } else if (lead >> 4) == 0x0e {
        3
    } else if (lead >> 3) == 0x1e {
        4
    } else if (lead >> 2) == 0x3e {
        5
    } else if (lead >> 1) == 0x7e {
        6
    } else {
        0
    }
}

/// Iterator over the characters of a string, as string slices.
///
/// See [`utf8_chars`].
#[derive(Debug, Clone)]
pub struct Utf8Chars<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Utf8Chars<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let lead = *self.rest.as_bytes().first()?;
        let mut len = utf8_len(lead).clamp(1, self.rest.len());
        // A `str` is always valid UTF-8; this only guards the slice.
        while !self.rest.is_char_boundary(len) {
            len += 1;
        }
        let (head, tail) = self.rest.split_at(len);
        self.rest = tail;
        Some(head)
    }
}

/// Segment `text` into one slice per character.
pub fn utf8_chars(text: &str) -> Utf8Chars<'_> {
    Utf8Chars { rest: text }
}

/// Truncate `text` to at most `max_bytes` bytes, without splitting a character.
pub fn truncate_utf8(
    text: &str,
    max_bytes: usize,
) -> &str {
    let mut end = 0;
    for ch in utf8_chars(text) {
        if end + ch.len() > max_bytes {
            break;
        }
        end += ch.len();
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_len() {
        assert_eq!(utf8_len(b'a'), 1);
        assert_eq!(utf8_len("é".as_bytes()[0]), 2);
        assert_eq!(utf8_len("日".as_bytes()[0]), 3);
        assert_eq!(utf8_len("😀".as_bytes()[0]), 4);
        assert_eq!(utf8_len(0xf8), 5);
        assert_eq!(utf8_len(0xfc), 6);

        // continuation byte
        assert_eq!(utf8_len("é".as_bytes()[1]), 0);
        assert_eq!(utf8_len(0xff), 0);
    }

    #[test]
    fn test_utf8_chars() {
        let chars: Vec<&str> = utf8_chars("naïve 日本😀").collect();
        assert_eq!(chars, vec!["n", "a", "ï", "v", "e", " ", "日", "本", "😀"]);

        assert_eq!(utf8_chars("").count(), 0);
    }

    #[test]
    fn test_truncate_utf8() {
        assert_eq!(truncate_utf8("日本語", 7), "日本");
        assert_eq!(truncate_utf8("日本語", 2), "");
        assert_eq!(truncate_utf8("abc", 10), "abc");
        assert_eq!(truncate_utf8("café", 4), "caf");
    }
}
