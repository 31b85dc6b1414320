//! Sentence segmentation on terminal punctuation

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split text into trimmed, non-empty sentences.
///
/// Runs of `.`, `!` and `?` act as a single delimiter and are discarded.
/// The returned iterator borrows the input and can be cloned to iterate again.
pub fn segment(text: &str) -> Sentences<'_> {
    Sentences { remaining: text }
}

/// Iterator over the sentences of a text
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    remaining: &'a str,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while !self.remaining.is_empty() {
            let (head, tail) = match self.remaining.find(is_terminal) {
                // Terminal characters are ASCII, so `pos + 1` is a char boundary
                Some(pos) => (&self.remaining[..pos], &self.remaining[pos + 1..]),
                None => (self.remaining, ""),
            };
            self.remaining = tail;

            let sentence = head.trim();
            if !sentence.is_empty() {
                return Some(sentence);
            }
        }
        None
    }
}
