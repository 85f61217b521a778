use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;
use std::io::{self, BufRead};

/// A set of legal words, fixed for the duration of a game.
///
/// Words are looked up in upper case ASCII.
///
/// # See Also
///
/// * [`WordList`]
/// * [validate](crate::validate())
pub trait Dictionary {
    /// # Returns
    ///
    /// Whether `word` is a legal word.
    fn contains(&self, word: &str) -> bool;
}

impl<S: BuildHasher> Dictionary for HashSet<String, S> {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl Dictionary for BTreeSet<String> {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// A [dictionary](Dictionary) of upper cased words.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Reads whitespace separated words from `reader` and upper cases each of them.
    ///
    /// # Errors
    ///
    /// When reading from `reader` fails.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<WordList> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            words.extend(line?.split_whitespace().map(str::to_ascii_uppercase));
        }
        Ok(WordList { words })
    }

    /// # Returns
    ///
    /// The number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// # Returns
    ///
    /// Whether the word list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        WordList {
            words: iter
                .into_iter()
                .map(|word| word.as_ref().trim().to_ascii_uppercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }
}

impl Dictionary for WordList {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
