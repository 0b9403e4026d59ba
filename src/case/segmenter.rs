// Word segmentation for identifiers in camel, snake, kebab or mixed casing.

use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Delimiter,
    Digit,
    Upper,
    Lower,
    /// Non-ASCII letters and digits: opaque word characters with no case.
    Caseless,
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch.is_ascii_uppercase() {
            CharClass::Upper
        } else if ch.is_ascii_lowercase() {
            CharClass::Lower
        } else if ch.is_ascii_digit() {
            CharClass::Digit
        } else if !ch.is_ascii() && ch.is_alphanumeric() {
            CharClass::Caseless
        } else {
            CharClass::Delimiter
        }
    }
}

/// Which characters end a word without being part of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiters {
    /// `_`, `-` and anything that is not a letter or digit
    NonAlphanumeric,
    Only(char),
    None,
}

/// Boundary policy used by [`Segments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rules {
    delimiters: Delimiters,
    case_boundaries: bool,
}

impl Rules {
    /// Mixed input: delimiters and case transitions both split.
    pub(crate) const JUMBLED: Rules = Rules {
        delimiters: Delimiters::NonAlphanumeric,
        case_boundaries: true,
    };

    /// Only case transitions split; every character belongs to some word.
    pub(crate) const CASE_ONLY: Rules = Rules {
        delimiters: Delimiters::None,
        case_boundaries: true,
    };

    /// Only the given separator splits.
    pub(crate) const fn separated_by(separator: char) -> Rules {
        Rules {
            delimiters: Delimiters::Only(separator),
            case_boundaries: false,
        }
    }

    fn is_delimiter(&self, ch: char) -> bool {
        match self.delimiters {
            Delimiters::NonAlphanumeric => CharClass::of(ch) == CharClass::Delimiter,
            Delimiters::Only(separator) => ch == separator,
            Delimiters::None => false,
        }
    }

    /// Byte length of the word at the start of `rest`, which must not begin
    /// with a delimiter, and whether it ended on a case transition.
    ///
    /// `joined` is set when the word directly follows the previous one with no
    /// delimiter in between.
    fn word_end(&self, rest: &str, joined: bool) -> (usize, bool) {
        let mut chars = rest.char_indices().peekable();
        let mut prev: Option<CharClass> = None;
        // The current uppercase run comes right after a lowercase letter, digit
        // or caseless character, possibly at the end of the previous word.
        let mut inner_run = joined;

        while let Some((idx, ch)) = chars.next() {
            if self.is_delimiter(ch) {
                return (idx, false);
            }

            let class = CharClass::of(ch);
            if let Some(prev) = prev.filter(|_| self.case_boundaries) {
                let next = chars.peek().map(|&(_, c)| CharClass::of(c));
                if is_case_boundary(prev, class, next, inner_run) {
                    return (idx, true);
                }
            }
            if class != CharClass::Upper {
                inner_run = class != CharClass::Delimiter;
            }
            prev = Some(class);
        }

        (rest.len(), false)
    }
}

/// Whether a word starts at `cur`, given the character before it and the one after.
///
/// - `aB`, `2B` and `éB` split before the capital.
/// - An uppercase run opening a word is an acronym: `HTTPServer` splits before
///   the `S`, handing the run's last capital to the following lowercase word,
///   and `ALLCAPS` stays whole.
/// - An uppercase run inside a word (`inner_run`) is a chain of one-letter
///   words: `xYZ` is `x`, `Y`, `Z`. Camel output only ever puts capitals next
///   to each other this way, so re-segmenting it gives back the same words.
/// - Digits stay attached to whatever precedes them, and a lowercase run
///   after a digit continues the same word (`version2`, `v2beta`).
fn is_case_boundary(
    prev: CharClass,
    cur: CharClass,
    next: Option<CharClass>,
    inner_run: bool,
) -> bool {
    match (prev, cur) {
        (CharClass::Lower | CharClass::Digit | CharClass::Caseless, CharClass::Upper) => true,
        (CharClass::Upper, CharClass::Upper) => inner_run || next == Some(CharClass::Lower),
        _ => false,
    }
}

/// Lazy iterator over the words of an identifier.
///
/// Yields non-empty slices of the source in left-to-right order. Delimiters are
/// never part of a yielded word, and runs of them collapse into one boundary.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
    rules: Rules,
    /// The last word ended on a case transition, so the next one follows it directly
    joined: bool,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(src: &'a str, rules: Rules) -> Self {
        Self {
            rest: src,
            rules,
            joined: false,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rules = self.rules;
        let start = match self.rest.find(|ch| !rules.is_delimiter(ch)) {
            Some(start) => start,
            None => {
                self.rest = "";
                self.joined = false;
                return None;
            }
        };

        let rest = &self.rest[start..];
        let (end, case_break) = rules.word_end(rest, self.joined && start == 0);
        let (word, remainder) = rest.split_at(end);
        self.rest = remainder;
        self.joined = case_break;
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.rest.len()))
    }
}

impl FusedIterator for Segments<'_> {}

/// Split an identifier of unknown or mixed casing into its words.
///
/// This never fails: characters that are neither letters nor digits act as
/// delimiters.
pub fn segment(src: &str) -> Segments<'_> {
    Segments::new(src, Rules::JUMBLED)
}
