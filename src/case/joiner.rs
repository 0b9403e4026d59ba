use super::{Casing, Style};

/// Re-case `words` from scratch and join them in the given style.
///
/// Only ASCII letters change case; digits and non-ASCII characters pass through.
pub fn join<'a, I>(words: I, style: Style) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let descriptor = style.descriptor();
    let mut buf = String::new();

    for (idx, word) in words.into_iter().enumerate() {
        if idx > 0 {
            if let Some(separator) = descriptor.separator {
                buf.push(separator);
            }
        }

        match descriptor.casing {
            Casing::Lower => push_lowercase(&mut buf, word),
            Casing::Camel if idx == 0 => push_lowercase(&mut buf, word),
            Casing::Camel => push_capitalized(&mut buf, word),
        }
    }

    buf
}

fn push_lowercase(buf: &mut String, word: &str) {
    buf.extend(word.chars().map(|ch| ch.to_ascii_lowercase()));
}

fn push_capitalized(buf: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        buf.push(first.to_ascii_uppercase());
        buf.extend(chars.map(|ch| ch.to_ascii_lowercase()));
    }
}
