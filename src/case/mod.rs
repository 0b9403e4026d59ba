pub mod joiner;
pub mod segmenter;

pub use joiner::join;
pub use segmenter::{segment, Segments};

use crate::InvalidStyleError;
use segmenter::Rules;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Style {
    #[default]
    Camel,
    Snake,
    Kebab,
}

/// How each word is re-cased when joining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    /// Every word fully lowercased
    Lower,
    /// First word lowercased, later words capitalized
    Camel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
    pub style: Style,
    pub name: &'static str,
    /// Inserted between words; `None` means words are concatenated.
    pub separator: Option<char>,
    pub casing: Casing,
}

/// Table order is also the tie-break order used by [`guess`].
static STYLES: [StyleDescriptor; 3] = [
    StyleDescriptor {
        style: Style::Camel,
        name: "camel",
        separator: None,
        casing: Casing::Camel,
    },
    StyleDescriptor {
        style: Style::Snake,
        name: "snake",
        separator: Some('_'),
        casing: Casing::Lower,
    },
    StyleDescriptor {
        style: Style::Kebab,
        name: "kebab",
        separator: Some('-'),
        casing: Casing::Lower,
    },
];

impl Style {
    pub const ALL: [Style; 3] = [Style::Camel, Style::Snake, Style::Kebab];

    pub fn descriptor(self) -> &'static StyleDescriptor {
        match self {
            Style::Camel => &STYLES[0],
            Style::Snake => &STYLES[1],
            Style::Kebab => &STYLES[2],
        }
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Look up a style by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self, InvalidStyleError> {
        STYLES
            .iter()
            .find(|descriptor| descriptor.name.eq_ignore_ascii_case(name))
            .map(|descriptor| descriptor.style)
            .ok_or_else(|| InvalidStyleError(name.to_string()))
    }

    /// Split `src` strictly by this style's own rule: its separator for
    /// snake and kebab, case transitions for camel.
    pub fn components(self, src: &str) -> Segments<'_> {
        Segments::new(src, self.rules())
    }

    fn rules(self) -> Rules {
        match self.descriptor().separator {
            Some(separator) => Rules::separated_by(separator),
            None => Rules::CASE_ONLY,
        }
    }
}

impl FromStr for Style {
    type Err = InvalidStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::from_name(s)
    }
}

impl TryFrom<String> for Style {
    type Error = InvalidStyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Style::from_name(&value)
    }
}

impl From<Style> for &'static str {
    fn from(style: Style) -> Self {
        style.name()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the input identifier is split into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    /// Unknown or mixed casing: delimiters and case transitions both split.
    #[default]
    Jumbled,
    /// The input is known to be in this style.
    Exact(Style),
}

impl Source {
    pub fn segments(self, src: &str) -> Segments<'_> {
        match self {
            Source::Jumbled => segment(src),
            Source::Exact(style) => style.components(src),
        }
    }
}

impl From<Style> for Source {
    fn from(style: Style) -> Self {
        Source::Exact(style)
    }
}

impl From<Option<Style>> for Source {
    fn from(style: Option<Style>) -> Self {
        style.map_or(Source::Jumbled, Source::Exact)
    }
}

/// Segment `src` according to `source` and join the words in `target` style.
pub fn convert(src: &str, source: Source, target: Style) -> String {
    join(source.segments(src), target)
}

/// Guess which style `src` is written in.
///
/// Picks the style whose own segmentation finds the most words. Ties go to
/// the earlier style in `camel`, `snake`, `kebab` order, so single words and
/// empty input guess camel, the default style. Keep the strict `>` below:
/// taking the last maximum instead would make every single word guess kebab.
pub fn guess(src: &str) -> Style {
    let mut best = (Style::Camel, 0);
    for style in Style::ALL {
        let count = style.components(src).count();
        if count > best.1 {
            best = (style, count);
        }
    }
    log::trace!("guessed {} for {:?} ({} words)", best.0, src, best.1);
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_name() {
        assert_eq!("camel".parse::<Style>().unwrap(), Style::Camel);
        assert_eq!("SNAKE".parse::<Style>().unwrap(), Style::Snake);
        assert_eq!("KeBaB".parse::<Style>().unwrap(), Style::Kebab);
    }

    #[test]
    fn test_invalid_style_name() {
        let err = "bogus".parse::<Style>().unwrap_err();
        assert_eq!(err, InvalidStyleError("bogus".to_string()));
        assert_eq!(err.to_string(), "invalid case name: bogus");

        assert!(" snake".parse::<Style>().is_err());
        assert!("".parse::<Style>().is_err());
        assert!("pascal".parse::<Style>().is_err());
    }

    #[test]
    fn test_descriptor_table() {
        for style in Style::ALL {
            assert_eq!(style.descriptor().style, style);
            assert_eq!(style.name().parse::<Style>().unwrap(), style);
        }
        assert_eq!(Style::Snake.descriptor().separator, Some('_'));
        assert_eq!(Style::Kebab.descriptor().separator, Some('-'));
        assert_eq!(Style::Camel.descriptor().separator, None);
    }

    #[test]
    fn test_exact_components() {
        let camel: Vec<_> = Style::Camel.components("simpleCamelCase").collect();
        assert_eq!(camel, vec!["simple", "Camel", "Case"]);

        let snake: Vec<_> = Style::Snake.components("simple_snake_case").collect();
        assert_eq!(snake, vec!["simple", "snake", "case"]);

        let kebab: Vec<_> = Style::Kebab.components("simple-kebab-case").collect();
        assert_eq!(kebab, vec!["simple", "kebab", "case"]);
    }

    #[test]
    fn test_convert_exact_source() {
        assert_eq!(
            convert("simpleCamelCase", Style::Camel.into(), Style::Kebab),
            "simple-camel-case"
        );
        assert_eq!(
            convert("simple_snake_case", Style::Snake.into(), Style::Camel),
            "simpleSnakeCase"
        );
        // An exact kebab source does not split on case
        assert_eq!(convert("someThing-else", Style::Kebab.into(), Style::Snake), "something_else");
    }

    #[test]
    fn test_convert_jumbled() {
        assert_eq!(
            convert("simple_jumbledCase", Source::Jumbled, Style::Kebab),
            "simple-jumbled-case"
        );
    }

    #[test]
    fn test_guess() {
        assert_eq!(guess("simpleCamelCase"), Style::Camel);
        assert_eq!(guess("simple_snake_case"), Style::Snake);
        assert_eq!(guess("simple-kebab-case"), Style::Kebab);
        assert_eq!(guess("word"), Style::Camel);
        assert_eq!(guess(""), Style::Camel);
    }

    #[test]
    fn test_serde_by_name() {
        #[derive(Deserialize, Serialize)]
        struct Wrapper {
            style: Style,
        }

        let wrapper: Wrapper = toml::from_str("style = \"Kebab\"").unwrap();
        assert_eq!(wrapper.style, Style::Kebab);
        assert_eq!(toml::to_string(&wrapper).unwrap().trim(), "style = \"kebab\"");
        assert!(toml::from_str::<Wrapper>("style = \"pascal\"").is_err());
    }
}
