use std::fmt;

use crate::error::ParseErrorKind;

/// Auxiliaries accepted as the first word of the perfect form.
pub const AUXILIARIES: [&str; 2] = ["hat", "ist"];

/// CEFR proficiency tag attached to every verb entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::A1,
        Level::A2,
        Level::B1,
        Level::B2,
        Level::C1,
        Level::C2,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::A1 => "A1",
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
            Level::C1 => "C1",
            Level::C2 => "C2",
        }
    }

    /// Case-sensitive: "a1" is not a level.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == tag)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_infinitive(word: &str) -> bool {
    word.ends_with("en") || word.ends_with("rn")
}

pub fn is_auxiliary(word: &str) -> bool {
    AUXILIARIES.contains(&word)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerbRecord {
    pub infinitive: String,
    pub third_person: String,
    pub preterite: String,
    /// Auxiliary and participle joined by a single space, e.g. "ist gefahren".
    pub perfect: String,
    pub level: Level,
}

impl VerbRecord {
    /// Parse one word-list line:
    /// `<infinitive> <3rd person> <preterite> <aux> <participle> <level>`.
    pub fn parse_line(line: &str) -> Result<Self, ParseErrorKind> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let &[infinitive, third_person, preterite, aux, participle, level] = tokens.as_slice()
        else {
            return Err(ParseErrorKind::TokenCount(tokens.len()));
        };

        if !is_infinitive(infinitive) {
            return Err(ParseErrorKind::NotInfinitive(infinitive.to_string()));
        }
        if !is_auxiliary(aux) {
            return Err(ParseErrorKind::BadAuxiliary(aux.to_string()));
        }
        let level =
            Level::from_tag(level).ok_or_else(|| ParseErrorKind::BadLevel(level.to_string()))?;

        Ok(Self {
            infinitive: infinitive.to_string(),
            third_person: third_person.to_string(),
            preterite: preterite.to_string(),
            perfect: format!("{aux} {participle}"),
            level,
        })
    }

    /// Exact, case- and whitespace-sensitive comparison of both answers.
    pub fn matches(&self, preterite: &str, perfect: &str) -> bool {
        self.preterite == preterite && self.perfect == perfect
    }

    pub fn to_line(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.infinitive, self.third_person, self.preterite, self.perfect, self.level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_line() {
        let verb = VerbRecord::parse_line("fahren fährt fuhr ist gefahren A2").unwrap();
        assert_eq!(verb.infinitive, "fahren");
        assert_eq!(verb.third_person, "fährt");
        assert_eq!(verb.preterite, "fuhr");
        assert_eq!(verb.perfect, "ist gefahren");
        assert_eq!(verb.level, Level::A2);
    }

    #[test]
    fn extra_whitespace_between_tokens_is_tolerated() {
        let verb = VerbRecord::parse_line("  geben\tgibt  gab hat  gegeben A1 \n").unwrap();
        assert_eq!(verb.perfect, "hat gegeben");
        assert_eq!(verb.to_line(), "geben gibt gab hat gegeben A1");
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert_eq!(
            VerbRecord::parse_line("fahren fährt fuhr gefahren A2"),
            Err(ParseErrorKind::TokenCount(5))
        );
        assert_eq!(
            VerbRecord::parse_line("fahren fährt fuhr ist gefahren A2 extra"),
            Err(ParseErrorKind::TokenCount(7))
        );
    }

    #[test]
    fn rejects_non_infinitive() {
        assert_eq!(
            VerbRecord::parse_line("fahr fährt fuhr ist gefahren A2"),
            Err(ParseErrorKind::NotInfinitive("fahr".to_string()))
        );
    }

    #[test]
    fn accepts_rn_infinitive() {
        let verb = VerbRecord::parse_line("wandern wandert wanderte ist gewandert A2").unwrap();
        assert_eq!(verb.infinitive, "wandern");
    }

    #[test]
    fn rejects_bad_auxiliary() {
        assert_eq!(
            VerbRecord::parse_line("fahren fährt fuhr sind gefahren A2"),
            Err(ParseErrorKind::BadAuxiliary("sind".to_string()))
        );
    }

    #[test]
    fn rejects_bad_level_including_lowercase() {
        assert_eq!(
            VerbRecord::parse_line("fahren fährt fuhr ist gefahren a2"),
            Err(ParseErrorKind::BadLevel("a2".to_string()))
        );
        assert_eq!(
            VerbRecord::parse_line("fahren fährt fuhr ist gefahren D1"),
            Err(ParseErrorKind::BadLevel("D1".to_string()))
        );
    }

    #[test]
    fn matches_is_exact() {
        let verb = VerbRecord::parse_line("gehen geht ging ist gegangen A1").unwrap();
        assert!(verb.matches("ging", "ist gegangen"));
        assert!(!verb.matches("ging ", "ist gegangen"));
        assert!(!verb.matches("Ging", "ist gegangen"));
        assert!(!verb.matches("ging", "ist  gegangen"));
        assert!(!verb.matches("ging", "hat gegangen"));
    }

    #[test]
    fn levels_are_ordered() {
        assert!(Level::A1 < Level::C2);
        assert_eq!(Level::from_tag("B2"), Some(Level::B2));
        assert_eq!(Level::B2.to_string(), "B2");
    }
}
