use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use rust_embed::Embed;

use crate::error::{ConfigurationError, ParseError, ValidationError, WordListError};
use crate::words::record::{Level, VerbRecord, is_auxiliary, is_infinitive};

#[derive(Embed)]
#[folder = "assets/wordlists/"]
struct WordListAssets;

/// File name of the list shipped inside the binary.
pub const DEFAULT_LIST: &str = "starke_unregelmaessige.txt";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordSource {
    Bundled(String),
    File(PathBuf),
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSource::Bundled(name) => write!(f, "bundled:{name}"),
            WordSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Ordered, immutable list of verbs loaded once per run.
#[derive(Debug)]
pub struct WordList {
    source: WordSource,
    verbs: Vec<Rc<VerbRecord>>,
}

impl WordList {
    /// Parse a whole list. Blank lines are skipped; the first malformed line
    /// aborts the load.
    pub fn parse(source: WordSource, content: &str) -> Result<Self, ParseError> {
        let mut verbs = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim_start_matches('\u{feff}');
            if line.trim().is_empty() {
                continue;
            }
            let verb = VerbRecord::parse_line(line).map_err(|kind| ParseError {
                line: idx + 1,
                kind,
            })?;
            verbs.push(Rc::new(verb));
        }
        Ok(Self { source, verbs })
    }

    pub fn bundled() -> Result<Self, WordListError> {
        let file = WordListAssets::get(DEFAULT_LIST)
            .ok_or_else(|| ConfigurationError::MissingBundledList(DEFAULT_LIST.to_string()))?;
        let content = String::from_utf8_lossy(file.data.as_ref());
        let source = WordSource::Bundled(DEFAULT_LIST.to_string());
        Self::parse(source, &content).map_err(|source| WordListError::Parse {
            path: PathBuf::from(DEFAULT_LIST),
            source,
        })
    }

    pub fn load_file(path: &Path) -> Result<Self, WordListError> {
        check_txt_path(path)?;
        let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::parse(WordSource::File(path.to_path_buf()), &content).map_err(
            |source| WordListError::Parse {
                path: path.to_path_buf(),
                source,
            },
        )?;
        log::info!("loaded {} verbs from {}", list.len(), path.display());
        Ok(list)
    }

    /// Load from `path` when given, otherwise fall back to the bundled list.
    pub fn load(path: Option<&Path>) -> Result<Self, WordListError> {
        match path {
            Some(path) => Self::load_file(path),
            None => Self::bundled(),
        }
    }

    pub fn source(&self) -> &WordSource {
        &self.source
    }

    pub fn verbs(&self) -> &[Rc<VerbRecord>] {
        &self.verbs
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub fn contains_infinitive(&self, infinitive: &str) -> bool {
        self.verbs.iter().any(|v| v.infinitive == infinitive)
    }

    pub fn count_by_level(&self) -> BTreeMap<Level, usize> {
        let mut counts = BTreeMap::new();
        for verb in &self.verbs {
            *counts.entry(verb.level).or_insert(0) += 1;
        }
        counts
    }
}

pub fn check_txt_path(path: &Path) -> Result<(), ConfigurationError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("txt") => Ok(()),
        _ => Err(ConfigurationError::BadWordListPath(path.to_path_buf())),
    }
}

/// Validate a candidate entry `[infinitive, 3rd person, preterite, perfect, level]`
/// against the infinitives already present. Rules are checked in a fixed
/// order and the first failure is reported.
pub fn validate_candidate<'a, I>(
    existing_infinitives: I,
    fields: &[String],
) -> Result<VerbRecord, ValidationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let [infinitive, third_person, preterite, perfect, level] = fields else {
        return Err(ValidationError::WrongFieldCount(format!(
            "expected 5 fields, found {}",
            fields.len()
        )));
    };
    for field in [infinitive, third_person, preterite, level] {
        if field.is_empty() || field.contains(char::is_whitespace) {
            return Err(ValidationError::WrongFieldCount(format!(
                "field {field:?} must be a single word"
            )));
        }
    }
    let perfect_words: Vec<&str> = perfect.split_whitespace().collect();
    let &[aux, participle] = perfect_words.as_slice() else {
        return Err(ValidationError::WrongFieldCount(format!(
            "perfect {perfect:?} must be an auxiliary and a participle"
        )));
    };

    if !is_infinitive(infinitive) {
        return Err(ValidationError::NotInfinitive(infinitive.clone()));
    }
    if existing_infinitives.into_iter().any(|inf| inf == infinitive.as_str()) {
        return Err(ValidationError::DuplicateVerb(infinitive.clone()));
    }
    if !is_auxiliary(aux) {
        return Err(ValidationError::BadAuxiliary(perfect.clone()));
    }
    let level = Level::from_tag(level).ok_or_else(|| ValidationError::BadLevel(level.clone()))?;

    Ok(VerbRecord {
        infinitive: infinitive.clone(),
        third_person: third_person.clone(),
        preterite: preterite.clone(),
        perfect: format!("{aux} {participle}"),
        level,
    })
}

/// Append a validated entry to the word list at `path`. On any validation
/// failure the file is left untouched.
pub fn append_entry(path: &Path, fields: &[String]) -> Result<VerbRecord, WordListError> {
    check_txt_path(path)?;
    let io_err = |source: io::Error| WordListError::Io {
        path: path.to_path_buf(),
        source,
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(io_err(e)),
    };

    // Only the first token of each line matters for duplicates, so a
    // malformed line elsewhere does not block editing.
    let infinitives = content
        .lines()
        .filter_map(|line| line.trim_start_matches('\u{feff}').split_whitespace().next());
    let verb = validate_candidate(infinitives, fields)?;

    let separator = if content.is_empty() || content.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;
    file.write_all(format!("{separator}{}\n", verb.to_line()).as_bytes())
        .map_err(io_err)?;

    log::info!("appended {:?} to {}", verb.infinitive, path.display());
    Ok(verb)
}
