// Sentiment lexicon: word → (polarity, subjectivity, intensity).
//
// A compact English lexicon is embedded in the binary. Users can point
// DEBATE_LEXICON_PATH at a file in the same tab-separated format to extend
// it or override individual words (debate jargon, domain terms, etc.).

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// The embedded default lexicon.
const BUILTIN_LEXICON: &str = include_str!("../../data/lexicon.tsv");

/// Scores attached to a single lexicon word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    /// -1.0 (very negative) to 1.0 (very positive)
    pub polarity: f64,
    /// 0.0 (objective) to 1.0 (subjective)
    pub subjectivity: f64,
    /// Multiplier applied to the following sentiment word when this entry is
    /// a modifier. 1.0 for ordinary sentiment words.
    pub intensity: f64,
}

impl LexiconEntry {
    /// Modifiers ("very", "slightly") carry no polarity of their own; they
    /// only scale the next sentiment word.
    pub fn is_modifier(&self) -> bool {
        self.polarity == 0.0 && (self.intensity - 1.0).abs() > f64::EPSILON
    }
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
}

impl Lexicon {
    /// The embedded English lexicon.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_LEXICON).context("Built-in lexicon is malformed")
    }

    /// Parse lexicon text. Blank lines and `#` comments are skipped.
    pub fn parse(source: &str) -> Result<Self> {
        let mut entries = HashMap::new();
        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (word, entry) =
                parse_line(line).with_context(|| format!("Lexicon line {}: {:?}", idx + 1, raw))?;
            entries.insert(word, entry);
        }
        Ok(Self { entries })
    }

    /// Load a lexicon file from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
        let lexicon = Self::parse(&source)
            .with_context(|| format!("Failed to parse lexicon file {}", path.display()))?;
        debug!(
            entries = lexicon.len(),
            path = %path.display(),
            "Loaded lexicon file"
        );
        Ok(lexicon)
    }

    /// The built-in lexicon, extended by the user file if one is given.
    pub fn load(extra: Option<&Path>) -> Result<Self> {
        let mut lexicon = Self::builtin()?;
        if let Some(path) = extra {
            lexicon.merge(Self::from_file(path)?);
        }
        Ok(lexicon)
    }

    /// Add all entries from `other`, replacing words that already exist.
    pub fn merge(&mut self, other: Lexicon) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_line(line: &str) -> Result<(String, LexiconEntry)> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    if fields.len() != 4 {
        anyhow::bail!("expected 4 tab-separated fields, found {}", fields.len());
    }

    let word = fields[0].to_lowercase();
    if word.is_empty() {
        anyhow::bail!("empty word");
    }

    let polarity: f64 = fields[1].parse().context("invalid polarity")?;
    let subjectivity: f64 = fields[2].parse().context("invalid subjectivity")?;
    let intensity: f64 = fields[3].parse().context("invalid intensity")?;

    if !(-1.0..=1.0).contains(&polarity) {
        anyhow::bail!("polarity {polarity} outside [-1, 1]");
    }
    if !(0.0..=1.0).contains(&subjectivity) {
        anyhow::bail!("subjectivity {subjectivity} outside [0, 1]");
    }
    if !intensity.is_finite() || intensity <= 0.0 {
        anyhow::bail!("intensity {intensity} must be positive");
    }

    Ok((
        word,
        LexiconEntry {
            polarity,
            subjectivity,
            intensity,
        },
    ))
}
