use serde::Serialize;

// @module: Bitext line splitting

const BYTE_ORDER_MARK: char = '\u{feff}';

/// How a raw line was split into a source/target pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SplitOutcome {
    /// Exactly one tab
    Normal,
    /// No tab at all; the whole line became the source
    MissingTarget,
    /// Two or more tabs; the whole line became the source
    AmbiguousTabs,
}

// @struct: One candidate sentence pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinePair {
    // @field: 0-based physical line number
    pub index: usize,

    // @field: Source text, or the whole line when the split failed
    pub source: String,

    // @field: Target text, absent unless the line had exactly one tab
    pub target: Option<String>,

    // @field: Split classification
    pub outcome: SplitOutcome,
}

impl LinePair {
    /// Split one raw line (terminator already removed) on its tab separator
    pub fn split(index: usize, line: &str) -> Self {
        let (source, target, outcome) = match line.matches('\t').count() {
            0 => (line.to_string(), None, SplitOutcome::MissingTarget),
            1 => {
                // Exactly one tab, so split_once cannot miss
                let (source, target) = line.split_once('\t').unwrap_or((line, ""));
                (source.to_string(), Some(target.to_string()), SplitOutcome::Normal)
            }
            _ => (line.to_string(), None, SplitOutcome::AmbiguousTabs),
        };

        LinePair {
            index,
            source,
            target,
            outcome,
        }
    }

    /// 1-based line number for messages
    pub fn line_number(&self) -> usize {
        self.index + 1
    }

    /// Target text, with an absent target read as empty
    pub fn target_text(&self) -> &str {
        self.target.as_deref().unwrap_or("")
    }
}

/// Split a whole document into line pairs.
///
/// Lines end at `\n` or `\r\n`; a final terminator does not open another line.
/// A leading byte order mark is dropped.
pub fn parse_corpus(text: &str) -> Vec<LinePair> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

    text.lines()
        .enumerate()
        .map(|(index, line)| LinePair::split(index, line))
        .collect()
}
