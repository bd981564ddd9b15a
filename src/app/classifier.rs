//! Line-prefix heuristics that decide which suggestion categories apply.
//!
//! This is deliberately not a parser. Context flags come from equality tests
//! on the two tokens before the cursor plus plain substring tests on the whole
//! prefix, so a clause keyword anywhere earlier on the line (even inside a
//! string literal) keeps its category switched on. Ranking tiers keep such
//! false positives below keywords.

const COMMENT_MARKERS: &[&str] = &["--", "#", "/*"];

const DATABASE_TOKENS: &[&str] = &["FROM", "USE", "DATABASE"];
const DATABASE_SUBSTRINGS: &[&str] = &["FROM", "USE"];

const TABLE_TOKENS: &[&str] = &["FROM", "JOIN", "UPDATE", "INTO", "TABLE"];
const TABLE_SUBSTRINGS: &[&str] = &["FROM", "JOIN"];

const COLUMN_TOKENS: &[&str] = &["SELECT", "WHERE", "SET", "ON", "BY", ","];
const COLUMN_SUBSTRINGS: &[&str] = &["SELECT", "WHERE", "SET", "ORDER BY", "GROUP BY"];

/// Keywords reported as `preceding_keyword`.
const CLAUSE_KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "JOIN", "ON", "SET", "UPDATE", "INTO", "TABLE", "USE", "DATABASE",
    "BY", "HAVING", "VALUES", "LIMIT", "DELETE", "INSERT",
];

/// Per-request classification of the text before the cursor.
///
/// Keyword and function suggestions are implied for every classified line;
/// the flags only cover schema-derived categories.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompletionContext {
    /// Nothing but whitespace precedes the cursor on this line.
    pub is_line_start: bool,
    /// The cursor is still inside the first word of the line.
    pub is_first_token: bool,
    pub preceding_keyword: Option<String>,
    pub database: bool,
    pub table: bool,
    pub column: bool,
}

impl CompletionContext {
    pub fn wants_schema(&self) -> bool {
        self.database || self.table || self.column
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Cursor is on a comment line.
    NoSuggestion,
    Suggest(CompletionContext),
}

/// Columns are 1-based; `end_column` is exclusive, matching the cursor column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ReplaceRange {
    pub line: usize,
    pub start_column: usize,
    pub end_column: usize,
}

pub fn classify(prefix: &str) -> Classification {
    let leading_trimmed = prefix.trim_start();
    let trimmed = leading_trimmed.trim_end();

    if trimmed.is_empty() {
        return Classification::Suggest(CompletionContext {
            is_line_start: true,
            is_first_token: true,
            ..CompletionContext::default()
        });
    }

    if COMMENT_MARKERS.iter().any(|m| trimmed.starts_with(m)) {
        return Classification::NoSuggestion;
    }

    let preceding = preceding_tokens(leading_trimmed);
    let preceding_keyword = preceding
        .iter()
        .rev()
        .map(|t| t.to_uppercase())
        .find(|t| CLAUSE_KEYWORDS.contains(&t.as_str()));

    if preceding.is_empty() {
        return Classification::Suggest(CompletionContext {
            is_first_token: true,
            preceding_keyword,
            ..CompletionContext::default()
        });
    }

    let last = preceding
        .last()
        .map(|t| t.to_uppercase())
        .unwrap_or_default();
    let second_last = preceding
        .len()
        .checked_sub(2)
        .and_then(|i| preceding.get(i))
        .map(|t| t.to_uppercase())
        .unwrap_or_default();
    let upper = trimmed.to_uppercase();

    let near = |set: &[&str]| set.contains(&last.as_str()) || set.contains(&second_last.as_str());
    let contains_any = |set: &[&str]| set.iter().any(|s| upper.contains(s));

    Classification::Suggest(CompletionContext {
        is_line_start: false,
        is_first_token: false,
        preceding_keyword,
        database: near(DATABASE_TOKENS) || contains_any(DATABASE_SUBSTRINGS),
        table: near(TABLE_TOKENS) || contains_any(TABLE_SUBSTRINGS),
        column: COLUMN_TOKENS.contains(&last.as_str()) || contains_any(COLUMN_SUBSTRINGS),
    })
}

/// Whitespace-separated tokens before the word under the cursor. When the
/// prefix ends in whitespace the current word is empty and every token counts.
fn preceding_tokens(leading_trimmed: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = leading_trimmed.split_whitespace().collect();
    if !leading_trimmed.ends_with(char::is_whitespace) {
        tokens.pop();
    }
    tokens
}

/// Text of `line` from column 1 up to (not including) `column`, both 1-based.
/// Out-of-range positions clamp to the buffer instead of failing.
pub fn line_prefix(buffer: &str, line: usize, column: usize) -> String {
    let text = buffer
        .split('\n')
        .nth(line.saturating_sub(1))
        .unwrap_or_default();
    let text = text.strip_suffix('\r').unwrap_or(text);
    text.chars().take(column.saturating_sub(1)).collect()
}

/// Identifier characters immediately before the cursor.
pub fn current_word(prefix: &str) -> &str {
    let start = prefix
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric() || *c == '_')
        .last()
        .map_or(prefix.len(), |(i, _)| i);
    &prefix[start..]
}

/// Range an accepted suggestion replaces: the partial word up to the cursor.
pub fn replace_range(buffer: &str, line: usize, column: usize) -> ReplaceRange {
    let prefix = line_prefix(buffer, line, column);
    let end_column = prefix.chars().count() + 1;
    let word_len = current_word(&prefix).chars().count();
    ReplaceRange {
        line: line.max(1),
        start_column: end_column - word_len,
        end_column,
    }
}
