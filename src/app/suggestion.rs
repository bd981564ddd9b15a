use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Keyword,
    Database,
    Table,
    Column,
    Function,
}

impl SuggestionCategory {
    /// Lower tiers sort first; keywords always lead.
    pub fn tier(self) -> u8 {
        match self {
            Self::Keyword => 0,
            Self::Database => 1,
            Self::Table => 2,
            Self::Column => 3,
            Self::Function => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Database => "database",
            Self::Table => "table",
            Self::Column => "column",
            Self::Function => "function",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub label: String,
    pub category: SuggestionCategory,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    /// May carry a `$0` cursor placeholder when `is_snippet` is set.
    pub insert_text: String,
    pub is_snippet: bool,
    pub sort_tier: u8,
}

impl Suggestion {
    /// Plain suggestion whose inserted text equals its label.
    pub fn new(
        label: impl Into<String>,
        category: SuggestionCategory,
        detail: impl Into<String>,
    ) -> Self {
        let label = label.into();
        Self {
            insert_text: label.clone(),
            label,
            category,
            detail: detail.into(),
            documentation: None,
            is_snippet: false,
            sort_tier: category.tier(),
        }
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    pub fn with_snippet(mut self, insert_text: impl Into<String>) -> Self {
        self.insert_text = insert_text.into();
        self.is_snippet = true;
        self
    }

    /// `"<tier>_<label>"`, for surfaces that order items by a text key.
    pub fn sort_key(&self) -> String {
        format!("{}_{}", self.sort_tier, self.label)
    }
}
