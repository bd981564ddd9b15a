use crate::classifier::CompletionContext;
use crate::domain::{SchemaSnapshot, TableMeta};
use crate::suggestion::{Suggestion, SuggestionCategory};

/// Above this many tables in a snapshot, column labels are always qualified.
pub const DEFAULT_QUALIFY_THRESHOLD: usize = 5;

struct SqlFunction {
    name: &'static str,
    detail: &'static str,
}

const FUNCTIONS: &[SqlFunction] = &[
    SqlFunction {
        name: "COUNT",
        detail: "Count rows",
    },
    SqlFunction {
        name: "SUM",
        detail: "Sum of values",
    },
    SqlFunction {
        name: "AVG",
        detail: "Average of values",
    },
    SqlFunction {
        name: "MAX",
        detail: "Maximum value",
    },
    SqlFunction {
        name: "MIN",
        detail: "Minimum value",
    },
    SqlFunction {
        name: "CONCAT",
        detail: "Concatenate strings",
    },
    SqlFunction {
        name: "SUBSTRING",
        detail: "Extract part of a string",
    },
    SqlFunction {
        name: "UPPER",
        detail: "Convert to uppercase",
    },
    SqlFunction {
        name: "LOWER",
        detail: "Convert to lowercase",
    },
    SqlFunction {
        name: "TRIM",
        detail: "Strip surrounding whitespace",
    },
    SqlFunction {
        name: "NOW",
        detail: "Current date and time",
    },
    SqlFunction {
        name: "DATE",
        detail: "Date part of a value",
    },
    SqlFunction {
        name: "YEAR",
        detail: "Year of a date",
    },
    SqlFunction {
        name: "MONTH",
        detail: "Month of a date",
    },
    SqlFunction {
        name: "DAY",
        detail: "Day of a date",
    },
];

/// Turns a classified context plus the current snapshot into an ordered
/// suggestion list. Holds no state between calls.
#[derive(Debug, Clone)]
pub struct SuggestionAssembler {
    qualify_threshold: usize,
}

impl Default for SuggestionAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionAssembler {
    pub fn new() -> Self {
        Self::with_qualify_threshold(DEFAULT_QUALIFY_THRESHOLD)
    }

    pub fn with_qualify_threshold(qualify_threshold: usize) -> Self {
        Self { qualify_threshold }
    }

    pub fn assemble(
        &self,
        context: &CompletionContext,
        snapshot: &SchemaSnapshot,
        table_refs: &[String],
        current_database: Option<&str>,
    ) -> Vec<Suggestion> {
        let mut suggestions = self.keyword_candidates(snapshot);

        if context.database {
            suggestions.extend(self.database_candidates(snapshot));
        }
        if context.table {
            suggestions.extend(self.table_candidates(snapshot, current_database));
        }
        if context.column {
            suggestions.extend(self.column_candidates(snapshot, table_refs));
        }
        suggestions.extend(self.function_candidates());

        // Stable: source order survives within a tier
        suggestions.sort_by_key(|s| s.sort_tier);
        suggestions
    }

    fn keyword_candidates(&self, snapshot: &SchemaSnapshot) -> Vec<Suggestion> {
        snapshot
            .keywords()
            .iter()
            .map(|kw| Suggestion::new(kw.as_str(), SuggestionCategory::Keyword, "SQL keyword"))
            .collect()
    }

    fn database_candidates(&self, snapshot: &SchemaSnapshot) -> Vec<Suggestion> {
        snapshot
            .databases()
            .iter()
            .map(|db| Suggestion::new(db.as_str(), SuggestionCategory::Database, "Database"))
            .collect()
    }

    fn table_candidates(
        &self,
        snapshot: &SchemaSnapshot,
        current_database: Option<&str>,
    ) -> Vec<Suggestion> {
        snapshot
            .tables()
            .iter()
            .map(|t| {
                Suggestion::new(
                    t.display_name(current_database),
                    SuggestionCategory::Table,
                    format!("Table ({})", t.database),
                )
                .with_documentation(format!("{} columns", t.columns.len()))
            })
            .collect()
    }

    fn column_candidates(
        &self,
        snapshot: &SchemaSnapshot,
        table_refs: &[String],
    ) -> Vec<Suggestion> {
        let candidates: Vec<&TableMeta> = if table_refs.is_empty() {
            snapshot.tables().iter().collect()
        } else {
            snapshot
                .tables()
                .iter()
                .filter(|t| table_refs.iter().any(|r| t.matches_name(r)))
                .collect()
        };

        let contributing = candidates.iter().filter(|t| !t.columns.is_empty()).count();
        let qualify = contributing > 1 || snapshot.table_count() > self.qualify_threshold;

        candidates
            .into_iter()
            .flat_map(|table| {
                table.columns.iter().map(move |column| {
                    let label = if qualify {
                        format!("{}.{}", table.name, column.name)
                    } else {
                        column.name.clone()
                    };
                    Suggestion::new(
                        label,
                        SuggestionCategory::Column,
                        format!("{} ({})", column.data_type, table.name),
                    )
                    .with_documentation(format!("Table: {}", table.qualified_name()))
                })
            })
            .collect()
    }

    fn function_candidates(&self) -> Vec<Suggestion> {
        FUNCTIONS
            .iter()
            .map(|f| {
                Suggestion::new(f.name, SuggestionCategory::Function, f.detail)
                    .with_snippet(format!("{}($0)", f.name))
            })
            .collect()
    }
}
