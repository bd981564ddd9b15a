/// Load state of the schema cache, exposed so surfaces can show progress.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SchemaState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Error(String),
}
