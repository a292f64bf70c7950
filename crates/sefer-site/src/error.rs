use sefer_parser::ParseError;
use sefer_storage::StorageError;

/// Error returned when a site build fails.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Reading a source or writing an output failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    /// A page template failed to load or render.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
    /// A recipe is malformed and the build runs in fail-fast mode.
    #[error("{path}: {source}")]
    Document {
        /// Source path of the offending recipe.
        path: String,
        #[source]
        source: ParseError,
    },
    /// A recipe would overwrite a page the site generates itself.
    #[error("{path}: output path {output} is reserved")]
    ReservedPath {
        /// Source path of the recipe.
        path: String,
        /// Output path it maps to.
        output: String,
    },
}
