use lex_core::Category;
use lex_core::responses::ErrorResponse;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Print `error` as an [`ErrorResponse`] body, then hand it back for the
/// non-zero exit.
pub fn fail<E>(error: E, flags: &GlobalFlags) -> anyhow::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    let body = ErrorResponse {
        error: error.to_string(),
    };
    if let Err(render_error) = output(&body, flags.format) {
        tracing::warn!(%render_error, "failed to print error response");
    }
    anyhow::Error::new(error)
}

/// Parse a `--pos` value, reporting failures as an error response.
pub fn parse_category(value: &str, flags: &GlobalFlags) -> anyhow::Result<Category> {
    value.parse().map_err(|error| fail(error, flags))
}
