/// Parse a whole source unit into its root [`Block`].
///
/// ## Errors
/// Returns the first hard [`ParseError`] (a required token is missing). Unrecognised tokens in statement or primary
/// position do not fail the parse; they become [`ErrorNode`]s.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<Block, ParseError> {
    Parser::new(source).parse()
}
