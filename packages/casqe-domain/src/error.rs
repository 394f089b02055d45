pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Extracted term {collection}[{index}] is missing a valid `{field}` field.")]
	MalformedTerm { collection: &'static str, index: usize, field: &'static str },
}
