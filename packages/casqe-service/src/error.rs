pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Malformed upstream payload: {0}")]
	MalformedPayload(#[from] casqe_domain::Error),
}
