use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid timestamp '{input}': expected YYYY-MM-DDTHH:MMZ")]
    InvalidTimestamp { input: String },
}
