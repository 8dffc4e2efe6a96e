use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    RuleError(#[from] rota_recur::RuleError),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
