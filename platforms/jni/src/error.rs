use cv_version::service::error::ServiceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BindingError {
    #[error("Service error: `{0}`")]
    Service(#[from] ServiceError),
    #[error("JNI error: `{0}`")]
    Jni(#[from] jni::errors::Error),
}
