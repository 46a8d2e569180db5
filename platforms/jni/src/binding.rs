use cv_version::CvVersion;
use jni::JNIEnv;
use jni::sys::jstring;

use crate::error::BindingError;

const EXCEPTION_CLASS: &str = "java/lang/RuntimeException";

pub(crate) fn library_version() -> Result<String, BindingError> {
    let core = CvVersion::with_opencv();
    Ok(core.version_service.get_library_version()?.into())
}

pub(crate) fn binding_version() -> String {
    CvVersion::build_info().to_string()
}

/// Hands the value over to the JVM; failures become a pending
/// `RuntimeException` and a `null` return
pub(crate) fn to_java_string(env: &mut JNIEnv, value: Result<String, BindingError>) -> jstring {
    let result = value.and_then(|value| Ok(env.new_string(value)?));

    match result {
        Ok(string) => string.into_raw(),
        Err(error) => {
            tracing::error!("Version query failed: {error}");
            throw(env, &error);
            std::ptr::null_mut()
        }
    }
}

fn throw(env: &mut JNIEnv, error: &BindingError) {
    // the JVM may already hold the exception that caused the failure
    if env.exception_check().unwrap_or(false) {
        return;
    }

    if let Err(throw_error) = env.throw_new(EXCEPTION_CLASS, error.to_string()) {
        tracing::error!("Failed to throw {EXCEPTION_CLASS}: {throw_error}");
    }
}
