#![cfg_attr(feature = "strict", deny(warnings))]
#![allow(non_snake_case)]

use std::ffi::c_void;

use jni::JNIEnv;
use jni::objects::JObject;
use jni::sys::{JNI_VERSION_1_6, JavaVM, jint, jstring};

mod binding;
mod error;
mod logging;


#[unsafe(no_mangle)]
pub extern "system" fn JNI_OnLoad(_vm: *mut JavaVM, _reserved: *mut c_void) -> jint {
    logging::initialize_logging();
    JNI_VERSION_1_6
}

/// `MainActivity.openCVVersion(): String?`
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_example_lane_1detection_1opencv_1kotlin_MainActivity_openCVVersion(
    mut env: JNIEnv,
    _this: JObject,
) -> jstring {
    binding::to_java_string(&mut env, binding::library_version())
}

/// `MainActivity.bindingVersion(): String?`
///
/// Build facts of this library itself, for display next to the OpenCV
/// version. The activity declares it as
/// `private external fun bindingVersion(): String?`.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_example_lane_1detection_1opencv_1kotlin_MainActivity_bindingVersion(
    mut env: JNIEnv,
    _this: JObject,
) -> jstring {
    binding::to_java_string(&mut env, Ok(binding::binding_version()))
}
