// C entry points for a host UI that owns the image, cropping and editing.
// Every call is independent; there is no engine to init or destroy.
use crate::core::engine::AnalysisEngine;
use crate::report::{JsonFormatter, ReportFormatter};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

const EMPTY_JSON: &str = "{}";

fn analyze_to_json(text: &str) -> String {
    let report = AnalysisEngine::new().analyze(text);
    let formatter = JsonFormatter;
    let tables = (
        formatter.character_table(&report),
        formatter.word_table(&report),
        formatter.category_table(&report),
    );
    match tables {
        (Ok(characters), Ok(words), Ok(categories)) => format!(
            "{{\"characters\":{},\"words\":{},\"categories\":{}}}",
            characters, words, categories
        ),
        _ => EMPTY_JSON.to_string(),
    }
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s)
        .unwrap_or_else(|_| CString::new(EMPTY_JSON).unwrap_or_default())
        .into_raw()
}

/// Analyzes NUL-terminated UTF-8 text and returns a JSON object with the
/// `characters`, `words` and `categories` tables. Invalid UTF-8 is replaced
/// rather than rejected. Free the result with `telugu_free_string`.
///
/// # Safety
/// `text` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn telugu_analyze_json(text: *const c_char) -> *mut c_char {
    let input = if text.is_null() {
        String::new()
    } else {
        CStr::from_ptr(text).to_string_lossy().into_owned()
    };
    let json = catch_unwind(|| analyze_to_json(&input)).unwrap_or_else(|_| {
        log::error!("panic while analyzing text");
        EMPTY_JSON.to_string()
    });
    into_c_string(json)
}

/// # Safety
/// `s` must be null or a pointer returned by `telugu_analyze_json`.
#[no_mangle]
pub unsafe extern "C" fn telugu_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(text: &str) -> serde_json::Value {
        let input = CString::new(text).unwrap();
        unsafe {
            let out = telugu_analyze_json(input.as_ptr());
            let json = CStr::from_ptr(out).to_str().unwrap().to_string();
            telugu_free_string(out);
            serde_json::from_str(&json).unwrap()
        }
    }

    #[test]
    fn returns_all_three_tables() {
        let value = call("రాముడు");
        assert_eq!(value["words"][0]["word"], "రాముడు");
        assert_eq!(value["words"][0]["frequency"], 1);
        assert_eq!(value["characters"].as_array().map(Vec::len), Some(72));
        assert!(value["categories"].is_array());
    }

    #[test]
    fn null_input_is_empty_text() {
        unsafe {
            let out = telugu_analyze_json(std::ptr::null());
            let value: serde_json::Value =
                serde_json::from_str(CStr::from_ptr(out).to_str().unwrap()).unwrap();
            telugu_free_string(out);
            assert_eq!(value["words"].as_array().map(Vec::len), Some(0));
        }
        unsafe { telugu_free_string(std::ptr::null_mut()) };
    }
}
