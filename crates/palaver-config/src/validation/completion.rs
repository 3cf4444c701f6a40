//! Completion endpoint validation (url scheme, model, sampling and timeouts).

use crate::schema::PalaverConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

pub(crate) fn validate_completion(errors: &mut Vec<String>, config: &PalaverConfig) {
    let completion = &config.completion;

    if !(completion.endpoint.starts_with("https://") || completion.endpoint.starts_with("http://"))
    {
        errors.push(format!(
            "completion.endpoint = {:?} must be an http(s) URL",
            completion.endpoint
        ));
    }
    validate_non_empty(errors, "completion.model", &completion.model);
    validate_range(errors, "completion.max_tokens", completion.max_tokens, 1, 32768);
    validate_range_f64(
        errors,
        "completion.temperature",
        completion.temperature,
        0.0,
        2.0,
    );
    validate_range(
        errors,
        "completion.connect_timeout_secs",
        completion.connect_timeout_secs,
        1,
        300,
    );
    validate_range(
        errors,
        "completion.request_timeout_secs",
        completion.request_timeout_secs,
        1,
        600,
    );
}
