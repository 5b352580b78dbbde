//! Result aggregation
//!
//! Merges the main-building result with all component-use sub-results into
//! one final determination: Required outranks Warning; messages are
//! bullet-joined; citations are unioned in first-appearance order. An
//! explicit not-required result from the main pass (an authoritative
//! exclusion) is preserved as the fallback when nothing positive remains.

use shared_types::{JudgementResult, Requirement};

/// Separator between unioned citations.
const BASIS_SEPARATOR: &str = "; ";

/// Combine one article's main result and sub-results.
///
/// `main` is the raw outcome of the main-profile pass (`None` when no rule
/// applied); `sub_results` are the already-filtered positive sub-results;
/// `default_fallback` is the article's generic not-required result.
pub fn combine(
    main: Option<JudgementResult>,
    sub_results: Vec<JudgementResult>,
    default_fallback: JudgementResult,
) -> JudgementResult {
    let mut positives = Vec::new();
    let mut explicit_not_required = None;

    if let Some(result) = main {
        if result.required.is_positive() {
            positives.push(result);
        } else {
            explicit_not_required = Some(result);
        }
    }
    positives.extend(
        sub_results
            .into_iter()
            .filter(|result| result.required.is_positive()),
    );

    if positives.len() > 1 {
        return merge(positives);
    }
    match positives.pop() {
        Some(only) => only,
        None => explicit_not_required.unwrap_or(default_fallback),
    }
}

fn merge(positives: Vec<JudgementResult>) -> JudgementResult {
    let required = if positives
        .iter()
        .any(|result| result.required == Requirement::Required)
    {
        Requirement::Required
    } else {
        Requirement::Warning
    };

    let message = positives
        .iter()
        .map(|result| format!("- {}", result.message))
        .collect::<Vec<_>>()
        .join("\n");

    let mut bases: Vec<&str> = Vec::new();
    for result in &positives {
        if !bases.contains(&result.basis.as_str()) {
            bases.push(&result.basis);
        }
    }
    let basis = bases.join(BASIS_SEPARATOR);

    JudgementResult {
        required,
        message,
        basis,
    }
}
