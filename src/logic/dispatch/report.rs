//! Report Templating
//!
//! Deterministic HTML rendering of one assessment result. Questions render
//! plain, answers bold, one block per answer; the insight section appears
//! only when insight content was actually supplied.

use serde_json::Value;

use crate::models::{PredictionSummary, RawAnswers};

/// Subject line for every report email.
pub const REPORT_SUBJECT: &str = "Your Stress Assessment Results";

/// Render the HTML report body.
pub fn render_report(
    answers: &RawAnswers,
    prediction: &PredictionSummary,
    insight: Option<&str>,
) -> String {
    let mut answers_section = String::new();
    for (question, answer) in answers {
        answers_section.push_str(&format!(
            "{}:<br><b>{}</b><br><br>",
            question,
            render_value(answer)
        ));
    }

    let level = prediction.stress_level.as_deref().unwrap_or("-");

    let mut body = format!(
        "<h2>Your Stress Assessment Results</h2>\n{}<b>Prediction:</b> {}\n",
        answers_section, level
    );

    if let Some(content) = insight {
        body.push_str(&format!("<br><br><b>Insight:</b><br>{}\n", content));
    }

    body.push_str("<hr><small>This email was sent by PRISM.</small>");
    body
}

/// Render an answer value without JSON quoting around plain strings.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
