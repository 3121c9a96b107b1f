//! Prompt Builder
//!
//! The instruction payload sent to the narrative service. The content-shaping
//! constraints (structure, tone, length) are opaque to this server - they
//! only matter to the remote model.

use serde_json::Value;

use crate::models::RawAnswers;

/// System role instruction accompanying every narrative request.
pub const SYSTEM_ROLE: &str = "You are a helpful mental health assistant.";

/// Build the coping-strategy prompt from the raw answers and the prediction.
pub fn coping_strategy_prompt(answers: &RawAnswers, prediction: &Value) -> String {
    let answers_json = serde_json::to_string(answers).unwrap_or_default();
    let prediction_json = serde_json::to_string(prediction).unwrap_or_default();

    format!(
        r#"Based on the user's stress assessment answers: {answers_json}
and predicted stress level: {prediction_json},

Generate a **two-part** coping strategy that includes:

1. **Immediate Relief** (2-3 sentences):
- A science-backed technique for instant stress reduction
- Specific instructions (e.g., duration, steps)

2. **Long-Term Resilience** (3-5 sentences):
- An evidence-based habit or training method
- Timeframe for results (e.g., "within 3 weeks")
- Neuroplasticity/growth mindset explanation

3. **Empowering Framing** (2 sentences):
- Reframe stress as adaptability
- End with a call-to-action

**Requirements:**
- Use second-person ("you/your") for personalization
- Cite research briefly (e.g., "Harvard studies show...")
- Keep total response to 5-7 sentences max
- Avoid jargon; focus on actionable steps
- Balance validation ("This is normal...") with empowerment ("You can...")

**Tone:** Supportive, scientific but conversational, and slightly motivational."#
    )
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map};

    use super::*;

    #[test]
    fn embeds_answers_and_prediction() {
        let mut answers = Map::new();
        answers.insert("How often do you feel tense?".to_string(), json!(4));
        let prediction = json!({"stressLevel": "High"});

        let prompt = coping_strategy_prompt(&answers, &prediction);

        assert!(prompt.contains("How often do you feel tense?"));
        assert!(prompt.contains("High"));
        assert!(prompt.contains("Immediate Relief"));
        assert!(prompt.contains("Long-Term Resilience"));
    }
}
