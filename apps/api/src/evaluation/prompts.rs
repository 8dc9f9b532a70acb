// LLM prompt templates for consultant fit evaluation.

use crate::models::consultant::ConsultantRecord;

/// Evaluation prompt template. Every `{placeholder}` is replaced before sending.
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"You are evaluating one consultant against a job description.

Job Description:
"""
{job_description}
"""

Consultant Profile:
- Name: {name}
- Role: {role}
- Location: {location}
- Years of Experience: {years_of_exp}
- Skills: {skills}
- Bio: {bio}

Respond with strictly valid JSON (no extra commentary) with this EXACT schema:
{
  "fitScore": <integer between 0 and 100>,
  "summary": "<1–2 sentence explanation of fit or mismatch>",
  "pros": ["<strength>", "..."],
  "cons": ["<weakness>", "..."],
  "questions": ["<suggested interview question>", "..."]
}"#;

/// Renders the evaluation prompt for one consultant.
pub fn build_evaluation_prompt(job_description: &str, consultant: &ConsultantRecord) -> String {
    let years_of_exp = consultant.years_of_exp.to_string();
    let skills = consultant.skills.join(", ");

    render_template(
        EVALUATION_PROMPT_TEMPLATE,
        &[
            ("job_description", job_description.trim()),
            ("name", consultant.name.as_str()),
            ("role", consultant.role.as_str()),
            ("location", consultant.location.as_str()),
            ("years_of_exp", years_of_exp.as_str()),
            ("skills", skills.as_str()),
            ("bio", consultant.bio.as_str()),
        ],
    )
}

/// Substitutes `{key}` placeholders in one pass over `template`. Substituted
/// text is never rescanned; braces that do not name a known key are kept.
fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let placeholder = after.find('}').and_then(|close| {
            values
                .iter()
                .find(|(key, _)| *key == &after[..close])
                .map(|(_, value)| (*value, close))
        });

        match placeholder {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
