//! Extraction prompt rendering. The schema instructions are generated from
//! `schema::CANDIDATE_FIELDS` so the prompt can never disagree with the
//! validator.

use crate::extraction::schema::CANDIDATE_FIELDS;

/// System prompt for résumé extraction — enforces JSON-only output.
pub const EXTRACTION_SYSTEM: &str =
    "You are an expert resume parsing engine. Your task is to extract all requested fields \
    from the provided resume text into a perfectly valid JSON object that strictly adheres \
    to the schema. \
    You MUST respond with a single JSON object and nothing else. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Renders the field table into prompt instructions: one line per field with
/// its JSON type and documentation.
pub fn render_schema_instructions() -> String {
    let mut out = String::from("Return a JSON object with EXACTLY these fields:\n");
    for field in CANDIDATE_FIELDS {
        let requirement = if field.required {
            "required"
        } else {
            "optional"
        };
        out.push_str(&format!(
            "- \"{}\" ({}, {}): {}\n",
            field.name,
            field.ty.prompt_label(),
            requirement,
            field.doc
        ));
    }
    out
}

/// Builds the full user prompt: schema instructions followed by the résumé
/// text to parse.
pub fn build_extraction_prompt(resume_text: &str) -> String {
    format!(
        "Parse the following resume text into a JSON object strictly following this schema.\n\n\
        {}\n\
        **Resume Text to Parse:**\n\n{}",
        render_schema_instructions(),
        resume_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_mention_every_schema_field() {
        let instructions = render_schema_instructions();
        for field in CANDIDATE_FIELDS {
            assert!(
                instructions.contains(&format!("\"{}\"", field.name)),
                "missing field {} in instructions",
                field.name
            );
        }
    }

    #[test]
    fn test_prompt_embeds_resume_text() {
        let prompt = build_extraction_prompt("Jane Doe, jane@x.com, 6 years of Python");
        assert!(prompt.contains("Jane Doe, jane@x.com"));
        assert!(prompt.contains("total_years_experience"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(
            build_extraction_prompt("same input"),
            build_extraction_prompt("same input")
        );
    }
}
