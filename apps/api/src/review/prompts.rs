// Prompt template and scoring rubric for resume review.

use crate::review::models::ReviewRequest;

/// One weighted rubric criterion. Weights are percentages and sum to 100.
#[derive(Debug, Clone, Copy)]
pub struct RubricCriterion {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub weight: u8,
}

pub const RUBRIC: &[RubricCriterion] = &[
    RubricCriterion {
        name: "Clarity",
        description: None,
        weight: 25,
    },
    RubricCriterion {
        name: "Results",
        description: Some("quantified outcomes"),
        weight: 25,
    },
    RubricCriterion {
        name: "Relevance to target role",
        description: None,
        weight: 20,
    },
    RubricCriterion {
        name: "Structure",
        description: Some("sections, bullet style"),
        weight: 15,
    },
    RubricCriterion {
        name: "Language",
        description: Some("verbs, grammar, tense"),
        weight: 10,
    },
    RubricCriterion {
        name: "Skills",
        description: Some("tools, balance"),
        weight: 5,
    },
];

/// Review prompt template.
/// Replace: {rubric}, {language}, {job}, {text}
pub const REVIEW_PROMPT_TEMPLATE: &str = r#"You are a resume reviewer. Analyze the resume text below and respond with STRICT JSON using this exact schema:
{overallScore:number, sections:[{key:string,score:number,feedback:string}], bulletsRewrite:string[], checklist:string[]}

Scoring weights:
{rubric}

Language: {language}. Target role: {job}.
Text:
"""
{text}
"""
Return only JSON, no prose."#;

fn render_rubric() -> String {
    RUBRIC
        .iter()
        .map(|c| match c.description {
            Some(desc) => format!("- {} ({}) {}%", c.name, desc, c.weight),
            None => format!("- {} {}%", c.name, c.weight),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fills `{name}` placeholders in a single left-to-right pass. Substituted
/// values are never rescanned, so braces in caller input pass through verbatim.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];

        let hit = values.iter().find_map(|(name, value)| {
            candidate[1..]
                .strip_prefix(*name)
                .is_some_and(|tail| tail.starts_with('}'))
                .then_some((name.len() + 2, *value))
        });

        match hit {
            Some((len, value)) => {
                out.push_str(value);
                rest = &candidate[len..];
            }
            None => {
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Renders the review prompt for one request.
pub fn build_review_prompt(request: &ReviewRequest) -> String {
    let job = if request.job.trim().is_empty() {
        "N/A"
    } else {
        request.job.trim()
    };
    let rubric = render_rubric();

    fill_template(
        REVIEW_PROMPT_TEMPLATE,
        &[
            ("rubric", rubric.as_str()),
            ("language", request.language.as_str()),
            ("job", job),
            ("text", request.text.as_str()),
        ],
    )
}
