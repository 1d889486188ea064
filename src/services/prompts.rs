use std::fmt::Write;
use crate::models::Profile;

pub const SYSTEM_PROMPT: &str = "You are a professional relationship and marriage compatibility analyst, \
skilled at assessing how well two people match.";

const DIMENSIONS: &str = "\
Analyse the pair along the following dimensions and give each a percentage score (0-100):
1. Personality match
2. Shared interests and hobbies
3. Lifestyle compatibility
4. Zodiac compatibility
5. Long-term potential

Then give an overall compatibility score (0-100) and a detailed written summary.";

const RESPONSE_FORMAT: &str = r#"Return the result as JSON in exactly this shape:
```json
{
    "score": <overall score>,
    "details": {
        "personality": <personality score>,
        "hobbies": <hobbies score>,
        "lifestyle": <lifestyle score>,
        "zodiac": <zodiac score>,
        "longTerm": <long-term score>
    },
    "summary": "<detailed summary>"
}
```"#;

fn describe_person(out: &mut String, heading: &str, person: &Profile) {
    let _ = writeln!(out, "{heading}:");
    let _ = writeln!(out, "- Name: {}", person.name);
    let _ = writeln!(out, "- Gender: {}", person.gender);
    let _ = writeln!(out, "- Birthday: {}", person.birthday);
    let _ = writeln!(out, "- Hobbies: {}", person.hobbies.join(", "));
    if !person.values.is_empty() {
        let _ = writeln!(out, "- Values: {}", person.values.join(", "));
    }
    if let Some(style) = person
        .communication_style
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        let _ = writeln!(out, "- Communication style: {}", style.trim());
    }
}

/// Build the user message asking the model to score a pair of profiles
pub fn build_user_prompt(person1: &Profile, person2: &Profile) -> String {
    let mut prompt = String::from(
        "As a professional relationship compatibility analyst, assess how well these two people match.\n\n",
    );

    describe_person(&mut prompt, "First person", person1);
    prompt.push('\n');
    describe_person(&mut prompt, "Second person", person2);
    prompt.push('\n');
    prompt.push_str(DIMENSIONS);
    prompt.push_str("\n\n");
    prompt.push_str(RESPONSE_FORMAT);

    prompt
}
