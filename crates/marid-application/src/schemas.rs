//! Response schemas declared to the model for structured operations.
//!
//! Written in the service's OpenAPI subset (`OBJECT`, `ARRAY`, `STRING`).

use marid_core::scamper::SCAMPER_TABLE;
use serde_json::{Map, Value, json};

fn string_array(description: Option<&str>) -> Value {
    let mut schema = json!({ "type": "ARRAY", "items": { "type": "STRING" } });
    if let Some(description) = description {
        schema["description"] = Value::from(description);
    }
    schema
}

pub fn content_strategy() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "contentCreation": {
                "type": "OBJECT",
                "properties": {
                    "post_text": { "type": "STRING" },
                    "image_prompt": { "type": "STRING" },
                    "hashtags": string_array(None),
                },
                "required": ["post_text", "image_prompt", "hashtags"]
            },
            "platformAdaptation": {
                "type": "OBJECT",
                "properties": {
                    "twitter_version": { "type": "STRING" },
                    "linkedin_version": { "type": "STRING" },
                },
                "required": ["twitter_version", "linkedin_version"]
            },
            "strategicInsights": {
                "type": "OBJECT",
                "properties": {
                    "hook_suggestion": string_array(None),
                    "next_step_idea": { "type": "STRING" },
                },
                "required": ["hook_suggestion", "next_step_idea"]
            }
        },
        "required": ["contentCreation", "platformAdaptation", "strategicInsights"]
    })
}

/// `{ ideas: [string] }`
pub fn ideas(description: &str) -> Value {
    json!({
        "type": "OBJECT",
        "properties": { "ideas": string_array(Some(description)) },
        "required": ["ideas"]
    })
}

pub fn sub_topics() -> Value {
    json!({
        "type": "OBJECT",
        "properties": { "sub_topics": string_array(Some("قائمة من 5 محاور إبداعية.")) },
        "required": ["sub_topics"]
    })
}

/// One required string per SCAMPER facet.
pub fn scamper() -> Value {
    let mut properties = Map::new();
    for facet in &SCAMPER_TABLE {
        properties.insert(
            facet.key.field_name().to_string(),
            json!({ "type": "STRING", "description": scamper_hint(facet.key.field_name()) }),
        );
    }
    let required: Vec<&str> = SCAMPER_TABLE.iter().map(|f| f.key.field_name()).collect();

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required
    })
}

fn scamper_hint(field: &str) -> &'static str {
    match field {
        "substitute" => "خطاف جديد عبر استبدال جزء من الخطاف الأصلي.",
        "combine" => "خطاف جديد عبر دمج الخطاف الأصلي مع شيء آخر.",
        "adapt" => "خطاف جديد عبر تكييف الخطاف الأصلي لسياق مختلف.",
        "modify" => "خطاف جديد عبر تعديل (تكبير، تصغير، تغيير) جانب من الخطاف الأصلي.",
        "put_to_another_use" => "خطاف جديد عبر استخدام الخطاف الأصلي في مجال أو لغرض مختلف.",
        "eliminate" => "خطاف جديد عبر إزالة أو تبسيط جزء من الخطاف الأصلي.",
        _ => "خطاف جديد عبر عكس أو إعادة ترتيب الخطاف الأصلي.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_schema_requires_all_sections() {
        let schema = content_strategy();
        assert_eq!(
            schema["required"],
            json!(["contentCreation", "platformAdaptation", "strategicInsights"])
        );
        assert_eq!(
            schema["properties"]["contentCreation"]["properties"]["hashtags"]["items"]["type"],
            "STRING"
        );
    }

    #[test]
    fn test_scamper_schema_lists_seven_required_fields() {
        let schema = scamper();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 7);
        assert_eq!(required[4], "put_to_another_use");
        assert_eq!(schema["properties"].as_object().unwrap().len(), 7);
    }
}
