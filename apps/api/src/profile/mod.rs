// Structured profile updates (college, branch, skills, experience).

pub mod handlers;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Body of `PUT /api/profile`. Every field is optional; absent or null
/// fields leave the stored value untouched.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileUpdate {
    pub college: Option<Value>,
    pub branch: Option<Value>,
    pub skills: Option<Value>,
    pub experience: Option<Value>,
}

/// Builds the object merged into the stored profile.
pub fn build_profile_patch(update: ProfileUpdate) -> Value {
    let mut patch = Map::new();

    for (key, value) in [
        ("college", update.college),
        ("branch", update.branch),
        ("experience", update.experience),
    ] {
        if let Some(v) = value.filter(|v| !v.is_null()) {
            patch.insert(key.to_string(), v);
        }
    }

    if let Some(skills) = update.skills.and_then(normalize_skills) {
        patch.insert("skills".to_string(), skills);
    }

    Value::Object(patch)
}

/// Skills are always stored as an array of strings; a lone value becomes a
/// one-element list.
fn normalize_skills(skills: Value) -> Option<Value> {
    match skills {
        Value::Null => None,
        Value::Array(items) => Some(Value::Array(
            items
                .into_iter()
                .filter_map(|item| value_to_text(&item))
                .map(Value::String)
                .collect(),
        )),
        other => value_to_text(&other).map(|s| Value::Array(vec![Value::String(s)])),
    }
}

fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
