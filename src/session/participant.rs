use serde::{Deserialize, Serialize};

/// A meeting attendee, used to enrich the generation prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,

    #[serde(default)]
    pub role: String,

    #[serde(default)]
    pub remark: String,
}

impl Participant {
    pub fn new(name: &str, role: &str, remark: &str) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            remark: remark.to_string(),
        }
    }

    /// Line for the participants section of the prompt
    pub fn prompt_line(&self) -> String {
        format!("- {}：役割 {}、備考 {}", self.name, self.role, self.remark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_line_with_empty_remark() {
        let p = Participant::new("A", "PM", "");
        assert_eq!(p.prompt_line(), "- A：役割 PM、備考 ");
    }

    #[test]
    fn test_missing_role_and_remark_default_to_empty() {
        let p: Participant = serde_json::from_str(r#"{"name":"Aさん"}"#).unwrap();
        assert_eq!(p, Participant::new("Aさん", "", ""));
    }
}
