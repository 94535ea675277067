use std::str::FromStr;

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::content::application::domain::{require_non_blank, Validate, ValidationError};

/// Headline counters on the about section. Free text such as `50+`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutStats {
    #[serde(default)]
    pub projects: String,
    #[serde(default)]
    pub solutions: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct About {
    #[schema(example = "Alex Kim")]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[schema(example = "contact@example.com")]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub stats: AboutStats,
}

impl Validate for About {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank("name", &self.name)?;

        let email = self.email.trim();
        if !email.is_empty() && EmailAddress::from_str(email).is_err() {
            return Err(ValidationError::new("email", "is not a valid address"));
        }

        Ok(())
    }
}

/// Returned while nothing is stored, and written by demo seeding.
pub fn default_about() -> About {
    About {
        name: "Alex Kim".to_string(),
        title: "AI & Automation Engineer".to_string(),
        description: "Builds practical automation with Python and modern AI tooling. \
                      Enjoys turning complicated problems into simple solutions."
            .to_string(),
        email: "contact@example.com".to_string(),
        phone: "+82-10-1234-5678".to_string(),
        location: "Seoul, South Korea".to_string(),
        github: "https://github.com/username".to_string(),
        linkedin: "https://linkedin.com/in/username".to_string(),
        website: "https://portfolio.example.com".to_string(),
        profile_image: "/placeholder.svg?height=300&width=300".to_string(),
        stats: AboutStats {
            projects: "50+".to_string(),
            solutions: "10+".to_string(),
            experience: "2y+".to_string(),
            skills: "15+".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_is_valid() {
        assert!(default_about().validate().is_ok());
    }

    #[test]
    fn empty_email_is_allowed() {
        let about = About {
            name: "Alex".to_string(),
            ..Default::default()
        };
        assert!(about.validate().is_ok());
    }

    #[test]
    fn bad_email_is_rejected() {
        let about = About {
            name: "Alex".to_string(),
            email: "not-an-email".to_string(),
            ..Default::default()
        };
        assert_eq!(about.validate().unwrap_err().field, "email");
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let value = serde_json::to_value(default_about()).unwrap();

        assert_eq!(value["profileImage"], "/placeholder.svg?height=300&width=300");
        assert_eq!(value["stats"]["projects"], "50+");
    }

    #[test]
    fn missing_stats_default_to_empty() {
        let about: About = serde_json::from_value(json!({ "name": "Alex" })).unwrap();
        assert_eq!(about.stats, AboutStats::default());
    }
}
