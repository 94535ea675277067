use super::domain::{AwardCategory, AwardDraft};

pub fn demo_awards() -> Vec<AwardDraft> {
    vec![
        AwardDraft {
            title: "AI Hackathon Grand Prize".to_string(),
            organization: "National AI Association".to_string(),
            date: "2023.11".to_string(),
            description: "Customer service automation built on natural language processing."
                .to_string(),
            category: AwardCategory::Award,
            image_url: Some("/placeholder.svg?height=200&width=300".to_string()),
        },
        AwardDraft {
            title: "Engineer Information Processing".to_string(),
            organization: "HRD Korea".to_string(),
            date: "2022.08".to_string(),
            description: "National certification in software engineering practice.".to_string(),
            category: AwardCategory::Certificate,
            image_url: None,
        },
        AwardDraft {
            title: "AWS Solutions Architect Associate".to_string(),
            organization: "Amazon Web Services".to_string(),
            date: "2023.03".to_string(),
            description: "Designing and running workloads on AWS.".to_string(),
            category: AwardCategory::Certificate,
            image_url: None,
        },
        AwardDraft {
            title: "Machine Learning Specialist Course".to_string(),
            organization: "Fast Campus".to_string(),
            date: "2022.12".to_string(),
            description: "Six months of intensive machine learning training.".to_string(),
            category: AwardCategory::Education,
            image_url: None,
        },
    ]
}
