use super::domain::ExperienceDraft;

pub fn demo_experiences() -> Vec<ExperienceDraft> {
    vec![
        ExperienceDraft {
            company: "Tech Startup".to_string(),
            position: "AI Developer".to_string(),
            period: "2022.03 - present".to_string(),
            description: "Builds AI-driven automation and owns data analysis work.".to_string(),
            achievements: vec![
                "Customer service chatbot cut response time by 70%".to_string(),
                "Automated data pipeline, 50% more throughput".to_string(),
                "Model tuning improved forecast accuracy by 15%".to_string(),
            ],
        },
        ExperienceDraft {
            company: "IT Solutions Inc.".to_string(),
            position: "Python Developer".to_string(),
            period: "2020.06 - 2022.02".to_string(),
            description: "Built web applications and data processing systems.".to_string(),
            achievements: vec![
                "Delivered five Django applications".to_string(),
                "API tuning made responses 40% faster".to_string(),
                "Automation scripts saved 60% of manual effort".to_string(),
            ],
        },
    ]
}
