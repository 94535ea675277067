use super::domain::{ProjectContribution, ProjectDraft, ProjectLink};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn contribution(area: &str, percentage: u8) -> ProjectContribution {
    ProjectContribution {
        area: area.to_string(),
        percentage,
    }
}

fn github(url: &str) -> ProjectLink {
    ProjectLink {
        kind: "github".to_string(),
        url: url.to_string(),
        label: "GitHub Repository".to_string(),
    }
}

/// Sample projects written when an empty store is seeded.
pub fn demo_projects() -> Vec<ProjectDraft> {
    vec![
        ProjectDraft {
            title: "AI Chatbot Automation".to_string(),
            description: "Customer service chatbot built on Python and the OpenAI API.".to_string(),
            detail_description: Some(
                "Classifies incoming customer questions and drafts tailored answers, \
                 using natural language processing to work out what the customer wants."
                    .to_string(),
            ),
            tech_stack: strings(&["Python", "OpenAI API", "FastAPI", "React"]),
            image_url: "/placeholder.svg?height=200&width=400".to_string(),
            images: Some(strings(&[
                "/placeholder.svg?height=400&width=600",
                "/placeholder.svg?height=400&width=600",
            ])),
            start_date: Some("2023.03".to_string()),
            end_date: Some("2023.08".to_string()),
            role: Some("Full-stack developer (personal project)".to_string()),
            contributions: Some(vec![
                contribution("Backend API", 90),
                contribution("Frontend", 70),
                contribution("AI model integration", 85),
                contribution("Database design", 100),
            ]),
            results: Some(strings(&[
                "Response time cut by 70%",
                "Customer satisfaction up 85%",
                "Operating cost down 40%",
            ])),
            links: Some(vec![
                github("https://github.com/example/chatbot"),
                ProjectLink {
                    kind: "demo".to_string(),
                    url: "https://chatbot-demo.com".to_string(),
                    label: "Live Demo".to_string(),
                },
            ]),
            retrospective: Some(
                "Token limits and API cost were the main constraints. A local LLM is the next step."
                    .to_string(),
            ),
            tags: Some(strings(&["AI", "Chatbot", "Automation"])),
            category: Some("AI/ML".to_string()),
        },
        ProjectDraft {
            title: "Analytics Dashboard".to_string(),
            description: "Realtime dashboard that analyses and visualises business data."
                .to_string(),
            tech_stack: strings(&["Python", "Pandas", "Plotly", "Streamlit"]),
            image_url: "/placeholder.svg?height=200&width=400".to_string(),
            start_date: Some("2023.01".to_string()),
            end_date: Some("2023.04".to_string()),
            role: Some("Data analyst and backend developer".to_string()),
            contributions: Some(vec![
                contribution("Data analysis", 95),
                contribution("Visualisation", 80),
                contribution("Backend", 60),
            ]),
            results: Some(strings(&[
                "Data processing 60% faster",
                "Decision time halved",
            ])),
            links: Some(vec![github("https://github.com/example/dashboard")]),
            tags: Some(strings(&["Data Analysis", "Visualization", "Dashboard"])),
            category: Some("Data Science".to_string()),
            ..Default::default()
        },
        ProjectDraft {
            title: "Web Scraping Pipeline".to_string(),
            description: "Scheduled collection and cleaning of data from several websites."
                .to_string(),
            tech_stack: strings(&["Python", "Selenium", "BeautifulSoup", "Celery"]),
            image_url: "/placeholder.svg?height=200&width=400".to_string(),
            start_date: Some("2022.11".to_string()),
            end_date: Some("2023.02".to_string()),
            role: Some("Backend developer".to_string()),
            contributions: Some(vec![
                contribution("Scraping logic", 100),
                contribution("Data cleaning", 90),
                contribution("Scheduling", 85),
            ]),
            results: Some(strings(&[
                "Manual work down 90%",
                "95% data accuracy",
            ])),
            links: Some(vec![github("https://github.com/example/scraper")]),
            tags: Some(strings(&["Web Scraping", "Automation", "Data Collection"])),
            category: Some("Automation".to_string()),
            ..Default::default()
        },
    ]
}
