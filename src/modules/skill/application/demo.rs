use super::domain::SkillDraft;

const DEMO_SKILLS: [(&str, &str, u8); 12] = [
    ("Python", "Programming", 5),
    ("JavaScript", "Programming", 4),
    ("React", "Frontend", 4),
    ("Next.js", "Frontend", 3),
    ("Django", "Backend", 4),
    ("FastAPI", "Backend", 4),
    ("PostgreSQL", "Database", 3),
    ("MongoDB", "Database", 3),
    ("Docker", "DevOps", 3),
    ("AWS", "Cloud", 3),
    ("OpenAI API", "AI/ML", 4),
    ("Pandas", "AI/ML", 5),
];

pub fn demo_skills() -> Vec<SkillDraft> {
    DEMO_SKILLS
        .iter()
        .map(|(name, category, level)| SkillDraft {
            name: name.to_string(),
            category: category.to_string(),
            level: *level,
        })
        .collect()
}
