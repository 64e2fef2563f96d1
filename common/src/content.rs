//! 組み込みコンテンツ
//!
//! カスタムJSONが指定されない場合にページへ表示する内容。

use crate::types::{Portfolio, Profile, ProjectRecord, SkillGroup};

const PORTRAIT_PATH: &str = "/assets/mee.jpg";

impl Portfolio {
    /// 組み込みのポートフォリオ
    pub fn builtin() -> Self {
        Self {
            profile: builtin_profile(),
            skills: builtin_skills(),
            projects: builtin_projects(),
        }
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_profile() -> Profile {
    Profile {
        name: "Navami".into(),
        headline: "Full-Stack Developer".into(),
        bio: "Full Stack Developer building clean, performant web applications. \
              I love designing intuitive user experiences and reliable backend services."
            .into(),
        tagline: "React • Node.js • MongoDB • Tailwind".into(),
        portrait: PORTRAIT_PATH.into(),
        github_url: "https://github.com/navami21".into(),
        email: "navamib2023@gmail.com".into(),
        availability: "I'm open to new opportunities, freelance or full-time. \
                       Drop a message and I'll reply within a day."
            .into(),
        highlights: vec![
            "React / Frontend".into(),
            "Node.js / Backend".into(),
            "MongoDB".into(),
        ],
    }
}

fn builtin_skills() -> Vec<SkillGroup> {
    vec![
        SkillGroup::new("Frontend", ["React", "Tailwind CSS", "Framer Motion", "Bootstrap"]),
        SkillGroup::new("Backend", ["Node.js", "Express.js", "REST APIs"]),
        SkillGroup::new("Database", ["MongoDB", "MySQL"]),
        SkillGroup::new("Tools", ["Git", "Figma", "Postman"]),
    ]
}

fn builtin_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::builtin(
            "ICTAK Dataset Gallery",
            "MERN • Tailwind • Framer Motion",
            "A dataset and alumni project platform: upload/manage datasets, view alumni projects, \
             like/comment, file uploads (images & PDF), protected admin routes.",
            "https://images.unsplash.com/photo-1555066931-4365d14bab8c?auto=format&fit=crop&w=1400&q=60",
        ),
        ProjectRecord::builtin(
            "Event Booking System",
            "Node.js • MongoDB • Stripe",
            "Event booking with QR-code check-in, controllers role, Google Calendar integration, \
             and Stripe payments.",
            "https://images.unsplash.com/photo-1496307042754-b4aa456c4a2d?auto=format&fit=crop&w=1400&q=60",
        ),
        ProjectRecord::builtin(
            "Library Interactive App",
            "React • Gutendex API • Node.js",
            "Browse/filter books by category, checkout rules (max 5 books, <=3 per category), \
             responsive UI and login system.",
            "https://images.unsplash.com/photo-1512820790803-83ca734da794?auto=format&fit=crop&w=1400&q=60",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let portfolio = Portfolio::builtin();
        assert!(portfolio.validate().is_ok());
        assert_eq!(portfolio.projects.len(), 3);
        assert_eq!(portfolio.skills.len(), 4);
    }

    #[test]
    fn test_builtin_skill_order() {
        let portfolio = Portfolio::builtin();
        let groups: Vec<&str> = portfolio
            .skills
            .iter()
            .map(|s| s.group.as_str())
            .collect();
        assert_eq!(groups, vec!["Frontend", "Backend", "Database", "Tools"]);
    }

    #[test]
    fn test_builtin_json_reload() {
        let portfolio = Portfolio::builtin();
        let json = portfolio.to_json_pretty().expect("シリアライズ失敗");
        let reloaded = Portfolio::from_json(&json).expect("再読み込み失敗");
        assert_eq!(reloaded, portfolio);
    }
}
