use crate::config::images;

pub struct Project {
    pub title: &'static str,
    pub location: &'static str,
    pub category: &'static str,
    pub image: &'static str,
}

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Job {
    pub role: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Azure Villa",
        location: "Malibu, California",
        category: "Residential",
        image: images::EXTERIOR,
    },
    Project {
        title: "The Onyx",
        location: "Dubai, UAE",
        category: "Commercial",
        image: images::INTERIOR,
    },
    Project {
        title: "Serenity Spa",
        location: "Kyoto, Japan",
        category: "Hospitality",
        image: images::DETAIL,
    },
    Project {
        title: "Vanguard HQ",
        location: "Berlin, Germany",
        category: "Corporate",
        image: images::OFFICE,
    },
];

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Architecture",
        description: "Form follows function in our comprehensive structural design process, ensuring timeless aesthetic appeal.",
    },
    Service {
        title: "Interior Design",
        description: "Curating sensory atmospheres through material, light, and spatial harmony for elevated living.",
    },
    Service {
        title: "Construction",
        description: "Turnkey execution with rigorous precision, managing every detail from foundation to finish.",
    },
    Service {
        title: "Master Planning",
        description: "Strategic development planning for large-scale residential and commercial communities.",
    },
];

pub const JOBS: [Job; 3] = [
    Job {
        role: "Senior Architect",
        location: "New York",
        kind: "Full-Time",
    },
    Job {
        role: "Interior Designer",
        location: "London",
        kind: "Full-Time",
    },
    Job {
        role: "Site Engineer",
        location: "Dubai",
        kind: "Contract",
    },
];

/// Choices on the first step of the inquiry form.
pub const PROJECT_TYPES: [&str; 4] = ["Residential", "Commercial", "Hospitality", "Retail"];

pub const FOOTER_COLUMNS: [&str; 3] = ["Studio", "Expertise", "Connect"];
pub const FOOTER_LINKS: [&str; 3] = ["Overview", "Philosophy", "Awards"];
pub const FOOTER_LABELS: [&str; 3] = ["Instagram", "LinkedIn", "Legal"];
pub const SOCIAL_GLYPHS: [(&str, &str); 3] = [("Instagram", "IG"), ("LinkedIn", "IN"), ("Facebook", "FB")];

pub const CHAT_WELCOME: &str = "Welcome. How may I assist with your design inquiry today?";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lists_have_fixed_sizes() {
        assert_eq!(PROJECTS.len(), 4);
        assert_eq!(SERVICES.len(), 4);
        assert_eq!(JOBS.len(), 3);
        assert_eq!(PROJECT_TYPES.len(), 4);
    }

    #[test]
    fn project_titles_are_unique_and_have_images() {
        let titles: HashSet<_> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(titles.len(), PROJECTS.len());
        assert!(PROJECTS.iter().all(|p| p.image.starts_with("https://")));
    }
}
