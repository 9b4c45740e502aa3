//! The static survey question catalog. Process-wide, read-only.
//!
//! Two views exist: the full catalog asked when no résumé accompanies the
//! survey, and the reduced subset asked alongside a résumé (questions the
//! résumé cannot answer — preferences and self-assessed interview readiness).

/// A single survey question with its enumerated answer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub options: &'static [&'static str],
}

pub const FULL_CATALOG: &[Question] = &[
    Question {
        id: "jobType",
        text: "What type of job are you looking for?",
        options: &["Full-time", "Part-time", "Internship", "Contract", "Remote"],
    },
    Question {
        id: "salary",
        text: "What are your salary expectations?",
        options: &["$0-40k", "$40-60k", "$60-80k", "$80-100k", "$100k+"],
    },
    Question {
        id: "location",
        text: "What is your preferred location of work?",
        options: &["On-site", "Hybrid", "Remote", "Flexible"],
    },
    Question {
        id: "companySize",
        text: "What size of company do you prefer?",
        options: &[
            "Startup (<50)",
            "Small (50-200)",
            "Medium (201-1000)",
            "Large (1000+)",
        ],
    },
    Question {
        id: "hours",
        text: "How many hours per week are you looking to work?",
        options: &["Less than 20", "20-30", "31-40", "41-50", "50+"],
    },
    Question {
        id: "industry",
        text: "What is your preferred field or industry?",
        options: &[
            "Software Development",
            "Data Science",
            "DevOps",
            "Cloud Computing",
            "Cybersecurity",
            "Other",
        ],
    },
    Question {
        id: "relocation",
        text: "Are you open to relocation?",
        options: &["Yes", "No", "Depends on location"],
    },
    Question {
        id: "startTime",
        text: "How soon are you looking to start working?",
        options: &["Immediately", "2 weeks", "1 month", "2-3 months", "3+ months"],
    },
    Question {
        id: "internships",
        text: "How many internships or co-op terms have you completed?",
        options: &["0", "1", "2", "3", "4+"],
    },
    Question {
        id: "projects",
        text: "Have you contributed to any personal or open source projects?",
        options: &["Yes, multiple", "Yes, one or two", "No, but planning to", "No"],
    },
    Question {
        id: "github",
        text: "Do you have a GitHub profile?",
        options: &["Yes, active", "Yes, but inactive", "No"],
    },
    Question {
        id: "hackathons",
        text: "Have you participated in any hackathons or competitions?",
        options: &["Yes, multiple", "Yes, one or two", "No, but planning to", "No"],
    },
    Question {
        id: "leetcode",
        text: "How many Leetcode problems have you completed?",
        options: &["0", "1-50", "51-200", "201-500", "500+"],
    },
    Question {
        id: "versionControl",
        text: "Have you worked on any team projects using version control (e.g., Git)?",
        options: &[
            "Yes, extensively",
            "Yes, some experience",
            "No, but familiar",
            "No experience",
        ],
    },
    Question {
        id: "education",
        text: "What is the highest level of education you have completed?",
        options: &["High School", "Some College", "Bachelors", "Masters", "PhD"],
    },
    Question {
        id: "gpa",
        text: "What is your GPA?",
        options: &["< 2.0", "2.0-2.5", "2.6-3.0", "3.1-3.5", "3.6-4.0"],
    },
    Question {
        id: "applications",
        text: "How many jobs do you apply to in a week on average?",
        options: &["0-5", "6-10", "11-20", "21-30", "30+"],
    },
    Question {
        id: "tailoredResume",
        text: "Do you tailor your resume to each job you apply for?",
        options: &["Always", "Sometimes", "Rarely", "Never"],
    },
    Question {
        id: "containerization",
        text: "Are you familiar with containerization (e.g., Docker)?",
        options: &["Yes, expert", "Yes, intermediate", "Yes, beginner", "No"],
    },
    Question {
        id: "cloud",
        text: "Are you familiar with any cloud platforms (e.g., AWS, Azure, GCP)?",
        options: &["Yes, certified", "Yes, experienced", "Yes, beginner", "No"],
    },
    Question {
        id: "deployment",
        text: "Are you familiar with deployment processes?",
        options: &["Yes, expert", "Yes, intermediate", "Yes, beginner", "No"],
    },
    Question {
        id: "behavioral",
        text: "Can you answer behavioral interview questions effectively?",
        options: &["Very confident", "Somewhat confident", "Need practice", "Not confident"],
    },
];

/// Question ids still asked when a résumé is supplied. Everything else
/// (internships, projects, GPA, ...) is answerable from the résumé itself.
pub const REDUCED_IDS: &[&str] = &[
    "jobType",
    "salary",
    "location",
    "industry",
    "relocation",
    "startTime",
    "hours",
    "behavioral",
];

/// Looks up a question in the full catalog by id.
pub fn question_by_id(id: &str) -> Option<&'static Question> {
    FULL_CATALOG.iter().find(|q| q.id == id)
}

/// The reduced catalog in its canonical order (the order of `REDUCED_IDS`).
pub fn reduced_catalog() -> impl Iterator<Item = &'static Question> {
    REDUCED_IDS.iter().filter_map(|id| question_by_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_full_catalog_has_22_questions() {
        assert_eq!(FULL_CATALOG.len(), 22);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<&str> = FULL_CATALOG.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), FULL_CATALOG.len());
    }

    #[test]
    fn test_every_question_has_options() {
        for q in FULL_CATALOG {
            assert!(!q.options.is_empty(), "question {} has no options", q.id);
            assert!(!q.text.is_empty(), "question {} has no text", q.id);
        }
    }

    #[test]
    fn test_reduced_ids_are_a_subset_of_the_full_catalog() {
        for id in REDUCED_IDS {
            assert!(question_by_id(id).is_some(), "reduced id {id} not in catalog");
        }
    }

    #[test]
    fn test_reduced_catalog_has_8_questions_in_canonical_order() {
        let reduced: Vec<&str> = reduced_catalog().map(|q| q.id).collect();
        assert_eq!(reduced, REDUCED_IDS);
        assert_eq!(reduced.len(), 8);
    }

    #[test]
    fn test_question_by_id_misses_unknown_ids() {
        assert!(question_by_id("favoriteColor").is_none());
    }
}
