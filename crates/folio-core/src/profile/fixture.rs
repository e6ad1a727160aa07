//! Compiled-in portfolio dataset

use super::types::{EducationEntry, Profile, Project, WorkEntry};

/// The bundled profile served by the default store
pub fn sample_profile() -> Profile {
    Profile::new("Alex Johnson", "alex.johnson@email.com")
        .with_link("github", "https://github.com/alexjohnson")
        .with_link("linkedin", "https://linkedin.com/in/alex-johnson-dev")
        .with_link("portfolio", "https://alexjohnson.dev")
        .with_education(EducationEntry::new(
            "Stanford University",
            "Master of Science in Computer Science",
            "2019",
        ))
        .with_education(EducationEntry::new(
            "UC Berkeley",
            "Bachelor of Science in Computer Science",
            "2017",
        ))
        .with_education(EducationEntry::new(
            "Coursera",
            "Full-Stack Web Development Certificate",
            "2020",
        ))
        .with_skills([
            "JavaScript",
            "React",
            "Node.js",
            "Python",
            "PostgreSQL",
            "MongoDB",
            "Express.js",
            "Docker",
            "AWS",
            "Git",
            "TypeScript",
            "GraphQL",
        ])
        .with_project(
            Project::new(
                "E-Commerce Platform",
                "Full-stack e-commerce application with React frontend, Node.js backend, and \
                 PostgreSQL database. Features include user authentication, shopping cart, \
                 payment processing, and admin dashboard.",
            )
            .with_skills(["React", "Node.js", "PostgreSQL", "Express.js", "JavaScript"])
            .with_links([
                "https://github.com/alexj/ecommerce",
                "https://ecommerce-demo.com",
            ]),
        )
        .with_project(
            Project::new(
                "Real-time Chat Application",
                "WebSocket-based chat application supporting multiple rooms, private messaging, \
                 and file sharing. Built with React and Socket.io with MongoDB for message \
                 persistence.",
            )
            .with_skills(["React", "Node.js", "MongoDB", "Socket.io", "JavaScript"])
            .with_links(["https://github.com/alexj/chat-app"]),
        )
        .with_project(
            Project::new(
                "Data Analytics Dashboard",
                "Interactive dashboard for visualizing large datasets using Python data \
                 processing pipeline and React frontend. Includes real-time data updates and \
                 customizable charts.",
            )
            .with_skills(["Python", "React", "PostgreSQL", "Docker", "TypeScript"])
            .with_links([
                "https://github.com/alexj/analytics-dashboard",
                "https://analytics-demo.com",
            ]),
        )
        .with_project(
            Project::new(
                "Microservices API Gateway",
                "Scalable API gateway built with Node.js and Docker for managing microservices \
                 communication. Includes authentication, rate limiting, and service discovery.",
            )
            .with_skills(["Node.js", "Docker", "Express.js", "MongoDB", "AWS"])
            .with_links(["https://github.com/alexj/api-gateway"]),
        )
        .with_project(
            Project::new(
                "Machine Learning Model Deployment",
                "MLOps pipeline for deploying Python machine learning models to production \
                 using Docker containers and AWS infrastructure with automated testing and \
                 monitoring.",
            )
            .with_skills(["Python", "Docker", "AWS", "PostgreSQL"])
            .with_links(["https://github.com/alexj/ml-deployment"]),
        )
        .with_project(
            Project::new(
                "GraphQL Social Network",
                "Social networking platform built with GraphQL API, React frontend, and \
                 real-time subscriptions. Features include posts, comments, likes, and user \
                 profiles.",
            )
            .with_skills(["GraphQL", "React", "Node.js", "MongoDB", "TypeScript"])
            .with_links([
                "https://github.com/alexj/social-graphql",
                "https://social-demo.com",
            ]),
        )
        .with_work(WorkEntry::new(
            "Tech Innovations Inc",
            "Senior Full-Stack Developer",
            "2021 - Present",
            "Lead development of web applications using React, Node.js, and cloud \
             technologies. Manage team of 4 developers and architect scalable solutions for \
             enterprise clients.",
        ))
        .with_work(WorkEntry::new(
            "StartupX",
            "Full-Stack Developer",
            "2019 - 2021",
            "Developed and maintained multiple web applications using modern JavaScript \
             frameworks. Built RESTful APIs and integrated third-party services for rapid \
             product development.",
        ))
        .with_work(WorkEntry::new(
            "Digital Solutions Ltd",
            "Junior Developer",
            "2017 - 2019",
            "Started career building responsive websites and learning modern development \
             practices. Contributed to team projects and gained experience with databases and \
             server-side programming.",
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_profile_shape() {
        let profile = sample_profile();
        assert_eq!(profile.name, "Alex Johnson");
        assert_eq!(profile.email, "alex.johnson@email.com");
        assert_eq!(profile.education.len(), 3);
        assert_eq!(profile.skills.len(), 12);
        assert_eq!(profile.projects.len(), 6);
        assert_eq!(profile.work.len(), 3);
        assert_eq!(profile.links.len(), 3);
    }

    #[test]
    fn test_sample_descriptions_have_single_spaces() {
        // Line continuations must not leave doubled spaces behind
        let profile = sample_profile();
        for project in &profile.projects {
            assert!(!project.description.contains("  "), "{}", project.title);
        }
        for work in &profile.work {
            assert!(!work.description.contains("  "), "{}", work.company);
        }
    }

    #[test]
    fn test_sample_project_order() {
        let titles: Vec<_> = sample_profile()
            .projects
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles[0], "E-Commerce Platform");
        assert_eq!(titles[5], "GraphQL Social Network");
    }
}
