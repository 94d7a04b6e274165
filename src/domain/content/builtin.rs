use super::*;

fn s(value: &str) -> String {
    value.to_string()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| s(v)).collect()
}

fn skill(name: &str, level: u8, icon: Icon) -> Skill {
    Skill {
        name: s(name),
        level,
        icon,
    }
}

pub(super) fn content() -> Content {
    Content {
        personal_info: PersonalInfo {
            full_name: s("Chaimae El Khatib"),
            title: s("Full Stack Web Developer"),
            location: s("Morocco"),
            email: s("chaimae.elkhatib@example.com"),
            phone: Some(s("+212 6XXXXXXXX")),
            description: s("Passionate Full Stack Developer crafting innovative web solutions that blend creativity, performance, and user-centric design."),
            social_links: vec![
                SocialLink {
                    kind: SocialKind::LinkedIn,
                    url: s("https://www.linkedin.com/in/chaimae-el-khatib"),
                },
                SocialLink {
                    kind: SocialKind::GitHub,
                    url: s("https://github.com/chaimae-elkhatib"),
                },
                SocialLink {
                    kind: SocialKind::Twitter,
                    url: s("https://twitter.com/chaimae_dev"),
                },
            ],
        },
        highlights: vec![
            Highlight {
                icon: Icon::Code,
                title: s("Professional Passion"),
                description: s("As a dedicated Full Stack Web Developer, I transform complex challenges into elegant, efficient digital solutions."),
            },
            Highlight {
                icon: Icon::LaptopCode,
                title: s("Technical Expertise"),
                description: s("Proficient in modern web technologies, with a focus on creating responsive, performant, and user-centric applications."),
            },
            Highlight {
                icon: Icon::GraduationCap,
                title: s("Continuous Learning"),
                description: s("Committed to staying at the forefront of technological innovation, constantly expanding my skill set and knowledge."),
            },
            Highlight {
                icon: Icon::Award,
                title: s("Problem Solving"),
                description: s("Analytical thinker with a strategic approach to developing innovative solutions that drive business success."),
            },
        ],
        stats: vec![
            Stat { label: s("Years of Experience"), value: s("3+") },
            Stat { label: s("Completed Projects"), value: s("20+") },
            Stat { label: s("Technologies Mastered"), value: s("15+") },
            Stat { label: s("Client Satisfaction"), value: s("100%") },
        ],
        skills: vec![
            SkillCategory {
                name: s("Frontend"),
                skills: vec![
                    skill("React", 90, Icon::React),
                    skill("Next.js", 85, Icon::NextJs),
                    skill("Tailwind CSS", 95, Icon::Tailwind),
                    skill("JavaScript", 90, Icon::JavaScript),
                ],
            },
            SkillCategory {
                name: s("Backend"),
                skills: vec![
                    skill("Node.js", 85, Icon::Node),
                    skill("Express", 80, Icon::Express),
                    skill("Python", 75, Icon::Python),
                    skill("Django", 70, Icon::Django),
                ],
            },
            SkillCategory {
                name: s("Databases"),
                skills: vec![
                    skill("MongoDB", 80, Icon::MongoDb),
                    skill("PostgreSQL", 75, Icon::PostgreSql),
                    skill("MySQL", 70, Icon::Database),
                ],
            },
            SkillCategory {
                name: s("DevOps"),
                skills: vec![
                    skill("Docker", 70, Icon::Docker),
                    skill("AWS", 65, Icon::Aws),
                    skill("Git", 90, Icon::Git),
                ],
            },
        ],
        services: vec![
            Service {
                name: s("Web Development"),
                icon: Icon::Code,
                description: s("Custom web solutions using modern technologies"),
                features: strings(&[
                    "Custom Web Application Development",
                    "Responsive and Mobile-First Design",
                    "Performance Optimization",
                    "API Integration",
                    "Single Page Applications (SPA)",
                ]),
            },
            Service {
                name: s("UI/UX Design"),
                icon: Icon::Palette,
                description: s("Intuitive and engaging user interfaces"),
                features: strings(&[
                    "User-Centered Design",
                    "Wireframing and Prototyping",
                    "Interactive Design Systems",
                    "Accessibility Compliance",
                    "Design Consulting",
                ]),
            },
            Service {
                name: s("Backend Development"),
                icon: Icon::Server,
                description: s("Robust and scalable server-side solutions"),
                features: strings(&[
                    "Microservices Architecture",
                    "RESTful API Development",
                    "Database Design and Optimization",
                    "Authentication and Security",
                    "Cloud Deployment",
                ]),
            },
            Service {
                name: s("Performance & Optimization"),
                icon: Icon::Chart,
                description: s("Advanced performance engineering"),
                features: strings(&[
                    "Code Optimization",
                    "Load Time Reduction",
                    "Scalability Consulting",
                    "Performance Audits",
                    "Continuous Integration",
                ]),
            },
        ],
        projects: vec![
            Project {
                id: 1,
                title: s("AI-Powered Portfolio Platform"),
                category: s("Web Development"),
                short_description: s("Modern portfolio website with AI-driven features and responsive design"),
                full_description: s("A cutting-edge portfolio platform built with React and Tailwind CSS, featuring advanced animations, dark mode, and responsive layout."),
                technologies: strings(&["React", "Tailwind CSS", "Framer Motion"]),
                github_link: Some(s("https://github.com/chaimae-elkhatib/portfolio")),
                live_link: Some(s("https://chaimae-portfolio.vercel.app")),
            },
            Project {
                id: 2,
                title: s("E-Commerce Microservices"),
                category: s("Full Stack"),
                short_description: s("Scalable e-commerce platform with microservices architecture"),
                full_description: s("A comprehensive e-commerce solution built using microservices, featuring user authentication, product management, and payment integration."),
                technologies: strings(&["Node.js", "React", "Docker", "MongoDB"]),
                github_link: Some(s("https://github.com/chaimae-elkhatib/ecommerce-microservices")),
                live_link: Some(s("https://chaimae-ecommerce.vercel.app")),
            },
            Project {
                id: 3,
                title: s("Machine Learning Recommendation System"),
                category: s("AI/ML"),
                short_description: s("Personalized movie recommendation engine using collaborative filtering"),
                full_description: s("An advanced recommendation system that uses machine learning algorithms to provide personalized movie suggestions based on user preferences."),
                technologies: strings(&["Python", "Django", "TensorFlow", "Scikit-learn"]),
                github_link: Some(s("https://github.com/chaimae-elkhatib/ml-recommender")),
                live_link: Some(s("https://chaimae-recommender.herokuapp.com")),
            },
            Project {
                id: 4,
                title: s("Social Media Dashboard"),
                category: s("Web Development"),
                short_description: s("Real-time social media analytics dashboard"),
                full_description: s("An analytics dashboard that aggregates engagement metrics across social networks and streams updates in real time."),
                technologies: strings(&["Next.js", "Tailwind CSS", "Firebase"]),
                github_link: None,
                live_link: None,
            },
        ],
        journey: Journey {
            education: vec![
                Experience {
                    title: s("Master in Computer Science"),
                    organization: s("National School of Applied Sciences"),
                    location: s("Morocco"),
                    period: s("2020 - 2022"),
                    description: s("Specialized in Web Technologies and Software Engineering with a focus on Full Stack Development and Machine Learning."),
                    icon: Icon::GraduationCap,
                    achievements: vec![],
                },
                Experience {
                    title: s("Bachelor in Computer Engineering"),
                    organization: s("University of Technology"),
                    location: s("Morocco"),
                    period: s("2016 - 2020"),
                    description: s("Comprehensive program covering software development, network engineering, and advanced programming concepts."),
                    icon: Icon::GraduationCap,
                    achievements: vec![],
                },
            ],
            experience: vec![
                Experience {
                    title: s("Senior Full Stack Developer"),
                    organization: s("Tech Innovations Inc."),
                    location: s("Remote"),
                    period: s("2022 - Present"),
                    description: s("Lead developer for multiple web applications, implementing microservices architecture and cutting-edge technologies."),
                    icon: Icon::Briefcase,
                    achievements: strings(&[
                        "Developed scalable web solutions",
                        "Implemented CI/CD pipelines",
                        "Mentored junior developers",
                    ]),
                },
                Experience {
                    title: s("Web Development Consultant"),
                    organization: s("Digital Solutions Agency"),
                    location: s("Morocco"),
                    period: s("2020 - 2022"),
                    description: s("Provided expert consulting for web development projects, focusing on performance and user experience."),
                    icon: Icon::Laptop,
                    achievements: strings(&[
                        "Optimized existing web applications",
                        "Implemented responsive design strategies",
                        "Conducted technical workshops",
                    ]),
                },
            ],
            certifications: vec![
                Certification {
                    title: s("AWS Certified Developer - Associate"),
                    issuer: s("Amazon Web Services"),
                    date: s("2021"),
                    icon: Icon::Certificate,
                },
                Certification {
                    title: s("Advanced React Developer Certification"),
                    issuer: s("React Certification Board"),
                    date: s("2022"),
                    icon: Icon::Code,
                },
            ],
        },
        testimonials: vec![
            Testimonial {
                quote: s("Chaimae is an exceptional developer with an incredible ability to transform complex requirements into elegant, efficient solutions. Her technical expertise and problem-solving skills are truly remarkable."),
                name: s("Ahmed Hassan"),
                title: s("CTO"),
                company: s("Tech Innovations Inc."),
                linkedin_profile: Some(s("https://www.linkedin.com/in/ahmed-hassan")),
            },
            Testimonial {
                quote: s("Working with Chaimae was a game-changer for our project. Her deep understanding of modern web technologies and commitment to quality exceeded our expectations."),
                name: s("Fatima Benali"),
                title: s("Product Manager"),
                company: s("Digital Solutions Agency"),
                linkedin_profile: Some(s("https://www.linkedin.com/in/fatima-benali")),
            },
            Testimonial {
                quote: s("Chaimae's ability to deliver complex web applications with clean, maintainable code is truly impressive. She's not just a developer, but a true technology partner."),
                name: s("Omar Khaled"),
                title: s("Senior Engineering Manager"),
                company: s("Global Tech Solutions"),
                linkedin_profile: Some(s("https://www.linkedin.com/in/omar-khaled")),
            },
        ],
    }
}
