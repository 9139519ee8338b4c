//! The authored portfolio content.

use super::{
    ContactInfo, EducationEntry, ExperienceEntry, Icon, Portfolio, Profile, Project, ProjectLink,
    SkillGroup, SocialLink,
};

/// Resume document, resolved by whatever hosts the page.
pub const RESUME_URL: &str = "/resume.pdf";

pub static PORTFOLIO: Portfolio = Portfolio {
    brand: "Shrsti.dev",
    badge: "Available for full-time roles",
    about: "I'm a frontend developer specializing in React and Next.js. Backed by an MCA and \
            hands-on experience at Beangate IT Solutions, I focus on building scalable, \
            high-performance, accessible UIs. I enjoy collaborating with backend teams, \
            integrating APIs, and shipping business impact quickly.",
    resume_url: RESUME_URL,
    profile: Profile {
        name: "Shrsti Garhewal",
        title: "Frontend Developer (React, Next.js)",
        tagline: "MCA graduate building scalable, high-performance web apps with React/Next.js, \
                  Tailwind & Redux.",
        location: "Bhopal, Madhya Pradesh, India",
        avatar_url: "https://res.cloudinary.com/dxduwhoku/image/upload/v1757231876/formal_jhseu1.jpg",
        socials: &[
            SocialLink {
                label: "GitHub",
                href: "https://github.com/Shrsti27",
                icon: Icon::Github,
            },
            SocialLink {
                label: "LinkedIn",
                href: "https://linkedin.com/in/shrsti-garhewal",
                icon: Icon::Linkedin,
            },
            SocialLink {
                label: "Email",
                href: "mailto:shrstigarhewal271627@gmail.com",
                icon: Icon::Mail,
            },
        ],
    },
    skills: &[
        SkillGroup {
            group: "Frontend",
            items: &[
                "React.js",
                "Next.js",
                "HTML5",
                "CSS3",
                "JavaScript (ES6+)",
                "Accessibility",
            ],
        },
        SkillGroup {
            group: "UI Libraries",
            items: &[
                "Shadcn/UI",
                "Material UI",
                "Next UI",
                "Framer Motion",
                "Radix UI",
            ],
        },
        SkillGroup {
            group: "State & Data",
            items: &["Redux Toolkit", "Axios"],
        },
        SkillGroup {
            group: "Styling",
            items: &["Tailwind CSS", "Bootstrap", "Responsive Design"],
        },
        SkillGroup {
            group: "Tools",
            items: &[
                "Git",
                "GitHub",
                "v0.dev",
                "ChatGPT",
                "Vite/Webpack",
                "ESLint",
                "Prettier",
            ],
        },
        SkillGroup {
            group: "Backend/DB (used)",
            items: &["Node.js", "MongoDB"],
        },
    ],
    projects: &[
        Project {
            name: "Beangate Academy",
            description: "Full-featured educational platform with student enrollments, course \
                          pages, and an in-progress Admin Panel for course, user, and content \
                          management.",
            stack: &[
                "Next.js",
                "Redux Toolkit",
                "Shadcn",
                "Next UI",
                "Tailwind",
                "Axios",
                "Node.js",
                "MongoDB",
            ],
            links: &[
                ProjectLink {
                    label: "Live",
                    href: "https://academy.beangates.com/",
                },
                ProjectLink {
                    label: "Company",
                    href: "https://beangates.com/",
                },
            ],
        },
        Project {
            name: "DG News",
            description: "Dynamic news website featuring real-time updates and a clean, \
                          mobile-first interface.",
            stack: &["Next.js", "Next UI", "Tailwind"],
            links: &[ProjectLink {
                label: "Live",
                href: "https://dgnews.co.in/",
            }],
        },
        Project {
            name: "Beangate CRM",
            description: "Role-based CRM for customer data and operations with integrated \
                          backend APIs.",
            stack: &["Next.js", "Redux Toolkit", "Tailwind", "Node.js", "MongoDB"],
            links: &[ProjectLink {
                label: "Admin",
                href: "https://admin.beangates.com/",
            }],
        },
    ],
    experience: &[
        ExperienceEntry {
            company: "Beangate IT Solutions",
            role: "Frontend Developer",
            period: "Jun 2023 – Present",
            points: &[
                "Designed and built responsive UI with React, Shadcn, Material UI, and Next UI.",
                "Integrated REST APIs and managed state with Redux Toolkit to reduce props drilling.",
                "Improved performance and reliability across user-facing pages; building an Admin \
                 Panel for Academy.",
            ],
        },
        ExperienceEntry {
            company: "Sony Computers (Internship)",
            role: "Front-End Development Intern",
            period: "Jun 2021",
            points: &[
                "Learned foundations of C/C++ and frontend essentials; collaborated on small UI tasks.",
            ],
        },
    ],
    education: &[
        EducationEntry {
            school: "TIT – Technocrats Institute of Technology, Bhopal (RGPV)",
            degree: "Master of Computer Applications (MCA)",
            period: "2022 – 2024",
        },
        EducationEntry {
            school: "Govt Autonomous Post Graduate College, Chhindwara (RDVV)",
            degree: "Bachelor of Computer Applications (BCA)",
            period: "2018 – 2021",
        },
    ],
    contact: ContactInfo {
        email: "shrstigarhewal271627@gmail.com",
        phone: "+91 91742 91936",
    },
};

/// The portfolio rendered by the binary.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}
