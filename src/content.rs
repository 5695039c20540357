use serde::Serialize;

pub const OWNER_NAME: &str = "Janaka Walakulu";
pub const CONTACT_EMAIL: &str = "contact@janakawalakulu.com";
pub const CONTACT_PHONE: &str = "+94 77 123 4567";
pub const CONTACT_PHONE_HREF: &str = "tel:+94771234567";
pub const LOCATION: &str = "Colombo, Sri Lanka";

/// In-page anchors shared by the nav bar and the footer.
pub const SECTION_LINKS: [(&str, &str); 5] = [
    ("About", "#about"),
    ("Services", "#services"),
    ("Projects", "#projects"),
    ("Process", "#process"),
    ("FAQ", "#faq"),
];

pub const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("GitHub", "https://github.com"),
    ("LinkedIn", "https://linkedin.com"),
    ("Twitter", "https://twitter.com"),
    ("Email", "mailto:contact@example.com"),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        icon: "</>",
        title: "Web Development",
        description: "Clean, modern and maintainable code that follows best practices and performs well on all devices.",
    },
    Service {
        icon: "🎨",
        title: "UI/UX Design",
        description: "Stunning interfaces that improve user experience and create delightful interactions.",
    },
    Service {
        icon: "📈",
        title: "Performance Optimization",
        description: "Lightning-fast load times and optimization for the best user experience and SEO results.",
    },
    Service {
        icon: "📱",
        title: "Responsive Design",
        description: "Websites that look and function perfectly across all devices and screen sizes.",
    },
    Service {
        icon: "⚡",
        title: "Integration Services",
        description: "Seamless connections with third-party APIs, CMS platforms, and other business tools.",
    },
    Service {
        icon: "📊",
        title: "Web Analytics",
        description: "Implementation of tracking and analytics to provide insights into user behavior.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Project {
    pub image: &'static str,
    pub title: &'static str,
    pub category: &'static str,
}

pub const ALL_CATEGORIES: &str = "all";
pub const PROJECT_CATEGORIES: [&str; 3] = [ALL_CATEGORIES, "Web Development", "UI/UX Design"];

pub const PROJECTS: [Project; 6] = [
    Project {
        image: "/assets/projects/ecommerce.png",
        title: "E-commerce Platform",
        category: "Web Development",
    },
    Project {
        image: "/assets/projects/agency.png",
        title: "Agency Portfolio",
        category: "UI/UX Design",
    },
    Project {
        image: "/assets/projects/analytics.png",
        title: "Analytics Dashboard",
        category: "Web Development",
    },
    Project {
        image: "/assets/projects/mobile.png",
        title: "Mobile App Interface",
        category: "UI/UX Design",
    },
    Project {
        image: "/assets/projects/booking.png",
        title: "Booking Platform",
        category: "Web Development",
    },
    Project {
        image: "/assets/projects/streaming.png",
        title: "Media Streaming Service",
        category: "UI/UX Design",
    },
];

/// Projects shown under `category`; `"all"` keeps everything.
pub fn filter_projects(projects: &[Project], category: &str) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| category == ALL_CATEGORIES || project.category == category)
        .copied()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProcessStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 5] = [
    ProcessStep {
        icon: "💬",
        title: "Discovery & Consultation",
        description: "I start by understanding your needs, goals, and vision through in-depth discussions to ensure we're aligned on project objectives.",
    },
    ProcessStep {
        icon: "</>",
        title: "Planning & Architecture",
        description: "Creating a detailed roadmap and technical architecture to guide the development process and ensure optimal results.",
    },
    ProcessStep {
        icon: "📱",
        title: "Design & Development",
        description: "Bringing your vision to life with clean, efficient code and beautiful design implementation across all devices and screen sizes.",
    },
    ProcessStep {
        icon: "⚡",
        title: "Testing & Optimization",
        description: "Comprehensive testing and performance optimization to ensure your website loads quickly and functions flawlessly.",
    },
    ProcessStep {
        icon: "📊",
        title: "Launch & Support",
        description: "Smooth deployment to your hosting environment and ongoing support to ensure your website continues to perform at its best.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 6] = [
    Faq {
        question: "What services do you offer exactly?",
        answer: "I offer a comprehensive range of web development services including front-end and full-stack development, responsive design, UI/UX implementation, performance optimization, and integration with various APIs and content management systems. I specialize in creating beautiful, functional websites with smooth animations and interactions.",
    },
    Faq {
        question: "How much does a project typically cost?",
        answer: "Project costs vary depending on complexity, features, and timeline requirements. I offer flexible pricing models including fixed-price quotes for well-defined projects and hourly rates for ongoing work. Each quote is customized based on your specific needs after a thorough consultation.",
    },
    Faq {
        question: "Which technologies do you specialize in?",
        answer: "I specialize in modern web technologies and pick the stack that best serves each project, from static marketing pages to full web applications with backend services and content management systems.",
    },
    Faq {
        question: "Do you work internationally?",
        answer: "Yes, I work with clients globally and have experience collaborating remotely across different time zones. I ensure clear communication through regular video calls, project management tools, and timely updates regardless of geographic location.",
    },
    Faq {
        question: "What is your typical project timeline?",
        answer: "Project timelines vary based on scope and complexity. Simple websites might take 2-4 weeks, while more complex applications can require 2-3 months or more. I always provide a detailed timeline during the proposal stage and keep you updated on progress throughout the project.",
    },
    Faq {
        question: "What are your payment terms?",
        answer: "I typically work with a 50% upfront deposit to begin work, with the remaining balance due upon project completion. For larger projects, I can arrange milestone-based payments. I accept payments via bank transfer and various online payment methods.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stat {
    pub target: u32,
    pub label: &'static str,
    pub suffix: Option<&'static str>,
    pub tone: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        target: 10,
        label: "Happy clients",
        suffix: Some("+"),
        tone: "blue",
    },
    Stat {
        target: 15,
        label: "Projects completed",
        suffix: Some("+"),
        tone: "purple",
    },
    Stat {
        target: 3,
        label: "Years experience",
        suffix: None,
        tone: "pink",
    },
    Stat {
        target: 100,
        label: "Passion",
        suffix: Some("%"),
        tone: "blue",
    },
];
