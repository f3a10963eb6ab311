//! Static page content.
//!
//! DESIGN
//! ======
//! Every table is a `&'static` slice of plain records with no behavior.
//! Sections iterate them in declared order, so reordering a table reorders
//! the page (including reveal stagger order).


/// Inline glyphs available to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconRef {
    Code2,
    Terminal,
    Zap,
    Github,
    Linkedin,
    Mail,
    ChevronDown,
    Menu,
    Close,
    ArrowUpRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatEntry {
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EducationStatus {
    Completed,
    Soon,
}

impl EducationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Soon => "Soon",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EducationEntry {
    pub year: &'static str,
    pub school: &'static str,
    pub status: EducationStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub icon: IconRef,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

pub const OWNER_FIRST_NAME: &str = "Muhammad Raffli";
pub const OWNER_SURNAME: &str = "Aldiansyah";
pub const COPYRIGHT_YEAR: u16 = 2026;

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Skills", href: "#skills" },
    NavLink { name: "Projects", href: "#projects" },
    NavLink { name: "Contact", href: "#contact" },
];

pub const STATS: &[StatEntry] = &[
    StatEntry { number: "80+", label: "Projects Delivered" },
    StatEntry { number: "3+", label: "Years of Experience" },
    StatEntry { number: "5+", label: "Tech Stacks" },
    StatEntry { number: "24/7", label: "Automation Uptime" },
];

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry { year: "2014 - 2020", school: "SDN 04 Pontianak Timur", status: EducationStatus::Completed },
    EducationEntry { year: "2020 - 2023", school: "SMPN 26 Pontianak Timur", status: EducationStatus::Completed },
    EducationEntry { year: "2023 - 2026", school: "SMKN 7 Pontianak Timur", status: EducationStatus::Completed },
    EducationEntry { year: "2026 - ????", school: "University", status: EducationStatus::Soon },
];

pub const HOBBIES: &[&str] = &["Gaming", "Coding", "Security"];

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Languages",
        icon: IconRef::Code2,
        items: &["Python", "JavaScript", "TypeScript", "HTML/CSS"],
    },
    SkillGroup {
        category: "Runtime & Frameworks",
        icon: IconRef::Terminal,
        items: &["Node.js", "Express.js", "Flask", "FastAPI"],
    },
    SkillGroup {
        category: "Automation",
        icon: IconRef::Zap,
        items: &["Selenium", "Puppeteer", "Playwright", "Scrapy"],
    },
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Zoom Auto Payment",
        description: "Enterprise-grade payment automation system with intelligent retry logic, real-time notifications, and comprehensive transaction logging.",
        tech: &["Python", "Selenium", "REST API"],
    },
    ProjectEntry {
        title: "Spotify Auto Register",
        description: "Scalable registration automation engine featuring smart proxy rotation, CAPTCHA solving integration, and rate limit handling.",
        tech: &["Node.js", "Puppeteer", "Proxy Pool"],
    },
    ProjectEntry {
        title: "QRIS Payment Gateway",
        description: "Full-stack QRIS payment solution with real-time webhook callbacks, transaction reconciliation, and merchant dashboard.",
        tech: &["Node.js", "Express", "PostgreSQL"],
    },
    ProjectEntry {
        title: "Edu Domain Validator",
        description: "High-throughput email verification system with concurrent processing, detailed analytics, and export capabilities.",
        tech: &["Python", "AsyncIO", "Threading"],
    },
    ProjectEntry {
        title: "Intelligent Web Scraper",
        description: "Production-ready scraping framework with anti-detection measures, distributed architecture, and structured data pipelines.",
        tech: &["Python", "Scrapy", "MongoDB"],
    },
];
