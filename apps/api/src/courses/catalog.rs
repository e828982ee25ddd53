//! Skill India course catalog.
//!
//! Built once at startup and handed to [`CourseMatcher`](super::matcher::CourseMatcher).
//! Nothing in this module is consulted directly by the ranking code.

use serde::{Deserialize, Serialize};

pub const SKILL_INDIA_COURSES_URL: &str = "https://www.skillindiadigital.gov.in/courses";

/// Sector labels used by the generic fallback list.
pub const GENERIC_SECTORS: &[&str] = &[
    "Information Technology",
    "Business & Finance",
    "Administrative",
];

/// A single training course. Serialized field names are part of the public API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub title: String,
    pub url: String,
    pub description: String,
    pub sector: String,
    pub duration: String,
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification: Option<String>,
}

impl CourseRecord {
    pub fn new(
        title: &str,
        description: &str,
        sector: &str,
        duration: &str,
        level: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            url: SKILL_INDIA_COURSES_URL.to_string(),
            description: description.to_string(),
            sector: sector.to_string(),
            duration: duration.to_string(),
            level: level.to_string(),
            provider: None,
            certification: None,
        }
    }
}

/// NSDC-provided, government-certified course. Every built-in row is one of these.
fn nsdc(title: &str, description: &str, sector: &str, duration: &str, level: &str) -> CourseRecord {
    CourseRecord {
        provider: Some("NSDC".to_string()),
        certification: Some("Government Certified".to_string()),
        ..CourseRecord::new(title, description, sector, duration, level)
    }
}

/// The built-in catalog, in its canonical order. Order matters: it is the
/// ranking tie-break and the order of the generic fallback list.
pub fn skill_india_courses() -> Vec<CourseRecord> {
    vec![
        nsdc(
            "Python Programming Fundamentals",
            "Comprehensive Python programming course covering fundamentals to advanced concepts for software development and data science",
            "Information Technology",
            "Self-paced (3-4 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Computer Application Certificate",
            "Complete computer application training covering MS Office, basic programming, and computer fundamentals",
            "Information Technology",
            "Self-paced (2-3 months)",
            "Beginner",
        ),
        nsdc(
            "Advanced Excel and Data Analysis",
            "Advanced Excel skills including data analysis, pivot tables, macros, and VBA programming for business applications",
            "Business & Finance",
            "Self-paced (1-2 months)",
            "Intermediate",
        ),
        nsdc(
            "Financial Accounting and Tally",
            "Comprehensive financial accounting course covering principles, practices, and Tally Prime software",
            "Finance & Accounting",
            "Self-paced (4-6 months)",
            "Intermediate",
        ),
        nsdc(
            "Digital Marketing Essentials",
            "Complete digital marketing course covering SEO, social media, content marketing, and analytics",
            "Marketing & Communications",
            "Self-paced (3-4 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Data Entry and Office Management",
            "Professional data entry training with accuracy, speed, and efficiency techniques for various industries",
            "Administrative",
            "Self-paced (1-2 months)",
            "Beginner",
        ),
        nsdc(
            "Web Development with HTML, CSS & JavaScript",
            "Complete web development course covering front-end technologies and responsive design",
            "Information Technology",
            "Self-paced (4-5 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Mobile App Development",
            "Learn mobile app development using modern frameworks and tools for Android and iOS platforms",
            "Information Technology",
            "Self-paced (5-6 months)",
            "Intermediate to Advanced",
        ),
        nsdc(
            "Cybersecurity Fundamentals",
            "Essential cybersecurity concepts, threat analysis, and security implementation strategies",
            "Information Technology",
            "Self-paced (3-4 months)",
            "Intermediate",
        ),
        nsdc(
            "Cloud Computing and AWS",
            "Comprehensive cloud computing course covering AWS services, deployment, and management",
            "Information Technology",
            "Self-paced (4-5 months)",
            "Intermediate to Advanced",
        ),
        nsdc(
            "Machine Learning and AI Basics",
            "Introduction to machine learning concepts, algorithms, and practical applications using Python",
            "Information Technology",
            "Self-paced (5-6 months)",
            "Intermediate to Advanced",
        ),
        nsdc(
            "Data Science and Analytics",
            "Complete data science course covering data analysis, visualization, and statistical modeling",
            "Information Technology",
            "Self-paced (6-7 months)",
            "Intermediate to Advanced",
        ),
        nsdc(
            "Graphic Design and Multimedia",
            "Professional graphic design course covering Adobe Creative Suite and multimedia production",
            "Creative & Design",
            "Self-paced (3-4 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "E-commerce and Online Business",
            "Complete e-commerce course covering online business setup, digital marketing, and platform management",
            "Business & Finance",
            "Self-paced (2-3 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Project Management Professional",
            "Professional project management course covering PMP methodologies, tools, and best practices",
            "Management",
            "Self-paced (4-5 months)",
            "Intermediate to Advanced",
        ),
        nsdc(
            "Healthcare Assistant Training",
            "Comprehensive healthcare assistant training covering patient care, medical terminology, and safety protocols",
            "Healthcare",
            "Self-paced (3-4 months)",
            "Beginner",
        ),
        nsdc(
            "Automotive Service Technician",
            "Professional automotive service training covering vehicle maintenance, repair, and diagnostics",
            "Automotive",
            "Self-paced (6-8 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Retail Sales and Customer Service",
            "Complete retail training covering sales techniques, customer service, and inventory management",
            "Retail & Sales",
            "Self-paced (1-2 months)",
            "Beginner",
        ),
        nsdc(
            "Hospitality and Hotel Management",
            "Professional hospitality training covering hotel operations, guest services, and management",
            "Hospitality",
            "Self-paced (4-5 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Construction and Civil Engineering",
            "Comprehensive construction training covering civil engineering basics, safety protocols, and project management",
            "Construction",
            "Self-paced (6-8 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Agriculture and Farming Technology",
            "Modern agriculture training covering farming techniques, technology integration, and sustainable practices",
            "Agriculture",
            "Self-paced (3-4 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Social Media Marketing and Management",
            "Complete social media marketing course covering platform management, content creation, and analytics",
            "Marketing & Communications",
            "Self-paced (2-3 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Content Writing and Copywriting",
            "Professional content writing course covering copywriting, SEO content, and digital marketing content",
            "Marketing & Communications",
            "Self-paced (2-3 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Human Resources Management",
            "Comprehensive HR management course covering recruitment, employee relations, and HR policies",
            "Management",
            "Self-paced (4-5 months)",
            "Intermediate",
        ),
        nsdc(
            "Supply Chain and Logistics Management",
            "Complete supply chain management course covering logistics, inventory management, and operations",
            "Management",
            "Self-paced (3-4 months)",
            "Intermediate",
        ),
        nsdc(
            "Quality Assurance and Testing",
            "Software testing and quality assurance course covering manual and automated testing techniques",
            "Information Technology",
            "Self-paced (3-4 months)",
            "Intermediate",
        ),
        nsdc(
            "Database Administration and SQL",
            "Database management course covering SQL, database design, and administration",
            "Information Technology",
            "Self-paced (3-4 months)",
            "Intermediate",
        ),
        nsdc(
            "Network Administration and Security",
            "Network management course covering network setup, security protocols, and troubleshooting",
            "Information Technology",
            "Self-paced (4-5 months)",
            "Intermediate to Advanced",
        ),
        nsdc(
            "UI/UX Design Fundamentals",
            "User interface and experience design course covering design principles, prototyping, and user research",
            "Creative & Design",
            "Self-paced (3-4 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Video Production and Editing",
            "Professional video production course covering filming, editing, and post-production techniques",
            "Creative & Design",
            "Self-paced (4-5 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Photography and Image Editing",
            "Digital photography course covering camera techniques, composition, and photo editing",
            "Creative & Design",
            "Self-paced (2-3 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Event Management and Planning",
            "Complete event management course covering planning, coordination, and execution of events",
            "Management",
            "Self-paced (3-4 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Customer Service Excellence",
            "Professional customer service training covering communication skills, problem-solving, and service delivery",
            "Retail & Sales",
            "Self-paced (1-2 months)",
            "Beginner",
        ),
        nsdc(
            "Inventory Management and Stock Control",
            "Inventory management course covering stock control, warehouse operations, and supply chain basics",
            "Retail & Sales",
            "Self-paced (2-3 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Food Safety and Hygiene Management",
            "Food safety course covering hygiene standards, food handling, and safety regulations",
            "Hospitality",
            "Self-paced (1-2 months)",
            "Beginner",
        ),
        nsdc(
            "Housekeeping and Facility Management",
            "Professional housekeeping course covering facility management, cleaning techniques, and maintenance",
            "Hospitality",
            "Self-paced (2-3 months)",
            "Beginner",
        ),
        nsdc(
            "Welding and Fabrication Technology",
            "Professional welding course covering various welding techniques, safety protocols, and fabrication",
            "Construction",
            "Self-paced (4-6 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Electrical Installation and Maintenance",
            "Electrical work course covering installation, maintenance, and safety in electrical systems",
            "Construction",
            "Self-paced (5-6 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Dairy Farming and Milk Processing",
            "Dairy farming course covering milk production, processing techniques, and farm management",
            "Agriculture",
            "Self-paced (3-4 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Organic Farming and Sustainable Agriculture",
            "Organic farming course covering sustainable practices, soil management, and organic certification",
            "Agriculture",
            "Self-paced (4-5 months)",
            "Intermediate",
        ),
        nsdc(
            "Pharmacy Assistant Training",
            "Pharmacy assistant course covering medication management, customer service, and pharmaceutical basics",
            "Healthcare",
            "Self-paced (3-4 months)",
            "Beginner",
        ),
        nsdc(
            "Medical Laboratory Technician",
            "Medical lab technician course covering sample collection, testing procedures, and equipment operation",
            "Healthcare",
            "Self-paced (6-8 months)",
            "Intermediate",
        ),
        nsdc(
            "Beauty and Wellness Therapy",
            "Beauty therapy course covering skincare, makeup, hair care, and wellness treatments",
            "Healthcare",
            "Self-paced (4-5 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Automotive Electrician",
            "Automotive electrical systems course covering vehicle electronics, diagnostics, and repair",
            "Automotive",
            "Self-paced (4-5 months)",
            "Intermediate",
        ),
        nsdc(
            "Two-Wheeler Service and Repair",
            "Motorcycle and scooter repair course covering engine maintenance, electrical systems, and troubleshooting",
            "Automotive",
            "Self-paced (3-4 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Fashion Design and Garment Construction",
            "Fashion design course covering pattern making, garment construction, and fashion trends",
            "Creative & Design",
            "Self-paced (6-8 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Interior Design and Space Planning",
            "Interior design course covering space planning, color theory, and design software",
            "Creative & Design",
            "Self-paced (4-5 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Jewelry Design and Manufacturing",
            "Jewelry design course covering design principles, manufacturing techniques, and gemology basics",
            "Creative & Design",
            "Self-paced (5-6 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Banking and Financial Services",
            "Banking course covering financial services, customer relations, and banking operations",
            "Finance & Accounting",
            "Self-paced (3-4 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Insurance and Risk Management",
            "Insurance course covering risk assessment, policy management, and claims processing",
            "Finance & Accounting",
            "Self-paced (3-4 months)",
            "Intermediate",
        ),
        nsdc(
            "Real Estate and Property Management",
            "Real estate course covering property management, sales techniques, and legal aspects",
            "Business & Finance",
            "Self-paced (3-4 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Travel and Tourism Management",
            "Tourism course covering travel planning, customer service, and destination management",
            "Hospitality",
            "Self-paced (3-4 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Sports and Fitness Training",
            "Fitness training course covering exercise science, training methods, and sports nutrition",
            "Healthcare",
            "Self-paced (4-5 months)",
            "Beginner to Intermediate",
        ),
        nsdc(
            "Language and Communication Skills",
            "Communication skills course covering English language, public speaking, and professional communication",
            "Administrative",
            "Self-paced (2-3 months)",
            "Beginner",
        ),
        nsdc(
            "Office Administration and Management",
            "Office management course covering administrative tasks, record keeping, and office operations",
            "Administrative",
            "Self-paced (2-3 months)",
            "Beginner to Intermediate",
        ),
    ]
}
