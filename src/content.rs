//! The static résumé content, separated from all layout logic. Every table
//! is literal, fixed at authoring time, and ordered exactly as it should
//! render. The types derive serde so tests can feed fixture data in from
//! JSON instead of editing this file.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub name: String,
    pub role: String,
    pub contact: String,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub period: String,
    pub location: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub program: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
}

fn s(text: &str) -> String {
    text.to_string()
}

/// the authored résumé
pub fn resume() -> Resume {
    Resume {
        name: s("Wendeel Marinho"),
        role: s("CTO / Product & Engineering Lead / Tech Lead"),
        contact: s("São Paulo, Brazil (Remote/Hybrid) | (11) 91124-2062 | wendeelmarinho@gmail.com | linkedin.com/in/wendeelm/"),
        summary: s(
            "10+ years building systems end-to-end (product, architecture, implementation, delivery). \
             Currently CTO at Scalegrid and Founder/Lead at RemédiosJÁ. Specializing in multi-tenant SaaS, \
             marketplaces, event-driven integrations, RBAC, tenant isolation, and engineering governance. \
             Proven track record architecting resilient platforms, leading teams, and establishing production-grade practices.",
        ),
        experience: vec![
            Experience {
                title: s("Scalegrid — Chief Technology Officer | Tech Lead / Senior Engineer"),
                period: s("Feb 2025 — Present"),
                location: s("São Paulo, Brazil (Remote)"),
                bullets: vec![
                    s("Built a modular, multi-tenant B2B management SaaS end-to-end as an add-on marketplace with plan-based module activation."),
                    s("Architected the platform core: tenant isolation, RBAC/permissions, audit trail, settings, and admin governance."),
                    s("Implemented an event-driven integrations layer (webhooks + connectors) to synchronize external systems."),
                    s("Delivered business-critical modules: Projects/Tasks/Bugs, CRM, Accounting, HRM, POS, Products & Services."),
                    s("Built real-time communication features (direct + group messaging) with attachment handling."),
                    s("Designed subscription & billing flows enabling modular monetization by plan tier."),
                    s("Established production-grade engineering practices: CI/CD, code review, structured logging, and observability."),
                ],
            },
            Experience {
                title: s("RemédiosJÁ — Founder & CTO"),
                period: s("Mar 2023 — Present"),
                location: s("São Paulo, Brazil (Remote)"),
                bullets: vec![
                    s("Architected and developed end-to-end pharmacy delivery marketplace: Laravel backend, Vue.js admin, Flutter mobile (iOS/Android)."),
                    s("Delivered 3 applications (Customer, Store, Courier) + admin panels: catalog, checkout, payments, delivery routing, refunds."),
                    s("Integrated payment gateways (Mercado Pago, Asaas), Firebase (Auth/FCM/Analytics), geolocation, zone pricing."),
                    s("Structured multi-zone operations (city/region) with availability rules, promotions, inventory governance."),
                    s("Built operations ecosystem: pharmacy onboarding, SLA, coupons/campaigns, push notifications, acquisition/retention metrics."),
                ],
            },
            Experience {
                title: s("Seara — Tech Lead"),
                period: s("Jun 2024 — Mar 2025"),
                location: s("São Paulo, Brazil (Hybrid)"),
                bullets: vec![
                    s("Led architecture and sustainability of digital ecosystem: seara.com.br (hub), Seara Gourmet, Seara Internacional."),
                    s("Developed fully custom WordPress (e-commerce + portals) without themes/plugins: proprietary architecture, reusable components."),
                    s("Optimized for performance: Core Web Vitals, multi-layer caching, payload reduction, technical SEO."),
                    s("Designed integrations via REST APIs with internal catalog, campaigns, and content services."),
                    s("Established engineering standards: code review, testing, documentation, team mentoring."),
                ],
            },
            Experience {
                title: s("Ambar — Tech Lead"),
                period: s("Apr 2025 — Oct 2025"),
                location: s("Hybrid (AUTODOC)"),
                bullets: vec![
                    s("Led technical leadership of strategic projects with PHP (Laravel) and Python."),
                    s("Coordinated development team: promoted best practices, code review, standardization, DevOps culture."),
                    s("Managed and implemented REST API integrations between platforms."),
                    s("Continuous improvements in legacy and new solutions with focus on quality and efficiency."),
                ],
            },
            Experience {
                title: s("WAY.AG — Senior Full Stack Developer"),
                period: s("Dec 2023 — Jan 2025"),
                location: s("São Paulo, Brazil (Hybrid)"),
                bullets: vec![
                    s("Backend: REST/GraphQL APIs, database optimization, microservices, scalable architecture."),
                    s("Frontend: responsive interfaces, API integration, performance optimization."),
                    s("AI/ML: machine learning models, predictive analysis, AI agents for automation."),
                    s("DevOps: cloud deployment (AWS/Azure/GCP), CI/CD pipelines, monitoring."),
                ],
            },
        ],
        skills: vec![
            SkillCategory {
                label: s("Backend & APIs"),
                description: s("PHP/Laravel, Python (FastAPI, Django), Node.js (Express, NestJS), REST/GraphQL APIs, Microservices"),
            },
            SkillCategory {
                label: s("Frontend & Mobile"),
                description: s("Vue.js, Flutter (iOS/Android), Angular, TypeScript, Responsive Design"),
            },
            SkillCategory {
                label: s("Cloud & DevOps"),
                description: s("AWS (EC2, S3, Lambda, RDS), Docker, Kubernetes, CI/CD, GitHub Actions, Observability"),
            },
            SkillCategory {
                label: s("Databases"),
                description: s("PostgreSQL, MySQL, MongoDB, Redis, Database optimization & modeling"),
            },
            SkillCategory {
                label: s("Data & AI"),
                description: s("Python data science, Machine learning pipelines, MLOps, Kafka, Real-time processing"),
            },
            SkillCategory {
                label: s("Integrations"),
                description: s("Payment gateways (Mercado Pago, Asaas), Firebase, Webhooks, Third-party APIs, ERP systems"),
            },
            SkillCategory {
                label: s("Architecture"),
                description: s("Domain-driven design (DDD), SOLID principles, Multi-tenant isolation, RBAC, Audit trails"),
            },
        ],
        education: vec![
            EducationEntry {
                school: s("UniNorte (Centro Universitário do Norte)"),
                program: s("Analysis and Systems Development"),
                period: s("2018"),
            },
            EducationEntry {
                school: s("FIAP"),
                program: s("Postgraduate in AI Engineering / MLOps"),
                period: s("Nov 2025 – Dec 2026"),
            },
            EducationEntry {
                school: s("Alura"),
                program: s("Data Science"),
                period: s("2024-2025"),
            },
            EducationEntry {
                school: s("Data Science Academy"),
                program: s("Python for Data Science 4.0"),
                period: s("2024-2025"),
            },
            EducationEntry {
                school: s("Alura"),
                program: s("Java with Spring Boot 3"),
                period: s("2025"),
            },
            EducationEntry {
                school: s("Alura"),
                program: s("Angular: Front-End with TypeScript"),
                period: s("2025"),
            },
            EducationEntry {
                school: s("Alura"),
                program: s("Software Architecture with Node.js"),
                period: s("2024"),
            },
            EducationEntry {
                school: s("Udemy"),
                program: s("Complete Docker and Kubernetes"),
                period: s("2024"),
            },
            EducationEntry {
                school: s("Udemy"),
                program: s("Apache Kafka: Messaging for Distributed Systems"),
                period: s("2025"),
            },
            EducationEntry {
                school: s("Coursera / DeepLearning.ai"),
                program: s("Machine Learning for Developers (Andrew Ng)"),
                period: s("2024"),
            },
            EducationEntry {
                school: s("AWS"),
                program: s("AWS Cloud Practitioner Essentials"),
                period: s("2024"),
            },
        ],
        projects: vec![
            Project {
                name: s("Scalegrid"),
                description: s("Multi-tenant SaaS with modular architecture, RBAC, integrations, and subscription management."),
            },
            Project {
                name: s("RemédiosJÁ"),
                description: s("Pharmacy delivery marketplace with 3-app ecosystem, payments, and multi-zone operations."),
            },
            Project {
                name: s("Seara Digital Ecosystem"),
                description: s("Custom WordPress e-commerce and portal ecosystem across multiple properties."),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authored_tables_have_expected_shape() {
        let resume = resume();

        assert_eq!(resume.experience.len(), 5);
        assert_eq!(resume.skills.len(), 7);
        assert_eq!(resume.education.len(), 11);
        assert_eq!(resume.projects.len(), 3);
        assert!(resume.experience.iter().all(|e| !e.bullets.is_empty()));
    }

    #[test]
    fn content_round_trips_through_serde() {
        let resume = resume();
        let json = serde_json::to_string(&resume).unwrap();
        let back: Resume = serde_json::from_str(&json).unwrap();

        assert_eq!(back.name, resume.name);
        assert_eq!(back.experience.len(), resume.experience.len());
        assert_eq!(back.experience[0].bullets, resume.experience[0].bullets);
    }
}
