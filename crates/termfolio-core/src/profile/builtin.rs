//! The portfolio shipped with the binary.

use chrono::NaiveDate;

use super::ProfileData;
use super::model::{
    ExperienceEntry, ExperienceStatus, LocalizedText, Profile, Project, Skill, SkillGroup,
};

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

fn project(name: &str, url: &str, tech: &str, description: &str) -> Project {
    Project {
        name: name.to_string(),
        url: url.to_string(),
        tech: tech.to_string(),
        description: description.to_string(),
    }
}

pub(super) fn data() -> ProfileData {
    let profile = Profile {
        name: "Fabián Muñoz V.".to_string(),
        role: "Site Reliability Engineer".to_string(),
        company: "Banco Falabella".to_string(),
        location: "Santiago, Chile".to_string(),
        email: "fabianignaciomv@gmail.com".to_string(),
        linkedin: "https://linkedin.com/in/fabianimv".to_string(),
        github: "https://github.com/FabianIMV".to_string(),
        bio: LocalizedText::new(
            "3+ years building high-availability observable systems. Specialized in Golden \
             Signals, SLI/SLO, incident correlation and automation.",
            "3+ años construyendo sistemas observables de alta disponibilidad. Especializado en \
             Golden Signals, SLI/SLO, correlación de incidentes y automatización.",
        ),
        career_start: NaiveDate::from_ymd_opt(2022, 11, 1).unwrap_or_default(),
    };

    let experience = vec![
        ExperienceEntry {
            version: "v3.0.0".to_string(),
            status: ExperienceStatus::Active,
            company: "Banco Falabella".to_string(),
            role: "Site Reliability Engineer".to_string(),
            period: "Oct 2025 - Present".to_string(),
            namespace: "banking".to_string(),
            description: LocalizedText::new(
                "SRE for digital banking infrastructure. Kafka monitoring, Golden Signals, 24/7 \
                 incident response.",
                "SRE para infraestructura de banca digital. Kafka monitoring, Golden Signals, \
                 respuesta a incidentes 24/7.",
            ),
            tags: tags(&[
                "Kubernetes",
                "Datadog",
                "Grafana",
                "Prometheus",
                "Terraform",
                "Kafka",
                "Splunk",
                "Nagios",
                "AppDynamics",
            ]),
        },
        ExperienceEntry {
            version: "v2.x".to_string(),
            status: ExperienceStatus::Stable,
            company: "Innfinit SpA".to_string(),
            role: "SRE Consultant".to_string(),
            period: "Nov 2022 - Oct 2025".to_string(),
            namespace: "consulting".to_string(),
            description: LocalizedText::new(
                "SRE consulting for large insurance client. Multi-region observability platforms.",
                "Consultoría SRE para cliente gran aseguradora. Plataformas de observabilidad \
                 multi-región.",
            ),
            tags: tags(&["AWS", "Grafana", "Prometheus", "Terraform"]),
        },
        ExperienceEntry {
            version: "v1.x".to_string(),
            status: ExperienceStatus::Legacy,
            company: "Recomin SM".to_string(),
            role: "Technical Support".to_string(),
            period: "Jul 2022 - Nov 2022".to_string(),
            namespace: "startup".to_string(),
            description: LocalizedText::new(
                "Initial fullstack development. Solid foundation in web development.",
                "Desarrollo fullstack inicial. Base sólida en desarrollo web.",
            ),
            tags: tags(&["Technical Support", "Excel", "Windows"]),
        },
    ];

    let skills = vec![
        SkillGroup {
            key: "observability".to_string(),
            title: LocalizedText::new("Observability", "Observabilidad"),
            skills: vec![
                Skill::new("Datadog", 95),
                Skill::new("Grafana", 90),
                Skill::new("Prometheus", 88),
                Skill::new("ELK Stack", 82),
                Skill::new("Splunk", 75),
            ],
        },
        SkillGroup {
            key: "cloud".to_string(),
            title: LocalizedText::new("Cloud & Infrastructure", "Cloud e Infraestructura"),
            skills: vec![
                Skill::new("AWS", 92),
                Skill::new("Kubernetes", 90),
                Skill::new("Terraform", 85),
                Skill::new("Docker", 80),
            ],
        },
        SkillGroup {
            key: "development".to_string(),
            title: LocalizedText::new("Development", "Desarrollo"),
            skills: vec![
                Skill::new("Python", 90),
                Skill::new("JavaScript", 85),
                Skill::new("Bash", 80),
                Skill::new("Go", 65),
            ],
        },
    ];

    let projects = vec![
        project("True Q", "https://trueq-vercel.vercel.app/", "ML, React", "ML-powered quiz application"),
        project(
            "Chile Dashboard",
            "https://fabianignaciomv.grafana.net/dashboard/snapshot/3d7TxzqNkU9CLAoX0fQPGjXE1t3f17dT",
            "Grafana, APIs",
            "Real-time Chile economic indicators",
        ),
        project(
            "Gemini Checker",
            "https://fabianimv.github.io/gemini-models-health-checker/",
            "API Monitor",
            "Gemini AI models health checker",
        ),
        project("Ferremas", "https://ferremas.vercel.app/", "E-commerce", "Hardware store e-commerce"),
        project(
            "Kafka Lab",
            "https://github.com/FabianIMV/kafka-home-lab",
            "Infrastructure",
            "Kafka home lab setup",
        ),
        project(
            "Learn Piano",
            "https://fabianimv.github.io/learn-piano/",
            "Claude AI",
            "AI-powered piano learning",
        ),
    ];

    let certifications = tags(&[
        "AWS Certified Cloud Practitioner",
        "Microsoft Azure AI Fundamentals",
        "DevOps Essentials Professional Certificate",
    ]);

    ProfileData { profile, experience, skills, projects, certifications }
}
