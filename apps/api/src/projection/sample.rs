//! Built-in demo document. Served whenever a share link is absent or cannot
//! be decoded, and by the editor's "load demo data" action.

use crate::models::document::{
    EditableDocument, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, SkillEntry,
};

const SAMPLE_SKILLS: &[&str] = &[
    "Rust",
    "TypeScript",
    "PostgreSQL",
    "Tokio",
    "Axum",
    "Docker",
    "Kubernetes",
    "gRPC",
    "Prometheus",
    "Git",
];

pub fn sample_document() -> EditableDocument {
    EditableDocument {
        personal: PersonalInfo {
            name: "Jordan Rivera".to_string(),
            email: "jordan.rivera@example.com".to_string(),
            phone: "+1 555 010 2030".to_string(),
            location: "Portland, OR".to_string(),
            website: "github.com/jrivera".to_string(),
        },
        summary: "Backend engineer with five years of experience building low-latency \
            services in Rust and TypeScript. Focused on reliability, observability and \
            developer tooling for small platform teams."
            .to_string(),
        experience: vec![ExperienceEntry {
            id: "exp1".to_string(),
            title: "Software Engineer".to_string(),
            company: "Northwind Logistics".to_string(),
            dates: "Mar 2021 - Present".to_string(),
            description: "• Rebuilt the shipment tracking API in Rust, cutting p99 latency from 420ms to 60ms.\n\
                • Introduced structured tracing across 14 services, halving mean time to resolution.\n\
                • Mentored three junior engineers through their first on-call rotations."
                .to_string(),
        }],
        education: vec![EducationEntry {
            id: "edu1".to_string(),
            school: "Oregon State University".to_string(),
            degree: "B.S. in Computer Science".to_string(),
            dates: "2016 - 2020".to_string(),
        }],
        skills: SAMPLE_SKILLS
            .iter()
            .enumerate()
            .map(|(index, name)| SkillEntry {
                id: format!("skill{}", index + 1),
                name: name.to_string(),
            })
            .collect(),
        projects: vec![
            ProjectEntry {
                id: "proj1".to_string(),
                name: "ledgerline".to_string(),
                description: "Append-only event ledger with a write-ahead log and snapshotting, \
                    sustaining 80k writes/s on a single node."
                    .to_string(),
            },
            ProjectEntry {
                id: "proj2".to_string(),
                name: "tidepool".to_string(),
                description: "Connection pool for PostgreSQL with health checking and \
                    per-tenant quotas, used in production by two startups."
                    .to_string(),
            },
            ProjectEntry {
                id: "proj3".to_string(),
                name: "trailhead".to_string(),
                description: "CLI that scaffolds Axum services with tracing, config and CI \
                    wired in."
                    .to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_document_is_populated() {
        let doc = sample_document();
        assert!(!doc.personal.name.is_empty());
        assert!(!doc.personal.website.is_empty());
        assert_eq!(doc.experience.len(), 1);
        assert_eq!(doc.education.len(), 1);
        assert_eq!(doc.skills.len(), SAMPLE_SKILLS.len());
        assert_eq!(doc.projects.len(), 3);
    }

    #[test]
    fn test_sample_skill_ids_are_sequential() {
        let doc = sample_document();
        assert_eq!(doc.skills[0].id, "skill1");
        assert_eq!(doc.skills[9].id, "skill10");
    }
}
