//! Catalog used when no `CATALOG_PATH` is configured.

use super::models::{Collaborator, Mentor, Pillar, PillarCriterion, ReferenceCatalog};

fn criterion(pillar_id: &str, criteria_id: &str, name: &str, description: &str) -> PillarCriterion {
    PillarCriterion {
        pillar_id: pillar_id.to_string(),
        criteria_id: criteria_id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn collaborator(id: &str, name: &str) -> Collaborator {
    Collaborator {
        collaborator_id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn default_catalog() -> ReferenceCatalog {
    ReferenceCatalog {
        pillars: vec![
            Pillar {
                pillar_id: "12".to_string(),
                title: "Gestão e Liderança".to_string(),
                criteria: vec![
                    criterion(
                        "12",
                        "gente",
                        "Gente",
                        "Desenvolve, motiva e orienta pessoas para alcançar seu potencial",
                    ),
                    criterion(
                        "12",
                        "criativa",
                        "Mente criativa",
                        "Busca soluções inovadoras e criativas para problemas",
                    ),
                ],
            },
            Pillar {
                pillar_id: "13".to_string(),
                title: "Sentimento de dono".to_string(),
                criteria: vec![
                    criterion("13", "pensamento", "Pensamento empreendedor", "Gosta de negócios"),
                    criterion(
                        "13",
                        "crescimento",
                        "Crescimento da empresa",
                        "Busca crescimento e desenvolvimento da empresa",
                    ),
                ],
            },
        ],
        collaborators: vec![
            collaborator("colab-001", "Colaborador 1"),
            collaborator("colab-002", "Colaborador Lorenzo"),
            collaborator("colab-003", "Colaborador 3"),
            collaborator("colab-004", "Colaborador 4"),
            collaborator("colab-005", "Colaborador 5"),
        ],
        mentor: Mentor {
            name: "Miguel Barbosa".to_string(),
        },
    }
}
