//! Built-in demo data: three attendants, each with a four-stage sales board.

use crate::model::{Attendant, Column, Conversation, Palette, Permissions, Role, Tag, TagColor};
use crate::services::provider::BoardProvider;

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

#[derive(Debug, Clone, Copy, Default)]
pub struct SeedProvider;

fn avatar(seed: &str) -> String {
    format!("{AVATAR_BASE}{seed}")
}

fn tag(id: &str, name: &str, color: Palette) -> Tag {
    Tag { id: id.into(), name: name.into(), color: TagColor::Named(color) }
}

fn novo() -> Tag {
    tag("tag-1", "Novo", Palette::Green)
}
fn urgente() -> Tag {
    tag("tag-2", "Urgente", Palette::Red)
}
fn reagendamento() -> Tag {
    tag("tag-3", "Reagendamento", Palette::Blue)
}
fn feedback() -> Tag {
    tag("tag-4", "Feedback", Palette::Blue)
}
fn importante() -> Tag {
    tag("tag-5", "Importante", Palette::Orange)
}
fn documentacao() -> Tag {
    tag("tag-6", "Documentação", Palette::Blue)
}
fn em_analise() -> Tag {
    tag("tag-7", "Em análise", Palette::Green)
}
fn proposta() -> Tag {
    tag("tag-8", "Proposta", Palette::Orange)
}
fn negociacao() -> Tag {
    tag("tag-9", "Negociação", Palette::Yellow)
}
fn concluido() -> Tag {
    tag("tag-10", "Concluído", Palette::Green)
}
fn em_revisao() -> Tag {
    tag("tag-11", "Em revisão", Palette::Blue)
}

fn conv(id: &str, name: &str, seed: &str, message: &str, timestamp: &str, tags: Vec<Tag>, unread: u32) -> Conversation {
    Conversation {
        id: id.into(),
        contact_name: name.into(),
        contact_avatar: avatar(seed),
        last_message: message.into(),
        timestamp: timestamp.into(),
        tags,
        unread_count: unread,
    }
}

fn attendant(id: &str, name: &str, email: &str, seed: &str, active: bool) -> Attendant {
    Attendant {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        avatar: avatar(seed),
        active,
        role: Role::Attendant,
        permissions: Permissions::default(),
    }
}

/// The four pipeline stages every demo board starts with.
fn stages(demo: Vec<Conversation>, scope: Vec<Conversation>, proposal: Vec<Conversation>, contract: Vec<Conversation>) -> Vec<Column> {
    vec![
        Column { id: "column-1".into(), title: "Demonstração".into(), conversations: demo },
        Column { id: "column-2".into(), title: "Levantamento de escopo".into(), conversations: scope },
        Column { id: "column-3".into(), title: "Proposta".into(), conversations: proposal },
        Column { id: "column-4".into(), title: "Contrato".into(), conversations: contract },
    ]
}

fn carlos_board() -> Vec<Column> {
    stages(
        vec![
            conv("conv-1", "João Silva", "Joao", "Olá, gostaria de agendar uma demonstração do produto.", "10:30", vec![novo()], 3),
            conv(
                "conv-2",
                "Maria Oliveira",
                "Maria",
                "Podemos remarcar a demonstração para amanhã?",
                "09:15",
                vec![urgente(), reagendamento()],
                0,
            ),
            conv("conv-3", "Carlos Santos", "Carlos", "A demonstração foi excelente, obrigado!", "Ontem", vec![feedback()], 0),
        ],
        vec![
            conv(
                "conv-5",
                "Roberto Almeida",
                "Roberto",
                "Precisamos definir melhor os requisitos do projeto.",
                "11:45",
                vec![importante()],
                2,
            ),
            conv(
                "conv-6",
                "Fernanda Lima",
                "Fernanda",
                "Enviei os documentos para análise do escopo.",
                "Ontem",
                vec![documentacao()],
                0,
            ),
        ],
        vec![conv(
            "conv-8",
            "Juliana Costa",
            "Juliana",
            "Recebemos a proposta e estamos analisando.",
            "14:20",
            vec![em_analise(), proposta()],
            1,
        )],
        vec![conv(
            "conv-11",
            "Eduardo Martins",
            "Eduardo",
            "O contrato foi assinado e enviado para vocês.",
            "15:30",
            vec![concluido()],
            0,
        )],
    )
}

fn maria_board() -> Vec<Column> {
    stages(
        vec![
            conv(
                "conv-13",
                "Pedro Mendes",
                "Pedro",
                "Gostaria de saber mais sobre os recursos do sistema.",
                "11:20",
                vec![novo()],
                5,
            ),
            conv(
                "conv-14",
                "Luciana Ferreira",
                "Luciana",
                "A demonstração foi muito esclarecedora, obrigada!",
                "Ontem",
                vec![feedback()],
                0,
            ),
        ],
        vec![conv(
            "conv-15",
            "Gabriel Moreira",
            "Gabriel",
            "Estamos preparando o documento com os requisitos.",
            "13:45",
            vec![documentacao()],
            0,
        )],
        vec![
            conv("conv-16", "Amanda Vieira", "Amanda", "Precisamos revisar os valores da proposta.", "10:15", vec![negociacao()], 2),
            conv(
                "conv-17",
                "Rodrigo Campos",
                "Rodrigo",
                "A proposta está de acordo com nossas expectativas.",
                "Ontem",
                vec![em_analise()],
                0,
            ),
        ],
        vec![conv("conv-18", "Beatriz Lopes", "Beatriz", "Nosso jurídico está analisando o contrato.", "14:50", vec![em_revisao()], 3)],
    )
}

fn joao_board() -> Vec<Column> {
    stages(
        vec![conv(
            "conv-19",
            "Thiago Ribeiro",
            "Thiago",
            "Podemos agendar uma demonstração para a próxima semana?",
            "09:30",
            vec![reagendamento()],
            0,
        )],
        vec![
            conv(
                "conv-20",
                "Carolina Nunes",
                "Carolina",
                "Precisamos incluir mais um módulo no escopo.",
                "12:10",
                vec![importante()],
                4,
            ),
            conv(
                "conv-21",
                "Felipe Barros",
                "Felipe",
                "O escopo está muito amplo, precisamos focar mais.",
                "Ontem",
                vec![importante()],
                1,
            ),
        ],
        vec![conv(
            "conv-22",
            "Mariana Costa",
            "Mariana",
            "Estamos considerando a proposta, mas temos algumas dúvidas.",
            "15:40",
            vec![em_analise()],
            0,
        )],
        vec![
            conv("conv-23", "Leonardo Alves", "Leonardo", "Contrato assinado e enviado por e-mail.", "Segunda", vec![concluido()], 0),
            conv(
                "conv-24",
                "Isabela Martins",
                "Isabela",
                "Precisamos de uma cópia física do contrato também.",
                "Hoje",
                vec![urgente()],
                2,
            ),
        ],
    )
}

impl BoardProvider for SeedProvider {
    fn attendants(&self) -> Vec<Attendant> {
        vec![
            attendant("att-1", "Carlos Silva", "carlos@example.com", "Carlos", true),
            attendant("att-2", "Maria Santos", "maria@example.com", "Maria", true),
            attendant("att-3", "João Oliveira", "joao@example.com", "Joao", false),
        ]
    }

    fn board(&self, attendant_id: &str) -> Option<Vec<Column>> {
        match attendant_id {
            "att-1" => Some(carlos_board()),
            "att-2" => Some(maria_board()),
            "att-3" => Some(joao_board()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::model::is_valid_email;

    #[test]
    fn every_attendant_has_a_four_stage_board() {
        let provider = SeedProvider;
        for attendant in provider.attendants() {
            let board = provider.board(&attendant.id).expect("seed board should exist");
            let titles: Vec<&str> = board.iter().map(|c| c.title.as_str()).collect();
            assert_eq!(titles, ["Demonstração", "Levantamento de escopo", "Proposta", "Contrato"]);
        }
    }

    #[test]
    fn conversation_ids_are_unique_across_boards() {
        let provider = SeedProvider;
        let mut seen = HashSet::new();
        for attendant in provider.attendants() {
            for column in provider.board(&attendant.id).unwrap() {
                for conv in column.conversations {
                    assert!(seen.insert(conv.id.clone()), "duplicate seed id {}", conv.id);
                }
            }
        }
        assert_eq!(seen.len(), 19);
    }

    #[test]
    fn seed_attendants_have_email_and_full_permissions() {
        for attendant in SeedProvider.attendants() {
            assert!(is_valid_email(&attendant.email), "{} has no usable email", attendant.id);
            assert_eq!(attendant.role, Role::Attendant);
            assert_eq!(attendant.permissions, Permissions::default());
        }
    }

    #[test]
    fn unknown_attendant_has_no_board() {
        assert!(SeedProvider.board("att-9").is_none());
    }
}
