//! # Provedor de Conteúdo
//!
//! Fábrica explícita do conteúdo estático do canvas. Cada chamada a
//! [`canvas_data()`] devolve uma estrutura nova e idêntica; o servidor
//! chama uma vez na inicialização e compartilha via `Arc`.

use super::model::{Accent, Block, CanvasData, Connection, CoreEntity, PageMeta};
use crate::icons::Icon;

/// Constrói o conteúdo completo do canvas de Autoconhecimento.
///
/// Sem entradas, sem efeitos colaterais, sem caminho de erro.
pub fn canvas_data() -> CanvasData {
    CanvasData {
        core: CoreEntity {
            id: "core".to_string(),
            title: "AUTOCONHECIMENTO".to_string(),
            subtitle: "No Desenvolvimento de Software".to_string(),
            description: "Capacidade de compreender minhas emoções, atitudes e reações \
                          enquanto construo um software de gestão de projetos (PBL)."
                .to_string(),
            icon: Icon::Brain,
        },
        blocks: vec![
            block(
                "b1",
                "1. Reconhecimento Emocional",
                "Como eu me sinto em cada fase do desenvolvimento?",
                &[
                    "Identifico frustração ao lidar com bugs",
                    "Reconheço estresse em prazos curtos",
                    "Percebo motivação ao resolver problemas",
                    "Ajusto meu ritmo quando necessário",
                ],
                "Mais equilíbrio, menos impulsividade e melhor foco.",
                Icon::Heart,
                Accent::Red,
            ),
            block(
                "b2",
                "2. Autoconfiança Técnica",
                "Em quais habilidades eu confio hoje?",
                &[
                    "Uso prático de FlutterFlow",
                    "Integração com Firebase",
                    "Criação de fluxos do sistema",
                    "Ensino de colegas",
                ],
                "Tomada de iniciativa, segurança nas decisões e participação ativa.",
                Icon::ShieldCheck,
                Accent::Blue,
            ),
            block(
                "b3",
                "3. Impacto do Comportamento",
                "Como minha postura afeta a equipe?",
                &[
                    "Organização de tarefas no backlog",
                    "Comunicação clara de bloqueios",
                    "Apoio técnico proativo",
                    "Liderança em momentos-chave",
                ],
                "Mais engajamento, melhor clima e aumento da produtividade.",
                Icon::Users,
                Accent::Green,
            ),
            block(
                "b4",
                "4. Influência do Outro",
                "Como o grupo afeta minhas emoções?",
                &[
                    "Recepção de Feedbacks (Code review)",
                    "Adaptação a estilos diferentes de trabalho",
                    "Resolução de conflitos de merge/ideias",
                    "Trabalho colaborativo (Pair programming)",
                ],
                "Mais empatia, maior adaptação e maturidade emocional.",
                Icon::GitPullRequest,
                Accent::Yellow,
            ),
            block(
                "b5",
                "5. Aprender Ensinando",
                "Como ensinar fortalece meu aprendizado?",
                &[
                    "Explicação de conceitos",
                    "Ajuda a colegas",
                    "Troca de conhecimento",
                    "Aprendizado contínuo",
                ],
                "Consolidação do conhecimento, liderança e crescimento pessoal.",
                Icon::BookOpen,
                Accent::Cyan,
            ),
        ],
        connections: vec![
            connection("Reconhecimento emocional", "Comunicação", "melhora"),
            connection("Autoconfiança", "Liderança", "fortalece"),
            connection("Liderança", "Clima do grupo", "impacta"),
            connection("Clima do grupo", "Emoções", "influencia"),
            connection("Emoções equilibradas", "Desempenho técnico", "melhoram"),
        ],
    }
}

/// Metadados da página: título do documento e meta description.
pub fn page_meta() -> PageMeta {
    PageMeta {
        title: "Canvas de Autoconhecimento | Thássio Silva".to_string(),
        description: "Mapa visual conectando autoconhecimento e prática técnica \
                      no desenvolvimento de software."
            .to_string(),
    }
}

fn block(
    id: &str,
    title: &str,
    question: &str,
    evidences: &[&str],
    impact: &str,
    icon: Icon,
    accent: Accent,
) -> Block {
    Block {
        id: id.to_string(),
        title: title.to_string(),
        question: question.to_string(),
        evidences: evidences.iter().map(|e| e.to_string()).collect(),
        impact: impact.to_string(),
        icon,
        accent,
    }
}

fn connection(from: &str, to: &str, label: &str) -> Connection {
    Connection {
        from: from.to_string(),
        to: to.to_string(),
        label: label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_blocks_in_declaration_order() {
        let data = canvas_data();
        let ids: Vec<&str> = data.blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["b1", "b2", "b3", "b4", "b5"]);
    }

    #[test]
    fn factory_is_deterministic() {
        assert_eq!(canvas_data(), canvas_data());
    }

    #[test]
    fn every_block_has_four_evidences() {
        for block in canvas_data().blocks {
            assert_eq!(block.evidences.len(), 4, "bloco {}", block.id);
        }
    }

    #[test]
    fn block_lookup_by_id() {
        let data = canvas_data();
        let b2 = data.block("b2").unwrap();
        assert_eq!(b2.title, "2. Autoconfiança Técnica");
        assert_eq!(b2.accent, Accent::Blue);
        assert!(data.block("b9").is_none());
    }

    #[test]
    fn preview_is_first_evidence() {
        let data = canvas_data();
        assert_eq!(
            data.blocks[0].preview(),
            Some("Identifico frustração ao lidar com bugs")
        );
    }

    #[test]
    fn connections_keep_declaration_order() {
        let data = canvas_data();
        let first = &data.connections[0];
        assert_eq!(first.from, "Reconhecimento emocional");
        assert_eq!(first.label, "melhora");
        assert_eq!(first.to, "Comunicação");
        assert_eq!(data.connections.len(), 5);
        assert_eq!(data.connections[4].to, "Desempenho técnico");
    }

    #[test]
    fn data_serializes_to_json() {
        let json = serde_json::to_value(canvas_data()).unwrap();
        assert_eq!(json["core"]["icon"], "brain");
        assert_eq!(json["blocks"][3]["accent"], "yellow");
    }
}
