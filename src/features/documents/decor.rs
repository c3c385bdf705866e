//! Decorative glyphs and blurbs for document cards. Purely cosmetic: the
//! choice is random on every load and nothing depends on it.

use super::types::{Document, DocumentCard};
use rand::{Rng, seq::SliceRandom};

pub const ICONS: [&str; 8] = ["📄", "📑", "📊", "📝", "🗂️", "📎", "📌", "🏷️"];

/// Picks a random description for a document named `name`.
pub fn describe<R: Rng + ?Sized>(name: &str, rng: &mut R) -> String {
    let name = name.to_lowercase();
    match rng.gen_range(0..4) {
        0 => format!("Acesse seus {name} mais recentes"),
        1 => format!("Visualize e baixe {name}"),
        2 => format!("Todos os {name} disponíveis"),
        _ => format!("Documentos relacionados a {name}"),
    }
}

/// Turns fetched documents into cards, keeping order and ids.
pub fn decorate<R: Rng + ?Sized>(documents: Vec<Document>, rng: &mut R) -> Vec<DocumentCard> {
    documents
        .into_iter()
        .map(|document| DocumentCard {
            icon: ICONS.choose(&mut *rng).copied().unwrap_or(ICONS[0]),
            description: describe(&document.name, &mut *rng),
            id: document.id,
            name: document.name,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{ICONS, decorate, describe};
    use crate::features::documents::types::Document;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn decorate_keeps_order_and_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        let documents = vec![
            Document {
                id: 10,
                name: "Holerites".to_string(),
            },
            Document {
                id: 11,
                name: "Informe de Rendimentos".to_string(),
            },
        ];

        let cards = decorate(documents, &mut rng);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, 10);
        assert_eq!(cards[0].name, "Holerites");
        assert_eq!(cards[1].id, 11);
        for card in &cards {
            assert!(ICONS.contains(&card.icon));
            assert!(card.description.contains(&card.name.to_lowercase()));
        }
    }

    #[test]
    fn describe_lowercases_the_name() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..16 {
            let text = describe("FÉRIAS", &mut rng);
            assert!(text.contains("férias"), "{text}");
        }
    }
}
