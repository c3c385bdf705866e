//! Document payloads from the portal API and the cards built from them.

use serde::{Deserialize, Serialize};

/// Document kind as listed by `GET /documents`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Search template from `GET /searchdocuments/templates`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    #[serde(rename = "id_tipo")]
    pub type_id: String,
}

/// A document ready for the dashboard grid. `icon` and `description` are
/// decorative and chosen on the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentCard {
    pub id: i64,
    pub name: String,
    pub icon: &'static str,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::{Document, Template};

    #[test]
    fn wire_names_match_backend() {
        let documents: Vec<Document> =
            serde_json::from_str(r#"[{"id":3,"nome":"Holerites"},{"id":4,"nome":"Férias"}]"#)
                .expect("decode documents");
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].name, "Holerites");
        assert_eq!(documents[1].id, 4);

        let templates: Vec<Template> =
            serde_json::from_str(r#"[{"id_tipo":"TPL-7","descricao":"ignored"}]"#)
                .expect("decode templates");
        assert_eq!(templates[0].type_id, "TPL-7");
    }
}
