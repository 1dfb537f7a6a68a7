//! Derived board views: text search and tag filter.
//!
//! A view is always recomputed from a baseline board; applying a second
//! criterion never narrows the result of the first.

use serde::{Deserialize, Serialize};

use crate::services::board::Board;

/// The single criterion currently applied to the visible board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewFilter {
    #[default]
    None,
    Search {
        query: String,
    },
    Tag {
        tag_id: String,
    },
}

impl ViewFilter {
    /// Build a search criterion. The query is matched as typed, surrounding
    /// whitespace included; only the empty string clears the view.
    #[must_use]
    pub fn search(query: &str) -> Self {
        if query.is_empty() {
            Self::None
        } else {
            Self::Search { query: query.to_owned() }
        }
    }

    /// Build a tag criterion. `None` clears the view.
    #[must_use]
    pub fn tag(tag_id: Option<&str>) -> Self {
        match tag_id {
            Some(id) => Self::Tag { tag_id: id.to_owned() },
            None => Self::None,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Apply the criterion to `baseline`, producing a fresh board.
    #[must_use]
    pub fn derive(&self, baseline: &Board) -> Board {
        match self {
            Self::None => baseline.clone(),
            Self::Search { query } => {
                let needle = query.to_lowercase();
                baseline.filtered(|conv| conv.matches_lowercase(&needle))
            }
            Self::Tag { tag_id } => baseline.filtered(|conv| conv.has_tag(tag_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::provider::BoardProvider;
    use crate::services::seed::SeedProvider;

    fn carlos() -> Board {
        Board::new(SeedProvider.board("att-1").unwrap())
    }

    fn ids(board: &Board) -> Vec<&str> {
        board
            .columns()
            .iter()
            .flat_map(|c| c.conversations.iter().map(|conv| conv.id.as_str()))
            .collect()
    }

    #[test]
    fn only_empty_search_is_no_filter() {
        assert_eq!(ViewFilter::search(""), ViewFilter::None);
        assert_eq!(ViewFilter::search(" "), ViewFilter::Search { query: " ".into() });
        assert!(ViewFilter::search("   ").is_active());
    }

    #[test]
    fn search_matches_query_as_typed() {
        let board = carlos();
        assert!(ids(&ViewFilter::search("  maria").derive(&board)).is_empty());
        assert_eq!(ids(&ViewFilter::search("Maria ").derive(&board)), vec!["conv-2"]);
    }

    #[test]
    fn search_is_case_insensitive_on_name_and_message() {
        let board = carlos();
        assert_eq!(ids(&ViewFilter::search("MARIA").derive(&board)), vec!["conv-2"]);
        assert_eq!(ids(&ViewFilter::search("contrato").derive(&board)), vec!["conv-11"]);
    }

    #[test]
    fn search_keeps_empty_columns() {
        let view = ViewFilter::search("maria").derive(&carlos());
        assert_eq!(view.columns().len(), 4);
        assert!(view.columns()[3].conversations.is_empty());
    }

    #[test]
    fn tag_filter_matches_membership() {
        let view = ViewFilter::tag(Some("tag-2")).derive(&carlos());
        assert_eq!(ids(&view), vec!["conv-2"]);
    }

    #[test]
    fn no_filter_returns_baseline() {
        let board = carlos();
        assert_eq!(ViewFilter::tag(None).derive(&board), board);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(ViewFilter::search("ana")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "search", "query": "ana"}));
        let json = serde_json::to_value(ViewFilter::None).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "none"}));
    }
}
