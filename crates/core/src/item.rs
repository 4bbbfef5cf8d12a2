//! Clothing records and the closed category set.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::id::ItemId;

/// Default descriptive label applied to new drafts.
pub const DEFAULT_CATEGORY: &str = "casual";

/// Sentinel for items whose color has not been determined.
pub const UNKNOWN_COLOR: &str = "unknown";

/// Closed set of clothing categories.
///
/// Serialized as the lowercase strings `top` / `bottom` / `shoes`. Any other
/// value is rejected at the string boundary (`FromStr` and serde), so an
/// out-of-set kind never reaches the store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingKind {
    Top,
    Bottom,
    Shoes,
}

impl ClothingKind {
    /// All categories, in outfit order (top to bottom).
    pub const ALL: [ClothingKind; 3] = [Self::Top, Self::Bottom, Self::Shoes];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Shoes => "shoes",
        }
    }
}

impl fmt::Display for ClothingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClothingKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "shoes" => Ok(Self::Shoes),
            other => Err(DomainError::validation(format!(
                "unknown clothing kind '{other}' (expected one of: top, bottom, shoes)"
            ))),
        }
    }
}

/// A single clothing record — the only persisted entity.
///
/// Created once, never mutated in place, removed once. The `uri` is an opaque
/// handle into the user's media library; the store never validates or
/// dereferences it. The kind is persisted under the field name `type` for
/// compatibility with the stored blob layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: ItemId,
    pub uri: String,
    #[serde(rename = "type")]
    pub kind: ClothingKind,
    pub category: String,
    pub color: String,
}

impl ClothingItem {
    /// Materialize a draft with a freshly assigned identifier.
    pub fn from_draft(draft: ItemDraft) -> Self {
        Self {
            id: ItemId::new(),
            uri: draft.uri,
            kind: draft.kind,
            category: draft.category,
            color: draft.color,
        }
    }
}

/// A clothing item minus its identifier, as supplied by the UI layer at
/// creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub uri: String,
    #[serde(rename = "type")]
    pub kind: ClothingKind,
    pub category: String,
    pub color: String,
}

impl ItemDraft {
    /// New draft with the stock defaults (`"casual"`, color `"unknown"`).
    pub fn new(uri: impl Into<String>, kind: ClothingKind) -> Self {
        Self {
            uri: uri.into(),
            kind,
            category: DEFAULT_CATEGORY.to_string(),
            color: UNKNOWN_COLOR.to_string(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn kind_parses_closed_set() {
        assert_eq!("top".parse::<ClothingKind>().unwrap(), ClothingKind::Top);
        assert_eq!(
            "bottom".parse::<ClothingKind>().unwrap(),
            ClothingKind::Bottom
        );
        assert_eq!(
            "shoes".parse::<ClothingKind>().unwrap(),
            ClothingKind::Shoes
        );
    }

    #[test]
    fn kind_rejects_out_of_set_values() {
        for bad in ["hat", "Top", "TOP", "", " top"] {
            let err = bad.parse::<ClothingKind>().unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{bad}: {err}");
        }
    }

    #[test]
    fn draft_defaults_match_stock_values() {
        let draft = ItemDraft::new("file://a.jpg", ClothingKind::Top);
        assert_eq!(draft.category, DEFAULT_CATEGORY);
        assert_eq!(draft.color, UNKNOWN_COLOR);

        let draft = draft.with_category("formal").with_color("navy");
        assert_eq!(draft.category, "formal");
        assert_eq!(draft.color, "navy");
    }

    #[test]
    fn item_serializes_kind_under_type_field() {
        let item = ClothingItem::from_draft(ItemDraft::new("file://a.jpg", ClothingKind::Shoes));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "shoes");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn ids_are_unique_under_rapid_creation() {
        let mut ids: Vec<ItemId> = (0..1000).map(|_| ItemId::new()).collect();
        ids.sort_by_key(|id| *id.as_uuid());
        ids.dedup();
        assert_eq!(ids.len(), 1000);
    }

    proptest! {
        /// Property: any string outside the closed set fails validation.
        #[test]
        fn parse_rejects_everything_outside_closed_set(s in "\\PC*") {
            prop_assume!(s != "top" && s != "bottom" && s != "shoes");
            prop_assert!(matches!(
                s.parse::<ClothingKind>(),
                Err(DomainError::Validation(_))
            ));
        }

        /// Property: display output always parses back to the same kind.
        #[test]
        fn display_is_parseable(idx in 0usize..3) {
            let kind = ClothingKind::ALL[idx];
            prop_assert_eq!(kind.to_string().parse::<ClothingKind>().unwrap(), kind);
        }
    }
}
