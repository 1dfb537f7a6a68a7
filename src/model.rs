//! Board domain types: tags, conversations, columns, attendants.
//!
//! DESIGN
//! ======
//! Plain data, cloned freely. Ownership of a conversation is expressed by
//! membership in exactly one `Column::conversations` list; there is no
//! back-pointer from a conversation to its column. The conversation → column
//! lookup lives in `services::board::Board`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// TAG COLOR
// =============================================================================

/// Named colors offered by the tag editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Gray,
}

impl Palette {
    pub const ALL: [Self; 8] =
        [Self::Red, Self::Orange, Self::Yellow, Self::Green, Self::Blue, Self::Purple, Self::Pink, Self::Gray];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Gray => "gray",
        }
    }

    /// Hex value the tag editor pairs with each palette entry.
    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            Self::Red => "#EF4444",
            Self::Orange => "#F59E0B",
            Self::Yellow => "#EAB308",
            Self::Green => "#10B981",
            Self::Blue => "#3B82F6",
            Self::Purple => "#8B5CF6",
            Self::Pink => "#EC4899",
            Self::Gray => "#6B7280",
        }
    }

    fn from_name(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid tag color '{0}' (expected a palette name or #RRGGBB)")]
pub struct InvalidColor(pub String);

/// Rendering style of a tag: a palette entry or an explicit `#RRGGBB` code.
///
/// Serialized as a plain string so seed files can say `"green"` or `"#10B981"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TagColor {
    Named(Palette),
    Hex(String),
}

impl FromStr for TagColor {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if let Some(digits) = raw.strip_prefix('#') {
            if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
                return Ok(Self::Hex(format!("#{}", digits.to_ascii_uppercase())));
            }
            return Err(InvalidColor(s.to_owned()));
        }
        Palette::from_name(&raw.to_ascii_lowercase())
            .map(Self::Named)
            .ok_or_else(|| InvalidColor(s.to_owned()))
    }
}

impl TryFrom<String> for TagColor {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TagColor> for String {
    fn from(value: TagColor) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(p) => f.write_str(p.as_str()),
            Self::Hex(h) => f.write_str(h),
        }
    }
}

// =============================================================================
// ENTITIES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub color: TagColor,
}

/// A single customer thread shown as a card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub contact_name: String,
    pub contact_avatar: String,
    pub last_message: String,
    /// Display timestamp as shown on the card ("10:30", "Ontem").
    pub timestamp: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub unread_count: u32,
}

impl Conversation {
    #[must_use]
    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|t| t.id == tag_id)
    }

    /// Case-insensitive substring match on contact name or last message.
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.contact_name.to_lowercase().contains(needle) || self.last_message.to_lowercase().contains(needle)
    }
}

/// A pipeline stage. Column order on the board is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub conversations: Vec<Conversation>,
}

impl Column {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), conversations: Vec::new() }
    }
}

// =============================================================================
// ATTENDANTS
// =============================================================================

/// A board operation the selected attendant must be allowed to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    RenameColumns,
    DeleteColumns,
    TransferConversations,
    CreateTags,
}

impl Permission {
    pub const ALL: [Self; 4] = [Self::RenameColumns, Self::DeleteColumns, Self::TransferConversations, Self::CreateTags];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RenameColumns => "rename_columns",
            Self::DeleteColumns => "delete_columns",
            Self::TransferConversations => "transfer_conversations",
            Self::CreateTags => "create_tags",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-attendant permission set. Everything is granted unless revoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Permissions {
    pub rename_columns: bool,
    pub delete_columns: bool,
    pub transfer_conversations: bool,
    pub create_tags: bool,
}

impl Default for Permissions {
    fn default() -> Self {
        Self { rename_columns: true, delete_columns: true, transfer_conversations: true, create_tags: true }
    }
}

impl Permissions {
    #[must_use]
    pub fn allows(&self, permission: Permission) -> bool {
        match permission {
            Permission::RenameColumns => self.rename_columns,
            Permission::DeleteColumns => self.delete_columns,
            Permission::TransferConversations => self.transfer_conversations,
            Permission::CreateTags => self.create_tags,
        }
    }

    pub fn set(&mut self, permission: Permission, enabled: bool) {
        let flag = match permission {
            Permission::RenameColumns => &mut self.rename_columns,
            Permission::DeleteColumns => &mut self.delete_columns,
            Permission::TransferConversations => &mut self.transfer_conversations,
            Permission::CreateTags => &mut self.create_tags,
        };
        *flag = enabled;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    #[default]
    Attendant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub avatar: String,
    pub active: bool,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub permissions: Permissions,
}

/// Loose address check: something, `@`, a dotted domain, no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

// =============================================================================
// INPUTS
// =============================================================================

/// Payload for creating a conversation. `id` is generated when absent.
/// Tags are given by catalog id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewConversation {
    pub id: Option<String>,
    pub contact_name: String,
    #[serde(default)]
    pub contact_avatar: String,
    #[serde(default)]
    pub last_message: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub tag_ids: Vec<String>,
}

/// Partial edit of a conversation. `None` leaves the field untouched.
/// `tag_ids` replaces the whole tag list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversationPatch {
    pub contact_name: Option<String>,
    pub contact_avatar: Option<String>,
    pub last_message: Option<String>,
    pub timestamp: Option<String>,
    pub tag_ids: Option<Vec<String>>,
}

impl ConversationPatch {
    /// `tags` is `tag_ids` already resolved against the catalog.
    pub(crate) fn apply(&self, conv: &mut Conversation, tags: Option<&[Tag]>) {
        if let Some(name) = &self.contact_name {
            conv.contact_name.clone_from(name);
        }
        if let Some(avatar) = &self.contact_avatar {
            conv.contact_avatar.clone_from(avatar);
        }
        if let Some(msg) = &self.last_message {
            conv.last_message.clone_from(msg);
        }
        if let Some(ts) = &self.timestamp {
            conv.timestamp.clone_from(ts);
        }
        if let Some(tags) = tags {
            conv.tags = tags.to_vec();
        }
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
