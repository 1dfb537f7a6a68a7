//! Board: one attendant's ordered columns and the conversations in them.
//!
//! DESIGN
//! ======
//! Columns are kept as an ordered `Vec` (display order). Alongside it a
//! `conversation id -> column id` index answers "which column holds this
//! conversation" without scanning every column. Every mutation goes through
//! a method on `Board` so the index never drifts from the column lists.
//!
//! INVARIANTS
//! ==========
//! - A conversation id appears in at most one column list.
//! - `index` has exactly one entry per conversation on the board.
//! - The first column is never removed.

use std::collections::HashMap;

use tracing::warn;

use crate::error::ErrorCode;
use crate::model::{Column, Conversation, Permission};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column not found: {0}")]
    ColumnNotFound(String),
    #[error("conversation not found: {0}")]
    ConversationNotFound(String),
    #[error("attendant not found: {0}")]
    AttendantNotFound(String),
    #[error("tag not found: {0}")]
    TagNotFound(String),
    #[error("the first column cannot be deleted: {0}")]
    FirstColumnProtected(String),
    #[error("column {column_id} still holds {conversations} conversation(s); confirm to move them")]
    ConfirmationRequired { column_id: String, conversations: usize },
    #[error("conversation already exists: {0}")]
    DuplicateConversation(String),
    #[error("conversation is already assigned to attendant {0}")]
    SameAttendant(String),
    #[error("attendant {0} is currently selected")]
    AttendantSelected(String),
    #[error("no attendants available")]
    NoAttendants,
    #[error("{0} must not be empty")]
    Blank(&'static str),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("attendant {attendant_id} lacks the {permission} permission")]
    PermissionDenied { attendant_id: String, permission: Permission },
}

impl ErrorCode for BoardError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ColumnNotFound(_) => "E_COLUMN_NOT_FOUND",
            Self::ConversationNotFound(_) => "E_CONVERSATION_NOT_FOUND",
            Self::AttendantNotFound(_) => "E_ATTENDANT_NOT_FOUND",
            Self::TagNotFound(_) => "E_TAG_NOT_FOUND",
            Self::FirstColumnProtected(_) => "E_FIRST_COLUMN",
            Self::ConfirmationRequired { .. } => "E_CONFIRMATION_REQUIRED",
            Self::DuplicateConversation(_) => "E_DUPLICATE_CONVERSATION",
            Self::SameAttendant(_) => "E_SAME_ATTENDANT",
            Self::AttendantSelected(_) => "E_ATTENDANT_SELECTED",
            Self::NoAttendants => "E_NO_ATTENDANTS",
            Self::Blank(_) => "E_BLANK",
            Self::InvalidEmail(_) => "E_INVALID_EMAIL",
            Self::PermissionDenied { .. } => "E_PERMISSION_DENIED",
        }
    }
}

/// Result of a move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: String },
    /// Source and target are the same column; nothing changed.
    SameColumn,
    ConversationMissing,
}

/// What a column deletion did to the board.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RemovedColumn {
    pub column_id: String,
    pub title: String,
    /// Column that received the orphaned conversations, if there were any.
    pub moved_to: Option<String>,
    pub moved: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    columns: Vec<Column>,
    index: HashMap<String, String>,
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

impl Board {
    /// Build a board from raw columns. A conversation id that shows up in
    /// more than one place keeps its first occurrence only.
    #[must_use]
    pub fn new(mut columns: Vec<Column>) -> Self {
        let mut index = HashMap::new();
        for column in &mut columns {
            column.conversations.retain(|conv| {
                if index.contains_key(&conv.id) {
                    warn!(conversation_id = %conv.id, column_id = %column.id, "dropping duplicate conversation");
                    return false;
                }
                index.insert(conv.id.clone(), column.id.clone());
                true
            });
        }
        Self { columns, index }
    }

    /// Same columns, no conversations.
    #[must_use]
    pub fn skeleton(&self) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|c| Column::new(c.id.clone(), c.title.clone()))
            .collect();
        Self { columns, index: HashMap::new() }
    }

    /// Derive a board keeping only conversations accepted by `keep`. Every
    /// column survives, possibly empty.
    #[must_use]
    pub fn filtered(&self, keep: impl Fn(&Conversation) -> bool) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                id: c.id.clone(),
                title: c.title.clone(),
                conversations: c.conversations.iter().filter(|conv| keep(conv)).cloned().collect(),
            })
            .collect();
        Self::new(columns)
    }
}

// =============================================================================
// QUERIES
// =============================================================================

impl Board {
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn position(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }

    #[must_use]
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    #[must_use]
    pub fn has_column(&self, column_id: &str) -> bool {
        self.position(column_id).is_some()
    }

    #[must_use]
    pub fn first_column_id(&self) -> Option<&str> {
        self.columns.first().map(|c| c.id.as_str())
    }

    /// Column currently holding `conversation_id`.
    #[must_use]
    pub fn column_of(&self, conversation_id: &str) -> Option<&str> {
        self.index.get(conversation_id).map(String::as_str)
    }

    #[must_use]
    pub fn contains_conversation(&self, conversation_id: &str) -> bool {
        self.index.contains_key(conversation_id)
    }

    #[must_use]
    pub fn conversation(&self, conversation_id: &str) -> Option<&Conversation> {
        let column = self.column(self.column_of(conversation_id)?)?;
        column.conversations.iter().find(|c| c.id == conversation_id)
    }

    pub fn conversation_mut(&mut self, conversation_id: &str) -> Option<&mut Conversation> {
        let pos = self.position(self.index.get(conversation_id)?)?;
        self.columns[pos]
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
    }

    #[must_use]
    pub fn conversation_count(&self) -> usize {
        self.index.len()
    }
}

// =============================================================================
// MUTATIONS
// =============================================================================

impl Board {
    /// Append a column. Conversations it already carries are indexed; ids
    /// already on the board are dropped.
    pub fn push_column(&mut self, mut column: Column) {
        column.conversations.retain(|conv| !self.index.contains_key(&conv.id));
        for conv in &column.conversations {
            self.index.insert(conv.id.clone(), column.id.clone());
        }
        self.columns.push(column);
    }

    /// Returns `false` if the column does not exist.
    pub fn rename_column(&mut self, column_id: &str, title: &str) -> bool {
        let Some(pos) = self.position(column_id) else {
            return false;
        };
        title.clone_into(&mut self.columns[pos].title);
        true
    }

    /// Remove a column, moving its conversations into the column right
    /// before it. Refuses (returns `None`) for the first column or an unknown id.
    pub fn delete_column(&mut self, column_id: &str) -> Option<RemovedColumn> {
        let pos = self.position(column_id)?;
        if pos == 0 {
            return None;
        }

        let target = self.columns[pos - 1].id.clone();
        let orphans: Vec<String> = self.columns[pos]
            .conversations
            .iter()
            .map(|c| c.id.clone())
            .collect();
        for conv_id in &orphans {
            if let Some(conv) = self.remove_conversation(conv_id) {
                self.append_conversation(&target, conv);
            }
        }

        let column = self.columns.remove(pos);
        Some(RemovedColumn {
            column_id: column.id,
            title: column.title,
            moved_to: (!orphans.is_empty()).then_some(target),
            moved: orphans,
        })
    }

    /// Move a conversation to the end of `target_column_id`.
    ///
    /// # Errors
    ///
    /// Returns `ColumnNotFound` when the target column is not on the board,
    /// whether or not the conversation is.
    pub fn move_conversation(&mut self, conversation_id: &str, target_column_id: &str) -> Result<MoveOutcome, BoardError> {
        if !self.has_column(target_column_id) {
            return Err(BoardError::ColumnNotFound(target_column_id.to_owned()));
        }
        let Some(source) = self.index.get(conversation_id).cloned() else {
            return Ok(MoveOutcome::ConversationMissing);
        };
        if source == target_column_id {
            return Ok(MoveOutcome::SameColumn);
        }

        let Some(conv) = self.remove_conversation(conversation_id) else {
            return Ok(MoveOutcome::ConversationMissing);
        };
        self.append_conversation(target_column_id, conv);
        Ok(MoveOutcome::Moved { from: source })
    }

    /// Append to the end of a column. Returns `false` (and drops nothing from
    /// the board) if the column is unknown or the id is already present.
    pub fn append_conversation(&mut self, column_id: &str, conversation: Conversation) -> bool {
        if self.index.contains_key(&conversation.id) {
            return false;
        }
        let Some(pos) = self.position(column_id) else {
            return false;
        };
        self.index.insert(conversation.id.clone(), column_id.to_owned());
        self.columns[pos].conversations.push(conversation);
        true
    }

    pub fn remove_conversation(&mut self, conversation_id: &str) -> Option<Conversation> {
        let column_id = self.index.remove(conversation_id)?;
        let pos = self.position(&column_id)?;
        let list = &mut self.columns[pos].conversations;
        let at = list.iter().position(|c| c.id == conversation_id)?;
        Some(list.remove(at))
    }

    /// Visit every conversation on the board.
    pub fn for_each_conversation_mut(&mut self, mut f: impl FnMut(&mut Conversation)) {
        for column in &mut self.columns {
            column.conversations.iter_mut().for_each(&mut f);
        }
    }
}

#[cfg(test)]
#[path = "board_test.rs"]
mod tests;
