//! Board state manager: attendant boards, the visible view, and the
//! operations that mutate them.
//!
//! DESIGN
//! ======
//! Three boards are in play at any time:
//! - `current`: the selected attendant's authoritative board. Every
//!   mutation lands here. Other attendants' boards are parked in `parked`.
//! - `snapshot`: a copy of `current` taken when the attendant was selected.
//! - `view`: what the user sees. Mutations are mirrored onto it; searches
//!   and tag filters replace it with a board derived from the baseline.
//!
//! The baseline is `snapshot` under `BaselinePolicy::Snapshot` (the default)
//! and `current` under `BaselinePolicy::Tracking`. With the snapshot policy,
//! clearing a search shows the board as it was when the attendant was
//! selected, not as it is now; switching attendants recaptures it.
//!
//! ERROR HANDLING
//! ==============
//! Every operation validates first and mutates second, so an `Err` always
//! means nothing changed.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{info, warn};

use crate::model::{
    Attendant, Column, Conversation, ConversationPatch, NewConversation, Permission, Permissions, Role, Tag, TagColor,
    is_valid_email,
};
use crate::services::board::{Board, BoardError, MoveOutcome, RemovedColumn};
use crate::services::ids::IdGenerator;
use crate::services::provider::BoardProvider;
use crate::services::view::ViewFilter;

// =============================================================================
// TYPES
// =============================================================================

/// Which board searches and tag filters are derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BaselinePolicy {
    /// Captured once per attendant selection.
    #[default]
    Snapshot,
    /// The live board, including every mutation since selection.
    Tracking,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown baseline policy '{0}' (expected 'snapshot' or 'tracking')")]
pub struct UnknownPolicy(pub String);

impl FromStr for BaselinePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "snapshot" => Ok(Self::Snapshot),
            "tracking" => Ok(Self::Tracking),
            other => Err(UnknownPolicy(other.to_owned())),
        }
    }
}

impl fmt::Display for BaselinePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snapshot => f.write_str("snapshot"),
            Self::Tracking => f.write_str("tracking"),
        }
    }
}

/// Notice produced when a conversation is handed to another attendant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendantTransfer {
    pub conversation: Conversation,
    pub from_attendant: String,
    pub to_attendant: String,
    pub to_column: String,
    pub notice: String,
}

pub struct BoardManager {
    ids: IdGenerator,
    policy: BaselinePolicy,
    attendants: Vec<Attendant>,
    active: String,
    current: Board,
    parked: HashMap<String, Board>,
    snapshot: Board,
    view: Board,
    filter: ViewFilter,
    tags: Vec<Tag>,
}

fn require(value: &str, field: &'static str) -> Result<String, BoardError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BoardError::Blank(field));
    }
    Ok(trimmed.to_owned())
}

/// Distinct tags in first-seen order.
fn collect_tags<'a>(boards: impl IntoIterator<Item = &'a Board>) -> Vec<Tag> {
    let mut tags: Vec<Tag> = Vec::new();
    for board in boards {
        for column in board.columns() {
            for tag in column.conversations.iter().flat_map(|c| &c.tags) {
                if !tags.iter().any(|t| t.id == tag.id) {
                    tags.push(tag.clone());
                }
            }
        }
    }
    tags
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

impl BoardManager {
    /// Load every attendant's board from `provider` and select `preferred`
    /// (or the first attendant in the roster).
    ///
    /// # Errors
    ///
    /// Returns `NoAttendants` for an empty roster and `AttendantNotFound` if
    /// `preferred` is not in it.
    pub fn new(
        provider: &dyn BoardProvider,
        policy: BaselinePolicy,
        preferred: Option<&str>,
    ) -> Result<Self, BoardError> {
        let attendants = provider.attendants();
        let Some(first) = attendants.first() else {
            return Err(BoardError::NoAttendants);
        };
        let active = match preferred {
            Some(id) if attendants.iter().any(|a| a.id == id) => id.to_owned(),
            Some(id) => return Err(BoardError::AttendantNotFound(id.to_owned())),
            None => first.id.clone(),
        };

        let mut current = Board::default();
        let mut parked = HashMap::new();
        for attendant in &attendants {
            let board = provider.board(&attendant.id).map(Board::new).unwrap_or_default();
            if attendant.id == active {
                current = board;
            } else {
                parked.insert(attendant.id.clone(), board);
            }
        }

        let ordered = attendants.iter().filter_map(|a| {
            if a.id == active { Some(&current) } else { parked.get(&a.id) }
        });
        let tags = collect_tags(ordered);

        info!(attendants = attendants.len(), %active, %policy, tags = tags.len(), "board manager initialized");

        Ok(Self {
            ids: IdGenerator::new(),
            policy,
            attendants,
            active,
            snapshot: current.clone(),
            view: current.clone(),
            current,
            parked,
            filter: ViewFilter::None,
            tags,
        })
    }
}

// =============================================================================
// QUERIES
// =============================================================================

impl BoardManager {
    #[must_use]
    pub fn policy(&self) -> BaselinePolicy {
        self.policy
    }

    #[must_use]
    pub fn active_attendant(&self) -> &str {
        &self.active
    }

    #[must_use]
    pub fn attendants(&self) -> &[Attendant] {
        &self.attendants
    }

    #[must_use]
    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    /// The visible column set (possibly searched or filtered).
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        self.view.columns()
    }

    /// The selected attendant's full, unfiltered board.
    #[must_use]
    pub fn current_board(&self) -> &Board {
        &self.current
    }

    #[must_use]
    pub fn board_for(&self, attendant_id: &str) -> Option<&Board> {
        if attendant_id == self.active {
            Some(&self.current)
        } else {
            self.parked.get(attendant_id)
        }
    }

    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    fn baseline(&self) -> &Board {
        match self.policy {
            BaselinePolicy::Snapshot => &self.snapshot,
            BaselinePolicy::Tracking => &self.current,
        }
    }

    fn attendant_name<'a>(&'a self, attendant_id: &'a str) -> &'a str {
        self.attendants
            .iter()
            .find(|a| a.id == attendant_id)
            .map_or(attendant_id, |a| a.name.as_str())
    }

    /// Catalog copies of the tags named by `ids`, in request order and
    /// without repeats.
    fn resolve_tags<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Result<Vec<Tag>, BoardError> {
        let mut resolved: Vec<Tag> = Vec::new();
        for id in ids {
            let tag = self
                .tags
                .iter()
                .find(|t| t.id == id)
                .ok_or_else(|| BoardError::TagNotFound(id.to_owned()))?;
            if !resolved.iter().any(|t| t.id == tag.id) {
                resolved.push(tag.clone());
            }
        }
        Ok(resolved)
    }

    /// The selected attendant must hold `permission`.
    fn authorize(&self, permission: Permission) -> Result<(), BoardError> {
        let granted = self
            .attendants
            .iter()
            .find(|a| a.id == self.active)
            .is_some_and(|a| a.permissions.allows(permission));
        if granted {
            return Ok(());
        }
        warn!(attendant_id = %self.active, %permission, "permission denied");
        Err(BoardError::PermissionDenied { attendant_id: self.active.clone(), permission })
    }
}

// =============================================================================
// VIEW
// =============================================================================

impl BoardManager {
    fn refresh_view(&mut self) {
        let view = self.filter.derive(self.baseline());
        self.view = view;
    }

    /// Show conversations whose contact name or last message contains
    /// `query` (case-insensitive). Only the empty query restores the baseline.
    pub fn search(&mut self, query: &str) -> &[Column] {
        self.filter = ViewFilter::search(query);
        self.refresh_view();
        self.view.columns()
    }

    /// Show conversations carrying `tag_id`. `None` restores the baseline.
    pub fn filter_by_tag(&mut self, tag_id: Option<&str>) -> &[Column] {
        self.filter = ViewFilter::tag(tag_id);
        self.refresh_view();
        self.view.columns()
    }

    /// Make `attendant_id` the selected attendant. Always resets the view to
    /// that attendant's unfiltered board and recaptures the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `AttendantNotFound` for an id outside the roster.
    pub fn select_attendant(&mut self, attendant_id: &str) -> Result<&[Column], BoardError> {
        if attendant_id != self.active {
            let next = self
                .parked
                .remove(attendant_id)
                .ok_or_else(|| BoardError::AttendantNotFound(attendant_id.to_owned()))?;
            let previous = std::mem::replace(&mut self.current, next);
            let previous_id = std::mem::replace(&mut self.active, attendant_id.to_owned());
            self.parked.insert(previous_id, previous);
        }

        self.snapshot = self.current.clone();
        self.filter = ViewFilter::None;
        self.view = self.current.clone();

        info!(attendant_id, conversations = self.current.conversation_count(), "attendant selected");
        Ok(self.view.columns())
    }
}

// =============================================================================
// COLUMNS
// =============================================================================

impl BoardManager {
    /// Append an empty column with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `Blank` for an empty title.
    pub fn add_column(&mut self, title: &str) -> Result<Column, BoardError> {
        let title = require(title, "column title")?;
        let column = Column::new(self.ids.next("column"), title);

        self.current.push_column(column.clone());
        self.view.push_column(column.clone());

        info!(column_id = %column.id, title = %column.title, "column added");
        Ok(column)
    }

    /// Rename a column in place.
    ///
    /// # Errors
    ///
    /// - `PermissionDenied` unless the selected attendant may rename columns.
    /// - `Blank` for an empty title.
    /// - `ColumnNotFound` for an unknown id.
    pub fn update_column(&mut self, column_id: &str, title: &str) -> Result<Column, BoardError> {
        self.authorize(Permission::RenameColumns)?;
        let title = require(title, "column title")?;
        if !self.current.rename_column(column_id, &title) {
            return Err(BoardError::ColumnNotFound(column_id.to_owned()));
        }
        self.view.rename_column(column_id, &title);

        self.current
            .column(column_id)
            .cloned()
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.to_owned()))
    }

    /// Delete a column. Its conversations move to the column right before it,
    /// which needs `confirmed` when there are any.
    ///
    /// # Errors
    ///
    /// - `PermissionDenied` unless the selected attendant may delete columns.
    /// - `ColumnNotFound` for an unknown id.
    /// - `FirstColumnProtected` for the first column.
    /// - `ConfirmationRequired` when the column is not empty and `confirmed`
    ///   is false.
    pub fn delete_column(&mut self, column_id: &str, confirmed: bool) -> Result<RemovedColumn, BoardError> {
        self.authorize(Permission::DeleteColumns)?;
        let column = self
            .current
            .column(column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.to_owned()))?;
        if self.current.first_column_id() == Some(column_id) {
            warn!(column_id, "refusing to delete the first column");
            return Err(BoardError::FirstColumnProtected(column_id.to_owned()));
        }
        if !column.conversations.is_empty() && !confirmed {
            return Err(BoardError::ConfirmationRequired {
                column_id: column_id.to_owned(),
                conversations: column.conversations.len(),
            });
        }

        let removed = self
            .current
            .delete_column(column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.to_owned()))?;
        self.view.delete_column(column_id);

        info!(column_id, moved = removed.moved.len(), moved_to = ?removed.moved_to, "column deleted");
        Ok(removed)
    }
}

// =============================================================================
// CONVERSATIONS
// =============================================================================

impl BoardManager {
    /// Move a conversation to the end of another column. Moving to the
    /// column it is already in, or moving an unknown conversation, changes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns `ColumnNotFound` if the target column does not exist.
    pub fn move_conversation(&mut self, conversation_id: &str, target_column_id: &str) -> Result<MoveOutcome, BoardError> {
        let outcome = self.current.move_conversation(conversation_id, target_column_id)?;
        if let MoveOutcome::Moved { from } = &outcome {
            // The view shares the board's columns; a hidden conversation is
            // simply missing there.
            let _ = self.view.move_conversation(conversation_id, target_column_id);
            info!(conversation_id, %from, to = target_column_id, "conversation moved");
        }
        Ok(outcome)
    }

    /// Append a new conversation to a column. Creating a conversation marks
    /// it read. Its tags are looked up in the catalog.
    ///
    /// # Errors
    ///
    /// - `Blank` for an empty contact name.
    /// - `ColumnNotFound` for an unknown column.
    /// - `TagNotFound` for a tag id outside the catalog.
    /// - `DuplicateConversation` if an explicit id is already on the board.
    pub fn add_conversation(&mut self, column_id: &str, new: NewConversation) -> Result<Conversation, BoardError> {
        let contact_name = require(&new.contact_name, "contact name")?;
        if !self.current.has_column(column_id) {
            return Err(BoardError::ColumnNotFound(column_id.to_owned()));
        }
        let tags = self.resolve_tags(new.tag_ids.iter().map(String::as_str))?;
        let id = match new.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_owned(),
            _ => self.ids.next("conv"),
        };
        if self.current.contains_conversation(&id) {
            return Err(BoardError::DuplicateConversation(id));
        }

        let conversation = Conversation {
            id,
            contact_name,
            contact_avatar: new.contact_avatar,
            last_message: new.last_message,
            timestamp: new.timestamp,
            tags,
            unread_count: 0,
        };
        self.current.append_conversation(column_id, conversation.clone());
        self.view.append_conversation(column_id, conversation.clone());

        info!(conversation_id = %conversation.id, column_id, "conversation added");
        Ok(conversation)
    }

    /// Bulk-load conversations fetched from a channel into a column. Ids
    /// already on the board are skipped. Returns how many were added.
    ///
    /// Each tag is replaced by the catalog entry with the same id, so a
    /// channel cannot relabel a tag.
    ///
    /// # Errors
    ///
    /// Returns `ColumnNotFound` for an unknown column and `TagNotFound` if
    /// any conversation carries a tag id outside the catalog. Either way
    /// nothing is imported.
    pub fn import_conversations(&mut self, column_id: &str, mut conversations: Vec<Conversation>) -> Result<usize, BoardError> {
        if !self.current.has_column(column_id) {
            return Err(BoardError::ColumnNotFound(column_id.to_owned()));
        }
        let resolved = conversations
            .iter()
            .map(|c| self.resolve_tags(c.tags.iter().map(|t| t.id.as_str())))
            .collect::<Result<Vec<_>, _>>()?;
        for (conversation, tags) in conversations.iter_mut().zip(resolved) {
            conversation.tags = tags;
        }

        let total = conversations.len();
        let mut imported = 0;
        for conversation in conversations {
            if self.current.append_conversation(column_id, conversation.clone()) {
                self.view.append_conversation(column_id, conversation);
                imported += 1;
            }
        }

        info!(column_id, imported, skipped = total - imported, "conversations imported");
        Ok(imported)
    }

    /// Open a conversation: clears its unread counter and returns it.
    ///
    /// # Errors
    ///
    /// Returns `ConversationNotFound` for an unknown id.
    pub fn open_conversation(&mut self, conversation_id: &str) -> Result<Conversation, BoardError> {
        let conversation = self
            .current
            .conversation_mut(conversation_id)
            .ok_or_else(|| BoardError::ConversationNotFound(conversation_id.to_owned()))?;
        conversation.unread_count = 0;
        let opened = conversation.clone();

        if let Some(visible) = self.view.conversation_mut(conversation_id) {
            visible.unread_count = 0;
        }
        Ok(opened)
    }

    /// Edit a conversation's contact details, last message or tags.
    ///
    /// # Errors
    ///
    /// - `Blank` for an empty contact name.
    /// - `TagNotFound` for a tag id outside the catalog.
    /// - `ConversationNotFound` for an unknown id.
    pub fn update_conversation(&mut self, conversation_id: &str, patch: &ConversationPatch) -> Result<Conversation, BoardError> {
        if let Some(name) = &patch.contact_name {
            require(name, "contact name")?;
        }
        let tags = patch
            .tag_ids
            .as_ref()
            .map(|ids| self.resolve_tags(ids.iter().map(String::as_str)))
            .transpose()?;
        let conversation = self
            .current
            .conversation_mut(conversation_id)
            .ok_or_else(|| BoardError::ConversationNotFound(conversation_id.to_owned()))?;
        patch.apply(conversation, tags.as_deref());
        let updated = conversation.clone();

        if let Some(visible) = self.view.conversation_mut(conversation_id) {
            patch.apply(visible, tags.as_deref());
        }
        Ok(updated)
    }

    /// Hand a conversation to another attendant.
    ///
    /// The conversation is removed from the selected attendant's board and
    /// returned in the notice, but it is NOT placed on the destination
    /// board: the destination board stays as it was. Callers that want the
    /// conversation to survive must re-add it themselves.
    ///
    /// # Errors
    ///
    /// - `PermissionDenied` unless the selected attendant may transfer
    ///   conversations.
    /// - `SameAttendant` when `attendant_id` is the selected attendant.
    /// - `AttendantNotFound` / `ColumnNotFound` for an unknown destination.
    /// - `ConversationNotFound` if the conversation is not on the board.
    pub fn change_attendant(
        &mut self,
        conversation_id: &str,
        attendant_id: &str,
        column_id: &str,
    ) -> Result<AttendantTransfer, BoardError> {
        self.authorize(Permission::TransferConversations)?;
        if attendant_id == self.active {
            return Err(BoardError::SameAttendant(attendant_id.to_owned()));
        }
        let destination = self
            .parked
            .get(attendant_id)
            .ok_or_else(|| BoardError::AttendantNotFound(attendant_id.to_owned()))?;
        if !destination.has_column(column_id) {
            return Err(BoardError::ColumnNotFound(column_id.to_owned()));
        }

        let conversation = self
            .current
            .remove_conversation(conversation_id)
            .ok_or_else(|| BoardError::ConversationNotFound(conversation_id.to_owned()))?;
        self.view.remove_conversation(conversation_id);

        let notice = format!(
            "Conversation with {} transferred to {}",
            conversation.contact_name,
            self.attendant_name(attendant_id)
        );
        info!(
            conversation_id,
            from = %self.active,
            to = attendant_id,
            column_id,
            "conversation transferred; destination board not updated"
        );

        Ok(AttendantTransfer {
            conversation,
            from_attendant: self.active.clone(),
            to_attendant: attendant_id.to_owned(),
            to_column: column_id.to_owned(),
            notice,
        })
    }
}

// =============================================================================
// ATTENDANTS
// =============================================================================

impl BoardManager {
    /// Add an attendant with the `attendant` role and every permission
    /// granted. Their board starts with the first attendant's columns and no
    /// conversations.
    ///
    /// # Errors
    ///
    /// Returns `Blank` for an empty name or email and `InvalidEmail` for a
    /// malformed address.
    pub fn add_attendant(&mut self, name: &str, email: &str, avatar: &str) -> Result<Attendant, BoardError> {
        let name = require(name, "attendant name")?;
        let email = require(email, "attendant email")?;
        if !is_valid_email(&email) {
            return Err(BoardError::InvalidEmail(email));
        }
        let skeleton = self
            .attendants
            .first()
            .and_then(|a| self.board_for(&a.id))
            .map(Board::skeleton)
            .unwrap_or_default();

        let attendant = Attendant {
            id: self.ids.next("att"),
            name,
            email,
            avatar: avatar.trim().to_owned(),
            active: true,
            role: Role::Attendant,
            permissions: Permissions::default(),
        };
        self.parked.insert(attendant.id.clone(), skeleton);
        self.attendants.push(attendant.clone());

        info!(attendant_id = %attendant.id, "attendant added");
        Ok(attendant)
    }

    /// Toggle an attendant's `active` flag.
    ///
    /// # Errors
    ///
    /// Returns `AttendantNotFound` for an unknown id.
    pub fn set_attendant_active(&mut self, attendant_id: &str, active: bool) -> Result<Attendant, BoardError> {
        let attendant = self
            .attendants
            .iter_mut()
            .find(|a| a.id == attendant_id)
            .ok_or_else(|| BoardError::AttendantNotFound(attendant_id.to_owned()))?;
        attendant.active = active;
        Ok(attendant.clone())
    }

    /// Grant or revoke one permission.
    ///
    /// # Errors
    ///
    /// Returns `AttendantNotFound` for an unknown id.
    pub fn set_permission(&mut self, attendant_id: &str, permission: Permission, enabled: bool) -> Result<Attendant, BoardError> {
        let attendant = self
            .attendants
            .iter_mut()
            .find(|a| a.id == attendant_id)
            .ok_or_else(|| BoardError::AttendantNotFound(attendant_id.to_owned()))?;
        attendant.permissions.set(permission, enabled);
        info!(attendant_id, %permission, enabled, "permission changed");
        Ok(attendant.clone())
    }

    /// Remove an attendant and their board.
    ///
    /// # Errors
    ///
    /// Returns `AttendantSelected` for the selected attendant and
    /// `AttendantNotFound` for an unknown id.
    pub fn remove_attendant(&mut self, attendant_id: &str) -> Result<Attendant, BoardError> {
        if attendant_id == self.active {
            return Err(BoardError::AttendantSelected(attendant_id.to_owned()));
        }
        let pos = self
            .attendants
            .iter()
            .position(|a| a.id == attendant_id)
            .ok_or_else(|| BoardError::AttendantNotFound(attendant_id.to_owned()))?;

        self.parked.remove(attendant_id);
        let removed = self.attendants.remove(pos);
        info!(attendant_id, "attendant removed");
        Ok(removed)
    }
}

// =============================================================================
// TAGS
// =============================================================================

impl BoardManager {
    /// Add a tag to the catalog.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` unless the selected attendant may create
    /// tags, and `Blank` for an empty name.
    pub fn create_tag(&mut self, name: &str, color: TagColor) -> Result<Tag, BoardError> {
        self.authorize(Permission::CreateTags)?;
        let name = require(name, "tag name")?;
        let tag = Tag { id: self.ids.next("tag"), name, color };
        self.tags.push(tag.clone());
        Ok(tag)
    }

    /// Rename and/or recolor a tag. The change is applied to every
    /// conversation carrying the tag on every board.
    ///
    /// # Errors
    ///
    /// Returns `Blank` for an empty name and `TagNotFound` for an unknown id.
    pub fn update_tag(&mut self, tag_id: &str, name: Option<&str>, color: Option<TagColor>) -> Result<Tag, BoardError> {
        let name = name.map(|n| require(n, "tag name")).transpose()?;
        let tag = self
            .tags
            .iter_mut()
            .find(|t| t.id == tag_id)
            .ok_or_else(|| BoardError::TagNotFound(tag_id.to_owned()))?;
        if let Some(name) = name {
            tag.name = name;
        }
        if let Some(color) = color {
            tag.color = color;
        }
        let updated = tag.clone();

        let relabel = |conv: &mut Conversation| {
            for t in conv.tags.iter_mut().filter(|t| t.id == updated.id) {
                t.clone_from(&updated);
            }
        };
        self.current.for_each_conversation_mut(relabel);
        self.snapshot.for_each_conversation_mut(relabel);
        self.view.for_each_conversation_mut(relabel);
        for board in self.parked.values_mut() {
            board.for_each_conversation_mut(relabel);
        }

        Ok(updated)
    }

    /// Remove a tag from the catalog. Conversations keep their copy.
    ///
    /// # Errors
    ///
    /// Returns `TagNotFound` for an unknown id.
    pub fn delete_tag(&mut self, tag_id: &str) -> Result<Tag, BoardError> {
        let pos = self
            .tags
            .iter()
            .position(|t| t.id == tag_id)
            .ok_or_else(|| BoardError::TagNotFound(tag_id.to_owned()))?;
        Ok(self.tags.remove(pos))
    }
}

#[cfg(test)]
#[path = "manager_test.rs"]
mod tests;
