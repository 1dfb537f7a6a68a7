//! Quick replies: saved message snippets an attendant inserts by typing
//! `/<key>` in the composer.
//!
//! Keys are ASCII alphanumeric and unique across the book. Lookups by key
//! are exact (case-sensitive).

use serde::Serialize;
use tracing::info;

use crate::error::ErrorCode;
use crate::services::ids::IdGenerator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickReply {
    pub id: String,
    pub key: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuickReplyError {
    #[error("key must not be empty")]
    EmptyKey,
    #[error("key must contain only letters and digits: {0}")]
    InvalidKey(String),
    #[error("key already in use: {0}")]
    DuplicateKey(String),
    #[error("message must not be empty")]
    EmptyMessage,
    #[error("quick reply not found: {0}")]
    NotFound(String),
}

impl ErrorCode for QuickReplyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyKey => "E_EMPTY_KEY",
            Self::InvalidKey(_) => "E_INVALID_KEY",
            Self::DuplicateKey(_) => "E_DUPLICATE_KEY",
            Self::EmptyMessage => "E_EMPTY_MESSAGE",
            Self::NotFound(_) => "E_QUICK_REPLY_NOT_FOUND",
        }
    }
}

#[derive(Debug, Default)]
pub struct QuickReplyBook {
    ids: IdGenerator,
    replies: Vec<QuickReply>,
}

impl QuickReplyBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn list(&self) -> &[QuickReply] {
        &self.replies
    }

    #[must_use]
    pub fn find_by_key(&self, key: &str) -> Option<&QuickReply> {
        self.replies.iter().find(|r| r.key == key)
    }

    /// Save a new snippet.
    ///
    /// # Errors
    ///
    /// Any validation failure on `key` or `message`.
    pub fn add(&mut self, key: &str, message: &str) -> Result<QuickReply, QuickReplyError> {
        let (key, message) = self.validate(None, key, message)?;
        let reply = QuickReply { id: self.ids.next("msg"), key, message };
        self.replies.push(reply.clone());
        info!(id = %reply.id, key = %reply.key, "quick reply added");
        Ok(reply)
    }

    /// Replace key and message of an existing snippet.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, otherwise any validation failure. The
    /// snippet may keep its own key.
    pub fn update(&mut self, id: &str, key: &str, message: &str) -> Result<QuickReply, QuickReplyError> {
        let pos = self.position(id)?;
        let (key, message) = self.validate(Some(id), key, message)?;
        let reply = &mut self.replies[pos];
        reply.key = key;
        reply.message = message;
        Ok(reply.clone())
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub fn delete(&mut self, id: &str) -> Result<QuickReply, QuickReplyError> {
        let pos = self.position(id)?;
        Ok(self.replies.remove(pos))
    }

    fn position(&self, id: &str) -> Result<usize, QuickReplyError> {
        self.replies
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| QuickReplyError::NotFound(id.to_owned()))
    }

    fn validate(&self, editing: Option<&str>, key: &str, message: &str) -> Result<(String, String), QuickReplyError> {
        if key.is_empty() {
            return Err(QuickReplyError::EmptyKey);
        }
        if !key.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(QuickReplyError::InvalidKey(key.to_owned()));
        }
        if self
            .replies
            .iter()
            .any(|r| r.key == key && Some(r.id.as_str()) != editing)
        {
            return Err(QuickReplyError::DuplicateKey(key.to_owned()));
        }
        if message.trim().is_empty() {
            return Err(QuickReplyError::EmptyMessage);
        }
        Ok((key.to_owned(), message.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_find_by_key() {
        let mut book = QuickReplyBook::new();
        let reply = book.add("ola", "Olá! Como posso ajudar?").unwrap();
        assert!(reply.id.starts_with("msg-"));
        assert_eq!(book.find_by_key("ola"), Some(&reply));
        assert!(book.find_by_key("OLA").is_none());
        assert_eq!(book.list().len(), 1);
    }

    #[test]
    fn add_rejects_bad_keys() {
        let mut book = QuickReplyBook::new();
        assert_eq!(book.add("", "x").unwrap_err(), QuickReplyError::EmptyKey);
        assert_eq!(book.add("bom dia", "x").unwrap_err(), QuickReplyError::InvalidKey("bom dia".into()));
        assert_eq!(book.add("preço", "x").unwrap_err(), QuickReplyError::InvalidKey("preço".into()));
        assert!(book.list().is_empty());
    }

    #[test]
    fn surrounding_whitespace_makes_key_invalid() {
        let mut book = QuickReplyBook::new();
        assert_eq!(book.add(" ola", "x").unwrap_err(), QuickReplyError::InvalidKey(" ola".into()));
        assert_eq!(book.add("ola ", "x").unwrap_err(), QuickReplyError::InvalidKey("ola ".into()));
        assert_eq!(book.add("  ", "x").unwrap_err(), QuickReplyError::InvalidKey("  ".into()));

        let reply = book.add("ola", "Olá!").unwrap();
        assert_eq!(book.update(&reply.id, "ola\n", "Olá!").unwrap_err(), QuickReplyError::InvalidKey("ola\n".into()));
        assert_eq!(book.find_by_key("ola"), Some(&reply));
    }

    #[test]
    fn add_rejects_duplicate_key_and_empty_message() {
        let mut book = QuickReplyBook::new();
        book.add("ola", "Olá!").unwrap();
        assert_eq!(book.add("ola", "Oi").unwrap_err(), QuickReplyError::DuplicateKey("ola".into()));
        assert_eq!(book.add("tchau", "   ").unwrap_err(), QuickReplyError::EmptyMessage);
        assert_eq!(QuickReplyError::EmptyMessage.error_code(), "E_EMPTY_MESSAGE");
    }

    #[test]
    fn update_may_keep_own_key_but_not_take_another() {
        let mut book = QuickReplyBook::new();
        let ola = book.add("ola", "Olá!").unwrap();
        book.add("tchau", "Até logo!").unwrap();

        let updated = book.update(&ola.id, "ola", "Olá, tudo bem?").unwrap();
        assert_eq!(updated.message, "Olá, tudo bem?");
        assert_eq!(book.update(&ola.id, "tchau", "x").unwrap_err(), QuickReplyError::DuplicateKey("tchau".into()));
        assert_eq!(book.update("msg-0", "x", "y").unwrap_err(), QuickReplyError::NotFound("msg-0".into()));
    }

    #[test]
    fn delete_removes_entry() {
        let mut book = QuickReplyBook::new();
        let reply = book.add("ola", "Olá!").unwrap();
        assert_eq!(book.delete(&reply.id).unwrap(), reply);
        assert!(book.list().is_empty());
        assert!(book.delete(&reply.id).is_err());
    }
}
