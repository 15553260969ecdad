//! # Actions
//!
//! The closed set of things a transaction can ask the chain to do. Each
//! variant wraps a plain body struct; the body is what gets bincode-encoded
//! after the discriminant byte.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Register a new account under the signer's address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccount {
    pub name: String,
}

/// Append a post to the signer's account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPost {
    pub title: String,
    pub content: String,
}

/// A decoded transaction action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    CreateAccount(CreateAccount),
    AddPost(AddPost),
}

impl Action {
    pub fn create_account(name: impl Into<String>) -> Self {
        Self::CreateAccount(CreateAccount { name: name.into() })
    }

    pub fn add_post(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::AddPost(AddPost {
            title: title.into(),
            content: content.into(),
        })
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::CreateAccount(_) => ActionKind::CreateAccount,
            Self::AddPost(_) => ActionKind::AddPost,
        }
    }
}

/// Variant tag of an `Action`, without its fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionKind {
    CreateAccount,
    AddPost,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateAccount => f.write_str("CreateAccount"),
            Self::AddPost => f.write_str("AddPost"),
        }
    }
}
