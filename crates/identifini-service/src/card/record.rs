//! The card shape used for contact export.

use serde::Deserialize;
use serde_json::Value;

use identifini_db::model::card::Card;

use crate::error::{ServiceError, ServiceResult};

/// What a floating action does, decided by its `type` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatingActionKind {
    Call,
    WhatsApp,
    Email,
    /// Any other action (links, maps, socials); not exported.
    Other,
}

impl FloatingActionKind {
    #[must_use]
    pub fn from_type(action_type: &str) -> Self {
        match action_type {
            "Call" => Self::Call,
            "WhatsApp" | "Whatsapp" => Self::WhatsApp,
            "Email" => Self::Email,
            _ => Self::Other,
        }
    }
}

/// A quick-access contact button on a card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FloatingAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub url: String,
}

impl FloatingAction {
    #[must_use]
    pub fn new(action_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            url: url.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FloatingActionKind {
        FloatingActionKind::from_type(&self.action_type)
    }
}

/// Floating actions as they come out of storage.
///
/// Older cards hold the list serialized into a JSON string; newer ones hold
/// the list itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FloatingActionsInput {
    RawJson(String),
    List(Vec<FloatingAction>),
}

impl Default for FloatingActionsInput {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl FloatingActionsInput {
    /// ## Summary
    /// Normalizes the input into a list of actions.
    ///
    /// A raw string that is not a JSON array yields an empty list; entries
    /// without a string `type` and `url` are dropped. Both cases are logged.
    #[must_use]
    pub fn actions(&self) -> Vec<FloatingAction> {
        match self {
            Self::List(actions) => actions.clone(),
            Self::RawJson(raw) => match serde_json::from_str::<Vec<Value>>(raw) {
                Ok(entries) => parse_entries(entries),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring floating actions that are not a JSON array");
                    Vec::new()
                }
            },
        }
    }
}

impl From<Option<Value>> for FloatingActionsInput {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(Value::String(raw)) => Self::RawJson(raw),
            Some(Value::Array(entries)) => Self::List(parse_entries(entries)),
            None | Some(Value::Null) => Self::default(),
            Some(other) => {
                tracing::warn!(kind = json_kind(&other), "Ignoring floating actions of unexpected JSON kind");
                Self::default()
            }
        }
    }
}

fn parse_entries(entries: Vec<Value>) -> Vec<FloatingAction> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(action) => Some(action),
            Err(e) => {
                tracing::warn!(index, error = %e, "Dropping malformed floating action");
                None
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// ## Summary
/// A card that is fit for export.
///
/// `display_name` is always non-empty. Optional text fields are `None`
/// rather than empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub display_name: String,
    pub card_pic: Option<String>,
    pub floating_actions: FloatingActionsInput,
    pub card_email: Option<String>,
    pub display_address: Option<String>,
    pub bio: Option<String>,
    pub card_username: String,
}

impl CardRecord {
    /// Creates a record with just the required fields.
    #[must_use]
    pub fn new(display_name: impl Into<String>, card_username: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            card_pic: None,
            floating_actions: FloatingActionsInput::default(),
            card_email: None,
            display_address: None,
            bio: None,
            card_username: card_username.into(),
        }
    }
}

impl TryFrom<Card> for CardRecord {
    type Error = ServiceError;

    fn try_from(card: Card) -> ServiceResult<Self> {
        let display_name = non_empty(card.display_name)
            .ok_or(ServiceError::MissingRequiredField("display_name"))?;

        Ok(Self {
            display_name,
            card_pic: non_empty(card.card_pic),
            floating_actions: card.floating_actions.into(),
            card_email: non_empty(card.card_email),
            display_address: non_empty(card.display_address),
            bio: non_empty(card.bio),
            card_username: card.card_username,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
