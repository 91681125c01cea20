//! Wire DTOs for the activities backend.
//!
//! DESIGN
//! ======
//! Decoding is lenient in the same places the browser rendering was: missing
//! text fields become empty strings and a non-array roster becomes empty.
//! Anything structurally wrong (e.g. a non-object activity entry) still fails
//! the whole decode so the list falls back to its failure message.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{Error as _, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A schedulable offering with a capacity and a roster of participant emails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    /// Unique key; also the map key on the wire.
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    /// Participant emails in server order. Duplicates are kept.
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus current roster size. Negative when the server reports
    /// more participants than `max_participants`.
    pub fn spots_left(&self) -> i64 {
        let taken = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Body of one entry in `GET /activities`.
#[derive(Debug, Deserialize)]
struct ActivityDetails {
    #[serde(default, deserialize_with = "deserialize_text")]
    description: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    schedule: String,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    max_participants: i64,
    #[serde(default, deserialize_with = "deserialize_roster")]
    participants: Vec<String>,
}

/// Full activity collection, replaced wholesale on every fetch.
///
/// Entries keep the order of the JSON object they were decoded from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityCollection {
    activities: Vec<Activity>,
}

impl ActivityCollection {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Insert or replace by name. A replaced entry keeps its original position,
    /// matching how a repeated key behaves in a JSON object.
    fn upsert(&mut self, activity: Activity) {
        match self.activities.iter_mut().find(|a| a.name == activity.name) {
            Some(slot) => *slot = activity,
            None => self.activities.push(activity),
        }
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ActivityCollection;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut collection = ActivityCollection::default();
                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    collection.upsert(Activity {
                        name,
                        description: details.description,
                        schedule: details.schedule,
                        max_participants: details.max_participants,
                        participants: details.participants,
                    });
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}

/// Success body of the signup and unregister endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Error body of the signup and unregister endpoints.
///
/// `detail` is usually a string but validation errors may carry structured
/// JSON, which is shown in its serialized form.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Human-readable detail text, or `None` when absent or empty.
    pub fn detail_text(&self) -> Option<String> {
        let text = match self.detail.as_ref()? {
            serde_json::Value::Null => return None,
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        if text.is_empty() { None } else { Some(text) }
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_text(serde_json::Value::deserialize(deserializer)?))
}

fn deserialize_roster<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(items) => Ok(items.into_iter().map(value_to_text).collect()),
        _ => Ok(Vec::new()),
    }
}

fn value_to_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}
