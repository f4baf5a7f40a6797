//! Persisted-record codec for the geofence list.
//!
//! A record is a keyed map with six scalar fields. Five of them are strictly
//! typed: a missing or type-mismatched `latitude`, `longitude`, `radius`,
//! `identifier` or `note` fails the decode. The `eventType` label must be a
//! string, but an unrecognized value is handled per [`DecodePolicy`]: the
//! historical behavior degrades it to `On Entry` so old data keeps loading.

use std::str::FromStr;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::coord::Coordinate;

use super::event::EventType;
use super::record::Geotification;

/// Field keys of the persisted record format.
pub const KEY_LATITUDE: &str = "latitude";
pub const KEY_LONGITUDE: &str = "longitude";
pub const KEY_RADIUS: &str = "radius";
pub const KEY_IDENTIFIER: &str = "identifier";
pub const KEY_NOTE: &str = "note";
pub const KEY_EVENT_TYPE: &str = "eventType";

/// A serialized geofence record: a keyed map of scalar values.
pub type RecordMap = Map<String, Value>;

/// Record decode errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A required field is absent from the record map
    #[error("Missing field '{0}' in geofence record")]
    MissingField(&'static str),

    /// A required field is present but holds the wrong type
    #[error("Field '{field}' in geofence record is not a {expected}")]
    MalformedField {
        field: &'static str,
        expected: &'static str,
    },

    /// The event type label names no known variant (strict policy only)
    #[error("Unknown event type label '{0}' in geofence record")]
    UnknownEventType(String),
}

/// How decode treats an unrecognized event type label.
///
/// `Lenient` keeps the historical behavior: unknown labels degrade to
/// `On Entry` with a warning, so existing data keeps loading even when a
/// label was corrupted. `Strict` surfaces the label as a decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    #[default]
    Lenient,
    Strict,
}

impl DecodePolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            DecodePolicy::Lenient => "lenient",
            DecodePolicy::Strict => "strict",
        }
    }
}

impl std::fmt::Display for DecodePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecodePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lenient" => Ok(DecodePolicy::Lenient),
            "strict" => Ok(DecodePolicy::Strict),
            other => Err(format!("unknown decode policy '{}'", other)),
        }
    }
}

fn float_field(map: &RecordMap, key: &'static str) -> Result<f64, DecodeError> {
    map.get(key)
        .ok_or(DecodeError::MissingField(key))?
        .as_f64()
        .ok_or(DecodeError::MalformedField {
            field: key,
            expected: "number",
        })
}

fn string_field<'a>(map: &'a RecordMap, key: &'static str) -> Result<&'a str, DecodeError> {
    map.get(key)
        .ok_or(DecodeError::MissingField(key))?
        .as_str()
        .ok_or(DecodeError::MalformedField {
            field: key,
            expected: "string",
        })
}

/// Decode a persisted record map into a [`Geotification`].
///
/// # Errors
///
/// Fails when any of the five strictly-typed fields is missing or holds the
/// wrong type, when `eventType` is missing or not a string, or - under
/// [`DecodePolicy::Strict`] only - when the event type label is unknown.
pub fn decode_record(map: &RecordMap, policy: DecodePolicy) -> Result<Geotification, DecodeError> {
    let latitude = float_field(map, KEY_LATITUDE)?;
    let longitude = float_field(map, KEY_LONGITUDE)?;
    let radius = float_field(map, KEY_RADIUS)?;
    let identifier = string_field(map, KEY_IDENTIFIER)?;
    let note = string_field(map, KEY_NOTE)?;
    let label = string_field(map, KEY_EVENT_TYPE)?;

    let event_type = match label.parse::<EventType>() {
        Ok(event) => event,
        Err(_) if policy == DecodePolicy::Lenient => {
            tracing::warn!(label, "unrecognized event type label, using On Entry");
            EventType::OnEntry
        }
        Err(_) => return Err(DecodeError::UnknownEventType(label.to_string())),
    };

    Ok(Geotification::new(
        Coordinate::new(latitude, longitude),
        radius,
        identifier,
        note,
        event_type,
    ))
}

/// Encode a [`Geotification`] as a persisted record map.
///
/// Round-trips with [`decode_record`] for any record whose event type is one
/// of the two known variants.
pub fn encode_record(record: &Geotification) -> RecordMap {
    let mut map = RecordMap::new();
    map.insert(KEY_LATITUDE.to_string(), record.center.latitude.into());
    map.insert(KEY_LONGITUDE.to_string(), record.center.longitude.into());
    map.insert(KEY_RADIUS.to_string(), record.radius.into());
    map.insert(KEY_IDENTIFIER.to_string(), record.identifier.clone().into());
    map.insert(KEY_NOTE.to_string(), record.note.clone().into());
    map.insert(KEY_EVENT_TYPE.to_string(), record.event_type.label().into());
    map
}
