//! Geofence records and their derived monitoring regions.
//!
//! The data model for the persisted geofence list: [`Geotification`] holds
//! the circle, identifier, note and trigger direction; [`MonitoringRegion`]
//! is the descriptor derived from it on demand; [`codec`] is the
//! encode/decode contract for the persisted record format.

pub mod codec;
mod event;
mod record;
mod region;

pub use codec::{decode_record, encode_record, DecodeError, DecodePolicy, RecordMap};
pub use event::{EventType, UnknownEventType};
pub use record::{Geotification, NO_NOTE_TITLE};
pub use region::MonitoringRegion;
