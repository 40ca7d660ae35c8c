#![allow(dead_code)]
//! JSON document envelope: import and export of characters and animations.
//!
//! Documents look like `{ "version": "1.0", "type": "character", "data": … }`.
//! Parsing is two-phase: read the `type` field first, then decode the whole
//! document against the payload schema that type names. Payloads are decoded
//! straight from the input text; routing them through `serde_json::Value`
//! would re-order the assignment maps that carry draw order.

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::error::PuppetError;
use crate::timeline::Animation;

/// Envelope format version written by exports.
pub const FORMAT_VERSION: &str = "1.0";

/// First pass: just the discriminator. A document without a `type` field is
/// treated as carrying the empty type, not as malformed JSON.
#[derive(Deserialize)]
struct Header {
    #[serde(rename = "type")]
    #[serde(default)]
    kind: String,
}

/// Second pass: the payload under the schema the header named.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Payload<T> {
    #[serde(default)]
    data: Option<T>,
}

#[derive(Serialize)]
struct Envelope<'a, T> {
    version: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    data: &'a T,
}

/// A successfully imported payload.
#[derive(Clone, Debug, PartialEq)]
pub enum Document {
    Character(Character),
    Animation(Animation),
}

/// Parse a document string.
///
/// The envelope's `type` decides the payload schema; an unrecognized type or
/// a missing payload is rejected before any payload decode. Invariant
/// findings on a decoded animation are logged and accepted, never fatal.
pub fn import_document(json: &str) -> Result<Document, PuppetError> {
    let header: Header = serde_json::from_str(json)?;
    match header.kind.as_str() {
        "character" => {
            let payload: Payload<Character> = serde_json::from_str(json)?;
            let character = payload.data.ok_or(PuppetError::MissingPayload)?;
            log::debug!("imported character '{}'", character.id);
            Ok(Document::Character(character))
        }
        "animation" => {
            let payload: Payload<Animation> = serde_json::from_str(json)?;
            let animation = payload.data.ok_or(PuppetError::MissingPayload)?;
            if let Err(err) = animation.validate_basic() {
                log::warn!("imported animation '{}' with findings: {err}", animation.id);
            }
            log::debug!("imported animation '{}'", animation.id);
            Ok(Document::Animation(animation))
        }
        other => Err(PuppetError::UnknownDocumentType {
            kind: other.to_string(),
        }),
    }
}

fn export<T: Serialize>(kind: &str, data: &T) -> Result<String, PuppetError> {
    let envelope = Envelope {
        version: FORMAT_VERSION,
        kind,
        data,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Serialize a character under the document envelope, pretty-printed.
pub fn export_character(character: &Character) -> Result<String, PuppetError> {
    export("character", character)
}

/// Serialize an animation under the document envelope, pretty-printed.
pub fn export_animation(animation: &Animation) -> Result<String, PuppetError> {
    export("animation", animation)
}
