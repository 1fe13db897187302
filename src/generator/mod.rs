//! Named, parameterized frame generators.
//!
//! A generator maps `(frame buffer, normalized time)` to a filled frame. Its parameter set is the
//! only state that outlives a generation call; it is read-only while a batch runs.

use crate::foundation::error::{SpriteError, SpriteResult};
use crate::frame::buffer::FrameBuffer;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Parameter edit interaction tracking.
pub mod edit;
/// Looping zig-zag beam generator.
pub mod lightning_beam;
/// Name to factory map of available generators.
pub mod registry;
/// Eased capsule swipe generator.
pub mod slash_trail;

/// Capability set every generator provides.
///
/// `generate` is called concurrently from several workers, each with a distinct frame, so
/// implementations must only read `&self`.
pub trait FrameGenerator: Send + Sync {
    /// Display name, also the registry key.
    fn name(&self) -> &'static str;

    /// Whether the animation is periodic.
    ///
    /// Looping generators receive `t = i / N`; others receive `t = i / (N - 1)`.
    fn is_looping(&self) -> bool;

    /// Fill `frame` for normalized time `t` in `[0, 1]`.
    fn generate(&self, frame: &mut FrameBuffer, t: f64) -> SpriteResult<()>;

    /// Current parameter set as a JSON object.
    fn params(&self) -> SpriteResult<serde_json::Value>;

    /// Merge a JSON object patch into the parameter set.
    ///
    /// Returns `true` when any parameter changed. Unknown keys and mistyped values are
    /// rejected and leave the parameters untouched.
    fn edit_params(&mut self, patch: &serde_json::Value) -> SpriteResult<bool>;
}

impl std::fmt::Debug for dyn FrameGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameGenerator")
            .field("name", &self.name())
            .field("looping", &self.is_looping())
            .finish()
    }
}

/// Serialize a parameter struct.
pub(crate) fn params_to_json<P: Serialize>(params: &P) -> SpriteResult<serde_json::Value> {
    serde_json::to_value(params).map_err(|e| SpriteError::serde(e.to_string()))
}

/// Shallow-merge `patch` over `current`, replacing it only if the result parses and differs.
pub(crate) fn merge_params<P>(current: &mut P, patch: &serde_json::Value) -> SpriteResult<bool>
where
    P: Serialize + DeserializeOwned + PartialEq,
{
    let serde_json::Value::Object(patch) = patch else {
        return Err(SpriteError::validation(
            "parameter patch must be a JSON object",
        ));
    };

    let mut merged = params_to_json(current)?;
    let Some(fields) = merged.as_object_mut() else {
        return Err(SpriteError::serde("parameter set is not a JSON object"));
    };
    for (key, value) in patch {
        fields.insert(key.clone(), value.clone());
    }

    let next: P = serde_json::from_value(merged)
        .map_err(|e| SpriteError::validation(format!("invalid parameter patch: {e}")))?;
    if next == *current {
        return Ok(false);
    }
    *current = next;
    Ok(true)
}

#[cfg(test)]
#[path = "../../tests/unit/generator/params.rs"]
mod tests;
