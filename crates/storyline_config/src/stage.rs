//! Known pipeline stages.

use serde::{Deserialize, Serialize};

/// The stages of the animation script pipeline.
///
/// Stage names in a configuration document are plain strings, so documents may
/// name stages this enum does not know about. Anywhere a stage name is
/// accepted, a `Stage` works too.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use storyline_config::Stage;
///
/// assert_eq!(Stage::StoryboardDesign.as_ref(), "storyboard_design");
/// assert_eq!(Stage::from_str("viewer").unwrap(), Stage::Viewer);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    /// Rewrites the raw story so it reads clearly and completely
    StoryOptimization,
    /// Designs characters and plot points
    ScriptDesign,
    /// Breaks the script into storyboard shots
    StoryboardDesign,
    /// Watches the storyboard as an audience member would
    Viewer,
    /// Reviews the storyboard against the viewer's feedback
    Reviewer,
}
