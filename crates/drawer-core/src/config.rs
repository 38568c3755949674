//! Behavioural and appearance policy for one drawer presentation.
//!
//! A [`DrawerConfiguration`] is supplied once per presentation and never
//! mutated afterwards. It serializes to TOML-friendly tables; every field has
//! a default so partial presets only need to name what they override.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default offset of the upper and lower marks from the partial position.
pub const DEFAULT_MARK_GAP: f32 = 40.0;

/// Default release speed, in logical pixels per second, above which a drag
/// commits to an extreme regardless of position.
pub const DEFAULT_FLICK_SPEED_THRESHOLD: f32 = 2_000.0;

/// Default peak alpha of the dimming layer behind the drawer.
pub const DEFAULT_BACKGROUND_DIMMING_ALPHA: f32 = 0.5;

/// Default maximum corner radius of the drawer's top edge.
pub const DEFAULT_CORNER_RADIUS: f32 = 16.0;

/// Where the drawer's top edge rests when fully expanded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FullExpansionBehaviour {
    /// Top edge at the container's top.
    #[default]
    CoversFullScreen,
    /// Top edge just below the status bar.
    DoesNotCoverStatusBar,
    /// Top edge at a fixed distance from the container's top.
    LeavesCustomGap(f32),
}

/// How the corner radius follows the drawer's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CornerRadiusPolicy {
    /// Largest at the partial position, vanishing at both extremes.
    #[default]
    MaximumAtPartialY,
    /// Full radius whenever the top edge is below the status bar, shrinking
    /// as the drawer slides underneath it.
    AlwaysShowBelowStatusBar,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CornerRadius {
    pub maximum: f32,
    pub policy: CornerRadiusPolicy,
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self {
            maximum: DEFAULT_CORNER_RADIUS,
            policy: CornerRadiusPolicy::default(),
        }
    }
}

/// Grab handle drawn near the drawer's top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleConfiguration {
    pub visible: bool,
    pub width: f32,
    pub height: f32,
    pub top_margin: f32,
    /// Fade the handle in lockstep with the drawer's position.
    pub auto_animates_dimming: bool,
}

impl Default for HandleConfiguration {
    fn default() -> Self {
        Self {
            visible: true,
            width: 40.0,
            height: 5.0,
            top_margin: 8.0,
            auto_animates_dimming: true,
        }
    }
}

/// Immutable policy describing how a drawer rests, moves and looks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerConfiguration {
    pub full_expansion: FullExpansionBehaviour,
    /// Distance above the partial position where the upper decision mark sits.
    pub upper_mark_gap: f32,
    /// Distance below the partial position where the lower decision mark sits.
    pub lower_mark_gap: f32,
    /// Release speed above which positional reasoning is skipped. `0` disables
    /// flick commits.
    pub flick_speed_threshold: f32,
    pub supports_partial_expansion: bool,
    /// A fast downward release from above the upper mark stops at the partial
    /// position instead of collapsing.
    pub dismisses_in_stages: bool,
    pub background_dimming_alpha: f32,
    pub corner_radius: CornerRadius,
    pub handle: HandleConfiguration,
}

impl Default for DrawerConfiguration {
    fn default() -> Self {
        Self {
            full_expansion: FullExpansionBehaviour::default(),
            upper_mark_gap: DEFAULT_MARK_GAP,
            lower_mark_gap: DEFAULT_MARK_GAP,
            flick_speed_threshold: DEFAULT_FLICK_SPEED_THRESHOLD,
            supports_partial_expansion: true,
            dismisses_in_stages: false,
            background_dimming_alpha: DEFAULT_BACKGROUND_DIMMING_ALPHA,
            corner_radius: CornerRadius::default(),
            handle: HandleConfiguration::default(),
        }
    }
}

impl DrawerConfiguration {
    /// Checks every numeric field against the range the engine relies on.
    ///
    /// Negative gaps would break the `fullY <= upperMarkY <= partialY <=
    /// lowerMarkY <= H` ordering that classification depends on, so they are
    /// rejected here rather than silently clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let FullExpansionBehaviour::LeavesCustomGap(gap) = self.full_expansion {
            non_negative_distance("full_expansion.leaves_custom_gap", gap)?;
        }
        non_negative_distance("upper_mark_gap", self.upper_mark_gap)?;
        non_negative_distance("lower_mark_gap", self.lower_mark_gap)?;

        let threshold = self.flick_speed_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::NegativeSpeed {
                field: "flick_speed_threshold",
                value: threshold,
            });
        }

        let alpha = self.background_dimming_alpha;
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ConfigError::AlphaOutOfRange {
                field: "background_dimming_alpha",
                value: alpha,
            });
        }

        non_negative_distance("corner_radius.maximum", self.corner_radius.maximum)?;

        non_negative_distance("handle.width", self.handle.width)?;
        non_negative_distance("handle.height", self.handle.height)?;
        non_negative_distance("handle.top_margin", self.handle.top_margin)?;

        Ok(())
    }

    /// Whether the handle alpha follows the drawer position.
    pub fn handle_auto_animates(&self) -> bool {
        self.handle.visible && self.handle.auto_animates_dimming
    }
}

fn non_negative_distance(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeDistance { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_valid() {
        let config = DrawerConfiguration::default();
        assert_eq!(config.validate(), Ok(()));
        assert!(config.supports_partial_expansion);
        assert!(!config.dismisses_in_stages);
        assert!(config.handle_auto_animates());
    }

    #[test]
    fn negative_gap_is_rejected() {
        let config = DrawerConfiguration {
            lower_mark_gap: -1.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field(), "lower_mark_gap");
    }

    #[test]
    fn negative_custom_gap_is_rejected() {
        let config = DrawerConfiguration {
            full_expansion: FullExpansionBehaviour::LeavesCustomGap(-10.0),
            ..Default::default()
        };
        assert_eq!(
            config.validate().unwrap_err().field(),
            "full_expansion.leaves_custom_gap"
        );
    }

    #[test]
    fn nan_threshold_is_rejected() {
        let config = DrawerConfiguration {
            flick_speed_threshold: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeSpeed { .. })
        ));
    }

    #[test]
    fn dimming_alpha_above_one_is_rejected() {
        let config = DrawerConfiguration {
            background_dimming_alpha: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AlphaOutOfRange { .. })
        ));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: DrawerConfiguration = toml::from_str(
            r#"
full_expansion = { leaves_custom_gap = 64.0 }
dismisses_in_stages = true

[corner_radius]
policy = "always_show_below_status_bar"
"#,
        )
        .unwrap();

        assert_eq!(
            config.full_expansion,
            FullExpansionBehaviour::LeavesCustomGap(64.0)
        );
        assert!(config.dismisses_in_stages);
        assert_eq!(
            config.corner_radius.policy,
            CornerRadiusPolicy::AlwaysShowBelowStatusBar
        );
        assert_eq!(config.corner_radius.maximum, DEFAULT_CORNER_RADIUS);
        assert_eq!(config.upper_mark_gap, DEFAULT_MARK_GAP);
    }

    #[test]
    fn hidden_handle_is_not_animated() {
        let config: DrawerConfiguration = toml::from_str(
            r#"
[handle]
visible = false
"#,
        )
        .unwrap();
        assert!(!config.handle_auto_animates());
        assert_eq!(config.handle.width, HandleConfiguration::default().width);
    }

    #[test]
    fn unit_behaviour_parses_from_string() {
        let config: DrawerConfiguration =
            toml::from_str(r#"full_expansion = "does_not_cover_status_bar""#).unwrap();
        assert_eq!(
            config.full_expansion,
            FullExpansionBehaviour::DoesNotCoverStatusBar
        );
    }
}
