//! Robot identities: the four showcased variants and the six selectable
//! body regions, plus the colour palette each variant is painted with.

use std::fmt;
use std::str::FromStr;

use crate::error::SceneError;

/// Linear RGB colour, each channel in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    // System palette tones
    pub const MINT: Color = Color::rgb(0.0, 0.78, 0.75);
    pub const SKY: Color = Color::rgb(0.2, 0.68, 0.9);
    pub const AZURE: Color = Color::rgb(0.0, 0.48, 1.0);
    pub const PINK: Color = Color::rgb(1.0, 0.18, 0.33);
    pub const PURPLE: Color = Color::rgb(0.69, 0.32, 0.87);
    pub const INDIGO: Color = Color::rgb(0.35, 0.34, 0.84);
    pub const ORANGE: Color = Color::rgb(1.0, 0.58, 0.0);
    pub const YELLOW: Color = Color::rgb(1.0, 0.8, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.23, 0.19);
    pub const GREEN: Color = Color::rgb(0.2, 0.78, 0.35);
    pub const TEAL: Color = Color::rgb(0.19, 0.69, 0.78);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Copy with every channel clamped into `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }
}

/// Three-tone paint scheme of a variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RobotVariant {
    Optimus,
    Figure,
    UnitreeG1,
    Lingxi,
}

impl RobotVariant {
    pub const ALL: [RobotVariant; 4] = [
        RobotVariant::Optimus,
        RobotVariant::Figure,
        RobotVariant::UnitreeG1,
        RobotVariant::Lingxi,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            RobotVariant::Optimus => "Tesla Optimus",
            RobotVariant::Figure => "Figure AI",
            RobotVariant::UnitreeG1 => "Unitree G1",
            RobotVariant::Lingxi => "AgiBot Lingxi",
        }
    }

    pub fn localized_name(self) -> &'static str {
        match self {
            RobotVariant::Optimus => "Tesla Optimus",
            RobotVariant::Figure => "Figure AI",
            RobotVariant::UnitreeG1 => "宇树 G1",
            RobotVariant::Lingxi => "智元灵犀",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RobotVariant::Optimus => "Tesla's humanoid robot",
            RobotVariant::Figure => "Figure AI general-purpose robot",
            RobotVariant::UnitreeG1 => "Unitree Robotics G1 robot",
            RobotVariant::Lingxi => "AgiBot Lingxi robot",
        }
    }

    pub fn localized_description(self) -> &'static str {
        match self {
            RobotVariant::Optimus => "特斯拉人形机器人",
            RobotVariant::Figure => "Figure AI 智能机器人",
            RobotVariant::UnitreeG1 => "宇树科技 G1 机器人",
            RobotVariant::Lingxi => "智元机器人 灵犀",
        }
    }

    pub fn palette(self) -> Palette {
        let (primary, secondary, accent) = match self {
            RobotVariant::Optimus => (Color::MINT, Color::SKY, Color::AZURE),
            RobotVariant::Figure => (Color::PINK, Color::PURPLE, Color::INDIGO),
            RobotVariant::UnitreeG1 => (Color::ORANGE, Color::YELLOW, Color::RED),
            RobotVariant::Lingxi => (Color::GREEN, Color::TEAL, Color::MINT),
        };
        Palette {
            primary,
            secondary,
            accent,
        }
    }

    /// Symbol name used by the host UI for the variant's gallery card.
    pub fn icon(self) -> &'static str {
        match self {
            RobotVariant::Optimus => "bolt.fill",
            RobotVariant::Figure => "brain.head.profile",
            RobotVariant::UnitreeG1 => "leaf.fill",
            RobotVariant::Lingxi => "sparkles",
        }
    }

    /// Multiplier applied to limb radii and widths. Lengths never change.
    /// Illustrative values, not measured from the real robots.
    pub fn girth(self) -> f32 {
        match self {
            RobotVariant::Optimus => 1.0,
            RobotVariant::Figure => 0.95,
            RobotVariant::UnitreeG1 => 0.9,
            RobotVariant::Lingxi => 1.05,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            RobotVariant::Optimus => "optimus",
            RobotVariant::Figure => "figure",
            RobotVariant::UnitreeG1 => "unitree-g1",
            RobotVariant::Lingxi => "lingxi",
        }
    }
}

impl fmt::Display for RobotVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for RobotVariant {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        RobotVariant::ALL
            .into_iter()
            .find(|v| v.key() == key)
            .ok_or_else(|| SceneError::UnknownVariant(s.to_string()))
    }
}

/// Selectable sub-part of a robot. Closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyRegion {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyRegion {
    /// Canonical assembly order.
    pub const ALL: [BodyRegion; 6] = [
        BodyRegion::Head,
        BodyRegion::Torso,
        BodyRegion::LeftArm,
        BodyRegion::RightArm,
        BodyRegion::LeftLeg,
        BodyRegion::RightLeg,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            BodyRegion::Head => "Head",
            BodyRegion::Torso => "Torso",
            BodyRegion::LeftArm => "Left Arm",
            BodyRegion::RightArm => "Right Arm",
            BodyRegion::LeftLeg => "Left Leg",
            BodyRegion::RightLeg => "Right Leg",
        }
    }

    pub fn localized_name(self) -> &'static str {
        match self {
            BodyRegion::Head => "头部",
            BodyRegion::Torso => "躯干",
            BodyRegion::LeftArm => "左臂",
            BodyRegion::RightArm => "右臂",
            BodyRegion::LeftLeg => "左腿",
            BodyRegion::RightLeg => "右腿",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BodyRegion::Head => "Intelligent perception system",
            BodyRegion::Torso => "Core processing unit",
            BodyRegion::LeftArm | BodyRegion::RightArm => "Precision manipulator",
            BodyRegion::LeftLeg | BodyRegion::RightLeg => "Powered drive system",
        }
    }

    pub fn localized_description(self) -> &'static str {
        match self {
            BodyRegion::Head => "智能感知系统",
            BodyRegion::Torso => "核心处理单元",
            BodyRegion::LeftArm | BodyRegion::RightArm => "精密机械臂",
            BodyRegion::LeftLeg | BodyRegion::RightLeg => "动力驱动系统",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            BodyRegion::Head => "head",
            BodyRegion::Torso => "torso",
            BodyRegion::LeftArm => "left-arm",
            BodyRegion::RightArm => "right-arm",
            BodyRegion::LeftLeg => "left-leg",
            BodyRegion::RightLeg => "right-leg",
        }
    }

    pub fn is_limb(self) -> bool {
        !matches!(self, BodyRegion::Head | BodyRegion::Torso)
    }
}

impl fmt::Display for BodyRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for BodyRegion {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        BodyRegion::ALL
            .into_iter()
            .find(|r| r.key() == key)
            .ok_or_else(|| SceneError::UnknownRegion(s.to_string()))
    }
}
