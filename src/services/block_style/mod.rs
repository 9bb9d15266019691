//! Visual state resolution for scheduled blocks.
//!
//! Block visuals are decided by [`RULES`], an ordered table of
//! `(predicate, style)` pairs evaluated top-down. The first matching rule
//! wins; a confirmed block with no other state falls through to
//! [`DEFAULT_STYLE`]. Keeping the priority in one table makes "which visual
//! wins" readable and testable row by row.

use crate::models::block::{BlockState, Commitment, Defense, Persistence, Provenance, Risk};

pub const NEUTRAL_HUE: &str = "#8d8d8d";
pub const RISK_HUE: &str = "#da1e28";
pub const WARNING_HUE: &str = "#ff832b";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaLevel {
    Low,
    Med,
    High,
}

impl AlphaLevel {
    pub fn fill_alpha(&self) -> f32 {
        match self {
            AlphaLevel::Low => 0.1,
            AlphaLevel::Med => 0.2,
            AlphaLevel::High => 0.35,
        }
    }

    pub fn border_alpha(&self) -> f32 {
        match self {
            AlphaLevel::Low => 0.3,
            AlphaLevel::Med => 0.6,
            AlphaLevel::High => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
}

/// Where a colour comes from when a rule is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hue {
    /// The block's own identity colour
    Identity,
    Neutral,
    Fixed(&'static str),
}

impl Hue {
    fn resolve(&self, identity: &str) -> String {
        match self {
            Hue::Identity => identity.to_string(),
            Hue::Neutral => NEUTRAL_HUE.to_string(),
            Hue::Fixed(hex) => (*hex).to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleStyle {
    pub fill: Hue,
    pub fill_alpha: AlphaLevel,
    pub border_style: BorderStyle,
    pub border_width: u8,
    pub border_color: Hue,
    pub border_alpha: AlphaLevel,
    pub rail_muted: bool,
}

pub struct StyleRule {
    pub name: &'static str,
    pub applies: fn(&BlockState) -> bool,
    pub style: RuleStyle,
}

pub const DEFAULT_STYLE: RuleStyle = RuleStyle {
    fill: Hue::Identity,
    fill_alpha: AlphaLevel::Med,
    border_style: BorderStyle::Solid,
    border_width: 1,
    border_color: Hue::Identity,
    border_alpha: AlphaLevel::Low,
    rail_muted: false,
};

/// Priority order: sync error, risk breach, risk watch, in progress,
/// canceled, AI draft, changed, completed, tentative.
pub const RULES: &[StyleRule] = &[
    StyleRule {
        name: "sync_error",
        applies: |s| s.persistence == Persistence::SyncError,
        style: RuleStyle {
            fill: Hue::Neutral,
            fill_alpha: AlphaLevel::Low,
            border_width: 2,
            border_color: Hue::Fixed(RISK_HUE),
            ..DEFAULT_STYLE
        },
    },
    StyleRule {
        name: "risk_breach",
        applies: |s| s.risk == Risk::Breach,
        style: RuleStyle {
            border_width: 2,
            border_color: Hue::Fixed(RISK_HUE),
            ..DEFAULT_STYLE
        },
    },
    StyleRule {
        name: "risk_watch",
        applies: |s| s.risk == Risk::Watch,
        style: RuleStyle {
            border_style: BorderStyle::Dashed,
            border_width: 2,
            border_color: Hue::Fixed(WARNING_HUE),
            ..DEFAULT_STYLE
        },
    },
    StyleRule {
        name: "in_progress",
        applies: |s| s.commitment == Commitment::InProgress,
        style: RuleStyle {
            fill_alpha: AlphaLevel::High,
            border_width: 2,
            border_alpha: AlphaLevel::High,
            ..DEFAULT_STYLE
        },
    },
    StyleRule {
        name: "canceled",
        applies: |s| s.commitment == Commitment::Canceled,
        style: RuleStyle {
            fill: Hue::Neutral,
            fill_alpha: AlphaLevel::Low,
            border_style: BorderStyle::Dashed,
            border_color: Hue::Neutral,
            rail_muted: true,
            ..DEFAULT_STYLE
        },
    },
    StyleRule {
        name: "ai_draft",
        applies: |s| s.commitment == Commitment::AiDraft,
        style: RuleStyle {
            fill_alpha: AlphaLevel::Low,
            border_style: BorderStyle::Dotted,
            border_alpha: AlphaLevel::Med,
            rail_muted: true,
            ..DEFAULT_STYLE
        },
    },
    StyleRule {
        name: "changed",
        applies: |s| s.commitment == Commitment::Changed,
        style: RuleStyle {
            fill_alpha: AlphaLevel::Low,
            border_style: BorderStyle::Dotted,
            border_alpha: AlphaLevel::High,
            ..DEFAULT_STYLE
        },
    },
    StyleRule {
        name: "completed",
        applies: |s| s.commitment == Commitment::Completed,
        style: RuleStyle {
            fill: Hue::Neutral,
            fill_alpha: AlphaLevel::Low,
            border_color: Hue::Neutral,
            rail_muted: true,
            ..DEFAULT_STYLE
        },
    },
    StyleRule {
        name: "tentative",
        applies: |s| s.commitment == Commitment::Tentative,
        style: RuleStyle {
            fill_alpha: AlphaLevel::Low,
            border_style: BorderStyle::Dashed,
            border_alpha: AlphaLevel::Med,
            ..DEFAULT_STYLE
        },
    },
];

/// Concrete visual for one block
#[derive(Debug, Clone, PartialEq)]
pub struct BlockVisual {
    pub fill_color: String,
    pub fill_alpha: f32,
    pub border_style: BorderStyle,
    pub border_width: u8,
    pub border_color: String,
    pub border_alpha: f32,
    pub rail_muted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Provenance(Provenance),
    Syncing,
    NotSaved,
    Moved,
    Tentative,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Provenance(source) => source.label(),
            Badge::Syncing => "Syncing…",
            Badge::NotSaved => "Not saved",
            Badge::Moved => "Moved",
            Badge::Tentative => "Tentative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Lock,
    Spinner,
    Error,
    Check,
}

/// First rule matching `state`, if any
pub fn matching_rule(state: &BlockState) -> Option<&'static StyleRule> {
    RULES.iter().find(|rule| (rule.applies)(state))
}

/// Resolve the visual for a block whose identity colour is `identity_hue`
pub fn resolve(state: &BlockState, identity_hue: &str) -> BlockVisual {
    let style = matching_rule(state)
        .map(|rule| rule.style)
        .unwrap_or(DEFAULT_STYLE);

    BlockVisual {
        fill_color: style.fill.resolve(identity_hue),
        fill_alpha: style.fill_alpha.fill_alpha(),
        border_style: style.border_style,
        border_width: style.border_width,
        border_color: style.border_color.resolve(identity_hue),
        border_alpha: style.border_alpha.border_alpha(),
        rail_muted: style.rail_muted,
    }
}

pub fn badges(state: &BlockState) -> Vec<Badge> {
    let mut badges = Vec::new();
    if let Some(source) = state.provenance {
        badges.push(Badge::Provenance(source));
    }
    if state.persistence == Persistence::SyncPending {
        badges.push(Badge::Syncing);
    }
    if state.persistence == Persistence::SyncError {
        badges.push(Badge::NotSaved);
    }
    if state.commitment == Commitment::Changed {
        badges.push(Badge::Moved);
    }
    if state.commitment == Commitment::Tentative {
        badges.push(Badge::Tentative);
    }
    badges
}

pub fn glyphs(state: &BlockState) -> Vec<Glyph> {
    let mut glyphs = Vec::new();
    if state.defense == Defense::Defended {
        glyphs.push(Glyph::Lock);
    }
    if state.persistence == Persistence::SyncPending {
        glyphs.push(Glyph::Spinner);
    }
    if state.persistence == Persistence::SyncError {
        glyphs.push(Glyph::Error);
    }
    if state.commitment == Commitment::Completed {
        glyphs.push(Glyph::Check);
    }
    glyphs
}
