//! Display records shared by the API client, bundled content and pages.
//!
//! Field names follow the external API's camelCase JSON; aliases absorb
//! the older snake/short spellings it still emits for some records.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

// =============================================================================
// SOCIAL LINKS
// =============================================================================

/// Optional profile links shown as icon buttons on cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub instagram: Option<String>,
    #[serde(alias = "x")]
    pub twitter: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialKind {
    LinkedIn,
    GitHub,
    Instagram,
    Twitter,
    Email,
}

impl SocialKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::GitHub => "GitHub",
            Self::Instagram => "Instagram",
            Self::Twitter => "X / Twitter",
            Self::Email => "Email",
        }
    }

    /// CSS modifier suffix.
    pub fn slug(self) -> &'static str {
        match self {
            Self::LinkedIn => "linkedin",
            Self::GitHub => "github",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Email => "email",
        }
    }

    /// Short text glyph rendered inside the icon button.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::LinkedIn => "in",
            Self::GitHub => "gh",
            Self::Instagram => "ig",
            Self::Twitter => "x",
            Self::Email => "@",
        }
    }

    /// Link target; bare email addresses become `mailto:` links.
    pub fn href(self, value: &str) -> String {
        let value = value.trim();
        if self == Self::Email && !value.starts_with("mailto:") {
            format!("mailto:{value}")
        } else {
            value.to_owned()
        }
    }
}

impl SocialLinks {
    /// Present, non-blank links in display order.
    pub fn entries(&self) -> Vec<(SocialKind, String)> {
        [
            (SocialKind::LinkedIn, &self.linkedin),
            (SocialKind::GitHub, &self.github),
            (SocialKind::Instagram, &self.instagram),
            (SocialKind::Twitter, &self.twitter),
            (SocialKind::Email, &self.email),
        ]
        .into_iter()
        .filter_map(|(kind, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (kind, kind.href(v)))
        })
        .collect()
    }
}

// =============================================================================
// TEAM
// =============================================================================

/// Membership tag; `HOME_FEATURED` members appear on the landing page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberType {
    HomeFeatured,
    Core,
    WingLead,
    #[default]
    Member,
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub program: String,
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
    #[serde(default, alias = "socials")]
    pub social_links: SocialLinks,
    #[serde(default, alias = "order")]
    pub sort_order: i32,
    #[serde(default = "default_true", alias = "isActive")]
    pub active: bool,
    #[serde(default, rename = "type")]
    pub member_type: MemberType,
}

// =============================================================================
// SPEAKERS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
    #[serde(default, alias = "socials")]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub featured: bool,
}

// =============================================================================
// WINGS
// =============================================================================

/// Accent color family for a wing's cards and detail header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WingTheme {
    Violet,
    Emerald,
    Amber,
    Rose,
    Sky,
    /// Also absorbs unknown tags, so it must stay the last variant.
    #[default]
    #[serde(other)]
    Cyan,
}

impl WingTheme {
    /// CSS modifier suffix, e.g. `wing-card--emerald`.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Cyan => "cyan",
            Self::Violet => "violet",
            Self::Emerald => "emerald",
            Self::Amber => "amber",
            Self::Rose => "rose",
            Self::Sky => "sky",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WingCoordinator {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WingActivity {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wing {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    #[serde(default)]
    pub coordinators: Vec<WingCoordinator>,
    #[serde(default)]
    pub activities: Vec<WingActivity>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default, alias = "color")]
    pub theme: WingTheme,
}
