//! Static configuration of the ticket systems.
//!
//! Each [`TicketSystemType`] maps to a [`TicketSystemInfo`] behavior profile:
//! where threads are opened, how long until they auto-archive, which role
//! disqualifies the requester, and the pre-rendered welcome sequence. The
//! registry is built once at startup, validated against the closed set of
//! system types, and passed by reference into the orchestrator. Nothing is
//! mutated after construction.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serenity::all::{AutoArchiveDuration, ChannelId, RoleId};

use crate::error::config::ConfigError;
use crate::tickets::messages::{self, Locale, WelcomeMessage};

// Loritta's community guilds.
const HELP_DESK_PT_CHANNEL_ID: ChannelId = ChannelId::new(891834045585567744);
const HELP_DESK_PT_FAQ_CHANNEL_ID: ChannelId = ChannelId::new(761337893951635458);
const HELP_DESK_PT_SUPPORT_ROLE_ID: RoleId = RoleId::new(399301696892829706);

const HELP_DESK_EN_CHANNEL_ID: ChannelId = ChannelId::new(891834950159655033);
const HELP_DESK_EN_FAQ_CHANNEL_ID: ChannelId = ChannelId::new(761337709720633392);
const HELP_DESK_EN_SUPPORT_ROLE_ID: RoleId = RoleId::new(399301696892829706);

const FIRST_FAN_ARTS_PT_CHANNEL_ID: ChannelId = ChannelId::new(938247721775661086);
const FAN_ARTS_MANAGER_ROLE_ID: RoleId = RoleId::new(691583916309939404);
const ARTISTS_ROLE_ID: RoleId = RoleId::new(341343754336337921);
const FAN_ARTS_GALLERY_CHANNEL_ID: ChannelId = ChannelId::new(583406099047252044);

const SPARKLYPOWER_HELP_DESK_CHANNEL_ID: ChannelId = ChannelId::new(946916675844833340);
const SPARKLYPOWER_FAQ_CHANNEL_ID: ChannelId = ChannelId::new(852488291432200232);
const SPARKLYPOWER_SUPPORT_ROLE_ID: RoleId = RoleId::new(332650495522897920);

/// Enumerated identifier of a support system. Closed set, defined at
/// configuration time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TicketSystemType {
    HelpDeskPortuguese,
    HelpDeskEnglish,
    FirstFanArtsPortuguese,
    SparklyPowerHelpDeskPortuguese,
}

impl TicketSystemType {
    pub const ALL: [TicketSystemType; 4] = [
        TicketSystemType::HelpDeskPortuguese,
        TicketSystemType::HelpDeskEnglish,
        TicketSystemType::FirstFanArtsPortuguese,
        TicketSystemType::SparklyPowerHelpDeskPortuguese,
    ];

    /// Stable discriminant name, used in component custom ids, command
    /// arguments and persisted activity rows.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketSystemType::HelpDeskPortuguese => "HELP_DESK_PORTUGUESE",
            TicketSystemType::HelpDeskEnglish => "HELP_DESK_ENGLISH",
            TicketSystemType::FirstFanArtsPortuguese => "FIRST_FAN_ARTS_PORTUGUESE",
            TicketSystemType::SparklyPowerHelpDeskPortuguese => {
                "SPARKLYPOWER_HELP_DESK_PORTUGUESE"
            }
        }
    }

    /// Human readable label, used for slash command choices.
    pub fn label(&self) -> &'static str {
        match self {
            TicketSystemType::HelpDeskPortuguese => "Loritta Help Desk (Português)",
            TicketSystemType::HelpDeskEnglish => "Loritta Help Desk (English)",
            TicketSystemType::FirstFanArtsPortuguese => "Primeira Fan Art (Português)",
            TicketSystemType::SparklyPowerHelpDeskPortuguese => "SparklyPower Help Desk",
        }
    }
}

impl fmt::Display for TicketSystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketSystemType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HELP_DESK_PORTUGUESE" => Ok(TicketSystemType::HelpDeskPortuguese),
            "HELP_DESK_ENGLISH" => Ok(TicketSystemType::HelpDeskEnglish),
            "FIRST_FAN_ARTS_PORTUGUESE" => Ok(TicketSystemType::FirstFanArtsPortuguese),
            "SPARKLYPOWER_HELP_DESK_PORTUGUESE" => {
                Ok(TicketSystemType::SparklyPowerHelpDeskPortuguese)
            }
            other => Err(ConfigError::UnknownTicketSystem(other.to_string())),
        }
    }
}

/// A role that rejects the requester outright, with the pre-rendered
/// ephemeral notice explaining why.
#[derive(Clone, Debug)]
pub struct DisqualifyingRole {
    pub role_id: RoleId,
    pub notice: String,
}

/// Per-type behavior profile. Read-only after registry construction.
#[derive(Clone, Debug)]
pub struct TicketSystemInfo {
    pub system_type: TicketSystemType,
    /// Channel the private ticket threads are opened under.
    pub parent_channel_id: ChannelId,
    pub archive_duration: AutoArchiveDuration,
    pub locale: Locale,
    /// Role that disqualifies the requester from this flow, if any.
    pub disqualifying_role: Option<DisqualifyingRole>,
    /// Ordered welcome sequence posted into a surfaced thread.
    pub welcome: Vec<WelcomeMessage>,
}

/// Lookup table from system type to its behavior profile.
pub struct TicketSystemRegistry {
    systems: HashMap<TicketSystemType, TicketSystemInfo>,
}

impl TicketSystemRegistry {
    /// Builds the registry for Loritta's support systems and validates that
    /// the closed set of system types is fully covered.
    pub fn loritta() -> Result<Self, ConfigError> {
        let mut systems = HashMap::new();

        systems.insert(
            TicketSystemType::HelpDeskPortuguese,
            TicketSystemInfo {
                system_type: TicketSystemType::HelpDeskPortuguese,
                parent_channel_id: HELP_DESK_PT_CHANNEL_ID,
                archive_duration: AutoArchiveDuration::OneDay,
                locale: Locale::Portuguese,
                disqualifying_role: None,
                welcome: messages::help_desk_welcome(
                    Locale::Portuguese,
                    HELP_DESK_PT_SUPPORT_ROLE_ID,
                    HELP_DESK_PT_FAQ_CHANNEL_ID,
                ),
            },
        );

        systems.insert(
            TicketSystemType::HelpDeskEnglish,
            TicketSystemInfo {
                system_type: TicketSystemType::HelpDeskEnglish,
                parent_channel_id: HELP_DESK_EN_CHANNEL_ID,
                archive_duration: AutoArchiveDuration::OneDay,
                locale: Locale::English,
                disqualifying_role: None,
                welcome: messages::help_desk_welcome(
                    Locale::English,
                    HELP_DESK_EN_SUPPORT_ROLE_ID,
                    HELP_DESK_EN_FAQ_CHANNEL_ID,
                ),
            },
        );

        systems.insert(
            TicketSystemType::FirstFanArtsPortuguese,
            TicketSystemInfo {
                system_type: TicketSystemType::FirstFanArtsPortuguese,
                parent_channel_id: FIRST_FAN_ARTS_PT_CHANNEL_ID,
                archive_duration: AutoArchiveDuration::OneWeek,
                locale: Locale::Portuguese,
                disqualifying_role: Some(DisqualifyingRole {
                    role_id: ARTISTS_ROLE_ID,
                    notice: messages::already_an_artist(FAN_ARTS_GALLERY_CHANNEL_ID),
                }),
                welcome: messages::fan_art_welcome(FAN_ARTS_MANAGER_ROLE_ID),
            },
        );

        systems.insert(
            TicketSystemType::SparklyPowerHelpDeskPortuguese,
            TicketSystemInfo {
                system_type: TicketSystemType::SparklyPowerHelpDeskPortuguese,
                parent_channel_id: SPARKLYPOWER_HELP_DESK_CHANNEL_ID,
                archive_duration: AutoArchiveDuration::OneDay,
                locale: Locale::Portuguese,
                disqualifying_role: None,
                welcome: messages::help_desk_welcome(
                    Locale::Portuguese,
                    SPARKLYPOWER_SUPPORT_ROLE_ID,
                    SPARKLYPOWER_FAQ_CHANNEL_ID,
                ),
            },
        );

        let registry = Self { systems };
        registry.validate()?;
        Ok(registry)
    }

    /// Fails fast at startup if any system type of the closed set is missing
    /// its profile, so an unregistered type can never surface at request time.
    fn validate(&self) -> Result<(), ConfigError> {
        for system_type in TicketSystemType::ALL {
            if !self.systems.contains_key(&system_type) {
                return Err(ConfigError::UnregisteredTicketSystem(
                    system_type.to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn lookup(&self, system_type: TicketSystemType) -> Result<&TicketSystemInfo, ConfigError> {
        self.systems
            .get(&system_type)
            .ok_or_else(|| ConfigError::UnregisteredTicketSystem(system_type.to_string()))
    }
}
