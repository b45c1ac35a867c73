//! User-facing message templates for the ticket flows.
//!
//! Welcome sequences are plain data (ordered lists of [`WelcomeMessage`]
//! descriptors) rendered once at registry construction, so adding a new ticket
//! system never requires new branching code in the orchestrator. Ephemeral
//! reply strings are looked up by the system's locale.

use serenity::all::{ChannelId, RoleId, UserId};

const EMOJI_COFFEE: &str = "<:lori_coffee:727631176432484473>";
const EMOJI_ANALYSIS: &str = "<:lori_analise:853052040425766922>";
const EMOJI_PAT: &str = "<a:lori_pat:706263175892566097>";
const EMOJI_SOB: &str = "<:lori_sob:556524143281963008>";

const EXTRAS_URL: &str = "<https://loritta.website/extras>";

/// Locale of a ticket system's user-facing strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locale {
    Portuguese,
    English,
}

/// One message of a system's welcome sequence, posted into the ticket thread.
///
/// Order within the sequence is fixed and significant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WelcomeMessage {
    pub emoji: &'static str,
    pub text: String,
    /// Whether the thread owner is mentioned ahead of the text.
    pub mention_owner: bool,
}

impl WelcomeMessage {
    fn new(emoji: &'static str, text: String, mention_owner: bool) -> Self {
        Self {
            emoji,
            text,
            mention_owner,
        }
    }

    /// Renders the message for the given thread owner.
    pub fn render(&self, owner: UserId) -> String {
        if self.mention_owner {
            format!("{} **|** <@{}> {}", self.emoji, owner, self.text)
        } else {
            format!("{} **|** {}", self.emoji, self.text)
        }
    }
}

/// The help-desk welcome sequence: ready, question tip with support-role
/// ping, please-read with FAQ channel and extras link, after-answer tip.
pub fn help_desk_welcome(
    locale: Locale,
    support_role: RoleId,
    faq_channel: ChannelId,
) -> Vec<WelcomeMessage> {
    match locale {
        Locale::Portuguese => vec![
            WelcomeMessage::new(
                EMOJI_COFFEE,
                "Prontinho! Escreva aqui qual é a sua dúvida ou problema!".to_string(),
                true,
            ),
            WelcomeMessage::new(
                EMOJI_COFFEE,
                format!(
                    "Ao escrever a sua dúvida, a equipe de <@&{support_role}> irá te ajudar. \
                     Tente detalhar o máximo possível, assim fica mais fácil de te ajudar!"
                ),
                false,
            ),
            WelcomeMessage::new(
                EMOJI_ANALYSIS,
                format!(
                    "**Antes de perguntar, veja se a sua dúvida já não foi respondida em \
                     <#{faq_channel}> ou em {EXTRAS_URL}!**"
                ),
                false,
            ),
            WelcomeMessage::new(
                EMOJI_PAT,
                "Após a sua dúvida ser respondida, você pode fechar o ticket com `/close`."
                    .to_string(),
                false,
            ),
        ],
        Locale::English => vec![
            WelcomeMessage::new(
                EMOJI_COFFEE,
                "Done! Write here what is your question or issue!".to_string(),
                true,
            ),
            WelcomeMessage::new(
                EMOJI_COFFEE,
                format!(
                    "After writing your question, the <@&{support_role}> team will help you. \
                     Try to give as much detail as possible, it makes helping you way easier!"
                ),
                false,
            ),
            WelcomeMessage::new(
                EMOJI_ANALYSIS,
                format!(
                    "**Before asking, check if your question wasn't already answered in \
                     <#{faq_channel}> or in {EXTRAS_URL}!**"
                ),
                false,
            ),
            WelcomeMessage::new(
                EMOJI_PAT,
                "After your question is answered, you can close the ticket with `/close`."
                    .to_string(),
                false,
            ),
        ],
    }
}

/// The first-fan-art welcome sequence: send-your-art, managers-will-review.
pub fn fan_art_welcome(manager_role: RoleId) -> Vec<WelcomeMessage> {
    vec![
        WelcomeMessage::new(
            EMOJI_COFFEE,
            "Envie a sua fan art e, caso tenha, envie o processo de criação dela!".to_string(),
            true,
        ),
        WelcomeMessage::new(
            EMOJI_ANALYSIS,
            format!(
                "Após enviado, os <@&{manager_role}> irão averiguar a sua fan art e, caso ela \
                 tenha uma qualidade excepcional, ela será incluida na nossa Galeria de Fan Arts!"
            ),
            false,
        ),
    ]
}

/// Ephemeral acknowledgment sent before any remote thread call.
pub fn creating_ticket(locale: Locale) -> String {
    match locale {
        Locale::Portuguese => "Criando o seu ticket...".to_string(),
        Locale::English => "Creating your ticket...".to_string(),
    }
}

/// Ephemeral rejection for a user inside the recent-creation window.
///
/// `retry_at` is a Unix timestamp rendered as a Discord relative timestamp.
pub fn recently_created(locale: Locale, retry_at: i64) -> String {
    match locale {
        Locale::Portuguese => format!(
            "{EMOJI_SOB} Você já criou um ticket recentemente! Você poderá criar outro \
             <t:{retry_at}:R>."
        ),
        Locale::English => format!(
            "{EMOJI_SOB} You already created a ticket recently! You will be able to create \
             another one <t:{retry_at}:R>."
        ),
    }
}

/// Ephemeral rejection for a user that already holds the artist role.
pub fn already_an_artist(gallery_channel: ChannelId) -> String {
    format!(
        "Você já tem o cargo de desenhistas, você não precisa enviar uma \"Primeira Fan Art\" \
         novamente! Caso queira enviar mais fan arts para a galeria, basta enviar em \
         <#{gallery_channel}>"
    )
}

/// Ephemeral final confirmation referencing the surfaced thread.
pub fn ticket_ready(locale: Locale, thread: ChannelId) -> String {
    match locale {
        Locale::Portuguese => format!("O seu ticket foi criado! Acesse <#{thread}>"),
        Locale::English => format!("Your ticket was created! Go to <#{thread}>"),
    }
}
