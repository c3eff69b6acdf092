//! Telegram chat bot
//!
//! Slash commands answered with the plain-text form of each result.

use anyhow::Result;
use std::sync::Arc;
use teloxide::{prelude::*, utils::command::BotCommands};
use tracing::{error, info, warn};

use crate::commands::CommandRegistry;
use crate::config::AppConfig;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "AP typing commands:")]
pub enum ChatCommand {
    #[command(description = "show this text.")]
    Help,
    #[command(description = "list shadow types for an AP type and subtype, e.g. /shadow VFEL 1340", parse_with = "split")]
    Shadow { ap_type: String, subtype: String },
    #[command(description = "relation between two AP types, e.g. /intertype FVLE ELVF", parse_with = "split")]
    Intertype { ap_type1: String, ap_type2: String },
    #[command(description = "all intertype relations of an AP type, e.g. /intertypes FVLE")]
    Intertypes(String),
    #[command(description = "triads for a trifix or EI archetype, e.g. /triads 592 or /triads SPI SY-CY-UN")]
    Triads(String),
}

impl ChatCommand {
    /// Registry command name and arguments.
    fn invocation(&self) -> Option<(&'static str, Vec<String>)> {
        match self {
            ChatCommand::Help => None,
            ChatCommand::Shadow { ap_type, subtype } => Some(("shadow", vec![ap_type.clone(), subtype.clone()])),
            ChatCommand::Intertype { ap_type1, ap_type2 } => {
                Some(("intertype", vec![ap_type1.clone(), ap_type2.clone()]))
            }
            ChatCommand::Intertypes(ap_type) => Some(("intertypes", vec![ap_type.clone()])),
            ChatCommand::Triads(input) => Some(("triads", vec![input.clone()])),
        }
    }
}

/// Text reply for a parsed command. Errors become `Error: <message>`.
pub fn reply_for(registry: &CommandRegistry, command: &ChatCommand) -> String {
    let Some((name, args)) = command.invocation() else {
        return ChatCommand::descriptions().to_string();
    };
    match registry.execute(name, &args) {
        Ok(output) => output.summary,
        Err(e) => {
            if e.is_user_error() {
                warn!("Command {} rejected: {}", name, e);
            } else {
                error!("Command {} failed: {}", name, e);
            }
            format!("Error: {}", e)
        }
    }
}

pub async fn run_bot(config: &AppConfig) -> Result<()> {
    let token = config.require_telegram_token()?;
    info!("Starting AP typing bot...");

    let bot = Bot::new(token);
    let registry = Arc::new(CommandRegistry::with_defaults());

    ChatCommand::repl(bot, move |bot: Bot, msg: Message, command: ChatCommand| {
        let registry = registry.clone();
        async move {
            let user = msg.from.as_ref().map(|u| u.full_name()).unwrap_or_default();
            info!("Chat command from {}: {:?}", user, command);
            let reply = reply_for(&registry, &command);
            bot.send_message(msg.chat.id, reply).await?;
            respond(())
        }
    })
    .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            ChatCommand::parse("/shadow VFEL 1340", "ap_bot").unwrap(),
            ChatCommand::Shadow { ap_type: "VFEL".into(), subtype: "1340".into() }
        );
        assert_eq!(
            ChatCommand::parse("/triads SPI SY-CY-UN", "ap_bot").unwrap(),
            ChatCommand::Triads("SPI SY-CY-UN".into())
        );
        assert!(ChatCommand::parse("/shadow VFEL", "ap_bot").is_err());
    }

    #[test]
    fn test_replies() {
        let registry = CommandRegistry::with_defaults();
        let reply = reply_for(
            &registry,
            &ChatCommand::Intertype { ap_type1: "FVLE".into(), ap_type2: "ELVF".into() },
        );
        assert_eq!(reply, "Dual: FVLE <—> ELVF (shared sexta)");

        let reply = reply_for(&registry, &ChatCommand::Intertypes("XXXX".into()));
        assert_eq!(reply, "Error: Invalid AP type XXXX");

        assert!(reply_for(&registry, &ChatCommand::Help).contains("/shadow"));
    }
}
