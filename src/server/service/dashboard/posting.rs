//! Dashboard message posting operations.
//!
//! The dashboard is a single message that is sent once and edited in place on every
//! cycle. When the message has been deleted it is recreated; when Discord rejects an
//! edit for another reason a fresh message is sent instead.

use chrono::Utc;
use dioxus_logger::tracing;
use serenity::all::{CreateEmbed, CreateMessage, EditMessage, MessageId};

use crate::server::error::AppError;

use super::{builder::build_error_embed, DashboardTarget};

/// What to do after editing the dashboard message failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditRecovery {
    /// The message is gone (404); send it again.
    Recreate,
    /// Discord rejected the edit with another HTTP error; send a new message.
    SendNew,
    /// Missing permissions or not an HTTP error; give up on this cycle.
    Abort,
}

impl EditRecovery {
    pub fn for_status(status: Option<u16>) -> Self {
        match status {
            Some(404) => Self::Recreate,
            Some(403) | None => Self::Abort,
            Some(_) => Self::SendNew,
        }
    }
}

/// Publishes the dashboard embed, editing the known message when there is one.
///
/// # Arguments
/// - `target` - Resolved dashboard channel and Discord handles
/// - `message_id` - Previously published dashboard message, if any
/// - `embed` - Dashboard embed to publish
///
/// # Returns
/// - `Ok(MessageId)` - ID of the message now showing the dashboard
/// - `Err(AppError::DiscordErr)` - Sending failed, or editing failed with 403 or a
///   non-HTTP error
pub async fn publish(
    target: &DashboardTarget,
    message_id: Option<MessageId>,
    embed: CreateEmbed,
) -> Result<MessageId, AppError> {
    let Some(message_id) = message_id else {
        let id = send(target, embed).await?;
        tracing::info!("New dashboard message sent");
        return Ok(id);
    };

    let edit = target
        .channel_id
        .edit_message(&target.http, message_id, EditMessage::new().embed(embed.clone()))
        .await;

    let err = match edit {
        Ok(_) => {
            tracing::info!("Dashboard message updated");
            return Ok(message_id);
        }
        Err(e) => AppError::from(e),
    };

    match EditRecovery::for_status(err.discord_status()) {
        EditRecovery::Recreate => {
            let id = send(target, embed).await?;
            tracing::info!("Dashboard message recreated (original was deleted)");
            Ok(id)
        }
        EditRecovery::SendNew => {
            tracing::warn!("Could not edit dashboard message: {}", err);
            let id = send(target, embed).await?;
            tracing::info!("New dashboard message sent as fallback");
            Ok(id)
        }
        EditRecovery::Abort => Err(err),
    }
}

/// Sends an error embed to the dashboard channel.
///
/// Best-effort: a failure to build or send the embed is logged at warn and dropped.
pub async fn send_error_embed(target: &DashboardTarget, message: &str) {
    let result = match build_error_embed(message, Utc::now()) {
        Ok(embed) => send(target, embed).await.map(|_| ()),
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::warn!("Failed to send dashboard error embed: {}", e);
    }
}

async fn send(target: &DashboardTarget, embed: CreateEmbed) -> Result<MessageId, AppError> {
    let message = target
        .channel_id
        .send_message(&target.http, CreateMessage::new().embed(embed))
        .await?;

    Ok(message.id)
}
