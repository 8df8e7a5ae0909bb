//! Inbound message and attachment shapes supplied by the dispatcher.

/// Metadata for an attachment supplied with a command or follow-up message.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentMeta {
    /// MIME type as reported by the platform, e.g. "image/png".
    pub content_type: Option<String>,
    pub size_bytes: u64,
    pub url: String,
}

/// A message delivered by the chat platform into the collection hub.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingMessage {
    pub guild_id: u64,
    pub author_id: u64,
    pub content: String,
    /// Correlation token of the prompt this message replies to, if any.
    pub reference_token: Option<String>,
    pub attachments: Vec<AttachmentMeta>,
}
