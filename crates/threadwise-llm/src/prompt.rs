use threadwise_types::{SuggestReplyRequest, SummarizeRequest, ThreadMessage};

const SUMMARY_INSTRUCTIONS: &str = "You are an AI assistant that summarizes email threads for a CRM-like system. \
Given the following email thread, produce a concise summary focusing on key decisions, \
action items, and overall context. Just return the summary text, nothing else.";

const REPLY_INSTRUCTIONS: &str = "You are an AI assistant generating professional, concise reply suggestions for an email thread. \
Return ONLY a numbered list of reply options, without extra commentary.";

pub const NO_CONTEXT_PLACEHOLDER: &str = "(No additional context provided)";

/// Render one message as a `From/To/Sent at/Text` block
pub fn format_message(message: &ThreadMessage) -> String {
    format!(
        "From: {}\nTo: {}\nSent at: {}\nText: {}",
        message.sender,
        message.to.join(", "),
        message.sent_at,
        message.text
    )
}

pub fn build_summary_prompt(request: &SummarizeRequest) -> String {
    let emails = request
        .messages
        .iter()
        .map(format_message)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "{}\n\nThread ID: {}\n\nEmails:\n{}",
        SUMMARY_INSTRUCTIONS, request.thread_id, emails
    )
}

pub fn build_reply_prompt(request: &SuggestReplyRequest) -> String {
    let context = request
        .conversation_context
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(NO_CONTEXT_PLACEHOLDER);
    let latest = &request.latest_message;

    format!(
        "{}\n\nThread ID: {}\nConversation context: {}\n\n\
         Latest message from the other party:\nFrom: {}\nText: {}\n\n\
         Generate exactly {} distinct reply options.",
        REPLY_INSTRUCTIONS, request.thread_id, context, latest.sender, latest.text, request.max_replies
    )
}
