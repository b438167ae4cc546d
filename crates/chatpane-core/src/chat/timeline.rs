//! Day-grouped, display-ready view of a conversation
//!
//! [`build_timeline`] walks the messages in order and decides, per message,
//! whether a date separator precedes it, which side it sits on, which bubble
//! style applies and whether the sender name is shown.

use std::fmt::Display;

use chrono::TimeZone;

use super::message::Message;
use crate::store::ChatKind;

/// Day label format used by date separators.
pub const DAY_FORMAT: &str = "%d-%m-%Y";
/// Time label format shown inside every bubble.
pub const TIME_FORMAT: &str = "%H:%M";

/// Horizontal placement of a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Start,
    End,
}

impl Alignment {
    pub fn class(self) -> &'static str {
        match self {
            Alignment::Start => "message-row-received",
            Alignment::End => "message-row-sent",
        }
    }
}

/// Bubble background, by authorship and content kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleStyle {
    /// Accent bubble for our own text
    Accent,
    /// Neutral bubble for others' text
    Neutral,
    /// Our own code block
    AccentCode,
    /// Others' code block
    NeutralCode,
}

impl BubbleStyle {
    fn pick(is_self: bool, is_code: bool) -> Self {
        match (is_self, is_code) {
            (true, false) => BubbleStyle::Accent,
            (true, true) => BubbleStyle::AccentCode,
            (false, false) => BubbleStyle::Neutral,
            (false, true) => BubbleStyle::NeutralCode,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            BubbleStyle::Accent => "bubble-accent",
            BubbleStyle::Neutral => "bubble-neutral",
            BubbleStyle::AccentCode => "bubble-accent-code",
            BubbleStyle::NeutralCode => "bubble-neutral-code",
        }
    }
}

/// One rendered row of the message list.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub message: Message,
    /// `DD-MM-YYYY` when this message opens a new day
    pub date_separator: Option<String>,
    pub is_self: bool,
    pub alignment: Alignment,
    pub bubble: BubbleStyle,
    /// Only in group chats, only for others' messages
    pub sender_name: Option<String>,
    /// `HH:mm`
    pub time: String,
}

/// Format the calendar day of a message in `tz`.
pub fn format_day<Tz>(message: &Message, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    message
        .timestamp
        .with_timezone(tz)
        .format(DAY_FORMAT)
        .to_string()
}

/// Format the wall-clock time of a message in `tz`.
pub fn format_time<Tz>(message: &Message, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    message
        .timestamp
        .with_timezone(tz)
        .format(TIME_FORMAT)
        .to_string()
}

/// Build display rows for `messages` as seen by `me`.
///
/// A separator is emitted exactly when the formatted day differs from the
/// previous message's formatted day (always for the first message).
pub fn build_timeline<Tz>(
    messages: &[Message],
    me: &str,
    kind: ChatKind,
    tz: &Tz,
) -> Vec<TimelineEntry>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut last_day: Option<String> = None;

    messages
        .iter()
        .map(|message| {
            let day = format_day(message, tz);
            let date_separator = if last_day.as_deref() == Some(day.as_str()) {
                None
            } else {
                Some(day.clone())
            };
            last_day = Some(day);

            let is_self = message.is_from(me);
            let sender_name = if kind.is_group() && !is_self {
                message.sender.display_name()
            } else {
                None
            };

            TimelineEntry {
                message: message.clone(),
                date_separator,
                is_self,
                alignment: if is_self { Alignment::End } else { Alignment::Start },
                bubble: BubbleStyle::pick(is_self, message.is_code()),
                sender_name,
                time: format_time(message, tz),
            }
        })
        .collect()
}
