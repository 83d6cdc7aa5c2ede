use std::fmt::Display;

use chrono::{Local, TimeZone};
use tracing::{debug, debug_span, trace};

use chatbird_types::{
    ChannelContext, ChatItem, DecoratedItem, Message, NameLabel, StatusMarker, TimeSeparator,
};

use crate::config::DecoratorConfig;
use crate::label::{local_day, time_separator_label};

const TIME_SEPARATOR_SUFFIX: &str = "-time-separator";
const NAME_SUFFIX: &str = "-decoration-name";
const STATUS_SUFFIX: &str = "-decoration-status";

/// Turns a flat list of chat items into the rows a message list renders.
///
/// Every pass starts from scratch: the output depends only on the items,
/// the channel context and the configuration. Calendar days are compared
/// in `Tz`, which is also the zone time separator labels are rendered in.
#[derive(Debug, Clone)]
pub struct Decorator<Tz: TimeZone = Local> {
    config: DecoratorConfig,
    tz: Tz,
}

impl Default for Decorator<Local> {
    fn default() -> Self {
        Self::new(DecoratorConfig::default())
    }
}

impl Decorator<Local> {
    pub fn new(config: DecoratorConfig) -> Self {
        Self { config, tz: Local }
    }
}

impl<Tz> Decorator<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn with_timezone(config: DecoratorConfig, tz: Tz) -> Self {
        Self { config, tz }
    }

    pub fn config(&self) -> &DecoratorConfig {
        &self.config
    }

    pub fn decorate(
        &self,
        items: &[ChatItem],
        channel: &ChannelContext,
        current_user_id: &str,
    ) -> Vec<DecoratedItem> {
        let _span = debug_span!("decorate", user = current_user_id, items = items.len()).entered();

        let last_outgoing = last_outgoing_index(items);
        let mut decorated = Vec::with_capacity(items.len() + items.len() / 2 + 1);
        let mut inserted = 0usize;

        for (index, item) in items.iter().enumerate() {
            let prev = index.checked_sub(1).and_then(|i| items.get(i));
            let next = items.get(index + 1);
            let is_last_outgoing = last_outgoing == Some(index);
            let bottom_margin = self.separation_after(item, next, is_last_outgoing);

            let Some(message) = item.as_message() else {
                decorated.push(DecoratedItem {
                    item: item.clone(),
                    bottom_margin,
                    show_avatar: false,
                    is_selected: false,
                    show_selection_indicator: false,
                });
                continue;
            };

            let show_avatar = match next.and_then(ChatItem::as_message) {
                Some(next) => message.sender_id != next.sender_id,
                None => message.is_incoming,
            };

            let (add_time_separator, add_name) = match prev.and_then(ChatItem::as_message) {
                Some(prev) => (
                    local_day(&prev.date, &self.tz) != local_day(&message.date, &self.tz),
                    prev.sender_id != message.sender_id && message.is_incoming,
                ),
                None => (true, message.is_incoming),
            };

            if add_time_separator {
                decorated.push(self.time_separator(message));
                inserted += 1;
            }

            if add_name {
                if let Some(name) = message.sender_display_name() {
                    trace!(uid = %message.uid, name, "name label");
                    decorated.push(DecoratedItem::decoration(ChatItem::NameLabel(NameLabel {
                        uid: format!("{}{}", message.uid, NAME_SUFFIX),
                        name: name.to_string(),
                    })));
                    inserted += 1;
                }
            }

            decorated.push(DecoratedItem {
                item: item.clone(),
                bottom_margin,
                show_avatar,
                is_selected: false,
                show_selection_indicator: false,
            });

            if is_last_outgoing {
                if let Some(marker) = status_marker(message, channel) {
                    decorated.push(marker);
                    inserted += 1;
                }
            }
        }

        debug!(output = decorated.len(), inserted, "decorated message list");
        decorated
    }

    /// Vertical space below `current` given what follows it.
    pub fn separation_after(
        &self,
        current: &ChatItem,
        next: Option<&ChatItem>,
        is_last_outgoing: bool,
    ) -> f32 {
        let Some(next) = next else {
            return 0.0;
        };
        let (Some(current), Some(next)) = (current.as_message(), next.as_message()) else {
            return self.config.normal_separation();
        };

        if is_last_outgoing {
            // The status marker sits directly below.
            0.0
        } else if current.sender_id != next.sender_id {
            self.config.normal_separation()
        } else if next.date - current.date > self.config.separation_threshold() {
            self.config.normal_separation()
        } else {
            self.config.short_separation()
        }
    }

    fn time_separator(&self, message: &Message) -> DecoratedItem {
        let label =
            time_separator_label(&message.date, &self.tz, self.config.time_separator_format());
        trace!(uid = %message.uid, %label, "time separator");
        DecoratedItem::decoration(ChatItem::TimeSeparator(TimeSeparator {
            uid: format!("{}{}", message.uid, TIME_SEPARATOR_SUFFIX),
            label,
        }))
    }
}

/// Decorates with the default configuration in the local time zone.
pub fn decorate(
    items: &[ChatItem],
    channel: &ChannelContext,
    current_user_id: &str,
) -> Vec<DecoratedItem> {
    Decorator::<Local>::default().decorate(items, channel, current_user_id)
}

/// Index of the last message the current user sent, if any.
fn last_outgoing_index(items: &[ChatItem]) -> Option<usize> {
    items
        .iter()
        .rposition(|item| item.as_message().is_some_and(|m| !m.is_incoming))
}

/// Only user-authored messages carry read state worth showing.
fn status_marker(message: &Message, channel: &ChannelContext) -> Option<DecoratedItem> {
    let sender = message.sender.as_ref()?;
    trace!(uid = %message.uid, status = ?message.status, seen = sender.read_count, "status marker");
    Some(DecoratedItem::decoration(ChatItem::StatusMarker(StatusMarker {
        uid: format!("{}{}", message.uid, STATUS_SUFFIX),
        status: message.status,
        is_multi_user_group: channel.is_multi_user_group(),
        seen_count: sender.read_count,
    })))
}
