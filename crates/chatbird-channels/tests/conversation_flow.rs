//! End-to-end: pick users, create a channel, resolve its history and
//! decorate it for display.

use chrono::{TimeZone, Utc};

use chatbird_channels::{
    ChannelCreator, ChannelError, ChannelParams, GroupChannel, StaticDirectory, UserPicker,
    create_channel,
};
use chatbird_decorator::{Decorator, DecoratorConfig};
use chatbird_types::{ChatItem, Message, User};

struct InMemoryBackend {
    current_user: User,
}

impl ChannelCreator for InMemoryBackend {
    fn create_channel(&mut self, params: &ChannelParams) -> Result<GroupChannel, ChannelError> {
        let mut members = vec![self.current_user.clone()];
        members.extend(params.members.iter().cloned());
        let mut channel = GroupChannel::new("sendbird_group_channel_1", members);
        channel.name = Some(params.name.clone());
        Ok(channel)
    }
}

#[test]
fn new_conversation_round_trip() {
    let me = User::new("me").with_nickname("Me Myself");
    let directory = StaticDirectory::new(vec![
        me.clone(),
        User::new("grace").with_nickname("Grace Hopper"),
        User::new("alan").with_nickname("Alan Turing"),
    ]);

    let mut picker = UserPicker::new(directory, "me");
    picker.refresh().unwrap();
    assert_eq!(picker.users().len(), 2);
    picker.toggle(0);
    picker.toggle(1);
    assert!(picker.can_proceed());

    let mut backend = InMemoryBackend { current_user: me };
    let mut channel = create_channel(&mut backend, &picker.channel_params("Pioneers")).unwrap();
    assert_eq!(channel.members_title("me"), "Grace, Alan");
    assert_eq!(channel.context().member_count, 3);

    let t = |min| Utc.with_ymd_and_hms(2024, 7, 4, 15, min, 0).unwrap();
    channel.mark_read("grace", t(10));

    let history = vec![
        Message::text("1", "grace", t(0), false, "hello"),
        Message::text("2", "me", t(1), false, "hi grace"),
        Message::text("3", "me", t(30), false, "anyone?"),
    ];
    let items = channel.resolve_messages(history, "me");
    let decorated = Decorator::with_timezone(DecoratorConfig::default(), Utc).decorate(
        &items,
        &channel.context(),
        "me",
    );

    let rows: Vec<&str> = decorated.iter().map(|d| d.uid()).collect();
    assert_eq!(
        rows,
        vec!["1-time-separator", "1-decoration-name", "1", "2", "3", "3-decoration-status"]
    );

    match &decorated[1].item {
        ChatItem::NameLabel(label) => assert_eq!(label.name, "Grace Hopper"),
        other => panic!("expected name label, got {:?}", other),
    }
    match &decorated.last().unwrap().item {
        ChatItem::StatusMarker(marker) => {
            assert!(marker.is_multi_user_group);
            assert_eq!(marker.seen_count, 0);
        }
        other => panic!("expected status marker, got {:?}", other),
    }
}

#[test]
fn channel_state_loads_from_json() {
    let json = r#"{
        "url": "c1",
        "members": [
            { "user_id": "me" },
            { "user_id": "u1", "nickname": "Ann" }
        ],
        "read_cursors": { "u1": "2024-07-04T15:00:00Z" }
    }"#;
    let channel: GroupChannel = serde_json::from_str(json).unwrap();
    assert_eq!(channel.members_title("me"), "Ann");

    let message = Message::text("m", "me", Utc.with_ymd_and_hms(2024, 7, 4, 14, 0, 0).unwrap(), false, "x");
    assert_eq!(channel.read_count(&message), 1);
}
