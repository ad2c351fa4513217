//! Property-based tests for inbound decoding.
//!
//! The host is an untrusted peer from the decoder's point of view: any byte
//! sequence must produce either a message, `None`, or an error. Never a panic.

use phonebox_proto::{HostMessage, HostRequest, ProtocolError, decode};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = decode(&bytes);
    }

    #[test]
    fn prop_unknown_tags_are_ignored(tag in "[a-zA-Z]{1,16}") {
        prop_assume!(!HostMessage::TAGS.contains(&tag.as_str()));

        let raw = format!(r#"{{"action":"{tag}","payload":{{"x":1}}}}"#);
        prop_assert!(matches!(decode(raw.as_bytes()), Ok(None)));
    }

    #[test]
    fn prop_battery_values_decode(battery in -1000i64..1000) {
        let raw = format!(r#"{{"action":"updateBattery","battery":{battery}}}"#);
        let decoded = decode(raw.as_bytes()).ok().flatten();
        prop_assert_eq!(decoded, Some(HostMessage::UpdateBattery { battery: battery as f64 }));
    }
}

#[test]
fn every_known_tag_is_recognised() {
    for tag in HostMessage::TAGS {
        let raw = format!(r#"{{"action":"{tag}"}}"#);
        match decode(raw.as_bytes()) {
            // Unit variants decode; payload variants fail on the missing payload
            Ok(Some(msg)) => assert_eq!(msg.tag(), tag),
            Err(ProtocolError::InvalidPayload { action, .. }) => assert_eq!(action, tag),
            other => panic!("tag {tag} was not recognised: {other:?}"),
        }
    }
}

#[test]
fn request_bodies_are_json_objects() {
    let requests = [
        HostRequest::Lock,
        HostRequest::OpenApp { app: "maps".into() },
        HostRequest::AnswerCall { call_id: 3u64.into() },
    ];
    for request in requests {
        let bytes = request.encode_body().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value.is_object(), "{} body was {value}", request.action());
    }
}
