use whisper_types::models::{Message, Pair};

use crate::error::MalformedPairReference;

/// One of the two positional slots of a [`Pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Which side `user_id` occupies in `pair`, if any.
    pub fn of(pair: &Pair, user_id: &str) -> Option<Side> {
        if pair.user_a == user_id {
            Some(Side::A)
        } else if pair.user_b == user_id {
            Some(Side::B)
        } else {
            None
        }
    }

    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub fn nickname(self, pair: &Pair) -> &str {
        match self {
            Side::A => &pair.nickname_a,
            Side::B => &pair.nickname_b,
        }
    }

    /// Delivery token for this side. An empty token counts as no token.
    pub fn token(self, pair: &Pair) -> Option<&str> {
        let token = match self {
            Side::A => pair.token_a.as_deref(),
            Side::B => pair.token_b.as_deref(),
        };
        token.filter(|t| !t.is_empty())
    }
}

/// Who to notify for a whisper, and who to say it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// `None` when the recipient has no registered device.
    pub recipient_token: Option<&'a str>,
    pub sender_nickname: &'a str,
}

/// Resolve the recipient of `message` within `pair`.
///
/// The recipient is whichever side did not send the message. A sender that
/// belongs to neither side yields [`MalformedPairReference`].
pub fn resolve<'a>(
    message: &Message,
    pair: &'a Pair,
) -> Result<Resolution<'a>, MalformedPairReference> {
    let sender = Side::of(pair, &message.sender_id).ok_or_else(|| MalformedPairReference {
        pair_id: message.pair_id.clone(),
        sender_id: message.sender_id.clone(),
    })?;

    Ok(Resolution {
        recipient_token: sender.other().token(pair),
        sender_nickname: sender.nickname(pair),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> Pair {
        Pair {
            user_a: "u1".into(),
            user_b: "u2".into(),
            nickname_a: "Al".into(),
            nickname_b: "Bo".into(),
            token_a: Some("tA".into()),
            token_b: Some("tB".into()),
        }
    }

    fn whisper(sender: &str) -> Message {
        Message {
            id: None,
            pair_id: "p1".into(),
            sender_id: sender.into(),
            text: "hi".into(),
        }
    }

    #[test]
    fn sender_a_notifies_b() {
        let pair = pair();
        let r = resolve(&whisper("u1"), &pair).unwrap();
        assert_eq!(r.recipient_token, Some("tB"));
        assert_eq!(r.sender_nickname, "Al");
    }

    #[test]
    fn sender_b_notifies_a() {
        let pair = pair();
        let r = resolve(&whisper("u2"), &pair).unwrap();
        assert_eq!(r.recipient_token, Some("tA"));
        assert_eq!(r.sender_nickname, "Bo");
    }

    #[test]
    fn stranger_is_malformed() {
        let pair = pair();
        let err = resolve(&whisper("u3"), &pair).unwrap_err();
        assert_eq!(err.pair_id, "p1");
        assert_eq!(err.sender_id, "u3");
    }

    #[test]
    fn missing_or_empty_token_resolves_to_none() {
        let mut pair = pair();
        pair.token_b = None;
        assert_eq!(resolve(&whisper("u1"), &pair).unwrap().recipient_token, None);

        pair.token_b = Some(String::new());
        assert_eq!(resolve(&whisper("u1"), &pair).unwrap().recipient_token, None);

        // The sender's own token is irrelevant
        pair.token_a = None;
        pair.token_b = Some("tB".into());
        assert_eq!(resolve(&whisper("u1"), &pair).unwrap().recipient_token, Some("tB"));
    }

    #[test]
    fn other_is_an_involution() {
        assert_eq!(Side::A.other(), Side::B);
        assert_eq!(Side::B.other().other(), Side::B);
    }
}
