#![forbid(unsafe_code)]

//! The message units of an ebMS message, as far as signing is concerned.

/// Where the content of a payload is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// A MIME attachment, referenced by `cid:` URI.
    Attachment,
    /// The child of the SOAP `Body`.
    Body,
}

/// A payload of a user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    /// The `href` from the payload's `PartInfo`, without `cid:` or `#` prefix.
    pub uri: Option<String>,
    pub containment: Containment,
}

impl Payload {
    /// A payload carried as an attachment with content id `uri`.
    pub fn attachment(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            containment: Containment::Attachment,
        }
    }

    /// A payload carried in the SOAP body.
    pub fn body(uri: Option<String>) -> Self {
        Self {
            uri,
            containment: Containment::Body,
        }
    }

    /// The URI the payload declares for itself.  An empty URI counts as none.
    pub fn declared_uri(&self) -> Option<&str> {
        self.uri.as_deref().filter(|u| !u.is_empty())
    }
}

/// A user message: the unit carrying business payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    pub message_id: String,
    pub payloads: Vec<Payload>,
}

/// The kind of a signal message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Receipt,
    Error,
    PullRequest,
}

/// A signal message.  Signals never carry payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalMessage {
    pub message_id: String,
    pub kind: SignalKind,
}

/// A message unit contained in an ebMS message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageUnit {
    User(UserMessage),
    Signal(SignalMessage),
}

impl MessageUnit {
    /// The payloads of the unit, `None` for units that cannot carry any.
    pub fn payloads(&self) -> Option<&[Payload]> {
        match self {
            MessageUnit::User(um) => Some(um.payloads.as_slice()),
            MessageUnit::Signal(_) => None,
        }
    }
}

impl From<UserMessage> for MessageUnit {
    fn from(um: UserMessage) -> Self {
        MessageUnit::User(um)
    }
}

impl From<SignalMessage> for MessageUnit {
    fn from(sm: SignalMessage) -> Self {
        MessageUnit::Signal(sm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_uri() {
        assert_eq!(Payload::attachment("p1").declared_uri(), Some("p1"));
        assert_eq!(Payload::attachment("").declared_uri(), None);
        assert_eq!(Payload::body(None).declared_uri(), None);
    }

    #[test]
    fn test_only_user_messages_have_payloads() {
        let um: MessageUnit = UserMessage {
            message_id: "m1@example.org".into(),
            payloads: vec![Payload::attachment("p1")],
        }
        .into();
        let receipt: MessageUnit = SignalMessage {
            message_id: "m2@example.org".into(),
            kind: SignalKind::Receipt,
        }
        .into();
        assert_eq!(um.payloads().map(<[Payload]>::len), Some(1));
        assert_eq!(receipt.payloads(), None);
    }
}
