//! Email payload types.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::render::RenderedDocument;

/// A name/address pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mailbox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
}

impl Mailbox {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            name: None,
            email: email.into(),
        }
    }

    pub fn named(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: email.into(),
        }
    }
}

/// A file attached to an outgoing email.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl Attachment {
    pub fn from_document(document: RenderedDocument) -> Self {
        Self {
            filename: document.filename.clone(),
            content_type: document.mime_type().to_string(),
            data: document.bytes,
        }
    }

    /// Base64-encoded content for JSON email APIs.
    pub fn encoded(&self) -> String {
        BASE64.encode(&self.data)
    }
}

/// A fully prepared notification email.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub sender: Mailbox,
    pub to: Vec<Mailbox>,
    pub subject: String,
    pub html_content: String,
    pub attachment: Attachment,
}

/// Attachment entry of the Brevo transactional email API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrevoAttachment {
    /// Base64-encoded file data
    pub content: String,
    /// Filename with extension; Brevo infers the type from it
    pub name: String,
}

/// Request body of `POST /v3/smtp/email`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrevoEmail {
    pub sender: Mailbox,
    pub to: Vec<Mailbox>,
    pub subject: String,
    pub html_content: String,
    pub attachment: Vec<BrevoAttachment>,
}

impl From<&OutgoingEmail> for BrevoEmail {
    fn from(email: &OutgoingEmail) -> Self {
        Self {
            sender: email.sender.clone(),
            to: email.to.clone(),
            subject: email.subject.clone(),
            html_content: email.html_content.clone(),
            attachment: vec![BrevoAttachment {
                content: email.attachment.encoded(),
                name: email.attachment.filename.clone(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_email() -> OutgoingEmail {
        OutgoingEmail {
            sender: Mailbox::named("DS-160 Form", "from@example.com"),
            to: vec![Mailbox::new("to@example.com")],
            subject: "DOCX ATTACHED: DS-160 Submission - Client".into(),
            html_content: "<p>attached</p>".into(),
            attachment: Attachment {
                filename: "DS-160_Submission_1.docx".into(),
                content_type: "application/octet-stream".into(),
                data: b"PK\x03\x04".to_vec(),
            },
        }
    }

    #[test]
    fn test_brevo_payload_shape() {
        let payload = serde_json::to_value(BrevoEmail::from(&sample_email())).unwrap();
        assert_eq!(
            payload,
            json!({
                "sender": { "name": "DS-160 Form", "email": "from@example.com" },
                "to": [{ "email": "to@example.com" }],
                "subject": "DOCX ATTACHED: DS-160 Submission - Client",
                "htmlContent": "<p>attached</p>",
                "attachment": [{ "content": "UEsDBA==", "name": "DS-160_Submission_1.docx" }]
            })
        );
    }

    #[test]
    fn test_attachment_base64_roundtrip() {
        let email = sample_email();
        let decoded = BASE64.decode(email.attachment.encoded()).unwrap();
        assert_eq!(decoded, email.attachment.data);
    }
}
