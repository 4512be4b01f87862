//! Congratulatory ticket messages. Generation is optional and never fails: every error degrades to a fixed fallback.

mod gemini;

pub use gemini::GeminiGenerator;

use crate::config::GeminiSettings;
use async_trait::async_trait;
use std::sync::Arc;

pub const FALLBACK_NO_CREDENTIAL: &str = "Selamat belajar! Semangat PDB!";
pub const FALLBACK_SERVICE_ERROR: &str = "Semangat mengejar ilmu!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    MissingCredential,
    ServiceError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketMessage {
    Generated(String),
    Fallback { reason: FallbackReason, text: &'static str },
}

impl TicketMessage {
    pub fn fallback(reason: FallbackReason) -> Self {
        let text = match reason {
            FallbackReason::MissingCredential => FALLBACK_NO_CREDENTIAL,
            FallbackReason::ServiceError(_) => FALLBACK_SERVICE_ERROR,
        };
        TicketMessage::Fallback { reason, text }
    }

    pub fn text(&self) -> &str {
        match self {
            TicketMessage::Generated(text) => text,
            TicketMessage::Fallback { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            TicketMessage::Generated(text) => text,
            TicketMessage::Fallback { text, .. } => text.to_string(),
        }
    }
}

#[async_trait]
pub trait MessageGenerator: Send + Sync {
    async fn ticket_message(&self, student_name: &str, pdb_class: &str, room_name: &str) -> TicketMessage;
}

/// Used when no credential is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGenerator;

#[async_trait]
impl MessageGenerator for DisabledGenerator {
    async fn ticket_message(&self, _student_name: &str, _pdb_class: &str, _room_name: &str) -> TicketMessage {
        TicketMessage::fallback(FallbackReason::MissingCredential)
    }
}

/// Gemini when an API key is set and its client builds, otherwise the disabled generator.
pub fn from_settings(settings: &GeminiSettings) -> Arc<dyn MessageGenerator> {
    let Some(key) = &settings.api_key else {
        tracing::warn!("GEMINI_API_KEY is not set; ticket messages will use the fallback text");
        return Arc::new(DisabledGenerator);
    };
    match GeminiGenerator::new(key.clone(), settings.model.clone(), settings.base_url.clone(), settings.timeout) {
        Ok(generator) => {
            tracing::info!(model = %settings.model, "ticket messages use Gemini");
            Arc::new(generator)
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to build Gemini client; ticket messages will use the fallback text");
            Arc::new(DisabledGenerator)
        }
    }
}

pub fn prompt(student_name: &str, pdb_class: &str, room_name: &str) -> String {
    format!(
        "Buatkan pesan motivasi singkat (maksimal 15 kata) yang unik dan semangat untuk mahasiswa bernama {} \
         dari kelas {} yang akan mengikuti kuliah pengganti di ruang {} Gedung Nano Lantai 8.\n\
         Gunakan bahasa Indonesia yang gaul tapi sopan.",
        student_name, pdb_class, room_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_generator_returns_credential_fallback() {
        let msg = DisabledGenerator.ticket_message("Sari", "PDB-A", "Lab 8.01").await;
        assert_eq!(msg.text(), FALLBACK_NO_CREDENTIAL);
        assert!(matches!(
            msg,
            TicketMessage::Fallback { reason: FallbackReason::MissingCredential, .. }
        ));
    }

    #[tokio::test]
    async fn settings_without_key_build_disabled_generator() {
        let generator = from_settings(&GeminiSettings::default());
        let text = generator.ticket_message("Sari", "PDB-A", "Lab").await.into_text();
        assert_eq!(text, FALLBACK_NO_CREDENTIAL);
    }

    #[tokio::test]
    async fn settings_with_key_build_gemini_generator() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let settings = GeminiSettings {
            api_key: Some("key".into()),
            base_url: format!("http://{}", addr),
            ..GeminiSettings::default()
        };
        let msg = from_settings(&settings).ticket_message("Sari", "PDB-A", "Lab").await;
        assert!(matches!(
            msg,
            TicketMessage::Fallback { reason: FallbackReason::ServiceError(_), .. }
        ));
    }

    #[test]
    fn prompt_names_student_class_and_room() {
        let p = prompt("Sari", "PDB-A", "Lab 8.01");
        assert!(p.contains("bernama Sari"));
        assert!(p.contains("kelas PDB-A"));
        assert!(p.contains("ruang Lab 8.01"));
    }

    #[test]
    fn service_error_uses_second_fallback() {
        let msg = TicketMessage::fallback(FallbackReason::ServiceError("timeout".into()));
        assert_eq!(msg.text(), FALLBACK_SERVICE_ERROR);
    }
}
