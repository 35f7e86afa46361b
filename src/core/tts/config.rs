//! Configuration for the speech-synthesis client

/// Default speech model
pub const DEFAULT_TTS_MODEL: &str = "tts-1";

/// Default voice identifier
pub const DEFAULT_TTS_VOICE: &str = "alloy";

/// Default output audio format
pub const DEFAULT_TTS_FORMAT: &str = "mp3";

/// Static configuration for speech synthesis requests
///
/// All fields except the input text are fixed at startup.
#[derive(Debug, Clone)]
pub struct TtsConfig {
    /// Base URL of the OpenAI-compatible API (no trailing `/audio/speech`)
    pub base_url: String,
    /// Bearer token for the API
    pub api_key: String,
    /// Model identifier (e.g. "tts-1", "tts-1-hd")
    pub model: String,
    /// Voice identifier (e.g. "alloy", "nova")
    pub voice: String,
    /// Output audio format (mp3, opus, aac, flac, wav, pcm)
    pub response_format: String,
}
