//! Gemini API client for the prompt relay.
//!
//! This crate provides the single outbound seam of the relay:
//!
//! - [`GeminiClient`] — one-shot `generateContent` calls over HTTP
//! - [`RawCompletion`] — upstream status plus the unparsed response body
//! - [`candidate_text`] — safe lookup of the first candidate's text
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use relay_llm::{candidate_text, GeminiClient};
//!
//! let client = GeminiClient::new("secret-key", None);
//! let completion = client.generate("Hello!").await?;
//! let parsed: serde_json::Value = serde_json::from_str(&completion.body)?;
//! let text = candidate_text(&parsed).unwrap_or_else(|| parsed.to_string());
//! ```

mod gemini;

pub use gemini::{candidate_text, GeminiClient, RawCompletion};
