//! Envelope-encrypted settings
//!
//! A value written as `kms:<base64 ciphertext>` is decrypted by a key service;
//! anything else is used as-is.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::Write;
use std::process::{Command, Stdio};

use crate::io::configuration::ENVELOPE_PREFIX;
use crate::io::error::{GraphArtError, Result};

/// Managed key service able to decrypt envelope ciphertext
pub trait KeyService {
    /// Plaintext bytes for a ciphertext blob
    ///
    /// # Errors
    ///
    /// Returns a description of the failure
    fn decrypt(&self, ciphertext: &[u8]) -> std::result::Result<Vec<u8>, String>;
}

/// Resolve a raw setting, decrypting it when it carries the envelope prefix
///
/// # Errors
///
/// Returns a decryption error naming `key` if the ciphertext is not base64,
/// the key service fails, or the plaintext is not text
pub fn reveal(key: &'static str, value: &str, keys: &dyn KeyService) -> Result<String> {
    let Some(encrypted) = value.strip_prefix(ENVELOPE_PREFIX) else {
        return Ok(value.to_string());
    };

    let decryption_error = |reason: String| GraphArtError::Decryption { key, reason };

    let ciphertext = STANDARD
        .decode(encrypted.trim())
        .map_err(|e| decryption_error(format!("ciphertext is not base64: {e}")))?;
    let plaintext = keys.decrypt(&ciphertext).map_err(decryption_error)?;

    String::from_utf8(plaintext).map_err(|e| decryption_error(format!("plaintext is not text: {e}")))
}

/// AWS KMS through the `aws` command line tool
#[derive(Debug, Clone)]
pub struct AwsCliKeyService {
    program: String,
}

impl Default for AwsCliKeyService {
    fn default() -> Self {
        Self::new("aws")
    }
}

impl AwsCliKeyService {
    /// Use the given `aws` executable
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl KeyService for AwsCliKeyService {
    fn decrypt(&self, ciphertext: &[u8]) -> std::result::Result<Vec<u8>, String> {
        let mut child = Command::new(&self.program)
            .args([
                "kms",
                "decrypt",
                "--ciphertext-blob",
                "fileb:///dev/stdin",
                "--query",
                "Plaintext",
                "--output",
                "text",
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| format!("failed to start {}: {e}", self.program))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(ciphertext)
                .map_err(|e| format!("failed to send ciphertext: {e}"))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| format!("failed to wait for {}: {e}", self.program))?;
        if !output.status.success() {
            return Err(String::from_utf8_lossy(&output.stderr).trim().to_string());
        }

        // The CLI prints the plaintext base64 encoded
        let encoded = String::from_utf8_lossy(&output.stdout);
        STANDARD
            .decode(encoded.trim())
            .map_err(|e| format!("unexpected key service output: {e}"))
    }
}
