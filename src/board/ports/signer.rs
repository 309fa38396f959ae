//! Signing port for realtime channel tokens.

/// Produces signed, time-stamped tokens for the realtime channel.
#[cfg_attr(test, mockall::automock)]
pub trait ChannelSigner: Send + Sync {
    /// Signs `value`, returning a token that embeds it.
    fn sign(&self, value: &str) -> String;
}
