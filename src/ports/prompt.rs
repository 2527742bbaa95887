//! Prompter port for human-in-the-loop input.

/// Asks the human operator for a line of input.
///
/// Used where a command cannot proceed without a decision only the
/// operator can make: picking among same-named accounts, or supplying a
/// password not given as a flag.
pub trait Prompter: Send + Sync {
    /// Displays `prompt` and returns the operator's answer, trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error when input cannot be read (e.g. stdin closed).
    fn ask(&self, prompt: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
