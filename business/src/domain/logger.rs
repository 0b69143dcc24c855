/// Logging port used by every use case.
///
/// Messages are plain strings; adapters decide on targets and formatting.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
