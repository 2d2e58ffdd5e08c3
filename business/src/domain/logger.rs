/// Logging port for the business layer.
///
/// Use cases log through this trait so the domain never depends on a
/// concrete logging backend.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
