/// Port for user-facing progress and warnings.
pub trait Reporter {
    fn info(&self, message: &str);

    fn warn(&self, message: &str);
}
