mod fake_compiler;
mod fake_environment;
mod recording_reporter;

pub use fake_compiler::FakeCompiler;
pub use fake_environment::FakeEnvironment;
pub use recording_reporter::RecordingReporter;
