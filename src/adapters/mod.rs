pub mod console_reporter;
pub mod glslc_command;
pub mod system_environment;
