
/// Register file tests.
pub mod register_file;
