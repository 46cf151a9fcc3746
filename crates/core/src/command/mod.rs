mod builder;
mod transform_command;

pub use builder::build_command;
pub use transform_command::TransformCommand;
