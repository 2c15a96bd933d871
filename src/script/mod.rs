mod template;
mod writer;

#[cfg(test)]
mod tests;

pub use template::{SCRIPT_HEADER, ScriptTemplate};
pub use writer::{GeneratedScript, ScriptWriter};
