pub mod machine_output;
pub mod paths;
pub mod platform;
pub mod privilege;
pub mod process;
pub mod sanitize;
