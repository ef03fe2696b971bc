pub mod buttons;
pub mod help;
pub mod root;
pub mod status;
