pub mod cli_controller;
pub mod render_request;
