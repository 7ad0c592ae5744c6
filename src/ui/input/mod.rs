//! Input handling for interactive widgets.

pub mod slider_input_handler;
