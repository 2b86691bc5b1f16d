pub mod console_interface;
pub mod core;
pub mod models;
pub mod session;
pub mod state_graph;
