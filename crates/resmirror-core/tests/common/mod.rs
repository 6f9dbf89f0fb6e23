pub mod config_server;
