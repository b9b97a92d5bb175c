pub mod list_server;
