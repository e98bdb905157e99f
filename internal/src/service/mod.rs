pub mod command_dispatcher_service;
