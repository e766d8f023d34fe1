pub mod window_host;
