mod client_addr;
mod error;
