//! Session Manager (SMF): PDU session lifecycle, IP address management, and
//! the N4 control relationship with a UPF (§4.6).

pub mod clients;
pub mod config;
pub mod error;
pub mod http;
pub mod ipam;
pub mod model;
pub mod pfcp_client;
pub mod procedures;
pub mod store;
