//! Networking for the collaborators that talk to the server.
//!
//! SYSTEM CONTEXT
//! ==============
//! The selector never touches the network; its state reaches the server
//! through normal form submission. Only the report-link email flow posts.

pub mod email;
