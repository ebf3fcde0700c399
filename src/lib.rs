//! # seamap
//!
//! A parser for VIOS `lssea` report logs.
//!
//! Reads the semi-structured text reports produced by a virtualization
//! host's `lssea` command, recovers each host's Shared Ethernet Adapter
//! topology (SEA, etherchannel group, real and virtual adapters), and
//! renders the result as JSON and as a box-and-line text diagram.

pub mod lssea;
