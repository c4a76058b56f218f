#![allow(dead_code)]

pub mod pbs_server;
