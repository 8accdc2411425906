//! Application runtime: picks and starts an execution mode

pub mod modes;
