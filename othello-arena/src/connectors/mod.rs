//! Connectors let asynchronous sources outside the process play a match.

mod connector;
mod stdin;

pub use connector::{Connector, ConnectorAgent};
pub use stdin::StdinConnector;
