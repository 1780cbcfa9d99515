//! Domain layer: the wizard session and its guards, the mock link format,
//! risk disclosure selection, trading statistics and the ports the
//! application layer injects.

pub mod context;
pub mod i18n;
pub mod link;
pub mod ports;
pub mod risk;
pub mod trading;
pub mod wizard;
