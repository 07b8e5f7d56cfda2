pub mod convert;
pub mod currencies;
pub mod form;
pub mod setup;
pub mod ui;
