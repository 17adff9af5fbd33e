pub mod error;
pub mod validation;
pub mod model;
pub mod db;
pub mod transfer;
pub mod cli;
