pub mod add;
pub mod calculator;
pub mod del;
pub mod export;
pub mod logic;
pub mod rules;
pub mod validate;
