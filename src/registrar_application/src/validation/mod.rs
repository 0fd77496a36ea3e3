pub mod user_validator_impl;
