mod common;
mod condition_properties;
