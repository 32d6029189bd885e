pub mod base;
pub mod configs;
pub mod openai;

#[cfg(test)]
pub mod mock;
