//! Main module for doc comment tokenization

pub mod formats;
pub mod processor;
pub mod token;
pub mod tokenizer;
