#![allow(clippy::len_without_is_empty)]
#![allow(clippy::new_without_default)]

#[macro_use]
mod util;

mod config_path;
mod encoding;
mod error;
mod options;
mod parser;
mod token;
mod tokenizer;
mod value;
mod writer;


pub use {
    config_path::*, encoding::*, error::*, options::*, parser::*, token::*, tokenizer::Tokenizer,
    value::*, writer::*,
};
