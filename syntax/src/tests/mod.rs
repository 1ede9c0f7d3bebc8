#[cfg(test)]
mod common;
#[cfg(test)]
mod test_edits;
#[cfg(test)]
mod test_lexer;
#[cfg(test)]
mod test_parser;
