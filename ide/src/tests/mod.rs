#[cfg(test)]
mod common;
#[cfg(test)]
mod test_highlight;
#[cfg(test)]
mod test_structure;
#[cfg(test)]
mod test_typing;
