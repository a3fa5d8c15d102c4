pub mod errors;
pub mod db;
pub mod movie;

#[cfg(test)]
mod tests;
