pub mod errors;
pub mod db;
pub mod topic;
pub mod question;
pub mod question_option;
pub mod stat;

#[cfg(test)]
mod tests;
