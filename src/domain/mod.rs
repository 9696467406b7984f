pub mod feed;
pub mod users;

#[cfg(test)]
pub(crate) mod test_db;
