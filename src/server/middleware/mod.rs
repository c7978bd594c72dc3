pub mod auth;
pub mod upload;

#[cfg(test)]
mod test;
