pub mod auth;
pub mod headers;
pub mod role;
pub mod session;

#[cfg(test)]
mod test;
