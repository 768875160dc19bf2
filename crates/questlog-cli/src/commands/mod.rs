pub mod add;
pub mod init;
pub mod list;
pub mod record;
pub mod score;
