pub mod keygen;
pub mod login;
pub mod notes;
pub mod password;
