pub mod friend;
