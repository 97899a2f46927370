pub mod ack;
pub mod pagination;
pub mod response;
